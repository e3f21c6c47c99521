//! Desktop preview app for daylight-composer scenes
//!
//! Shows the day/night light and the day clock in a window. Buttons post
//! commands through the scene mailbox, the same way a game UI would.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use daylight_composer::{
    CommandMailbox, CommandPoster, DayNightConfig, DayClockConfig, Duration, Instant,
    InvalidDuration, LightState, Quat, Scene, SceneCommand, SceneConfig, SceneFrame, Vec3,
};

/// Command mailbox size
const COMMAND_QUEUE_SIZE: usize = 8;

/// Intensity that maps to the raw light colour on screen
const FULL_INTENSITY: f32 = 2.0;

/// Side length of the light swatch in pixels
const SWATCH_SIZE: f32 = 160.0;

/// Radius of the sun dial in pixels
const DIAL_RADIUS: f32 = 70.0;

/// Static mailbox shared between the UI and the scene
static COMMANDS: CommandMailbox<COMMAND_QUEUE_SIZE> = CommandMailbox::new();

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 480.0])
            .with_title("Daylight Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "daylight-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()?))),
    )
}

/// Shorter timings than the defaults so a full cycle fits in a minute
fn preview_config() -> SceneConfig {
    SceneConfig {
        cycle: DayNightConfig {
            transition: Duration::from_secs(5),
            popup: Duration::from_secs(3),
            day_hold: Duration::from_secs(20),
            ..DayNightConfig::default()
        },
        clock: DayClockConfig {
            day_length: Duration::from_secs(30),
            ..DayClockConfig::default()
        },
    }
}

struct PreviewApp {
    scene: Scene<'static, COMMAND_QUEUE_SIZE>,
    commands: CommandPoster<'static, COMMAND_QUEUE_SIZE>,
    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// Last few events, newest last
    log: Vec<String>,
}

impl PreviewApp {
    fn new() -> Result<Self, InvalidDuration> {
        Ok(Self {
            scene: Scene::new(COMMANDS.collector(), &preview_config())?,
            commands: COMMANDS.poster(),
            t_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            log: Vec::new(),
        })
    }

    fn send(&mut self, command: SceneCommand) {
        if self.commands.post(command).is_err() {
            self.push_log(format!("dropped {command:?}: mailbox full"));
        }
    }

    fn push_log(&mut self, line: String) {
        const MAX_LOG_LINES: usize = 12;
        self.log.push(line);
        if self.log.len() > MAX_LOG_LINES {
            self.log.remove(0);
        }
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = if delta_ms.is_finite() {
                delta_ms.max(0.0) as u64
            } else {
                0
            };
            self.t_ms = self.t_ms.saturating_add(delta_ms);
        }
    }

    fn record_events(&mut self, frame: &SceneFrame) {
        let secs = self.t_ms / 1000;
        for event in &frame.cycle.events {
            self.push_log(format!("{secs:>5}s cycle {event:?}"));
        }
        for event in &frame.clock.events {
            self.push_log(format!("{secs:>5}s clock {event:?}"));
        }
    }
}

fn to_color32(light: &LightState) -> egui::Color32 {
    let color = light.display_color(FULL_INTENSITY);
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

/// Direction the light points, projected onto the Y/Z plane of the dial
fn dial_direction(rotation: Quat) -> egui::Vec2 {
    let forward = rotation.rotate(Vec3::FORWARD);
    egui::vec2(forward.z, -forward.y)
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();

        let frame = self.scene.render(Instant::from_millis(self.t_ms));
        self.record_events(&frame);

        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Start Day/Night").clicked() {
                    self.send(SceneCommand::StartDayNightCycle);
                }
                if ui.button("Cancel").clicked() {
                    self.send(SceneCommand::CancelDayNightCycle);
                }
                if ui.button("Start Day Clock").clicked() {
                    self.send(SceneCommand::StartDayClock);
                }

                ui.add_space(16.0);

                if ui
                    .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                    .clicked()
                {
                    self.playing = !self.playing;
                }
                ui.label("Speed:");
                ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=20.0).logarithmic(true));
            });

            ui.add_space(8.0);
            let secs = self.t_ms / 1000;
            let ms = self.t_ms % 1000;
            ui.label(format!("Time: {secs}.{ms:03}s"));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                // <CyclePanel>
                ui.vertical(|ui| {
                    let cycle = &frame.cycle;
                    ui.label(format!("Phase: {:?}", cycle.phase));
                    ui.label(format!("Intensity: {:.2}", cycle.light.intensity));
                    ui.label(if cycle.popup_visible {
                        format!("Popup: {}", cycle.label)
                    } else {
                        format!("Caption: {}", cycle.label)
                    });

                    let (response, painter) = ui.allocate_painter(
                        egui::vec2(SWATCH_SIZE, SWATCH_SIZE),
                        egui::Sense::hover(),
                    );
                    painter.rect_filled(response.rect, 6.0, to_color32(&cycle.light));

                    let center = response.rect.center();
                    let tip = center + dial_direction(cycle.light.rotation) * (SWATCH_SIZE * 0.4);
                    painter.line_segment(
                        [center, tip],
                        egui::Stroke::new(2.0, egui::Color32::BLACK),
                    );
                });
                // </CyclePanel>
                ui.add_space(24.0);
                // <ClockPanel>
                ui.vertical(|ui| {
                    let clock = &frame.clock;
                    ui.label(format!("Day: {}", clock.day));
                    ui.label(format!("Time of day: {:.0}%", clock.time_of_day * 100.0));
                    if let Some(label) = clock.popup {
                        ui.heading(label.to_string());
                    }

                    let (response, painter) = ui.allocate_painter(
                        egui::vec2(DIAL_RADIUS * 2.0, DIAL_RADIUS * 2.0),
                        egui::Sense::hover(),
                    );
                    let center = response.rect.center();
                    painter.circle_stroke(
                        center,
                        DIAL_RADIUS,
                        egui::Stroke::new(1.0, egui::Color32::GRAY),
                    );
                    let sun = center + dial_direction(clock.sun_rotation) * DIAL_RADIUS;
                    painter.circle_filled(sun, 8.0, egui::Color32::YELLOW);
                });
                // </ClockPanel>
            });

            ui.add_space(12.0);
            ui.separator();
            for line in &self.log {
                ui.monospace(line);
            }
        });
    }
}
