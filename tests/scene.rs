mod tests {
    use embassy_time::{Duration, Instant};
    use daylight_composer::frame_scheduler::DEFAULT_FRAME_DURATION;
    use daylight_composer::mailbox::MailboxFull;
    use daylight_composer::{
        ClockEvent, CommandMailbox, CycleEvent, CyclePhase, DayLabel, FrameScheduler, Scene,
        SceneCommand, SceneConfig, SceneFrame, SceneOutput,
    };

    #[derive(Default)]
    struct RecordingOutput {
        frames: usize,
        last_phase: Option<CyclePhase>,
    }

    impl SceneOutput for RecordingOutput {
        fn apply(&mut self, frame: &SceneFrame) {
            self.frames += 1;
            self.last_phase = Some(frame.cycle.phase);
        }
    }

    #[test]
    fn test_mailbox_full() {
        let mailbox: CommandMailbox<2> = CommandMailbox::new();
        let poster = mailbox.poster();
        assert!(poster.post(SceneCommand::StartDayClock).is_ok());
        assert!(poster.post(SceneCommand::StartDayClock).is_ok());
        assert_eq!(
            poster.post(SceneCommand::StartDayNightCycle),
            Err(MailboxFull(SceneCommand::StartDayNightCycle))
        );
        assert_eq!(mailbox.len(), 2);

        let collector = mailbox.collector();
        assert_eq!(collector.drain().count(), 2);
        assert!(mailbox.is_empty());
    }

    #[test]
    fn test_commands_applied_on_render() {
        let mailbox: CommandMailbox<4> = CommandMailbox::new();
        let mut scene = Scene::new(mailbox.collector(), &SceneConfig::default()).unwrap();

        let frame = scene.render(Instant::from_secs(0));
        assert_eq!(frame.cycle.phase, CyclePhase::Idle);

        let poster = mailbox.poster();
        poster.post(SceneCommand::StartDayNightCycle).unwrap();
        poster.post(SceneCommand::StartDayClock).unwrap();

        let frame = scene.render(Instant::from_secs(1));
        assert_eq!(frame.cycle.phase, CyclePhase::Dawn);
        assert_eq!(frame.cycle.events.as_slice(), &[CycleEvent::DayStarted(1)]);
        assert_eq!(frame.clock.events.as_slice(), &[ClockEvent::Started(1)]);
        assert!(mailbox.is_empty());

        poster.post(SceneCommand::CancelDayNightCycle).unwrap();
        let frame = scene.render(Instant::from_secs(2));
        assert_eq!(frame.cycle.phase, CyclePhase::Idle);
        assert!(scene.clock().is_active());
    }

    #[test]
    fn test_repeated_starts_in_one_frame() {
        let mailbox: CommandMailbox<8> = CommandMailbox::new();
        let mut scene = Scene::new(mailbox.collector(), &SceneConfig::default()).unwrap();

        let poster = mailbox.poster();
        for _ in 0..6 {
            poster.post(SceneCommand::StartDayNightCycle).unwrap();
        }

        let frame = scene.render(Instant::from_secs(1));
        assert_eq!(frame.cycle.phase, CyclePhase::Dawn);
        assert_eq!(frame.cycle.label, DayLabel::Day(6));
        assert_eq!(
            frame.cycle.events.as_slice(),
            &[CycleEvent::Restarted, CycleEvent::DayStarted(6)]
        );
        assert_eq!(scene.cycle().day_count(), 6);
    }

    #[test]
    fn test_scheduler_paces_frames() {
        let mailbox: CommandMailbox<4> = CommandMailbox::new();
        let scene = Scene::new(mailbox.collector(), &SceneConfig::default()).unwrap();
        let mut scheduler = FrameScheduler::new(scene, RecordingOutput::default());

        let start = Instant::from_secs(1);
        let result = scheduler.tick(start);
        assert_eq!(result.next_deadline, start + DEFAULT_FRAME_DURATION);
        assert_eq!(result.sleep_duration, DEFAULT_FRAME_DURATION);

        let late = start + DEFAULT_FRAME_DURATION + Duration::from_millis(4);
        let result = scheduler.tick(late);
        assert_eq!(
            result.next_deadline,
            start + DEFAULT_FRAME_DURATION + DEFAULT_FRAME_DURATION
        );
        assert_eq!(
            result.sleep_duration,
            DEFAULT_FRAME_DURATION - Duration::from_millis(4)
        );

        assert_eq!(scheduler.output().frames, 2);
        assert_eq!(scheduler.output().last_phase, Some(CyclePhase::Idle));
    }

    #[test]
    fn test_scheduler_resets_after_stall() {
        let mailbox: CommandMailbox<4> = CommandMailbox::new();
        let scene = Scene::new(mailbox.collector(), &SceneConfig::default()).unwrap();
        let mut scheduler = FrameScheduler::new(scene, RecordingOutput::default());

        let _ = scheduler.tick(Instant::from_secs(0));
        let stalled = Instant::from_secs(5);
        let result = scheduler.tick(stalled);
        assert_eq!(result.next_deadline, stalled + DEFAULT_FRAME_DURATION);
        assert_eq!(result.sleep_duration, DEFAULT_FRAME_DURATION);
    }
}
