mod tests {
    use embassy_time::{Duration, Instant};
    use daylight_composer::{
        ClockEvent, DayClock, DayClockConfig, DayLabel, InvalidDuration, Quat,
    };

    fn clock() -> DayClock {
        DayClock::new(DayClockConfig {
            day_length: Duration::from_secs(60),
            ..DayClockConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_zero_day_length_rejected() {
        let config = DayClockConfig {
            day_length: Duration::from_ticks(0),
            ..DayClockConfig::default()
        };
        assert_eq!(DayClock::new(config).err(), Some(InvalidDuration));
    }

    #[test]
    fn test_inactive_clock_does_not_advance() {
        let mut clock = clock();
        let frame = clock.tick(Instant::from_secs(90));
        assert_eq!(frame.day, 1);
        assert_eq!(frame.time_of_day, 0.0);
        assert_eq!(frame.sun_rotation, Quat::IDENTITY);
        assert!(frame.popup.is_none());
        assert!(frame.events.is_empty());
    }

    #[test]
    fn test_start_once() {
        let mut clock = clock();
        assert!(clock.start(Instant::from_secs(0)));
        assert!(!clock.start(Instant::from_secs(1)));
        assert!(clock.is_active());

        let frame = clock.tick(Instant::from_secs(1));
        assert_eq!(frame.events.as_slice(), &[ClockEvent::Started(1)]);
        assert_eq!(frame.popup, Some(DayLabel::Counter(1)));
        assert_eq!(DayLabel::Counter(1).to_string(), "Day: 1");
    }

    #[test]
    fn test_popup_hides_after_duration() {
        let mut clock = clock();
        clock.start(Instant::from_secs(0));
        let _ = clock.tick(Instant::from_secs(0));

        let frame = clock.tick(Instant::from_millis(2_999));
        assert!(frame.popup.is_some());

        let frame = clock.tick(Instant::from_secs(3));
        assert!(frame.popup.is_none());
        assert_eq!(frame.events.as_slice(), &[ClockEvent::PopupHidden(1)]);
    }

    #[test]
    fn test_sun_rotates_through_the_day() {
        let mut clock = clock();
        clock.start(Instant::from_secs(0));

        let frame = clock.tick(Instant::from_secs(30));
        assert_eq!(frame.time_of_day, 0.5);
        assert!((frame.sun_rotation.angle_to(Quat::IDENTITY) - 180.0).abs() < 0.1);

        let frame = clock.tick(Instant::from_secs(45));
        assert_eq!(frame.time_of_day, 0.75);
    }

    #[test]
    fn test_day_wraps() {
        let mut clock = clock();
        clock.start(Instant::from_secs(0));
        let _ = clock.tick(Instant::from_secs(10));

        let frame = clock.tick(Instant::from_secs(60));
        assert_eq!(frame.day, 2);
        assert_eq!(frame.time_of_day, 0.0);
        assert_eq!(frame.popup, Some(DayLabel::Counter(2)));
        assert_eq!(frame.events.as_slice(), &[ClockEvent::NewDay(2)]);

        let frame = clock.tick(Instant::from_secs(63));
        assert_eq!(frame.events.as_slice(), &[ClockEvent::PopupHidden(2)]);
    }

    #[test]
    fn test_popup_replaced_while_visible() {
        let mut clock = DayClock::new(DayClockConfig {
            day_length: Duration::from_secs(2),
            popup: Duration::from_secs(3),
            ..DayClockConfig::default()
        })
        .unwrap();
        clock.start(Instant::from_secs(0));
        let _ = clock.tick(Instant::from_secs(1));

        let frame = clock.tick(Instant::from_secs(2));
        assert_eq!(frame.day, 2);
        assert_eq!(frame.popup, Some(DayLabel::Counter(2)));
        assert_eq!(frame.events.as_slice(), &[ClockEvent::NewDay(2)]);

        // day 1's caption would have expired here
        let frame = clock.tick(Instant::from_secs(3));
        assert_eq!(frame.popup, Some(DayLabel::Counter(2)));
        assert!(frame.events.is_empty());
    }

    #[test]
    fn test_long_stall_skips_days() {
        let mut clock = clock();
        clock.start(Instant::from_secs(0));

        let frame = clock.tick(Instant::from_secs(3 * 60 + 15));
        assert_eq!(frame.day, 4);
        assert_eq!(frame.time_of_day, 0.25);
        assert_eq!(
            frame.events.as_slice(),
            &[ClockEvent::Started(1), ClockEvent::NewDay(4)]
        );
    }
}
