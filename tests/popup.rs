mod tests {
    use embassy_time::{Duration, Instant};
    use daylight_composer::{DayLabel, Popup, PopupChange};

    #[test]
    fn test_show_and_expire() {
        let mut popup = Popup::new(Duration::from_secs(3));
        assert_eq!(popup.visible(), None);
        assert_eq!(popup.tick(Instant::from_secs(0)), None);

        assert_eq!(
            popup.show(Instant::from_secs(0), DayLabel::Counter(1)),
            PopupChange::Shown(DayLabel::Counter(1))
        );
        assert_eq!(popup.tick(Instant::from_millis(2_999)), None);
        assert_eq!(
            popup.tick(Instant::from_secs(3)),
            Some(PopupChange::Hidden(DayLabel::Counter(1)))
        );
        assert_eq!(popup.visible(), None);
    }

    #[test]
    fn test_replace_restarts_timer() {
        let mut popup = Popup::new(Duration::from_secs(3));
        let _ = popup.show(Instant::from_secs(0), DayLabel::Counter(1));

        assert_eq!(
            popup.show(Instant::from_secs(2), DayLabel::Counter(2)),
            PopupChange::Replaced(DayLabel::Counter(2))
        );
        assert_eq!(popup.tick(Instant::from_secs(3)), None);
        assert_eq!(popup.visible(), Some(DayLabel::Counter(2)));

        assert_eq!(
            popup.tick(Instant::from_secs(5)),
            Some(PopupChange::Hidden(DayLabel::Counter(2)))
        );
        assert_eq!(popup.tick(Instant::from_secs(6)), None);
    }

    #[test]
    fn test_show_after_hidden_is_fresh() {
        let mut popup = Popup::new(Duration::from_secs(1));
        let _ = popup.show(Instant::from_secs(0), DayLabel::PressStart);
        let _ = popup.tick(Instant::from_secs(1));

        assert_eq!(
            popup.show(Instant::from_secs(2), DayLabel::Day(1)),
            PopupChange::Shown(DayLabel::Day(1))
        );
        assert_eq!(popup.visible().map(|label| label.to_string()).as_deref(), Some("Day 1"));
    }
}
