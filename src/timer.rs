use std::time::{Duration, Instant};

/// Report whether at least `interval` has passed between `*last_fired` and
/// `now`.  If it has, `*last_fired` is set to `now`.
pub(crate) fn event_triggered(interval: Duration, last_fired: &mut Instant, now: Instant) -> bool {
    if now.saturating_duration_since(*last_fired) >= interval {
        *last_fired = now;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Duration::from_millis(200), Duration::ZERO, false)]
    #[case(Duration::from_millis(200), Duration::from_millis(199), false)]
    #[case(Duration::from_millis(200), Duration::from_millis(200), true)]
    #[case(Duration::from_millis(200), Duration::from_millis(450), true)]
    #[case(Duration::ZERO, Duration::ZERO, true)]
    fn test_event_triggered(
        #[case] interval: Duration,
        #[case] elapsed: Duration,
        #[case] fired: bool,
    ) {
        let start = Instant::now();
        let mut last = start;
        let now = start + elapsed;
        assert_eq!(event_triggered(interval, &mut last, now), fired);
        if fired {
            assert_eq!(last, now);
        } else {
            assert_eq!(last, start);
        }
    }

    #[test]
    fn measures_from_last_firing() {
        let interval = Duration::from_millis(100);
        let start = Instant::now();
        let mut last = start;
        assert!(event_triggered(interval, &mut last, start + Duration::from_millis(130)));
        assert!(!event_triggered(interval, &mut last, start + Duration::from_millis(200)));
        assert!(event_triggered(interval, &mut last, start + Duration::from_millis(230)));
    }

    #[test]
    fn clock_going_backwards_does_not_fire() {
        let interval = Duration::from_millis(100);
        let start = Instant::now() + Duration::from_secs(1);
        let mut last = start;
        assert!(!event_triggered(interval, &mut last, start - Duration::from_millis(500)));
        assert_eq!(last, start);
    }
}
