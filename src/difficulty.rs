use crate::consts;
use enum_map::Enum;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

/// How fast the snake moves.  Chosen on the menu and fixed for the rest of the
/// session.
#[derive(Clone, Copy, Debug, Default, Deserialize, Enum, Eq, Hash, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Width of the longest difficulty name
    pub(crate) const DISPLAY_WIDTH: u16 = 6;

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Time between movements of the snake
    pub(crate) fn tick_period(self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_millis(300),
            Difficulty::Medium => Duration::from_millis(200),
            Difficulty::Hard => Duration::from_millis(100),
        }
    }

    /// Time between drifts of the food
    pub(crate) fn food_period(self) -> Duration {
        self.tick_period() * consts::FOOD_PERIOD_TENTHS / 10
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::EnumExt;
    use rstest::rstest;

    #[rstest]
    #[case(Difficulty::Easy, 300, 510)]
    #[case(Difficulty::Medium, 200, 340)]
    #[case(Difficulty::Hard, 100, 170)]
    fn test_periods(#[case] difficulty: Difficulty, #[case] tick_ms: u64, #[case] food_ms: u64) {
        assert_eq!(difficulty.tick_period(), Duration::from_millis(tick_ms));
        assert_eq!(difficulty.food_period(), Duration::from_millis(food_ms));
    }

    #[test]
    fn display_width() {
        let actual_width = Difficulty::iter()
            .map(|d| d.as_str().chars().count())
            .max()
            .unwrap();
        assert_eq!(actual_width, usize::from(Difficulty::DISPLAY_WIDTH));
    }

    #[test]
    fn fmt_width() {
        assert_eq!(format!("{:6}|", Difficulty::Hard), "Hard  |");
    }
}
