use crate::consts;
use enum_map::Enum;
use ratatui::layout::{Flex, Layout, Rect, Size};

/// Iteration and cycling over the variants of a fieldless enum
pub(crate) trait EnumExt: Enum + Sized {
    fn iter() -> impl Iterator<Item = Self> {
        (0..Self::LENGTH).map(Self::from_usize)
    }

    /// Return the following variant, wrapping around to the first
    fn cycle_next(self) -> Self {
        Self::from_usize((self.into_usize() + 1) % Self::LENGTH)
    }

    /// Return the preceding variant, wrapping around to the last
    fn cycle_prev(self) -> Self {
        Self::from_usize((self.into_usize() + Self::LENGTH - 1) % Self::LENGTH)
    }
}

impl<T: Enum> EnumExt for T {}

pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}

/// Return a rectangle of the given size centered within `area`, shrunk to fit
/// if necessary
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [area] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(area);
    area
}
