//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Number of cells along each side of the (square) board
pub(crate) const CELL_COUNT: i32 = 25;

/// Width in terminal columns of a single board cell.  Terminal cells are
/// roughly twice as tall as they are wide, so each board cell is drawn with
/// two columns.
pub(crate) const CELL_WIDTH: u16 = 2;

/// Time between redraws of the screen
pub(crate) const FRAME_PERIOD: Duration = Duration::from_micros(16_667);

/// The food drifts on its own clock, slower than the snake moves: the time
/// between drifts is this many tenths of the time between moves.
pub(crate) const FOOD_PERIOD_TENTHS: u32 = 17;

/// How many food items roam the board at once
pub(crate) const FOOD_COUNT: usize = 3;

/// The snake's body at the start of a session and after every crash, head
/// first
pub(crate) const INITIAL_SNAKE: [(i32, i32); 3] = [(6, 9), (5, 9), (4, 9)];

/// How many random cells to try when placing food before falling back to
/// choosing among all free cells
pub(crate) const PLACEMENT_ATTEMPTS: usize = 64;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 29,
};

/// Title shown at the top of the menu
pub(crate) const TITLE: &str = "MOVING-SNAKE";

/// Glyph for the snake's head
pub(crate) const SNAKE_HEAD_SYMBOL: &str = "▓▓";

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: &str = "██";

/// Glyph for a food item
pub(crate) const FOOD_SYMBOL: &str = "●";

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for the border around the board
pub(crate) const BOARD_STYLE: Style = Style::new().fg(Color::Blue);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the title on the menu screen
pub(crate) const TITLE_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Style for the currently-selected menu item
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);
