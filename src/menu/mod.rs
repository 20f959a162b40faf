mod widgets;
use self::widgets::{Instructions, StartHint};
use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::difficulty::Difficulty;
use crate::game::Game;
use crate::util::{get_display_area, EnumExt};
use crossterm::event::Event;
use enum_map::Enum;
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Widget,
    },
    Frame,
};

/// The screen for choosing a difficulty before play starts
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Menu {
    selection: Difficulty,
}

impl Menu {
    pub(crate) fn new(selection: Difficulty) -> Self {
        Menu { selection }
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    pub(crate) fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Quit | Command::Q | Command::Esc => return Some(Screen::Quit),
            Command::Up => self.selection = self.selection.cycle_prev(),
            Command::Down => self.selection = self.selection.cycle_next(),
            Command::Enter => return Some(Screen::Game(self.play())),
            Command::Left | Command::Right => (),
        }
        None
    }

    fn play(&self) -> Game {
        Game::new(self.selection)
    }
}

impl Widget for &Menu {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [title_area, instructions_area, choices_area, hint_area] = Layout::vertical([
            1,
            Instructions::HEIGHT,
            DifficultyList::HEIGHT,
            1,
        ])
        .flex(Flex::Start)
        .spacing(1)
        .areas(display);

        Line::styled(consts::TITLE, consts::TITLE_STYLE)
            .centered()
            .render(title_area, buf);

        let [instructions_area] = Layout::horizontal([Instructions::WIDTH])
            .flex(Flex::Center)
            .areas(instructions_area);
        Instructions.render(instructions_area, buf);

        let [choices_area] = Layout::horizontal([DifficultyList::WIDTH])
            .flex(Flex::Center)
            .areas(choices_area);
        DifficultyList {
            selection: self.selection,
        }
        .render(choices_area, buf);

        StartHint.render(hint_area, buf);
    }
}

/// A bordered list of the difficulties with the current one marked
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct DifficultyList {
    selection: Difficulty,
}

impl DifficultyList {
    #[allow(clippy::cast_possible_truncation)]
    const HEIGHT: u16 = (Difficulty::LENGTH as u16) + 2 /* for border */;
    const HORIZONTAL_PADDING: u16 = 1; // padding on each side
    const POINTER_WIDTH: u16 = 2;
    const NAME_PERIOD_GUTTER: u16 = 2;
    const PERIOD_WIDTH: u16 = 6;
    const WIDTH: u16 = 2 /* for border */ + 2 * Self::HORIZONTAL_PADDING + Self::POINTER_WIDTH + Difficulty::DISPLAY_WIDTH + Self::NAME_PERIOD_GUTTER + Self::PERIOD_WIDTH;
}

impl Widget for DifficultyList {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" Difficulty: ")
            .padding(Padding::horizontal(Self::HORIZONTAL_PADDING));
        let list_area = block.inner(area);
        block.render(area, buf);
        for (difficulty, row) in Difficulty::iter().zip(list_area.rows()) {
            let selected = difficulty == self.selection;
            let style = if selected {
                consts::MENU_SELECTION_STYLE
            } else {
                Style::new()
            };
            let s = format!(
                "{pointer:pwidth$}{difficulty:nwidth$}{space:gutter$}{ms:>3} ms",
                pointer = if selected { "»" } else { "" },
                pwidth = usize::from(Self::POINTER_WIDTH),
                nwidth = usize::from(Difficulty::DISPLAY_WIDTH),
                space = "",
                gutter = usize::from(Self::NAME_PERIOD_GUTTER),
                ms = difficulty.tick_period().as_millis(),
            );
            Span::styled(s, style).render(row, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    fn key(code: KeyCode) -> Event {
        Event::Key(code.into())
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn render_list() {
        let area = Rect::new(0, 0, DifficultyList::WIDTH, DifficultyList::HEIGHT);
        let mut buffer = Buffer::empty(area);
        DifficultyList {
            selection: Difficulty::Medium,
        }
        .render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "┌ Difficulty: ─────┐",
            "│   Easy    300 ms │",
            "│ » Medium  200 ms │",
            "│   Hard    100 ms │",
            "└──────────────────┘",
        ]);
        expected.set_style(Rect::new(2, 2, 16, 1), consts::MENU_SELECTION_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn render_menu() {
        let menu = Menu::new(Difficulty::Easy);
        let area = Rect::new(0, 0, 80, 29);
        let mut buffer = Buffer::empty(area);
        menu.render(area, &mut buffer);
        assert_eq!(row(&buffer, 0).trim_end(), format!("{:34}MOVING-SNAKE", ""));
        assert_eq!(buffer[(34, 0)].fg, consts::TITLE_STYLE.fg.unwrap());
        assert_eq!(
            row(&buffer, 2).trim_end(),
            format!("{:30}Move the snake with:", "")
        );
        assert_eq!(
            row(&buffer, 9).trim_end(),
            format!("{:30}┌ Difficulty: ─────┐", "")
        );
        assert_eq!(
            row(&buffer, 10).trim_end(),
            format!("{:30}│ » Easy    300 ms │", "")
        );
        assert_eq!(
            row(&buffer, 15).trim_end(),
            format!("{:24}Press Enter to play or q to quit", "")
        );
    }

    #[test]
    fn cycle_selection() {
        let mut menu = Menu::new(Difficulty::Easy);
        assert!(menu.handle_event(key(KeyCode::Down)).is_none());
        assert_eq!(menu.selection, Difficulty::Medium);
        assert!(menu.handle_event(key(KeyCode::Char('j'))).is_none());
        assert_eq!(menu.selection, Difficulty::Hard);
        assert!(menu.handle_event(key(KeyCode::Down)).is_none());
        assert_eq!(menu.selection, Difficulty::Easy);
        assert!(menu.handle_event(key(KeyCode::Up)).is_none());
        assert_eq!(menu.selection, Difficulty::Hard);
        assert!(menu.handle_event(key(KeyCode::Left)).is_none());
        assert_eq!(menu.selection, Difficulty::Hard);
    }

    #[test]
    fn start_and_quit() {
        let mut menu = Menu::new(Difficulty::Hard);
        assert!(matches!(
            menu.handle_event(key(KeyCode::Enter)),
            Some(Screen::Game(_))
        ));
        assert!(matches!(
            menu.handle_event(key(KeyCode::Char('q'))),
            Some(Screen::Quit)
        ));
        assert!(matches!(
            menu.handle_event(key(KeyCode::Esc)),
            Some(Screen::Quit)
        ));
    }
}
