use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span, Text},
    widgets::Widget,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Instructions;

impl Instructions {
    pub(super) const HEIGHT: u16 = 6;
    pub(super) const WIDTH: u16 = 20;
}

impl Widget for Instructions {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Text::from_iter([
            Line::from("Move the snake with:"),
            keys_line("       ", ["←", "↓", "↑", "→"]),
            keys_line("   or: ", ["h", "j", "k", "l"]),
            keys_line("   or: ", ["a", "s", "w", "d"]),
            Line::from("Eat the food, but"),
            Line::from("mind the walls!"),
        ]);
        debug_assert_eq!(
            text.height(),
            usize::from(Self::HEIGHT),
            "Instructions::HEIGHT is wrong"
        );
        debug_assert_eq!(
            text.width(),
            usize::from(Self::WIDTH),
            "Instructions::WIDTH is wrong"
        );
        text.render(area, buf);
    }
}

fn keys_line(lead: &'static str, keys: [&'static str; 4]) -> Line<'static> {
    let mut line = Line::raw(lead);
    for (i, k) in keys.into_iter().enumerate() {
        if i > 0 {
            line.push_span(" ");
        }
        line.push_span(Span::styled(k, consts::KEY_STYLE));
    }
    line
}

/// One line explaining how to start or leave
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct StartHint;

impl Widget for StartHint {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Line::from_iter([
            Span::raw("Press "),
            Span::styled("Enter", consts::KEY_STYLE),
            Span::raw(" to play or "),
            Span::styled("q", consts::KEY_STYLE),
            Span::raw(" to quit"),
        ])
        .centered()
        .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_instructions() {
        let area = Rect::new(0, 0, Instructions::WIDTH, Instructions::HEIGHT);
        let mut buffer = Buffer::empty(area);
        Instructions.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "Move the snake with:",
            "       ← ↓ ↑ →      ",
            "   or: h j k l      ",
            "   or: a s w d      ",
            "Eat the food, but   ",
            "mind the walls!     ",
        ]);
        for y in 1..4 {
            for x in [7, 9, 11, 13] {
                expected.set_style(Rect::new(x, y, 1, 1), consts::KEY_STYLE);
            }
        }
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn render_start_hint() {
        let area = Rect::new(0, 0, 40, 1);
        let mut buffer = Buffer::empty(area);
        StartHint.render(area, &mut buffer);
        let mut expected = Buffer::with_lines(["    Press Enter to play or q to quit    "]);
        expected.set_style(Rect::new(10, 0, 5, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(27, 0, 1, 1), consts::KEY_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }
}
