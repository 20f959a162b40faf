mod cell;
mod direction;
mod food;
mod snake;
use self::cell::Cell;
use self::direction::Direction;
use self::food::Food;
use self::snake::Snake;
use crate::app::Screen;
use crate::audio::Cue;
use crate::command::Command;
use crate::consts;
use crate::difficulty::Difficulty;
use crate::timer::event_triggered;
use crate::util::{center_rect, get_display_area};
use crossterm::event::Event;
use log::{debug, info};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};
use std::time::Instant;

/// A play session, from choosing a difficulty until the program exits.
/// Crashing resets the board in place rather than ending the session.
#[derive(Clone, Debug)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    difficulty: Difficulty,
    score: u32,
    snake: Snake,
    foods: Vec<Food>,
    state: GameState,
    /// Set each time the movement timer fires and cleared by the first turn
    /// after that, so that the snake turns at most once per move
    allow_move: bool,
    /// When the snake last moved
    last_move: Instant,
    /// When the food last drifted
    last_drift: Instant,
    /// Sounds to play, oldest first
    cues: Vec<Cue>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(difficulty: Difficulty) -> Self {
        Game::new_with_rng(difficulty, rand::rng(), Instant::now())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(difficulty: Difficulty, mut rng: R, now: Instant) -> Game<R> {
        let snake = Snake::new();
        let foods = (0..consts::FOOD_COUNT)
            .filter_map(|_| Food::new(&mut rng, snake.body()))
            .collect();
        info!("Starting {difficulty} game");
        Game {
            rng,
            difficulty,
            score: 0,
            snake,
            foods,
            state: GameState::Playing,
            allow_move: false,
            last_move: now,
            last_drift: now,
            cues: Vec::new(),
        }
    }

    /// Advance the game to `now`: move the snake if its timer has fired and
    /// the game is running, and likewise drift the food on its own, slower
    /// timer.
    pub(crate) fn update(&mut self, now: Instant) {
        if event_triggered(self.difficulty.tick_period(), &mut self.last_move, now) {
            self.allow_move = true;
            if self.running() {
                self.tick();
            }
        }
        if self.running()
            && event_triggered(self.difficulty.food_period(), &mut self.last_drift, now)
        {
            for food in &mut self.foods {
                food.drift();
            }
        }
    }

    /// Move the snake one cell and then check, in order, for eaten food,
    /// hitting a wall, and hitting itself.
    fn tick(&mut self) {
        self.snake.advance();
        let head = self.snake.head();
        for food in &mut self.foods {
            if food.position == head {
                food.relocate(&mut self.rng, self.snake.body());
                self.snake.grow();
                self.score += 1;
                debug!("Ate food at {head:?}; score is now {}", self.score);
                self.cues.push(Cue::Eat);
            }
        }
        if hits_wall(self.snake.head()) {
            self.game_over();
        }
        let head = self.snake.head();
        if self.snake.tail().any(|&c| c == head) {
            self.game_over();
        }
    }

    /// Reset the board after a crash and wait for the player to steer again
    fn game_over(&mut self) {
        info!(
            "Crashed at {:?} with a score of {}",
            self.snake.head(),
            self.score
        );
        self.snake.reset();
        for food in &mut self.foods {
            food.relocate(&mut self.rng, self.snake.body());
        }
        self.state = GameState::GameOverPending;
        self.score = 0;
        self.cues.push(Cue::Collision);
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    pub(crate) fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Quit | Command::Q | Command::Esc => return Some(Screen::Quit),
            Command::Up => self.steer(Direction::North),
            Command::Left => self.steer(Direction::West),
            Command::Down => self.steer(Direction::South),
            Command::Right => self.steer(Direction::East),
            Command::Enter => (),
        }
        None
    }

    /// Remove & return the sounds the game has signalled since the last call
    pub(crate) fn take_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }

    /// Turn the snake, if a turn is allowed right now and it's not straight
    /// backwards.  A successful turn also restarts the game after a crash.
    fn steer(&mut self, direction: Direction) {
        if self.allow_move && self.snake.turn(direction) {
            self.allow_move = false;
            self.state = GameState::Playing;
        }
    }

    fn running(&self) -> bool {
        self.state == GameState::Playing
    }
}

/// Has `head` just gone over the edge of the board?
///
/// The snake moves one cell per tick, so it can only ever leave the board
/// onto the row or column immediately outside it.
fn hits_wall(head: Cell) -> bool {
    [head.x, head.y]
        .into_iter()
        .any(|c| c == -1 || c == consts::CELL_COUNT)
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, board_area, msg_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(Board::SIZE.height),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(
            format!(
                " Score: {:<6}Difficulty: {}",
                self.score, self.difficulty
            ),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        Board {
            snake: &self.snake,
            foods: &self.foods,
        }
        .render(center_rect(board_area, Board::SIZE), buf);

        if self.state == GameState::GameOverPending {
            Line::from_iter([
                Span::raw(" Crashed! Steer with "),
                Span::styled("← ↓ ↑ →", consts::KEY_STYLE),
                Span::raw(" to play again, or quit with "),
                Span::styled("q", consts::KEY_STYLE),
            ])
            .render(msg_area, buf);
        }
    }
}

/// The bordered playing field with the food and the snake on it
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Board<'a> {
    snake: &'a Snake,
    foods: &'a [Food],
}

impl Board<'_> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    const SIZE: Size = Size {
        width: (consts::CELL_COUNT as u16) * consts::CELL_WIDTH + 2,
        height: (consts::CELL_COUNT as u16) + 2,
    };
}

impl Widget for Board<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().border_style(consts::BOARD_STYLE);
        let inner = block.inner(area);
        block.render(area, buf);
        let mut canvas = Canvas { area: inner, buf };
        for food in self.foods {
            canvas.draw_cell(food.position, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        }
        for &cell in self.snake.tail() {
            canvas.draw_cell(cell, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        canvas.draw_cell(
            self.snake.head(),
            consts::SNAKE_HEAD_SYMBOL,
            consts::SNAKE_STYLE,
        );
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    /// Draw `symbol` in the columns of board cell `cell`.  Cells off the board
    /// are skipped.
    fn draw_cell(&mut self, cell: Cell, symbol: &str, style: Style) {
        if !cell.on_board() {
            return;
        }
        let (Ok(x), Ok(y)) = (u16::try_from(cell.x), u16::try_from(cell.y)) else {
            return;
        };
        let Some(x) = x
            .checked_mul(consts::CELL_WIDTH)
            .and_then(|x| self.area.x.checked_add(x))
        else {
            return;
        };
        let Some(y) = self.area.y.checked_add(y) else {
            return;
        };
        for (ch, x) in symbol.chars().zip(x..) {
            if !self.area.contains(Position { x, y }) {
                break;
            }
            if let Some(c) = self.buf.cell_mut((x, y)) {
                c.set_char(ch);
                c.set_style(Style::reset().patch(style));
            }
        }
    }
}

/// Whether the snake is moving
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Playing,
    /// The snake crashed and the board has been reset; it stays still until
    /// the player steers it.
    GameOverPending,
}
