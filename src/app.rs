use crate::audio::Speaker;
use crate::config::Config;
use crate::consts;
use crate::game::Game;
use crate::menu::Menu;
use crossterm::event::{poll, read, Event};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Instant;

#[derive(Debug)]
pub(crate) struct App {
    screen: Screen,
    speaker: Speaker,
}

impl App {
    pub(crate) fn new(config: &Config) -> App {
        App {
            screen: Screen::Menu(Menu::new(config.difficulty)),
            speaker: Speaker::new(config.sound),
        }
    }

    /// Run frames until the user quits.  Each frame handles whatever input
    /// arrives before the frame is due, then updates the game, then draws.
    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        let mut next_frame = Instant::now();
        self.draw(&mut terminal)?;
        while !self.quitting() {
            next_frame += consts::FRAME_PERIOD;
            self.process_input(next_frame)?;
            self.update(Instant::now());
            self.draw(&mut terminal)?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        match self.screen {
            Screen::Menu(ref menu) => {
                terminal.draw(|frame| menu.draw(frame))?;
            }
            Screen::Game(ref game) => {
                terminal.draw(|frame| game.draw(frame))?;
            }
            Screen::Quit => (),
        }
        Ok(())
    }

    /// Handle input events until `deadline`
    fn process_input(&mut self, deadline: Instant) -> io::Result<()> {
        while !self.quitting() {
            let wait = deadline.saturating_duration_since(Instant::now());
            if !poll(wait)? {
                break;
            }
            self.handle_event(read()?);
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let next = match self.screen {
            Screen::Menu(ref mut menu) => menu.handle_event(event),
            Screen::Game(ref mut game) => game.handle_event(event),
            Screen::Quit => None,
        };
        if let Some(screen) = next {
            self.screen = screen;
        }
    }

    fn update(&mut self, now: Instant) {
        if let Screen::Game(ref mut game) = self.screen {
            game.update(now);
            for cue in game.take_cues() {
                self.speaker.play(cue);
            }
        }
    }

    fn quitting(&self) -> bool {
        matches!(self.screen, Screen::Quit)
    }
}

#[derive(Clone, Debug)]
pub(crate) enum Screen {
    Menu(Menu),
    Game(Game),
    Quit,
}
