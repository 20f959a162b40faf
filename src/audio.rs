use log::warn;
use std::io::{self, Write};

/// Sound effects signalled by the game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Cue {
    /// The snake ate a food item
    Eat,
    /// The snake hit a wall or itself
    Collision,
}

impl Cue {
    /// Terminal output that plays the cue
    fn bells(self) -> &'static [u8] {
        match self {
            Cue::Eat => b"\x07",
            Cue::Collision => b"\x07\x07",
        }
    }
}

/// Plays cues by ringing the terminal bell.  Playing is fire-and-forget:
/// failures are logged and otherwise ignored.
#[derive(Debug)]
pub(crate) struct Speaker<W = io::Stdout> {
    out: W,
    enabled: bool,
}

impl Speaker {
    pub(crate) fn new(enabled: bool) -> Speaker {
        Speaker::with_writer(io::stdout(), enabled)
    }
}

impl<W: Write> Speaker<W> {
    pub(crate) fn with_writer(out: W, enabled: bool) -> Speaker<W> {
        Speaker { out, enabled }
    }

    pub(crate) fn play(&mut self, cue: Cue) {
        if !self.enabled {
            return;
        }
        if let Err(e) = self
            .out
            .write_all(cue.bells())
            .and_then(|()| self.out.flush())
        {
            warn!("Failed to play {cue:?} sound: {e}");
        }
    }
}
