//! Player intents and where they come from.

use std::collections::VecDeque;
use std::io;

use delve_core::Direction;

/// One discrete player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Move (or push) one tile.
    Move(Direction),
    /// End the session.
    Quit,
}

/// A blocking source of intents, polled once per turn.
pub trait InputSource {
    /// Wait for the next input.
    ///
    /// `Ok(None)` means an input arrived that maps to no intent; the
    /// loop redraws and polls again.
    fn poll(&mut self) -> io::Result<Option<Intent>>;
}

/// Replays a fixed list of intents, then quits.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    intents: VecDeque<Intent>,
}

impl ScriptedInput {
    /// Replay `intents` in order.
    pub fn new(intents: impl IntoIterator<Item = Intent>) -> Self {
        Self {
            intents: intents.into_iter().collect(),
        }
    }

    /// Replay one move per direction.
    pub fn moves(directions: impl IntoIterator<Item = Direction>) -> Self {
        Self::new(directions.into_iter().map(Intent::Move))
    }

    /// Intents not yet replayed.
    pub fn remaining(&self) -> usize {
        self.intents.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> io::Result<Option<Intent>> {
        Ok(Some(self.intents.pop_front().unwrap_or(Intent::Quit)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_input_quits_when_exhausted() {
        let mut input = ScriptedInput::moves([Direction::Up, Direction::Left]);
        assert_eq!(input.poll().unwrap(), Some(Intent::Move(Direction::Up)));
        assert_eq!(input.remaining(), 1);
        assert_eq!(input.poll().unwrap(), Some(Intent::Move(Direction::Left)));
        assert_eq!(input.poll().unwrap(), Some(Intent::Quit));
        assert_eq!(input.poll().unwrap(), Some(Intent::Quit));
    }
}
