mod buttons;
mod snapshot;
mod state;

pub use buttons::*;
pub use snapshot::*;
pub use state::*;

use std::fmt;

/// Identifies which physical controller a state belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SlotId(pub usize);

impl SlotId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot{}", self.0)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PadError {
    #[error("unknown button \"{0}\"")]
    UnknownButton(String),
}
