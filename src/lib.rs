pub mod clock;
pub mod config;
pub mod controller;
pub mod force_feedback;
pub mod input;

pub use clock::{Clock, MonotonicClock};
pub use controller::{Button, ControllerState, PadError, RawControllerSnapshot, SlotId};
pub use force_feedback::Haptics;
pub use input::SnapshotSource;
