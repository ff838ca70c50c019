mod reader;

pub use reader::*;

use crate::controller::{RawControllerSnapshot, SlotId};
use std::rc::Rc;

/// Hardware polling backend: one fresh sample per slot per tick.
///
/// Slots with nothing attached return [`RawControllerSnapshot::default`].
pub trait SnapshotSource {
    fn sample(&self, slot: SlotId) -> RawControllerSnapshot;
}

impl<T: SnapshotSource + ?Sized> SnapshotSource for &T {
    fn sample(&self, slot: SlotId) -> RawControllerSnapshot {
        (**self).sample(slot)
    }
}

impl<T: SnapshotSource + ?Sized> SnapshotSource for Rc<T> {
    fn sample(&self, slot: SlotId) -> RawControllerSnapshot {
        (**self).sample(slot)
    }
}

#[derive(Debug, Clone)]
pub struct InputDevice {
    pub slot: SlotId,
    pub id: String,
    pub name: String,
    pub has_force_feedback: bool,
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    DeviceConnected { device: InputDevice },
    DeviceDisconnected { device_id: String },
}
