#[cfg(target_os = "linux")]
mod linux;
mod worker;

#[cfg(target_os = "linux")]
pub use linux::RumbleDevice;
pub use worker::HapticWorker;

use crate::controller::SlotId;
use std::rc::Rc;
use std::sync::Arc;

/// Haptic collaborator used by the controller layer.
///
/// Fire-and-forget: implementations clamp intensities to 0.0..1.0 and must
/// not block the frame loop.
pub trait Haptics {
    fn set_vibration(&self, slot: SlotId, left: f32, right: f32) -> anyhow::Result<()>;
}

impl<T: Haptics + ?Sized> Haptics for &T {
    fn set_vibration(&self, slot: SlotId, left: f32, right: f32) -> anyhow::Result<()> {
        (**self).set_vibration(slot, left, right)
    }
}

impl<T: Haptics + ?Sized> Haptics for Rc<T> {
    fn set_vibration(&self, slot: SlotId, left: f32, right: f32) -> anyhow::Result<()> {
        (**self).set_vibration(slot, left, right)
    }
}

impl<T: Haptics + ?Sized> Haptics for Arc<T> {
    fn set_vibration(&self, slot: SlotId, left: f32, right: f32) -> anyhow::Result<()> {
        (**self).set_vibration(slot, left, right)
    }
}

impl<T: Haptics + ?Sized> Haptics for Box<T> {
    fn set_vibration(&self, slot: SlotId, left: f32, right: f32) -> anyhow::Result<()> {
        (**self).set_vibration(slot, left, right)
    }
}

/// Used when no rumble-capable device is available
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHaptics;

impl Haptics for NullHaptics {
    fn set_vibration(&self, slot: SlotId, left: f32, right: f32) -> anyhow::Result<()> {
        log::debug!("{}: no haptics, dropping vibration {:.2}/{:.2}", slot, left, right);
        Ok(())
    }
}

/// Motor strengths sent to a device
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RumbleState {
    /// Large motor strength (0.0 to 1.0)
    pub large_motor: f32,
    /// Small motor strength (0.0 to 1.0)
    pub small_motor: f32,
}

impl RumbleState {
    pub fn new(large_motor: f32, small_motor: f32) -> Self {
        Self {
            large_motor: large_motor.clamp(0.0, 1.0),
            small_motor: small_motor.clamp(0.0, 1.0),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.large_motor == 0.0 && self.small_motor == 0.0
    }
}

/// Trait for rumble output to physical devices
pub trait ForceFeedback: Send {
    /// large_motor -> left (strong) motor
    /// small_motor -> right (weak) motor
    fn apply_rumble(&mut self, rumble: &RumbleState) -> anyhow::Result<()>;

    /// Stop all force feedback effects
    fn stop(&mut self) -> anyhow::Result<()>;

    /// Check if the device is available
    fn is_available(&self) -> bool;
}
