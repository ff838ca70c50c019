use super::{InputDevice, InputEvent, SnapshotSource};
use crate::controller::{RawControllerSnapshot, SlotId};
use gilrs::{Axis, Button, EventType, GamepadId, Gilrs};
use glam::Vec2;

#[cfg(target_os = "linux")]
use std::path::PathBuf;

/// Digital inputs read from gilrs on every sample
const SAMPLED_BUTTONS: [Button; 15] = [
    Button::South,
    Button::East,
    Button::West,
    Button::North,
    Button::LeftTrigger,
    Button::RightTrigger,
    Button::Select,
    Button::Start,
    Button::LeftThumb,
    Button::RightThumb,
    Button::Mode,
    Button::DPadUp,
    Button::DPadDown,
    Button::DPadLeft,
    Button::DPadRight,
];

/// Writes one gilrs button into the snapshot. Returns false for buttons the
/// snapshot has no field for.
pub fn apply_button(snapshot: &mut RawControllerSnapshot, button: Button, pressed: bool) -> bool {
    let field = match button {
        Button::South => &mut snapshot.a,
        Button::East => &mut snapshot.b,
        Button::West => &mut snapshot.x,
        Button::North => &mut snapshot.y,
        Button::LeftTrigger => &mut snapshot.left_shoulder,
        Button::RightTrigger => &mut snapshot.right_shoulder,
        Button::Select => &mut snapshot.back,
        Button::Start => &mut snapshot.start,
        Button::LeftThumb => &mut snapshot.left_stick_click,
        Button::RightThumb => &mut snapshot.right_stick_click,
        Button::Mode => &mut snapshot.guide,
        Button::DPadUp => &mut snapshot.dpad.up,
        Button::DPadDown => &mut snapshot.dpad.down,
        Button::DPadLeft => &mut snapshot.dpad.left,
        Button::DPadRight => &mut snapshot.dpad.right,
        _ => return false,
    };
    *field = pressed;
    true
}

/// Puts `id` in the first empty slot, or a new one at the end. A gamepad
/// that already holds a slot keeps it.
pub fn assign_slot<T: Copy + PartialEq>(slots: &mut Vec<Option<T>>, id: T) -> SlotId {
    if let Some(index) = slots.iter().position(|s| *s == Some(id)) {
        return SlotId(index);
    }
    match slots.iter().position(Option::is_none) {
        Some(index) => {
            slots[index] = Some(id);
            SlotId(index)
        }
        None => {
            slots.push(Some(id));
            SlotId(slots.len() - 1)
        }
    }
}

/// Empties the slot held by `id`. Other slots keep their gamepads.
pub fn release_slot<T: Copy + PartialEq>(slots: &mut [Option<T>], id: T) -> Option<SlotId> {
    let index = slots.iter().position(|s| *s == Some(id))?;
    slots[index] = None;
    Some(SlotId(index))
}

/// gilrs-backed snapshot source.
///
/// Gamepads present at startup take slots in gilrs enumeration order. A
/// slot stays bound to its gamepad until it disconnects; the empty slot then
/// samples neutral until the next connection fills it. Call
/// [`InputReader::poll`] once per tick before sampling so gilrs' cached
/// state is current.
pub struct InputReader {
    gilrs: Gilrs,
    slots: Vec<Option<GamepadId>>,
    #[cfg(target_os = "linux")]
    udev: libudev::Context,
}

impl InputReader {
    pub fn new() -> anyhow::Result<Self> {
        let gilrs = Gilrs::new().map_err(|e| anyhow::anyhow!("Failed to initialize gilrs: {}", e))?;

        let mut slots = Vec::new();
        for (id, _) in gilrs.gamepads() {
            assign_slot(&mut slots, id);
        }

        let reader = Self {
            gilrs,
            slots,
            #[cfg(target_os = "linux")]
            udev: libudev::Context::new()?,
        };

        for device in reader.devices() {
            log::info!(
                "Found device: {} ({}) on {} - FF: {}",
                device.name,
                device.id,
                device.slot,
                device.has_force_feedback
            );
        }

        Ok(reader)
    }

    pub fn devices(&self) -> Vec<InputDevice> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, id)| id.map(|id| self.describe(SlotId(index), id)))
            .collect()
    }

    fn describe(&self, slot: SlotId, id: GamepadId) -> InputDevice {
        let gamepad = self.gilrs.gamepad(id);
        InputDevice {
            slot,
            id: format!("{:?}", id),
            name: gamepad.name().to_string(),
            has_force_feedback: gamepad.is_ff_supported(),
        }
    }

    /// Drains pending gilrs events. Button and axis state is cached by gilrs
    /// itself; only connection changes are reported.
    pub fn poll(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        while let Some(event) = self.gilrs.next_event() {
            match event.event {
                EventType::Connected => {
                    let slot = assign_slot(&mut self.slots, event.id);
                    events.push(InputEvent::DeviceConnected {
                        device: self.describe(slot, event.id),
                    });
                }
                EventType::Disconnected => {
                    if let Some(slot) = release_slot(&mut self.slots, event.id) {
                        log::debug!("{} is now empty", slot);
                    }
                    events.push(InputEvent::DeviceDisconnected {
                        device_id: format!("{:?}", event.id),
                    });
                }
                _ => {}
            }
        }

        events
    }

    /// evdev node of the gamepad in `slot`, matched through udev by vendor
    /// and product id.
    #[cfg(target_os = "linux")]
    pub fn device_path(&self, slot: SlotId) -> Option<PathBuf> {
        let id = (*self.slots.get(slot.index())?)?;
        let gamepad = self.gilrs.gamepad(id);
        log::info!(
            "Searching for device path for: {} (Vendor: {:?}, Product: {:?})",
            gamepad.name(),
            gamepad.vendor_id(),
            gamepad.product_id()
        );

        let mut enumerator = libudev::Enumerator::new(&self.udev).ok()?;
        enumerator.match_subsystem("input").ok()?;

        for device in enumerator.scan_devices().ok()? {
            let vendor_id = device
                .property_value("ID_VENDOR_ID")
                .and_then(|s| s.to_str())
                .and_then(|s| u16::from_str_radix(s, 16).ok());

            let product_id = device
                .property_value("ID_PRODUCT_ID")
                .or(device.property_value("ID_MODEL_ID"))
                .and_then(|s| s.to_str())
                .and_then(|s| u16::from_str_radix(s, 16).ok());

            if vendor_id == gamepad.vendor_id() && product_id == gamepad.product_id() {
                if let Some(devnode) = device.devnode() {
                    if devnode.to_string_lossy().contains("event") {
                        log::info!("Found matching devnode: {}", devnode.display());
                        return Some(devnode.to_path_buf());
                    }
                }
            }
        }

        log::warn!("Device path not found for: {}", gamepad.name());
        None
    }
}

impl SnapshotSource for InputReader {
    fn sample(&self, slot: SlotId) -> RawControllerSnapshot {
        let mut snapshot = RawControllerSnapshot::default();

        let Some(gamepad) = self
            .slots
            .get(slot.index())
            .copied()
            .flatten()
            .and_then(|id| self.gilrs.connected_gamepad(id))
        else {
            return snapshot;
        };

        for button in SAMPLED_BUTTONS {
            apply_button(&mut snapshot, button, gamepad.is_pressed(button));
        }

        snapshot.left_stick = Vec2::new(
            gamepad.value(Axis::LeftStickX),
            gamepad.value(Axis::LeftStickY),
        );
        snapshot.right_stick = Vec2::new(
            gamepad.value(Axis::RightStickX),
            gamepad.value(Axis::RightStickY),
        );
        snapshot.left_trigger = gamepad
            .button_data(Button::LeftTrigger2)
            .map_or(0.0, |data| data.value());
        snapshot.right_trigger = gamepad
            .button_data(Button::RightTrigger2)
            .map_or(0.0, |data| data.value());

        snapshot
    }
}
