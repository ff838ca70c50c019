use super::{Button, ButtonSet, PadError, RawControllerSnapshot, SlotId};
use crate::clock::Clock;
use crate::force_feedback::Haptics;
use crate::input::SnapshotSource;
use glam::Vec2;
use std::time::Duration;

/// Per-axis magnitude an analog input must exceed to count as intentional
pub const DEADZONE: f32 = 0.2;

/// Right trigger travel past which the special attack fires
const SPECIAL_ATTACK_TRIGGER: f32 = 0.5;

/// True if either component is strictly outside the deadzone
pub fn axis_active(axis: Vec2) -> bool {
    axis.x.abs() > DEADZONE || axis.y.abs() > DEADZONE
}

/// State of one physical controller, refreshed once per frame.
///
/// `update` must be called exactly once per tick. Calling it twice shifts
/// the edge history twice and the second call will report no edges for
/// that tick.
pub struct ControllerState<C, H> {
    slot: SlotId,
    clock: C,
    haptics: H,
    snapshot: RawControllerSnapshot,
    current: ButtonSet,
    previous: ButtonSet,
    /// Never zero
    last_aim: Vec2,
    vibration_expiry: Option<Duration>,
}

impl<C: Clock, H: Haptics> ControllerState<C, H> {
    /// Binds to `slot` and takes an initial sample, so every query is valid
    /// straight away. A missing device is not an error here; it just samples
    /// as neutral.
    pub fn new<S>(slot: SlotId, source: &S, clock: C, haptics: H) -> Self
    where
        S: SnapshotSource + ?Sized,
    {
        log::info!("Binding controller state to {}", slot);
        let mut state = Self {
            slot,
            clock,
            haptics,
            snapshot: RawControllerSnapshot::default(),
            current: ButtonSet::default(),
            previous: ButtonSet::default(),
            last_aim: Vec2::X,
            vibration_expiry: None,
        };
        state.update(source);
        state
    }

    pub fn update<S>(&mut self, source: &S)
    where
        S: SnapshotSource + ?Sized,
    {
        self.snapshot = source.sample(self.slot);
        self.previous = self.current;
        self.current = ButtonSet::from_snapshot(&self.snapshot);

        if log::log_enabled!(log::Level::Debug) {
            for button in Button::ALL {
                if self.button_down(button) {
                    log::debug!("{}: {} down", self.slot, button);
                } else if self.button_up(button) {
                    log::debug!("{}: {} up", self.slot, button);
                }
            }
        }

        if let Some(expiry) = self.vibration_expiry {
            if self.clock.now() >= expiry {
                log::debug!("{}: vibration expired", self.slot);
                self.vibration_expiry = None;
                self.stop_vibration();
            }
        }
    }

    pub fn slot(&self) -> SlotId {
        self.slot
    }

    /// Raw sample backing the current tick
    pub fn snapshot(&self) -> &RawControllerSnapshot {
        &self.snapshot
    }

    pub fn button(&self, button: Button) -> bool {
        self.current.is_pressed(button)
    }

    /// Pressed this tick, released the tick before
    pub fn button_down(&self, button: Button) -> bool {
        self.current.is_pressed(button) && !self.previous.is_pressed(button)
    }

    /// Released this tick, pressed the tick before
    pub fn button_up(&self, button: Button) -> bool {
        !self.current.is_pressed(button) && self.previous.is_pressed(button)
    }

    pub fn button_by_name(&self, name: &str) -> Result<bool, PadError> {
        Ok(self.button(name.parse()?))
    }

    pub fn button_down_by_name(&self, name: &str) -> Result<bool, PadError> {
        Ok(self.button_down(name.parse()?))
    }

    pub fn button_up_by_name(&self, name: &str) -> Result<bool, PadError> {
        Ok(self.button_up(name.parse()?))
    }

    pub fn pressed_buttons(&self) -> impl Iterator<Item = Button> + '_ {
        self.current.pressed()
    }

    pub fn dpad(&self) -> Vec2 {
        self.snapshot.dpad.vector()
    }

    pub fn left_thumbstick(&self) -> Vec2 {
        self.snapshot.left_stick
    }

    pub fn right_thumbstick(&self) -> Vec2 {
        self.snapshot.right_stick
    }

    pub fn left_trigger(&self) -> f32 {
        self.snapshot.left_trigger
    }

    pub fn right_trigger(&self) -> f32 {
        self.snapshot.right_trigger
    }

    /// D-pad when it is held, otherwise the raw left stick.
    ///
    /// The stick is not deadzone filtered; callers that want a deadzone on
    /// movement apply their own.
    pub fn movement(&self) -> Vec2 {
        let dpad = self.dpad();
        if axis_active(dpad) {
            dpad
        } else {
            self.left_thumbstick()
        }
    }

    /// Resolves the aim direction: right stick, then d-pad, then left stick,
    /// each only if outside the deadzone. With no active source the previous
    /// aim is kept, so this never returns zero.
    pub fn aim(&mut self) -> Vec2 {
        let right = self.right_thumbstick();
        let dpad = self.dpad();
        let left = self.left_thumbstick();

        let aim = if axis_active(right) {
            right
        } else if axis_active(dpad) {
            dpad
        } else if axis_active(left) {
            left
        } else {
            self.last_aim
        };

        self.last_aim = aim;
        aim
    }

    pub fn last_aim(&self) -> Vec2 {
        self.last_aim
    }

    /// Starts both motors and schedules them to stop after `duration`.
    /// A later call replaces the pending stop time. Durations past the end of
    /// the clock's range saturate, so `Duration::MAX` rumbles until stopped.
    pub fn vibrate(&mut self, left: f32, right: f32, duration: Duration) {
        self.send_vibration(left, right);
        self.vibration_expiry = Some(self.clock.now().saturating_add(duration));
    }

    /// Zeroes both motors. Any scheduled expiry is left in place.
    pub fn stop_vibration(&mut self) {
        self.send_vibration(0.0, 0.0);
    }

    pub fn vibration_expiry(&self) -> Option<Duration> {
        self.vibration_expiry
    }

    fn send_vibration(&self, left: f32, right: f32) {
        if let Err(e) = self.haptics.set_vibration(self.slot, left, right) {
            log::warn!("{}: failed to set vibration: {}", self.slot, e);
        }
    }

    pub fn jump_pressed(&self) -> bool {
        self.button_down(Button::A) || self.button_down(Button::LB)
    }

    pub fn jump_released(&self) -> bool {
        self.button_up(Button::A) || self.button_up(Button::LB)
    }

    pub fn attack(&self) -> bool {
        self.button(Button::X) || self.button(Button::RB)
    }

    pub fn special_attack(&self) -> bool {
        self.button(Button::Y) || self.right_trigger() > SPECIAL_ATTACK_TRIGGER
    }
}
