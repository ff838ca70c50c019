use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DPadState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl DPadState {
    /// Opposite directions cancel out
    pub fn vector(&self) -> Vec2 {
        let mut v = Vec2::ZERO;
        if self.up {
            v += Vec2::new(0.0, 1.0);
        }
        if self.down {
            v += Vec2::new(0.0, -1.0);
        }
        if self.left {
            v += Vec2::new(-1.0, 0.0);
        }
        if self.right {
            v += Vec2::new(1.0, 0.0);
        }
        v
    }
}

/// One sample of a controller's hardware state.
///
/// The default value is the neutral snapshot: everything released and
/// centred. Backends return it for slots with no device attached.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawControllerSnapshot {
    pub a: bool,
    pub b: bool,
    pub x: bool,
    pub y: bool,
    pub left_shoulder: bool,
    pub right_shoulder: bool,
    pub back: bool,
    pub start: bool,
    pub left_stick_click: bool,
    pub right_stick_click: bool,
    pub guide: bool,
    pub dpad: DPadState,
    /// Each component in -1.0..1.0
    pub left_stick: Vec2,
    /// Each component in -1.0..1.0
    pub right_stick: Vec2,
    /// 0.0..1.0
    pub left_trigger: f32,
    /// 0.0..1.0
    pub right_trigger: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dpad_single_directions() {
        let up = DPadState { up: true, ..Default::default() };
        let left = DPadState { left: true, ..Default::default() };
        assert_eq!(up.vector(), Vec2::new(0.0, 1.0));
        assert_eq!(left.vector(), Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_dpad_diagonal_is_not_normalized() {
        let dpad = DPadState { down: true, right: true, ..Default::default() };
        assert_eq!(dpad.vector(), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn test_dpad_opposites_cancel() {
        let dpad = DPadState { up: true, down: true, right: true, ..Default::default() };
        assert_eq!(dpad.vector(), Vec2::new(1.0, 0.0));

        let all = DPadState { up: true, down: true, left: true, right: true };
        assert_eq!(all.vector(), Vec2::ZERO);
    }

    #[test]
    fn test_default_snapshot_is_neutral() {
        let snapshot = RawControllerSnapshot::default();
        assert_eq!(snapshot.left_stick, Vec2::ZERO);
        assert_eq!(snapshot.right_trigger, 0.0);
        assert_eq!(snapshot.dpad.vector(), Vec2::ZERO);
    }
}
