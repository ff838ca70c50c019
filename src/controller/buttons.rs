use super::{PadError, RawControllerSnapshot};
use std::fmt;
use std::str::FromStr;

/// The fixed set of named buttons exposed to gameplay code.
///
/// D-pad directions are not part of this set; they are read through the
/// directional axes instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    A,
    B,
    X,
    Y,
    /// Left shoulder
    LB,
    /// Right shoulder
    RB,
    /// Back / View
    Select,
    Start,
    /// Left stick click
    LS,
    /// Right stick click
    RS,
    /// Guide / Home
    Guide,
}

impl Button {
    pub const COUNT: usize = 11;

    pub const ALL: [Button; Button::COUNT] = [
        Button::A,
        Button::B,
        Button::X,
        Button::Y,
        Button::LB,
        Button::RB,
        Button::Select,
        Button::Start,
        Button::LS,
        Button::RS,
        Button::Guide,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::X => "X",
            Self::Y => "Y",
            Self::LB => "LB",
            Self::RB => "RB",
            Self::Select => "Select",
            Self::Start => "Start",
            Self::LS => "LS",
            Self::RS => "RS",
            Self::Guide => "Guide",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    fn read(self, snapshot: &RawControllerSnapshot) -> bool {
        match self {
            Self::A => snapshot.a,
            Self::B => snapshot.b,
            Self::X => snapshot.x,
            Self::Y => snapshot.y,
            Self::LB => snapshot.left_shoulder,
            Self::RB => snapshot.right_shoulder,
            Self::Select => snapshot.back,
            Self::Start => snapshot.start,
            Self::LS => snapshot.left_stick_click,
            Self::RS => snapshot.right_stick_click,
            Self::Guide => snapshot.guide,
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Button {
    type Err = PadError;

    /// Names are matched exactly, the way gameplay code spells them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Button::ALL
            .into_iter()
            .find(|button| button.name() == s)
            .ok_or_else(|| PadError::UnknownButton(s.to_string()))
    }
}

/// Pressed state for every named button, indexed by [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonSet([bool; Button::COUNT]);

impl ButtonSet {
    pub fn from_snapshot(snapshot: &RawControllerSnapshot) -> Self {
        let mut set = Self::default();
        for button in Button::ALL {
            set.0[button.index()] = button.read(snapshot);
        }
        set
    }

    pub fn is_pressed(&self, button: Button) -> bool {
        self.0[button.index()]
    }

    pub fn pressed(&self) -> impl Iterator<Item = Button> + '_ {
        Button::ALL.into_iter().filter(|b| self.is_pressed(*b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_name() {
        for button in Button::ALL {
            assert_eq!(button.name().parse::<Button>().unwrap(), button);
        }
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "DPadUp".parse::<Button>().unwrap_err();
        assert!(matches!(err, PadError::UnknownButton(ref name) if name == "DPadUp"));
        assert!("a".parse::<Button>().is_err());
    }

    #[test]
    fn test_shoulder_and_system_mapping() {
        let snapshot = RawControllerSnapshot {
            left_shoulder: true,
            back: true,
            guide: true,
            right_stick_click: true,
            ..Default::default()
        };
        let set = ButtonSet::from_snapshot(&snapshot);

        assert!(set.is_pressed(Button::LB));
        assert!(set.is_pressed(Button::Select));
        assert!(set.is_pressed(Button::Guide));
        assert!(set.is_pressed(Button::RS));
        assert!(!set.is_pressed(Button::RB));
        assert!(!set.is_pressed(Button::Start));
        assert_eq!(
            set.pressed().collect::<Vec<_>>(),
            vec![Button::LB, Button::Select, Button::RS, Button::Guide]
        );
    }

    #[test]
    fn test_dpad_does_not_press_named_buttons() {
        let snapshot = RawControllerSnapshot {
            dpad: crate::controller::DPadState {
                up: true,
                down: true,
                left: true,
                right: true,
            },
            ..Default::default()
        };
        assert_eq!(ButtonSet::from_snapshot(&snapshot).pressed().count(), 0);
    }
}
