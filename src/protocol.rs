use crate::constants::CARDINAL_PATHS;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display};

/// Pan direction requested by the cursor. `Center` means the cursor sits in
/// the dead zone and no motion is wanted; it encodes to no command.
///
/// The lowercase strum token doubles as the `act=` parameter on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Center,
    UpLeft,
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
}

impl Direction {
    /// The four diagonals share one command family on the device.
    pub fn is_ordinal(self) -> bool {
        matches!(
            self,
            Direction::UpLeft | Direction::UpRight | Direction::DownRight | Direction::DownLeft
        )
    }
}

/// Axis of an oscillating scan sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display)]
pub enum ScanAxis {
    #[strum(serialize = "vscan")]
    Vertical,
    #[strum(serialize = "hscan")]
    Horizontal,
}

/// Preset pose slots on the camera. `Home` is the slot recalled at session
/// start and on an exit-and-restore gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresetSlot {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Home = 5,
}

impl PresetSlot {
    pub fn id(self) -> u8 {
        self as u8
    }
}

/// One camera action, one HTTP command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PtzCommand {
    Move(Direction),
    Stop,
    Scan(ScanAxis),
    SetPoint(PresetSlot),
    GotoPoint(PresetSlot),
}

impl PtzCommand {
    /// Encode into the device's command context. `Move(Center)` has no
    /// command and must not be dispatched.
    pub fn context(self) -> Option<String> {
        match self {
            PtzCommand::Move(direction) => direction_context(direction),
            PtzCommand::Stop => Some("/ptzstop.cgi".to_string()),
            PtzCommand::Scan(axis) => Some(format!("/ptzctrl.cgi?-act={axis}")),
            PtzCommand::SetPoint(slot) => Some(format!("/ptzsetpoint.cgi?-point={}", slot.id())),
            PtzCommand::GotoPoint(slot) => Some(format!("/ptzgotopoint.cgi?-point={}", slot.id())),
        }
    }
}

fn direction_context(direction: Direction) -> Option<String> {
    if direction == Direction::Center {
        return None;
    }
    if direction.is_ordinal() {
        return Some(format!("/ptzctrl.cgi?&-act={direction}"));
    }
    CARDINAL_PATHS
        .get(direction.as_ref())
        .map(|path| (*path).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_directions_share_the_act_family() {
        assert_eq!(
            PtzCommand::Move(Direction::UpLeft).context().unwrap(),
            "/ptzctrl.cgi?&-act=upleft"
        );
        assert_eq!(
            PtzCommand::Move(Direction::UpRight).context().unwrap(),
            "/ptzctrl.cgi?&-act=upright"
        );
        assert_eq!(
            PtzCommand::Move(Direction::DownRight).context().unwrap(),
            "/ptzctrl.cgi?&-act=downright"
        );
        assert_eq!(
            PtzCommand::Move(Direction::DownLeft).context().unwrap(),
            "/ptzctrl.cgi?&-act=downleft"
        );
    }

    #[test]
    fn cardinal_directions_have_dedicated_paths() {
        assert_eq!(
            PtzCommand::Move(Direction::Up).context().unwrap(),
            "/ptzup.cgi"
        );
        assert_eq!(
            PtzCommand::Move(Direction::Right).context().unwrap(),
            "/ptzright.cgi"
        );
        assert_eq!(
            PtzCommand::Move(Direction::Down).context().unwrap(),
            "/ptzdown.cgi"
        );
        assert_eq!(
            PtzCommand::Move(Direction::Left).context().unwrap(),
            "/ptzleft.cgi"
        );
    }

    #[test]
    fn stop_and_scan_contexts() {
        assert_eq!(PtzCommand::Stop.context().unwrap(), "/ptzstop.cgi");
        assert_eq!(
            PtzCommand::Scan(ScanAxis::Vertical).context().unwrap(),
            "/ptzctrl.cgi?-act=vscan"
        );
        assert_eq!(
            PtzCommand::Scan(ScanAxis::Horizontal).context().unwrap(),
            "/ptzctrl.cgi?-act=hscan"
        );
    }

    #[test]
    fn preset_contexts_carry_the_slot_id() {
        assert_eq!(
            PtzCommand::SetPoint(PresetSlot::Two).context().unwrap(),
            "/ptzsetpoint.cgi?-point=2"
        );
        assert_eq!(
            PtzCommand::GotoPoint(PresetSlot::Home).context().unwrap(),
            "/ptzgotopoint.cgi?-point=5"
        );
    }

    #[test]
    fn center_has_no_command() {
        assert_eq!(PtzCommand::Move(Direction::Center).context(), None);
    }
}
