use crate::protocol::Direction;
use std::collections::VecDeque;

/// Number of direction changes the recognizer looks back over.
const WINDOW_LEN: usize = 4;

/// Clockwise corner loop starting top-left: quit and recall the home pose.
const EXIT_AND_RESTORE_LOOP: [Direction; WINDOW_LEN] = [
    Direction::UpLeft,
    Direction::UpRight,
    Direction::DownRight,
    Direction::DownLeft,
];

/// Counter-clockwise corner loop: quit and leave the camera where it is.
const EXIT_LOOP: [Direction; WINDOW_LEN] = [
    Direction::UpLeft,
    Direction::DownLeft,
    Direction::DownRight,
    Direction::UpRight,
];

/// Session-exit request signaled by a cursor gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeGesture {
    /// End the session, camera stays put.
    Exit,
    /// End the session and return the camera to its home pose.
    ExitAndRestore,
}

/// Sliding window over the last four direction changes. Only changes are
/// recorded, never repeated polls, so dithering inside one direction does
/// not advance the window.
#[derive(Debug, Default)]
pub struct EscapeWindow {
    window: VecDeque<Direction>,
}

impl EscapeWindow {
    pub fn new() -> Self {
        Self {
            window: VecDeque::with_capacity(WINDOW_LEN),
        }
    }

    pub fn record(&mut self, direction: Direction) {
        if self.window.len() == WINDOW_LEN {
            self.window.pop_front();
        }
        self.window.push_back(direction);
    }

    /// Match the window against the two known exit loops.
    pub fn signal(&self) -> Option<EscapeGesture> {
        if self.matches(&EXIT_AND_RESTORE_LOOP) {
            return Some(EscapeGesture::ExitAndRestore);
        }
        if self.matches(&EXIT_LOOP) {
            return Some(EscapeGesture::Exit);
        }
        None
    }

    fn matches(&self, pattern: &[Direction; WINDOW_LEN]) -> bool {
        self.window.len() == WINDOW_LEN && self.window.iter().eq(pattern.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    fn window_of(directions: &[Direction]) -> EscapeWindow {
        let mut window = EscapeWindow::new();
        for &direction in directions {
            window.record(direction);
        }
        window
    }

    #[test]
    fn clockwise_loop_exits_and_restores() {
        let window = window_of(&[UpLeft, UpRight, DownRight, DownLeft]);
        assert_eq!(window.signal(), Some(EscapeGesture::ExitAndRestore));
    }

    #[test]
    fn counter_clockwise_loop_exits_in_place() {
        let window = window_of(&[UpLeft, DownLeft, DownRight, UpRight]);
        assert_eq!(window.signal(), Some(EscapeGesture::Exit));
    }

    #[test]
    fn other_windows_signal_nothing() {
        for directions in [
            [UpRight, UpLeft, DownRight, DownLeft],
            [UpLeft, UpLeft, DownRight, DownLeft],
            [UpLeft, UpRight, DownRight, Center],
            [Up, Right, Down, Left],
        ] {
            assert_eq!(window_of(&directions).signal(), None, "{directions:?}");
        }
    }

    #[test]
    fn short_windows_signal_nothing() {
        assert_eq!(window_of(&[]).signal(), None);
        assert_eq!(window_of(&[UpLeft, UpRight, DownRight]).signal(), None);
    }

    #[test]
    fn oldest_entry_is_evicted() {
        // The loop completes even after unrelated leading changes.
        let window = window_of(&[Down, Center, UpLeft, UpRight, DownRight, DownLeft]);
        assert_eq!(window.signal(), Some(EscapeGesture::ExitAndRestore));
    }

    #[test]
    fn a_center_inside_the_loop_breaks_it() {
        let window = window_of(&[UpLeft, UpRight, Center, DownRight, DownLeft]);
        assert_eq!(window.signal(), None);
    }
}
