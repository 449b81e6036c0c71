use crate::protocol::Direction;

/// Rendered frame dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

/// Classification limits derived from a frame size. A cursor past a limit
/// requests motion on that axis; inside all four is the dead zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeadZone {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl DeadZone {
    pub fn new(size: FrameSize, margin: f64) -> Self {
        let width = f64::from(size.width);
        let height = f64::from(size.height);

        Self {
            left: width * margin,
            right: width / (1.0 + margin),
            top: height * margin,
            bottom: height / (1.0 + margin),
        }
    }

    /// Map a cursor position to a pan direction.
    ///
    /// `(0, 0)` reads as an uninitialized cursor and classifies as `Center`
    /// rather than `UpLeft`. Corners are tested before edges so a cursor
    /// past both limits yields a diagonal, not a cardinal.
    pub fn classify(&self, x: f64, y: f64) -> Direction {
        if x == 0.0 && y == 0.0 {
            return Direction::Center;
        }

        if x <= self.left && y <= self.top {
            Direction::UpLeft
        } else if x <= self.left && y >= self.bottom {
            Direction::DownLeft
        } else if x >= self.right && y <= self.top {
            Direction::UpRight
        } else if x >= self.right && y >= self.bottom {
            Direction::DownRight
        } else if x <= self.left {
            Direction::Left
        } else if x >= self.right {
            Direction::Right
        } else if y <= self.top {
            Direction::Up
        } else if y >= self.bottom {
            Direction::Down
        } else {
            Direction::Center
        }
    }
}
