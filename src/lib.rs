pub mod camera;
pub mod commands;
pub mod constants;
pub mod cursor;
pub mod error;
pub mod gesture;
pub mod protocol;
pub mod storage;
pub mod viewer;

pub use camera::{Hi3510Cam, HttpTransport, Transport};
pub use commands::*;
pub use cursor::{DeadZone, FrameSize};
pub use error::{Hi3510Error, Result};
pub use gesture::{EscapeGesture, EscapeWindow};
pub use protocol::{Direction, PresetSlot, PtzCommand, ScanAxis};
pub use storage::{Video, VideoStorage};
pub use viewer::{Playback, SessionEnd, TrackingConfig, TrackingSession};
