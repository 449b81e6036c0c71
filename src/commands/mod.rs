pub mod ptz;

pub use ptz::Ptz;
