use phf::phf_map;
use tokio::time::Duration;

pub const DEFAULT_CAMERA_IP: &str = "192.168.1.128";

/// CGI root every command context is appended to.
pub const CONTROL_PATH: &str = "/cgi-bin/hi3510";

pub const RTSP_PORT: u16 = 554;
pub const RTSP_CHANNEL: &str = "/12";

/// Length of a single jog pulse; also the tracking loop's dead-man timeout.
pub const STEP_TIME: Duration = Duration::from_secs(2);

/// Length of an oscillating scan pulse.
pub const SCAN_TIME: Duration = Duration::from_secs(20);

/// Wait after recalling the home preset before tracking starts.
pub const SETTLE_TIME: Duration = Duration::from_secs(2);

/// Cursor polling cadence of the tracking loop.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Fraction of each frame dimension taken up by the dead-zone margin.
pub const DEAD_ZONE_MARGIN: f64 = 0.15;

/// Recordings on disk are named `YYMMDD_HHMMSS.mp4`.
pub const VIDEO_FILENAME_PATTERN: &str = r"^(\d{2})(\d{2})(\d{2})_(\d{2})(\d{2})(\d{2})\.mp4$";

/// The four cardinal directions have dedicated command paths; the ordinals
/// share the `ptzctrl.cgi` `act=` family.
pub static CARDINAL_PATHS: phf::Map<&'static str, &'static str> = phf_map! {
    "up" => "/ptzup.cgi",
    "right" => "/ptzright.cgi",
    "down" => "/ptzdown.cgi",
    "left" => "/ptzleft.cgi",
};

pub fn rtsp_stream_uri(ip: &str) -> String {
    format!("rtsp://{ip}:{RTSP_PORT}{RTSP_CHANNEL}")
}
