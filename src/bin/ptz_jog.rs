use clap::{Parser, Subcommand, ValueEnum};
use hi3510_rs::constants::DEFAULT_CAMERA_IP;
use hi3510_rs::{Direction, Hi3510Cam, PresetSlot, Ptz, ScanAxis, VideoStorage};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Manual jog console for an HI3510 PTZ camera. Jogs and live cursor
/// tracking are alternative modes; this binary only jogs.
#[derive(Parser)]
#[command(name = "ptz_jog")]
struct Cli {
    /// Camera address (host or host:port)
    #[arg(long, default_value = DEFAULT_CAMERA_IP)]
    ip: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Jog one step in a direction
    Step { direction: JogDirection },
    /// Sweep along an axis, then stop
    Scan { axis: JogAxis },
    /// Store the current pose in a slot
    SetPoint {
        #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
        slot: u8,
    },
    /// Recall a stored pose
    GotoPoint {
        #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
        slot: u8,
    },
    /// List timestamped recordings in a local directory
    Videos { path: PathBuf },
}

#[derive(Clone, Copy, ValueEnum)]
enum JogDirection {
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
}

impl From<JogDirection> for Direction {
    fn from(direction: JogDirection) -> Self {
        match direction {
            JogDirection::Up => Direction::Up,
            JogDirection::UpRight => Direction::UpRight,
            JogDirection::Right => Direction::Right,
            JogDirection::DownRight => Direction::DownRight,
            JogDirection::Down => Direction::Down,
            JogDirection::DownLeft => Direction::DownLeft,
            JogDirection::Left => Direction::Left,
            JogDirection::UpLeft => Direction::UpLeft,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum JogAxis {
    Vertical,
    Horizontal,
}

impl From<JogAxis> for ScanAxis {
    fn from(axis: JogAxis) -> Self {
        match axis {
            JogAxis::Vertical => ScanAxis::Vertical,
            JogAxis::Horizontal => ScanAxis::Horizontal,
        }
    }
}

fn slot(id: u8) -> PresetSlot {
    match id {
        1 => PresetSlot::One,
        2 => PresetSlot::Two,
        3 => PresetSlot::Three,
        4 => PresetSlot::Four,
        _ => PresetSlot::Home,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let camera = Hi3510Cam::new(cli.ip);

    match cli.command {
        Command::Step { direction } => camera.move_step(direction.into()).await,
        Command::Scan { axis } => camera.scan(axis.into()).await,
        Command::SetPoint { slot: id } => camera.set_point(slot(id)).await,
        Command::GotoPoint { slot: id } => camera.goto_point(slot(id)).await,
        Command::Videos { path } => {
            let storage = VideoStorage::new(path)?;
            for video in storage.video_files().await? {
                println!("{video}");
            }
        }
    }

    Ok(())
}
