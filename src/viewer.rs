use crate::camera::Hi3510Cam;
use crate::commands::ptz::Ptz;
use crate::constants::{DEAD_ZONE_MARGIN, POLL_INTERVAL, SETTLE_TIME, STEP_TIME};
use crate::cursor::{DeadZone, FrameSize};
use crate::gesture::{EscapeGesture, EscapeWindow};
use crate::protocol::{Direction, PresetSlot};
use tokio::time::{Duration, Instant, interval, sleep};
use tracing::{debug, info};

/// What the playback engine must answer for the tracking loop. The crate
/// renders no video itself; a VLC window, a test script, anything that can
/// report a cursor and a frame size will do.
pub trait Playback: Send {
    /// Rendered frame dimensions, once the engine knows them
    fn frame_size(&self) -> Option<FrameSize>;

    /// Current cursor position within the rendered frame
    fn cursor(&self) -> (f64, f64);

    /// False once the engine reports playback has stopped
    fn is_playing(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackingConfig {
    /// Dead-zone margin as a fraction of each frame dimension
    pub margin: f64,
    /// Cursor polling cadence
    pub poll_interval: Duration,
    /// Dead-man timeout: stop when a direction is held this long
    pub step_timeout: Duration,
    /// Wait after the session-start home recall
    pub settle_delay: Duration,
    /// Pose recalled at session start and on exit-and-restore
    pub home: PresetSlot,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            margin: DEAD_ZONE_MARGIN,
            poll_interval: POLL_INTERVAL,
            step_timeout: STEP_TIME,
            settle_delay: SETTLE_TIME,
            home: PresetSlot::Home,
        }
    }
}

/// Why a tracking session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The playback engine reported a stop.
    PlaybackStopped,
    /// The cursor traced an exit gesture.
    Escape(EscapeGesture),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// No frame dimensions yet; the camera is never driven blind.
    AwaitingFrame,
    Tracking,
}

/// One cursor-driven control session over one camera. All state lives here
/// for exactly the session's lifetime; dispatches are strictly sequential.
pub struct TrackingSession<P: Playback> {
    camera: Hi3510Cam,
    playback: P,
    config: TrackingConfig,
    phase: Phase,
    frame: Option<FrameSize>,
    dead_zone: Option<DeadZone>,
    direction: Direction,
    last_change: Instant,
    escape: EscapeWindow,
}

impl<P: Playback> TrackingSession<P> {
    pub fn new(camera: Hi3510Cam, playback: P) -> Self {
        Self::with_config(camera, playback, TrackingConfig::default())
    }

    pub fn with_config(camera: Hi3510Cam, playback: P, config: TrackingConfig) -> Self {
        Self {
            camera,
            playback,
            config,
            phase: Phase::AwaitingFrame,
            frame: None,
            dead_zone: None,
            direction: Direction::Center,
            last_change: Instant::now(),
            escape: EscapeWindow::new(),
        }
    }

    /// Drive the session until an exit gesture or a playback stop.
    pub async fn run(mut self) -> SessionEnd {
        let mut ticker = interval(self.config.poll_interval);

        loop {
            ticker.tick().await;

            if !self.playback.is_playing() {
                info!("playback stopped, ending session");
                self.camera.stop().await;
                return SessionEnd::PlaybackStopped;
            }

            if let Some(end) = self.tick(Instant::now()).await {
                return end;
            }
        }
    }

    async fn tick(&mut self, now: Instant) -> Option<SessionEnd> {
        match self.phase {
            Phase::AwaitingFrame => {
                self.await_frame().await;
                None
            }
            Phase::Tracking => self.track(now).await,
        }
    }

    /// Hold until the playback engine reports frame dimensions, then take a
    /// known start pose. No frame info means no polling, indefinitely.
    async fn await_frame(&mut self) {
        let Some(size) = self.playback.frame_size() else {
            return;
        };

        self.rebuild_dead_zone(size);
        info!(
            width = size.width,
            height = size.height,
            "frame size known, tracking cursor"
        );

        self.camera.goto_point(self.config.home).await;
        sleep(self.config.settle_delay).await;

        self.phase = Phase::Tracking;
        self.direction = Direction::Center;
        self.last_change = Instant::now();
    }

    async fn track(&mut self, now: Instant) -> Option<SessionEnd> {
        if let Some(size) = self.playback.frame_size()
            && self.frame != Some(size)
        {
            debug!(
                width = size.width,
                height = size.height,
                "frame size changed, rebuilding dead zone"
            );
            self.rebuild_dead_zone(size);
        }

        let Some(zone) = self.dead_zone else {
            return None;
        };

        let (x, y) = self.playback.cursor();
        let direction = zone.classify(x, y);

        // Direction changes first: a change on this tick resets the
        // dead-man clock before the timeout below is evaluated.
        if direction != self.direction {
            self.direction = direction;
            self.last_change = now;
            self.escape.record(direction);

            if direction == Direction::Center {
                self.camera.stop().await;
            } else {
                self.camera.move_toward(direction).await;
            }
        }

        if self.camera.is_moving() && now.duration_since(self.last_change) > self.config.step_timeout
        {
            debug!("direction held past the step timeout, stopping");
            self.camera.stop().await;
        }

        if let Some(signal) = self.escape.signal() {
            info!("escape gesture {signal:?}, ending session");
            self.camera.stop().await;
            if signal == EscapeGesture::ExitAndRestore {
                self.camera.goto_point(self.config.home).await;
            }
            return Some(SessionEnd::Escape(signal));
        }

        None
    }

    fn rebuild_dead_zone(&mut self, size: FrameSize) {
        self.frame = Some(size);
        self.dead_zone = Some(DeadZone::new(size, self.config.margin));
    }
}
