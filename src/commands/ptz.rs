use crate::camera::Hi3510Cam;
use crate::constants::{SCAN_TIME, STEP_TIME};
use crate::protocol::{Direction, PresetSlot, PtzCommand, ScanAxis};
use async_trait::async_trait;
use std::sync::atomic::Ordering;
use tokio::time::sleep;
use tracing::info;

#[async_trait]
pub trait Ptz: Send + Sync {
    /// Start continuous movement toward a direction
    async fn move_toward(&self, direction: Direction);

    /// Single jog: move toward a direction, wait one step, stop
    async fn move_step(&self, direction: Direction);

    /// Sweep along an axis for the scan duration, then stop
    async fn scan(&self, axis: ScanAxis);

    /// Halt movement; a no-op when the camera is already idle
    async fn stop(&self);

    /// Store the current pose into a preset slot
    async fn set_point(&self, slot: PresetSlot);

    /// Recall a stored pose
    async fn goto_point(&self, slot: PresetSlot);

    /// Check if a continuous move is in progress
    fn is_moving(&self) -> bool;
}

#[async_trait]
impl Ptz for Hi3510Cam {
    async fn move_toward(&self, direction: Direction) {
        if direction == Direction::Center {
            return;
        }
        info!("moving camera {direction}");
        self.moving.store(true, Ordering::Release);
        self.dispatch(PtzCommand::Move(direction)).await;
    }

    async fn move_step(&self, direction: Direction) {
        if direction == Direction::Center {
            return;
        }
        self.dispatch(PtzCommand::Move(direction)).await;
        sleep(STEP_TIME).await;
        self.dispatch(PtzCommand::Stop).await;
    }

    async fn scan(&self, axis: ScanAxis) {
        self.dispatch(PtzCommand::Scan(axis)).await;
        sleep(SCAN_TIME).await;
        self.dispatch(PtzCommand::Stop).await;
    }

    async fn stop(&self) {
        if self.moving.swap(false, Ordering::AcqRel) {
            info!("stopping camera");
            self.dispatch(PtzCommand::Stop).await;
        }
    }

    async fn set_point(&self, slot: PresetSlot) {
        self.stop().await;
        info!("storing camera pose in slot {}", slot.id());
        self.dispatch(PtzCommand::SetPoint(slot)).await;
    }

    async fn goto_point(&self, slot: PresetSlot) {
        self.stop().await;
        info!("recalling camera pose from slot {}", slot.id());
        self.dispatch(PtzCommand::GotoPoint(slot)).await;
    }

    fn is_moving(&self) -> bool {
        self.moving.load(Ordering::Acquire)
    }
}

impl Hi3510Cam {
    async fn dispatch(&self, command: PtzCommand) {
        if let Some(context) = command.context() {
            self.call(&context).await;
        }
    }
}
