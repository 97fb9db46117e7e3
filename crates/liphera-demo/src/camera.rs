//! 시뮬레이션 카메라.

use async_trait::async_trait;
use liphera_core::error::CoreError;
use liphera_core::models::detection::CaptureConstraints;
use liphera_core::ports::camera::CameraAccess;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, warn};

/// 시뮬레이션 카메라: `CameraAccess` 포트 구현
#[derive(Debug)]
pub struct SimulatedCamera {
    granted: bool,
    active: AtomicBool,
}

impl SimulatedCamera {
    /// 권한을 허용하는 카메라
    pub fn granted() -> Self {
        Self {
            granted: true,
            active: AtomicBool::new(false),
        }
    }

    /// 권한을 거부하는 카메라
    pub fn denied() -> Self {
        Self {
            granted: false,
            active: AtomicBool::new(false),
        }
    }

    /// 스트림 활성 여부
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CameraAccess for SimulatedCamera {
    async fn request_video(&self, constraints: &CaptureConstraints) -> Result<(), CoreError> {
        if !self.granted {
            warn!("카메라 권한 거부");
            return Err(CoreError::PermissionDenied("camera".to_string()));
        }
        self.active.store(true, Ordering::SeqCst);
        debug!(
            "카메라 스트림 시작 ({}x{}, audio={})",
            constraints.width, constraints.height, constraints.audio
        );
        Ok(())
    }

    async fn release(&self) {
        if self.active.swap(false, Ordering::SeqCst) {
            debug!("카메라 스트림 해제");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn granted_camera_activates_and_releases() {
        let camera = SimulatedCamera::granted();
        camera
            .request_video(&CaptureConstraints::default())
            .await
            .unwrap();
        assert!(camera.is_active());
        camera.release().await;
        assert!(!camera.is_active());
    }

    #[tokio::test]
    async fn denied_camera_stays_inactive() {
        let camera = SimulatedCamera::denied();
        assert_matches!(
            camera.request_video(&CaptureConstraints::default()).await,
            Err(CoreError::PermissionDenied(_))
        );
        assert!(!camera.is_active());
    }
}
