//! 데모 녹화 세션.
//!
//! 카메라 권한을 요청하고, 허용되면 주기적으로 립리더를 호출해
//! 감지 결과를 `watch` 채널로 발행한다.
//! 신뢰도 임계값 미만 결과는 표시하지 않고 보류 횟수만 센다.

use liphera_core::config::DemoConfig;
use liphera_core::error::CoreError;
use liphera_core::models::detection::{CameraStatus, CaptureConstraints, Detection};
use liphera_core::models::settings::ConfidenceThreshold;
use liphera_core::ports::camera::CameraAccess;
use liphera_core::ports::lip_reader::LipReader;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::languages::find_demo_language;
use crate::samples::{CAMERA_DENIED_MESSAGE, STARTING_MESSAGE};

/// 세션 상태 스냅샷
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoSnapshot {
    pub recording: bool,
    pub camera: CameraStatus,
    /// 화면에 표시되는 텍스트
    pub detected_text: String,
    /// 마지막으로 발행된 감지의 신뢰도 (%)
    pub confidence: Option<f32>,
    /// 감지 언어 코드
    pub language: String,
    /// 발행된 감지 수
    pub detections: u64,
    /// 임계값 미만으로 보류된 감지 수
    pub withheld: u64,
}

impl DemoSnapshot {
    fn idle(language: &str) -> Self {
        Self {
            recording: false,
            camera: CameraStatus::Idle,
            detected_text: String::new(),
            confidence: None,
            language: language.to_string(),
            detections: 0,
            withheld: 0,
        }
    }
}

/// 실행 중인 감지 루프
struct DetectionLoop {
    shutdown_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

/// 데모 세션
pub struct DemoSession {
    camera: Arc<dyn CameraAccess>,
    reader: Arc<dyn LipReader>,
    interval: Duration,
    threshold: ConfidenceThreshold,
    state: Arc<watch::Sender<DemoSnapshot>>,
    running: Option<DetectionLoop>,
}

impl DemoSession {
    /// 세션 생성. 설정의 언어가 데모 언어 목록에 없으면 에러.
    pub fn new(
        camera: Arc<dyn CameraAccess>,
        reader: Arc<dyn LipReader>,
        config: &DemoConfig,
        threshold: ConfidenceThreshold,
    ) -> Result<Self, CoreError> {
        let language = find_demo_language(&config.language).ok_or_else(|| {
            CoreError::validation("language", format!("지원하지 않는 언어: {}", config.language))
        })?;
        if config.detection_interval_ms == 0 {
            return Err(CoreError::validation("detection_interval_ms", "0보다 커야 합니다"));
        }

        let (state, _) = watch::channel(DemoSnapshot::idle(language.code));
        Ok(Self {
            camera,
            reader,
            interval: Duration::from_millis(config.detection_interval_ms),
            threshold,
            state: Arc::new(state),
            running: None,
        })
    }

    /// 스냅샷 수신기
    pub fn subscribe(&self) -> watch::Receiver<DemoSnapshot> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> DemoSnapshot {
        self.state.borrow().clone()
    }

    pub fn is_recording(&self) -> bool {
        self.running.is_some()
    }

    pub fn threshold(&self) -> ConfidenceThreshold {
        self.threshold
    }

    /// 감지 언어 변경 (녹화 중에도 가능)
    pub fn select_language(&mut self, code: &str) -> Result<(), CoreError> {
        let language = find_demo_language(code).ok_or_else(|| {
            CoreError::validation("language", format!("지원하지 않는 언어: {code}"))
        })?;
        self.state
            .send_modify(|s| s.language = language.code.to_string());
        debug!("감지 언어 변경: {} ({})", language.name, language.code);
        Ok(())
    }

    /// 녹화 시작
    ///
    /// 카메라 권한이 거부되면 녹화하지 않고 `Denied` 상태를 반환한다.
    /// 이미 녹화 중이면 현재 상태를 그대로 반환한다.
    pub async fn start(&mut self) -> CameraStatus {
        if self.running.is_some() {
            return self.state.borrow().camera.clone();
        }

        if let Err(e) = self
            .camera
            .request_video(&CaptureConstraints::default())
            .await
        {
            let reason = match e {
                CoreError::PermissionDenied(reason) => reason,
                other => other.to_string(),
            };
            warn!("녹화 시작 실패: {reason}");
            let status = CameraStatus::Denied(reason);
            self.state.send_modify(|s| {
                s.recording = false;
                s.camera = status.clone();
                s.detected_text = CAMERA_DENIED_MESSAGE.to_string();
                s.confidence = None;
            });
            return status;
        }

        self.reader.reset();
        self.state.send_modify(|s| {
            s.recording = true;
            s.camera = CameraStatus::Granted;
            s.detected_text = STARTING_MESSAGE.to_string();
            s.confidence = None;
        });

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = tokio::spawn(run_detection_loop(
            self.reader.clone(),
            self.state.clone(),
            self.interval,
            self.threshold,
            shutdown_rx,
        ));
        self.running = Some(DetectionLoop {
            shutdown_tx,
            handle,
        });

        info!(
            "데모 녹화 시작 (간격 {}ms, 임계값 {}%)",
            self.interval.as_millis(),
            self.threshold
        );
        CameraStatus::Granted
    }

    /// 녹화 중지. 감지 루프를 멈추고 카메라를 해제한 뒤 텍스트를 비운다.
    pub async fn stop(&mut self) {
        if let Some(running) = self.running.take() {
            let _ = running.shutdown_tx.send(true);
            if let Err(e) = running.handle.await {
                warn!("감지 루프 종료 에러: {e}");
            }
            info!("데모 녹화 중지");
        }

        self.camera.release().await;
        self.state.send_modify(|s| {
            s.recording = false;
            s.camera = CameraStatus::Idle;
            s.detected_text.clear();
            s.confidence = None;
        });
    }

    /// 표시 중인 텍스트 (비어 있으면 None)
    pub fn copy_text(&self) -> Option<String> {
        let state = self.state.borrow();
        if state.detected_text.is_empty() {
            None
        } else {
            Some(state.detected_text.clone())
        }
    }

    /// 표시 텍스트와 신뢰도 초기화
    pub fn clear_text(&self) {
        self.state.send_modify(|s| {
            s.detected_text.clear();
            s.confidence = None;
        });
    }
}

impl Drop for DemoSession {
    fn drop(&mut self) {
        if let Some(running) = self.running.take() {
            running.handle.abort();
        }
    }
}

async fn run_detection_loop(
    reader: Arc<dyn LipReader>,
    state: Arc<watch::Sender<DemoSnapshot>>,
    period: Duration,
    threshold: ConfidenceThreshold,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    // 첫 결과는 한 주기 뒤
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match reader.detect().await {
                    Ok(detection) => publish(&state, detection, threshold),
                    Err(e) => warn!("감지 실패: {e}"),
                }
            }
            _ = shutdown_rx.changed() => {
                debug!("감지 루프 종료");
                break;
            }
        }
    }
}

fn publish(
    state: &watch::Sender<DemoSnapshot>,
    detection: Detection,
    threshold: ConfidenceThreshold,
) {
    if !detection.meets_threshold(threshold.get()) {
        debug!(
            "임계값 미만 감지 보류: {:.1}% < {}%",
            detection.confidence, threshold
        );
        state.send_modify(|s| s.withheld += 1);
        return;
    }

    state.send_modify(|s| {
        s.detected_text = detection.text;
        s.confidence = Some(detection.confidence);
        s.detections += 1;
    });
}
