//! 시뮬레이션 립리더.
//!
//! 예시 문장을 순서대로 돌려주고, 신뢰도는 설정된 범위에서 균등 추출한다.

use async_trait::async_trait;
use liphera_core::config::DemoConfig;
use liphera_core::error::CoreError;
use liphera_core::models::detection::Detection;
use liphera_core::ports::lip_reader::LipReader;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::trace;

use crate::samples::SAMPLE_TEXTS;

const DEFAULT_MIN_CONFIDENCE: f32 = 85.0;
const DEFAULT_MAX_CONFIDENCE: f32 = 100.0;

/// 시뮬레이션 립리더: `LipReader` 포트 구현
#[derive(Debug)]
pub struct SimulatedLipReader {
    samples: Vec<String>,
    next_index: AtomicUsize,
    min_confidence: f32,
    max_confidence: f32,
}

impl SimulatedLipReader {
    /// 기본 예시 문장, 신뢰도 [85, 100)
    pub fn new() -> Self {
        Self::build(DEFAULT_MIN_CONFIDENCE, DEFAULT_MAX_CONFIDENCE)
    }

    /// 신뢰도 범위 지정 (순서가 뒤집히면 교환, NaN/무한대는 거부)
    pub fn with_confidence_range(min: f32, max: f32) -> Result<Self, CoreError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(CoreError::Config(format!(
                "신뢰도 범위가 유효하지 않습니다: [{min}, {max}]"
            )));
        }
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Ok(Self::build(min, max))
    }

    pub fn from_config(config: &DemoConfig) -> Result<Self, CoreError> {
        Self::with_confidence_range(config.min_confidence, config.max_confidence)
    }

    fn build(min_confidence: f32, max_confidence: f32) -> Self {
        Self {
            samples: SAMPLE_TEXTS.iter().map(|s| s.to_string()).collect(),
            next_index: AtomicUsize::new(0),
            min_confidence,
            max_confidence,
        }
    }

    /// 문장 목록 교체. 빈 목록은 거부한다.
    pub fn with_samples(mut self, samples: Vec<String>) -> Result<Self, CoreError> {
        if samples.is_empty() {
            return Err(CoreError::Config("데모 문장 목록이 비어 있습니다".to_string()));
        }
        self.samples = samples;
        self.next_index.store(0, Ordering::SeqCst);
        Ok(self)
    }

    pub fn confidence_range(&self) -> (f32, f32) {
        (self.min_confidence, self.max_confidence)
    }

    fn draw_confidence(&self) -> f32 {
        let span = self.max_confidence - self.min_confidence;
        self.min_confidence + rand::random::<f32>() * span
    }
}

impl Default for SimulatedLipReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LipReader for SimulatedLipReader {
    async fn detect(&self) -> Result<Detection, CoreError> {
        let index = self.next_index.fetch_add(1, Ordering::SeqCst) % self.samples.len();
        let confidence = self.draw_confidence();
        trace!("감지 #{index}: 신뢰도 {confidence:.1}");
        Ok(Detection::new(self.samples[index].clone(), confidence))
    }

    fn reset(&self) {
        self.next_index.store(0, Ordering::SeqCst);
    }
}
