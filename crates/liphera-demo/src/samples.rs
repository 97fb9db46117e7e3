//! 데모 문구.

/// 시뮬레이션 립리더가 순서대로 반환하는 예시 문장
pub const SAMPLE_TEXTS: [&str; 10] = [
    "Hello, how are you today?",
    "I need some help with this.",
    "Thank you very much.",
    "Could you please repeat that?",
    "I understand what you mean.",
    "Let's work together on this.",
    "Have a wonderful day!",
    "Nice to meet you.",
    "See you later.",
    "Good morning everyone.",
];

/// 녹화 시작 직후 표시 문구
pub const STARTING_MESSAGE: &str = "Starting lip reading detection...";

/// 카메라 권한 거부 시 표시 문구
pub const CAMERA_DENIED_MESSAGE: &str = "Camera access denied. Please enable camera permissions.";
