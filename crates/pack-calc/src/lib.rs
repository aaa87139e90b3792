//! # Pack Calculation Engine
//!
//! 訂單包裝計算服務：從儲存庫取得規格、過濾無效規格、呼叫優化器

pub mod calculator;
pub mod sanitize;

// Re-export 主要類型
pub use calculator::PackCalculator;
pub use sanitize::SizeSanitizer;
