//! # Pack Store
//!
//! 包裝規格儲存模組

pub mod memory;

// Re-export 主要類型
pub use memory::InMemoryPackSizeRepository;
