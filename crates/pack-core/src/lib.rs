//! # Pack Core
//!
//! 核心資料模型與類型定義

pub mod config;
pub mod pack_size;
pub mod page;
pub mod repository;
pub mod result;

// Re-export 主要類型
pub use config::{PackConfig, SearchStrategy};
pub use pack_size::PackSize;
pub use page::Page;
pub use repository::PackSizeRepository;
pub use result::{CalculationResult, PackBreakdown};

/// 包裝計算錯誤類型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PackError {
    #[error("無效的訂購數量: {0}（必須大於 0）")]
    InvalidQuantity(i64),

    #[error("沒有可用的包裝規格")]
    NoSizesAvailable,

    #[error("找不到可滿足訂購數量 {0} 的包裝組合")]
    NoFeasibleSolution(i64),

    #[error("無效的包裝規格: {0}（必須大於 0）")]
    InvalidPackSize(i64),

    #[error("訂購數量超出可搜尋範圍: {0}")]
    QuantityOutOfRange(i64),

    #[error("訂購數量 {requested} 超過上限 {limit}")]
    OrderTooLarge { requested: i64, limit: i64 },

    #[error("找不到包裝規格: {0}")]
    PackSizeNotFound(uuid::Uuid),

    #[error("無效的分頁參數: page={page}, limit={limit}")]
    InvalidPagination { page: u64, limit: u64 },

    #[error("無效的配置: {0}")]
    InvalidConfig(String),

    #[error("儲存錯誤: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, PackError>;
