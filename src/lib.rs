//! # Pack
//!
//! 訂單包裝計算引擎：以最少出貨量、最少包數滿足訂單
//!
//! ```
//! use pack::{optimize, PackBreakdown};
//!
//! let packs = optimize(751, &[500, 250, 100]).unwrap();
//! assert_eq!(packs, PackBreakdown::from([(500, 1), (100, 3)]));
//! ```

pub use pack_calc::{PackCalculator, SizeSanitizer};
pub use pack_core::{
    CalculationResult, PackBreakdown, PackConfig, PackError, PackSize, PackSizeRepository, Page,
    Result, SearchStrategy,
};
pub use pack_optimizer::{optimize, PackOptimizer, PackSolution};
pub use pack_store::InMemoryPackSizeRepository;
