//! # Pack Optimizer
//!
//! 包裝組合優化：在可用規格下，以最少出貨量滿足訂單，出貨量相同時取最少包數。
//!
//! 搜尋空間上限為 `訂購數量 + 最大規格`，時間與記憶體皆與訂購數量成正比；
//! 對延遲敏感的呼叫端應自行限制訂購數量。

mod best_first;
mod breadth_first;
pub mod table;

use pack_core::{CalculationResult, PackBreakdown, PackError, Result, SearchStrategy};

pub use table::{ReachableState, SearchTable};

/// 優化結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackSolution {
    /// 包裝組合
    pub packs: PackBreakdown,

    /// 出貨總量
    pub total_shipped: i64,

    /// 總包數
    pub pack_count: u64,

    /// 已展開的可達總量數
    pub explored_states: usize,
}

impl PackSolution {
    /// 轉換為訂單計算結果
    pub fn into_calculation_result(self, items_ordered: i64) -> CalculationResult {
        CalculationResult::new(items_ordered, self.packs)
    }
}

/// 包裝優化器
#[derive(Debug, Clone, Copy, Default)]
pub struct PackOptimizer {
    strategy: SearchStrategy,
}

impl PackOptimizer {
    /// 創建指定搜尋策略的優化器
    pub fn new(strategy: SearchStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    /// 計算最佳包裝組合
    ///
    /// # 錯誤
    /// * `InvalidQuantity` - 訂購數量 ≤ 0
    /// * `NoSizesAvailable` - 沒有任何規格
    /// * `InvalidPackSize` - 規格 ≤ 0
    /// * `QuantityOutOfRange` - 最大可達總量（訂購數量 - 1 + 最大規格）溢出 i64
    /// * `NoFeasibleSolution` - 搜尋後沒有任何總量 ≥ 訂購數量
    pub fn solve(&self, quantity: i64, sizes: &[i64]) -> Result<PackSolution> {
        if quantity <= 0 {
            return Err(PackError::InvalidQuantity(quantity));
        }
        if sizes.is_empty() {
            return Err(PackError::NoSizesAvailable);
        }

        let sizes = normalize_sizes(sizes)?;
        let largest = sizes.first().copied().ok_or(PackError::NoSizesAvailable)?;
        // 只展開小於訂購數量的總量，最大後繼為 (quantity - 1) + largest
        (quantity - 1)
            .checked_add(largest)
            .ok_or(PackError::QuantityOutOfRange(quantity))?;

        let table = match self.strategy {
            SearchStrategy::BreadthFirst => breadth_first::search(quantity, &sizes),
            SearchStrategy::BestFirst => best_first::search(quantity, &sizes),
        };

        let best_total = table
            .best_at_or_above(quantity)
            .ok_or(PackError::NoFeasibleSolution(quantity))?;
        let best = table
            .get(best_total)
            .copied()
            .ok_or(PackError::NoFeasibleSolution(quantity))?;
        let packs = table
            .reconstruct(best_total)
            .ok_or(PackError::NoFeasibleSolution(quantity))?;

        tracing::debug!(
            "包裝優化完成：訂購 {}，出貨 {}，包數 {}，發現總量 {}，展開 {}（{:?}）",
            quantity,
            best.total_shipped,
            best.pack_count,
            table.len(),
            table.expanded(),
            self.strategy
        );

        Ok(PackSolution {
            packs,
            total_shipped: best.total_shipped,
            pack_count: best.pack_count,
            explored_states: table.expanded(),
        })
    }
}

/// 以預設策略計算最佳包裝組合，回傳 規格 → 包數
pub fn optimize(quantity: i64, sizes: &[i64]) -> Result<PackBreakdown> {
    PackOptimizer::default()
        .solve(quantity, sizes)
        .map(|solution| solution.packs)
}

/// 去重並由大到小排序規格；規格 ≤ 0 時回傳錯誤
pub fn normalize_sizes(sizes: &[i64]) -> Result<Vec<i64>> {
    if let Some(&invalid) = sizes.iter().find(|&&size| size <= 0) {
        return Err(PackError::InvalidPackSize(invalid));
    }

    let mut sizes = sizes.to_vec();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes.dedup();
    Ok(sizes)
}
