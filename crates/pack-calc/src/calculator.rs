//! 訂單包裝計算器

use pack_core::{CalculationResult, PackConfig, PackError, PackSizeRepository};
use pack_optimizer::PackOptimizer;
use rayon::prelude::*;

use crate::sanitize::SizeSanitizer;

/// 訂單包裝計算器
pub struct PackCalculator<R> {
    /// 包裝規格儲存庫
    repository: R,

    /// 計算配置
    config: PackConfig,

    /// 包裝優化器
    optimizer: PackOptimizer,
}

impl<R: PackSizeRepository> PackCalculator<R> {
    /// 以預設配置創建計算器
    pub fn new(repository: R) -> Self {
        Self::with_config(repository, PackConfig::default())
    }

    /// 以指定配置創建計算器
    pub fn with_config(repository: R, config: PackConfig) -> Self {
        let optimizer = PackOptimizer::new(config.strategy);
        Self {
            repository,
            config,
            optimizer,
        }
    }

    pub fn config(&self) -> &PackConfig {
        &self.config
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// 取得過濾後的可用規格（由大到小）
    pub fn pack_sizes(&self) -> pack_core::Result<Vec<i64>> {
        let sizes = self.repository.sizes()?;
        SizeSanitizer::sanitize(&sizes, self.config.reject_invalid_sizes)
    }

    /// 計算訂單的最佳包裝組合
    pub fn calculate_packs_for_order(
        &self,
        items_ordered: i64,
    ) -> pack_core::Result<CalculationResult> {
        tracing::info!("開始包裝計算：訂購數量 {}", items_ordered);

        // 先驗證數量，無效時不讀取儲存庫
        if items_ordered <= 0 {
            return Err(PackError::InvalidQuantity(items_ordered));
        }
        self.config.check_order_quantity(items_ordered)?;

        let sizes = self.pack_sizes()?;
        tracing::debug!("可用規格: {:?}", sizes);

        let start_time = std::time::Instant::now();
        let result = self.calculate_with_sizes(items_ordered, &sizes)?;

        tracing::info!(
            "包裝計算完成，耗時 {:?}：出貨 {}，包數 {}",
            start_time.elapsed(),
            result.total_items,
            result.pack_count()
        );

        Ok(result)
    }

    /// 平行計算多筆訂單，結果順序與輸入一致
    ///
    /// 規格只讀取一次，各訂單獨立計算
    pub fn calculate_batch(&self, orders: &[i64]) -> Vec<pack_core::Result<CalculationResult>> {
        tracing::info!("開始批次包裝計算：{} 筆訂單", orders.len());

        let sizes = match self.pack_sizes() {
            Ok(sizes) => sizes,
            Err(e) => return orders.iter().map(|_| Err(e.clone())).collect(),
        };

        orders
            .par_iter()
            .map(|&items_ordered| self.calculate_with_sizes(items_ordered, &sizes))
            .collect()
    }

    /// 單筆與批次共用的計算路徑
    fn calculate_with_sizes(
        &self,
        items_ordered: i64,
        sizes: &[i64],
    ) -> pack_core::Result<CalculationResult> {
        if items_ordered <= 0 {
            return Err(PackError::InvalidQuantity(items_ordered));
        }
        self.config.check_order_quantity(items_ordered)?;
        if sizes.is_empty() {
            return Err(PackError::NoSizesAvailable);
        }

        let solution = self.optimizer.solve(items_ordered, sizes)?;
        Ok(solution.into_calculation_result(items_ordered))
    }
}
