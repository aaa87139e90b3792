//! 包裝計算配置模型

use serde::{Deserialize, Serialize};

use crate::{PackError, Result};

/// 包裝計算配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackConfig {
    /// 搜尋策略
    pub strategy: SearchStrategy,

    /// 單筆訂單數量上限（None 表示不限制）
    ///
    /// 搜尋空間與訂購數量成正比，對延遲敏感的呼叫端應設置上限
    pub max_order_quantity: Option<i64>,

    /// 是否拒絕非正數的包裝規格
    /// - false: 略過無效規格並記錄警告（預設）
    /// - true: 遇到無效規格直接回傳錯誤
    pub reject_invalid_sizes: bool,
}

impl PackConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            strategy: SearchStrategy::BreadthFirst,
            max_order_quantity: None,
            reject_invalid_sizes: false,
        }
    }

    /// 從 JSON 載入配置，缺少的欄位使用預設值
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| PackError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 建構器模式：設置搜尋策略
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// 建構器模式：設置訂單數量上限
    pub fn with_max_order_quantity(mut self, limit: i64) -> Self {
        self.max_order_quantity = Some(limit);
        self
    }

    /// 建構器模式：設置是否拒絕無效規格
    pub fn with_reject_invalid_sizes(mut self, reject: bool) -> Self {
        self.reject_invalid_sizes = reject;
        self
    }

    /// 驗證配置
    pub fn validate(&self) -> Result<()> {
        if let Some(limit) = self.max_order_quantity {
            if limit <= 0 {
                return Err(PackError::InvalidConfig(format!(
                    "max_order_quantity 必須大於 0，目前為 {}",
                    limit
                )));
            }
        }
        Ok(())
    }

    /// 檢查訂購數量是否在上限內
    pub fn check_order_quantity(&self, quantity: i64) -> Result<()> {
        match self.max_order_quantity {
            Some(limit) if quantity > limit => Err(PackError::OrderTooLarge {
                requested: quantity,
                limit,
            }),
            _ => Ok(()),
        }
    }
}

impl Default for PackConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// 搜尋策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchStrategy {
    /// 廣度優先（Breadth First）- 依發現順序展開，每個總量只排程一次
    #[default]
    BreadthFirst,

    /// 最佳優先（Best First）- 優先佇列完整鬆弛，狀態改善時重新排程
    BestFirst,
}
