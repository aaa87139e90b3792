//! 分頁模型

use serde::{Deserialize, Serialize};

/// 分頁結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// 頁碼（從 1 開始）
    pub page: u64,

    /// 每頁筆數
    pub limit: u64,

    /// 起始位移
    pub offset: u64,

    /// 總筆數
    pub total: u64,

    /// 是否為最後一頁
    pub is_last_page: bool,

    /// 本頁資料
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// 創建分頁結果
    pub fn new(page: u64, limit: u64, total: u64, items: Vec<T>) -> Self {
        Self {
            page,
            limit,
            offset: page.saturating_sub(1).saturating_mul(limit),
            total,
            is_last_page: page.saturating_mul(limit) >= total,
            items,
        }
    }

    /// 總頁數
    pub fn total_pages(&self) -> u64 {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(self.limit)
    }
}
