//! 包裝規格儲存介面

use uuid::Uuid;

use crate::{PackSize, Result};

/// 包裝規格儲存庫
///
/// 計算服務透過此介面取得可用規格；實作需可跨執行緒共用
pub trait PackSizeRepository: Send + Sync {
    /// 新增規格
    fn create(&self, pack_size: PackSize) -> Result<PackSize>;

    /// 取得所有規格
    fn find_all(&self) -> Result<Vec<PackSize>>;

    /// 分頁取得規格，回傳本頁資料與總筆數
    fn find_all_paginated(&self, page: u64, limit: u64) -> Result<(Vec<PackSize>, u64)>;

    /// 依ID取得規格
    fn find_by_id(&self, id: Uuid) -> Result<PackSize>;

    /// 更新規格
    fn update(&self, pack_size: PackSize) -> Result<PackSize>;

    /// 刪除規格
    fn delete(&self, id: Uuid) -> Result<()>;

    /// 取得所有規格的數量值
    fn sizes(&self) -> Result<Vec<i64>> {
        Ok(self.find_all()?.into_iter().map(|p| p.size).collect())
    }
}
