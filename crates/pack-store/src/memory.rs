//! 記憶體內包裝規格儲存庫

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use pack_core::{PackError, PackSize, PackSizeRepository, Page, Result};
use uuid::Uuid;

/// 記憶體內儲存庫（依新增順序保存）
#[derive(Debug, Default)]
pub struct InMemoryPackSizeRepository {
    pack_sizes: RwLock<Vec<PackSize>>,
}

impl InMemoryPackSizeRepository {
    /// 創建空的儲存庫
    pub fn new() -> Self {
        Self::default()
    }

    /// 以規格數量值建立儲存庫，遇到無效規格即失敗
    pub fn with_sizes(sizes: &[i64]) -> Result<Self> {
        let repository = Self::new();
        for &size in sizes {
            repository.create(PackSize::new(size)?)?;
        }
        Ok(repository)
    }

    /// 分頁查詢並組成分頁結果
    pub fn paginate(&self, page: u64, limit: u64) -> Result<Page<PackSize>> {
        let (items, total) = self.find_all_paginated(page, limit)?;
        Ok(Page::new(page, limit, total, items))
    }

    /// 規格筆數
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<PackSize>>> {
        self.pack_sizes
            .read()
            .map_err(|e| PackError::Storage(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<PackSize>>> {
        self.pack_sizes
            .write()
            .map_err(|e| PackError::Storage(e.to_string()))
    }
}

impl PackSizeRepository for InMemoryPackSizeRepository {
    /// 新增規格；ID 已存在時原位覆寫該筆紀錄
    fn create(&self, mut pack_size: PackSize) -> Result<PackSize> {
        pack_size.validate()?;

        let now = Utc::now();
        pack_size.created_at = now;
        pack_size.updated_at = now;

        let mut pack_sizes = self.write()?;
        match pack_sizes.iter_mut().find(|p| p.id == pack_size.id) {
            Some(existing) => *existing = pack_size.clone(),
            None => pack_sizes.push(pack_size.clone()),
        }

        tracing::debug!("新增包裝規格 {}：{}", pack_size.id, pack_size.size);
        Ok(pack_size)
    }

    fn find_all(&self) -> Result<Vec<PackSize>> {
        Ok(self.read()?.clone())
    }

    fn find_all_paginated(&self, page: u64, limit: u64) -> Result<(Vec<PackSize>, u64)> {
        if page == 0 || limit == 0 {
            return Err(PackError::InvalidPagination { page, limit });
        }

        let pack_sizes = self.read()?;
        let total = pack_sizes.len() as u64;

        let start = (page - 1).saturating_mul(limit);
        if start >= total {
            return Ok((Vec::new(), total));
        }
        let end = start.saturating_add(limit).min(total);

        let items = pack_sizes[start as usize..end as usize].to_vec();
        Ok((items, total))
    }

    fn find_by_id(&self, id: Uuid) -> Result<PackSize> {
        self.read()?
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(PackError::PackSizeNotFound(id))
    }

    fn update(&self, mut pack_size: PackSize) -> Result<PackSize> {
        pack_size.validate()?;

        let mut pack_sizes = self.write()?;
        let existing = pack_sizes
            .iter_mut()
            .find(|p| p.id == pack_size.id)
            .ok_or(PackError::PackSizeNotFound(pack_size.id))?;

        pack_size.created_at = existing.created_at;
        pack_size.touch();
        *existing = pack_size.clone();

        tracing::debug!("更新包裝規格 {}：{}", pack_size.id, pack_size.size);
        Ok(pack_size)
    }

    fn delete(&self, id: Uuid) -> Result<()> {
        let mut pack_sizes = self.write()?;
        let index = pack_sizes
            .iter()
            .position(|p| p.id == id)
            .ok_or(PackError::PackSizeNotFound(id))?;
        pack_sizes.remove(index);

        tracing::debug!("刪除包裝規格 {}", id);
        Ok(())
    }
}
