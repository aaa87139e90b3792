//! 包裝規格模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{PackError, Result};

/// 包裝規格（可無限次使用的出貨單位）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackSize {
    /// 規格ID
    pub id: Uuid,

    /// 每包數量
    pub size: i64,

    /// 建立時間
    pub created_at: DateTime<Utc>,

    /// 更新時間
    pub updated_at: DateTime<Utc>,
}

impl PackSize {
    /// 創建新的包裝規格
    pub fn new(size: i64) -> Result<Self> {
        Self::check_size(size)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            size,
            created_at: now,
            updated_at: now,
        })
    }

    /// 驗證規格
    pub fn validate(&self) -> Result<()> {
        Self::check_size(self.size)
    }

    /// 更新每包數量
    pub fn update(&mut self, size: i64) -> Result<()> {
        Self::check_size(size)?;
        self.size = size;
        self.touch();
        Ok(())
    }

    /// 刷新更新時間
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn check_size(size: i64) -> Result<()> {
        if size <= 0 {
            return Err(PackError::InvalidPackSize(size));
        }
        Ok(())
    }
}
