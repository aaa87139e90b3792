//! 包裝規格過濾

use pack_core::{PackError, Result};

/// 規格過濾器
pub struct SizeSanitizer;

impl SizeSanitizer {
    /// 過濾規格：去重、由大到小排序
    ///
    /// # 參數
    /// * `reject_invalid` - 遇到非正數規格時的處理方式
    ///   - false: 略過並記錄警告
    ///   - true: 回傳 `InvalidPackSize`
    pub fn sanitize(sizes: &[i64], reject_invalid: bool) -> Result<Vec<i64>> {
        let mut valid = Vec::with_capacity(sizes.len());

        for &size in sizes {
            if size > 0 {
                valid.push(size);
            } else if reject_invalid {
                return Err(PackError::InvalidPackSize(size));
            } else {
                tracing::warn!("略過無效的包裝規格: {}", size);
            }
        }

        valid.sort_unstable_by(|a, b| b.cmp(a));
        valid.dedup();
        Ok(valid)
    }
}
