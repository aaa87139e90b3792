//! 包裝計算結果模型

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// 包裝組合：規格 → 使用包數（依規格排序）
pub type PackBreakdown = BTreeMap<i64, u64>;

/// 訂單包裝計算結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// 訂購數量
    pub items_ordered: i64,

    /// 實際出貨數量（Σ 規格 × 包數）
    pub total_items: i64,

    /// 包裝組合
    pub packs: PackBreakdown,
}

impl CalculationResult {
    /// 創建計算結果，出貨數量由包裝組合推算
    pub fn new(items_ordered: i64, packs: PackBreakdown) -> Self {
        let total_items = shipped_total(&packs);
        Self {
            items_ordered,
            total_items,
            packs,
        }
    }

    /// 總包數
    pub fn pack_count(&self) -> u64 {
        self.packs.values().sum()
    }

    /// 超出訂購數量的部分
    pub fn surplus(&self) -> i64 {
        (self.total_items - self.items_ordered).max(0)
    }

    /// 是否足以滿足訂單
    pub fn fulfils_order(&self) -> bool {
        self.total_items >= self.items_ordered
    }
}

/// 計算包裝組合的出貨總量
pub fn shipped_total(packs: &PackBreakdown) -> i64 {
    packs
        .iter()
        .map(|(&size, &count)| size.saturating_mul(i64::try_from(count).unwrap_or(i64::MAX)))
        .fold(0i64, i64::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::single_pack(500, &[(500, 1)], 500)]
    #[case::multiple_packs(750, &[(500, 1), (250, 1)], 750)]
    #[case::multiple_quantities(1000, &[(250, 4)], 1000)]
    #[case::empty_packs(0, &[], 0)]
    fn test_new_calculation_result(
        #[case] items_ordered: i64,
        #[case] packs: &[(i64, u64)],
        #[case] expected_total: i64,
    ) {
        let packs: PackBreakdown = packs.iter().copied().collect();
        let result = CalculationResult::new(items_ordered, packs.clone());

        assert_eq!(result.items_ordered, items_ordered);
        assert_eq!(result.total_items, expected_total);
        assert_eq!(result.packs, packs);
    }

    #[test]
    fn test_pack_count_and_surplus() {
        let packs = PackBreakdown::from([(500, 1), (100, 3)]);
        let result = CalculationResult::new(751, packs);

        assert_eq!(result.total_items, 800);
        assert_eq!(result.pack_count(), 4);
        assert_eq!(result.surplus(), 49);
        assert!(result.fulfils_order());
    }

    #[test]
    fn test_serialize_camel_case() {
        let result = CalculationResult::new(10, PackBreakdown::from([(5, 2)]));
        let json = serde_json::to_string(&result).unwrap();

        assert_eq!(json, r#"{"itemsOrdered":10,"totalItems":10,"packs":{"5":2}}"#);

        let back: CalculationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
