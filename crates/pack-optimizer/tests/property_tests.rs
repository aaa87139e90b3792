//! 包裝優化器性質測試
//!
//! 以窮舉動態規劃（涵蓋 `訂購數量 + 最大規格` 內所有總量）驗證每個解。
//!
//! - 出貨量不低於訂購數量
//! - `[訂購數量, 出貨量)` 之間沒有可達總量
//! - 同出貨量下沒有更少包數的組合
//! - 廣度優先與最佳優先的出貨量、包數一致

use pack_core::{PackBreakdown, PackError, SearchStrategy};
use pack_optimizer::PackOptimizer;
use proptest::prelude::*;

/// 各總量恰好達成所需的最少包數，不可達為 None
fn fewest_packs_table(limit: i64, sizes: &[i64]) -> Vec<Option<u64>> {
    let len = usize::try_from(limit).expect("limit fits in usize") + 1;
    let mut table: Vec<Option<u64>> = vec![None; len];
    table[0] = Some(0);

    for total in 1..len {
        for &size in sizes {
            let size = usize::try_from(size).expect("size fits in usize");
            if size > total {
                continue;
            }
            if let Some(previous) = table[total - size] {
                let candidate = previous + 1;
                match table[total] {
                    Some(best) if best <= candidate => {}
                    _ => table[total] = Some(candidate),
                }
            }
        }
    }

    table
}

/// 參考最佳解：(出貨量, 包數)
fn reference_optimum(quantity: i64, sizes: &[i64]) -> (i64, u64) {
    let largest = sizes.iter().copied().max().expect("non-empty sizes");
    let table = fewest_packs_table(quantity + largest, sizes);
    let start = usize::try_from(quantity).expect("quantity fits in usize");

    table
        .iter()
        .enumerate()
        .skip(start)
        .find_map(|(total, packs)| packs.map(|p| (total as i64, p)))
        .expect("some total at or above quantity is reachable")
}

fn shipped(packs: &PackBreakdown) -> i64 {
    packs.iter().map(|(&size, &count)| size * count as i64).sum()
}

fn sizes_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(1_i64..=60, 1..=4)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// 預設策略與窮舉最佳解一致
    #[test]
    fn breadth_first_is_optimal(quantity in 1_i64..=400, sizes in sizes_strategy()) {
        let solution = PackOptimizer::default()
            .solve(quantity, &sizes)
            .expect("valid input has a solution");
        let (best_total, best_packs) = reference_optimum(quantity, &sizes);

        prop_assert!(solution.total_shipped >= quantity);
        prop_assert_eq!(solution.total_shipped, best_total);
        prop_assert_eq!(solution.pack_count, best_packs);
    }

    /// 包裝組合與摘要欄位一致
    #[test]
    fn composition_matches_summary(quantity in 1_i64..=400, sizes in sizes_strategy()) {
        let solution = PackOptimizer::default()
            .solve(quantity, &sizes)
            .expect("valid input has a solution");

        prop_assert!(!solution.packs.is_empty());
        prop_assert_eq!(shipped(&solution.packs), solution.total_shipped);
        prop_assert_eq!(solution.packs.values().sum::<u64>(), solution.pack_count);
        for size in solution.packs.keys() {
            prop_assert!(sizes.contains(size), "size {} was not offered", size);
        }
    }

    /// 完整鬆弛不會優於只展開一次的搜尋
    #[test]
    fn strategies_agree(quantity in 1_i64..=400, sizes in sizes_strategy()) {
        let breadth = PackOptimizer::new(SearchStrategy::BreadthFirst)
            .solve(quantity, &sizes)
            .expect("valid input has a solution");
        let best = PackOptimizer::new(SearchStrategy::BestFirst)
            .solve(quantity, &sizes)
            .expect("valid input has a solution");

        prop_assert_eq!(breadth.total_shipped, best.total_shipped);
        prop_assert_eq!(breadth.pack_count, best.pack_count);
        prop_assert_eq!(shipped(&best.packs), best.total_shipped);
    }

    /// 非正數訂購數量一律拒絕
    #[test]
    fn non_positive_quantity_is_rejected(quantity in i64::MIN..=0, sizes in sizes_strategy()) {
        prop_assert_eq!(
            PackOptimizer::default().solve(quantity, &sizes),
            Err(PackError::InvalidQuantity(quantity))
        );
    }
}
