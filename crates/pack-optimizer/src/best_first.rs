//! 最佳優先搜尋（完整鬆弛）

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::table::{Offer, SearchTable};

/// 以 (出貨總量, 包數) 為鍵的優先佇列展開可達總量
///
/// 狀態改善時重新排程，過期的佇列項目出列時略過。
pub(crate) fn search(quantity: i64, sizes: &[i64]) -> SearchTable {
    let mut table = SearchTable::new();
    let mut heap = BinaryHeap::from([Reverse((0i64, 0u64, 0i64))]);

    while let Some(Reverse((total_shipped, pack_count, current))) = heap.pop() {
        let Some(state) = table.get(current).copied() else {
            continue;
        };

        // 過期項目
        if state.rank() != (total_shipped, pack_count) {
            continue;
        }

        if current >= quantity {
            continue;
        }
        table.mark_expanded();

        for &size in sizes {
            let next = current + size;
            let candidate = state.extend(current, size);
            match table.offer(next, candidate) {
                Offer::Discovered | Offer::Improved => {
                    heap.push(Reverse((candidate.total_shipped, candidate.pack_count, next)));
                }
                Offer::Rejected => {}
            }
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expands_each_total_once() {
        let table = search(100, &[7, 5, 3]);

        // 出貨總量即總量本身，依總量遞增出列時狀態已定案
        assert!(table.expanded() <= 100);
        assert_eq!(table.get(15).map(|s| s.pack_count), Some(3));
        assert_eq!(table.get(14).map(|s| s.pack_count), Some(2));
    }
}
