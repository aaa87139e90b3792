//! 廣度優先搜尋

use std::collections::VecDeque;

use crate::table::{Offer, SearchTable};

/// 依發現順序展開可達總量
///
/// 每個總量只排程一次；之後若找到較佳狀態只覆寫表格，不重新展開。
/// 佇列依包數非遞減出列，因此首次發現的狀態即為該總量的最少包數。
pub(crate) fn search(quantity: i64, sizes: &[i64]) -> SearchTable {
    let mut table = SearchTable::new();
    let mut queue = VecDeque::from([0i64]);

    while let Some(current) = queue.pop_front() {
        // 已達訂購數量，再加包只會增加出貨量
        if current >= quantity {
            continue;
        }

        let Some(state) = table.get(current).copied() else {
            continue;
        };
        table.mark_expanded();

        for &size in sizes {
            let next = current + size;
            if table.offer(next, state.extend(current, size)) == Offer::Discovered {
                queue.push_back(next);
            }
        }
    }

    table
}
