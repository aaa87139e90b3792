//! 可達總量搜尋表

use std::collections::HashMap;

use pack_core::PackBreakdown;

/// 可達總量的最佳已知狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReachableState {
    /// 出貨總量
    pub total_shipped: i64,

    /// 使用包數
    pub pack_count: u64,

    /// 前一個可達總量（起點為 None）
    pub predecessor: Option<i64>,

    /// 抵達此總量所用的規格（起點為 None）
    pub size_used: Option<i64>,
}

impl ReachableState {
    /// 起點狀態：總量 0、包數 0
    pub fn origin() -> Self {
        Self {
            total_shipped: 0,
            pack_count: 0,
            predecessor: None,
            size_used: None,
        }
    }

    /// 從總量 `from` 再加一包 `size`
    pub fn extend(&self, from: i64, size: i64) -> Self {
        Self {
            total_shipped: self.total_shipped + size,
            pack_count: self.pack_count + 1,
            predecessor: Some(from),
            size_used: Some(size),
        }
    }

    /// 排序鍵：先比出貨總量，再比包數
    pub fn rank(&self) -> (i64, u64) {
        (self.total_shipped, self.pack_count)
    }

    /// 是否嚴格優於另一狀態
    pub fn is_better_than(&self, other: &Self) -> bool {
        self.rank() < other.rank()
    }
}

/// 提交候選狀態的結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    /// 首次發現此總量
    Discovered,
    /// 改善既有狀態
    Improved,
    /// 不優於既有狀態，捨棄
    Rejected,
}

/// 搜尋表：每個已發現總量對應其最佳狀態
#[derive(Debug, Clone)]
pub struct SearchTable {
    states: HashMap<i64, ReachableState>,
    expanded: usize,
}

impl SearchTable {
    /// 創建只含起點的搜尋表
    pub fn new() -> Self {
        let mut states = HashMap::new();
        states.insert(0, ReachableState::origin());
        Self {
            states,
            expanded: 0,
        }
    }

    /// 取得總量的最佳狀態
    pub fn get(&self, total: i64) -> Option<&ReachableState> {
        self.states.get(&total)
    }

    /// 已發現總量數
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// 已展開總量數
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    pub fn mark_expanded(&mut self) {
        self.expanded += 1;
    }

    /// 提交候選狀態，只保留較佳者
    pub fn offer(&mut self, total: i64, candidate: ReachableState) -> Offer {
        match self.states.get_mut(&total) {
            None => {
                self.states.insert(total, candidate);
                Offer::Discovered
            }
            Some(existing) if candidate.is_better_than(existing) => {
                *existing = candidate;
                Offer::Improved
            }
            Some(_) => Offer::Rejected,
        }
    }

    /// 在所有 ≥ quantity 的總量中，選出出貨總量最小、包數最少者
    ///
    /// 以 (出貨總量, 包數, 總量) 明確排序，與雜湊表走訪順序無關
    pub fn best_at_or_above(&self, quantity: i64) -> Option<i64> {
        self.states
            .iter()
            .filter(|&(&total, _)| total >= quantity)
            .map(|(&total, state)| (state.total_shipped, state.pack_count, total))
            .min()
            .map(|(_, _, total)| total)
    }

    /// 沿前驅鏈回溯至 0，累計各規格包數
    pub fn reconstruct(&self, total: i64) -> Option<PackBreakdown> {
        let mut packs = PackBreakdown::new();
        let mut current = self.states.get(&total)?;

        while let (Some(predecessor), Some(size)) = (current.predecessor, current.size_used) {
            *packs.entry(size).or_insert(0) += 1;
            current = self.states.get(&predecessor)?;
        }

        Some(packs)
    }
}

impl Default for SearchTable {
    fn default() -> Self {
        Self::new()
    }
}
