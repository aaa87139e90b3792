//! 簡單包裝計算示例

use pack::{PackOptimizer, SearchStrategy};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== 簡單包裝計算示例 ===\n");

    let sizes = [250, 500, 1000, 2000, 5000];
    let orders = [1, 250, 251, 501, 12001];

    println!("可用規格: {:?}\n", sizes);

    let optimizer = PackOptimizer::new(SearchStrategy::BreadthFirst);
    for items_ordered in orders {
        let solution = optimizer.solve(items_ordered, &sizes)?;

        println!(
            "訂購 {:>6} → 出貨 {:>6}，共 {} 包",
            items_ordered, solution.total_shipped, solution.pack_count
        );
        for (size, count) in solution.packs.iter().rev() {
            println!("  - {} x {}", count, size);
        }
    }

    Ok(())
}
