//! 規格目錄與計算服務示例

use pack::{InMemoryPackSizeRepository, PackCalculator, PackConfig, PackSize, PackSizeRepository};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== 規格目錄與計算服務示例 ===\n");

    // 建立規格目錄
    let repository = InMemoryPackSizeRepository::with_sizes(&[23, 31])?;
    let added = repository.create(PackSize::new(53)?)?;
    tracing::info!("新增規格 {} ({})", added.size, added.id);

    let page = repository.paginate(1, 10)?;
    println!("規格目錄（共 {} 筆）:", page.total);
    for pack_size in &page.items {
        println!("  - {} 個/包", pack_size.size);
    }

    // 設定訂單上限
    let config = PackConfig::new().with_max_order_quantity(1_000_000);
    let calculator = PackCalculator::with_config(repository, config);

    let result = calculator.calculate_packs_for_order(500_000)?;
    println!("\n單筆計算結果:");
    println!("{}", serde_json::to_string_pretty(&result)?);

    // 批次計算
    let orders = [263, 1_000, 1_000_001];
    println!("\n批次計算:");
    for (items_ordered, outcome) in orders.iter().zip(calculator.calculate_batch(&orders)) {
        match outcome {
            Ok(result) => println!(
                "  - 訂購 {} → 出貨 {}，{} 包",
                items_ordered,
                result.total_items,
                result.pack_count()
            ),
            Err(e) => println!("  - 訂購 {} → 錯誤: {}", items_ordered, e),
        }
    }

    Ok(())
}
