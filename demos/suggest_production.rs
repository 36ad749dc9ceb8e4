//! 生產建議計算示例
//!
//! 執行：`RUST_LOG=debug cargo run --example suggest_production`

use prodplan::{
    InMemoryStore, MaterialCreate, MaterialRepository, PlannerConfig, ProductCreate,
    ProductRepository, ProductionService,
};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== 生產建議計算示例 ===\n");

    let mut store = InMemoryStore::new();

    // 創建物料
    let frame = store.create_material(MaterialCreate::new("FRAME", 12))?;
    let wheel = store.create_material(MaterialCreate::new("WHEEL", 30))?;
    let motor = store.create_material(MaterialCreate::new("MOTOR", 3))?;

    // 創建產品
    store.create_product(
        ProductCreate::new("E-BIKE", Decimal::from(1800))
            .with_requirement(frame.id, 1)
            .with_requirement(wheel.id, 2)
            .with_requirement(motor.id, 1),
    )?;
    store.create_product(
        ProductCreate::new("BIKE", Decimal::from(450))
            .with_requirement(frame.id, 1)
            .with_requirement(wheel.id, 2),
    )?;
    store.create_product(
        ProductCreate::new("TRICYCLE", Decimal::from(300))
            .with_requirement(frame.id, 1)
            .with_requirement(wheel.id, 3),
    )?;

    println!("物料清單:");
    for material in store.list_all_materials()? {
        println!("  - {} 庫存: {}", material.name, material.stock_quantity);
    }

    let service = ProductionService::new(store, PlannerConfig::default());
    let result = service.run()?;

    println!("\n生產建議:");
    for suggestion in &result.suggestions {
        println!(
            "  - 產品: {}, 數量: {}, 總價值: {}",
            suggestion.product_name, suggestion.quantity, suggestion.total_value
        );
    }
    match result.total_value() {
        Some(total) => println!("總價值: {}", total),
        None => println!("總價值: 超出範圍"),
    }

    for warning in &result.warnings {
        println!("  ! {}", warning.message());
    }

    println!("\nGET /production/suggest\n{}", service.suggest_json()?);

    Ok(())
}
