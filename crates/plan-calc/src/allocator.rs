//! 生產建議計算器

use plan_core::{InventorySnapshot, Material, PlannerConfig, Product, Suggestion};

use crate::priority::by_price_descending;
use crate::virtual_stock::{Availability, VirtualStock};
use crate::{AllocationResult, AllocationWarning, WarningReason};

/// 生產建議計算器
///
/// 貪婪單次分配：高單價產品先用庫存，已分配的物料不會再讓給低單價產品。
#[derive(Debug, Clone, Default)]
pub struct ProductionAllocator {
    config: PlannerConfig,
}

impl ProductionAllocator {
    /// 創建新的計算器
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// 獲取配置引用
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// 以快照計算
    pub fn run_snapshot(&self, snapshot: &InventorySnapshot) -> AllocationResult {
        self.run(&snapshot.products, &snapshot.materials)
    }

    /// 只返回生產建議
    pub fn allocate(&self, products: &[Product], materials: &[Material]) -> Vec<Suggestion> {
        self.run(products, materials).suggestions
    }

    /// 主計算入口
    pub fn run(&self, products: &[Product], materials: &[Material]) -> AllocationResult {
        tracing::info!(
            "開始生產建議計算：產品 {} 筆，物料 {} 筆",
            products.len(),
            materials.len()
        );

        let start_time = std::time::Instant::now();
        let mut result = AllocationResult::empty();

        // Step 1: 複製虛擬庫存
        let mut stock = VirtualStock::from_materials(materials);

        // Step 2: 依單價排序
        let ordered = by_price_descending(products);

        // Step 3: 逐產品分配
        for product in ordered {
            let needs = product.aggregated_requirements();
            let availability = stock.producible_units(&needs);

            let units = match availability {
                Availability::Units { units, limiting } => {
                    let capped = self.config.cap_units(units);
                    if capped < units {
                        self.warn(
                            &mut result,
                            product,
                            WarningReason::CappedByConfig {
                                available: units,
                                capped,
                            },
                        );
                    }
                    if let Some(material) = limiting.filter(|_| units == 0) {
                        self.warn(&mut result, product, WarningReason::InsufficientStock(material));
                    }
                    capped
                }
                Availability::NoRequirements => {
                    self.warn(&mut result, product, WarningReason::NoRequirements);
                    0
                }
                Availability::MissingMaterial(material) => {
                    tracing::warn!("產品 {} 引用不存在的物料 {}", product.name, material);
                    self.warn(&mut result, product, WarningReason::MissingMaterial(material));
                    0
                }
                Availability::ZeroQuantity(material) => {
                    self.warn(&mut result, product, WarningReason::ZeroQuantity(material));
                    0
                }
            };

            tracing::debug!(
                "產品 {} (單價 {}) 可生產 {} 件",
                product.name,
                product.price,
                units
            );

            if units == 0 {
                continue;
            }
            // 總價值溢位時不建議，也不佔用庫存
            match Suggestion::checked(product.name.clone(), product.price, units) {
                Some(suggestion) => {
                    stock.consume(&needs, units);
                    result.suggestions.push(suggestion);
                }
                None => {
                    tracing::warn!("產品 {} 總價值溢位，略過", product.name);
                    self.warn(&mut result, product, WarningReason::ValueOverflow { units });
                }
            }
        }

        result.remaining_stock = stock.to_levels();
        result.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!("生產建議計算完成，耗時 {:?}", start_time.elapsed());
        tracing::info!("建議數量: {}", result.suggestions.len());

        result
    }

    fn warn(&self, result: &mut AllocationResult, product: &Product, reason: WarningReason) {
        if self.config.collect_warnings {
            result.add_warning(AllocationWarning::new(product, reason));
        }
    }
}
