//! # Production Allocation Engine
//!
//! 依庫存與產品單價計算生產建議

pub mod allocator;
pub mod priority;
pub mod virtual_stock;

// Re-export 主要類型
pub use allocator::ProductionAllocator;
pub use virtual_stock::{Availability, VirtualStock};

use plan_core::{Material, MaterialId, Product, ProductId, Suggestion};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// 以預設配置計算生產建議
///
/// 產品依單價由高到低處理（同價保持輸入順序），共用同一份虛擬庫存。
/// 不會修改傳入的物料。
pub fn allocate(products: &[Product], materials: &[Material]) -> Vec<Suggestion> {
    ProductionAllocator::default()
        .run(products, materials)
        .suggestions
}

/// 生產建議計算結果
#[derive(Debug, Clone)]
pub struct AllocationResult {
    /// 計算批次ID
    pub run_id: uuid::Uuid,

    /// 生產建議（依處理順序）
    pub suggestions: Vec<Suggestion>,

    /// 警告信息
    pub warnings: Vec<AllocationWarning>,

    /// 計算後剩餘的虛擬庫存
    pub remaining_stock: BTreeMap<MaterialId, u64>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl AllocationResult {
    /// 創建空的計算結果
    pub fn empty() -> Self {
        Self {
            run_id: uuid::Uuid::new_v4(),
            suggestions: Vec::new(),
            warnings: Vec::new(),
            remaining_stock: BTreeMap::new(),
            calculation_time_ms: None,
        }
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: AllocationWarning) {
        self.warnings.push(warning);
    }

    /// 建議總數量
    pub fn total_units(&self) -> u64 {
        self.suggestions.iter().map(|s| u64::from(s.quantity)).sum()
    }

    /// 建議總價值（溢位時返回 None）
    pub fn total_value(&self) -> Option<Decimal> {
        self.suggestions
            .iter()
            .try_fold(Decimal::ZERO, |acc, s| acc.checked_add(s.total_value))
    }

    /// 指定產品的警告
    pub fn warnings_for(&self, product_id: ProductId) -> impl Iterator<Item = &AllocationWarning> {
        self.warnings
            .iter()
            .filter(move |w| w.product_id == product_id)
    }
}

/// 計算警告（說明產品為何沒有或只有部分建議）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationWarning {
    pub product_id: ProductId,
    pub product_name: String,
    pub reason: WarningReason,
    pub severity: WarningSeverity,
}

impl AllocationWarning {
    pub fn new(product: &Product, reason: WarningReason) -> Self {
        let severity = reason.severity();
        Self {
            product_id: product.id,
            product_name: product.name.clone(),
            reason,
            severity,
        }
    }

    pub fn message(&self) -> String {
        match &self.reason {
            WarningReason::NoRequirements => {
                format!("產品 {} 沒有物料需求，無法生產", self.product_name)
            }
            WarningReason::MissingMaterial(material) => {
                format!("產品 {} 引用了不存在的物料 {}", self.product_name, material)
            }
            WarningReason::ZeroQuantity(material) => {
                format!("產品 {} 對物料 {} 的用量為 0", self.product_name, material)
            }
            WarningReason::InsufficientStock(material) => {
                format!("產品 {} 受物料 {} 庫存不足限制", self.product_name, material)
            }
            WarningReason::ValueOverflow { units } => format!(
                "產品 {} 生產 {} 件的總價值超出範圍，略過",
                self.product_name, units
            ),
            WarningReason::CappedByConfig { available, capped } => format!(
                "產品 {} 可生產 {} 件，受上限限制為 {} 件",
                self.product_name, available, capped
            ),
        }
    }
}

/// 警告原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningReason {
    /// 產品沒有物料需求
    NoRequirements,
    /// 需求引用的物料不在庫存中
    MissingMaterial(MaterialId),
    /// 需求用量為 0
    ZeroQuantity(MaterialId),
    /// 庫存不足以生產一件
    InsufficientStock(MaterialId),
    /// 數量被配置上限截斷
    CappedByConfig { available: u32, capped: u32 },
    /// 單價 × 數量溢位
    ValueOverflow { units: u32 },
}

impl WarningReason {
    fn severity(&self) -> WarningSeverity {
        match self {
            WarningReason::MissingMaterial(_)
            | WarningReason::ZeroQuantity(_)
            | WarningReason::ValueOverflow { .. } => WarningSeverity::Warning,
            _ => WarningSeverity::Info,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    Info,
    Warning,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_value_overflow_is_none() {
        let mut result = AllocationResult::empty();
        result.suggestions.push(Suggestion::new("A", Decimal::from(3), 2));
        result.suggestions.push(Suggestion::new("B", Decimal::from(4), 1));
        assert_eq!(result.total_value(), Some(Decimal::from(10)));
        assert_eq!(result.total_units(), 3);

        result.suggestions.push(Suggestion {
            product_name: "C".to_string(),
            quantity: 1,
            total_value: Decimal::MAX,
        });
        assert_eq!(result.total_value(), None);
    }
}
