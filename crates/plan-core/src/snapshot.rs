//! 庫存快照
//!
//! 一次讀取的全部物料與產品，計算期間不再變動。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Material, Product};

/// 物料與產品的一致性快照
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySnapshot {
    pub materials: Vec<Material>,
    pub products: Vec<Product>,

    /// 快照時間
    pub taken_at: DateTime<Utc>,
}

impl InventorySnapshot {
    /// 以當前時間建立快照
    pub fn new(materials: Vec<Material>, products: Vec<Product>) -> Self {
        Self {
            materials,
            products,
            taken_at: Utc::now(),
        }
    }

    /// 總庫存量（所有物料）
    pub fn total_stock(&self) -> u64 {
        self.materials
            .iter()
            .map(|m| u64::from(m.stock_quantity))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty() && self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_snapshot() {
        let snapshot = InventorySnapshot::new(
            vec![Material::new(1, "A", 10), Material::new(2, "B", 5)],
            vec![Product::new(1, "P", Decimal::ONE)],
        );

        assert_eq!(snapshot.total_stock(), 15);
        assert!(!snapshot.is_empty());
        assert!(snapshot.taken_at <= Utc::now());
        assert!(InventorySnapshot::new(vec![], vec![]).is_empty());
    }
}
