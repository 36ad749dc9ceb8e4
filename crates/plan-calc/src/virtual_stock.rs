//! 虛擬庫存
//!
//! 從物料快照複製出的工作庫存，只在一次計算內使用，不會寫回物料。

use plan_core::{Material, MaterialId};
use std::collections::{BTreeMap, HashMap};

/// 可生產性檢查結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// 可生產數量（0 表示庫存不足），以及限制數量的物料
    Units { units: u32, limiting: Option<MaterialId> },
    /// 沒有物料需求
    NoRequirements,
    /// 需求引用了不存在的物料
    MissingMaterial(MaterialId),
    /// 需求用量為 0
    ZeroQuantity(MaterialId),
}

impl Availability {
    /// 可生產數量
    pub fn units(&self) -> u32 {
        match self {
            Availability::Units { units, .. } => *units,
            _ => 0,
        }
    }
}

/// 虛擬庫存
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VirtualStock {
    levels: HashMap<MaterialId, u64>,
}

impl VirtualStock {
    /// 從物料快照創建虛擬庫存
    ///
    /// 同一物料ID重複出現時以最後一筆為準。
    pub fn from_materials(materials: &[Material]) -> Self {
        let mut levels = HashMap::with_capacity(materials.len());
        for material in materials {
            if levels
                .insert(material.id, u64::from(material.stock_quantity))
                .is_some()
            {
                tracing::warn!("物料 {} 重複出現，以最後一筆庫存為準", material.id);
            }
        }
        Self { levels }
    }

    /// 查詢物料的可用量（不存在時為 None）
    pub fn available(&self, material_id: MaterialId) -> Option<u64> {
        self.levels.get(&material_id).copied()
    }

    /// 物料種類數
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// 計算以當前庫存最多可生產幾件
    ///
    /// `needs` 為按物料合併後的每件用量。一件產品只有在所有需求同時滿足時才算可生產，
    /// 因此結果等於各物料 `庫存 / 用量` 的最小值。
    pub fn producible_units(&self, needs: &[(MaterialId, u64)]) -> Availability {
        if needs.is_empty() {
            return Availability::NoRequirements;
        }

        let mut best: Option<(u64, MaterialId)> = None;
        for &(material_id, need) in needs {
            if need == 0 {
                return Availability::ZeroQuantity(material_id);
            }
            let Some(stock) = self.available(material_id) else {
                return Availability::MissingMaterial(material_id);
            };

            let units = stock / need;
            if best.map_or(true, |(current, _)| units < current) {
                best = Some((units, material_id));
            }
        }

        match best {
            Some((units, limiting)) => Availability::Units {
                units: u32::try_from(units).unwrap_or(u32::MAX),
                limiting: Some(limiting),
            },
            None => Availability::Units {
                units: 0,
                limiting: None,
            },
        }
    }

    /// 扣減生產 `units` 件所需的物料
    ///
    /// `units` 不得超過 [`producible_units`](Self::producible_units) 的結果，
    /// 扣減後庫存不會為負。
    pub fn consume(&mut self, needs: &[(MaterialId, u64)], units: u32) {
        for &(material_id, need) in needs {
            if let Some(level) = self.levels.get_mut(&material_id) {
                let used = need * u64::from(units);
                debug_assert!(used <= *level, "物料 {} 扣減超過庫存", material_id);
                *level = level.saturating_sub(used);
            }
        }
    }

    /// 轉為有序的庫存表
    pub fn to_levels(&self) -> BTreeMap<MaterialId, u64> {
        self.levels.iter().map(|(k, v)| (*k, *v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn stock() -> VirtualStock {
        VirtualStock::from_materials(&[
            Material::new(1, "STEEL", 10),
            Material::new(2, "PAINT", 3),
        ])
    }

    #[test]
    fn test_copy_is_independent() {
        let materials = vec![Material::new(1, "STEEL", 10)];
        let mut stock = VirtualStock::from_materials(&materials);

        stock.consume(&[(MaterialId(1), 4)], 2);

        assert_eq!(stock.available(MaterialId(1)), Some(2));
        assert_eq!(materials[0].stock_quantity, 10);
    }

    #[rstest]
    #[case(vec![(MaterialId(1), 3)], 3)]
    #[case(vec![(MaterialId(1), 4)], 2)]
    #[case(vec![(MaterialId(1), 2), (MaterialId(2), 1)], 3)]
    #[case(vec![(MaterialId(1), 11)], 0)]
    fn test_producible_units(#[case] needs: Vec<(MaterialId, u64)>, #[case] expected: u32) {
        assert_eq!(stock().producible_units(&needs).units(), expected);
    }

    #[test]
    fn test_limiting_material() {
        let availability = stock().producible_units(&[(MaterialId(1), 2), (MaterialId(2), 1)]);

        assert_eq!(
            availability,
            Availability::Units {
                units: 3,
                limiting: Some(MaterialId(2)),
            }
        );
    }

    #[test]
    fn test_unproducible_cases() {
        let stock = stock();

        assert_eq!(stock.producible_units(&[]), Availability::NoRequirements);
        assert_eq!(
            stock.producible_units(&[(MaterialId(1), 1), (MaterialId(99), 1)]),
            Availability::MissingMaterial(MaterialId(99))
        );
        assert_eq!(
            stock.producible_units(&[(MaterialId(2), 0)]),
            Availability::ZeroQuantity(MaterialId(2))
        );
    }

    #[test]
    fn test_consume_across_materials() {
        let mut stock = stock();
        let needs = [(MaterialId(1), 3), (MaterialId(2), 1)];

        let units = stock.producible_units(&needs).units();
        stock.consume(&needs, units);

        assert_eq!(units, 3);
        assert_eq!(stock.available(MaterialId(1)), Some(1));
        assert_eq!(stock.available(MaterialId(2)), Some(0));
        assert_eq!(stock.producible_units(&needs).units(), 0);
    }

    #[test]
    fn test_duplicate_material_last_wins() {
        let stock = VirtualStock::from_materials(&[
            Material::new(1, "STEEL", 10),
            Material::new(1, "STEEL", 4),
        ]);

        assert_eq!(stock.len(), 1);
        assert_eq!(stock.available(MaterialId(1)), Some(4));
    }
}
