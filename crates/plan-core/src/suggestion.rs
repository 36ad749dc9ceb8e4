//! 生產建議模型（計算結果，不持久化）

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 生產建議
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// 產品名稱
    pub product_name: String,

    /// 建議生產數量
    pub quantity: u32,

    /// 總價值（單價 × 數量）
    #[serde(with = "rust_decimal::serde::float")]
    pub total_value: Decimal,
}

impl Suggestion {
    /// 以單價與數量創建建議（總價值溢位時取 Decimal 的上下限）
    pub fn new(product_name: impl Into<String>, price: Decimal, quantity: u32) -> Self {
        Self {
            product_name: product_name.into(),
            quantity,
            total_value: price.saturating_mul(Decimal::from(quantity)),
        }
    }

    /// 以單價與數量創建建議，總價值溢位時返回 None
    pub fn checked(product_name: impl Into<String>, price: Decimal, quantity: u32) -> Option<Self> {
        let total_value = price.checked_mul(Decimal::from(quantity))?;
        Some(Self {
            product_name: product_name.into(),
            quantity,
            total_value,
        })
    }
}
