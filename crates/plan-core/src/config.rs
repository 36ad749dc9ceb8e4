//! 生產建議計算配置

use serde::{Deserialize, Serialize};

use crate::{PlanError, Result};

/// 生產建議計算參數
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct PlannerConfig {
    /// 每個產品的建議數量上限（產線產能）
    /// - None: 不設上限，完全依庫存計算（預設）
    pub max_units_per_product: Option<u32>,

    /// 是否收集無法生產的原因（警告）
    pub collect_warnings: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_units_per_product: None,
            collect_warnings: true,
        }
    }
}

impl PlannerConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：設置每產品數量上限
    pub fn with_max_units_per_product(mut self, max_units: u32) -> Self {
        self.max_units_per_product = Some(max_units);
        self
    }

    /// 建構器模式：設置是否收集警告
    pub fn with_collect_warnings(mut self, collect: bool) -> Self {
        self.collect_warnings = collect;
        self
    }

    /// 從 JSON 載入配置（缺少的欄位使用預設值）
    ///
    /// # 範例
    /// ```
    /// # use plan_core::PlannerConfig;
    /// let config = PlannerConfig::from_json_str(r#"{"maxUnitsPerProduct": 50}"#).unwrap();
    /// assert_eq!(config.max_units_per_product, Some(50));
    /// assert!(config.collect_warnings);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| PlanError::InvalidConfig(e.to_string()))
    }

    /// 套用數量上限
    pub fn cap_units(&self, units: u32) -> u32 {
        match self.max_units_per_product {
            Some(max) => units.min(max),
            None => units,
        }
    }
}
