//! 物料模型

use serde::{Deserialize, Serialize};
use std::fmt;

/// 物料ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialId(pub u64);

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MaterialId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// 物料（原料）及其現有庫存
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    /// 物料ID
    pub id: MaterialId,

    /// 物料名稱
    pub name: String,

    /// 現有庫存
    pub stock_quantity: u32,
}

impl Material {
    /// 創建新的物料記錄
    pub fn new(id: impl Into<MaterialId>, name: impl Into<String>, stock_quantity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            stock_quantity,
        }
    }

    /// 套用新增/更新資料
    pub fn apply(&mut self, payload: MaterialCreate) {
        self.name = payload.name;
        self.stock_quantity = payload.stock_quantity;
    }
}

/// 新增/更新物料的資料
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialCreate {
    pub name: String,
    pub stock_quantity: u32,
}

impl MaterialCreate {
    pub fn new(name: impl Into<String>, stock_quantity: u32) -> Self {
        Self {
            name: name.into(),
            stock_quantity,
        }
    }

    /// 驗證資料
    pub fn validate(&self) -> crate::Result<()> {
        if self.name.trim().is_empty() {
            return Err(crate::PlanError::Validation("物料名稱不可為空".to_string()));
        }
        Ok(())
    }
}
