//! 產品與物料需求（BOM）模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::material::MaterialId;
use crate::{PlanError, Result};

/// 產品ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// 物料需求（產品-物料關聯）
///
/// 只作為產品的子項存在，刪除產品時一併刪除。
///
/// JSON 輸出為 `{"material": {"id": 1}, "quantityNeeded": 3}`，
/// 輸入同時接受此格式與 `{"materialId": 1, "quantityNeeded": 3}`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RequirementWire", into = "NestedRequirement")]
pub struct Requirement {
    /// 物料ID
    pub material_id: MaterialId,

    /// 每單位產品的用量（必須 > 0）
    pub quantity_needed: u32,
}

impl Requirement {
    pub fn new(material_id: impl Into<MaterialId>, quantity_needed: u32) -> Self {
        Self {
            material_id: material_id.into(),
            quantity_needed,
        }
    }
}

/// 物料引用（只讀取 ID，其餘欄位忽略）
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct MaterialRef {
    id: MaterialId,
}

/// 巢狀格式的物料需求
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NestedRequirement {
    material: MaterialRef,
    quantity_needed: u32,
}

/// 物料需求的輸入格式
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RequirementWire {
    Nested(NestedRequirement),
    #[serde(rename_all = "camelCase")]
    Flat {
        material_id: MaterialId,
        quantity_needed: u32,
    },
}

impl From<RequirementWire> for Requirement {
    fn from(wire: RequirementWire) -> Self {
        match wire {
            RequirementWire::Nested(nested) => {
                Self::new(nested.material.id, nested.quantity_needed)
            }
            RequirementWire::Flat {
                material_id,
                quantity_needed,
            } => Self::new(material_id, quantity_needed),
        }
    }
}

impl From<Requirement> for NestedRequirement {
    fn from(req: Requirement) -> Self {
        Self {
            material: MaterialRef {
                id: req.material_id,
            },
            quantity_needed: req.quantity_needed,
        }
    }
}

/// 產品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// 產品ID
    pub id: ProductId,

    /// 產品名稱
    pub name: String,

    /// 單價
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// 物料需求（有序）
    #[serde(rename = "materials", default)]
    pub requirements: Vec<Requirement>,
}

impl Product {
    /// 創建新的產品（無物料需求）
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            requirements: Vec::new(),
        }
    }

    /// 建構器模式：添加物料需求
    pub fn with_requirement(
        mut self,
        material_id: impl Into<MaterialId>,
        quantity_needed: u32,
    ) -> Self {
        self.requirements
            .push(Requirement::new(material_id, quantity_needed));
        self
    }

    /// 建構器模式：設置全部物料需求
    pub fn with_requirements(mut self, requirements: Vec<Requirement>) -> Self {
        self.requirements = requirements;
        self
    }

    /// 是否有物料需求
    pub fn has_requirements(&self) -> bool {
        !self.requirements.is_empty()
    }

    /// 按物料合併需求量
    ///
    /// 同一物料出現多次時加總用量，保留首次出現的順序。
    pub fn aggregated_requirements(&self) -> Vec<(MaterialId, u64)> {
        let mut aggregated: Vec<(MaterialId, u64)> = Vec::with_capacity(self.requirements.len());
        for req in &self.requirements {
            match aggregated.iter_mut().find(|(id, _)| *id == req.material_id) {
                Some((_, qty)) => *qty += u64::from(req.quantity_needed),
                None => aggregated.push((req.material_id, u64::from(req.quantity_needed))),
            }
        }
        aggregated
    }
}

fn validate_product(name: &str, price: Decimal, requirements: &[Requirement]) -> Result<()> {
    if name.trim().is_empty() {
        return Err(PlanError::Validation("產品名稱不可為空".to_string()));
    }
    if price.is_sign_negative() {
        return Err(PlanError::Validation(format!("產品單價不可為負: {}", price)));
    }
    // 單價乘以任何 u32 數量都不得溢位
    if price.checked_mul(Decimal::from(u32::MAX)).is_none() {
        return Err(PlanError::Validation(format!("產品單價超出範圍: {}", price)));
    }
    if let Some(req) = requirements.iter().find(|r| r.quantity_needed == 0) {
        return Err(PlanError::InvalidRequirement {
            product: name.to_string(),
            material: req.material_id,
        });
    }
    Ok(())
}

/// 新增產品的資料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,

    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    #[serde(rename = "materials", default)]
    pub requirements: Vec<Requirement>,
}

impl ProductCreate {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
            requirements: Vec::new(),
        }
    }

    /// 建構器模式：添加物料需求
    pub fn with_requirement(
        mut self,
        material_id: impl Into<MaterialId>,
        quantity_needed: u32,
    ) -> Self {
        self.requirements
            .push(Requirement::new(material_id, quantity_needed));
        self
    }

    /// 驗證資料
    pub fn validate(&self) -> Result<()> {
        validate_product(&self.name, self.price, &self.requirements)
    }

    /// 以指定ID建立產品
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            requirements: self.requirements,
        }
    }
}

/// 更新產品的資料（未提供的欄位保持不變）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,

    #[serde(rename = "materials", default)]
    pub requirements: Option<Vec<Requirement>>,
}

impl ProductPatch {
    /// 套用到產品上（先驗證，失敗時產品不變）
    pub fn apply_to(self, product: &mut Product) -> Result<()> {
        let name = self.name.unwrap_or_else(|| product.name.clone());
        let price = self.price.unwrap_or(product.price);
        let requirements = self
            .requirements
            .unwrap_or_else(|| product.requirements.clone());

        validate_product(&name, price, &requirements)?;

        product.name = name;
        product.price = price;
        product.requirements = requirements;
        Ok(())
    }
}
