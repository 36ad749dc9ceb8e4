//! # Production Planning Core
//!
//! 核心資料模型與類型定義

pub mod config;
pub mod material;
pub mod product;
pub mod snapshot;
pub mod suggestion;

// Re-export 主要類型
pub use config::PlannerConfig;
pub use material::{Material, MaterialCreate, MaterialId};
pub use product::{Product, ProductCreate, ProductId, ProductPatch, Requirement};
pub use snapshot::InventorySnapshot;
pub use suggestion::Suggestion;

/// 生產計劃錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("找不到物料: {0}")]
    MaterialNotFound(MaterialId),

    #[error("找不到產品: {0}")]
    ProductNotFound(ProductId),

    #[error("無效的物料需求（產品 {product}, 物料 {material}）: 用量必須大於 0")]
    InvalidRequirement {
        product: String,
        material: MaterialId,
    },

    #[error("資料驗證失敗: {0}")]
    Validation(String),

    #[error("無效的配置: {0}")]
    InvalidConfig(String),

    #[error("序列化錯誤: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PlanError {
    /// 是否為「找不到」類錯誤（對應 HTTP 404）
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PlanError::MaterialNotFound(_) | PlanError::ProductNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PlanError>;
