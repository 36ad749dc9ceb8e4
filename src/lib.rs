//! # prodplan
//!
//! 物料/產品管理與生產建議
//!
//! - [`model`]: 資料模型、配置、錯誤類型
//! - [`calc`]: 生產建議計算
//! - [`store`]: 資料存取與服務

pub use plan_calc as calc;
pub use plan_core as model;
pub use plan_store as store;

pub use plan_calc::{allocate, AllocationResult, ProductionAllocator};
pub use plan_core::{
    InventorySnapshot, Material, MaterialCreate, MaterialId, PlanError, PlannerConfig, Product,
    ProductCreate, ProductId, ProductPatch, Requirement, Result, Suggestion,
};
pub use plan_store::{InMemoryStore, MaterialRepository, ProductRepository, ProductionService};
pub use rust_decimal::Decimal;
