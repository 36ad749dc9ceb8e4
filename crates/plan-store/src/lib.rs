//! # Production Planning Store
//!
//! 物料/產品資料存取層與生產建議服務

pub mod memory;
pub mod repository;
pub mod service;

// Re-export 主要類型
pub use memory::InMemoryStore;
pub use repository::{MaterialRepository, ProductRepository};
pub use service::ProductionService;
