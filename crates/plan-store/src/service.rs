//! 生產建議服務
//!
//! 讀取物料與產品快照，交給 [`ProductionAllocator`] 計算。

use plan_calc::{AllocationResult, ProductionAllocator};
use plan_core::{InventorySnapshot, PlannerConfig, Result, Suggestion};

use crate::repository::{MaterialRepository, ProductRepository};

/// 生產建議服務
pub struct ProductionService<S> {
    store: S,
    allocator: ProductionAllocator,
}

impl<S> ProductionService<S>
where
    S: MaterialRepository + ProductRepository,
{
    /// 創建新的服務
    pub fn new(store: S, config: PlannerConfig) -> Self {
        Self {
            store,
            allocator: ProductionAllocator::new(config),
        }
    }

    /// 獲取存儲引用
    pub fn store(&self) -> &S {
        &self.store
    }

    /// 獲取可變存儲引用（CRUD）
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// 讀取當前物料與產品快照
    pub fn snapshot(&self) -> Result<InventorySnapshot> {
        let materials = self.store.list_all_materials()?;
        let products = self.store.list_all_products()?;
        Ok(InventorySnapshot::new(materials, products))
    }

    /// 完整計算結果（含警告與剩餘庫存）
    pub fn run(&self) -> Result<AllocationResult> {
        let snapshot = self.snapshot()?;
        let result = self.allocator.run_snapshot(&snapshot);

        for warning in &result.warnings {
            tracing::debug!("[{}] {}", result.run_id, warning.message());
        }

        Ok(result)
    }

    /// 生產建議
    pub fn suggest(&self) -> Result<Vec<Suggestion>> {
        Ok(self.run()?.suggestions)
    }

    /// `GET /production/suggest` 的回應內容（JSON 陣列）
    pub fn suggest_json(&self) -> Result<String> {
        let suggestions = self.suggest()?;
        Ok(serde_json::to_string(&suggestions)?)
    }

    /// 取回存儲
    pub fn into_store(self) -> S {
        self.store
    }
}
