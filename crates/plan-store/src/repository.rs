//! 資料存取介面
//!
//! 生產建議只依賴 `list_all`，其餘為一般 CRUD。
//! 更新或刪除不存在的資料時返回 `MaterialNotFound` / `ProductNotFound`。

use plan_core::{
    Material, MaterialCreate, MaterialId, Product, ProductCreate, ProductId, ProductPatch, Result,
};

/// 物料存取
pub trait MaterialRepository {
    /// 列出全部物料
    fn list_all_materials(&self) -> Result<Vec<Material>>;

    fn find_material(&self, id: MaterialId) -> Result<Option<Material>>;

    fn create_material(&mut self, payload: MaterialCreate) -> Result<Material>;

    /// 以新資料覆蓋名稱與庫存
    fn update_material(&mut self, id: MaterialId, payload: MaterialCreate) -> Result<Material>;

    fn delete_material(&mut self, id: MaterialId) -> Result<()>;
}

/// 產品存取（含物料需求）
pub trait ProductRepository {
    /// 列出全部產品，物料需求已載入
    fn list_all_products(&self) -> Result<Vec<Product>>;

    fn find_product(&self, id: ProductId) -> Result<Option<Product>>;

    fn create_product(&mut self, payload: ProductCreate) -> Result<Product>;

    /// 部分更新；未提供物料需求時保持原需求
    fn update_product(&mut self, id: ProductId, patch: ProductPatch) -> Result<Product>;

    /// 刪除產品及其物料需求
    fn delete_product(&mut self, id: ProductId) -> Result<()>;
}
