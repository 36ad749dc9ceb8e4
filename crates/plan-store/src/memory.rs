//! 記憶體資料存取實作

use plan_core::{
    Material, MaterialCreate, MaterialId, PlanError, Product, ProductCreate, ProductId,
    ProductPatch, Result,
};
use std::collections::BTreeMap;

use crate::repository::{MaterialRepository, ProductRepository};

/// 記憶體存儲（ID 從 1 開始遞增）
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    materials: BTreeMap<MaterialId, Material>,
    products: BTreeMap<ProductId, Product>,
    next_material_id: u64,
    next_product_id: u64,
}

impl InMemoryStore {
    /// 創建空的存儲
    pub fn new() -> Self {
        Self {
            materials: BTreeMap::new(),
            products: BTreeMap::new(),
            next_material_id: 1,
            next_product_id: 1,
        }
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    fn warn_dangling(&self, product: &Product) {
        for req in &product.requirements {
            if !self.materials.contains_key(&req.material_id) {
                tracing::warn!(
                    "產品 {} 引用的物料 {} 不存在，將無法生產",
                    product.name,
                    req.material_id
                );
            }
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialRepository for InMemoryStore {
    fn list_all_materials(&self) -> Result<Vec<Material>> {
        Ok(self.materials.values().cloned().collect())
    }

    fn find_material(&self, id: MaterialId) -> Result<Option<Material>> {
        Ok(self.materials.get(&id).cloned())
    }

    fn create_material(&mut self, payload: MaterialCreate) -> Result<Material> {
        payload.validate()?;

        let id = MaterialId(self.next_material_id);
        self.next_material_id += 1;

        let material = Material::new(id, payload.name, payload.stock_quantity);
        tracing::debug!("新增物料 {}: {}", id, material.name);
        self.materials.insert(id, material.clone());
        Ok(material)
    }

    fn update_material(&mut self, id: MaterialId, payload: MaterialCreate) -> Result<Material> {
        payload.validate()?;

        let material = self
            .materials
            .get_mut(&id)
            .ok_or(PlanError::MaterialNotFound(id))?;
        material.apply(payload);
        Ok(material.clone())
    }

    fn delete_material(&mut self, id: MaterialId) -> Result<()> {
        self.materials
            .remove(&id)
            .map(|_| ())
            .ok_or(PlanError::MaterialNotFound(id))
    }
}

impl ProductRepository for InMemoryStore {
    fn list_all_products(&self) -> Result<Vec<Product>> {
        Ok(self.products.values().cloned().collect())
    }

    fn find_product(&self, id: ProductId) -> Result<Option<Product>> {
        Ok(self.products.get(&id).cloned())
    }

    fn create_product(&mut self, payload: ProductCreate) -> Result<Product> {
        payload.validate()?;

        let id = ProductId(self.next_product_id);
        self.next_product_id += 1;

        let product = payload.into_product(id);
        self.warn_dangling(&product);
        tracing::debug!(
            "新增產品 {}: {}（物料需求 {} 項）",
            id,
            product.name,
            product.requirements.len()
        );
        self.products.insert(id, product.clone());
        Ok(product)
    }

    fn update_product(&mut self, id: ProductId, patch: ProductPatch) -> Result<Product> {
        let mut product = self
            .products
            .get(&id)
            .cloned()
            .ok_or(PlanError::ProductNotFound(id))?;

        patch.apply_to(&mut product)?;
        self.warn_dangling(&product);
        self.products.insert(id, product.clone());
        Ok(product)
    }

    fn delete_product(&mut self, id: ProductId) -> Result<()> {
        self.products
            .remove(&id)
            .map(|_| ())
            .ok_or(PlanError::ProductNotFound(id))
    }
}
