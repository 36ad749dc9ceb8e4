//! 產品優先順序

use plan_core::Product;

/// 依單價由高到低排序產品
///
/// 使用穩定排序，同價產品保持輸入順序。
pub fn by_price_descending(products: &[Product]) -> Vec<&Product> {
    let mut ordered: Vec<&Product> = products.iter().collect();
    ordered.sort_by(|a, b| b.price.cmp(&a.price));
    ordered
}
