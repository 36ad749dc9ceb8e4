//! 生產建議計算的性質測試

use plan_calc::{allocate, ProductionAllocator};
use plan_core::{Material, MaterialId, Product, Requirement};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashMap;

fn materials_strategy() -> impl Strategy<Value = Vec<Material>> {
    prop::collection::vec(0u32..60, 0..5).prop_map(|stocks| {
        stocks
            .into_iter()
            .enumerate()
            .map(|(i, stock)| Material::new(i as u64, format!("MAT-{}", i), stock))
            .collect()
    })
}

fn products_strategy() -> impl Strategy<Value = Vec<Product>> {
    // 物料ID 範圍大於物料數，會產生不存在的引用
    let requirement = (0u64..7, 1u32..8).prop_map(|(id, qty)| Requirement::new(id, qty));
    let product = (0i64..20, prop::collection::vec(requirement, 0..4));

    prop::collection::vec(product, 0..7).prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, (price, requirements))| {
                Product::new(i as u64, format!("PROD-{}", i), Decimal::from(price))
                    .with_requirements(requirements)
            })
            .collect()
    })
}

/// 逐件扣減的參考實作（每件檢查合併後用量）
fn reference_allocate(products: &[Product], materials: &[Material]) -> Vec<(String, u32)> {
    let mut stock: HashMap<MaterialId, u64> = materials
        .iter()
        .map(|m| (m.id, u64::from(m.stock_quantity)))
        .collect();

    let mut ordered: Vec<&Product> = products.iter().collect();
    ordered.sort_by(|a, b| b.price.cmp(&a.price));

    let mut out = Vec::new();
    for product in ordered {
        let needs = product.aggregated_requirements();
        let mut count = 0u32;
        loop {
            let producible = !needs.is_empty()
                && needs
                    .iter()
                    .all(|(id, need)| stock.get(id).map_or(false, |s| s >= need));
            if !producible {
                break;
            }
            for (id, need) in &needs {
                if let Some(s) = stock.get_mut(id) {
                    *s -= need;
                }
            }
            count += 1;
        }
        if count > 0 {
            out.push((product.name.clone(), count));
        }
    }
    out
}

fn price_of<'a>(products: &'a [Product], name: &str) -> &'a Product {
    products
        .iter()
        .find(|p| p.name == name)
        .expect("suggestion refers to an input product")
}

proptest! {
    #[test]
    fn prop_quantities_positive_and_bounded(
        materials in materials_strategy(),
        products in products_strategy(),
    ) {
        let suggestions = allocate(&products, &materials);

        prop_assert!(suggestions.len() <= products.len());
        for s in &suggestions {
            prop_assert!(s.quantity > 0);
            let product = price_of(&products, &s.product_name);
            prop_assert!(product.has_requirements());
            prop_assert_eq!(s.total_value, product.price * Decimal::from(s.quantity));
        }
    }

    #[test]
    fn prop_price_order_is_stable(
        materials in materials_strategy(),
        products in products_strategy(),
    ) {
        let suggestions = allocate(&products, &materials);

        for pair in suggestions.windows(2) {
            let first = price_of(&products, &pair[0].product_name);
            let second = price_of(&products, &pair[1].product_name);
            prop_assert!(first.price >= second.price);
            if first.price == second.price {
                prop_assert!(first.id < second.id);
            }
        }
    }

    #[test]
    fn prop_stock_is_conserved(
        materials in materials_strategy(),
        products in products_strategy(),
    ) {
        let result = ProductionAllocator::default().run(&products, &materials);

        let mut consumed: HashMap<MaterialId, u64> = HashMap::new();
        for s in &result.suggestions {
            for (id, need) in price_of(&products, &s.product_name).aggregated_requirements() {
                *consumed.entry(id).or_default() += need * u64::from(s.quantity);
            }
        }

        for material in &materials {
            let remaining = result.remaining_stock[&material.id];
            let used = consumed.get(&material.id).copied().unwrap_or(0);
            prop_assert_eq!(remaining + used, u64::from(material.stock_quantity));
        }
    }

    #[test]
    fn prop_inputs_untouched_and_idempotent(
        materials in materials_strategy(),
        products in products_strategy(),
    ) {
        let materials_before = materials.clone();
        let products_before = products.clone();

        let first = allocate(&products, &materials);
        let second = allocate(&products, &materials);

        prop_assert_eq!(&materials, &materials_before);
        prop_assert_eq!(&products, &products_before);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_matches_unit_by_unit_consumption(
        materials in materials_strategy(),
        products in products_strategy(),
    ) {
        let expected = reference_allocate(&products, &materials);
        let actual: Vec<(String, u32)> = allocate(&products, &materials)
            .into_iter()
            .map(|s| (s.product_name, s.quantity))
            .collect();

        prop_assert_eq!(actual, expected);
    }
}

#[test]
fn example_higher_price_takes_shared_stock() {
    let materials = vec![Material::new(1, "M1", 10)];
    let products = vec![
        Product::new(1, "A", Decimal::from(5)).with_requirement(1, 3),
        Product::new(2, "B", Decimal::from(8)).with_requirement(1, 4),
    ];

    let suggestions = allocate(&products, &materials);

    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].product_name, "B");
    assert_eq!(suggestions[0].quantity, 2);
    assert_eq!(suggestions[0].total_value, Decimal::from(16));
}
