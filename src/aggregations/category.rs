//! Product category views: items sold and sales per English category name.

use indexmap::IndexSet;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use super::{top_n_with_others, value_counts, OTHERS};
use crate::loader::Datasets;

/// Categories shown individually in the items-sold chart
pub const TOP_SOLD_CATEGORIES: usize = 9;
/// Categories shown individually in the sales chart
pub const TOP_SALES_CATEGORIES: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductEnglish {
    pub product_id: String,
    pub product_category_name: Option<String>,
    pub product_category_name_english: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrdersCategory {
    pub order_id: String,
    pub order_item_id: Option<u32>,
    pub product_id: String,
    pub seller_id: Option<String>,
    pub price: f64,
    pub product_category_name: Option<String>,
    pub product_category_name_english: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySales {
    pub product_category_name_english: Option<String>,
    pub price: f64,
}

/// Products left-joined with the category translation table
pub fn create_product_english(data: &Datasets) -> Vec<ProductEnglish> {
    let mut translations: HashMap<&str, Vec<&str>> = HashMap::new();
    for t in &data.category_translation {
        translations
            .entry(t.product_category_name.as_str())
            .or_default()
            .push(t.product_category_name_english.as_str());
    }

    let mut rows = Vec::with_capacity(data.products.len());
    for product in &data.products {
        let matches = product
            .product_category_name
            .as_deref()
            .and_then(|name| translations.get(name));

        match matches {
            Some(names) => {
                for english in names {
                    rows.push(ProductEnglish {
                        product_id: product.product_id.clone(),
                        product_category_name: product.product_category_name.clone(),
                        product_category_name_english: Some(english.to_string()),
                    });
                }
            }
            None => rows.push(ProductEnglish {
                product_id: product.product_id.clone(),
                product_category_name: product.product_category_name.clone(),
                product_category_name_english: None,
            }),
        }
    }
    rows
}

/// Order items left-joined with `create_product_english` on product_id
pub fn create_orders_category(data: &Datasets) -> Vec<OrdersCategory> {
    let products = create_product_english(data);
    let mut by_id: HashMap<&str, Vec<&ProductEnglish>> = HashMap::new();
    for p in &products {
        by_id.entry(p.product_id.as_str()).or_default().push(p);
    }

    let mut rows = Vec::with_capacity(data.order_items.len());
    for item in &data.order_items {
        let row = |product: Option<&ProductEnglish>| OrdersCategory {
            order_id: item.order_id.clone(),
            order_item_id: item.order_item_id,
            product_id: item.product_id.clone(),
            seller_id: item.seller_id.clone(),
            price: item.price,
            product_category_name: product.and_then(|p| p.product_category_name.clone()),
            product_category_name_english: product
                .and_then(|p| p.product_category_name_english.clone()),
        };

        match by_id.get(item.product_id.as_str()) {
            Some(matches) => rows.extend(matches.iter().map(|p| row(Some(*p)))),
            None => rows.push(row(None)),
        }
    }
    rows
}

/// Items sold per category: top 9 plus an `Others` bucket.
///
/// Items whose product has no English category are not counted.
pub fn create_top_performing_product_category(data: &Datasets) -> Vec<CategoryCount> {
    let orders = create_orders_category(data);
    let ranked: Vec<(String, usize)> = value_counts(
        orders
            .iter()
            .filter_map(|o| o.product_category_name_english.as_deref()),
    )
    .into_iter()
    .map(|(category, count)| (category.to_string(), count))
    .collect();

    top_n_with_others(ranked, TOP_SOLD_CATEGORIES)
        .into_iter()
        .map(|(category, count)| CategoryCount { category, count })
        .collect()
}

/// Summed item price per English category, ordered by name.
///
/// Items without a category form their own null group, placed last.
pub fn create_category_sales(data: &Datasets) -> Vec<CategorySales> {
    let mut named: BTreeMap<String, f64> = BTreeMap::new();
    let mut uncategorised: Option<f64> = None;

    for row in create_orders_category(data) {
        match row.product_category_name_english {
            Some(category) => *named.entry(category).or_insert(0.0) += row.price,
            None => *uncategorised.get_or_insert(0.0) += row.price,
        }
    }

    named
        .into_iter()
        .map(|(category, price)| CategorySales {
            product_category_name_english: Some(category),
            price,
        })
        .chain(uncategorised.map(|price| CategorySales {
            product_category_name_english: None,
            price,
        }))
        .collect()
}

/// Top `n` categories by sales, followed by an `Others` row when the
/// remainder is positive. Equal prices keep table order.
pub fn rank_category_sales(sales: Vec<CategorySales>, n: usize) -> Vec<CategorySales> {
    let mut ranked = sales;
    ranked.sort_by(|a, b| b.price.total_cmp(&a.price));

    let rest = ranked.split_off(n.min(ranked.len()));
    let others: f64 = rest.iter().map(|s| s.price).sum();
    if others > 0.0 {
        ranked.push(CategorySales {
            product_category_name_english: Some(OTHERS.to_string()),
            price: others,
        });
    }
    ranked
}

pub fn create_top_categories_by_sales(data: &Datasets) -> Vec<CategorySales> {
    rank_category_sales(create_category_sales(data), TOP_SALES_CATEGORIES)
}

/// Rows of `sales` for one category. Empty when the category has no sales.
pub fn count_selected_category_sales(sales: &[CategorySales], category: &str) -> Vec<CategorySales> {
    sales
        .iter()
        .filter(|s| s.product_category_name_english.as_deref() == Some(category))
        .cloned()
        .collect()
}

/// Distinct English category names, in first-seen product order
pub fn available_categories(data: &Datasets) -> Vec<String> {
    create_product_english(data)
        .into_iter()
        .filter_map(|p| p.product_category_name_english)
        .collect::<IndexSet<String>>()
        .into_iter()
        .collect()
}
