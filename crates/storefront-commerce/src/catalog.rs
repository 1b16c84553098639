//! Catalog types.
//!
//! Mirrors the product shape returned by the DummyJSON catalog API
//! (`GET /products`, `GET /products/{id}`). Products are read-only once
//! fetched; the UI never mutates them.

use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Descriptive fields the core logic never touches are tolerated but not
/// modeled; anything the upstream omits falls back to its default so a
/// partial payload still deserializes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: u64,
    /// Product title.
    pub title: String,
    /// Full description.
    #[serde(default)]
    pub description: String,
    /// Category name (e.g., "beauty", "groceries").
    #[serde(default)]
    pub category: String,
    /// Unit price.
    #[serde(default)]
    pub price: f64,
    /// Discount percentage, informational only.
    #[serde(default)]
    pub discount_percentage: f64,
    /// Average customer rating.
    #[serde(default)]
    pub rating: f64,
    /// Units in stock.
    #[serde(default)]
    pub stock: i64,
    /// Brand name, absent for unbranded products.
    #[serde(default)]
    pub brand: Option<String>,
    /// Thumbnail image URL.
    #[serde(default)]
    pub thumbnail: String,
    /// Gallery image URLs.
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    /// Format the price as a dollar string.
    pub fn price_display(&self) -> String {
        format!("${:.2}", self.price)
    }
}

/// Response envelope for `GET /products`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}

/// Distinct category names present in a product collection, sorted.
pub fn distinct_categories(products: &[Product]) -> Vec<String> {
    let mut categories: Vec<String> = products
        .iter()
        .map(|p| p.category.clone())
        .filter(|c| !c.is_empty())
        .collect();
    categories.sort();
    categories.dedup();
    categories
}

/// Uppercase the first character, for category labels.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_partial_payload() {
        // Only id and title present; everything else defaults.
        let product: Product = serde_json::from_str(r#"{"id": 5, "title": "Soap"}"#).unwrap();
        assert_eq!(product.id, 5);
        assert_eq!(product.title, "Soap");
        assert_eq!(product.price, 0.0);
        assert!(product.brand.is_none());
        assert!(product.images.is_empty());
    }

    #[test]
    fn test_camel_case_wire_names() {
        let product: Product = serde_json::from_str(
            r#"{"id": 1, "title": "Pen", "discountPercentage": 12.5, "rating": 4.2}"#,
        )
        .unwrap();
        assert_eq!(product.discount_percentage, 12.5);
        assert_eq!(product.rating, 4.2);
    }

    #[test]
    fn test_distinct_categories_sorted_deduped() {
        let products = vec![
            product_in("groceries"),
            product_in("beauty"),
            product_in("groceries"),
            product_in(""),
        ];
        assert_eq!(distinct_categories(&products), vec!["beauty", "groceries"]);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("beauty"), "Beauty");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_price_display() {
        let mut p = product_in("beauty");
        p.price = 9.5;
        assert_eq!(p.price_display(), "$9.50");
    }

    fn product_in(category: &str) -> Product {
        Product {
            id: 1,
            title: "Test".to_string(),
            description: String::new(),
            category: category.to_string(),
            price: 1.0,
            discount_percentage: 0.0,
            rating: 0.0,
            stock: 0,
            brand: None,
            thumbnail: String::new(),
            images: Vec::new(),
        }
    }
}
