//! The `app` crate imports everything it needs from the crate root, so the
//! root re-exports are part of the contract.

use storefront_commerce::{
    capitalize, distinct_categories, select, Cart, ListingQuery, Product, SortKey,
    DEFAULT_PAGE_SIZE,
};

fn product(id: u64, title: &str, category: &str, price: f64) -> Product {
    Product {
        id,
        title: title.to_string(),
        description: String::new(),
        category: category.to_string(),
        price,
        discount_percentage: 0.0,
        rating: 4.0,
        stock: 10,
        brand: None,
        thumbnail: String::new(),
        images: Vec::new(),
    }
}

#[test]
fn root_exports_cover_the_listing_flow() {
    let products = vec![
        product(1, "Desk Lamp", "lighting", 24.99),
        product(2, "Armchair", "furniture", 189.0),
    ];

    let categories = distinct_categories(&products);
    assert_eq!(categories, vec!["furniture", "lighting"]);
    assert_eq!(capitalize(&categories[0]), "Furniture");

    let query = ListingQuery::new(DEFAULT_PAGE_SIZE).with_sort(SortKey::PriceDesc);
    let page = select(&products, &query);
    assert_eq!(page.items[0].id, 2);
    assert_eq!(page.total_items, 2);
}

#[test]
fn root_exports_cover_the_cart_flow() {
    let mut cart = Cart::default();
    cart.add(product(1, "Desk Lamp", "lighting", 24.99));
    cart.add(product(1, "Desk Lamp", "lighting", 24.99));
    assert_eq!(cart.total_items(), 2);
}
