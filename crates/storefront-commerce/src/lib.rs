//! Domain types and logic for the storefront.
//!
//! This crate is UI-free and browser-free, so everything in it runs as plain
//! host tests:
//!
//! - **Catalog**: the product shape served by the catalog API
//! - **Cart**: line items keyed by product id, with derived totals
//! - **Listing**: the filter → sort → window pipeline behind the product grid
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_commerce::prelude::*;
//!
//! let mut cart = Cart::default();
//! cart.add(product.clone());
//! cart.add(product);
//! assert_eq!(cart.total_items(), 2);
//!
//! let query = ListingQuery::new(12).with_sort(SortKey::PriceAsc);
//! let page = select(&products, &query);
//! ```

pub mod cart;
pub mod catalog;
pub mod listing;

pub use cart::{Cart, CartLine};
pub use catalog::{capitalize, distinct_categories, Product, ProductsResponse};
pub use listing::{
    page_numbers, select, ListingPage, ListingQuery, SortKey, Window, DEFAULT_PAGE_SIZE,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{Cart, CartLine};
    pub use crate::catalog::{capitalize, distinct_categories, Product, ProductsResponse};
    pub use crate::listing::{
        page_numbers, select, ListingPage, ListingQuery, SortKey, Window, DEFAULT_PAGE_SIZE,
    };
}
