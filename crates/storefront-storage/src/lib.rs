//! Typed key-value persistence for the storefront.
//!
//! Wraps the browser's `localStorage` with automatic JSON serialization.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_storage::Store;
//!
//! let store = Store::open()?;
//! store.set("storefront-cart", &cart)?;
//! let cart: Option<Cart> = store.get("storefront-cart")?;
//! store.delete("storefront-cart")?;
//! ```

mod error;
mod kv;

pub use error::StorageError;
pub use kv::Store;
