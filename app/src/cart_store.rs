//! Context-provided cart store.
//!
//! Owns the reactive cart state for the session. State transitions are the
//! pure [`Cart`] operations; this layer adds the persistence effect: hydrate
//! once from local storage at construction, write the full line list back
//! after every mutation. Storage failures are logged and the in-memory cart
//! keeps working for the rest of the session.

use leptos::logging;
use leptos::prelude::*;
use storefront_commerce::{Cart, CartLine, Product};
use storefront_storage::Store;

/// Fixed storage key holding the serialized line array.
pub const CART_STORAGE_KEY: &str = "storefront-cart";

/// Cheap-to-copy handle to the session's cart.
#[derive(Clone, Copy)]
pub struct CartStore {
    cart: RwSignal<Cart>,
}

impl CartStore {
    /// Hydrate from storage and provide the store via context.
    ///
    /// The storage read happens before the signal exists, so no mutation can
    /// persist an empty cart over data that was never loaded.
    pub fn provide() {
        let cart = Self::hydrate();
        provide_context(Self {
            cart: RwSignal::new(cart),
        });
    }

    /// Get the store provided at the app root.
    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    fn hydrate() -> Cart {
        let store = match Store::open() {
            Ok(store) => store,
            Err(e) => {
                logging::warn!("cart: storage unavailable, starting empty: {e}");
                return Cart::default();
            }
        };
        match store.get::<Cart>(CART_STORAGE_KEY) {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::default(),
            Err(e) => {
                logging::warn!("cart: discarding unreadable saved cart: {e}");
                Cart::default()
            }
        }
    }

    fn persist(&self) {
        let result = Store::open()
            .and_then(|store| self.cart.with_untracked(|cart| store.set(CART_STORAGE_KEY, cart)));
        if let Err(e) = result {
            logging::warn!("cart: failed to save: {e}");
        }
    }

    /// Add one unit of a product, merging into an existing line by id.
    pub fn add(&self, product: Product) {
        self.cart.update(|cart| cart.add(product));
        self.persist();
    }

    /// Remove a line; absent ids are a silent no-op.
    pub fn remove(&self, product_id: u64) {
        self.cart.update(|cart| {
            cart.remove(product_id);
        });
        self.persist();
    }

    /// Set a line's quantity; `<= 0` removes, absent ids are a no-op.
    pub fn set_quantity(&self, product_id: u64, quantity: i64) {
        self.cart.update(|cart| cart.set_quantity(product_id, quantity));
        self.persist();
    }

    /// Empty the cart.
    pub fn clear(&self) {
        self.cart.update(|cart| cart.clear());
        self.persist();
    }

    // Reactive reads, derived from the lines on every access.

    pub fn total_items(&self) -> i64 {
        self.cart.with(|cart| cart.total_items())
    }

    pub fn total_price_display(&self) -> String {
        self.cart.with(|cart| cart.total_price_display())
    }

    pub fn lines(&self) -> Vec<CartLine> {
        self.cart.with(|cart| cart.lines().to_vec())
    }

    pub fn is_empty(&self) -> bool {
        self.cart.with(|cart| cart.is_empty())
    }
}
