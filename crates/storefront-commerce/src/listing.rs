//! Product listing pipeline.
//!
//! A pure derivation from the fetched product collection plus the
//! user-selected listing parameters to the page of products to render:
//! filter by category, stable sort, then window (paged on wide layouts,
//! incremental "load more" on narrow ones).

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Items per page, and the increment for "load more".
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Sort options for the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Title A-Z.
    #[default]
    TitleAsc,
    /// Title Z-A.
    TitleDesc,
    /// Price low to high.
    PriceAsc,
    /// Price high to low.
    PriceDesc,
    /// Highest rated first.
    RatingDesc,
}

impl SortKey {
    /// All options, in dropdown order.
    pub const ALL: [SortKey; 5] = [
        SortKey::TitleAsc,
        SortKey::TitleDesc,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::RatingDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::TitleAsc => "title-asc",
            SortKey::TitleDesc => "title-desc",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::RatingDesc => "rating-desc",
        }
    }

    /// Parse a sort value; unknown values fall back to the default.
    pub fn from_str(s: &str) -> Self {
        match s {
            "title-desc" => SortKey::TitleDesc,
            "price-asc" => SortKey::PriceAsc,
            "price-desc" => SortKey::PriceDesc,
            "rating-desc" => SortKey::RatingDesc,
            _ => SortKey::TitleAsc,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::TitleAsc => "Title A-Z",
            SortKey::TitleDesc => "Title Z-A",
            SortKey::PriceAsc => "Price Low to High",
            SortKey::PriceDesc => "Price High to Low",
            SortKey::RatingDesc => "Highest Rated",
        }
    }
}

/// Which subset of the filtered/sorted list is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// Discrete pages, 1-indexed (wide layouts).
    Paged { page: usize },
    /// Everything up to a growing watermark (narrow layouts).
    Incremental { loaded: usize },
}

/// Listing parameters: selected categories, sort key, and window.
///
/// Changing the category set or sort key resets the window — paged mode back
/// to page 1, incremental mode back to one page worth of items.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingQuery {
    pub categories: Vec<String>,
    pub sort: SortKey,
    pub window: Window,
    pub per_page: usize,
}

impl ListingQuery {
    /// Paged query with no filter, default sort, page 1.
    pub fn new(per_page: usize) -> Self {
        Self {
            categories: Vec::new(),
            sort: SortKey::default(),
            window: Window::Paged { page: 1 },
            per_page,
        }
    }

    /// Incremental query starting at one page worth of items.
    pub fn incremental(per_page: usize) -> Self {
        Self {
            window: Window::Incremental { loaded: per_page },
            ..Self::new(per_page)
        }
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    /// Change the sort key and reset the window.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.reset_window();
    }

    /// Replace the selected category set and reset the window.
    pub fn set_categories(&mut self, categories: Vec<String>) {
        self.categories = categories;
        self.reset_window();
    }

    /// Toggle one category in or out of the selection and reset the window.
    pub fn toggle_category(&mut self, category: &str) {
        if let Some(pos) = self.categories.iter().position(|c| c == category) {
            self.categories.remove(pos);
        } else {
            self.categories.push(category.to_string());
        }
        self.reset_window();
    }

    /// Jump to a page (paged mode only).
    pub fn set_page(&mut self, page: usize) {
        if let Window::Paged { page: current } = &mut self.window {
            *current = page.max(1);
        }
    }

    /// Reveal one more page worth of items (incremental mode only).
    pub fn load_more(&mut self) {
        if let Window::Incremental { loaded } = &mut self.window {
            *loaded += self.per_page;
        }
    }

    /// Switch windowing mode when the layout width changes. The window
    /// starts over in the new mode.
    pub fn set_paged(&mut self, paged: bool) {
        match (paged, &self.window) {
            (true, Window::Incremental { .. }) => self.window = Window::Paged { page: 1 },
            (false, Window::Paged { .. }) => {
                self.window = Window::Incremental {
                    loaded: self.per_page,
                }
            }
            _ => {}
        }
    }

    fn reset_window(&mut self) {
        self.window = match self.window {
            Window::Paged { .. } => Window::Paged { page: 1 },
            Window::Incremental { .. } => Window::Incremental {
                loaded: self.per_page,
            },
        };
    }
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// The visible slice plus the display values derived with it.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingPage {
    /// Products to render, in final order.
    pub items: Vec<Product>,
    /// Post-filter count.
    pub total_items: usize,
    /// Page count over the filtered set (at least 1).
    pub total_pages: usize,
    /// Current page; always 1 in incremental mode.
    pub current_page: usize,
    /// 1-based first shown item, 0 when nothing matches.
    pub start_item: usize,
    /// 1-based last shown item.
    pub end_item: usize,
    /// Whether more items exist beyond the window.
    pub has_more: bool,
}

/// Run the pipeline: filter, stable sort, window.
///
/// An empty category selection means "no filter", not "match nothing".
/// Sorting is stable, so ties keep their filtered order. Title comparisons
/// are case-insensitive; price and rating use total float ordering.
pub fn select(products: &[Product], query: &ListingQuery) -> ListingPage {
    let mut filtered: Vec<Product> = products
        .iter()
        .filter(|p| {
            query.categories.is_empty() || query.categories.iter().any(|c| *c == p.category)
        })
        .cloned()
        .collect();

    match query.sort {
        SortKey::TitleAsc => {
            filtered.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        }
        SortKey::TitleDesc => {
            filtered.sort_by(|a, b| b.title.to_lowercase().cmp(&a.title.to_lowercase()))
        }
        SortKey::PriceAsc => filtered.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => filtered.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::RatingDesc => filtered.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }

    let total_items = filtered.len();
    let per_page = query.per_page.max(1);
    let total_pages = if total_items == 0 {
        1
    } else {
        total_items.div_ceil(per_page)
    };

    match query.window {
        Window::Paged { page } => {
            let page = page.max(1);
            let start = (page - 1).saturating_mul(per_page).min(total_items);
            let end = (start + per_page).min(total_items);
            let items = filtered[start..end].to_vec();
            ListingPage {
                start_item: if items.is_empty() { 0 } else { start + 1 },
                end_item: end,
                has_more: page < total_pages,
                current_page: page,
                items,
                total_items,
                total_pages,
            }
        }
        Window::Incremental { loaded } => {
            let shown = loaded.min(total_items);
            let items = filtered[..shown].to_vec();
            ListingPage {
                start_item: if shown == 0 { 0 } else { 1 },
                end_item: shown,
                has_more: shown < total_items,
                current_page: 1,
                items,
                total_items,
                total_pages,
            }
        }
    }
}

/// Page numbers to render, a window of at most `max_visible` centered on the
/// current page and clamped to the valid range.
pub fn page_numbers(current: usize, total_pages: usize, max_visible: usize) -> Vec<usize> {
    if total_pages <= max_visible {
        return (1..=total_pages).collect();
    }
    let half = max_visible / 2;
    let start = current.saturating_sub(half).max(1);
    let end = (start + max_visible - 1).min(total_pages);
    let start = end.saturating_sub(max_visible - 1).max(1);
    (start..=end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, title: &str, category: &str, price: f64, rating: f64) -> Product {
        Product {
            id,
            title: title.to_string(),
            description: String::new(),
            category: category.to_string(),
            price,
            discount_percentage: 0.0,
            rating,
            stock: 0,
            brand: None,
            thumbnail: String::new(),
            images: Vec::new(),
        }
    }

    fn fixture() -> Vec<Product> {
        vec![
            product(1, "Banana", "A", 3.0, 4.0),
            product(2, "Apple", "B", 5.0, 4.5),
            product(3, "Cherry", "B", 2.0, 3.0),
            product(4, "Date", "C", 2.0, 5.0),
        ]
    }

    #[test]
    fn test_no_categories_means_no_filter() {
        let page = select(&fixture(), &ListingQuery::new(12));
        assert_eq!(page.total_items, 4);
        assert_eq!(page.items.len(), 4);
    }

    #[test]
    fn test_category_filter_with_price_sort() {
        let query = ListingQuery::new(12)
            .with_categories(vec!["B".to_string()])
            .with_sort(SortKey::PriceAsc);
        let page = select(&fixture(), &query);

        assert!(page.items.iter().all(|p| p.category == "B"));
        let prices: Vec<f64> = page.items.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![2.0, 5.0]);
    }

    #[test]
    fn test_title_sort_orders_apple_before_banana() {
        let products = vec![
            product(1, "Banana", "A", 3.0, 0.0),
            product(2, "Apple", "A", 5.0, 0.0),
        ];
        let page = select(&products, &ListingQuery::new(12));
        let titles: Vec<&str> = page.items.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Apple", "Banana"]);

        let page = select(
            &products,
            &ListingQuery::new(12).with_sort(SortKey::PriceDesc),
        );
        let prices: Vec<f64> = page.items.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![5.0, 3.0]);
    }

    #[test]
    fn test_title_sort_ignores_case() {
        let products = vec![
            product(1, "banana", "A", 0.0, 0.0),
            product(2, "Apple", "A", 0.0, 0.0),
        ];
        let page = select(&products, &ListingQuery::new(12));
        assert_eq!(page.items[0].title, "Apple");
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        // Equal prices keep their filtered order.
        let products = vec![
            product(3, "Cherry", "B", 2.0, 0.0),
            product(4, "Date", "C", 2.0, 0.0),
            product(1, "Banana", "A", 2.0, 0.0),
        ];
        let page = select(&products, &ListingQuery::new(12).with_sort(SortKey::PriceAsc));
        let ids: Vec<u64> = page.items.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 4, 1]);
    }

    #[test]
    fn test_rating_desc() {
        let page = select(&fixture(), &ListingQuery::new(12).with_sort(SortKey::RatingDesc));
        let ratings: Vec<f64> = page.items.iter().map(|p| p.rating).collect();
        assert_eq!(ratings, vec![5.0, 4.5, 4.0, 3.0]);
    }

    #[test]
    fn test_paged_window_slices() {
        let mut query = ListingQuery::new(3);
        query.set_page(2);
        let page = select(&fixture(), &query);

        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.start_item, 4);
        assert_eq!(page.end_item, 4);
        assert!(!page.has_more);
    }

    #[test]
    fn test_sort_change_resets_to_page_one() {
        let mut query = ListingQuery::new(3);
        query.set_page(2);
        query.set_sort(SortKey::PriceAsc);

        assert_eq!(query.window, Window::Paged { page: 1 });
        let page = select(&fixture(), &query);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.start_item, 1);
        assert_eq!(page.end_item, 3);
    }

    #[test]
    fn test_category_change_resets_incremental_watermark() {
        let mut query = ListingQuery::incremental(2);
        query.load_more();
        assert_eq!(query.window, Window::Incremental { loaded: 4 });

        query.toggle_category("B");
        assert_eq!(query.window, Window::Incremental { loaded: 2 });
    }

    #[test]
    fn test_incremental_window_grows_and_caps() {
        let mut query = ListingQuery::incremental(3);
        let page = select(&fixture(), &query);
        assert_eq!(page.items.len(), 3);
        assert_eq!((page.start_item, page.end_item), (1, 3));
        assert!(page.has_more);

        query.load_more();
        let page = select(&fixture(), &query);
        assert_eq!(page.items.len(), 4);
        assert_eq!(page.end_item, 4);
        assert!(!page.has_more);
    }

    #[test]
    fn test_empty_filtered_set() {
        let query = ListingQuery::new(12).with_categories(vec!["missing".to_string()]);
        let page = select(&fixture(), &query);

        assert_eq!(page.total_items, 0);
        assert_eq!(page.total_pages, 1);
        assert_eq!((page.start_item, page.end_item), (0, 0));
        assert!(!page.has_more);
    }

    #[test]
    fn test_mode_switch_starts_over() {
        let mut query = ListingQuery::new(3);
        query.set_page(2);
        query.set_paged(false);
        assert_eq!(query.window, Window::Incremental { loaded: 3 });
        query.set_paged(true);
        assert_eq!(query.window, Window::Paged { page: 1 });
    }

    #[test]
    fn test_page_numbers_window() {
        assert_eq!(page_numbers(1, 3, 5), vec![1, 2, 3]);
        assert_eq!(page_numbers(5, 10, 5), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_numbers(1, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_numbers(10, 10, 5), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_sort_key_round_trip() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_str(key.as_str()), key);
        }
        assert_eq!(SortKey::from_str("bogus"), SortKey::TitleAsc);
    }
}
