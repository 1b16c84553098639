//! Reusable view components.

pub mod back_to_top;
pub mod controls_bar;
pub mod filter_sidebar;
pub mod mobile_menu;
pub mod pagination;
pub mod product_grid;
pub mod quantity_picker;
