//! UI Components
//!
//! Leptos components of the product status board.

mod board_pagination;
mod load_error_view;
mod product_card;
mod product_filter;
mod product_grid;
mod product_status_board;
mod toast_stack;

pub use board_pagination::BoardPagination;
pub use load_error_view::LoadErrorView;
pub use product_card::ProductCard;
pub use product_filter::ProductFilterBar;
pub use product_grid::ProductGrid;
pub use product_status_board::ProductStatusBoard;
pub use toast_stack::ToastStack;
