//! UI Components
//!
//! Each component reads the shared [`Page`](zenith_core::Page) through
//! `use_page()` and renders one piece of the page: filter controls, the
//! card list, and the chrome around it.

pub mod chrome;
pub mod empty_state;
pub mod filter_bar;
pub mod hero_card;
pub mod hero_image;
pub mod hero_list;
pub mod series_row;

pub use chrome::{LoadingSkeleton, PageLoaderView};
pub use empty_state::EmptyStateView;
pub use filter_bar::FilterBar;
pub use hero_list::HeroList;
