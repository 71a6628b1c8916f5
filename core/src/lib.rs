pub mod animation;
pub mod config;
pub mod filter;
pub mod loader;
pub mod page;
pub mod render;
pub mod timing;

// Re-exports for convenience
pub use animation::{Activation, CardController, CardEvent, CardState};
pub use filter::{Role, filter, filter_indices};
pub use loader::{HeroCollection, LoadError, parse_heroes};
pub use page::Page;
pub use render::{FrameOutcome, RenderOutcome, Renderer};
pub use timing::{Debounce, Millis, Throttle};
pub use zenith_types::{HeroRecord, PageConfig, SeriesGroup, Variant};
