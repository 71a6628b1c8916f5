//! Headless list rendering
//!
//! The renderer produces a tree of view-model nodes (card, series row,
//! variant link) instead of DOM. The web frontend materializes whatever the
//! renderer currently holds; tests inspect it directly.
//!
//! # Architecture
//!
//! ```text
//! filtered Vec<HeroRecord>
//!          │  Renderer::render   (dropped while a pass is in flight)
//!          ▼
//!   RenderPass queue ──on_frame──▶ batch of N cards appended in order
//!          │                              │
//!          └── last batch ──▶ guard clear  ▼
//!                                 RenderedCard { CardView, CardController }
//! ```

mod image;
mod renderer;
mod view;

pub use image::ImageState;
pub use renderer::{FrameOutcome, RenderOutcome, RenderedCard, Renderer, Visibility};
pub use view::{CardView, SeriesRowView, VariantLink};
