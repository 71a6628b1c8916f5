//! View-model nodes produced by the renderer.

use std::sync::Arc;

use zenith_types::{HeroRecord, Variant};

/// One hero card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    /// Unique across render passes, so a new pass never reuses old nodes
    pub key: String,
    /// Position in the rendered list
    pub index: usize,
    /// Entrance animation delay
    pub stagger_ms: u32,
    pub hero: Arc<HeroRecord>,
}

impl CardView {
    pub fn name(&self) -> &str {
        &self.hero.name
    }

    pub fn description(&self) -> &str {
        self.hero.description_or_empty()
    }
}

/// A collapsible series row inside an expanded card.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesRowView {
    pub index: usize,
    pub name: String,
    pub stagger_ms: u32,
    pub variants: Vec<VariantLink>,
}

/// External navigation link for a single variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantLink {
    pub name: String,
    pub href: String,
    pub target: &'static str,
    pub rel: &'static str,
}

impl From<&Variant> for VariantLink {
    fn from(variant: &Variant) -> Self {
        Self {
            name: variant.name.clone(),
            href: variant.link.clone(),
            target: "_blank",
            rel: "noopener noreferrer",
        }
    }
}
