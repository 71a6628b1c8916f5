//! Hero data model
//!
//! Mirrors the shape of the static `data.json` resource. Optional fields
//! default so that partially filled records still decode.

use serde::{Deserialize, Serialize};

/// Base URL of the placeholder service used when a hero image fails to load.
const PLACEHOLDER_BASE: &str = "https://placehold.co/100x100/1a1a1a/fff?text=";

/// One entry in the displayed hero collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroRecord {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// Display order is the order in the source file
    #[serde(default)]
    pub series: Vec<SeriesGroup>,
}

/// A named sub-collection of variants belonging to a hero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesGroup {
    pub name: String,
    #[serde(default)]
    pub items: Vec<Variant>,
}

/// A single external link inside a series group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub name: String,
    pub link: String,
}

impl HeroRecord {
    /// Create a record with only a name set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            image: None,
            series: Vec::new(),
        }
    }

    /// Description text, or an empty string when absent.
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// First character of the name, used as the image fallback.
    pub fn fallback_initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }

    /// Placeholder image URL showing the hero's initial.
    pub fn fallback_image_url(&self) -> String {
        format!(
            "{}{}",
            PLACEHOLDER_BASE,
            urlencoding::encode(&self.fallback_initial())
        )
    }

    /// Image to request first. Records without an image go straight to the
    /// placeholder.
    pub fn image_url(&self) -> String {
        match self.image.as_deref() {
            Some(src) if !src.trim().is_empty() => src.to_string(),
            _ => self.fallback_image_url(),
        }
    }

    /// Total variant links across all series groups.
    pub fn variant_count(&self) -> usize {
        self.series.iter().map(|s| s.items.len()).sum()
    }
}
