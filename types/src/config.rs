//! Page configuration
//!
//! Every field has a default matching the shipped page, so an empty TOML file
//! (or no file at all) yields the stock behavior.

use serde::{Deserialize, Serialize};

use crate::ROLE_ALL;

/// Timing and layout knobs for the hero page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Location of the hero collection, relative to the page
    pub data_url: String,
    /// Cards appended per animation frame
    pub batch_size: usize,
    /// Entrance delay added per card index
    pub card_stagger_ms: u32,
    /// Entrance delay added per series row index
    pub series_stagger_ms: u32,
    /// Height animation duration for card expand/collapse
    pub expand_duration_ms: u32,
    pub search_debounce_ms: u32,
    pub scroll_throttle_ms: u32,
    pub loading_fade_ms: u32,
    /// Delay after window load before the page loader is hidden
    pub page_loader_delay_ms: u32,
    /// Hide the page loader after this long even if window load never fires
    pub page_loader_fallback_ms: u32,
    /// Role selector buttons, in display order
    pub roles: Vec<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            data_url: "data.json".to_string(),
            batch_size: 5,
            card_stagger_ms: 50,
            series_stagger_ms: 100,
            expand_duration_ms: 500,
            search_debounce_ms: 300,
            scroll_throttle_ms: 100,
            loading_fade_ms: 400,
            page_loader_delay_ms: 500,
            page_loader_fallback_ms: 3000,
            roles: [
                ROLE_ALL, "tank", "fighter", "assassin", "mage", "marksman", "support",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl PageConfig {
    /// Normalize values that would stall the page.
    ///
    /// A zero batch size would never finish a render pass, and a missing
    /// "all" button would leave no way to clear the role filter.
    pub fn validated(mut self) -> Self {
        self.batch_size = self.batch_size.max(1);
        if !self.roles.iter().any(|r| r == ROLE_ALL) {
            self.roles.insert(0, ROLE_ALL.to_string());
        }
        self
    }
}
