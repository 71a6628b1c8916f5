//! Collapsible series rows inside an expanded card.

use zenith_types::SeriesGroup;

use crate::render::{SeriesRowView, VariantLink};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeriesState {
    #[default]
    Closed,
    Open,
}

/// One series group with its own open/closed state.
///
/// Height changes are handed to CSS (`transition: height`), so unlike the
/// card there is no tween and no in-flight state: every toggle flips.
#[derive(Debug, Clone)]
pub struct SeriesRow {
    view: SeriesRowView,
    state: SeriesState,
    height: f64,
}

impl SeriesRow {
    pub fn new(index: usize, group: &SeriesGroup, stagger_ms: u32) -> Self {
        let variants = group.items.iter().map(VariantLink::from).collect();
        Self {
            view: SeriesRowView {
                index,
                name: group.name.clone(),
                stagger_ms: index as u32 * stagger_ms,
                variants,
            },
            state: SeriesState::Closed,
            height: 0.0,
        }
    }

    /// Flip the row. `inner_height` is the natural height of the row's
    /// variant list, measured by the caller at toggle time.
    pub fn toggle(&mut self, inner_height: f64) -> SeriesState {
        match self.state {
            SeriesState::Closed => {
                self.state = SeriesState::Open;
                self.height = inner_height.max(0.0);
            }
            SeriesState::Open => {
                self.state = SeriesState::Closed;
                self.height = 0.0;
            }
        }
        self.state
    }

    pub fn view(&self) -> &SeriesRowView {
        &self.view
    }

    pub fn is_open(&self) -> bool {
        self.state == SeriesState::Open
    }

    /// Current target height of the content region.
    pub fn height(&self) -> f64 {
        self.height
    }
}
