//! Card animation
//!
//! - **Easing/Tween**: eased height interpolation sampled per frame
//! - **Card**: expand/collapse state machine with lazy series content
//! - **Series**: independent open/closed rows inside an expanded card
//!
//! Pointer and keyboard input both reduce to an [`Activation`] so the two
//! paths cannot drift apart.

pub mod card;
pub mod easing;
pub mod series;
pub mod tween;

#[cfg(test)]
mod card_tests;

pub use card::{Advance, CardController, CardEvent, CardState, RegionHeight, RegionStyle};
pub use series::{SeriesRow, SeriesState};
pub use tween::{HeightTween, TweenFrame};

/// How a toggle was requested. Both produce the same transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Pointer,
    Keyboard,
}

impl Activation {
    /// Map a `KeyboardEvent.key` value. Only Enter and Space activate; the
    /// caller should prevent the default action when this returns `Some`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" | " " => Some(Self::Keyboard),
            _ => None,
        }
    }
}
