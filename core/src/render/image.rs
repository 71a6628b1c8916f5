/// Load state of a card image.
///
/// The image starts hidden, fades in once loaded, and swaps to the hero's
/// initial on a placeholder if the source fails. A failing placeholder does
/// not trigger another swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageState {
    #[default]
    Loading,
    Loaded,
    Fallback,
}

impl ImageState {
    pub fn on_load(self) -> Self {
        match self {
            Self::Loading => Self::Loaded,
            other => other,
        }
    }

    pub fn on_error(self) -> Self {
        Self::Fallback
    }

    /// Whether the image should be drawn at full opacity.
    pub fn is_visible(self) -> bool {
        !matches!(self, Self::Loading)
    }

    pub fn is_fallback(self) -> bool {
        matches!(self, Self::Fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_lifecycle() {
        assert!(!ImageState::Loading.is_visible());
        assert_eq!(ImageState::Loading.on_load(), ImageState::Loaded);
        assert_eq!(ImageState::Loading.on_error(), ImageState::Fallback);
        // the placeholder loading keeps the fallback styling
        assert_eq!(ImageState::Fallback.on_load(), ImageState::Fallback);
        assert!(ImageState::Fallback.is_visible());
    }
}
