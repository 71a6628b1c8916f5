//! Plain-text reports printed by the validator.

use zenith_core::render::{FrameOutcome, Renderer};
use zenith_core::{HeroRecord, PageConfig};
use zenith_types::formatting::{format_count, format_delay};

/// Collection totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub heroes: usize,
    pub series: usize,
    pub variants: usize,
    /// Records that will show the placeholder portrait
    pub missing_images: usize,
}

impl Summary {
    pub fn of(heroes: &[HeroRecord]) -> Self {
        heroes.iter().fold(Self::default(), |mut acc, hero| {
            acc.heroes += 1;
            acc.series += hero.series.len();
            acc.variants += hero.variant_count();
            if hero.image.as_deref().is_none_or(|s| s.trim().is_empty()) {
                acc.missing_images += 1;
            }
            acc
        })
    }

    pub fn line(&self) -> String {
        format!(
            "{}, {}, {} ({} without image)",
            format_count(self.heroes, "hero", "heroes"),
            format_count(self.series, "series group", "series groups"),
            format_count(self.variants, "variant", "variants"),
            self.missing_images,
        )
    }
}

/// One appended batch of a simulated render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLine {
    pub frame: usize,
    pub cards: Vec<(usize, String, u32)>,
}

impl FrameLine {
    pub fn line(&self) -> String {
        let cards: Vec<String> = self
            .cards
            .iter()
            .map(|(index, name, stagger)| format!("#{index} {name} @{}", format_delay(*stagger)))
            .collect();
        format!("frame {}: {}", self.frame, cards.join(", "))
    }
}

/// Run a render pass for `list` frame by frame, the way the page would.
pub fn simulate_frames(config: &PageConfig, list: Vec<HeroRecord>) -> Vec<FrameLine> {
    let mut renderer = Renderer::new(config);
    renderer.render(list);

    let mut frames = Vec::new();
    let mut frame = 0;
    loop {
        frame += 1;
        match renderer.on_frame() {
            FrameOutcome::Appended { range, finished, .. } => {
                let cards = renderer.cards()[range]
                    .iter()
                    .map(|c| (c.view.index, c.view.name().to_string(), c.view.stagger_ms))
                    .collect();
                frames.push(FrameLine { frame, cards });
                if finished {
                    break;
                }
            }
            FrameOutcome::EmptyShown { .. } | FrameOutcome::Idle => break,
        }
    }
    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use zenith_types::{SeriesGroup, Variant};

    fn hero(name: &str, variants: usize) -> HeroRecord {
        HeroRecord {
            image: Some(format!("https://img.example/{name}.png")),
            series: vec![SeriesGroup {
                name: "Base".to_string(),
                items: (0..variants)
                    .map(|i| Variant {
                        name: format!("V{i}"),
                        link: format!("https://example.com/{i}"),
                    })
                    .collect(),
            }],
            ..HeroRecord::named(name)
        }
    }

    #[test]
    fn test_summary_counts() {
        let heroes = vec![hero("Ana", 2), hero("Bo", 3), HeroRecord::named("Cy")];
        let summary = Summary::of(&heroes);
        assert_eq!(summary.heroes, 3);
        assert_eq!(summary.series, 2);
        assert_eq!(summary.variants, 5);
        assert_eq!(summary.missing_images, 1);
        assert_eq!(
            summary.line(),
            "3 heroes, 2 series groups, 5 variants (1 without image)"
        );
    }

    #[test]
    fn test_frames_follow_batch_size() {
        let list: Vec<HeroRecord> = (0..12).map(|i| hero(&format!("H{i}"), 0)).collect();
        let frames = simulate_frames(&PageConfig::default(), list);

        let sizes: Vec<usize> = frames.iter().map(|f| f.cards.len()).collect();
        assert_eq!(sizes, vec![5, 5, 2]);
        assert_eq!(frames[1].cards[0].0, 5);
        assert_eq!(frames[1].cards[0].2, 250);
        assert!(frames[2].line().starts_with("frame 3: #10 H10 @0.5s"));
    }

    #[test]
    fn test_empty_list_has_no_frames() {
        assert!(simulate_frames(&PageConfig::default(), Vec::new()).is_empty());
    }
}
