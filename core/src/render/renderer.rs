//! Batched list renderer with a single in-flight pass.

use std::collections::VecDeque;
use std::ops::Range;
use std::sync::Arc;

use zenith_types::{HeroRecord, PageConfig};

use super::view::CardView;
use crate::animation::CardController;

/// Which of the list container / empty state is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    pub list: bool,
    pub empty_state: bool,
}

impl Default for Visibility {
    fn default() -> Self {
        Self {
            list: true,
            empty_state: false,
        }
    }
}

/// Result of a [`Renderer::render`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// A pass with cards to append began
    Started { pass: u64, total: usize },
    /// Input was empty; the empty state shows on the next frame
    Empty { pass: u64 },
    /// Another pass was in flight; nothing changed
    Dropped,
}

/// Result of a [`Renderer::on_frame`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameOutcome {
    /// No pass in flight
    Idle,
    /// A batch was appended; `finished` marks the last one
    Appended {
        pass: u64,
        range: Range<usize>,
        finished: bool,
    },
    /// The empty state became visible and the pass ended
    EmptyShown { pass: u64 },
}

/// A card in the list together with its expand controller.
#[derive(Debug, Clone)]
pub struct RenderedCard {
    pub view: CardView,
    pub controller: CardController,
}

#[derive(Debug)]
struct RenderPass {
    id: u64,
    queue: VecDeque<Arc<HeroRecord>>,
    next_index: usize,
}

/// Owns the rendered card list. Every pass discards all previous cards
/// (and with them every card's expand state); nothing is diffed or reused.
#[derive(Debug)]
pub struct Renderer {
    batch_size: usize,
    card_stagger_ms: u32,
    series_stagger_ms: u32,
    expand_duration_ms: u32,
    pass: Option<RenderPass>,
    next_pass_id: u64,
    cards: Vec<RenderedCard>,
    visibility: Visibility,
}

impl Renderer {
    pub fn new(config: &PageConfig) -> Self {
        Self {
            batch_size: config.batch_size.max(1),
            card_stagger_ms: config.card_stagger_ms,
            series_stagger_ms: config.series_stagger_ms,
            expand_duration_ms: config.expand_duration_ms,
            pass: None,
            next_pass_id: 0,
            cards: Vec::new(),
            visibility: Visibility::default(),
        }
    }

    /// Start a render pass for `list`.
    ///
    /// If a pass is already in flight the call is dropped: no queuing, the
    /// caller either calls again later or keeps the stale result.
    pub fn render(&mut self, list: Vec<HeroRecord>) -> RenderOutcome {
        if let Some(active) = &self.pass {
            tracing::debug!(
                active_pass = active.id,
                requested = list.len(),
                "Render in progress, dropping request"
            );
            return RenderOutcome::Dropped;
        }

        let id = self.next_pass_id;
        self.next_pass_id += 1;
        self.cards.clear();

        let total = list.len();
        self.pass = Some(RenderPass {
            id,
            queue: list.into_iter().map(Arc::new).collect(),
            next_index: 0,
        });

        if total == 0 {
            tracing::debug!(pass = id, "Render pass started with no results");
            return RenderOutcome::Empty { pass: id };
        }

        self.visibility = Visibility {
            list: true,
            empty_state: false,
        };
        tracing::debug!(pass = id, total, "Render pass started");
        RenderOutcome::Started { pass: id, total }
    }

    /// Advance the in-flight pass by one animation frame.
    pub fn on_frame(&mut self) -> FrameOutcome {
        let Some(pass) = self.pass.as_mut() else {
            return FrameOutcome::Idle;
        };
        let id = pass.id;

        if pass.queue.is_empty() && pass.next_index == 0 {
            self.visibility = Visibility {
                list: false,
                empty_state: true,
            };
            self.pass = None;
            return FrameOutcome::EmptyShown { pass: id };
        }

        let start = pass.next_index;
        let take = self.batch_size.min(pass.queue.len());
        for hero in pass.queue.drain(..take) {
            let index = pass.next_index;
            pass.next_index += 1;
            let controller =
                CardController::new(Arc::clone(&hero), self.expand_duration_ms, self.series_stagger_ms);
            self.cards.push(RenderedCard {
                view: CardView {
                    key: format!("{id}-{index}"),
                    index,
                    stagger_ms: index as u32 * self.card_stagger_ms,
                    hero,
                },
                controller,
            });
        }
        let range = start..pass.next_index;
        let finished = pass.queue.is_empty();
        if finished {
            self.pass = None;
            tracing::debug!(pass = id, cards = self.cards.len(), "Render pass complete");
        }

        FrameOutcome::Appended {
            pass: id,
            range,
            finished,
        }
    }

    /// Run frames until the in-flight pass completes.
    pub fn flush(&mut self) -> usize {
        let mut frames = 0;
        while self.on_frame() != FrameOutcome::Idle {
            frames += 1;
        }
        frames
    }

    pub fn is_rendering(&self) -> bool {
        self.pass.is_some()
    }

    pub fn cards(&self) -> &[RenderedCard] {
        &self.cards
    }

    pub fn card_mut(&mut self, index: usize) -> Option<&mut RenderedCard> {
        self.cards.get_mut(index)
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Whether any card has a height animation in flight.
    pub fn any_animating(&self) -> bool {
        self.cards.iter().any(|card| card.controller.is_animating())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::CardEvent;

    fn heroes(n: usize) -> Vec<HeroRecord> {
        (0..n).map(|i| HeroRecord::named(format!("Hero {i}"))).collect()
    }

    fn renderer() -> Renderer {
        Renderer::new(&PageConfig::default())
    }

    fn card_names(r: &Renderer) -> Vec<String> {
        r.cards().iter().map(|c| c.view.name().to_string()).collect()
    }

    #[test]
    fn test_batches_of_five_in_order() {
        let mut r = renderer();
        assert_eq!(
            r.render(heroes(12)),
            RenderOutcome::Started { pass: 0, total: 12 }
        );
        assert!(r.cards().is_empty());

        let ranges: Vec<_> = std::iter::from_fn(|| match r.on_frame() {
            FrameOutcome::Appended { range, finished, .. } => Some((range, finished)),
            _ => None,
        })
        .collect();

        assert_eq!(ranges, vec![(0..5, false), (5..10, false), (10..12, true)]);
        assert!(!r.is_rendering());
        assert_eq!(card_names(&r), (0..12).map(|i| format!("Hero {i}")).collect::<Vec<_>>());
    }

    #[test]
    fn test_stagger_is_index_times_constant() {
        let mut r = renderer();
        r.render(heroes(7));
        r.flush();
        let delays: Vec<_> = r.cards().iter().map(|c| c.view.stagger_ms).collect();
        assert_eq!(delays, vec![0, 50, 100, 150, 200, 250, 300]);
    }

    #[test]
    fn test_empty_input_shows_empty_state() {
        let mut r = renderer();
        r.render(heroes(3));
        r.flush();

        assert_eq!(r.render(Vec::new()), RenderOutcome::Empty { pass: 1 });
        assert!(r.cards().is_empty());
        assert!(r.is_rendering());

        assert_eq!(r.on_frame(), FrameOutcome::EmptyShown { pass: 1 });
        assert!(!r.is_rendering());
        let vis = r.visibility();
        assert!(vis.empty_state);
        assert!(!vis.list);
    }

    #[test]
    fn test_non_empty_after_empty_restores_list() {
        let mut r = renderer();
        r.render(Vec::new());
        r.flush();
        r.render(heroes(1));
        let vis = r.visibility();
        assert!(vis.list);
        assert!(!vis.empty_state);
    }

    #[test]
    fn test_render_dropped_while_in_flight() {
        let mut r = renderer();
        r.render(heroes(12));
        r.on_frame();

        assert_eq!(r.render(heroes(3)), RenderOutcome::Dropped);
        r.flush();

        // only the accepted pass, no interleaving
        assert_eq!(r.cards().len(), 12);
        assert!(r.cards().iter().all(|c| c.view.key.starts_with("0-")));
    }

    #[test]
    fn test_rerender_discards_expand_state() {
        let mut r = renderer();
        r.render(heroes(2));
        r.flush();
        let card = r.card_mut(0).unwrap();
        card.controller.advance(CardEvent::Toggle);
        assert!(card.controller.is_open());
        assert!(r.any_animating());

        r.render(heroes(2));
        r.flush();
        assert!(r.cards().iter().all(|c| !c.controller.is_open()));
        assert_eq!(r.cards()[0].view.key, "1-0");
    }

    #[test]
    fn test_idle_frame() {
        let mut r = renderer();
        assert_eq!(r.on_frame(), FrameOutcome::Idle);
        assert_eq!(r.flush(), 0);
    }
}
