//! Tests for the card expand/collapse controller
//!
//! Covers re-entrancy, lazy series build and region styling through full
//! open/close cycles.

use std::sync::Arc;

use zenith_types::{HeroRecord, SeriesGroup, Variant};

use super::card::{Advance, CardController, CardEvent, CardState, RegionHeight};
use super::Activation;

const DURATION: u32 = 500;

fn make_hero() -> Arc<HeroRecord> {
    let variant = |name: &str| Variant {
        name: name.to_string(),
        link: format!("https://example.com/{name}"),
    };
    Arc::new(HeroRecord {
        name: "Granger".to_string(),
        description: Some("Marksman".to_string()),
        image: None,
        series: vec![
            SeriesGroup {
                name: "Starlight".to_string(),
                items: vec![variant("a"), variant("b")],
            },
            SeriesGroup {
                name: "Special".to_string(),
                items: vec![variant("c")],
            },
        ],
    })
}

fn make_card() -> CardController {
    CardController::new(make_hero(), DURATION, 100)
}

/// Drive frames every 16ms from `start` until the card settles.
fn run_frames(card: &mut CardController, start: f64) -> (Advance, f64) {
    let mut t = start;
    loop {
        t += 16.0;
        let result = card.advance(CardEvent::Frame { now: t });
        if let Advance::Settled(_) = result {
            return (result, t);
        }
        assert!(t < start + 5_000.0, "card never settled");
    }
}

fn open(card: &mut CardController, now: f64, height: f64) -> f64 {
    assert_eq!(
        card.advance(CardEvent::Toggle),
        Advance::Started(CardState::Expanding)
    );
    card.advance(CardEvent::Measured { height, now });
    let (result, t) = run_frames(card, now);
    assert_eq!(result, Advance::Settled(CardState::Expanded));
    t
}

fn close(card: &mut CardController, now: f64, height: f64) -> f64 {
    assert_eq!(
        card.advance(CardEvent::Toggle),
        Advance::Started(CardState::Collapsing)
    );
    card.advance(CardEvent::Measured { height, now });
    let (result, t) = run_frames(card, now);
    assert_eq!(result, Advance::Settled(CardState::Collapsed));
    t
}

// ─────────────────────────────────────────────────────────────────────────────
// Initial state
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_starts_collapsed_without_content() {
    let card = make_card();
    assert_eq!(card.state(), CardState::Collapsed);
    assert!(!card.is_open());
    assert!(card.series().is_none());
    assert_eq!(card.build_count(), 0);
    assert!(!card.region().displayed);
}

// ─────────────────────────────────────────────────────────────────────────────
// Re-entrancy guard
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_double_activation_changes_state_once() {
    let mut card = make_card();

    let first = card.advance(CardEvent::Toggle);
    let second = card.advance(CardEvent::Toggle);

    assert_eq!(first, Advance::Started(CardState::Expanding));
    assert_eq!(second, Advance::Ignored);
    assert_eq!(card.state(), CardState::Expanding);
}

#[test]
fn test_toggle_ignored_mid_animation() {
    let mut card = make_card();
    card.advance(CardEvent::Toggle);
    card.advance(CardEvent::Measured {
        height: 300.0,
        now: 0.0,
    });
    assert_eq!(card.advance(CardEvent::Frame { now: 200.0 }), Advance::Updated);

    assert_eq!(card.advance(CardEvent::Toggle), Advance::Ignored);
    assert_eq!(card.state(), CardState::Expanding);

    // the in-flight animation still completes normally
    assert_eq!(
        card.advance(CardEvent::Frame { now: 500.0 }),
        Advance::Settled(CardState::Expanded)
    );
}

#[test]
fn test_toggle_ignored_while_collapsing() {
    let mut card = make_card();
    let t = open(&mut card, 0.0, 120.0);
    card.advance(CardEvent::Toggle);
    assert_eq!(card.advance(CardEvent::Toggle), Advance::Ignored);
    assert_eq!(card.state(), CardState::Collapsing);
    close_after_started(&mut card, t, 120.0);
}

fn close_after_started(card: &mut CardController, now: f64, height: f64) {
    card.advance(CardEvent::Measured { height, now });
    let (result, _) = run_frames(card, now);
    assert_eq!(result, Advance::Settled(CardState::Collapsed));
}

// ─────────────────────────────────────────────────────────────────────────────
// Lazy series content
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_series_built_once_across_cycles() {
    let mut card = make_card();

    let t = open(&mut card, 0.0, 200.0);
    let first_ptr = card.series().map(|rows| rows.as_ptr());
    let t = close(&mut card, t, 200.0);
    open(&mut card, t, 200.0);

    assert_eq!(card.build_count(), 1);
    assert_eq!(card.series().map(|rows| rows.as_ptr()), first_ptr);
    assert_eq!(card.series().map(<[_]>::len), Some(2));
}

#[test]
fn test_series_rows_have_stagger_and_links() {
    let mut card = make_card();
    card.advance(CardEvent::Toggle);
    let rows = card.series().unwrap();
    assert_eq!(rows[0].view().name, "Starlight");
    assert_eq!(rows[0].view().stagger_ms, 0);
    assert_eq!(rows[1].view().stagger_ms, 100);
    assert_eq!(rows[0].view().variants.len(), 2);
    assert_eq!(rows[0].view().variants[1].href, "https://example.com/b");
}

#[test]
fn test_series_rows_toggle_independently() {
    let mut card = make_card();
    open(&mut card, 0.0, 200.0);

    assert!(card.toggle_series(0, 48.0));
    let rows = card.series().unwrap();
    assert!(rows[0].is_open());
    assert!(!rows[1].is_open());
    assert_eq!(rows[0].height(), 48.0);

    assert!(!card.toggle_series(5, 10.0));
}

#[test]
fn test_series_toggle_before_build_is_rejected() {
    let mut card = make_card();
    assert!(!card.toggle_series(0, 48.0));
}

// ─────────────────────────────────────────────────────────────────────────────
// Region styling
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_expand_region_progression() {
    let mut card = make_card();
    card.advance(CardEvent::Toggle);

    let region = card.region();
    assert!(region.displayed);
    assert!(region.clipped);
    assert_eq!(region.height, RegionHeight::Px(0.0));
    assert!(card.needs_measure());
    assert!(card.is_open());

    card.advance(CardEvent::Measured {
        height: 400.0,
        now: 1_000.0,
    });
    assert!(!card.needs_measure());
    card.advance(CardEvent::Frame { now: 1_250.0 });
    match card.region().height {
        RegionHeight::Px(h) => assert!((h - 200.0).abs() < 1e-9),
        other => panic!("unexpected height {other:?}"),
    }

    card.advance(CardEvent::Frame { now: 1_500.0 });
    let region = card.region();
    assert_eq!(card.state(), CardState::Expanded);
    assert_eq!(region.height, RegionHeight::Auto);
    assert!(!region.clipped);
    assert!(region.show);
}

#[test]
fn test_collapse_hides_region() {
    let mut card = make_card();
    let t = open(&mut card, 0.0, 150.0);
    card.advance(CardEvent::Toggle);
    assert!(!card.is_open());
    card.advance(CardEvent::Measured {
        height: 150.0,
        now: t,
    });
    assert_eq!(card.region().height, RegionHeight::Px(150.0));
    assert!(!card.region().show);

    let (_, _) = run_frames(&mut card, t);
    let region = card.region();
    assert!(!region.displayed);
    assert_eq!(region.height, RegionHeight::Unset);
}

#[test]
fn test_frames_without_measure_are_ignored() {
    let mut card = make_card();
    assert_eq!(card.advance(CardEvent::Frame { now: 10.0 }), Advance::Ignored);
    card.advance(CardEvent::Toggle);
    assert_eq!(card.advance(CardEvent::Frame { now: 10.0 }), Advance::Ignored);
    assert_eq!(card.state(), CardState::Expanding);
}

#[test]
fn test_second_measure_ignored() {
    let mut card = make_card();
    card.advance(CardEvent::Toggle);
    card.advance(CardEvent::Measured {
        height: 100.0,
        now: 0.0,
    });
    assert_eq!(
        card.advance(CardEvent::Measured {
            height: 999.0,
            now: 10.0
        }),
        Advance::Ignored
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Keyboard parity
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_activation_keys() {
    assert_eq!(Activation::from_key("Enter"), Some(Activation::Keyboard));
    assert_eq!(Activation::from_key(" "), Some(Activation::Keyboard));
    assert_eq!(Activation::from_key("Escape"), None);
    assert_eq!(Activation::from_key("k"), None);
}

#[test]
fn test_keyboard_and_pointer_same_transition() {
    let mut by_pointer = make_card();
    let mut by_key = make_card();
    let key = Activation::from_key(" ").unwrap();

    let pointer_result = by_pointer.advance(Activation::Pointer.into());
    let key_result = by_key.advance(key.into());
    assert_eq!(pointer_result, Advance::Started(CardState::Expanding));
    assert_eq!(pointer_result, key_result);

    // the pair stays in lockstep through the rest of the cycle
    for card in [&mut by_pointer, &mut by_key] {
        card.advance(CardEvent::Measured {
            height: 80.0,
            now: 0.0,
        });
        card.advance(CardEvent::Frame { now: 600.0 });
        assert_eq!(
            card.advance(Activation::Keyboard.into()),
            Advance::Started(CardState::Collapsing)
        );
    }
    assert_eq!(by_pointer.state(), by_key.state());
    assert_eq!(by_pointer.region(), by_key.region());
}

// ─────────────────────────────────────────────────────────────────────────────
// Chevron
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_chevron_follows_open_flag_on_next_frame() {
    let mut card = make_card();
    card.advance(CardEvent::Toggle);
    assert!(card.is_open());
    assert!(!card.chevron_active());

    card.advance(CardEvent::Measured {
        height: 100.0,
        now: 0.0,
    });
    card.advance(CardEvent::Frame { now: 16.0 });
    assert!(card.chevron_active());

    card.advance(CardEvent::Frame { now: 600.0 });
    card.advance(CardEvent::Toggle);
    assert!(!card.is_open());
    assert!(card.chevron_active());

    card.advance(CardEvent::Frame { now: 616.0 });
    assert!(!card.chevron_active());
}
