// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `wallcraft_carousel` crate.
//!
//! These exercise `CarouselState` end to end: id allocation, selection
//! bookkeeping, filtering, and the derived display sequence.

use wallcraft_carousel::{
    CarouselLayout, CarouselState, MIN_OPACITY, MIN_SCALE, PanelId, hit_test, positional_weight,
};

fn titles(state: &CarouselState) -> Vec<&str> {
    state
        .visible_panels()
        .into_iter()
        .map(|panel| panel.title.as_str())
        .collect()
}

#[test]
fn empty_carousel_basics() {
    let state = CarouselState::new();
    assert!(state.panels().is_empty());
    assert_eq!(state.selected(), None);
    assert_eq!(state.filter(), "");
    assert_eq!(state.scroll_offset(), 0.0);
    assert_eq!(state.revision(), 0);
    assert!(
        state
            .display_items(&CarouselLayout::default(), 800.0)
            .is_empty()
    );
}

#[test]
fn add_appends_with_empty_detail() {
    let mut state = CarouselState::new();
    let panel = state.add_panel("").clone();
    assert_eq!(panel.title, "");
    assert_eq!(panel.detail, "");
    state.add_panel("second");

    assert_eq!(state.panels()[0].id, panel.id);
    assert_eq!(state.panels()[1].title, "second");
    assert_eq!(state.revision(), 2);
}

#[test]
fn ids_stay_unique_across_adds_and_removes() {
    let mut state = CarouselState::new();
    let mut issued = Vec::new();
    for round in 0..5 {
        let a = state.add_panel(format!("a{round}")).id;
        let b = state.add_panel(format!("b{round}")).id;
        issued.push(a);
        issued.push(b);
        state.remove_panel(a);

        let mut ids: Vec<PanelId> = state.panels().iter().map(|p| p.id).collect();
        let len = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), len, "duplicate id after round {round}");
    }

    // Removed ids are never handed out again.
    let mut all = issued.clone();
    all.sort();
    all.dedup();
    assert_eq!(all.len(), issued.len());
}

#[test]
fn remove_preserves_order_and_ignores_unknown_ids() {
    let mut state = CarouselState::new();
    let a = state.add_panel("A").id;
    let b = state.add_panel("B").id;
    state.add_panel("C");

    assert_eq!(state.remove_panel(b).map(|p| p.title), Some("B".into()));
    assert_eq!(titles(&state), ["A", "C"]);

    let rev = state.revision();
    assert!(state.remove_panel(b).is_none());
    assert!(state.remove_panel(PanelId(1000)).is_none());
    assert_eq!(state.revision(), rev);
    assert!(state.panel(a).is_some());
}

#[test]
fn removing_selected_panel_clears_selection() {
    let mut state = CarouselState::new();
    let a = state.add_panel("A").id;
    let b = state.add_panel("B").id;

    assert!(state.select(a));
    state.remove_panel(b);
    assert_eq!(state.selected(), Some(a));

    state.remove_panel(a);
    assert_eq!(state.selected(), None);
    assert!(state.selected_panel().is_none());
}

#[test]
fn select_unknown_id_is_silent() {
    let mut state = CarouselState::new();
    let a = state.add_panel("A").id;
    state.select(a);
    let rev = state.revision();

    assert!(!state.select(PanelId(42)));
    assert_eq!(state.selected(), Some(a));
    // Re-selecting the same panel is a no-op as well.
    assert!(!state.select(a));
    assert_eq!(state.revision(), rev);

    assert!(state.clear_selection());
    assert!(!state.clear_selection());
    assert_eq!(state.selected(), None);
}

#[test]
fn empty_filter_returns_all_panels_in_order() {
    let mut state = CarouselState::new();
    for title in ["Panel 3", "Panel 1", "Panel 2"] {
        state.add_panel(title);
    }
    assert_eq!(titles(&state), ["Panel 3", "Panel 1", "Panel 2"]);
}

#[test]
fn filter_is_case_sensitive_substring() {
    let mut state = CarouselState::new();
    for title in ["Panel 1", "Panel 2", "Panel 11"] {
        state.add_panel(title);
    }

    state.set_filter("Panel 1");
    assert_eq!(titles(&state), ["Panel 1", "Panel 11"]);
    // Filtering never touches the stored list.
    assert_eq!(state.panels().len(), 3);

    state.set_filter("panel");
    assert!(titles(&state).is_empty());

    let rev = state.revision();
    state.set_filter("panel");
    assert_eq!(state.revision(), rev);
}

#[test]
fn display_sequence_is_tripled_visible_list() {
    let mut state = CarouselState::new();
    for title in ["Panel 1", "Panel 2", "Panel 11"] {
        state.add_panel(title);
    }
    let layout = CarouselLayout::default();

    assert_eq!(state.display_items(&layout, 800.0).len(), 9);

    state.set_filter("Panel 1");
    let items = state.display_items(&layout, 800.0);
    let shown: Vec<&str> = items.iter().map(|i| i.panel.title.as_str()).collect();
    assert_eq!(
        shown,
        ["Panel 1", "Panel 11", "Panel 1", "Panel 11", "Panel 1", "Panel 11"]
    );
    for (slot, item) in items.iter().enumerate() {
        assert_eq!(item.slot, slot);
        assert_eq!(item.z_index, item.screen_x);
    }
}

#[test]
fn centering_puts_panel_on_viewport_midpoint() {
    let mut state = CarouselState::new();
    state.add_panel("A");
    state.add_panel("B");
    let c = state.add_panel("C").id;
    let layout = CarouselLayout::default();

    assert_eq!(
        state.scroll_offset_for_center(c, &layout, 800.0),
        Some(-460.0 + 300.0)
    );
    assert!(state.center_on(c, &layout, 800.0));

    let items = state.display_items(&layout, 800.0);
    let centered = &items[2];
    assert_eq!(centered.panel.id, c);
    assert_eq!(centered.screen_x, 400.0);
    assert_eq!(centered.opacity, 1.0);
    assert_eq!(centered.scale, 1.0);

    // Neighbours one stride away are faded and shrunk.
    let left = &items[1];
    assert!(left.opacity < 1.0 && left.opacity >= MIN_OPACITY);
    assert!(left.scale < 1.0 && left.scale >= MIN_SCALE);
}

#[test]
fn centering_unknown_id_keeps_offset() {
    let mut state = CarouselState::new();
    state.add_panel("A");
    state.scroll_by(-35.0);
    let layout = CarouselLayout::default();

    assert_eq!(
        state.scroll_offset_for_center(PanelId(9), &layout, 800.0),
        None
    );
    assert!(!state.center_on(PanelId(9), &layout, 800.0));
    assert_eq!(state.scroll_offset(), -35.0);
}

#[test]
fn centering_uses_unfiltered_index() {
    let mut state = CarouselState::new();
    state.add_panel("Wally");
    let panel = state.add_panel("Panel").id;
    state.set_filter("Panel");
    let layout = CarouselLayout::default();

    // Index 1 in the stored list even though it is the only visible panel.
    assert_eq!(
        state.scroll_offset_for_center(panel, &layout, 800.0),
        Some(300.0 - 230.0)
    );
}

#[test]
fn hit_test_finds_tapped_card() {
    let mut state = CarouselState::new();
    let a = state.add_panel("A").id;
    let b = state.add_panel("B").id;
    let layout = CarouselLayout::default();
    state.center_on(a, &layout, 800.0);

    let items = state.display_items(&layout, 800.0);
    assert_eq!(hit_test(&items, 400.0, &layout).map(|i| i.panel.id), Some(a));
    assert_eq!(hit_test(&items, 630.0, &layout).map(|i| i.panel.id), Some(b));
    // Gap between cards.
    assert!(hit_test(&items, 515.0, &layout).is_none());
}

#[test]
fn weight_at_center_and_far_edge() {
    let centered = positional_weight(100.0, 200.0);
    assert_eq!((centered.opacity, centered.scale), (1.0, 1.0));

    let far = positional_weight(500.0, 200.0);
    assert_eq!((far.opacity, far.scale), (0.2, 0.7));
}
