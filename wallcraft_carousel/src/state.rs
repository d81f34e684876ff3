// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The mutable carousel record: panels, selection, filter, and scroll offset.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::error::DuplicatePanelId;
use crate::layout::{CarouselLayout, DisplayItem, center_offset, layout_items};
use crate::panel::{Panel, PanelId};

/// View-state of a panel carousel.
///
/// `CarouselState` is a flat record with no modes. It owns the ordered panel
/// list and tracks:
/// - An optional selected panel, always one that is still present.
/// - A free-text filter that narrows [`visible_panels`](Self::visible_panels)
///   without touching the stored list.
/// - The horizontal scroll offset of the carousel content.
/// - A **revision** counter bumped once per mutation that changes any of the
///   above. No-op calls leave it unchanged.
///
/// Operations on unknown ids are silently ignored.
#[derive(Clone, Debug)]
pub struct CarouselState {
    panels: Vec<Panel>,
    selected: Option<PanelId>,
    filter: String,
    scroll_offset: f64,
    /// Next sequential id; `None` once the sequence has reached `u64::MAX`.
    next_id: Option<u64>,
    revision: u64,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::new()
    }
}

impl CarouselState {
    /// Creates an empty carousel.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            panels: Vec::new(),
            selected: None,
            filter: String::new(),
            scroll_offset: 0.0,
            next_id: Some(0),
            revision: 0,
        }
    }

    /// Creates a carousel seeded with existing panels, keeping their order.
    ///
    /// Ids allocated by [`add_panel`](Self::add_panel) continue after the
    /// largest seeded id. Seeding `PanelId(u64::MAX)` is allowed; allocation
    /// then falls back to the lowest free id.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicatePanelId`] if two panels share an id.
    pub fn with_panels(
        panels: impl IntoIterator<Item = Panel>,
    ) -> Result<Self, DuplicatePanelId> {
        let panels: Vec<Panel> = panels.into_iter().collect();
        let mut seen = HashSet::with_capacity(panels.len());
        for (index, panel) in panels.iter().enumerate() {
            if !seen.insert(panel.id) {
                return Err(DuplicatePanelId {
                    id: panel.id,
                    index,
                });
            }
        }
        let next_id = match panels.iter().map(|panel| panel.id.get()).max() {
            Some(max) => max.checked_add(1),
            None => Some(0),
        };
        Ok(Self {
            panels,
            next_id,
            ..Self::new()
        })
    }

    /// All panels in insertion order, ignoring the filter.
    #[must_use]
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Returns the panel with `id`, if present.
    #[must_use]
    pub fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.panels.iter().find(|panel| panel.id == id)
    }

    /// Position of `id` in the unfiltered panel list.
    #[must_use]
    pub fn index_of(&self, id: PanelId) -> Option<usize> {
        self.panels.iter().position(|panel| panel.id == id)
    }

    /// The selected panel id, if any.
    #[must_use]
    pub fn selected(&self) -> Option<PanelId> {
        self.selected
    }

    /// The selected panel, if any.
    #[must_use]
    pub fn selected_panel(&self) -> Option<&Panel> {
        self.selected.and_then(|id| self.panel(id))
    }

    /// Current filter text.
    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Current horizontal scroll offset of the carousel content.
    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Returns the current revision counter.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Appends a new panel with an empty detail and returns it.
    ///
    /// Ids are sequential and not reused after removal, until the sequence
    /// reaches `u64::MAX`; after that the lowest id not in use is taken.
    pub fn add_panel(&mut self, title: impl Into<String>) -> &Panel {
        let id = match self.next_id {
            Some(next) => {
                self.next_id = next.checked_add(1);
                PanelId(next)
            }
            None => self.lowest_free_id(),
        };
        let index = self.panels.len();
        self.panels.push(Panel::new(id, title));
        self.bump_revision();
        crate::trace_event!(%id, "panel added");
        &self.panels[index]
    }

    /// Removes the panel with `id`, clearing the selection if it pointed at it.
    ///
    /// Returns the removed panel; unknown ids are a no-op.
    pub fn remove_panel(&mut self, id: PanelId) -> Option<Panel> {
        let index = self.index_of(id)?;
        let removed = self.panels.remove(index);
        if self.selected == Some(id) {
            self.selected = None;
        }
        self.bump_revision();
        crate::trace_event!(%id, "panel removed");
        Some(removed)
    }

    /// Replaces the filter text.
    pub fn set_filter(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.filter == text {
            return;
        }
        self.filter = text;
        self.bump_revision();
        crate::trace_event!(filter = %self.filter, "filter changed");
    }

    /// Panels whose title contains the filter text, in stored order.
    ///
    /// Matching is a case-sensitive substring test; an empty filter returns
    /// every panel.
    #[must_use]
    pub fn visible_panels(&self) -> Vec<&Panel> {
        self.panels
            .iter()
            .filter(|panel| panel.matches(&self.filter))
            .collect()
    }

    /// Selects `id` if such a panel exists.
    ///
    /// Returns `true` if the selection changed.
    pub fn select(&mut self, id: PanelId) -> bool {
        if self.selected == Some(id) || self.index_of(id).is_none() {
            return false;
        }
        self.selected = Some(id);
        self.bump_revision();
        crate::trace_event!(%id, "panel selected");
        true
    }

    /// Clears the selection.
    ///
    /// Returns `true` if something was selected.
    pub fn clear_selection(&mut self) -> bool {
        if self.selected.take().is_none() {
            return false;
        }
        self.bump_revision();
        crate::trace_event!("selection cleared");
        true
    }

    /// Attaches a host-resolved detail payload to `id`.
    ///
    /// Returns `false` if no such panel exists.
    pub fn set_detail(&mut self, id: PanelId, detail: impl Into<String>) -> bool {
        let detail = detail.into();
        let Some(panel) = self.panels.iter_mut().find(|panel| panel.id == id) else {
            return false;
        };
        if panel.detail != detail {
            panel.detail = detail;
            self.bump_revision();
            crate::trace_event!(%id, "panel detail changed");
        }
        true
    }

    /// Sets the absolute scroll offset. Non-finite values are ignored.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        if !offset.is_finite() || offset == self.scroll_offset {
            return;
        }
        self.scroll_offset = offset;
        self.bump_revision();
    }

    /// Moves the content by `dx`, as reported by a drag gesture.
    pub fn scroll_by(&mut self, dx: f64) {
        self.set_scroll_offset(self.scroll_offset + dx);
    }

    /// Offset that centers `id` in a viewport of `viewport_width`.
    ///
    /// Positions are taken from the unfiltered panel list. Returns `None` for
    /// unknown ids.
    #[must_use]
    pub fn scroll_offset_for_center(
        &self,
        id: PanelId,
        layout: &CarouselLayout,
        viewport_width: f64,
    ) -> Option<f64> {
        self.index_of(id)
            .map(|index| center_offset(index, layout, viewport_width))
    }

    /// Scrolls so that `id` sits on the viewport midpoint.
    ///
    /// Returns `false`, leaving the offset untouched, for unknown ids and for
    /// geometry that yields a non-finite offset.
    pub fn center_on(
        &mut self,
        id: PanelId,
        layout: &CarouselLayout,
        viewport_width: f64,
    ) -> bool {
        match self.scroll_offset_for_center(id, layout, viewport_width) {
            Some(offset) if offset.is_finite() => {
                self.set_scroll_offset(offset);
                true
            }
            _ => false,
        }
    }

    /// Positions and weights the tripled sequence of visible panels.
    #[must_use]
    pub fn display_items(
        &self,
        layout: &CarouselLayout,
        viewport_width: f64,
    ) -> Vec<DisplayItem<'_>> {
        layout_items(
            &self.visible_panels(),
            layout,
            self.scroll_offset,
            viewport_width,
        )
    }

    fn lowest_free_id(&self) -> PanelId {
        let mut used: Vec<u64> = self.panels.iter().map(|panel| panel.id.get()).collect();
        used.sort_unstable();
        // Fewer panels than ids, so a gap always exists.
        let mut candidate = 0_u64;
        for id in used {
            if id != candidate {
                break;
            }
            candidate = candidate.wrapping_add(1);
        }
        PanelId(candidate)
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_panels_rejects_duplicates() {
        let err = CarouselState::with_panels([
            Panel::new(PanelId(1), "a"),
            Panel::new(PanelId(2), "b"),
            Panel::new(PanelId(1), "c"),
        ])
        .unwrap_err();
        assert_eq!(err.id, PanelId(1));
        assert_eq!(err.index, 2);
    }

    #[test]
    fn with_panels_continues_id_allocation() {
        let mut state = CarouselState::with_panels([
            Panel::new(PanelId(4), "a"),
            Panel::new(PanelId(2), "b"),
        ])
        .unwrap();
        assert_eq!(state.revision(), 0);
        assert_eq!(state.add_panel("c").id, PanelId(5));
    }

    #[test]
    fn with_panels_accepts_largest_id() {
        let mut state = CarouselState::with_panels([
            Panel::new(PanelId(u64::MAX - 1), "a"),
            Panel::new(PanelId(1), "b"),
        ])
        .unwrap();
        assert_eq!(state.add_panel("c").id, PanelId(u64::MAX));
        // Sequence exhausted: lowest free ids are handed out instead.
        assert_eq!(state.add_panel("d").id, PanelId(0));
        assert_eq!(state.add_panel("e").id, PanelId(2));

        let mut ids: Vec<PanelId> = state.panels().iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn center_on_rejects_degenerate_viewport() {
        let mut state = CarouselState::new();
        let id = state.add_panel("a").id;
        let layout = CarouselLayout::default();
        let rev = state.revision();

        assert!(!state.center_on(id, &layout, f64::NAN));
        assert!(!state.center_on(id, &layout, f64::INFINITY));
        assert_eq!(state.scroll_offset(), 0.0);
        assert_eq!(state.revision(), rev);
    }

    #[test]
    fn scroll_ignores_non_finite_offsets() {
        let mut state = CarouselState::new();
        state.scroll_by(12.0);
        state.scroll_by(f64::NAN);
        state.set_scroll_offset(f64::INFINITY);
        assert_eq!(state.scroll_offset(), 12.0);
        assert_eq!(state.revision(), 1);
    }

    #[test]
    fn set_detail_reports_unknown_ids() {
        let mut state = CarouselState::new();
        let id = state.add_panel("a").id;
        assert!(state.set_detail(id, "https://picsum.photos/200/300"));
        assert_eq!(state.panel(id).unwrap().detail, "https://picsum.photos/200/300");
        assert!(!state.set_detail(PanelId(99), "x"));
    }
}
