// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Point;
use tracing::{debug, info};
use wallcraft_carousel::{
    CarouselGesture, CarouselLayout, CarouselState, DisplayItem, DuplicatePanelId,
    GestureOutcome, Panel, PanelId, hit_test,
};
use wallcraft_flow::{FlowState, SettingsState, WallImage};

use crate::config::{DEFAULT_VIEWPORT_WIDTH, SessionConfig};
use crate::event::{SessionEvent, Subscriber, SubscriptionId};

/// The app-wide view-model.
///
/// A `Session` is the single owner of all mutable UI state. It is handed to
/// every view explicitly; views read through the accessors and mutate through
/// the methods below, and learn about changes by [subscribing](Self::subscribe).
///
/// Every mutator that actually changes something emits one or more
/// [`SessionEvent`]s, synchronously and in subscription order. No-op calls emit
/// nothing.
pub struct Session {
    carousel: CarouselState,
    flow: FlowState,
    settings: SettingsState,
    layout: CarouselLayout,
    viewport_width: f64,
    gesture: CarouselGesture,
    immersive_open: bool,
    detail_open: bool,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("carousel", &self.carousel)
            .field("flow", &self.flow)
            .field("settings", &self.settings)
            .field("layout", &self.layout)
            .field("viewport_width", &self.viewport_width)
            .field("immersive_open", &self.immersive_open)
            .field("detail_open", &self.detail_open)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(CarouselLayout::default())
    }
}

impl Session {
    /// Creates an empty session with the given card geometry.
    #[must_use]
    pub fn new(layout: CarouselLayout) -> Self {
        Self::from_parts(CarouselState::new(), layout, DEFAULT_VIEWPORT_WIDTH)
    }

    /// Creates a session from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicatePanelId`] if the configured panels repeat an id.
    ///
    /// A negative or non-finite `viewport_width` is ignored in favor of the
    /// default, as [`set_viewport_width`](Self::set_viewport_width) would.
    pub fn from_config(config: SessionConfig) -> Result<Self, DuplicatePanelId> {
        let carousel = CarouselState::with_panels(config.panels)?;
        let mut session = Self::from_parts(carousel, config.layout, DEFAULT_VIEWPORT_WIDTH);
        session.set_viewport_width(config.viewport_width);
        session.flow = config.flow;
        session.settings = SettingsState::new(config.selected_image);
        info!(
            panels = session.carousel.panels().len(),
            flow = %session.flow,
            "session created from config"
        );
        Ok(session)
    }

    fn from_parts(carousel: CarouselState, layout: CarouselLayout, viewport_width: f64) -> Self {
        Self {
            carousel,
            flow: FlowState::default(),
            settings: SettingsState::default(),
            layout,
            viewport_width,
            gesture: CarouselGesture::default(),
            immersive_open: false,
            detail_open: false,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    // --- subscriptions ---

    /// Registers `callback` to receive every subsequent event.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&SessionEvent) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    fn emit(&mut self, event: SessionEvent) {
        debug!(?event, "session event");
        for (_, callback) in &mut self.subscribers {
            callback(&event);
        }
    }

    // --- read access ---

    /// The carousel state.
    #[must_use]
    pub fn carousel(&self) -> &CarouselState {
        &self.carousel
    }

    /// Current flow state.
    #[must_use]
    pub fn flow(&self) -> FlowState {
        self.flow
    }

    /// Settings-form state.
    #[must_use]
    pub fn settings(&self) -> SettingsState {
        self.settings
    }

    /// Card geometry.
    #[must_use]
    pub fn layout(&self) -> &CarouselLayout {
        &self.layout
    }

    /// Last viewport width reported by the host.
    #[must_use]
    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Returns `true` while the immersive wall space is open.
    #[must_use]
    pub fn is_immersive_open(&self) -> bool {
        self.immersive_open
    }

    /// The panel shown by the detail view, if it is open.
    #[must_use]
    pub fn detail_panel(&self) -> Option<&Panel> {
        if self.detail_open {
            self.carousel.selected_panel()
        } else {
            None
        }
    }

    /// The image the wall view shows for the current flow state.
    #[must_use]
    pub fn wall_image(&self) -> WallImage {
        self.flow.wall_image()
    }

    /// Positions and weights the carousel cards for the current viewport.
    #[must_use]
    pub fn display_items(&self) -> Vec<DisplayItem<'_>> {
        self.carousel.display_items(&self.layout, self.viewport_width)
    }

    // --- carousel ---

    /// Appends a panel and returns its id.
    pub fn add_panel(&mut self, title: impl Into<String>) -> PanelId {
        let id = self.carousel.add_panel(title).id;
        self.emit(SessionEvent::PanelAdded(id));
        id
    }

    /// Removes a panel, closing the detail view if it showed that panel.
    pub fn remove_panel(&mut self, id: PanelId) {
        let was_selected = self.carousel.selected() == Some(id);
        if self.carousel.remove_panel(id).is_none() {
            return;
        }
        self.emit(SessionEvent::PanelRemoved(id));
        if was_selected {
            self.emit(SessionEvent::SelectionChanged(None));
            self.close_detail();
        }
    }

    /// Replaces the filter text.
    pub fn set_filter(&mut self, text: impl Into<String>) {
        let before = self.carousel.revision();
        self.carousel.set_filter(text);
        if self.carousel.revision() != before {
            self.emit(SessionEvent::FilterChanged);
        }
    }

    /// Selects a panel; unknown ids are ignored.
    ///
    /// An open detail view follows the selection.
    pub fn select(&mut self, id: PanelId) {
        if self.carousel.select(id) {
            self.emit(SessionEvent::SelectionChanged(Some(id)));
            if self.detail_open {
                self.emit(SessionEvent::DetailViewChanged(Some(id)));
            }
        }
    }

    /// Clears the selection, closing the detail view.
    pub fn clear_selection(&mut self) {
        if self.carousel.clear_selection() {
            self.emit(SessionEvent::SelectionChanged(None));
            self.close_detail();
        }
    }

    /// Attaches a host-resolved detail payload to a panel.
    pub fn set_detail(&mut self, id: PanelId, detail: impl Into<String>) {
        let before = self.carousel.revision();
        if self.carousel.set_detail(id, detail) && self.carousel.revision() != before {
            self.emit(SessionEvent::DetailChanged(id));
        }
    }

    /// Records the viewport width reported by the latest layout pass.
    ///
    /// Negative and non-finite widths are ignored.
    pub fn set_viewport_width(&mut self, width: f64) {
        if !width.is_finite() || width < 0.0 {
            debug!(width, "ignoring invalid viewport width");
            return;
        }
        self.viewport_width = width;
    }

    /// Scrolls so that `id` sits on the viewport midpoint.
    pub fn center_on(&mut self, id: PanelId) {
        let before = self.carousel.scroll_offset();
        if self.carousel.center_on(id, &self.layout, self.viewport_width)
            && self.carousel.scroll_offset() != before
        {
            self.emit_scrolled();
        }
    }

    fn emit_scrolled(&mut self) {
        let offset = self.carousel.scroll_offset();
        self.emit(SessionEvent::Scrolled { offset });
    }

    // --- flow & settings ---

    /// Advances the flow state one step around the cycle.
    pub fn advance_flow(&mut self) {
        let next = self.flow.advance();
        info!(flow = %next, image = next.wall_image().asset_name(), "flow state changed");
        self.emit(SessionEvent::FlowChanged(next));
    }

    /// Returns the flow state to its initial value.
    pub fn reset_flow(&mut self) {
        self.set_flow(FlowState::One);
    }

    /// Jumps directly to `flow`, as a segmented picker would.
    pub fn set_flow(&mut self, flow: FlowState) {
        if self.flow == flow {
            return;
        }
        self.flow = flow;
        info!(flow = %flow, image = flow.wall_image().asset_name(), "flow state changed");
        self.emit(SessionEvent::FlowChanged(flow));
    }

    /// Shows or hides the settings form.
    pub fn toggle_settings(&mut self) {
        self.settings.toggle();
        self.emit_settings();
    }

    /// Picks the settings-form image.
    pub fn select_image(&mut self, image: WallImage) {
        if self.settings.select_image(image) {
            self.emit_settings();
        }
    }

    fn emit_settings(&mut self) {
        let event = SessionEvent::SettingsChanged {
            presented: self.settings.is_presented(),
            image: self.settings.selected_image(),
        };
        self.emit(event);
    }

    // --- views ---

    /// Opens the immersive wall space.
    pub fn open_immersive(&mut self) {
        if !self.immersive_open {
            self.immersive_open = true;
            self.emit(SessionEvent::ImmersiveChanged(true));
        }
    }

    /// Closes the immersive wall space.
    pub fn close_immersive(&mut self) {
        if self.immersive_open {
            self.immersive_open = false;
            self.emit(SessionEvent::ImmersiveChanged(false));
        }
    }

    /// Selects `id` and opens the detail view on it. Unknown ids are ignored.
    pub fn open_detail(&mut self, id: PanelId) {
        if self.carousel.panel(id).is_none() {
            return;
        }
        let selection_changed = self.carousel.select(id);
        if selection_changed {
            self.emit(SessionEvent::SelectionChanged(Some(id)));
        }
        if !self.detail_open || selection_changed {
            self.detail_open = true;
            self.emit(SessionEvent::DetailViewChanged(Some(id)));
        }
    }

    /// Closes the detail view. The selection is kept.
    pub fn close_detail(&mut self) {
        if self.detail_open {
            self.detail_open = false;
            self.emit(SessionEvent::DetailViewChanged(None));
        }
    }

    // --- pointer input ---

    /// Pointer pressed over the carousel.
    pub fn pointer_down(&mut self, pos: Point, time_ms: u64) {
        self.gesture.press(pos, time_ms);
    }

    /// Pointer moved; drags scroll the carousel.
    pub fn pointer_move(&mut self, pos: Point) {
        let Some(dx) = self.gesture.move_to(pos) else {
            return;
        };
        let before = self.carousel.scroll_offset();
        self.carousel.scroll_by(dx);
        if self.carousel.scroll_offset() != before {
            self.emit_scrolled();
        }
    }

    /// Pointer released. Taps center the card under the pointer, long presses
    /// open it in the detail view.
    pub fn pointer_up(&mut self, pos: Point, time_ms: u64) -> GestureOutcome {
        let outcome = self.gesture.release(pos, time_ms);
        match outcome {
            GestureOutcome::Tap(at) => {
                if let Some(id) = self.panel_at(at.x) {
                    debug!(%id, "tap");
                    self.center_on(id);
                }
            }
            GestureOutcome::LongPress(at) => {
                if let Some(id) = self.panel_at(at.x) {
                    debug!(%id, "long press");
                    self.open_detail(id);
                }
            }
            GestureOutcome::Drag { .. } | GestureOutcome::None => {}
        }
        outcome
    }

    /// Panel whose card covers `x` in viewport coordinates.
    #[must_use]
    pub fn panel_at(&self, x: f64) -> Option<PanelId> {
        let items = self.display_items();
        hit_test(&items, x, &self.layout).map(|item| item.panel.id)
    }
}
