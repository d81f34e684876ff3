// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=wallcraft_carousel --heading-base-level=0

//! WallCraft Carousel: headless view-state for a panel carousel.
//!
//! This crate owns the _bookkeeping_ behind a horizontally scrolling carousel
//! of panels: which panels exist, which one is selected, which ones pass the
//! current filter, where the content is scrolled to, and how each card should
//! be weighted visually based on its distance from the viewport midpoint. It
//! does **not** render anything, fetch images, or animate. Host frameworks are
//! responsible for:
//!
//! - Reporting the viewport width on every layout pass.
//! - Feeding pointer positions into a [`CarouselGesture`] and applying the
//!   resulting scroll deltas, taps, and long presses.
//! - Drawing the [`DisplayItem`]s returned by [`CarouselState::display_items`].
//!
//! The core pieces are:
//!
//! - [`CarouselState`]: ordered panels, selection, filter text, scroll offset,
//!   and a revision counter for cheap change detection.
//! - [`circularize`]: repeats the visible panels three times so a plain
//!   scroller gives the impression of endless wraparound.
//! - [`positional_weight`]: linear opacity/scale falloff from the viewport
//!   midpoint, clamped to a floor.
//! - [`CarouselState::scroll_offset_for_center`]: the offset that puts a panel
//!   on the viewport midpoint.
//! - [`hit_test`]: maps a pointer position back to a card.
//!
//! ## Minimal example
//!
//! ```rust
//! use wallcraft_carousel::{CarouselLayout, CarouselState};
//!
//! let mut carousel = CarouselState::new();
//! let first = carousel.add_panel("Panel 1").id;
//! carousel.add_panel("Panel 2");
//! carousel.add_panel("Panel 11");
//!
//! carousel.set_filter("Panel 1");
//! let titles: Vec<_> = carousel
//!     .visible_panels()
//!     .into_iter()
//!     .map(|p| p.title.as_str())
//!     .collect();
//! assert_eq!(titles, ["Panel 1", "Panel 11"]);
//!
//! // Center the first panel in an 800 px viewport.
//! let layout = CarouselLayout::default();
//! assert!(carousel.center_on(first, &layout, 800.0));
//!
//! let items = carousel.display_items(&layout, 800.0);
//! assert_eq!(items.len(), 6);
//! assert_eq!(items[0].screen_x, 400.0);
//! assert_eq!(items[0].opacity, 1.0);
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`Panel`], [`PanelId`], and
//!   [`CarouselLayout`].
//! - `tracing`: emit `trace!` events from every mutation.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

macro_rules! trace_event {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)+);
    };
}
pub(crate) use trace_event;

mod error;
mod gesture;
mod layout;
mod panel;
mod state;

pub use error::DuplicatePanelId;
pub use gesture::{CarouselGesture, GestureOutcome, LONG_PRESS_MS, TAP_SLOP};
pub use layout::{
    CarouselLayout, DisplayItem, MIN_OPACITY, MIN_SCALE, OPACITY_FALLOFF, PositionalWeight,
    WRAP_COPIES, center_offset, circularize, hit_test, layout_items, positional_weight,
};
pub use panel::{Panel, PanelId};
pub use state::CarouselState;
