// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure layout helpers: wraparound, positional weighting, and centering.
//!
//! All coordinates are horizontal, in the host's logical pixels, and relative
//! to the left edge of the carousel viewport.

use alloc::vec::Vec;

use crate::panel::Panel;

/// Distance from the viewport midpoint at which opacity bottoms out.
pub const OPACITY_FALLOFF: f64 = 200.0;

/// Lowest opacity an off-center item is drawn with.
pub const MIN_OPACITY: f64 = 0.2;

/// Lowest scale an off-center item is drawn with.
pub const MIN_SCALE: f64 = 0.7;

/// Number of times [`circularize`] repeats its input.
pub const WRAP_COPIES: usize = 3;

/// Card geometry along the scroll axis.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselLayout {
    /// Rendered width of one card.
    pub item_width: f64,
    /// Distance between the leading edges of two adjacent cards.
    pub item_stride: f64,
}

impl CarouselLayout {
    /// Creates a layout from a card width and stride.
    #[must_use]
    pub const fn new(item_width: f64, item_stride: f64) -> Self {
        Self {
            item_width,
            item_stride,
        }
    }

    /// Padding that puts a single card in the middle of the viewport.
    #[must_use]
    pub fn leading_inset(&self, viewport_width: f64) -> f64 {
        (viewport_width - self.item_width) / 2.0
    }

    /// Midpoint of the card in `slot`, given the current scroll offset.
    #[must_use]
    pub fn slot_center(&self, slot: usize, scroll_offset: f64) -> f64 {
        scroll_offset + slot as f64 * self.item_stride + self.item_width / 2.0
    }
}

impl Default for CarouselLayout {
    /// 200 px cards on a 230 px stride.
    fn default() -> Self {
        Self::new(200.0, 230.0)
    }
}

/// Opacity and scale of an item derived from its on-screen position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PositionalWeight {
    /// Opacity in `[MIN_OPACITY, 1.0]`.
    pub opacity: f64,
    /// Scale factor in `[MIN_SCALE, 1.0]`.
    pub scale: f64,
}

impl PositionalWeight {
    /// Weight of an item sitting exactly on the viewport midpoint.
    pub const FULL: Self = Self {
        opacity: 1.0,
        scale: 1.0,
    };
}

/// Repeats `items` [`WRAP_COPIES`] times so a plain scroller looks endless.
///
/// The wraparound is approximate: once the user scrolls past the tripled
/// range the host is expected to reset its offset.
///
/// ```
/// use wallcraft_carousel::circularize;
///
/// assert_eq!(circularize(&["A", "B"]), ["A", "B", "A", "B", "A", "B"]);
/// assert!(circularize::<&str>(&[]).is_empty());
/// ```
#[must_use]
pub fn circularize<T: Clone>(items: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(items.len() * WRAP_COPIES);
    for _ in 0..WRAP_COPIES {
        out.extend_from_slice(items);
    }
    out
}

/// Computes the opacity/scale falloff for an item centered at `screen_x`.
///
/// Both values fall off linearly with the distance from the viewport
/// midpoint and are clamped to [`MIN_OPACITY`] and [`MIN_SCALE`]. A
/// zero-width (or otherwise degenerate) viewport yields [`MIN_SCALE`].
#[must_use]
pub fn positional_weight(screen_x: f64, viewport_width: f64) -> PositionalWeight {
    let half = viewport_width / 2.0;
    let distance = (half - screen_x).abs();
    let opacity = (1.0 - distance / OPACITY_FALLOFF).clamp(MIN_OPACITY, 1.0);
    let scale = if half > 0.0 && half.is_finite() {
        (1.0 - distance / half).max(MIN_SCALE)
    } else {
        MIN_SCALE
    };
    PositionalWeight { opacity, scale }
}

/// Scroll offset that puts the card at `index` on the viewport midpoint.
#[must_use]
pub fn center_offset(index: usize, layout: &CarouselLayout, viewport_width: f64) -> f64 {
    -(index as f64 * layout.item_stride) + layout.leading_inset(viewport_width)
}

/// One card of the tripled display sequence, positioned and weighted.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayItem<'a> {
    /// The panel drawn in this slot.
    pub panel: &'a Panel,
    /// Position in the tripled sequence.
    pub slot: usize,
    /// Horizontal midpoint of the card in viewport coordinates.
    pub screen_x: f64,
    /// Opacity from [`positional_weight`].
    pub opacity: f64,
    /// Scale from [`positional_weight`].
    pub scale: f64,
    /// Stacking order; cards further right draw on top.
    pub z_index: f64,
}

/// Positions and weights every panel of the tripled sequence.
#[must_use]
pub fn layout_items<'a>(
    panels: &[&'a Panel],
    layout: &CarouselLayout,
    scroll_offset: f64,
    viewport_width: f64,
) -> Vec<DisplayItem<'a>> {
    circularize(panels)
        .into_iter()
        .enumerate()
        .map(|(slot, panel)| {
            let screen_x = layout.slot_center(slot, scroll_offset);
            let weight = positional_weight(screen_x, viewport_width);
            DisplayItem {
                panel,
                slot,
                screen_x,
                opacity: weight.opacity,
                scale: weight.scale,
                z_index: screen_x,
            }
        })
        .collect()
}

/// Returns the topmost item whose card covers `x`.
///
/// Overlapping cards are resolved by `z_index`, matching how they are drawn.
#[must_use]
pub fn hit_test<'i, 'a>(
    items: &'i [DisplayItem<'a>],
    x: f64,
    layout: &CarouselLayout,
) -> Option<&'i DisplayItem<'a>> {
    let half = layout.item_width / 2.0;
    items
        .iter()
        .filter(|item| x >= item.screen_x - half && x < item.screen_x + half)
        .max_by(|a, b| a.z_index.total_cmp(&b.z_index))
}
