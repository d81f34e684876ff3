// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer gesture tracking for the carousel: drag-to-scroll, tap, and long press.
//!
//! ## Usage
//!
//! 1) Call [`CarouselGesture::press`] with the pointer position and a timestamp.
//! 2) On each move, call [`CarouselGesture::move_to`]; once the pointer has left
//!    the tap slop it returns the horizontal delta to feed into
//!    [`CarouselState::scroll_by`](crate::CarouselState::scroll_by).
//! 3) Call [`CarouselGesture::release`] to classify the gesture.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use wallcraft_carousel::{CarouselGesture, GestureOutcome};
//!
//! let mut gesture = CarouselGesture::default();
//!
//! gesture.press(Point::new(100.0, 50.0), 0);
//! // Still within the slop: no scrolling yet.
//! assert_eq!(gesture.move_to(Point::new(104.0, 50.0)), None);
//! // Past the slop: the full horizontal travel is reported once.
//! assert_eq!(gesture.move_to(Point::new(130.0, 50.0)), Some(30.0));
//!
//! let outcome = gesture.release(Point::new(130.0, 50.0), 120);
//! assert!(matches!(outcome, GestureOutcome::Drag { .. }));
//! ```

use kurbo::{Point, Vec2};

/// Movement, in pixels, below which a press still counts as a tap.
pub const TAP_SLOP: f64 = 10.0;

/// Press duration, in milliseconds, from which a still press is a long press.
pub const LONG_PRESS_MS: u64 = 500;

/// How a press/release pair was interpreted.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GestureOutcome {
    /// Short press that stayed within the slop.
    Tap(Point),
    /// Press held for at least [`LONG_PRESS_MS`] within the slop.
    LongPress(Point),
    /// The pointer left the slop; `total` is the offset from the press point.
    Drag {
        /// Offset between press and release positions.
        total: Vec2,
    },
    /// Release without a matching press.
    None,
}

#[derive(Copy, Clone, Debug)]
struct Press {
    start_pos: Point,
    last_pos: Point,
    start_ms: u64,
    dragging: bool,
}

/// Tracks one pointer interaction over the carousel.
#[derive(Clone, Debug, Default)]
pub struct CarouselGesture {
    press: Option<Press>,
}

impl CarouselGesture {
    /// Starts tracking a press at `pos`. Any interaction in flight is dropped.
    pub fn press(&mut self, pos: Point, time_ms: u64) {
        self.press = Some(Press {
            start_pos: pos,
            last_pos: pos,
            start_ms: time_ms,
            dragging: false,
        });
    }

    /// Updates the pointer position.
    ///
    /// Returns the horizontal scroll delta once the press has become a drag.
    /// The first delta covers everything travelled since the press.
    pub fn move_to(&mut self, pos: Point) -> Option<f64> {
        let press = self.press.as_mut()?;
        if !press.dragging {
            if (pos - press.start_pos).hypot() <= TAP_SLOP {
                return None;
            }
            press.dragging = true;
        }
        let delta = pos.x - press.last_pos.x;
        press.last_pos = pos;
        Some(delta)
    }

    /// Ends the interaction and classifies it.
    pub fn release(&mut self, pos: Point, time_ms: u64) -> GestureOutcome {
        let Some(press) = self.press.take() else {
            return GestureOutcome::None;
        };
        let total = pos - press.start_pos;
        if press.dragging || total.hypot() > TAP_SLOP {
            return GestureOutcome::Drag { total };
        }
        if time_ms.saturating_sub(press.start_ms) >= LONG_PRESS_MS {
            GestureOutcome::LongPress(press.start_pos)
        } else {
            GestureOutcome::Tap(press.start_pos)
        }
    }

    /// Drops the interaction in flight without classifying it.
    pub fn cancel(&mut self) {
        self.press = None;
    }

    /// Returns `true` while a press is being tracked.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    /// Returns `true` once the press has turned into a drag.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.press.is_some_and(|press| press.dragging)
    }
}
