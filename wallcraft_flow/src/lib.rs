// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=wallcraft_flow --heading-base-level=0

//! WallCraft Flow: the wall view's mode cycle and settings-form state.
//!
//! - [`FlowState`]: a three-valued mode advanced in fixed round-robin order
//!   (`One → Two → Three → One`). It has no terminal state.
//! - [`WallImage`]: the wall artwork a flow state (or the settings form)
//!   picks. The crate only names the asset; loading it is up to the host.
//! - [`SettingsState`]: whether the settings form is presented and which
//!   image it has selected.
//!
//! ## Minimal example
//!
//! ```rust
//! use wallcraft_flow::{FlowState, WallImage};
//!
//! let mut flow = FlowState::default();
//! assert_eq!(flow, FlowState::One);
//!
//! flow.advance();
//! assert_eq!(flow.wall_image(), WallImage::Wally);
//!
//! flow.advance();
//! flow.advance();
//! assert_eq!(flow, FlowState::One);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod settings;

pub use settings::SettingsState;

use core::fmt;

/// Three-valued mode selecting what the wall view displays.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FlowState {
    /// Initial state.
    #[default]
    One,
    /// Second state.
    Two,
    /// Third state; advancing wraps back to [`FlowState::One`].
    Three,
}

impl FlowState {
    /// Every state, in cycle order. Handy for segmented pickers.
    pub const ALL: [Self; 3] = [Self::One, Self::Two, Self::Three];

    /// The state that follows `self` in the cycle.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::Three,
            Self::Three => Self::One,
        }
    }

    /// Moves to the next state and returns it.
    pub fn advance(&mut self) -> Self {
        *self = self.next();
        *self
    }

    /// Returns to [`FlowState::One`].
    pub fn reset(&mut self) {
        *self = Self::One;
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::One => "One",
            Self::Two => "Two",
            Self::Three => "Three",
        }
    }

    /// The wall image shown while in this state.
    #[must_use]
    pub const fn wall_image(self) -> WallImage {
        match self {
            Self::One | Self::Three => WallImage::Panel,
            Self::Two => WallImage::Wally,
        }
    }
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Wall artwork offered by the app.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WallImage {
    /// The default panel texture.
    #[default]
    Panel,
    /// The alternate "wally" texture.
    Wally,
}

impl WallImage {
    /// Every image, in picker order.
    pub const ALL: [Self; 2] = [Self::Panel, Self::Wally];

    /// Asset name the host loads the texture from.
    #[must_use]
    pub const fn asset_name(self) -> &'static str {
        match self {
            Self::Panel => "panel.png",
            Self::Wally => "wally.png",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Panel => "Panel",
            Self::Wally => "Wally",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_advances_return_to_start() {
        let mut flow = FlowState::default();
        assert_eq!(flow.advance(), FlowState::Two);
        assert_eq!(flow.advance(), FlowState::Three);
        assert_eq!(flow.advance(), FlowState::One);
    }

    #[test]
    fn reset_from_any_state() {
        for state in FlowState::ALL {
            let mut flow = state;
            flow.reset();
            assert_eq!(flow, FlowState::One);
        }
    }

    #[test]
    fn next_matches_all_ordering() {
        for (i, state) in FlowState::ALL.iter().enumerate() {
            assert_eq!(state.next(), FlowState::ALL[(i + 1) % 3]);
        }
    }

    #[test]
    fn wall_images_per_state() {
        assert_eq!(FlowState::One.wall_image().asset_name(), "panel.png");
        assert_eq!(FlowState::Two.wall_image().asset_name(), "wally.png");
        assert_eq!(FlowState::Three.wall_image().asset_name(), "panel.png");
    }

    #[test]
    fn labels() {
        assert_eq!(FlowState::Three.label(), "Three");
        assert_eq!(WallImage::Wally.label(), "Wally");
    }
}
