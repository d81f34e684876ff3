// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panels and their identifiers.

use alloc::string::String;
use core::fmt;

/// Stable identifier of a [`Panel`].
///
/// Ids are allocated sequentially by [`CarouselState`](crate::CarouselState)
/// and are never reused within one state, even after the panel is removed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PanelId(pub u64);

impl PanelId {
    /// Returns the raw counter value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panel-{}", self.0)
    }
}

/// A named, user-manageable carousel entry.
///
/// `detail` holds whatever payload the host resolved for this panel (in the
/// WallCraft app, the image URL shown in the detail window). The carousel
/// stores and returns it but never interprets it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Panel {
    /// Identifier, unique within its carousel.
    pub id: PanelId,
    /// Title shown on the card; this is what filtering matches against.
    pub title: String,
    /// Opaque detail payload.
    #[cfg_attr(feature = "serde", serde(default))]
    pub detail: String,
}

impl Panel {
    /// Creates a panel with an empty detail payload.
    #[must_use]
    pub fn new(id: PanelId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            detail: String::new(),
        }
    }

    /// Returns `true` if the title contains `needle` (case-sensitive).
    ///
    /// An empty needle matches every panel.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        self.title.contains(needle)
    }
}
