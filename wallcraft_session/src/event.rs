// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use wallcraft_carousel::PanelId;
use wallcraft_flow::{FlowState, WallImage};

/// A change applied to a [`Session`](crate::Session).
///
/// Events are delivered after the change has been applied, so subscribers
/// that hold their own copy of derived data can simply recompute it.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    /// A panel was appended to the carousel.
    PanelAdded(PanelId),
    /// A panel was removed from the carousel.
    PanelRemoved(PanelId),
    /// The selected panel changed.
    SelectionChanged(Option<PanelId>),
    /// The filter text changed; the visible panel list may differ.
    FilterChanged,
    /// The carousel content moved to a new offset.
    Scrolled {
        /// The new scroll offset.
        offset: f64,
    },
    /// A panel's detail payload changed.
    DetailChanged(PanelId),
    /// The wall view's flow state changed.
    FlowChanged(FlowState),
    /// The settings form was shown/hidden or its image changed.
    SettingsChanged {
        /// Whether the form is shown.
        presented: bool,
        /// The image picked in the form.
        image: WallImage,
    },
    /// The immersive wall space was opened or closed.
    ImmersiveChanged(bool),
    /// The detail view was opened on a panel, or closed.
    DetailViewChanged(Option<PanelId>),
}

/// Handle returned by [`Session::subscribe`](crate::Session::subscribe).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

/// Callback invoked for every [`SessionEvent`].
pub type Subscriber = Box<dyn FnMut(&SessionEvent)>;
