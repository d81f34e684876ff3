// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::{Deserialize, Serialize};
use wallcraft_carousel::{CarouselLayout, Panel};
use wallcraft_flow::{FlowState, WallImage};

/// Viewport width assumed until the host reports one.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 800.0;

/// Initial contents of a [`Session`](crate::Session).
///
/// Every field is optional in serialized form:
///
/// ```
/// use wallcraft_session::SessionConfig;
///
/// let config: SessionConfig = serde_json::from_str(r#"{
///     "panels": [{ "id": 0, "title": "Panel 1" }],
///     "flow": "two"
/// }"#).unwrap();
/// assert_eq!(config.panels.len(), 1);
/// assert_eq!(config.viewport_width, 800.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Card geometry.
    pub layout: CarouselLayout,
    /// Viewport width used until the host reports one.
    pub viewport_width: f64,
    /// Panels to seed the carousel with, in display order.
    pub panels: Vec<Panel>,
    /// Initial flow state.
    pub flow: FlowState,
    /// Image initially picked in the settings form.
    pub selected_image: WallImage,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            layout: CarouselLayout::default(),
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            panels: Vec::new(),
            flow: FlowState::default(),
            selected_image: WallImage::default(),
        }
    }
}
