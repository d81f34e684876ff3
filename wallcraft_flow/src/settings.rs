// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::WallImage;

/// State behind the settings form.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsState {
    presented: bool,
    selected_image: WallImage,
}

impl SettingsState {
    /// Creates a hidden form with `image` selected.
    #[must_use]
    pub const fn new(selected_image: WallImage) -> Self {
        Self {
            presented: false,
            selected_image,
        }
    }

    /// Returns `true` while the form is shown.
    #[must_use]
    pub fn is_presented(&self) -> bool {
        self.presented
    }

    /// The image picked in the form.
    #[must_use]
    pub fn selected_image(&self) -> WallImage {
        self.selected_image
    }

    /// Shows the form if hidden, hides it if shown. Returns the new flag.
    pub fn toggle(&mut self) -> bool {
        self.presented = !self.presented;
        self.presented
    }

    /// Picks `image`. Returns `true` if the selection changed.
    pub fn select_image(&mut self, image: WallImage) -> bool {
        if self.selected_image == image {
            return false;
        }
        self.selected_image = image;
        true
    }
}
