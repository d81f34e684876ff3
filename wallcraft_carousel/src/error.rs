// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::panel::PanelId;

/// Error returned when seeding a carousel with two panels sharing an id.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct DuplicatePanelId {
    /// The repeated id.
    pub id: PanelId,
    /// Position of the second occurrence in the seeded list.
    pub index: usize,
}

impl fmt::Debug for DuplicatePanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DuplicatePanelId {{ id: {:?}, index: {} }}",
            self.id, self.index
        )
    }
}

impl fmt::Display for DuplicatePanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "panel id {} appears more than once (again at index {})",
            self.id, self.index
        )
    }
}

impl core::error::Error for DuplicatePanelId {}
