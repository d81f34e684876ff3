// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=wallcraft_session --heading-base-level=0

//! WallCraft Session: the consolidated view-model of the WallCraft app.
//!
//! [`Session`] owns every piece of UI state the app's views share:
//!
//! - the panel carousel ([`wallcraft_carousel::CarouselState`]),
//! - the wall view's flow state ([`wallcraft_flow::FlowState`]),
//! - the settings form ([`wallcraft_flow::SettingsState`]),
//! - which auxiliary views (immersive wall space, panel detail) are open,
//! - and the pointer gesture in flight over the carousel.
//!
//! There is no ambient or global instance. Hosts create a `Session`, pass it
//! to each view explicitly, and observe it through [`Session::subscribe`].
//! Callbacks run synchronously, after the change is applied.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use wallcraft_session::{Session, SessionEvent};
//!
//! let mut session = Session::default();
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//! session.subscribe(move |event| sink.borrow_mut().push(event.clone()));
//!
//! let id = session.add_panel("Panel 1");
//! session.open_detail(id);
//! session.advance_flow();
//!
//! assert_eq!(session.detail_panel().map(|p| p.id), Some(id));
//! assert_eq!(seen.borrow().len(), 4);
//! assert_eq!(seen.borrow()[0], SessionEvent::PanelAdded(id));
//! ```
//!
//! State transitions are logged through `tracing`; install a subscriber in the
//! host to see them.

mod config;
mod event;
mod session;

pub use config::{DEFAULT_VIEWPORT_WIDTH, SessionConfig};
pub use event::{SessionEvent, Subscriber, SubscriptionId};
pub use session::Session;
