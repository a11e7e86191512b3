//! Component trait system for the TUI
//!
//! App does not know how each panel scrolls or reacts to keys; panels
//! declare those capabilities through traits and App routes input to
//! whichever one has focus.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                     App                      │
//! │  (routes keys, owns the search session)      │
//! └──────────────────────────────────────────────┘
//!                        │
//!              ┌─────────┴─────────┐
//!              ▼                   ▼
//!        ┌──────────┐        ┌──────────┐
//!        │ Results  │        │   Logs   │
//!        │  Panel   │        │  Panel   │
//!        └──────────┘        └──────────┘
//!              Component, Scrollable,
//!              Selectable, Interactive
//! ```
//!
//! - [`Component`] - identity; rendering gets a [`RenderContext`]
//! - [`Scrollable`] - owns a `ScrollState`
//! - [`Selectable`] - one highlighted item within scrollable content
//! - [`Interactive`] - handles keys, reports [`Handled`]

mod component;
mod interactive;
mod scrollable;

pub use component::{Component, ComponentId, RenderContext};
pub use interactive::{Handled, Interactive};
pub use scrollable::{Scrollable, Selectable};
