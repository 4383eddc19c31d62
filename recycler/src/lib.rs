//! A headless windowing and view-recycling engine for virtualized lists and grids.
//!
//! For frame-driven scroll coalescing and animated centering, see the `recycler-adapter` crate.
//!
//! Only the items inside the viewport (plus a small buffer) ever own a live view. As the
//! viewport moves, the engine:
//! - maps the viewport rectangle to a contiguous window of item indexes via a [`Layout`],
//! - diffs that window against the previous one and touches only the indexes that changed,
//! - recycles views that left the window through a per-template [`ViewPool`].
//!
//! It is UI-agnostic. The host provides:
//! - a view type implementing [`View`] and a [`ViewFactory`] that builds views from templates
//! - a [`DataSource`] with the item count and a `bind` step
//! - viewport size and scroll offset changes
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod active;
mod error;
mod grid;
mod key;
mod layout;
mod options;
mod pool;
mod recycler;
mod source;
mod strip;
mod types;
mod view;


pub use active::ActiveSet;
pub use error::SetupError;
pub use grid::GridLayout;
pub use layout::Layout;
pub use options::RecyclerOptions;
pub use pool::ViewPool;
pub use recycler::Recycler;
pub use source::{DataSource, SliceSource, ViewFor};
pub use strip::StripLayout;
pub use types::{
    Axis, Bounds, Padding, ReconcileStats, Size, TemplateId, Vec2, Window, WindowDiff,
};
pub use view::{View, ViewFactory};
