//! Adapter utilities for the `recycler` crate.
//!
//! The `recycler` crate reconciles views whenever it is told the scroll position changed. This
//! crate provides small, framework-neutral helpers commonly needed on top of it:
//!
//! - Coalescing scroll events so reconciliation runs at most once per frame
//! - Tween-based animated "scroll to index" (optional; adapter-driven)
//!
//! This crate is intentionally framework-agnostic (no bindings to any UI toolkit).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

mod controller;
mod tween;


pub use controller::Controller;
pub use tween::{Easing, Tween};
