//! Adapter utilities for the `sectionscroll` crate.
//!
//! `sectionscroll` is pure geometry. This crate adds the stateful, framework-neutral parts an
//! adapter needs on top of it:
//!
//! - [`Scrollable`]: owns a layout and scroll state and reacts to viewport, wheel, scrollbar and
//!   gutter-drag events
//! - [`ScrollAnimator`]: eased scroll-to animations with stale-tick protection
//! - [`Throttle`]: timestamp-driven rate limiting for ticks and wheel input
//!
//! Time is always supplied by the caller as `now_ms`; nothing here reads a clock.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod animator;
mod error;
mod scrollable;
mod throttle;


pub use animator::{AnimationFrame, AnimationTicket, ScrollAnimation, ScrollAnimator};
pub use error::{Error, Result};
pub use scrollable::Scrollable;
pub use throttle::Throttle;
