//! A headless engine for virtualized, sectioned lists.
//!
//! For a stateful controller (animated scroll-to, wheel throttling, resize gestures), see the
//! `sectionscroll-adapter` crate.
//!
//! This crate is pure geometry: it turns a flat or sectioned row list into a partitioned layout
//! with precomputed offsets, maps scroll offsets to the partitions that must be mounted, places
//! locking or stacking section headers, and computes gutter resize widths and scrollbar
//! visibility.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - per-row heights (no measurement happens here)
//! - viewport size
//! - scroll, wheel and drag events
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod dimensions;
mod easing;
mod geometry;
mod headers;
mod layout;
mod options;
mod resize;
mod resolve;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use dimensions::{
    DEFAULT_DISPLAY_BUFFER_SIZE, DEFAULT_SCROLLBAR_THICKNESS, Dimensions, ScrollbarThickness,
    display_buffer_size, recompute, scrollbars_needed,
};
pub use easing::Easing;
pub use geometry::Point;
pub use headers::{
    Gutter, HeaderPlacement, HeaderSlot, LockedHeader, StackedHeaders, locked_header,
    next_header_index, position_headers, stacked_headers,
};
pub use layout::{
    CollapsedSections, DEFAULT_PARTITION_SIZE, RowConfig, VisiblePartition, build_row_config,
};
pub use options::{
    DEFAULT_HANDLE_WIDTH, DEFAULT_SCROLL_DURATION_MS, DEFAULT_THROTTLE_MS, GutterConfig,
    GutterResizeCallback, Gutters, HorizontalScrollConfig, ScrollableOptions,
    VerticalScrollConfig,
};
pub use resize::{ResizeGesture, ResizeState, resize_width};
pub use resolve::{ScrollValues, max_scroll, resolve, resolve_horizontal, top_partition_index};
pub use state::{FrameSnapshot, ScrollState};
pub use types::{HeaderEntry, HeaderMode, Row, RowSource, RowSpec, SectionSpec, Side, Size};
