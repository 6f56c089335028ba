//! Header placement for locking and stacking modes.
//!
//! Everything here is a pure function of the header table, the vertical transform and (for
//! stacking) the height of the contents viewport.

use core::ops::Range;

use crate::layout::to_i64;
use crate::{HeaderEntry, HeaderMode};

/// The single pinned header in locking mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LockedHeader {
    pub header_index: usize,
    pub row_index: usize,
    /// How far the header is pushed upward by the incoming one (0 when fully pinned).
    pub translate_y: u32,
}

/// Which part of the viewport a stacked header is drawn in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gutter {
    Top,
    /// Between the two gutters, on a track at `real_offset - vertical_transform`.
    ///
    /// The track is offset from the header row by the stack above it, so floating headers never
    /// overlap either gutter.
    Floating,
    Bottom,
}

/// A header's slot in stacking mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderSlot {
    pub header_index: usize,
    pub row_index: usize,
    pub gutter: Gutter,
    /// Top edge relative to the viewport top.
    pub y: i64,
}

/// Header index ranges for stacking mode.
///
/// `top`, `floating` and `bottom` are contiguous and together cover the whole header table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StackedHeaders {
    pub top: Range<usize>,
    pub floating: Range<usize>,
    pub bottom: Range<usize>,
}

impl StackedHeaders {
    /// Index of the first header still in the bottom gutter (the header count when empty).
    pub fn bottom_gutter_start(&self) -> usize {
        self.bottom.start
    }

    pub fn gutter_of(&self, header_index: usize) -> Option<Gutter> {
        if self.top.contains(&header_index) {
            Some(Gutter::Top)
        } else if self.floating.contains(&header_index) {
            Some(Gutter::Floating)
        } else if self.bottom.contains(&header_index) {
            Some(Gutter::Bottom)
        } else {
            None
        }
    }

    /// Iterates over every header with its gutter and viewport y.
    ///
    /// Top-gutter headers stack downward from 0, bottom-gutter headers stack upward from
    /// `viewport_content_height`, floating headers sit at `real_offset - vertical_transform`.
    pub fn for_each_slot(
        &self,
        headers: &[HeaderEntry],
        vertical_transform: u64,
        viewport_content_height: u64,
        mut f: impl FnMut(HeaderSlot),
    ) {
        let total = total_stacked_height(headers);
        for (header_index, header) in headers.iter().enumerate() {
            let Some(gutter) = self.gutter_of(header_index) else {
                continue;
            };
            let y = match gutter {
                Gutter::Top => to_i64(header.stacked_before()),
                Gutter::Floating => to_i64(header.real_offset) - to_i64(vertical_transform),
                Gutter::Bottom => {
                    let below = total.saturating_sub(header.stacked_before());
                    to_i64(viewport_content_height) - to_i64(below)
                }
            };
            f(HeaderSlot {
                header_index,
                row_index: header.row_index,
                gutter,
                y,
            });
        }
    }
}

/// What the presentation layer should draw for headers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeaderPlacement {
    None,
    Locked(LockedHeader),
    Stacked(StackedHeaders),
}

/// Index of the first header whose lock position lies beyond `vertical_transform`.
///
/// Every header before it has been scrolled past. Returns `headers.len()` when all have.
pub fn next_header_index(headers: &[HeaderEntry], vertical_transform: u64) -> usize {
    headers.partition_point(|h| h.lock_position <= vertical_transform)
}

/// Dispatches on `mode`. An empty header table never places anything.
pub fn position_headers(
    mode: HeaderMode,
    headers: &[HeaderEntry],
    vertical_transform: u64,
    viewport_content_height: u64,
) -> HeaderPlacement {
    match mode {
        HeaderMode::None => HeaderPlacement::None,
        HeaderMode::Locking => locked_header(headers, vertical_transform)
            .map(HeaderPlacement::Locked)
            .unwrap_or(HeaderPlacement::None),
        HeaderMode::Stacking => {
            stacked_headers(headers, vertical_transform, viewport_content_height)
                .map(HeaderPlacement::Stacked)
                .unwrap_or(HeaderPlacement::None)
        }
    }
}

/// Locking mode: the header of the section under the top edge, with its push-off translation.
///
/// `None` while the top edge is above the chosen header's own row, e.g. inside a leading section
/// that has no header.
pub fn locked_header(headers: &[HeaderEntry], vertical_transform: u64) -> Option<LockedHeader> {
    let last = headers.len().checked_sub(1)?;
    let header_index = next_header_index(headers, vertical_transform).min(last);
    let header = &headers[header_index];
    if vertical_transform < header.offset {
        return None;
    }

    let lock = header.lock_position;
    let height = header.height as u64;
    let pushed = header_index < last
        && vertical_transform < lock
        && vertical_transform.saturating_add(height) >= lock;
    let translate_y = if pushed {
        (height - (lock - vertical_transform)) as u32
    } else {
        0
    };

    Some(LockedHeader {
        header_index,
        row_index: header.row_index,
        translate_y,
    })
}

/// Stacking mode: splits the header table into top, floating and bottom runs.
///
/// Headers whose lock position has been passed sit in the top gutter. Scanning forward from there,
/// a header leaves the bottom gutter once
/// `(real_offset - vertical_transform) + adjusted_bottom_height <= viewport_content_height - 1`,
/// where `adjusted_bottom_height` is the stacked height of that header and everything after it.
/// The first header that fails the test keeps itself and all later headers in the bottom gutter.
pub fn stacked_headers(
    headers: &[HeaderEntry],
    vertical_transform: u64,
    viewport_content_height: u64,
) -> Option<StackedHeaders> {
    if headers.is_empty() {
        return None;
    }

    let next = next_header_index(headers, vertical_transform);
    let total = total_stacked_height(headers);
    let limit = to_i64(viewport_content_height) - 1;
    let transform = to_i64(vertical_transform);

    let evicted = headers[next..]
        .iter()
        .position(|h| {
            let adjusted_bottom_height = to_i64(total.saturating_sub(h.stacked_before()));
            let adjusted_transform = (to_i64(h.real_offset) - transform) + adjusted_bottom_height;
            adjusted_transform > limit
        })
        .unwrap_or(headers.len() - next);
    let bottom_start = next + evicted;

    vtrace!(
        vertical_transform,
        next,
        bottom_start,
        "stacked_headers"
    );

    Some(StackedHeaders {
        top: 0..next,
        floating: next..bottom_start,
        bottom: bottom_start..headers.len(),
    })
}

fn total_stacked_height(headers: &[HeaderEntry]) -> u64 {
    headers
        .last()
        .map(|h| h.stacked_before() + h.adjust_header_offset as u64)
        .unwrap_or(0)
}
