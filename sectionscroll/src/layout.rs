use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::ops::Range;

use crate::{HeaderEntry, Row, RowSource, RowSpec, ScrollState};

/// Default number of rows per partition.
pub const DEFAULT_PARTITION_SIZE: usize = 6;

/// The set of collapsed sections, keyed by section index.
///
/// Only `true` flags are stored, so collapsing and re-expanding a section restores an equal value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollapsedSections {
    collapsed: BTreeSet<usize>,
}

impl CollapsedSections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_collapsed(&self, section_index: usize) -> bool {
        self.collapsed.contains(&section_index)
    }

    pub fn set(&mut self, section_index: usize, collapsed: bool) {
        if collapsed {
            self.collapsed.insert(section_index);
        } else {
            self.collapsed.remove(&section_index);
        }
    }

    /// Flips the flag for `section_index` and returns the new state.
    pub fn toggle(&mut self, section_index: usize) -> bool {
        let next = !self.is_collapsed(section_index);
        self.set(section_index, next);
        next
    }

    pub fn len(&self) -> usize {
        self.collapsed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collapsed.is_empty()
    }

    /// Collapsed section indexes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.collapsed.iter().copied()
    }
}

impl FromIterator<usize> for CollapsedSections {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            collapsed: iter.into_iter().collect(),
        }
    }
}

/// A partition mounted by the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisiblePartition {
    pub index: usize,
    /// Rows of this partition, as indexes into [`RowConfig::rows`].
    pub rows: Range<usize>,
    /// Where the partition's top edge sits relative to the viewport top.
    pub offset_y: i64,
}

/// A built layout: the row sequence plus everything derived from it.
///
/// Layouts are never patched. Any change to the source rows or to the collapsed set goes through
/// [`build_row_config`] again.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowConfig<C> {
    pub avg_row_height: f64,
    pub collapsed_sections: CollapsedSections,
    pub content_height: u64,
    pub headers: Vec<HeaderEntry>,
    /// Cumulative top offset of each partition; `partitions[0] == 0` when non-empty.
    pub partitions: Vec<u64>,
    pub rows: Vec<Row<C>>,
    /// Rows per partition this layout was built with.
    pub offset: usize,
}

impl<C> Default for RowConfig<C> {
    fn default() -> Self {
        Self {
            avg_row_height: 0.0,
            collapsed_sections: CollapsedSections::default(),
            content_height: 0,
            headers: Vec::new(),
            partitions: Vec::new(),
            rows: Vec::new(),
            offset: DEFAULT_PARTITION_SIZE,
        }
    }
}

impl<C> RowConfig<C> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn partition_count(&self) -> usize {
        self.partitions.len()
    }

    /// Row index range covered by partition `index`.
    pub fn partition_rows(&self, index: usize) -> Option<Range<usize>> {
        if index >= self.partitions.len() {
            return None;
        }
        let start = index * self.offset;
        let end = start.saturating_add(self.offset).min(self.rows.len());
        Some(start..end)
    }

    /// Summed row height of partition `index`.
    pub fn partition_height(&self, index: usize) -> Option<u64> {
        let start = *self.partitions.get(index)?;
        let end = self
            .partitions
            .get(index + 1)
            .copied()
            .unwrap_or(self.content_height);
        Some(end - start)
    }

    /// Content offset of the row at `row_index`.
    pub fn row_offset(&self, row_index: usize) -> Option<u64> {
        if row_index >= self.rows.len() {
            return None;
        }
        let partition = row_index / self.offset;
        let first = partition * self.offset;
        let within: u64 = self.rows[first..row_index]
            .iter()
            .map(|r| r.height as u64)
            .sum();
        Some(self.partitions[partition] + within)
    }

    /// The header entry belonging to `section_index`, if that section has a header.
    pub fn header_for_section(&self, section_index: usize) -> Option<&HeaderEntry> {
        self.headers
            .iter()
            .find(|h| h.section_index == section_index)
    }

    /// Iterates over the partitions the presentation layer should mount for `scroll`.
    ///
    /// Starts at `scroll.top_partition_index` and covers at most `display_buffer_size` rows.
    pub fn for_each_visible_partition(
        &self,
        scroll: &ScrollState,
        display_buffer_size: usize,
        mut f: impl FnMut(VisiblePartition),
    ) {
        let row_count = self.rows.len();
        let first_row = scroll
            .top_partition_index
            .saturating_mul(self.offset)
            .min(row_count);
        let last_row = first_row.saturating_add(display_buffer_size).min(row_count);
        let vertical = to_i64(scroll.vertical_transform);

        let mut start = first_row;
        let mut index = scroll.top_partition_index;
        while start < last_row {
            let end = start.saturating_add(self.offset).min(last_row);
            let Some(&top) = self.partitions.get(index) else {
                break;
            };
            f(VisiblePartition {
                index,
                rows: start..end,
                offset_y: to_i64(top) - vertical,
            });
            start = end;
            index += 1;
        }
    }

    /// Collects visible partitions into `out` (clears `out` first).
    pub fn collect_visible_partitions(
        &self,
        scroll: &ScrollState,
        display_buffer_size: usize,
        out: &mut Vec<VisiblePartition>,
    ) {
        out.clear();
        self.for_each_visible_partition(scroll, display_buffer_size, |p| out.push(p));
    }
}

/// Builds the row sequence, partition table and header table for `source`.
///
/// Collapsed sections keep only their header row. With `stacking_headers`, each header also gets
/// the gutter bookkeeping used by [`crate::stacked_headers`].
pub fn build_row_config<C: Clone>(
    source: &RowSource<C>,
    offset: usize,
    stacking_headers: bool,
    collapsed_sections: &CollapsedSections,
) -> RowConfig<C> {
    let offset = if offset == 0 {
        vwarn!("build_row_config: partition size must be at least 1");
        1
    } else {
        offset
    };

    let mut rows = Vec::new();
    let mut headers = Vec::new();
    let mut content_height = 0u64;

    match source {
        RowSource::Flat(specs) => {
            rows.reserve_exact(specs.len());
            for spec in specs {
                push_row(&mut rows, &mut content_height, spec, 0, false);
            }
        }
        RowSource::Sections(sections) => {
            let mut stacked = 0u64;
            for (section_index, section) in sections.iter().enumerate() {
                let header = section.header.as_ref().map(|spec| {
                    let row_index = rows.len();
                    let header_offset = content_height;
                    push_row(&mut rows, &mut content_height, spec, section_index, true);
                    (row_index, spec.height, header_offset)
                });

                if !collapsed_sections.is_collapsed(section_index) {
                    for spec in &section.rows {
                        push_row(&mut rows, &mut content_height, spec, section_index, false);
                    }
                }

                if let Some((row_index, height, header_offset)) = header {
                    let adjust_header_offset = if stacking_headers { height } else { 0 };
                    headers.push(HeaderEntry {
                        row_index,
                        section_index,
                        height,
                        offset: header_offset,
                        lock_position: content_height,
                        adjust_header_offset,
                        real_offset: content_height.saturating_add(stacked),
                    });
                    stacked = stacked.saturating_add(adjust_header_offset as u64);
                }
            }
        }
    }

    let partitions = build_partitions(&rows, offset);
    let avg_row_height = if rows.is_empty() {
        0.0
    } else {
        content_height as f64 / rows.len() as f64
    };

    vdebug!(
        rows = rows.len(),
        partitions = partitions.len(),
        headers = headers.len(),
        content_height,
        "build_row_config"
    );

    RowConfig {
        avg_row_height,
        collapsed_sections: collapsed_sections.clone(),
        content_height,
        headers,
        partitions,
        rows,
        offset,
    }
}

fn push_row<C: Clone>(
    rows: &mut Vec<Row<C>>,
    content_height: &mut u64,
    spec: &RowSpec<C>,
    section_index: usize,
    is_header: bool,
) {
    *content_height = content_height.saturating_add(spec.height as u64);
    rows.push(Row {
        height: spec.height,
        content: spec.content.clone(),
        section_index,
        is_header,
    });
}

fn build_partitions<C>(rows: &[Row<C>], offset: usize) -> Vec<u64> {
    let mut partitions = Vec::with_capacity(rows.len().div_ceil(offset));
    let mut top = 0u64;
    for chunk in rows.chunks(offset) {
        partitions.push(top);
        let height: u64 = chunk.iter().map(|r| r.height as u64).sum();
        top = top.saturating_add(height);
    }
    partitions
}

pub(crate) fn to_i64(v: u64) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}
