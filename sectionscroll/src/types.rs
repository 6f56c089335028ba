use alloc::vec::Vec;

/// How section headers behave while scrolling. Fixed for the lifetime of a list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeaderMode {
    /// Headers scroll with the content like any other row.
    #[default]
    None,
    /// One header is pinned to the top and pushed off by the next one.
    Locking,
    /// Passed headers pile up in a top gutter, pending ones in a bottom gutter.
    Stacking,
}

impl HeaderMode {
    pub fn is_stacking(self) -> bool {
        matches!(self, Self::Stacking)
    }
}

/// Which gutter a resize gesture applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Left,
    Right,
}

impl core::fmt::Display for Side {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// A width/height pair in the same px-like unit as row heights.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: u64,
    pub height: u64,
}

impl Size {
    pub const fn new(width: u64, height: u64) -> Self {
        Self { width, height }
    }
}

/// A row as supplied by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowSpec<C> {
    pub height: u32,
    pub content: C,
}

impl<C> RowSpec<C> {
    pub fn new(height: u32, content: C) -> Self {
        Self { height, content }
    }
}

/// A group of rows with an optional header row.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionSpec<C> {
    pub header: Option<RowSpec<C>>,
    pub rows: Vec<RowSpec<C>>,
}

impl<C> SectionSpec<C> {
    pub fn new(header: Option<RowSpec<C>>, rows: Vec<RowSpec<C>>) -> Self {
        Self { header, rows }
    }

    pub fn with_header(header: RowSpec<C>, rows: Vec<RowSpec<C>>) -> Self {
        Self {
            header: Some(header),
            rows,
        }
    }
}

/// The host's row data: either a flat list or a list of sections.
///
/// A flat list behaves like a single section without a header.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RowSource<C> {
    Flat(Vec<RowSpec<C>>),
    Sections(Vec<SectionSpec<C>>),
}

impl<C> RowSource<C> {
    /// Number of sections that can be collapsed or scrolled to (0 for flat lists).
    pub fn section_count(&self) -> usize {
        match self {
            Self::Flat(_) => 0,
            Self::Sections(sections) => sections.len(),
        }
    }
}

impl<C> Default for RowSource<C> {
    fn default() -> Self {
        Self::Flat(Vec::new())
    }
}

/// A row placed in a built layout.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row<C> {
    pub height: u32,
    pub content: C,
    pub section_index: usize,
    pub is_header: bool,
}

/// A header row's entry in the header table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderEntry {
    /// Index into the layout's row sequence.
    pub row_index: usize,
    pub section_index: usize,
    pub height: u32,
    /// Content offset of the header row itself.
    pub offset: u64,
    /// Content offset right after this header's section, where the next header takes over.
    pub lock_position: u64,
    /// Height this header adds to the stacking gutters (0 outside stacking mode).
    pub adjust_header_offset: u32,
    /// `lock_position` shifted by the stacked height of every earlier header.
    pub real_offset: u64,
}

impl HeaderEntry {
    /// Summed `adjust_header_offset` of all headers before this one.
    pub fn stacked_before(&self) -> u64 {
        self.real_offset.saturating_sub(self.lock_position)
    }
}
