/// Result of resolving a requested vertical transform against a partition table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollValues {
    pub vertical_transform: u64,
    pub top_partition_index: usize,
}

/// Largest valid scroll offset for a content extent inside a viewport extent.
pub fn max_scroll(content_extent: u64, viewport_extent: u64) -> u64 {
    content_extent.saturating_sub(viewport_extent)
}

/// Clamps `vertical_transform` into `[0, max_height]` and finds the topmost partition to render.
///
/// `requested` is signed so callers can pass `current + wheel_delta` without pre-clamping.
pub fn resolve(requested: i64, max_height: u64, partitions: &[u64]) -> ScrollValues {
    let vertical_transform = clamp_transform(requested, max_height);
    ScrollValues {
        vertical_transform,
        top_partition_index: top_partition_index(partitions, vertical_transform),
    }
}

/// Largest `i` such that `partitions[i] <= vertical_transform` (0 for tables of length <= 1).
pub fn top_partition_index(partitions: &[u64], vertical_transform: u64) -> usize {
    if partitions.len() <= 1 {
        return 0;
    }
    partitions
        .partition_point(|&top| top <= vertical_transform)
        .saturating_sub(1)
}

/// Clamps a requested horizontal transform into `[0, scroll_width - viewport_width]`.
pub fn resolve_horizontal(requested: i64, scroll_width: u64, viewport_width: u64) -> u64 {
    clamp_transform(requested, max_scroll(scroll_width, viewport_width))
}

fn clamp_transform(requested: i64, max: u64) -> u64 {
    if requested <= 0 {
        return 0;
    }
    (requested as u64).min(max)
}
