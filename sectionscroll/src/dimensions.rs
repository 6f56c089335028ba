use crate::Size;

/// Default thickness of both scrollbars.
pub const DEFAULT_SCROLLBAR_THICKNESS: u32 = 15;

/// Rows kept mounted before the first dimensions pass.
pub const DEFAULT_DISPLAY_BUFFER_SIZE: usize = 60;

/// Space the scrollbars take when rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollbarThickness {
    /// Width of the vertical scrollbar.
    pub vertical: u32,
    /// Height of the horizontal scrollbar.
    pub horizontal: u32,
}

impl Default for ScrollbarThickness {
    fn default() -> Self {
        Self {
            vertical: DEFAULT_SCROLLBAR_THICKNESS,
            horizontal: DEFAULT_SCROLLBAR_THICKNESS,
        }
    }
}

/// Scrollbar visibility plus the number of rows to keep mounted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub should_render_vertical_scrollbar: bool,
    pub should_render_horizontal_scrollbar: bool,
    pub display_buffer_size: usize,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            should_render_vertical_scrollbar: false,
            should_render_horizontal_scrollbar: false,
            display_buffer_size: DEFAULT_DISPLAY_BUFFER_SIZE,
        }
    }
}

impl Dimensions {
    /// The part of `viewport` left for rows once the rendered scrollbars are subtracted.
    pub fn contents_size(&self, viewport: Size, scrollbars: ScrollbarThickness) -> Size {
        let width = if self.should_render_vertical_scrollbar {
            viewport.width.saturating_sub(scrollbars.vertical as u64)
        } else {
            viewport.width
        };
        let height = if self.should_render_horizontal_scrollbar {
            viewport.height.saturating_sub(scrollbars.horizontal as u64)
        } else {
            viewport.height
        };
        Size { width, height }
    }
}

/// Decides which scrollbars are needed as `(vertical, horizontal)`.
///
/// The two are interdependent: a horizontal scrollbar eats vertical space and vice versa, so an
/// axis that only overflows once the other scrollbar appears still needs its own.
pub fn scrollbars_needed(
    viewport: Size,
    content: Size,
    scrollbars: ScrollbarThickness,
) -> (bool, bool) {
    let height_too_small = viewport.height < content.height;
    let height_too_small_with_horizontal =
        viewport.height < content.height.saturating_add(scrollbars.horizontal as u64);
    let width_too_small = viewport.width < content.width;
    let width_too_small_with_vertical =
        viewport.width < content.width.saturating_add(scrollbars.vertical as u64);

    let vertical = height_too_small || (width_too_small && height_too_small_with_horizontal);
    let horizontal = width_too_small || (height_too_small && width_too_small_with_vertical);
    (vertical, horizontal)
}

/// Rows to keep mounted for a contents area `contents_height` tall.
///
/// One viewport's worth of rows plus two partitions of slack, advanced to the next multiple of
/// the partition size.
pub fn display_buffer_size(contents_height: u64, avg_row_height: f64, offset: usize) -> usize {
    let offset = offset.max(1);
    let rows_in_contents = if avg_row_height > 0.0 && avg_row_height.is_finite() {
        ceil_to_usize(contents_height as f64 / avg_row_height)
    } else {
        0
    };
    let display = rows_in_contents.saturating_add(offset.saturating_mul(2));
    display.saturating_add(offset - display % offset)
}

/// Recomputes scrollbar visibility and the display buffer for the given geometry.
pub fn recompute(
    viewport: Size,
    content: Size,
    scrollbars: ScrollbarThickness,
    avg_row_height: f64,
    offset: usize,
) -> Dimensions {
    let (vertical, horizontal) = scrollbars_needed(viewport, content, scrollbars);
    let mut dimensions = Dimensions {
        should_render_vertical_scrollbar: vertical,
        should_render_horizontal_scrollbar: horizontal,
        display_buffer_size: 0,
    };
    let contents = dimensions.contents_size(viewport, scrollbars);
    dimensions.display_buffer_size = display_buffer_size(contents.height, avg_row_height, offset);
    vtrace!(
        vertical,
        horizontal,
        display = dimensions.display_buffer_size,
        "dimensions::recompute"
    );
    dimensions
}

// `f64::ceil` is std-only.
fn ceil_to_usize(v: f64) -> usize {
    if v <= 0.0 {
        return 0;
    }
    let truncated = v as usize;
    if (truncated as f64) < v {
        truncated.saturating_add(1)
    } else {
        truncated
    }
}
