use alloc::vec::Vec;

use sectionscroll::{
    CollapsedSections, Dimensions, FrameSnapshot, HeaderEntry, HeaderMode, HeaderPlacement, Point,
    ResizeGesture, ResizeState, RowConfig, RowSource, ScrollState, ScrollableOptions, Side, Size,
    VisiblePartition, build_row_config, max_scroll, position_headers, recompute, resolve,
    resolve_horizontal,
};

use crate::{AnimationTicket, Error, Result, ScrollAnimator, Throttle};

/// A framework-neutral scrollable list.
///
/// Owns the layout, the scroll state and the gesture state machines; holds no UI objects.
/// Adapters drive it by calling:
/// - `set_viewport` when the container is laid out or resized
/// - `on_wheel` / `on_vertical_scroll` / `on_horizontal_scroll` on input
/// - `tick(now_ms)` each frame/timer tick (animations and throttled wheel input)
/// - `start_resize` / `on_resize_move` / `stop_resize` for gutter drags
///
/// After any call that returns a changed [`ScrollState`], the adapter re-reads
/// [`Scrollable::for_each_visible_partition`] and [`Scrollable::header_placement`].
#[derive(Clone, Debug)]
pub struct Scrollable<C> {
    options: ScrollableOptions,
    source: RowSource<C>,
    layout: RowConfig<C>,
    scroll: ScrollState,
    viewport: Size,
    dimensions: Dimensions,
    animator: ScrollAnimator,
    wheel: Throttle,
    pending_wheel: Point,
    resize: ResizeState,
}

impl<C: Clone> Scrollable<C> {
    pub fn new(options: ScrollableOptions, source: RowSource<C>) -> Self {
        let layout = build_row_config(
            &source,
            options.partition_size(),
            options.stacking_headers(),
            &CollapsedSections::new(),
        );
        vdebug!(
            rows = layout.rows.len(),
            partitions = layout.partitions.len(),
            headers = layout.headers.len(),
            content_height = layout.content_height,
            "Scrollable::new"
        );
        let animator =
            ScrollAnimator::new(options.scroll_duration_ms, options.throttle_ms, options.easing);
        let wheel = Throttle::new(options.throttle_ms);
        Self {
            options,
            source,
            layout,
            scroll: ScrollState::default(),
            viewport: Size::default(),
            dimensions: Dimensions::default(),
            animator,
            wheel,
            pending_wheel: Point::ZERO,
            resize: ResizeState::Idle,
        }
    }

    pub fn options(&self) -> &ScrollableOptions {
        &self.options
    }

    pub fn source(&self) -> &RowSource<C> {
        &self.source
    }

    pub fn layout(&self) -> &RowConfig<C> {
        &self.layout
    }

    pub fn headers(&self) -> &[HeaderEntry] {
        &self.layout.headers
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn resize_state(&self) -> ResizeState {
        self.resize
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    pub fn animator(&self) -> &ScrollAnimator {
        &self.animator
    }

    /// Full scrollable extent: content width (0 without horizontal scrolling) by content height.
    pub fn content_size(&self) -> Size {
        let width = if self.options.horizontal_scroll.is_some() {
            self.options.content_width()
        } else {
            0
        };
        Size::new(width, self.layout.content_height)
    }

    /// The viewport minus the rendered scrollbars.
    pub fn contents_size(&self) -> Size {
        self.dimensions
            .contents_size(self.viewport, self.options.scrollbar_thickness())
    }

    pub fn max_vertical_scroll(&self) -> u64 {
        max_scroll(self.layout.content_height, self.contents_size().height)
    }

    pub fn max_horizontal_scroll(&self) -> u64 {
        if !self.horizontal_enabled() {
            return 0;
        }
        max_scroll(self.options.content_width(), self.contents_size().width)
    }

    pub fn frame_snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            scroll: self.scroll,
            viewport: self.viewport,
            contents: self.contents_size(),
            content: self.content_size(),
            dimensions: self.dimensions,
            resize: self.resize,
        }
    }

    /// Replaces the options. The layout is rebuilt only when its inputs changed.
    pub fn set_options(&mut self, options: ScrollableOptions) {
        let rebuild = options.partition_size() != self.options.partition_size()
            || options.header_mode != self.options.header_mode;
        self.animator
            .reconfigure(options.scroll_duration_ms, options.throttle_ms, options.easing);
        self.wheel.set_interval_ms(options.throttle_ms);
        self.options = options;
        if rebuild {
            self.rebuild_layout();
        }
        self.update_dimensions();
    }

    pub fn update_options(&mut self, f: impl FnOnce(&mut ScrollableOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    /// Replaces the rows. Collapsed sections carry over by index.
    pub fn set_source(&mut self, source: RowSource<C>) {
        self.source = source;
        self.rebuild_layout();
        self.update_dimensions();
    }

    pub fn set_header_mode(&mut self, header_mode: HeaderMode) {
        self.update_options(|o| o.header_mode = header_mode);
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        self.update_dimensions();
    }

    /// Recomputes scrollbar visibility and the display buffer, then re-clamps the scroll state.
    ///
    /// An axis whose scrollbar is not rendered has its transform reset to 0.
    pub fn update_dimensions(&mut self) {
        self.dimensions = recompute(
            self.viewport,
            self.content_size(),
            self.options.scrollbar_thickness(),
            self.layout.avg_row_height,
            self.layout.offset,
        );

        if self.dimensions.should_render_vertical_scrollbar {
            let max = self.max_vertical_scroll();
            let requested = to_i64(self.scroll.vertical_transform);
            self.scroll
                .apply_vertical(resolve(requested, max, &self.layout.partitions));
        } else {
            self.scroll.vertical_transform = 0;
            self.scroll.top_partition_index = 0;
        }

        if self.horizontal_enabled() {
            let contents = self.contents_size();
            self.scroll.horizontal_transform = resolve_horizontal(
                to_i64(self.scroll.horizontal_transform),
                self.options.content_width(),
                contents.width,
            );
        } else {
            self.scroll.horizontal_transform = 0;
        }
    }

    /// Wheel/trackpad input. Cancels any running animation.
    ///
    /// Deltas are accumulated and applied at most once per throttle interval; a delta that arrives
    /// inside the interval is flushed by a later `on_wheel` or `tick`.
    pub fn on_wheel(&mut self, delta: Point, now_ms: u64) -> Option<ScrollState> {
        self.animator.cancel();
        self.pending_wheel = self.pending_wheel + delta;
        if !self.wheel.try_fire(now_ms) {
            return None;
        }
        self.flush_wheel()
    }

    /// The vertical scrollbar reported `scroll_top`.
    ///
    /// A report equal to the current transform is the echo of a programmatic change and is
    /// ignored; anything else is user input and cancels a running animation.
    pub fn on_vertical_scroll(&mut self, scroll_top: u64) -> Option<ScrollState> {
        if !self.dimensions.should_render_vertical_scrollbar
            || scroll_top == self.scroll.vertical_transform
        {
            return None;
        }
        self.animator.cancel();
        let max = self.max_vertical_scroll();
        self.scroll
            .apply_vertical(resolve(to_i64(scroll_top), max, &self.layout.partitions));
        vtrace!(
            scroll_top,
            vertical_transform = self.scroll.vertical_transform,
            "Scrollable::on_vertical_scroll"
        );
        Some(self.scroll)
    }

    /// The horizontal scrollbar reported `scroll_left`. Echoes are ignored as for vertical.
    pub fn on_horizontal_scroll(&mut self, scroll_left: u64) -> Option<ScrollState> {
        if !self.horizontal_enabled() || scroll_left == self.scroll.horizontal_transform {
            return None;
        }
        self.animator.cancel();
        let contents = self.contents_size();
        self.scroll.horizontal_transform = resolve_horizontal(
            to_i64(scroll_left),
            self.options.content_width(),
            contents.width,
        );
        Some(self.scroll)
    }

    /// Starts an animated scroll to `target`, clamped to the scrollable range.
    ///
    /// Replaces any running animation. The returned ticket can be passed to
    /// [`Scrollable::tick_ticket`]; tickets of superseded requests do nothing.
    pub fn scroll_to(&mut self, target: Point, now_ms: u64) -> AnimationTicket {
        let target = self.clamp_point(target);
        let current = Point::from_transforms(
            self.scroll.horizontal_transform,
            self.scroll.vertical_transform,
        );
        self.animator.scroll_to(current, target, now_ms)
    }

    /// Animates so the header `header_index` sits at the top of the viewport.
    ///
    /// Returns `None` when the list has no such header.
    pub fn scroll_to_header(&mut self, header_index: usize, now_ms: u64) -> Option<AnimationTicket> {
        let Some(header) = self.layout.headers.get(header_index) else {
            vwarn!(
                header_index,
                headers = self.layout.headers.len(),
                "Scrollable::scroll_to_header: no such header"
            );
            return None;
        };
        let target = Point::from_transforms(self.scroll.horizontal_transform, header.offset);
        Some(self.scroll_to(target, now_ms))
    }

    /// Advances the running animation and flushes throttled wheel input.
    ///
    /// Returns the new scroll state when it changed.
    pub fn tick(&mut self, now_ms: u64) -> Option<ScrollState> {
        let before = self.scroll;
        if !self.pending_wheel.is_zero() && self.wheel.try_fire(now_ms) {
            self.flush_wheel();
        }
        if let Some(frame) = self.animator.tick_active(now_ms) {
            self.apply_point(frame.position);
        }
        (self.scroll != before).then_some(self.scroll)
    }

    /// Like [`Scrollable::tick`] for the animation `ticket` belongs to. Stale tickets are ignored.
    pub fn tick_ticket(&mut self, ticket: AnimationTicket, now_ms: u64) -> Option<ScrollState> {
        let frame = self.animator.tick(ticket, now_ms)?;
        let before = self.scroll;
        self.apply_point(frame.position);
        (self.scroll != before).then_some(self.scroll)
    }

    pub fn cancel_animation(&mut self) {
        self.animator.cancel();
    }

    pub fn is_section_collapsed(&self, section_index: usize) -> bool {
        self.layout.collapsed_sections.is_collapsed(section_index)
    }

    /// Flips the collapsed state of a section and rebuilds the layout.
    ///
    /// Returns `false` (and changes nothing) for flat lists and out-of-range indexes.
    pub fn toggle_section(&mut self, section_index: usize) -> bool {
        if section_index >= self.source.section_count() {
            vwarn!(
                section_index,
                sections = self.source.section_count(),
                "Scrollable::toggle_section: no such section"
            );
            return false;
        }
        self.layout.collapsed_sections.toggle(section_index);
        vdebug!(
            section_index,
            collapsed = self.layout.collapsed_sections.is_collapsed(section_index),
            "Scrollable::toggle_section"
        );
        self.rebuild_layout();
        self.update_dimensions();
        true
    }

    /// Begins dragging the gutter on `side` from pointer position `position`.
    pub fn start_resize(&mut self, side: Side, position: i64) -> Result<()> {
        let gutter = self
            .options
            .gutters
            .get(side)
            .ok_or(Error::MissingGutter(side))?;
        if !self.resize.start(side, gutter.width, position) {
            return Err(Error::ResizeInProgress(side));
        }
        Ok(())
    }

    /// Pointer moved during a drag. Returns the new gutter width and reports it to the gutter's
    /// resize callback; `None` when no drag is active.
    pub fn on_resize_move(&mut self, position: i64) -> Option<u32> {
        let gesture = self.resize.update(position)?;
        let gutter = self.options.gutters.get(gesture.side);
        let width = gesture.width(gutter.map_or(0, |g| g.min_width));
        vtrace!(side = %gesture.side, position, width, "Scrollable::on_resize_move");
        if let Some(cb) = gutter.and_then(|g| g.on_gutter_resize.as_ref()) {
            cb(width);
        }
        Some(width)
    }

    pub fn stop_resize(&mut self) -> Option<ResizeGesture> {
        self.resize.stop()
    }

    /// Header overlay for the current scroll state.
    pub fn header_placement(&self) -> HeaderPlacement {
        position_headers(
            self.options.header_mode,
            &self.layout.headers,
            self.scroll.vertical_transform,
            self.contents_size().height,
        )
    }

    pub fn for_each_visible_partition(&self, f: impl FnMut(VisiblePartition)) {
        self.layout.for_each_visible_partition(
            &self.scroll,
            self.dimensions.display_buffer_size,
            f,
        );
    }

    /// Collects visible partitions into `out` (clears `out` first).
    pub fn collect_visible_partitions(&self, out: &mut Vec<VisiblePartition>) {
        self.layout.collect_visible_partitions(
            &self.scroll,
            self.dimensions.display_buffer_size,
            out,
        );
    }

    /// Drops pending animations, wheel input and resize gestures.
    ///
    /// Pending tickets become stale; the layout and scroll state are kept.
    pub fn dispose(&mut self) {
        vdebug!("Scrollable::dispose");
        self.animator.cancel();
        self.pending_wheel = Point::ZERO;
        self.wheel.reset();
        self.resize = ResizeState::Idle;
    }

    fn horizontal_enabled(&self) -> bool {
        self.options.horizontal_scroll.is_some()
            && self.dimensions.should_render_horizontal_scrollbar
    }

    fn rebuild_layout(&mut self) {
        self.layout = build_row_config(
            &self.source,
            self.options.partition_size(),
            self.options.stacking_headers(),
            &self.layout.collapsed_sections,
        );
        vdebug!(
            rows = self.layout.rows.len(),
            partitions = self.layout.partitions.len(),
            content_height = self.layout.content_height,
            "Scrollable::rebuild_layout"
        );
    }

    fn flush_wheel(&mut self) -> Option<ScrollState> {
        let delta = core::mem::replace(&mut self.pending_wheel, Point::ZERO);
        let before = self.scroll;
        let current = Point::from_transforms(
            self.scroll.horizontal_transform,
            self.scroll.vertical_transform,
        );
        self.apply_point(current + delta);
        (self.scroll != before).then_some(self.scroll)
    }

    // Each axis only moves while its scrollbar is rendered.
    fn apply_point(&mut self, requested: Point) {
        if self.dimensions.should_render_vertical_scrollbar {
            let max = self.max_vertical_scroll();
            self.scroll
                .apply_vertical(resolve(requested.round_y(), max, &self.layout.partitions));
        }
        if self.horizontal_enabled() {
            let contents = self.contents_size();
            self.scroll.horizontal_transform = resolve_horizontal(
                requested.round_x(),
                self.options.content_width(),
                contents.width,
            );
        }
    }

    fn clamp_point(&self, target: Point) -> Point {
        let y = resolve(
            target.round_y(),
            self.max_vertical_scroll(),
            &self.layout.partitions,
        )
        .vertical_transform;
        let x = resolve_horizontal(
            target.round_x(),
            self.options.content_width(),
            self.contents_size().width,
        );
        let x = if self.horizontal_enabled() { x } else { 0 };
        Point::from_transforms(x, y)
    }
}

fn to_i64(v: u64) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}
