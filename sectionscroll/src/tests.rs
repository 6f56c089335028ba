use crate::*;

use alloc::vec;
use alloc::vec::Vec;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        self.gen_range_u64(start as u64, end_exclusive as u64) as u32
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

fn flat(count: usize, height: u32) -> RowSource<usize> {
    RowSource::Flat((0..count).map(|i| RowSpec::new(height, i)).collect())
}

fn section(id: usize, header_height: u32, body: usize, body_height: u32) -> SectionSpec<usize> {
    SectionSpec::with_header(
        RowSpec::new(header_height, id * 1000),
        (0..body)
            .map(|i| RowSpec::new(body_height, id * 1000 + i + 1))
            .collect(),
    )
}

fn two_sections() -> RowSource<usize> {
    RowSource::Sections(vec![section(0, 20, 5, 10), section(1, 20, 5, 10)])
}

fn random_source(rng: &mut Lcg) -> RowSource<usize> {
    let mut sections = Vec::new();
    let mut id = 0usize;
    for _ in 0..rng.gen_range_usize(0, 12) {
        let header = if rng.gen_range_u32(0, 5) == 0 {
            None
        } else {
            id += 1;
            Some(RowSpec::new(rng.gen_range_u32(0, 40), id))
        };
        let rows = (0..rng.gen_range_usize(0, 15))
            .map(|_| {
                id += 1;
                RowSpec::new(rng.gen_range_u32(0, 60), id)
            })
            .collect();
        sections.push(SectionSpec::new(header, rows));
    }
    RowSource::Sections(sections)
}

fn assert_partition_invariants<C>(layout: &RowConfig<C>) {
    if layout.rows.is_empty() {
        assert!(layout.partitions.is_empty());
        assert_eq!(layout.content_height, 0);
        return;
    }
    assert_eq!(layout.partitions[0], 0);
    assert_eq!(
        layout.partitions.len(),
        layout.rows.len().div_ceil(layout.offset)
    );
    for (i, chunk) in layout.rows.chunks(layout.offset).enumerate() {
        let sum: u64 = chunk.iter().map(|r| r.height as u64).sum();
        let end = layout
            .partitions
            .get(i + 1)
            .copied()
            .unwrap_or(layout.content_height);
        assert!(end >= layout.partitions[i], "partitions must be non-decreasing");
        assert_eq!(end - layout.partitions[i], sum, "partition {i} height");
    }
}

#[test]
fn flat_rows_are_chunked_into_partitions() {
    let layout = build_row_config(&flat(20, 30), 6, false, &CollapsedSections::new());
    assert_eq!(layout.partitions, vec![0, 180, 360, 540]);
    assert_eq!(layout.content_height, 600);
    assert_eq!(layout.avg_row_height, 30.0);
    assert!(layout.headers.is_empty());
    assert_eq!(layout.partition_rows(3), Some(18..20));
    assert_eq!(layout.partition_height(3), Some(60));
    assert_eq!(layout.partition_height(4), None);
    assert!(layout.rows.iter().all(|r| !r.is_header && r.section_index == 0));
    assert_partition_invariants(&layout);
}

#[test]
fn empty_source_yields_empty_tables() {
    let layout = build_row_config(&flat(0, 30), 6, true, &CollapsedSections::new());
    assert!(layout.is_empty());
    assert_eq!(layout.avg_row_height, 0.0);
    assert!(layout.partitions.is_empty());
    assert!(layout.headers.is_empty());

    let sections: RowSource<usize> = RowSource::Sections(Vec::new());
    let layout = build_row_config(&sections, 6, false, &CollapsedSections::new());
    assert!(layout.is_empty());
    assert_eq!(resolve(40, 0, &layout.partitions).top_partition_index, 0);
}

#[test]
fn zero_partition_size_falls_back_to_one() {
    let layout = build_row_config(&flat(3, 10), 0, false, &CollapsedSections::new());
    assert_eq!(layout.offset, 1);
    assert_eq!(layout.partitions, vec![0, 10, 20]);
}

#[test]
fn stacking_headers_record_lock_and_gutter_offsets() {
    let layout = build_row_config(&two_sections(), 6, true, &CollapsedSections::new());
    assert_eq!(layout.content_height, 140);
    assert_eq!(layout.headers.len(), 2);

    let h0 = layout.headers[0];
    assert_eq!(h0.row_index, 0);
    assert_eq!(h0.offset, 0);
    assert_eq!(h0.lock_position, 70);
    assert_eq!(h0.adjust_header_offset, 20);
    assert_eq!(h0.real_offset, 70);
    assert_eq!(h0.stacked_before(), 0);

    let h1 = layout.headers[1];
    assert_eq!(h1.row_index, 6);
    assert_eq!(h1.section_index, 1);
    assert_eq!(h1.offset, 70);
    assert_eq!(h1.lock_position, 140);
    assert_eq!(h1.real_offset, 160);
    assert_eq!(h1.stacked_before(), 20);

    assert!(layout.rows[0].is_header && layout.rows[6].is_header);
    assert_eq!(layout.header_for_section(1), Some(&h1));
}

#[test]
fn locking_headers_do_not_stack() {
    let layout = build_row_config(&two_sections(), 6, false, &CollapsedSections::new());
    for h in &layout.headers {
        assert_eq!(h.adjust_header_offset, 0);
        assert_eq!(h.real_offset, h.lock_position);
    }
    assert_eq!(layout.headers[1].lock_position, 140);
}

#[test]
fn collapsed_section_keeps_only_its_header() {
    let collapsed: CollapsedSections = [0usize].into_iter().collect();
    let layout = build_row_config(&two_sections(), 6, true, &collapsed);
    assert_eq!(layout.rows.len(), 7);
    assert_eq!(layout.content_height, 90);
    assert_eq!(layout.partitions, vec![0, 80]);
    assert_eq!(layout.headers[0].lock_position, 20);
    assert_eq!(layout.headers[1].offset, 20);
    assert_eq!(layout.headers[1].row_index, 1);
    assert_eq!(layout.headers[1].lock_position, 90);
    assert!(layout.collapsed_sections.is_collapsed(0));
    assert_partition_invariants(&layout);
}

#[test]
fn collapsing_section_without_header_removes_all_its_rows() {
    let source = RowSource::Sections(vec![
        SectionSpec::new(None, vec![RowSpec::new(10, 1), RowSpec::new(10, 2)]),
        section(1, 20, 2, 10),
    ]);
    let collapsed: CollapsedSections = [0usize].into_iter().collect();
    let layout = build_row_config(&source, 6, false, &collapsed);
    assert_eq!(layout.rows.len(), 3);
    assert_eq!(layout.headers.len(), 1);
    assert_eq!(layout.headers[0].section_index, 1);
    assert_eq!(layout.headers[0].offset, 0);
}

#[test]
fn collapsed_sections_toggle_round_trips() {
    let mut collapsed = CollapsedSections::new();
    assert!(collapsed.toggle(3));
    assert!(collapsed.is_collapsed(3));
    assert!(!collapsed.toggle(3));
    assert_eq!(collapsed, CollapsedSections::new());
}

#[test]
fn randomized_layouts_hold_partition_invariants() {
    let mut rng = Lcg::new(0x5eed_0001);
    for _ in 0..200 {
        let source = random_source(&mut rng);
        let offset = rng.gen_range_usize(1, 9);
        let stacking = rng.gen_bool();
        let layout = build_row_config(&source, offset, stacking, &CollapsedSections::new());
        assert_partition_invariants(&layout);

        let mut prev = 0u64;
        for h in &layout.headers {
            assert!(h.lock_position >= prev, "headers ordered by lock position");
            assert!(layout.rows[h.row_index].is_header);
            assert_eq!(layout.row_offset(h.row_index), Some(h.offset));
            prev = h.lock_position;
        }
    }
}

#[test]
fn collapse_then_expand_restores_layout() {
    let mut rng = Lcg::new(0x5eed_0002);
    for _ in 0..100 {
        let source = random_source(&mut rng);
        let count = source.section_count();
        if count == 0 {
            continue;
        }
        let offset = rng.gen_range_usize(1, 9);
        let stacking = rng.gen_bool();
        let mut collapsed = CollapsedSections::new();
        let before = build_row_config(&source, offset, stacking, &collapsed);

        let target = rng.gen_range_usize(0, count);
        collapsed.toggle(target);
        let during = build_row_config(&source, offset, stacking, &collapsed);
        assert!(during.rows.len() <= before.rows.len());
        assert_partition_invariants(&during);

        collapsed.toggle(target);
        let after = build_row_config(&source, offset, stacking, &collapsed);
        assert_eq!(after, before);
    }
}

#[test]
fn resolve_clamps_and_finds_partition() {
    let layout = build_row_config(&flat(20, 30), 6, false, &CollapsedSections::new());
    let max = max_scroll(layout.content_height, 100);
    assert_eq!(max, 500);

    assert_eq!(resolve(-25, max, &layout.partitions), ScrollValues::default());
    assert_eq!(
        resolve(200, max, &layout.partitions),
        ScrollValues {
            vertical_transform: 200,
            top_partition_index: 1,
        }
    );
    assert_eq!(
        resolve(360, max, &layout.partitions).top_partition_index,
        2
    );
    assert_eq!(
        resolve(10_000, max, &layout.partitions),
        ScrollValues {
            vertical_transform: 500,
            top_partition_index: 2,
        }
    );
    assert_eq!(max_scroll(50, 100), 0);
    assert_eq!(top_partition_index(&[0], 1_000), 0);
}

#[test]
fn resolve_matches_partition_bounds_for_random_layouts() {
    let mut rng = Lcg::new(0x5eed_0003);
    for _ in 0..100 {
        let source = random_source(&mut rng);
        let layout = build_row_config(&source, rng.gen_range_usize(1, 9), false, &CollapsedSections::new());
        let viewport = rng.gen_range_u64(1, 300);
        let max = max_scroll(layout.content_height, viewport);
        for _ in 0..20 {
            let t = rng.gen_range_u64(0, max + 1);
            let r = resolve(t as i64, max, &layout.partitions);
            assert_eq!(r.vertical_transform, t);
            if layout.partitions.is_empty() {
                assert_eq!(r.top_partition_index, 0);
                continue;
            }
            let i = r.top_partition_index;
            assert!(layout.partitions[i] <= t);
            if let Some(&next) = layout.partitions.get(i + 1) {
                assert!(t < next);
            }
        }
    }
}

#[test]
fn horizontal_resolve_clamps_to_scroll_width() {
    assert_eq!(resolve_horizontal(-3, 500, 200), 0);
    assert_eq!(resolve_horizontal(120, 500, 200), 120);
    assert_eq!(resolve_horizontal(900, 500, 200), 300);
    assert_eq!(resolve_horizontal(10, 100, 200), 0);
}

#[test]
fn locking_header_pushes_off_continuously() {
    let layout = build_row_config(&two_sections(), 6, false, &CollapsedSections::new());
    let headers = &layout.headers;

    let at = |t: u64| locked_header(headers, t).unwrap();
    assert_eq!(at(0).header_index, 0);
    assert_eq!(at(0).translate_y, 0);
    assert_eq!(at(49).translate_y, 0);
    assert_eq!(at(50).translate_y, 0);
    assert_eq!(at(55).translate_y, 5);
    assert_eq!(at(69).translate_y, 19);
    assert_eq!(at(69).header_index, 0);

    let taken_over = at(70);
    assert_eq!(taken_over.header_index, 1);
    assert_eq!(taken_over.row_index, 6);
    assert_eq!(taken_over.translate_y, 0);
    // The last header never gets pushed.
    assert_eq!(at(139).translate_y, 0);
    assert_eq!(at(5_000).header_index, 1);
}

#[test]
fn single_locking_header_is_always_active() {
    let source = RowSource::Sections(vec![section(0, 20, 30, 10)]);
    let layout = build_row_config(&source, 6, false, &CollapsedSections::new());
    for t in [0u64, 10, 300, 319, 320, 10_000] {
        let h = locked_header(&layout.headers, t).unwrap();
        assert_eq!(h.header_index, 0);
        assert_eq!(h.translate_y, 0);
    }
}

#[test]
fn locking_header_waits_for_its_own_row() {
    let source = RowSource::Sections(vec![
        SectionSpec::new(None, (0..10).map(|i| RowSpec::new(10, i)).collect()),
        section(1, 20, 5, 10),
    ]);
    let layout = build_row_config(&source, 6, false, &CollapsedSections::new());
    assert_eq!(layout.headers[0].offset, 100);
    assert_eq!(layout.headers[0].lock_position, 170);

    for t in [0u64, 50, 99] {
        assert_eq!(locked_header(&layout.headers, t), None);
        assert_eq!(
            position_headers(HeaderMode::Locking, &layout.headers, t, 60),
            HeaderPlacement::None
        );
    }
    for t in [100u64, 150, 170, 500] {
        let h = locked_header(&layout.headers, t).unwrap();
        assert_eq!(h.header_index, 0);
        assert_eq!(h.row_index, 10);
        assert_eq!(h.translate_y, 0);
    }
}

#[test]
fn locking_header_hides_inside_headerless_gap() {
    let source = RowSource::Sections(vec![
        section(0, 20, 5, 10),
        SectionSpec::new(None, (0..5).map(|i| RowSpec::new(10, 500 + i)).collect()),
        section(2, 20, 5, 10),
    ]);
    let layout = build_row_config(&source, 6, false, &CollapsedSections::new());
    assert_eq!(layout.headers[1].offset, 120);

    assert_eq!(locked_header(&layout.headers, 60).map(|h| h.header_index), Some(0));
    assert_eq!(locked_header(&layout.headers, 75), None);
    assert_eq!(locked_header(&layout.headers, 119), None);
    assert_eq!(locked_header(&layout.headers, 120).map(|h| h.header_index), Some(1));
}

#[test]
fn empty_header_table_places_nothing() {
    for mode in [HeaderMode::None, HeaderMode::Locking, HeaderMode::Stacking] {
        assert_eq!(position_headers(mode, &[], 10, 100), HeaderPlacement::None);
    }
    let layout = build_row_config(&two_sections(), 6, false, &CollapsedSections::new());
    assert_eq!(
        position_headers(HeaderMode::None, &layout.headers, 10, 100),
        HeaderPlacement::None
    );
}

#[test]
fn stacking_example_splits_gutters() {
    let layout = build_row_config(&two_sections(), 6, true, &CollapsedSections::new());
    // Every viewport that can scroll to 75 is at most 65 tall.
    for viewport in [20u64, 50, 65] {
        let stacked = stacked_headers(&layout.headers, 75, viewport).unwrap();
        assert_eq!(stacked.top, 0..1);
        assert_eq!(stacked.floating, 1..1);
        assert_eq!(stacked.bottom, 1..2);
        assert_eq!(stacked.gutter_of(0), Some(Gutter::Top));
        assert_eq!(stacked.gutter_of(1), Some(Gutter::Bottom));
    }
    match position_headers(HeaderMode::Stacking, &layout.headers, 75, 50) {
        HeaderPlacement::Stacked(s) => assert_eq!(s.bottom_gutter_start(), 1),
        other => panic!("unexpected placement: {other:?}"),
    }
}

#[test]
fn stacking_evicts_headers_that_fit_above_bottom_gutter() {
    let layout = build_row_config(&two_sections(), 6, true, &CollapsedSections::new());
    let stacked = stacked_headers(&layout.headers, 0, 200).unwrap();
    assert_eq!(stacked.top, 0..0);
    assert_eq!(stacked.floating, 0..2);
    assert!(stacked.bottom.is_empty());

    let mut slots = Vec::new();
    stacked.for_each_slot(&layout.headers, 0, 200, |s| slots.push(s));
    assert_eq!(slots.len(), 2);
    assert_eq!((slots[0].gutter, slots[0].y), (Gutter::Floating, 70));
    assert_eq!((slots[1].gutter, slots[1].y), (Gutter::Floating, 160));

    // Header 1 stays until (160 - t) + 20 drops below the viewport.
    let stacked = stacked_headers(&layout.headers, 0, 180).unwrap();
    assert_eq!(stacked.floating, 0..1);
    assert_eq!(stacked.bottom, 1..2);
    let stacked = stacked_headers(&layout.headers, 0, 181).unwrap();
    assert_eq!(stacked.floating, 0..2);

    let all_passed = stacked_headers(&layout.headers, 140, 50).unwrap();
    assert_eq!(all_passed.top, 0..2);
    assert!(all_passed.floating.is_empty() && all_passed.bottom.is_empty());
}

#[test]
fn stacked_slots_never_overlap() {
    let mut rng = Lcg::new(0x5eed_0004);
    for _ in 0..150 {
        let source = random_source(&mut rng);
        let layout = build_row_config(&source, 6, true, &CollapsedSections::new());
        let Some(last) = layout.headers.last() else {
            continue;
        };
        let total = last.stacked_before() + last.adjust_header_offset as u64;
        let viewport = total + rng.gen_range_u64(1, 400);

        for _ in 0..20 {
            let t = rng.gen_range_u64(0, layout.content_height + 1);
            let stacked = stacked_headers(&layout.headers, t, viewport).unwrap();
            let mut slots = Vec::new();
            stacked.for_each_slot(&layout.headers, t, viewport, |s| slots.push(s));
            assert_eq!(slots.len(), layout.headers.len());

            let mut bottom_edge = 0i64;
            for slot in &slots {
                let height = layout.headers[slot.header_index].height as i64;
                assert!(
                    slot.y >= bottom_edge,
                    "header {} at {} overlaps previous edge {} (t={t}, viewport={viewport})",
                    slot.header_index,
                    slot.y,
                    bottom_edge
                );
                bottom_edge = slot.y + height;
            }
            assert!(bottom_edge <= viewport as i64);
        }
    }
}

#[test]
fn resize_width_follows_side_and_clamps() {
    assert_eq!(resize_width(Side::Left, 10, 100, 50, 80), 130);
    assert_eq!(resize_width(Side::Right, 10, 100, 50, 80), 70);
    assert_eq!(resize_width(Side::Left, 10, 100, 50, 20), 70);
    assert_eq!(resize_width(Side::Right, 10, 100, 50, 20), 130);
    assert_eq!(resize_width(Side::Left, 40, 100, 500, 0), 40);
    assert_eq!(resize_width(Side::Right, 40, 100, 0, i64::MAX), 40);
}

#[test]
fn resize_width_never_below_min_for_random_drags() {
    let mut rng = Lcg::new(0x5eed_0005);
    for _ in 0..500 {
        let side = if rng.gen_bool() { Side::Left } else { Side::Right };
        let min = rng.gen_range_u32(0, 200);
        let base = rng.gen_range_u32(0, 400);
        let start = rng.gen_range_u64(0, 2_000) as i64;
        let current = rng.gen_range_u64(0, 2_000) as i64;
        assert!(resize_width(side, min, base, start, current) >= min);
    }
}

#[test]
fn resize_state_goes_idle_active_idle() {
    let mut state = ResizeState::default();
    assert!(!state.performing());
    assert_eq!(state.update(10), None);
    assert_eq!(state.stop(), None);

    assert!(state.start(Side::Right, 120, 300));
    assert!(state.performing());
    assert!(!state.start(Side::Left, 50, 0), "a second start is ignored");
    assert_eq!(state.gesture().map(|g| g.side), Some(Side::Right));

    let g = state.update(280).unwrap();
    assert_eq!(g.current_position, 280);
    assert_eq!(g.width(0), 140);

    let finished = state.stop().unwrap();
    assert_eq!(finished.base_width, 120);
    assert_eq!(state, ResizeState::Idle);
}

#[test]
fn scrollbars_depend_on_each_other() {
    let bars = ScrollbarThickness::default();
    let viewport = Size::new(100, 100);

    assert_eq!(scrollbars_needed(viewport, Size::new(90, 95), bars), (false, false));
    assert_eq!(scrollbars_needed(viewport, Size::new(90, 120), bars), (true, true));
    assert_eq!(scrollbars_needed(viewport, Size::new(110, 95), bars), (true, true));
    assert_eq!(scrollbars_needed(viewport, Size::new(110, 80), bars), (false, true));
    assert_eq!(scrollbars_needed(viewport, Size::new(80, 120), bars), (true, false));
}

#[test]
fn display_buffer_advances_to_next_partition_multiple() {
    assert_eq!(display_buffer_size(600, 30.0, 6), 36);
    assert_eq!(display_buffer_size(540, 30.0, 6), 36);
    assert_eq!(display_buffer_size(100, 0.0, 6), 18);
    assert_eq!(display_buffer_size(601, 30.0, 6), 36);
    assert_eq!(display_buffer_size(100, 12.5, 4), 20);
}

#[test]
fn recompute_reports_scrollbars_and_buffer() {
    let bars = ScrollbarThickness::default();
    let d = recompute(Size::new(300, 615), Size::new(0, 600), bars, 30.0, 6);
    assert!(!d.should_render_vertical_scrollbar);
    assert!(!d.should_render_horizontal_scrollbar);
    assert_eq!(d.display_buffer_size, 36);

    let d = recompute(Size::new(300, 315), Size::new(400, 600), bars, 30.0, 6);
    assert!(d.should_render_vertical_scrollbar);
    assert!(d.should_render_horizontal_scrollbar);
    // 300 px of rows remain once the horizontal scrollbar is drawn.
    assert_eq!(
        d.contents_size(Size::new(300, 315), bars),
        Size::new(285, 300)
    );
    assert_eq!(d.display_buffer_size, 24);
}

#[test]
fn visible_partitions_cover_display_buffer() {
    let layout = build_row_config(&flat(20, 30), 6, false, &CollapsedSections::new());
    let scroll = ScrollState {
        horizontal_transform: 0,
        vertical_transform: 200,
        top_partition_index: 1,
    };

    let mut out = Vec::new();
    layout.collect_visible_partitions(&scroll, 12, &mut out);
    assert_eq!(
        out,
        vec![
            VisiblePartition {
                index: 1,
                rows: 6..12,
                offset_y: -20,
            },
            VisiblePartition {
                index: 2,
                rows: 12..18,
                offset_y: 160,
            },
        ]
    );

    layout.collect_visible_partitions(&scroll, 36, &mut out);
    assert_eq!(out.len(), 3);
    assert_eq!(out[2].rows, 18..20);
    assert_eq!(out[2].offset_y, 340);

    let empty = build_row_config(&flat(0, 30), 6, false, &CollapsedSections::new());
    empty.collect_visible_partitions(&ScrollState::default(), 36, &mut out);
    assert!(out.is_empty());
}

#[test]
fn row_offsets_follow_partitions() {
    let layout = build_row_config(&two_sections(), 4, false, &CollapsedSections::new());
    assert_eq!(layout.row_offset(0), Some(0));
    assert_eq!(layout.row_offset(5), Some(60));
    assert_eq!(layout.row_offset(6), Some(70));
    assert_eq!(layout.row_offset(11), Some(130));
    assert_eq!(layout.row_offset(12), None);
}

#[test]
fn point_arithmetic() {
    let a = Point::new(10.0, 20.0);
    let b = Point::new(4.0, -6.0);
    assert_eq!(a + b, Point::new(14.0, 14.0));
    assert_eq!(a - b, Point::new(6.0, 26.0));
    assert_eq!((a - b) * 0.5, Point::new(3.0, 13.0));
    assert_eq!(Point::new(2.5, -2.5).round_x(), 3);
    assert_eq!(Point::new(2.5, -2.5).round_y(), -3);
    assert!(Point::ZERO.is_zero());
    assert_eq!(Point::from_transforms(3, 4), Point::new(3.0, 4.0));
}

#[test]
fn easing_curves_hit_endpoints_and_rise() {
    for easing in [
        Easing::Linear,
        Easing::SmoothStep,
        Easing::EaseInOutCubic,
        Easing::EaseOutCubic,
    ] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
        let mut prev = 0.0;
        for step in 1..=100 {
            let v = easing.sample(step as f64 / 100.0);
            assert!(v >= prev, "{easing:?} must be monotonic");
            prev = v;
        }
    }
    assert!(Easing::EaseOutCubic.sample(0.5) > 0.5);
}

#[test]
fn options_sum_content_width_and_thickness() {
    let opts = ScrollableOptions::new()
        .with_left_gutter(Some(GutterConfig::new(30)))
        .with_right_gutter(Some(GutterConfig::new(20).with_handle_width(2)))
        .with_horizontal_scroll(Some(HorizontalScrollConfig {
            content_width: 500,
            scrollbar_height: 12,
        }))
        .with_offset(0);
    assert_eq!(opts.content_width(), 500 + 30 + DEFAULT_HANDLE_WIDTH as u64 + 20 + 2);
    assert_eq!(opts.partition_size(), 1);
    assert_eq!(
        opts.scrollbar_thickness(),
        ScrollbarThickness {
            vertical: DEFAULT_SCROLLBAR_THICKNESS,
            horizontal: 12,
        }
    );
    assert!(opts.gutters.get(Side::Left).is_some());
}

#[cfg(feature = "serde")]
#[test]
fn public_data_types_are_serde() {
    fn assert_serde<T: serde::Serialize + serde::de::DeserializeOwned>() {}
    assert_serde::<HeaderSlot>();
    assert_serde::<StackedHeaders>();
    assert_serde::<HeaderPlacement>();
    assert_serde::<FrameSnapshot>();
    assert_serde::<RowConfig<usize>>();
}
