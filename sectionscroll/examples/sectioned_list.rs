// Example: build a sectioned layout, resolve a scroll offset and list what to mount.
use sectionscroll::{
    CollapsedSections, HeaderMode, RowSource, RowSpec, ScrollState, SectionSpec,
    build_row_config, display_buffer_size, max_scroll, position_headers, resolve,
};

fn main() {
    let sections = (0..50)
        .map(|s| {
            SectionSpec::with_header(
                RowSpec::new(24, format!("Section {s}")),
                (0..8).map(|r| RowSpec::new(18, format!("row {s}.{r}"))).collect(),
            )
        })
        .collect();
    let source = RowSource::Sections(sections);

    let mut collapsed = CollapsedSections::new();
    collapsed.set(3, true);

    let layout = build_row_config(&source, 6, false, &collapsed);
    println!(
        "rows={} partitions={} content_height={} avg_row_height={:.2}",
        layout.rows.len(),
        layout.partitions.len(),
        layout.content_height,
        layout.avg_row_height
    );

    let viewport_height = 400u64;
    let max = max_scroll(layout.content_height, viewport_height);
    let values = resolve(1_234, max, &layout.partitions);
    let mut scroll = ScrollState::default();
    scroll.apply_vertical(values);

    let display = display_buffer_size(viewport_height, layout.avg_row_height, layout.offset);
    println!(
        "t={} top_partition={} display_buffer={display}",
        scroll.vertical_transform, scroll.top_partition_index
    );

    layout.for_each_visible_partition(&scroll, display, |p| {
        let first = &layout.rows[p.rows.start];
        println!(
            "partition {} rows={:?} y={} first={:?}",
            p.index, p.rows, p.offset_y, first.content
        );
    });

    let placement = position_headers(
        HeaderMode::Locking,
        &layout.headers,
        scroll.vertical_transform,
        viewport_height,
    );
    println!("headers={placement:?}");
}
