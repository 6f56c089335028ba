use sectionscroll::{
    HeaderMode, HeaderPlacement, RowSource, RowSpec, ScrollableOptions, SectionSpec, Size,
};
use sectionscroll_adapter::Scrollable;

fn main() {
    // Example: a controller animating to a section header without holding any UI objects.
    //
    // An adapter would:
    // - forward viewport size, wheel and scrollbar events
    // - call tick(now_ms) in a frame loop / timer
    // - re-render visible partitions and the header overlay whenever tick returns a new state
    let sections = (0..20)
        .map(|s| {
            SectionSpec::with_header(
                RowSpec::new(28, format!("Section {s}")),
                (0..12).map(|r| RowSpec::new(20, format!("item {s}.{r}"))).collect(),
            )
        })
        .collect();

    let options = ScrollableOptions::new()
        .with_header_mode(HeaderMode::Locking)
        .with_scroll_duration_ms(240);
    let mut list = Scrollable::new(options, RowSource::Sections(sections));
    list.set_viewport(Size::new(320, 480));

    let Some(ticket) = list.scroll_to_header(7, 0) else {
        return;
    };
    println!("target={:?}", ticket.target);

    let mut now_ms = 0u64;
    while list.is_animating() {
        now_ms += 16;
        let Some(state) = list.tick(now_ms) else {
            continue;
        };
        if now_ms % 80 == 0 {
            println!(
                "t={now_ms} y={} top_partition={}",
                state.vertical_transform, state.top_partition_index
            );
        }
    }

    if let HeaderPlacement::Locked(h) = list.header_placement() {
        println!("locked header={} translate_y={}", h.header_index, h.translate_y);
    }

    let mut partitions = Vec::new();
    list.collect_visible_partitions(&mut partitions);
    println!("done: {:?}", list.frame_snapshot().scroll);
    println!("mounted partitions={}", partitions.len());
}
