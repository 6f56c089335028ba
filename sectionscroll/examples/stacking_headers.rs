// Example: stacking headers collect in top and bottom gutters as the list scrolls.
use sectionscroll::{
    CollapsedSections, RowSource, RowSpec, SectionSpec, build_row_config, stacked_headers,
};

fn main() {
    let sections = (0..6)
        .map(|s| {
            SectionSpec::with_header(
                RowSpec::new(20, s * 100),
                (1..=5).map(|r| RowSpec::new(10, s * 100 + r)).collect(),
            )
        })
        .collect();
    let layout = build_row_config(
        &RowSource::Sections(sections),
        6,
        true,
        &CollapsedSections::new(),
    );

    for h in &layout.headers {
        println!(
            "header row={} offset={} lock={} real_offset={} stacked_before={}",
            h.row_index,
            h.offset,
            h.lock_position,
            h.real_offset,
            h.stacked_before()
        );
    }

    let viewport_height = 200u64;
    for t in (0..=layout.content_height).step_by(70) {
        let Some(stacked) = stacked_headers(&layout.headers, t, viewport_height) else {
            continue;
        };
        print!("t={t:>3} top={:?} bottom={:?} |", stacked.top, stacked.bottom);
        stacked.for_each_slot(&layout.headers, t, viewport_height, |slot| {
            print!(" #{}:{:?}@{}", slot.header_index, slot.gutter, slot.y);
        });
        println!();
    }
}
