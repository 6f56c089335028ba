use std::sync::{Arc, Mutex};

use sectionscroll::{GutterConfig, RowSource, RowSpec, ScrollableOptions, Side, Size};
use sectionscroll_adapter::Scrollable;

fn main() {
    // Example: drag-resizing a gutter. The host owns the width and feeds it back via options.
    let width = Arc::new(Mutex::new(120u32));
    let gutter = GutterConfig::new(120).with_min_width(40).with_on_gutter_resize(Some({
        let width = Arc::clone(&width);
        move |w: u32| {
            if let Ok(mut slot) = width.lock() {
                *slot = w;
            }
        }
    }));

    let rows = (0..100).map(|i| RowSpec::new(22, i)).collect();
    let options = ScrollableOptions::new().with_left_gutter(Some(gutter));
    let mut list = Scrollable::new(options, RowSource::Flat(rows));
    list.set_viewport(Size::new(640, 400));

    if let Err(err) = list.start_resize(Side::Right, 0) {
        println!("rejected: {err}");
    }

    if let Err(err) = list.start_resize(Side::Left, 300) {
        println!("unexpected: {err}");
        return;
    }
    for x in [320, 360, 200, 100] {
        println!("pointer={x} width={:?}", list.on_resize_move(x));
    }
    let gesture = list.stop_resize();
    println!("gesture={gesture:?}");

    let final_width = width.lock().map(|w| *w).unwrap_or_default();
    list.update_options(|o| {
        if let Some(g) = o.gutters.left.as_mut() {
            g.width = final_width;
        }
    });
    println!("left gutter width={final_width}");
}
