// Example: simulate a host container driving the controller across scroll
// events and a data reload.
use std::sync::{Arc, Mutex};

use tablelayout::{Size, TableOptions};
use tablelayout_adapter::{Controller, HostBounds};

fn main() {
    let bounds = Arc::new(Mutex::new(HostBounds {
        size: Size::new(320.0, 568.0),
        content_offset: Default::default(),
    }));

    let row_count = Arc::new(Mutex::new(10_000usize));
    let counts = Arc::clone(&row_count);
    let provider = Arc::clone(&bounds);
    let mut controller = Controller::new(
        TableOptions::new(
            move || vec![*counts.lock().unwrap()],
            // Rows alternate between two heights.
            |path, _| if path.item % 2 == 0 { 44.0 } else { 60.0 },
        )
        .with_item_spacing(1.0),
        move || *provider.lock().unwrap(),
    );

    let mut visible = Vec::new();
    for frame_number in 0u32..5 {
        // The host scrolls a bit each frame, then runs a layout pass.
        bounds.lock().unwrap().content_offset.y = frame_number as f32 * 500.0;
        let content = controller.prepare_pass();
        controller.visible_frames(&mut visible);
        println!(
            "frame {frame_number}: content_height={:.0} computed={} visible={}..{}",
            content.height,
            controller.layout().computed_count(),
            visible.first().map(|e| e.path.item).unwrap_or_default(),
            visible.last().map(|e| e.path.item).unwrap_or_default(),
        );
    }

    // The data set shrinks; the host forwards the signal and re-renders.
    *row_count.lock().unwrap() = 100;
    controller.items_changed();
    assert!(controller.check_reset());
    bounds.lock().unwrap().content_offset.y = 0.0;
    let content = controller.prepare_pass();
    controller.visible_frames(&mut visible);
    println!(
        "after reload: content_height={:.0} visible_len={}",
        content.height,
        visible.len()
    );
}
