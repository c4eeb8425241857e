// Example: minimal incremental table usage.
use tablelayout::{ItemFrame, Point, Rect, Size, TableLayout, TableOptions};

fn main() {
    // One million rows, each 44 units tall, 8 units apart.
    let mut table = TableLayout::new(
        TableOptions::new(|| vec![1_000_000], |_, _| 44.0).with_item_spacing(8.0),
    );

    // A layout pass for a 390x844 viewport scrolled to offset 10_000.
    table.prepare_pass(Size::new(390.0, 844.0), Point::new(0.0, 10_000.0));
    println!("computed={} of {}", table.computed_count(), table.item_count());
    println!("content_size={:?}", table.content_size());

    // Which rows are on screen right now?
    let mut visible = Vec::new();
    table.collect_frames_in(
        Rect::new(Point::new(0.0, 10_000.0), Size::new(390.0, 844.0)),
        &mut visible,
    );
    println!("visible_len={}", visible.len());
    if let Some(ItemFrame { path, frame }) = visible.first() {
        println!("first visible: section={} item={} frame={frame:?}", path.section, path.item);
    }

    // Jumping far ahead extends the computed prefix up to the new window.
    table.prepare_pass(Size::new(390.0, 844.0), Point::new(0.0, 500_000.0));
    println!("after jump: computed={}", table.computed_count());
}
