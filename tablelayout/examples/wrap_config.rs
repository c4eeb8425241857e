// Example: the two-phase layout protocol and the wrapping combinator.
use std::sync::Arc;

use tablelayout::{
    Alignment, Layout, Point, Rect, Size, SizeLayout, WrapLayout,
};

/// Stand-in for a host display element.
#[derive(Debug, Default)]
struct Badge {
    title: String,
}

fn main() {
    let child: Arc<dyn Layout<Badge> + Send + Sync> = Arc::new(
        SizeLayout::new(Size::new(120.0, 32.0)).with_alignment(Alignment::CENTER),
    );

    // Wrapping attaches configuration without touching geometry.
    let wrapped = WrapLayout::with_config(child, |badge: &mut Badge| {
        badge.title = String::from("42 unread");
    });

    let measurement = wrapped.measurement(Size::new(200.0, 200.0));
    println!("measured size={:?}", measurement.size);

    let arrangement = wrapped.arrangement(
        Rect::new(Point::new(16.0, 16.0), Size::new(160.0, 48.0)),
        &measurement,
    );
    println!("wrapper frame={:?}", arrangement.frame);
    println!("child frame={:?}", arrangement.sublayouts[0].frame);

    if wrapped.needs_element() {
        let mut badge = Badge::default();
        wrapped.configure(&mut badge);
        println!("configured element: {badge:?}");
    }
}
