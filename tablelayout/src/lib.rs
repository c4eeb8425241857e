//! A lazy, incremental layout engine for virtualized tables and lists.
//!
//! The engine computes item frames along a single scroll axis on demand:
//! scrolling only ever pays for the items it newly reveals, while the total
//! content extent is extrapolated from the prefix computed so far. Viewport
//! queries run in logarithmic time over the computed prefix.
//!
//! It is UI-agnostic. A host container is expected to provide:
//! - viewport bounds and the current scroll offset
//! - per-item axis lengths via a size-provider callback
//! - structural change signals (item counts changed, full reload)
//!
//! The crate also ships a small two-phase layout protocol ([`Layout`],
//! [`Measurement`], [`Arrangement`]) for composing layout nodes into trees
//! without a live display surface, together with a wrapping combinator
//! ([`WrapLayout`]) that attaches display-element configuration to a child
//! layout without disturbing its geometry.
//!
//! For host-side driver utilities, see the `tablelayout-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod axis;
mod layout;
mod math;
mod options;
mod search;
mod size;
mod table;
mod types;
mod wrap;


pub use axis::{Axis, AxisPoint, AxisRect, AxisSize};
pub use layout::{
    Alignment, Arrangement, Flex, Flexibility, HorizontalAlignment, Layout, Measurement,
    VerticalAlignment,
};
pub use options::{AxisLengthProvider, ItemCountsProvider, TableOptions};
pub use search::lower_bound;
pub use size::SizeLayout;
pub use table::TableLayout;
pub use types::{ItemFrame, ItemPath, Point, Rect, Size};
pub use wrap::{ConfigureCallback, WrapLayout};
