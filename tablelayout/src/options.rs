use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use crate::{Axis, ItemPath};

/// The size provider: given an item identity and the current cross-axis
/// extent, returns the axis length the item needs.
///
/// Must be a pure function of its inputs. It is called once per item per
/// computation and its results are not memoized here; cache inside the
/// provider when measuring is expensive.
pub type AxisLengthProvider = Arc<dyn Fn(ItemPath, f32) -> f32 + Send + Sync>;

/// Returns the current number of items in each section.
///
/// Re-read on structural invalidation, so it must reflect the host's
/// current data set whenever it is called.
pub type ItemCountsProvider = Arc<dyn Fn() -> Vec<usize> + Send + Sync>;

/// Configuration for [`crate::TableLayout`].
///
/// Cheap to clone: the providers are stored in `Arc`s, so adapters can
/// update a field and call `TableLayout::set_options` without reallocating
/// closures.
pub struct TableOptions {
    /// The scroll axis items are stacked along.
    pub axis: Axis,
    /// Fixed spacing between consecutive items along the axis.
    pub item_spacing: f32,
    pub axis_length: AxisLengthProvider,
    pub item_counts: ItemCountsProvider,
}

impl TableOptions {
    /// Creates options for a vertical table with no inter-item spacing.
    ///
    /// `item_counts()` returns the per-section item counts;
    /// `axis_length(path, cross_extent)` returns the axis length the item
    /// at `path` needs when laid out against `cross_extent`.
    pub fn new(
        item_counts: impl Fn() -> Vec<usize> + Send + Sync + 'static,
        axis_length: impl Fn(ItemPath, f32) -> f32 + Send + Sync + 'static,
    ) -> Self {
        Self {
            axis: Axis::Vertical,
            item_spacing: 0.0,
            axis_length: Arc::new(axis_length),
            item_counts: Arc::new(item_counts),
        }
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_item_spacing(mut self, item_spacing: f32) -> Self {
        self.item_spacing = item_spacing;
        self
    }

    pub fn with_axis_length(
        mut self,
        axis_length: impl Fn(ItemPath, f32) -> f32 + Send + Sync + 'static,
    ) -> Self {
        self.axis_length = Arc::new(axis_length);
        self
    }

    pub fn with_item_counts(
        mut self,
        item_counts: impl Fn() -> Vec<usize> + Send + Sync + 'static,
    ) -> Self {
        self.item_counts = Arc::new(item_counts);
        self
    }
}

impl Clone for TableOptions {
    fn clone(&self) -> Self {
        Self {
            axis: self.axis,
            item_spacing: self.item_spacing,
            axis_length: Arc::clone(&self.axis_length),
            item_counts: Arc::clone(&self.item_counts),
        }
    }
}

impl fmt::Debug for TableOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableOptions")
            .field("axis", &self.axis)
            .field("item_spacing", &self.item_spacing)
            .finish_non_exhaustive()
    }
}
