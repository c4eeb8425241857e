use alloc::sync::Arc;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::{
    Axis, AxisPoint, AxisRect, AxisSize, ItemFrame, ItemPath, Point, Rect, Size, TableOptions,
    math, search,
};

#[cfg(feature = "std")]
type FrameMap = HashMap<ItemPath, Rect>;
#[cfg(not(feature = "std"))]
type FrameMap = BTreeMap<ItemPath, Rect>;

/// An incremental positional index for a virtualized table.
///
/// Item frames are computed lazily, in traversal order, as preparation
/// passes and viewport queries demand them: scrolling only ever pays for
/// the items it newly reveals, while the total content extent is
/// extrapolated from the prefix computed so far.
///
/// This type is headless and single-threaded by design:
/// - It holds no UI objects. A host container drives it with viewport
///   geometry and reads frames back.
/// - Every operation runs to completion on the calling thread; there is no
///   internal locking. Wrap it in a mutex if it must be shared.
#[derive(Clone, Debug)]
pub struct TableLayout {
    options: TableOptions,
    /// Every item identity, in traversal order. `frames` is always a
    /// prefix of this list.
    pending: Vec<ItemPath>,
    /// Computed frames, ascending by axis offset by construction.
    frames: Vec<ItemFrame>,
    frames_by_path: FrameMap,
    cross_extent: f32,
    generation: u64,
}

impl TableLayout {
    /// Creates an engine from options.
    ///
    /// The item identity list is built immediately; no frames are computed
    /// until a preparation pass or query runs.
    pub fn new(options: TableOptions) -> Self {
        let mut layout = Self {
            options,
            pending: Vec::new(),
            frames: Vec::new(),
            frames_by_path: FrameMap::new(),
            cross_extent: 0.0,
            generation: 0,
        };
        layout.rebuild_pending();
        ldebug!(items = layout.pending.len(), "TableLayout::new");
        layout
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Replaces the options, resetting computed state as needed: a provider
    /// change rebuilds the identity list, an axis or spacing change drops
    /// computed frames.
    pub fn set_options(&mut self, options: TableOptions) {
        let axis_changed = self.options.axis != options.axis;
        let spacing_changed = self.options.item_spacing != options.item_spacing;
        let providers_changed = !Arc::ptr_eq(&self.options.axis_length, &options.axis_length)
            || !Arc::ptr_eq(&self.options.item_counts, &options.item_counts);
        self.options = options;
        if providers_changed {
            self.reset_frames();
            self.rebuild_pending();
        } else if axis_changed || spacing_changed {
            self.reset_frames();
        }
    }

    pub fn axis(&self) -> Axis {
        self.options.axis
    }

    pub fn set_axis(&mut self, axis: Axis) {
        if self.options.axis == axis {
            return;
        }
        self.options.axis = axis;
        self.reset_frames();
    }

    pub fn item_spacing(&self) -> f32 {
        self.options.item_spacing
    }

    pub fn set_item_spacing(&mut self, item_spacing: f32) {
        if self.options.item_spacing == item_spacing {
            return;
        }
        self.options.item_spacing = item_spacing;
        self.reset_frames();
    }

    /// Total number of item identities across all sections.
    pub fn item_count(&self) -> usize {
        self.pending.len()
    }

    /// Number of frames computed so far.
    pub fn computed_count(&self) -> usize {
        self.frames.len()
    }

    /// The computed prefix, ascending along the axis.
    pub fn computed_frames(&self) -> &[ItemFrame] {
        &self.frames
    }

    pub fn cross_extent(&self) -> f32 {
        self.cross_extent
    }

    /// Bumped every time computed state is thrown away. Hosts can compare
    /// generations across calls to tell that previously returned frames
    /// are stale.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Axis extent covered by the computed prefix: the trailing edge of the
    /// last computed frame, or 0 when nothing is computed.
    pub fn prepared_axis_length(&self) -> f32 {
        match self.frames.last() {
            Some(entry) => AxisRect::new(self.options.axis, entry.frame).axis_max(),
            None => 0.0,
        }
    }

    /// Updates the cross-axis extent.
    ///
    /// A change drops every computed frame: item sizes depend on the cross
    /// extent, so the next preparation re-measures against the new value.
    pub fn set_cross_extent(&mut self, cross_extent: f32) {
        if self.cross_extent == cross_extent {
            return;
        }
        ldebug!(
            from = self.cross_extent,
            to = cross_extent,
            "cross extent changed"
        );
        self.cross_extent = cross_extent;
        self.reset_frames();
    }

    /// Runs one preparation pass for the host's current bounds and scroll
    /// offset. Call at the start of the host's layout pass.
    ///
    /// Prepares well past the viewport, `max(2 * long_side, 3 * short_side)`
    /// beyond the scroll offset, so that the viewport queries that follow do
    /// not have to extend the computed prefix themselves.
    pub fn prepare_pass(&mut self, bounds: Size, content_offset: Point) {
        let axis = self.options.axis;
        self.set_cross_extent(AxisSize::new(axis, bounds).cross_length());
        if self.cross_extent <= 0.0 {
            return;
        }
        let axis_offset = AxisPoint::new(axis, content_offset).axis_offset().max(0.0);
        let (short, long) = if bounds.width < bounds.height {
            (bounds.width, bounds.height)
        } else {
            (bounds.height, bounds.width)
        };
        self.prepare(axis_offset + (2.0 * long).max(3.0 * short));
    }

    /// Extends the computed prefix until its trailing edge reaches
    /// `target_axis_offset` or every item is computed.
    ///
    /// Does nothing while the cross extent is zero.
    pub fn prepare(&mut self, target_axis_offset: f32) {
        let appended = self.extend_to(target_axis_offset);
        if appended > 0 {
            ltrace!(target_axis_offset, appended, "prepare");
        }
    }

    /// Like [`Self::prepare`], for callers that have already prepared far
    /// enough and only want to query.
    ///
    /// Needing to extend here means the caller's prepared state is
    /// inconsistent with its own query range; that is a caller bug, flagged
    /// as an assertion. Release builds still extend, so queries stay
    /// correct.
    pub fn ensure_prepared(&mut self, target_axis_offset: f32) {
        let appended = self.extend_to(target_axis_offset);
        if appended > 0 {
            lwarn!(
                target_axis_offset,
                appended,
                "ensure_prepared had to extend"
            );
            debug_assert!(
                appended == 0,
                "ensure_prepared had to extend (target={target_axis_offset}, appended={appended})"
            );
        }
    }

    fn extend_to(&mut self, target_axis_offset: f32) -> usize {
        if self.cross_extent <= 0.0 {
            return 0;
        }
        let axis = self.options.axis;
        let mut appended = 0usize;
        while self.prepared_axis_length() < target_axis_offset {
            let Some(&path) = self.pending.get(self.frames.len()) else {
                break;
            };
            let axis_length = (self.options.axis_length)(path, self.cross_extent);
            let axis_offset = match self.frames.last() {
                Some(last) => {
                    AxisRect::new(axis, last.frame).axis_max() + self.options.item_spacing
                }
                None => 0.0,
            };
            let frame =
                AxisRect::from_components(axis, axis_offset, 0.0, axis_length, self.cross_extent)
                    .rect();
            ltrace!(
                section = path.section,
                item = path.item,
                axis_offset,
                axis_length,
                "computed frame"
            );
            self.frames.push(ItemFrame { path, frame });
            self.frames_by_path.insert(path, frame);
            appended += 1;
        }
        appended
    }

    /// Linear extrapolation of the total axis extent: the prepared extent
    /// plus the average computed item extent times the number of items not
    /// yet computed. Zero while nothing is computed.
    ///
    /// Recomputed from current state on every call, never cached, so it
    /// self-corrects as more items are computed and is exact once the
    /// prefix covers the whole item set.
    pub fn estimated_axis_extent(&self) -> f32 {
        let computed = self.frames.len();
        if computed == 0 {
            return 0.0;
        }
        let prepared = self.prepared_axis_length();
        let unknown = (self.pending.len() - computed) as f32;
        prepared + math::ceil(unknown * (prepared / computed as f32))
    }

    /// The size of the whole scrollable content: estimated axis extent by
    /// current cross extent. Zero while the cross extent is unknown.
    pub fn content_size(&self) -> Size {
        if self.cross_extent <= 0.0 {
            return Size::ZERO;
        }
        AxisSize::from_lengths(
            self.options.axis,
            self.estimated_axis_extent(),
            self.cross_extent,
        )
        .size()
    }

    /// Calls `f` for every computed frame intersecting `rect`, in ascending
    /// axis order.
    ///
    /// A query past the prepared extent first extends it (it is not an
    /// error). The scan stops at the first frame past the rect, which is
    /// valid because frames are ordered and never overlap along the axis.
    pub fn for_each_frame_in(&mut self, rect: Rect, mut f: impl FnMut(&ItemFrame)) {
        let axis = self.options.axis;
        let query = AxisRect::new(axis, rect);
        self.prepare(query.axis_max());

        let leading_edge = query.axis_offset();
        let Some(first) = search::lower_bound(&self.frames, |entry| {
            AxisRect::new(axis, entry.frame).axis_max() >= leading_edge
        }) else {
            return;
        };
        for entry in &self.frames[first..] {
            if !entry.frame.intersects(&rect) {
                break;
            }
            f(entry);
        }
    }

    /// Collects the frames intersecting `rect` into `out` (clears `out`
    /// first).
    pub fn collect_frames_in(&mut self, rect: Rect, out: &mut Vec<ItemFrame>) {
        out.clear();
        self.for_each_frame_in(rect, |entry| out.push(*entry));
    }

    /// The computed frame for `path`, or `None` while the item has not been
    /// reached yet (or does not exist).
    pub fn frame_at(&self, path: ItemPath) -> Option<Rect> {
        self.frames_by_path.get(&path).copied()
    }

    /// Drops computed state.
    ///
    /// `structural` means the host's item counts changed: the identity list
    /// is rebuilt from the counts provider and every frame is dropped. A
    /// non-structural invalidation leaves the computed prefix untouched;
    /// cross-extent changes are picked up by [`Self::prepare_pass`] and
    /// [`Self::set_cross_extent`] instead.
    pub fn invalidate(&mut self, structural: bool) {
        if !structural {
            return;
        }
        self.reset_frames();
        self.rebuild_pending();
    }

    fn reset_frames(&mut self) {
        if self.frames.is_empty() {
            // Nothing computed, nothing to go stale.
            return;
        }
        self.frames.clear();
        self.frames_by_path.clear();
        self.generation = self.generation.wrapping_add(1);
        ldebug!(generation = self.generation, "reset computed frames");
    }

    fn rebuild_pending(&mut self) {
        self.pending.clear();
        let counts = (self.options.item_counts)();
        for (section, &count) in counts.iter().enumerate() {
            for item in 0..count {
                self.pending.push(ItemPath::new(section, item));
            }
        }
    }
}
