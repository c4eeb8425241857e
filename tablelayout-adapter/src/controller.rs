use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use tablelayout::{AxisRect, ItemFrame, Point, Rect, Size, TableLayout, TableOptions};

/// Viewport geometry read from the host container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HostBounds {
    pub size: Size,
    pub content_offset: Point,
}

/// Reads the host container's current bounds and scroll offset.
///
/// The engine never owns the host. This is the injected collaborator the
/// controller polls at the start of every preparation pass, so a host
/// change is picked up on the next pass without any registration protocol.
pub type BoundsProvider = Arc<dyn Fn() -> HostBounds + Send + Sync>;

/// Drives a [`TableLayout`] from a host container.
///
/// The host is expected to call [`Controller::prepare_pass`] whenever its
/// layout is invalidated (scroll, resize), then read frames back via
/// [`Controller::visible_frames`] or the engine's query API.
pub struct Controller {
    layout: TableLayout,
    bounds: BoundsProvider,
    seen_generation: u64,
}

impl Controller {
    pub fn new(
        options: TableOptions,
        bounds: impl Fn() -> HostBounds + Send + Sync + 'static,
    ) -> Self {
        let layout = TableLayout::new(options);
        let seen_generation = layout.generation();
        Self {
            layout,
            bounds: Arc::new(bounds),
            seen_generation,
        }
    }

    pub fn layout(&self) -> &TableLayout {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut TableLayout {
        &mut self.layout
    }

    /// Runs a preparation pass against the host's current bounds and
    /// returns the content size to report back to the container.
    pub fn prepare_pass(&mut self) -> Size {
        let host = (self.bounds)();
        self.layout.prepare_pass(host.size, host.content_offset);
        self.layout.content_size()
    }

    /// Collects the frames currently visible in the host viewport into
    /// `out` (clears `out` first).
    ///
    /// Expects a prior [`Self::prepare_pass`] for the same bounds: the
    /// preparation window always covers the viewport, so the query itself
    /// must not have to extend the computed prefix.
    pub fn visible_frames(&mut self, out: &mut Vec<ItemFrame>) {
        let host = (self.bounds)();
        let viewport = Rect::new(host.content_offset, host.size);
        let trailing = AxisRect::new(self.layout.axis(), viewport).axis_max();
        self.layout.ensure_prepared(trailing);
        self.layout.collect_frames_in(viewport, out);
    }

    /// The host's item counts changed. Rebuilds the identity list and
    /// drops every computed frame.
    pub fn items_changed(&mut self) {
        self.layout.invalidate(true);
    }

    /// Full reload signal from the host. Equivalent to a count change:
    /// identities are rebuilt and computed state is dropped.
    pub fn reload(&mut self) {
        self.layout.invalidate(true);
    }

    /// True when computed state was reset since the last call, meaning any
    /// frames the host cached are stale and must be re-queried.
    pub fn check_reset(&mut self) -> bool {
        let generation = self.layout.generation();
        let reset = generation != self.seen_generation;
        self.seen_generation = generation;
        reset
    }
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("layout", &self.layout)
            .field("seen_generation", &self.seen_generation)
            .finish_non_exhaustive()
    }
}
