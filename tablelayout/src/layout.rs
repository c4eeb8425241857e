use alloc::vec::Vec;

use crate::{Point, Rect, Size};

/// A two-phase layout node: measure first, arrange second.
///
/// Measuring and arranging are separate passes so a whole subtree can be
/// sized without a live display surface. `E` is the host's display element
/// type; layouts that never touch a display element can leave it at the
/// default `()`.
pub trait Layout<E = ()> {
    /// Measures this node within `max_size`.
    ///
    /// Must be a pure function of `max_size` and the node's own
    /// configuration. May recurse into child layouts.
    fn measurement(&self, max_size: Size) -> Measurement;

    /// Positions this node inside `rect`, given a measurement previously
    /// produced by the same node for a compatible constraint.
    ///
    /// Children are arranged in the node's local coordinate space: their
    /// rects have origins relative to the node's own frame.
    fn arrangement(&self, rect: Rect, measurement: &Measurement) -> Arrangement;

    /// How much the node's measured size may be adjusted per dimension.
    fn flexibility(&self) -> Flexibility {
        Flexibility::DEFAULT
    }

    /// Whether this node needs a live display element once arranged.
    fn needs_element(&self) -> bool {
        false
    }

    /// Configures the display element produced for this node.
    fn configure(&self, _element: &mut E) {}
}

/// The immutable result of measuring a layout node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Measurement {
    /// The size the node chose for itself.
    pub size: Size,
    /// The constraint the node was measured within.
    pub max_size: Size,
    /// Child measurements, in traversal order.
    pub sublayouts: Vec<Measurement>,
}

/// The immutable result of arranging a measured subtree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Arrangement {
    /// The node's final frame inside its parent's coordinate space.
    pub frame: Rect,
    /// Child arrangements, in traversal order.
    pub sublayouts: Vec<Arrangement>,
}

/// A per-dimension flex value.
///
/// `None` means the dimension is rigid. Among flexible nodes, a higher
/// value yields first when a container reconciles sibling sizes.
pub type Flex = Option<i32>;

/// How much a node's measured size may shrink or grow per dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Flexibility {
    pub horizontal: Flex,
    pub vertical: Flex,
}

impl Flexibility {
    /// Rigid in both dimensions.
    pub const INFLEXIBLE: Self = Self::new(None, None);
    /// Yields before default-flex siblings.
    pub const LOW: Self = Self::new(Some(-1000), Some(-1000));
    pub const DEFAULT: Self = Self::new(Some(0), Some(0));
    /// Holds out longer than default-flex siblings.
    pub const HIGH: Self = Self::new(Some(1000), Some(1000));

    pub const fn new(horizontal: Flex, vertical: Flex) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Positions a measured size inside an available rect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alignment {
    pub horizontal: HorizontalAlignment,
    pub vertical: VerticalAlignment,
}

impl Alignment {
    /// Stretch to the full available rect in both dimensions.
    pub const FILL: Self = Self::new(HorizontalAlignment::Fill, VerticalAlignment::Fill);
    pub const CENTER: Self = Self::new(HorizontalAlignment::Center, VerticalAlignment::Center);
    pub const TOP_LEADING: Self = Self::new(HorizontalAlignment::Leading, VerticalAlignment::Top);
    pub const BOTTOM_TRAILING: Self =
        Self::new(HorizontalAlignment::Trailing, VerticalAlignment::Bottom);

    pub const fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Positions `size` inside `rect` according to both components.
    pub fn position(&self, size: Size, rect: Rect) -> Rect {
        let (x, width) = self
            .horizontal
            .align(size.width, rect.origin.x, rect.size.width);
        let (y, height) = self
            .vertical
            .align(size.height, rect.origin.y, rect.size.height);
        Rect::new(Point::new(x, y), Size::new(width, height))
    }
}

/// Alignment along the horizontal dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalAlignment {
    Leading,
    Center,
    Trailing,
    /// Stretch to the full available width.
    Fill,
}

impl HorizontalAlignment {
    /// Returns the aligned `(offset, length)` for a content length inside
    /// the available span starting at `available_offset`.
    pub fn align(&self, length: f32, available_offset: f32, available: f32) -> (f32, f32) {
        match self {
            Self::Leading => (available_offset, length),
            Self::Center => (available_offset + (available - length) / 2.0, length),
            Self::Trailing => (available_offset + available - length, length),
            Self::Fill => (available_offset, available),
        }
    }
}

/// Alignment along the vertical dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalAlignment {
    Top,
    Center,
    Bottom,
    /// Stretch to the full available height.
    Fill,
}

impl VerticalAlignment {
    /// Returns the aligned `(offset, length)` for a content length inside
    /// the available span starting at `available_offset`.
    pub fn align(&self, length: f32, available_offset: f32, available: f32) -> (f32, f32) {
        match self {
            Self::Top => (available_offset, length),
            Self::Center => (available_offset + (available - length) / 2.0, length),
            Self::Bottom => (available_offset + available - length, length),
            Self::Fill => (available_offset, available),
        }
    }
}
