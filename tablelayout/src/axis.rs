use crate::{Point, Rect, Size};

/// The scroll axis of a table.
///
/// Vertical tables stack items top to bottom, horizontal tables stack them
/// leading to trailing. The axis decides which absolute dimension is the
/// "axis" component and which is the "cross" component, so that placement
/// logic can be written once for both orientations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// An [`Axis`]-relative view over a [`Point`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisPoint {
    axis: Axis,
    point: Point,
}

impl AxisPoint {
    pub const fn new(axis: Axis, point: Point) -> Self {
        Self { axis, point }
    }

    /// Builds the absolute point whose axis/cross offsets are the given
    /// values.
    pub fn from_offsets(axis: Axis, axis_offset: f32, cross_offset: f32) -> Self {
        let point = match axis {
            Axis::Horizontal => Point::new(axis_offset, cross_offset),
            Axis::Vertical => Point::new(cross_offset, axis_offset),
        };
        Self { axis, point }
    }

    /// Offset along the scroll axis.
    pub fn axis_offset(&self) -> f32 {
        match self.axis {
            Axis::Horizontal => self.point.x,
            Axis::Vertical => self.point.y,
        }
    }

    /// Offset along the cross axis.
    pub fn cross_offset(&self) -> f32 {
        match self.axis {
            Axis::Horizontal => self.point.y,
            Axis::Vertical => self.point.x,
        }
    }

    pub const fn point(&self) -> Point {
        self.point
    }
}

/// An [`Axis`]-relative view over a [`Size`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisSize {
    axis: Axis,
    size: Size,
}

impl AxisSize {
    pub const fn new(axis: Axis, size: Size) -> Self {
        Self { axis, size }
    }

    /// Builds the absolute size whose axis/cross lengths are the given
    /// values.
    pub fn from_lengths(axis: Axis, axis_length: f32, cross_length: f32) -> Self {
        let size = match axis {
            Axis::Horizontal => Size::new(axis_length, cross_length),
            Axis::Vertical => Size::new(cross_length, axis_length),
        };
        Self { axis, size }
    }

    /// Extent along the scroll axis.
    pub fn axis_length(&self) -> f32 {
        match self.axis {
            Axis::Horizontal => self.size.width,
            Axis::Vertical => self.size.height,
        }
    }

    /// Extent along the cross axis.
    pub fn cross_length(&self) -> f32 {
        match self.axis {
            Axis::Horizontal => self.size.height,
            Axis::Vertical => self.size.width,
        }
    }

    pub const fn size(&self) -> Size {
        self.size
    }
}

/// An [`Axis`]-relative view over a [`Rect`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRect {
    axis: Axis,
    rect: Rect,
}

impl AxisRect {
    pub const fn new(axis: Axis, rect: Rect) -> Self {
        Self { axis, rect }
    }

    /// Builds the absolute rect from axis-relative origin and lengths.
    pub fn from_components(
        axis: Axis,
        axis_offset: f32,
        cross_offset: f32,
        axis_length: f32,
        cross_length: f32,
    ) -> Self {
        let origin = AxisPoint::from_offsets(axis, axis_offset, cross_offset).point();
        let size = AxisSize::from_lengths(axis, axis_length, cross_length).size();
        Self {
            axis,
            rect: Rect::new(origin, size),
        }
    }

    /// Leading edge along the scroll axis.
    pub fn axis_offset(&self) -> f32 {
        AxisPoint::new(self.axis, self.rect.origin).axis_offset()
    }

    /// Offset along the cross axis.
    pub fn cross_offset(&self) -> f32 {
        AxisPoint::new(self.axis, self.rect.origin).cross_offset()
    }

    /// Extent along the scroll axis.
    pub fn axis_length(&self) -> f32 {
        AxisSize::new(self.axis, self.rect.size).axis_length()
    }

    /// Extent along the cross axis.
    pub fn cross_length(&self) -> f32 {
        AxisSize::new(self.axis, self.rect.size).cross_length()
    }

    /// Trailing edge along the scroll axis.
    pub fn axis_max(&self) -> f32 {
        self.axis_offset() + self.axis_length()
    }

    pub const fn rect(&self) -> Rect {
        self.rect
    }
}
