use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use crate::wrap::ConfigureCallback;
use crate::{Alignment, Arrangement, Flexibility, Layout, Measurement, Rect, Size};

/// A leaf layout that wants a fixed size.
///
/// The produced size is the requested size clamped to the measurement
/// constraint. Both dimensions are rigid by default; pass a different
/// [`Flexibility`] when the node should yield to siblings.
pub struct SizeLayout<E = ()> {
    size: Size,
    flexibility: Flexibility,
    alignment: Alignment,
    config: Option<ConfigureCallback<E>>,
}

impl<E> SizeLayout<E> {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            flexibility: Flexibility::INFLEXIBLE,
            alignment: Alignment::FILL,
            config: None,
        }
    }

    pub fn with_flexibility(mut self, flexibility: Flexibility) -> Self {
        self.flexibility = flexibility;
        self
    }

    /// How the measured size is positioned inside the arranged rect.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_config(mut self, config: impl Fn(&mut E) + Send + Sync + 'static) -> Self {
        self.config = Some(Arc::new(config));
        self
    }
}

impl<E> Layout<E> for SizeLayout<E> {
    fn measurement(&self, max_size: Size) -> Measurement {
        let size = Size::new(
            self.size.width.min(max_size.width),
            self.size.height.min(max_size.height),
        );
        Measurement {
            size,
            max_size,
            sublayouts: Vec::new(),
        }
    }

    fn arrangement(&self, rect: Rect, measurement: &Measurement) -> Arrangement {
        Arrangement {
            frame: self.alignment.position(measurement.size, rect),
            sublayouts: Vec::new(),
        }
    }

    fn flexibility(&self) -> Flexibility {
        self.flexibility
    }

    fn needs_element(&self) -> bool {
        self.config.is_some()
    }

    fn configure(&self, element: &mut E) {
        if let Some(config) = &self.config {
            config(element);
        }
    }
}

impl<E> Clone for SizeLayout<E> {
    fn clone(&self) -> Self {
        Self {
            size: self.size,
            flexibility: self.flexibility,
            alignment: self.alignment,
            config: self.config.clone(),
        }
    }
}

impl<E> fmt::Debug for SizeLayout<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SizeLayout")
            .field("size", &self.size)
            .field("flexibility", &self.flexibility)
            .field("alignment", &self.alignment)
            .field("configured", &self.config.is_some())
            .finish_non_exhaustive()
    }
}
