use alloc::sync::Arc;
use alloc::vec;
use core::fmt;

use crate::{Alignment, Arrangement, Flexibility, Layout, Measurement, Rect, Size};

/// A callback applied to the display element produced for a layout node.
pub type ConfigureCallback<E> = Arc<dyn Fn(&mut E) + Send + Sync>;

/// A layout that transparently wraps another layout.
///
/// Measurement and arrangement delegate entirely to the child: the wrapper
/// reports the child's size, fills the rect it is arranged in, and carries
/// exactly one sublayout. Its job is to attach a post-creation
/// configuration step to an existing layout without disturbing geometry.
pub struct WrapLayout<E = ()> {
    child: Arc<dyn Layout<E> + Send + Sync>,
    config: Option<ConfigureCallback<E>>,
}

impl<E> WrapLayout<E> {
    /// Wraps `child` without a configuration step. The wrapper then needs
    /// no display element of its own.
    pub fn new(child: Arc<dyn Layout<E> + Send + Sync>) -> Self {
        Self {
            child,
            config: None,
        }
    }

    /// Wraps `child` and applies `config` to the display element produced
    /// for the wrapper.
    pub fn with_config(
        child: Arc<dyn Layout<E> + Send + Sync>,
        config: impl Fn(&mut E) + Send + Sync + 'static,
    ) -> Self {
        Self {
            child,
            config: Some(Arc::new(config)),
        }
    }
}

impl<E> Layout<E> for WrapLayout<E> {
    fn measurement(&self, max_size: Size) -> Measurement {
        let child = self.child.measurement(max_size);
        Measurement {
            size: child.size,
            max_size,
            sublayouts: vec![child],
        }
    }

    fn arrangement(&self, rect: Rect, measurement: &Measurement) -> Arrangement {
        let frame = Alignment::FILL.position(measurement.size, rect);
        let child_rect = Rect::from_size(frame.size);
        let sublayouts = measurement
            .sublayouts
            .iter()
            .map(|child| self.child.arrangement(child_rect, child))
            .collect();
        Arrangement { frame, sublayouts }
    }

    fn flexibility(&self) -> Flexibility {
        self.child.flexibility()
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

impl<E> Clone for WrapLayout<E> {
    fn clone(&self) -> Self {
        Self {
            child: Arc::clone(&self.child),
            config: self.config.clone(),
        }
    }
}

impl<E> fmt::Debug for WrapLayout<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WrapLayout")
            .field("configured", &self.config.is_some())
            .finish_non_exhaustive()
    }
}
