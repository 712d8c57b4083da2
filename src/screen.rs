use bytemuck::{Pod, Zeroable};

use crate::error::ConfigError;

#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Rectangular region of the complex plane. `re_min < re_max` and `im_min < im_max` always hold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComplexWindow {
    re_min: f64,
    re_max: f64,
    im_min: f64,
    im_max: f64,
}

impl ComplexWindow {
    pub fn new(re_min: f64, re_max: f64, im_min: f64, im_max: f64) -> Result<Self, ConfigError> {
        // Written as negations so that NaN bounds are rejected too.
        if !(re_min < re_max) || !(re_max - re_min).is_finite() {
            return Err(ConfigError::EmptyRealRange {
                min: re_min,
                max: re_max,
            });
        }
        if !(im_min < im_max) || !(im_max - im_min).is_finite() {
            return Err(ConfigError::EmptyImaginaryRange {
                min: im_min,
                max: im_max,
            });
        }
        Ok(Self {
            re_min,
            re_max,
            im_min,
            im_max,
        })
    }

    pub fn re_min(&self) -> f64 {
        self.re_min
    }

    pub fn re_max(&self) -> f64 {
        self.re_max
    }

    pub fn im_min(&self) -> f64 {
        self.im_min
    }

    pub fn im_max(&self) -> f64 {
        self.im_max
    }

    pub fn re_range(&self) -> f64 {
        self.re_max - self.re_min
    }

    pub fn im_range(&self) -> f64 {
        self.im_max - self.im_min
    }

    /// Height over width.
    pub fn aspect_ratio(&self) -> f64 {
        self.im_range() / self.re_range()
    }
}

impl Default for ComplexWindow {
    fn default() -> Self {
        Self {
            re_min: -2.0,
            re_max: 0.5,
            im_min: -1.0,
            im_max: 1.0,
        }
    }
}
