/*!
Pixel grid to complex plane mappings.

Two addressing schemes are supported:

* [`ResolutionMapper`] discretizes the plane at a fixed number of pixels per unit
  interval. Pixel indices are integers already scaled by the resolution, so the
  complex number for an index is just `index / resolution` on each axis.
* [`PixelCountMapper`] spreads a requested number of real-axis pixels over the
  window and derives the imaginary-axis pixel count from the window's aspect ratio.

Both are exposed to the grid through [`RegionMapper`], which addresses pixels by
grid position: `column` grows left to right, `row` grows top to bottom.
*/

use clap::ValueEnum;
use log::debug;
use num_complex::Complex64;

use crate::{
    error::ConfigError,
    screen::{ComplexWindow, Size},
};

pub trait RegionMapper: Sync {
    fn size(&self) -> Size;

    /// The complex number under the pixel at (`column`, `row`).
    fn point(&self, column: u32, row: u32) -> Complex64;
}

fn grid_dimension(pixels: f64, width: f64, height: f64) -> Result<u32, ConfigError> {
    if pixels > u32::MAX as f64 {
        Err(ConfigError::GridTooLarge { width, height })
    } else {
        Ok(pixels as u32)
    }
}

/// The grid holds one `i32` per pixel; its byte size must fit in an allocation.
fn check_cells(width: u32, height: u32) -> Result<(), ConfigError> {
    let fits = (width as usize)
        .checked_mul(height as usize)
        .and_then(|cells| cells.checked_mul(std::mem::size_of::<i32>()))
        .is_some_and(|bytes| bytes <= isize::MAX as usize);
    if fits {
        Ok(())
    } else {
        Err(ConfigError::GridTooLarge {
            width: width as f64,
            height: height as f64,
        })
    }
}

/// Fixed pixels-per-unit addressing. The top row holds the largest imaginary value.
#[derive(Clone, Debug)]
pub struct ResolutionMapper {
    resolution: u32,
    re_min: i64,
    re_max: i64,
    im_min: i64,
    im_max: i64,
}

impl ResolutionMapper {
    pub fn new(window: &ComplexWindow, resolution: u32) -> Result<Self, ConfigError> {
        if resolution == 0 {
            return Err(ConfigError::ZeroResolution);
        }

        let scale = |value: f64| (value * resolution as f64).floor();
        let (re_min, re_max) = (scale(window.re_min()), scale(window.re_max()));
        let (im_min, im_max) = (scale(window.im_min()), scale(window.im_max()));

        let width = re_max - re_min + 1.0;
        let height = im_max - im_min + 1.0;
        check_cells(
            grid_dimension(width, width, height)?,
            grid_dimension(height, width, height)?,
        )?;

        debug!(
            "resolution {}: real indices {}..={}, imaginary indices {}..={}",
            resolution, re_min, re_max, im_min, im_max
        );

        Ok(Self {
            resolution,
            re_min: re_min as i64,
            re_max: re_max as i64,
            im_min: im_min as i64,
            im_max: im_max as i64,
        })
    }

    /// Complex number for pre-scaled integer indices.
    pub fn map_pixel_to_complex(&self, re_index: i64, im_index: i64) -> Complex64 {
        let resolution = self.resolution as f64;
        Complex64::new(re_index as f64 / resolution, im_index as f64 / resolution)
    }

    pub fn re_indices(&self) -> std::ops::RangeInclusive<i64> {
        self.re_min..=self.re_max
    }

    pub fn im_indices(&self) -> std::ops::RangeInclusive<i64> {
        self.im_min..=self.im_max
    }
}

impl RegionMapper for ResolutionMapper {
    fn size(&self) -> Size {
        Size {
            width: (self.re_max - self.re_min + 1) as u32,
            height: (self.im_max - self.im_min + 1) as u32,
        }
    }

    fn point(&self, column: u32, row: u32) -> Complex64 {
        self.map_pixel_to_complex(self.re_min + column as i64, self.im_max - row as i64)
    }
}

/// Which end of the imaginary axis sits on the top row of the grid.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VerticalAxis {
    /// Row 0 is `im_max`, the usual screen orientation.
    #[default]
    TopIsMax,
    /// Row 0 is `im_min`; the image comes out mirrored top to bottom.
    TopIsMin,
}

/// Requested real-axis pixel count, imaginary-axis count derived from the aspect ratio.
#[derive(Clone, Debug)]
pub struct PixelCountMapper {
    window: ComplexWindow,
    re_pixels: u32,
    im_pixels: u32,
    vertical: VerticalAxis,
}

impl PixelCountMapper {
    pub fn new(
        window: &ComplexWindow,
        re_pixels: u32,
        vertical: VerticalAxis,
    ) -> Result<Self, ConfigError> {
        if re_pixels == 0 {
            return Err(ConfigError::ZeroPixels);
        }

        let height = (re_pixels as f64 * window.aspect_ratio()).round();
        let im_pixels = grid_dimension(height, re_pixels as f64, height)?;
        if im_pixels == 0 {
            return Err(ConfigError::ZeroDerivedPixels { re_pixels });
        }
        check_cells(re_pixels, im_pixels)?;

        debug!(
            "{}x{} pixels over {:?}, {:?}",
            re_pixels, im_pixels, window, vertical
        );

        Ok(Self {
            window: *window,
            re_pixels,
            im_pixels,
            vertical,
        })
    }

    /// `(0, 0)` is the top-left corner and `(re_pixels, im_pixels)` the opposite one.
    pub fn map_pixel_to_complex(&self, re_index: u32, im_index: u32) -> Complex64 {
        let re = (re_index as f64 / self.re_pixels as f64) * self.window.re_range()
            + self.window.re_min();
        let im_offset = (im_index as f64 / self.im_pixels as f64) * self.window.im_range();
        let im = match self.vertical {
            VerticalAxis::TopIsMax => self.window.im_max() - im_offset,
            VerticalAxis::TopIsMin => self.window.im_min() + im_offset,
        };
        Complex64::new(re, im)
    }
}

impl RegionMapper for PixelCountMapper {
    fn size(&self) -> Size {
        Size {
            width: self.re_pixels,
            height: self.im_pixels,
        }
    }

    fn point(&self, column: u32, row: u32) -> Complex64 {
        self.map_pixel_to_complex(column, row)
    }
}
