//! Colouring algorithms.
//!
//! A colour table maps an escape iteration directly to a display colour. Points
//! that never escaped are always black and never look the table up.

use bytemuck::{Pod, Zeroable};
use log::trace;

use crate::{error::ConfigError, escape::IN_SET};

/// [`bytemuck`]-compatible 24-bit colour.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Colour { r: 0, g: 0, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#RRGGBB`, upper-case hex digits.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Convert a hue/saturation/value triple in `[0, 1]` to red/green/blue in `[0, 1]`.
///
/// Hue is cyclic; values outside `[0, 1)` wrap around the colour wheel.
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> (f64, f64, f64) {
    if saturation == 0.0 {
        return (value, value, value);
    }

    let scaled = hue * 6.0;
    let sector = scaled.floor();
    let fraction = scaled - sector;

    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * fraction);
    let t = value * (1.0 - saturation * (1.0 - fraction));

    match (sector as i64).rem_euclid(6) {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    }
}

/// Perceptual correction applied to a channel value normalized to `[0, 1]`.
#[derive(Clone, Copy, Debug)]
pub enum Gamma {
    /// `v.powf(exponent)`
    Power(f64),
    Function(fn(f64) -> f64),
}

impl Gamma {
    pub fn apply(&self, normalized: f64) -> f64 {
        match self {
            Gamma::Power(exponent) => normalized.powf(*exponent),
            Gamma::Function(function) => function(normalized),
        }
    }
}

/// Normalize by `max`, correct, scale back. `max` must be positive.
fn corrected(channel: f64, max: f64, gamma: Option<&Gamma>) -> f64 {
    match gamma {
        Some(gamma) => gamma.apply(channel / max) * max,
        None => channel,
    }
}

fn check_iterations(max_iterations: u32) -> Result<(), ConfigError> {
    if max_iterations < 2 {
        Err(ConfigError::DegenerateColourTable(max_iterations))
    } else {
        Ok(())
    }
}

/// Colours indexed by escape iteration. Holds exactly `max_iterations` entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColourTable {
    colours: Vec<Colour>,
}

impl ColourTable {
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Colour> {
        self.colours.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Colour> {
        self.colours.iter()
    }

    pub fn as_slice(&self) -> &[Colour] {
        &self.colours
    }

    /// Colour for a grid value. [`IN_SET`] and out-of-table values are black.
    pub fn colour_for(&self, escape: i32) -> Colour {
        if escape == IN_SET {
            return Colour::BLACK;
        }
        usize::try_from(escape)
            .ok()
            .and_then(|index| self.get(index))
            .unwrap_or(Colour::BLACK)
    }
}

pub trait ColourScheme {
    fn build(
        &self,
        max_iterations: u32,
        gamma: Option<&Gamma>,
    ) -> Result<ColourTable, ConfigError>;
}

/// Black-to-blue ramp: red and green fixed at zero.
///
/// The ramp divides by `max_iterations`, so the last entry stops one step short
/// of `colour_max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlueRamp {
    pub colour_min: f64,
    pub colour_max: f64,
}

impl BlueRamp {
    pub fn channel_at(&self, index: u32, max_iterations: u32) -> f64 {
        index as f64 * (self.colour_max - self.colour_min) / max_iterations as f64
            + self.colour_min
    }
}

impl Default for BlueRamp {
    fn default() -> Self {
        Self {
            colour_min: 50.0,
            colour_max: 255.0,
        }
    }
}

impl ColourScheme for BlueRamp {
    fn build(
        &self,
        max_iterations: u32,
        gamma: Option<&Gamma>,
    ) -> Result<ColourTable, ConfigError> {
        check_iterations(max_iterations)?;
        if gamma.is_some() && !(self.colour_max > 0.0) {
            return Err(ConfigError::NonPositiveColourMax(self.colour_max));
        }

        trace!("begin blue ramp ({} entries)", max_iterations);
        let colours = (0..max_iterations)
            .map(|index| {
                let blue = self.channel_at(index, max_iterations);
                let blue = corrected(blue, self.colour_max, gamma);
                // Float to int casts truncate and saturate at the u8 bounds.
                Colour::new(0, 0, blue as u8)
            })
            .collect();
        trace!("end blue ramp");

        Ok(ColourTable { colours })
    }
}

/// Hue and value ramps at full saturation.
///
/// Both ramps divide by `max_iterations - 1`, so the last entry lands exactly on
/// `value_max`/`hue_max`. Hues past 1.0 are folded back into `[0, 1]`.
/// A gamma-corrected value stays fractional; it is not truncated before the HSV
/// conversion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HueValueRamp {
    pub value_min: f64,
    pub value_max: f64,
    pub hue_min: f64,
    pub hue_max: f64,
}

impl HueValueRamp {
    pub fn value_at(&self, index: u32, max_iterations: u32) -> f64 {
        index as f64 * (self.value_max - self.value_min) / (max_iterations - 1) as f64
            + self.value_min
    }

    pub fn hue_at(&self, index: u32, max_iterations: u32) -> f64 {
        let hue = (self.hue_max - self.hue_min) * index as f64 / (max_iterations - 1) as f64
            + self.hue_min;
        if hue > 1.0 {
            hue % 1.0
        } else {
            hue
        }
    }
}

impl Default for HueValueRamp {
    fn default() -> Self {
        Self {
            value_min: 0.15,
            value_max: 1.0,
            hue_min: 2.0 / 3.0,
            hue_max: 1.5,
        }
    }
}

impl ColourScheme for HueValueRamp {
    fn build(
        &self,
        max_iterations: u32,
        gamma: Option<&Gamma>,
    ) -> Result<ColourTable, ConfigError> {
        check_iterations(max_iterations)?;
        if gamma.is_some() && !(self.value_max > 0.0) {
            return Err(ConfigError::NonPositiveColourMax(self.value_max));
        }

        trace!("begin hue/value ramp ({} entries)", max_iterations);
        let colours = (0..max_iterations)
            .map(|index| {
                let value = self.value_at(index, max_iterations);
                let value = corrected(value, self.value_max, gamma);
                let hue = self.hue_at(index, max_iterations);
                let (r, g, b) = hsv_to_rgb(hue, 1.0, value);
                Colour::new((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
            })
            .collect();
        trace!("end hue/value ramp");

        Ok(ColourTable { colours })
    }
}

/// The colour scheme chosen at startup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColourPolicy {
    Blue(BlueRamp),
    HueValue(HueValueRamp),
}

impl Default for ColourPolicy {
    fn default() -> Self {
        ColourPolicy::HueValue(HueValueRamp::default())
    }
}

impl ColourScheme for ColourPolicy {
    fn build(
        &self,
        max_iterations: u32,
        gamma: Option<&Gamma>,
    ) -> Result<ColourTable, ConfigError> {
        match self {
            ColourPolicy::Blue(ramp) => ramp.build(max_iterations, gamma),
            ColourPolicy::HueValue(ramp) => ramp.build(max_iterations, gamma),
        }
    }
}
