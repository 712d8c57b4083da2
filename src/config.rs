//! Command line flags and the run configuration they produce.

use clap::{Parser, ValueEnum};

use crate::{
    colour::{BlueRamp, ColourPolicy, Gamma, HueValueRamp},
    error::ConfigError,
    escape::MAX_ITERATIONS,
    mapper::{PixelCountMapper, RegionMapper, ResolutionMapper, VerticalAxis},
    screen::ComplexWindow,
};

pub const DEFAULT_MAX_ITERATIONS: u32 = 200;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AddressingKind {
    /// Fixed real-axis pixel count, height from the aspect ratio
    #[default]
    Pixels,
    /// Fixed pixels per unit interval on both axes
    Resolution,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColouringKind {
    #[default]
    HueValue,
    Blue,
}

#[derive(Debug, Parser)]
#[command(
    name = "mandelbrot-grid",
    about = "Compute escape times over a region of the complex plane and build a colour table"
)]
pub struct Args {
    /// The lowest value on the real axis
    #[arg(short = 'x', long = "real-min", default_value_t = -2.0, allow_negative_numbers = true)]
    pub re_min: f64,

    /// The highest value on the real axis
    #[arg(short = 'X', long = "real-max", default_value_t = 0.5, allow_negative_numbers = true)]
    pub re_max: f64,

    /// The lowest value on the imaginary axis
    #[arg(short = 'y', long = "imaginary-min", default_value_t = -1.0, allow_negative_numbers = true)]
    pub im_min: f64,

    /// The highest value on the imaginary axis
    #[arg(short = 'Y', long = "imaginary-max", default_value_t = 1.0, allow_negative_numbers = true)]
    pub im_max: f64,

    /// How pixels are laid over the window
    #[arg(long, value_enum, default_value_t)]
    pub addressing: AddressingKind,

    /// The number of pixels on the real axis (pixels addressing)
    #[arg(short = 'p', long = "pixels-real", default_value_t = 500)]
    pub re_pixels: u32,

    /// Pixels per unit interval in either direction (resolution addressing)
    #[arg(short = 'r', long, default_value_t = 200)]
    pub resolution: u32,

    /// Which end of the imaginary axis is drawn on the top row (pixels addressing)
    #[arg(long, value_enum, default_value_t)]
    pub vertical: VerticalAxis,

    /// The maximum number of iterations to try before accepting a point as
    /// within the set
    #[arg(short = 'i', long = "max-iterations", default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,

    #[arg(long, value_enum, default_value_t)]
    pub colouring: ColouringKind,

    /// The HSV value used for points farthest outside the set
    #[arg(short = 'v', long = "color-value-min", default_value_t = 0.15, allow_negative_numbers = true)]
    pub value_min: f64,

    /// The HSV value used for points outside but closest to the set
    #[arg(short = 'V', long = "color-value-max", default_value_t = 1.0, allow_negative_numbers = true)]
    pub value_max: f64,

    /// The HSV hue used for points farthest outside the set, folded to [0;1]
    /// (default is blue)
    #[arg(short = 'c', long = "color-hue-min", default_value_t = 2.0 / 3.0, allow_negative_numbers = true)]
    pub hue_min: f64,

    /// The HSV hue used for points outside but closest to the set, folded to
    /// [0;1] (default is cyan)
    #[arg(short = 'C', long = "color-hue-max", default_value_t = 1.5, allow_negative_numbers = true)]
    pub hue_max: f64,

    /// Blue channel for points farthest outside the set (blue colouring)
    #[arg(long, default_value_t = 50.0)]
    pub blue_min: f64,

    /// Blue channel for points closest to the set (blue colouring)
    #[arg(long, default_value_t = 255.0)]
    pub blue_max: f64,

    /// Gamma exponent applied to the normalized value or blue channel
    #[arg(long, value_name = "EXPONENT")]
    pub gamma: Option<f64>,

    /// Worker threads for the escape-time pass (default: one per CPU)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Width of the ASCII preview in characters, 0 to disable
    #[arg(long, default_value_t = 80)]
    pub preview_columns: u32,
}

impl Args {
    pub fn into_config(self) -> Result<RenderConfig, ConfigError> {
        let window = ComplexWindow::new(self.re_min, self.re_max, self.im_min, self.im_max)?;

        let addressing = match self.addressing {
            AddressingKind::Pixels => Addressing::Pixels {
                re_pixels: self.re_pixels,
                vertical: self.vertical,
            },
            AddressingKind::Resolution => Addressing::Resolution {
                resolution: self.resolution,
            },
        };

        let colours = match self.colouring {
            ColouringKind::HueValue => ColourPolicy::HueValue(HueValueRamp {
                value_min: self.value_min,
                value_max: self.value_max,
                hue_min: self.hue_min,
                hue_max: self.hue_max,
            }),
            ColouringKind::Blue => ColourPolicy::Blue(BlueRamp {
                colour_min: self.blue_min,
                colour_max: self.blue_max,
            }),
        };

        Ok(RenderConfig {
            window,
            addressing,
            max_iterations: self.max_iterations,
            colours,
            gamma: self.gamma.map(Gamma::Power),
            threads: self.threads.unwrap_or_else(num_cpus::get),
            preview_columns: self.preview_columns,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Addressing {
    Pixels { re_pixels: u32, vertical: VerticalAxis },
    Resolution { resolution: u32 },
}

impl Default for Addressing {
    fn default() -> Self {
        Addressing::Pixels {
            re_pixels: 500,
            vertical: VerticalAxis::default(),
        }
    }
}

/// Everything a run needs. Built once at startup and never mutated.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub window: ComplexWindow,
    pub addressing: Addressing,
    pub max_iterations: u32,
    pub colours: ColourPolicy,
    pub gamma: Option<Gamma>,
    pub threads: usize,
    pub preview_columns: u32,
}

impl RenderConfig {
    fn mapper(&self) -> Result<Box<dyn RegionMapper>, ConfigError> {
        Ok(match self.addressing {
            Addressing::Pixels {
                re_pixels,
                vertical,
            } => Box::new(PixelCountMapper::new(&self.window, re_pixels, vertical)?),
            Addressing::Resolution { resolution } => {
                Box::new(ResolutionMapper::new(&self.window, resolution)?)
            }
        })
    }

    /// Checks that do not depend on the colour scheme, returning the region mapper
    /// they imply. Colour parameters are checked when the table is built, which also
    /// happens before any escape times are computed.
    pub fn validate(&self) -> Result<Box<dyn RegionMapper>, ConfigError> {
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if self.max_iterations > MAX_ITERATIONS {
            return Err(ConfigError::TooManyIterations(self.max_iterations));
        }
        if self.threads == 0 {
            return Err(ConfigError::ZeroThreads);
        }
        self.mapper()
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window: ComplexWindow::default(),
            addressing: Addressing::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            colours: ColourPolicy::default(),
            gamma: None,
            threads: num_cpus::get(),
            preview_columns: 80,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("mandelbrot-grid").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults_match_reference_flags() {
        let config = parse(&[]).into_config().unwrap();
        assert_eq!(config.window, ComplexWindow::default());
        assert_eq!(config.addressing, Addressing::default());
        assert_eq!(config.max_iterations, 200);
        assert_eq!(config.colours, ColourPolicy::HueValue(HueValueRamp::default()));
        assert!(config.gamma.is_none());
        assert!(config.threads >= 1);
    }

    #[test]
    fn short_flags_accept_negative_values() {
        let args = parse(&[
            "-x", "-0.752", "-X", "-0.742", "-y", "0.075", "-Y", "0.1", "-i", "255",
        ]);
        assert_eq!(args.re_min, -0.752);
        assert_eq!(args.re_max, -0.742);
        assert_eq!(args.max_iterations, 255);
    }

    #[test]
    fn selectors_build_matching_config() {
        let config = parse(&[
            "--addressing",
            "resolution",
            "-r",
            "32000",
            "--colouring",
            "blue",
            "--gamma",
            "2",
            "--threads",
            "3",
            "-x",
            "-0.752",
            "-X",
            "-0.742",
            "-y",
            "0.075",
            "-Y",
            "0.1",
        ])
        .into_config()
        .unwrap();
        assert_eq!(config.addressing, Addressing::Resolution { resolution: 32000 });
        assert_eq!(config.colours, ColourPolicy::Blue(BlueRamp::default()));
        assert!(matches!(config.gamma, Some(Gamma::Power(exponent)) if exponent == 2.0));
        assert_eq!(config.threads, 3);
    }

    #[test]
    fn vertical_axis_flag() {
        let config = parse(&["--vertical", "top-is-min"]).into_config().unwrap();
        assert_eq!(
            config.addressing,
            Addressing::Pixels {
                re_pixels: 500,
                vertical: VerticalAxis::TopIsMin
            }
        );
    }

    fn check(args: &[&str]) -> Result<(), ConfigError> {
        parse(args).into_config()?.validate().map(|_| ())
    }

    #[test]
    fn rejects_invalid_configuration() {
        assert_eq!(check(&["-i", "0"]), Err(ConfigError::ZeroIterations));
        assert_eq!(
            check(&["--addressing", "resolution", "-r", "0"]),
            Err(ConfigError::ZeroResolution)
        );
        assert_eq!(check(&["-p", "0"]), Err(ConfigError::ZeroPixels));
        assert_eq!(check(&["--threads", "0"]), Err(ConfigError::ZeroThreads));
        assert!(matches!(
            check(&["-x", "1", "-X", "-1"]),
            Err(ConfigError::EmptyRealRange { .. })
        ));
        assert!(matches!(
            check(&["-y", "0.5", "-Y", "0.5"]),
            Err(ConfigError::EmptyImaginaryRange { .. })
        ));
    }

    #[test]
    fn rejects_budget_beyond_grid_range() {
        assert_eq!(
            check(&["-i", "2147483649"]),
            Err(ConfigError::TooManyIterations(2_147_483_649))
        );
        assert_eq!(check(&["-i", "2147483648"]), Ok(()));
    }

    #[test]
    fn rejects_oversized_grid_before_computing() {
        assert!(matches!(
            check(&["-x", "-1", "-X", "1", "-y", "-1", "-Y", "1", "-p", "2000000000"]),
            Err(ConfigError::GridTooLarge { .. })
        ));
    }

    #[test]
    fn parsing_leaves_validation_to_the_run() {
        // Only the window is checked while building the config.
        let config = parse(&["-i", "0", "--threads", "0"]).into_config().unwrap();
        assert_eq!(config.max_iterations, 0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn single_iteration_is_valid() {
        assert_eq!(check(&["-i", "1"]), Ok(()));
    }
}
