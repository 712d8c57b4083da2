use mandelbrot_grid::{
    colour::{ColourPolicy, ColourScheme, HueValueRamp},
    config::{Addressing, RenderConfig},
    escape::{escape_iteration, IN_SET},
    mapper::{PixelCountMapper, RegionMapper, ResolutionMapper, VerticalAxis},
    screen::{ComplexWindow, Size},
    ConfigError, Error, Render,
};
use num_complex::Complex64;

fn default_run(vertical: VerticalAxis) -> Render {
    let config = RenderConfig {
        window: ComplexWindow::new(-2.0, 0.5, -1.0, 1.0).unwrap(),
        addressing: Addressing::Pixels {
            re_pixels: 500,
            vertical,
        },
        max_iterations: 200,
        colours: ColourPolicy::HueValue(HueValueRamp::default()),
        gamma: None,
        threads: 4,
        preview_columns: 0,
    };
    Render::run(&config).unwrap()
}

#[test]
fn default_window_produces_full_grid() {
    let render = default_run(VerticalAxis::TopIsMax);
    let grid = render.grid();

    assert_eq!(
        grid.size(),
        Size {
            width: 500,
            height: 400
        }
    );
    assert_eq!(grid.as_slice().len(), 200_000);
    assert_eq!(render.colours().map(|colours| colours.len()), Some(200));

    // c = -2 + i, |c| = sqrt(5)
    assert_eq!(grid.get(0, 0), Some(1));
    assert_eq!(escape_iteration(Complex64::new(-2.0, 1.0), 200), 1);
    assert_eq!(render.stats().total(), 200_000);
    assert!(render.stats().in_set > 0);
}

#[test]
fn both_vertical_conventions_agree_at_corner() {
    let top_min = default_run(VerticalAxis::TopIsMin);
    // c = -2 - i
    assert_eq!(top_min.grid().get(0, 0), Some(1));
}

#[test]
fn origin_column_is_in_set() {
    let mapper =
        PixelCountMapper::new(&ComplexWindow::default(), 500, VerticalAxis::TopIsMax).unwrap();
    // re = 400 / 500 * 2.5 - 2 = 0, im = 1 - 200 / 400 * 2 = 0
    assert_eq!(mapper.point(400, 200), Complex64::new(0.0, 0.0));
    let render = default_run(VerticalAxis::TopIsMax);
    assert_eq!(render.grid().get(400, 200), Some(IN_SET));
}

#[test]
fn resolution_addressing_matches_mapper() {
    let window = ComplexWindow::new(-1.0, -0.5, 0.0, 0.3).unwrap();
    let config = RenderConfig {
        window,
        addressing: Addressing::Resolution { resolution: 100 },
        max_iterations: 64,
        threads: 2,
        ..RenderConfig::default()
    };
    let render = Render::run(&config).unwrap();

    let mapper = ResolutionMapper::new(&window, 100).unwrap();
    assert_eq!(render.grid().size(), mapper.size());
    assert_eq!(
        render.grid().size(),
        Size {
            width: 51,
            height: 31
        }
    );
    assert_eq!(
        render.grid().get(10, 5),
        Some(escape_iteration(mapper.map_pixel_to_complex(-90, 25), 64))
    );
}

#[test]
fn colour_table_is_independent_of_grid() {
    let render = default_run(VerticalAxis::TopIsMax);
    let rebuilt = HueValueRamp::default().build(200, None).unwrap();
    assert_eq!(render.colours(), Some(&rebuilt));
}

#[test]
fn zero_budget_or_resolution_is_rejected() {
    let zero_iterations = RenderConfig {
        max_iterations: 0,
        ..RenderConfig::default()
    };
    assert!(matches!(
        Render::run(&zero_iterations),
        Err(Error::Config(ConfigError::ZeroIterations))
    ));

    let zero_resolution = RenderConfig {
        addressing: Addressing::Resolution { resolution: 0 },
        ..RenderConfig::default()
    };
    assert!(matches!(
        Render::run(&zero_resolution),
        Err(Error::Config(ConfigError::ZeroResolution))
    ));
}
