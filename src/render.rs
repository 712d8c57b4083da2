//! One full run: escape grid, colour table, and the per-pixel lookup a renderer needs.

use log::{debug, info, warn};

use crate::{
    colour::{Colour, ColourScheme, ColourTable},
    config::RenderConfig,
    error::Result,
    grid::{EscapeGrid, EscapeStats},
};

/// Results of a run, handed to whatever displays them. Read-only.
#[derive(Clone, Debug)]
pub struct Render {
    grid: EscapeGrid,
    colours: Option<ColourTable>,
    stats: EscapeStats,
}

impl Render {
    /// Validate `config`, then compute the grid and the colour table.
    ///
    /// A budget of one iteration is valid: every pixel is in the set, so no colour
    /// table is built.
    pub fn run(config: &RenderConfig) -> Result<Self> {
        let mapper = config.validate()?;

        let colours = if config.max_iterations < 2 {
            warn!(
                "max iterations is {}: every point will be treated as in the set",
                config.max_iterations
            );
            None
        } else {
            Some(
                config
                    .colours
                    .build(config.max_iterations, config.gamma.as_ref())?,
            )
        };

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build()?;
        debug!("computing on {} threads", pool.current_num_threads());

        let grid = pool.install(|| EscapeGrid::compute(&*mapper, config.max_iterations));
        let stats = grid.stats();

        let size = grid.size();
        info!(
            "{}x{} pixels, {} in set, escapes between {:?} and {:?}",
            size.width, size.height, stats.in_set, stats.min_escape, stats.max_escape
        );

        Ok(Self {
            grid,
            colours,
            stats,
        })
    }

    pub fn grid(&self) -> &EscapeGrid {
        &self.grid
    }

    pub fn colours(&self) -> Option<&ColourTable> {
        self.colours.as_ref()
    }

    pub fn stats(&self) -> &EscapeStats {
        &self.stats
    }

    /// Row-major colours: black for in-set pixels, otherwise the table entry for the
    /// escape iteration.
    pub fn pixels(&self) -> Vec<Colour> {
        self.grid
            .as_slice()
            .iter()
            .map(|&escape| match &self.colours {
                Some(colours) => colours.colour_for(escape),
                None => Colour::BLACK,
            })
            .collect()
    }
}
