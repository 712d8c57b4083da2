use anyhow::Context;
use clap::Parser;
use log::debug;

use mandelbrot_grid::{config::Args, preview, Render};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    debug!("{:?}", args);

    let config = args.into_config().context("invalid configuration")?;
    let render = Render::run(&config)?;

    print!("{}", preview::ascii(render.grid(), config.preview_columns));
    print!("{}", preview::summary(render.grid()));

    if let Some(colours) = render.colours() {
        let (first, last) = (colours.as_slice().first(), colours.as_slice().last());
        if let (Some(first), Some(last)) = (first, last) {
            println!(
                "  colours = {} ({} .. {})",
                colours.len(),
                first.to_hex(),
                last.to_hex()
            );
        }
    }

    Ok(())
}
