use anyhow::Context;
use clap::Parser;
use log::debug;

use screen_geometry::cli::Cli;
use screen_geometry::Screen;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    debug!("parsed arguments: {cli:?}");

    let screen = Screen::new(
        cli.diagonal,
        cli.resolution,
        cli.distance,
        cli.curvature,
        cli.scaling,
    )
    .context("screen parameters are invalid")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&screen.to_json())?);
    } else {
        println!("{screen}");
    }

    Ok(())
}
