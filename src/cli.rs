// cli.rs - Command-line interface configuration
use clap::Parser;

use crate::screen::Resolution;

#[derive(Parser, Debug, Clone)]
#[command(name = "screen-geometry")]
#[command(about = "Display screen geometry calculator", long_about = None)]
pub struct Cli {
    /// Screen diagonal in inches
    #[arg(long, default_value_t = 45.0)]
    pub diagonal: f64,

    /// Native resolution as WIDTHxHEIGHT
    #[arg(long, default_value = "5120x2160", value_parser = parse_resolution)]
    pub resolution: Resolution,

    /// Eye-to-screen distance in millimeters
    #[arg(long, default_value_t = 800.0)]
    pub distance: f64,

    /// Curvature radius in millimeters; omit for a flat screen
    #[arg(long)]
    pub curvature: Option<f64>,

    /// Display scaling factor
    #[arg(long, default_value_t = 1.25)]
    pub scaling: f64,

    /// Print the report as JSON instead of a summary line
    #[arg(long, default_value = "false")]
    pub json: bool,
}

fn parse_resolution(value: &str) -> Result<Resolution, String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{value}`"))?;
    let width = width
        .trim()
        .parse()
        .map_err(|_| format!("width `{width}` is not a valid pixel count"))?;
    let height = height
        .trim()
        .parse()
        .map_err(|_| format!("height `{height}` is not a valid pixel count"))?;
    Ok(Resolution::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolution_accepts_wxh() {
        assert_eq!(parse_resolution("1920x1080"), Ok(Resolution::new(1920, 1080)));
        assert_eq!(parse_resolution("2560X1440"), Ok(Resolution::new(2560, 1440)));
    }

    #[test]
    fn test_parse_resolution_rejects_garbage() {
        assert!(parse_resolution("1920").is_err());
        assert!(parse_resolution("ax1080").is_err());
        assert!(parse_resolution("1920x-1080").is_err());
    }

    #[test]
    fn test_defaults_match_example_screen() {
        let cli = Cli::parse_from(["screen-geometry"]);
        assert_eq!(cli.diagonal, 45.0);
        assert_eq!(cli.resolution, Resolution::new(5120, 2160));
        assert_eq!(cli.distance, 800.0);
        assert_eq!(cli.curvature, None);
        assert_eq!(cli.scaling, 1.25);
        assert!(!cli.json);
    }
}
