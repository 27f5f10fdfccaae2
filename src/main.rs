// src/main.rs

use anyhow::{bail, Context};
use cairo_surface::config::CONFIG;
use cairo_surface::{EncodedFormat, FontConfig, ImageSurface};
use clap::{Parser, Subcommand};
use log::{info, warn};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "cairo-surface", about = "Convert and inspect PNG/JPEG images with libcairo")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Load an image and write it out; the output extension picks the codec
    Convert {
        input: PathBuf,
        output: PathBuf,
        /// JPEG quality, 1-100 (defaults to the configured quality)
        #[arg(long, short, value_parser = clap::value_parser!(u8).range(1..=100))]
        quality: Option<u8>,
    },
    /// Print the size and pixel format of an image
    Info { path: PathBuf },
    /// Show the font file FontConfig picks for a pattern
    Font {
        /// FontConfig pattern (defaults to the configured pattern)
        pattern: Option<String>,
    },
}

fn convert(input: &Path, output: &Path, quality: Option<u8>) -> anyhow::Result<()> {
    let surface = ImageSurface::from_file(input)
        .with_context(|| format!("Failed to load {}", input.display()))?;
    let format = EncodedFormat::from_extension(output).unwrap_or_else(|| {
        warn!("No known extension on {}, writing PNG", output.display());
        EncodedFormat::Png
    });
    let written = match format {
        EncodedFormat::Png => surface.write_png(output),
        EncodedFormat::Jpeg => surface.write_jpeg(output, quality.unwrap_or(CONFIG.jpeg.quality)),
    };
    written.with_context(|| format!("Failed to write {}", output.display()))?;
    info!(
        "Converted {} ({}x{}) to {} {}",
        input.display(),
        surface.width(),
        surface.height(),
        format,
        output.display()
    );
    Ok(())
}

fn info(path: &Path) -> anyhow::Result<()> {
    let surface = ImageSurface::from_file(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    let format = surface
        .format()
        .map(|f| f.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    println!(
        "{}: {}x{} {} (stride {})",
        path.display(),
        surface.width(),
        surface.height(),
        format,
        surface.stride()
    );
    Ok(())
}

fn font(pattern: Option<&str>) -> anyhow::Result<()> {
    let pattern = pattern.unwrap_or(&CONFIG.font.default_pattern);
    let fc = FontConfig::new().context("Failed to initialize FontConfig")?;
    match fc
        .match_font(pattern)
        .with_context(|| format!("Failed to match font pattern '{}'", pattern))?
    {
        Some(found) => println!(
            "{}: {} (index {}, family {})",
            pattern,
            found.path.display(),
            found.index,
            found.family.as_deref().unwrap_or("?")
        ),
        None => bail!("No font matches '{}'", pattern),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!("cairo-surface using libcairo {}", cairo_surface::cairo_version());

    match Cli::parse().command {
        Command::Convert {
            input,
            output,
            quality,
        } => convert(&input, &output, quality),
        Command::Info { path } => info(&path),
        Command::Font { pattern } => font(pattern.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, clap::Error> {
        Cli::try_parse_from(std::iter::once("cairo-surface").chain(args.iter().copied()))
            .map(|cli| cli.command)
    }

    #[test]
    fn convert_with_quality() {
        let command = parse(&["convert", "a.png", "--quality", "75", "b.jpg"]).unwrap();
        assert_eq!(
            command,
            Command::Convert {
                input: "a.png".into(),
                output: "b.jpg".into(),
                quality: Some(75),
            }
        );
        let command = parse(&["convert", "-q", "5", "a.png", "b.jpg"]).unwrap();
        assert!(matches!(command, Command::Convert { quality: Some(5), .. }));
    }

    #[test]
    fn convert_needs_two_paths() {
        assert!(parse(&["convert", "a.png"]).is_err());
        assert!(parse(&["convert", "a", "b", "c"]).is_err());
    }

    #[test]
    fn quality_outside_range_is_rejected() {
        for bad in ["x", "0", "101", "-3"] {
            assert!(parse(&["convert", "a", "b", "--quality", bad]).is_err(), "{}", bad);
        }
        assert!(parse(&["convert", "a", "b", "--quality", "100"]).is_ok());
    }

    #[test]
    fn font_pattern_is_optional() {
        assert_eq!(parse(&["font"]).unwrap(), Command::Font { pattern: None });
        assert_eq!(
            parse(&["font", "serif"]).unwrap(),
            Command::Font {
                pattern: Some("serif".to_string())
            }
        );
    }

    #[test]
    fn unknown_or_missing_command_fails() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["resize"]).is_err());
    }
}
