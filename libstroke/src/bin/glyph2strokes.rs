use std::path::{Path, PathBuf};

use clap::Parser;
use eyre::WrapErr;
use libstroke::{ser::DrawingFormat, svg::parse::Rgb, Config};
use rayon::prelude::*;
use tracing_subscriber::EnvFilter;

/// Convert glyph svg outlines into ink stroke drawings.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Steps per cubic segment, overrides the configuration.
    #[arg(long)]
    steps: Option<usize>,
    /// Ink colour, `#rrggbb` or `rgb(r,g,b)`.
    #[arg(long)]
    color: Option<Rgb>,
    /// Mirror the y axis so the origin is at the bottom left.
    #[arg(long)]
    flip_y: bool,
    #[arg(long, value_enum, default_value_t)]
    format: DrawingFormat,
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

impl Args {
    fn config(&self) -> eyre::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .wrap_err_with(|| format!("loading {}", path.display()))?,
            None => Config::default(),
        };
        if let Some(steps) = self.steps {
            config.steps = steps;
        }
        if let Some(color) = self.color {
            config.style.ink.color = color;
        }
        config.style.flip_y |= self.flip_y;
        Ok(config.validate()?)
    }

    fn output(&self, input: &Path) -> PathBuf {
        let stem = input.file_stem().unwrap_or(input.as_os_str());
        self.out_dir
            .join(stem)
            .with_extension(self.format.extension())
    }
}

fn convert(input: &Path, output: &Path, format: DrawingFormat, config: &Config) -> eyre::Result<()> {
    let mut bytes = vec![];
    let drawings = libstroke::svg2drawings(input, &mut bytes, format, config)?;
    std::fs::write(output, bytes).wrap_err_with(|| format!("writing {}", output.display()))?;
    tracing::info!(
        strokes = drawings.iter().map(|d| d.strokes.len()).sum::<usize>(),
        "{} -> {}",
        input.display(),
        output.display()
    );
    Ok(())
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("libstroke=info,strokepath=info")),
        )
        .init();

    let args = Args::parse();
    let config = args.config()?;
    std::fs::create_dir_all(&args.out_dir)?;

    let failed = args
        .inputs
        .par_iter()
        .filter_map(|input| {
            let output = args.output(input);
            convert(input, &output, args.format, &config)
                .map_err(|err| tracing::error!("{}: {err:?}", input.display()))
                .err()
        })
        .count();

    if failed > 0 {
        eyre::bail!("{failed} of {} inputs failed", args.inputs.len());
    }
    Ok(())
}
