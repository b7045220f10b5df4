//! boxdim - box-counting dimension of a 2D point set.
//!
//! ```text
//! boxdim stadout 20
//! boxdim stadout 20 --maxsize 60 --output stadium.dat --plot stadium.svg
//! ```
//!
//! Reads the x/y columns of a whitespace separated table, counts occupied boxes for grids of
//! `1x1` up to `NxN` boxes and writes one row per resolution to the output table.

#[cfg(feature = "svg")]
use std::path::Path;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use boxdim::{
    load_points, save_report, BoxDimError, Config, Counter, DimensionEstimator, LoadOptions,
    ReportOptions, DEFAULT_MAXSIZE, DEFAULT_OUTPUT,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CounterKind {
    /// Test every point against every box
    Scan,
    /// Compute the box of every point directly
    Index,
}

impl From<CounterKind> for Counter {
    fn from(kind: CounterKind) -> Self {
        match kind {
            CounterKind::Scan => Counter::Scan,
            CounterKind::Index => Counter::Index,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "boxdim")]
#[command(about = "Estimate the box-counting dimension of a 2D point set", long_about = None)]
struct Cli {
    /// Whitespace separated data table with one header line
    datafile: PathBuf,

    /// Largest grid resolution N, grids of 1x1 up to NxN boxes are counted
    max_resolution: usize,

    /// Half side length of the square region [-maxsize, maxsize]^2 split into boxes
    #[arg(long, default_value_t = DEFAULT_MAXSIZE)]
    maxsize: f64,

    /// Output table
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Zero based column holding x coordinates
    #[arg(long, default_value_t = 5)]
    x_column: usize,

    /// Zero based column holding y coordinates
    #[arg(long, default_value_t = 6)]
    y_column: usize,

    /// Number of header lines to skip
    #[arg(long, default_value_t = 1)]
    skip_rows: usize,

    /// Omit the boxdim column
    #[arg(long)]
    no_dimension: bool,

    /// Box counting strategy
    #[arg(long, value_enum, default_value_t = CounterKind::Index)]
    counter: CounterKind,

    /// Also render a log-log plot to this svg file
    #[cfg(feature = "svg")]
    #[arg(long)]
    plot: Option<PathBuf>,

    /// Verbosity, repeat for more output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            maxsize: self.maxsize,
            output: self.output.clone(),
            counter: self.counter.into(),
            load: LoadOptions {
                skip_rows: self.skip_rows,
                x_column: self.x_column,
                y_column: self.y_column,
            },
            report: ReportOptions {
                include_dimension: !self.no_dimension,
            },
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

#[cfg(feature = "svg")]
fn plot(path: &Path, records: &[boxdim::ResultRecord]) -> Result<()> {
    use boxdim::render::RenderSVG;

    let document = records
        .render(svg::Document::new())
        .map_err(anyhow::Error::msg)
        .context("Failed to render plot")?;
    svg::save(path, &document).with_context(|| format!("Failed to write plot {:?}", path))?;
    info!("wrote plot to {:?}", path);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config();
    let region = config.region()?;
    if cli.max_resolution == 0 {
        return Err(BoxDimError::InvalidResolution(cli.max_resolution).into());
    }

    let points = load_points(&cli.datafile, &config.load)
        .with_context(|| format!("Failed to load points from {:?}", cli.datafile))?;
    if let Some(extent) = points.extent() {
        info!(
            "points span x in [{}, {}], y in [{}, {}]",
            extent.lower_left().x(),
            extent.upper_right().x(),
            extent.lower_left().y(),
            extent.upper_right().y()
        );
    }

    let records = DimensionEstimator::with_counter(region, config.counter)
        .run(&points, cli.max_resolution)?;

    save_report(&config.output, &records, &config.report)
        .with_context(|| format!("Failed to write report {:?}", config.output))?;

    #[cfg(feature = "svg")]
    if let Some(path) = &cli.plot {
        plot(path, &records)?;
    }

    Ok(())
}
