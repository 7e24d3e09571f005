// File: crates/cli/src/main.rs
// Summary: benchbars command line: render score CSVs, aggregate FrameView captures, edit presets.

mod config;
mod frameview;
mod input;
mod options;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use benchbars_core::{render_chart, Dataset, RenderedChart, StyleConfig};
use clap::{ArgAction, Parser, Subcommand, ValueHint};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::frameview::{ChartKind, Exclusion};
use crate::options::StyleArgs;

#[derive(Parser, Debug)]
#[command(author, version, about = "Gradient bar charts for benchmark scores", long_about = None)]
struct Cli {
    /// Preset file (created with defaults when missing)
    #[arg(long, global = true, default_value = config::DEFAULT_CONFIG, value_hint = ValueHint::FilePath)]
    config: PathBuf,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a heading/subheading/score_* CSV to PNG
    Render(RenderArgs),
    /// Aggregate FrameView capture CSVs and render FPS or power charts
    Frameview(FrameviewArgs),
    /// Show or edit the preset file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// Output PNG path
    #[arg(short, long, default_value = "chart.png", value_hint = ValueHint::FilePath)]
    output: PathBuf,

    #[command(flatten)]
    style: StyleArgs,
}

#[derive(Parser, Debug)]
struct FrameviewArgs {
    /// FrameView summary CSVs, one per GPU
    #[arg(required = true, value_hint = ValueHint::FilePath)]
    inputs: Vec<PathBuf>,

    /// Drop a data row before aggregation, as FILE:ROW (0-based); repeatable
    #[arg(long)]
    exclude: Vec<Exclusion>,

    /// Capture resolution to chart (defaults to the first one seen)
    #[arg(long)]
    resolution: Option<String>,

    #[arg(long, value_enum, default_value_t = ChartKind::Fps)]
    kind: ChartKind,

    /// Output PNG path (defaults to "FPS Chart.png" or "PWR Chart.png")
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    output: Option<PathBuf>,

    #[command(flatten)]
    style: StyleArgs,
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the preset file
    Show,
    /// Replace one list, given as comma-separated values
    Set { key: String, value: String },
    /// Write the built-in presets
    Init {
        /// Overwrite an existing file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    match cli.command {
        Command::Render(args) => handle_render(&cli.config, args),
        Command::Frameview(args) => handle_frameview(&cli.config, args),
        Command::Config { action } => handle_config(&cli.config, action),
    }
}

fn handle_render(config_path: &std::path::Path, args: RenderArgs) -> Result<()> {
    let presets = config::load_or_init(config_path)?;
    let dataset = input::load_dataset(&args.input)
        .with_context(|| format!("failed to load CSV '{}'", args.input.display()))?;
    println!("Loaded {} rows, {} score columns", dataset.len(), dataset.series_count());

    let style = args.style.resolve(&dataset, &presets, None)?;
    draw(dataset, &style, &args.output)
}

fn handle_frameview(config_path: &std::path::Path, args: FrameviewArgs) -> Result<()> {
    let presets = config::load_or_init(config_path)?;

    let mut summaries = Vec::new();
    for path in &args.inputs {
        let s = frameview::summarize_file(path, &args.exclude)?;
        debug!(path = %path.display(), resolutions = s.len(), "capture summarized");
        summaries.extend(s);
    }

    println!("{:<28} {:>10} {:>10} {:>10} {:>10} {:>10}", "GPU", "Resolution", "1% FPS", "Avg FPS", "Watts", "FPS/W");
    let cell = |v: Option<f64>| v.map_or_else(|| "-".to_string(), |v| v.to_string());
    for s in &summaries {
        println!(
            "{:<28} {:>10} {:>10} {:>10} {:>10} {:>10}",
            s.heading,
            s.resolution,
            cell(s.min_fps),
            cell(s.avg_fps),
            cell(s.power),
            cell(s.fps_per_watt)
        );
    }

    let resolution = match &args.resolution {
        Some(r) => r.clone(),
        None => frameview::default_resolution(&summaries)
            .context("captures contain no resolution groups")?
            .to_string(),
    };
    let dataset = frameview::to_dataset(&summaries, &resolution, args.kind)?;
    let default_sort = Some(args.kind.default_sort(args.style.ascending));
    let style = args.style.resolve(&dataset, &presets, default_sort)?;
    let output = args.output.unwrap_or_else(|| args.kind.default_output());
    draw(dataset, &style, &output)
}

fn draw(dataset: Dataset, style: &StyleConfig, output: &std::path::Path) -> Result<()> {
    let RenderedChart { dataset, path, png } =
        render_chart(dataset, style, output).with_context(|| format!("rendering {}", output.display()))?;
    println!("Wrote {} ({} bytes)", path.display(), png.len());
    for (i, row) in dataset.rows().iter().enumerate() {
        match &row.subheading {
            Some(sub) => println!("{:>3}. {} ({sub})", i + 1, row.heading),
            None => println!("{:>3}. {}", i + 1, row.heading),
        }
    }
    Ok(())
}

fn handle_config(path: &std::path::Path, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let presets = config::load_or_init(path)?;
            print!("{}", serde_yaml::to_string(&presets)?);
        }
        ConfigAction::Set { key, value } => {
            let mut presets = config::load_or_init(path)?;
            config::set(&mut presets, &key, &value)?;
            config::save(&presets, path)?;
            info!(key = %key, path = %path.display(), "config updated");
            println!("Updated {key} in {}", path.display());
        }
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                anyhow::bail!("{} already exists; pass --force to overwrite", path.display());
            }
            config::save(&benchbars_core::Presets::default(), path)?;
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_parses() {
        let cli = Cli::try_parse_from([
            "benchbars", "-v", "frameview", "a.csv", "b.csv", "--exclude", "a.csv:2", "--kind", "power",
            "--color", "#000000", "--ascending",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("config.yaml"));
        let Command::Frameview(args) = cli.command else { panic!("expected frameview") };
        assert_eq!(args.inputs.len(), 2);
        assert_eq!(args.exclude, vec![Exclusion { file: "a.csv".into(), row: 2 }]);
        assert_eq!(args.kind, ChartKind::Power);
        assert!(args.style.ascending);

        let cli = Cli::try_parse_from(["benchbars", "render", "s.csv", "--size", "1300x1300", "--config", "p.yaml"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("p.yaml"));
        let Command::Render(args) = cli.command else { panic!("expected render") };
        assert_eq!(args.style.size, Some(benchbars_core::Resolution::new(1300, 1300)));
        assert_eq!(args.output, PathBuf::from("chart.png"));

        assert!(Cli::try_parse_from(["benchbars", "render", "s.csv", "--size", "big"]).is_err());
        assert!(Cli::try_parse_from(["benchbars", "frameview"]).is_err());
    }

    #[test]
    fn render_writes_png_and_config() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("scores.csv");
        std::fs::write(&csv_path, "heading,score_min_fps,score_avg_fps\nA,10,20\nB,15,25\n").unwrap();
        let config_path = dir.path().join("config.yaml");
        let out = dir.path().join("chart.png");
        let args = RenderArgs {
            input: csv_path,
            output: out.clone(),
            style: StyleArgs { size: Some(benchbars_core::Resolution::new(320, 200)), no_text: true, ..StyleArgs::default() },
        };
        handle_render(&config_path, args).unwrap();
        assert!(config_path.exists());
        assert_eq!(&std::fs::read(&out).unwrap()[..4], b"\x89PNG");
    }
}
