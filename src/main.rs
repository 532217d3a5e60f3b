use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use glyph_holes::batch::run_batch;
use glyph_holes::config::RecognizerConfig;
use glyph_holes::perception::grid::grid_to_string;
use glyph_holes::perception::load_input;
use glyph_holes::recognize::analyze;

#[derive(Parser, Debug)]
#[command(
    name = "glyph-holes",
    about = "Recognize glyphs in binary images by counting their holes",
    version
)]
struct Cli {
    /// Image files, or .txt/.json grid files
    inputs: Vec<PathBuf>,

    /// Recognize every supported file in a directory
    #[arg(short = 'd', long = "dir")]
    dir: Option<PathBuf>,

    /// JSON config with threshold and symbol table
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Luma at or below this value is ink (overrides config)
    #[arg(short = 't', long = "threshold")]
    threshold: Option<u8>,

    /// Print per-glyph detail
    #[arg(long = "detail")]
    detail: bool,

    /// Print the binarized grid before recognizing
    #[arg(long = "show-grid")]
    show_grid: bool,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, Default)]
struct PrintOptions {
    detail: bool,
    show_grid: bool,
}

/// Recognizes each input in turn. An input that cannot be loaded is
/// reported and skipped. Returns the number of failed inputs.
fn recognize_inputs<W: Write>(
    inputs: &[PathBuf],
    config: &RecognizerConfig,
    opts: PrintOptions,
    out: &mut W,
) -> std::io::Result<usize> {
    let mut failed = 0;
    for path in inputs {
        let grid = match load_input(path, config.threshold) {
            Ok(grid) => grid,
            Err(e) => {
                log::error!("{}: {}", path.display(), e);
                writeln!(out, "{}: error: {}", path.display(), e)?;
                failed += 1;
                continue;
            }
        };
        if opts.show_grid {
            writeln!(out, "{}", grid_to_string(&grid))?;
        }
        let result = analyze(&grid, &config.symbols);
        writeln!(out, "{}: {}", path.display(), result.text)?;
        if opts.detail {
            for g in &result.glyphs {
                writeln!(out, "  '{}' holes={} area={} bbox=({}, {})-({}, {})",
                    g.symbol, g.holes, g.area, g.min_r, g.min_c, g.max_r, g.max_c)?;
            }
        }
    }
    Ok(failed)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let mut config = match &cli.config {
        Some(path) => RecognizerConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RecognizerConfig::default(),
    };
    if let Some(t) = cli.threshold {
        config.threshold = t;
    }

    if cli.inputs.is_empty() && cli.dir.is_none() {
        anyhow::bail!("no inputs given; pass files or --dir <DIR>");
    }

    let opts = PrintOptions { detail: cli.detail, show_grid: cli.show_grid };
    let failed = recognize_inputs(&cli.inputs, &config, opts, &mut std::io::stdout().lock())?;

    if let Some(dir) = &cli.dir {
        let report = run_batch(dir, &config)?;
        if cli.detail {
            report.print_detail();
        } else {
            report.print_summary();
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} inputs could not be read", failed, cli.inputs.len());
    }
    Ok(())
}
