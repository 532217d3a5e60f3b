// Batch recognition over a directory of glyph images and grid files.
// Files are processed in name order; a file that fails to load is
// recorded in the report instead of aborting the run.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;

use crate::config::RecognizerConfig;
use crate::perception::{load_input, raster::is_image_file};
use crate::recognize::analyze;

#[derive(Debug)]
pub struct BatchReport {
    pub total_files: usize,
    pub recognized: usize,
    pub glyphs: usize,
    pub unknown: usize,
    pub elapsed_ms: u64,
    pub per_file: Vec<FileReport>,
}

#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
    pub elapsed_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Recognized { text: String, glyphs: usize, unknown: usize },
    Failed(String),
}

pub fn is_supported(path: &Path) -> bool {
    if is_image_file(path) { return true; }
    matches!(
        path.extension().and_then(|e| e.to_str()).map(|e| e.to_ascii_lowercase()).as_deref(),
        Some("txt" | "json")
    )
}

/// Recognize every supported file in `dir`.
pub fn run_batch(dir: &Path, config: &RecognizerConfig) -> anyhow::Result<BatchReport> {
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("cannot read input dir {}", dir.display()))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && is_supported(p))
        .collect();
    entries.sort();

    let total_start = Instant::now();
    let mut per_file = Vec::with_capacity(entries.len());

    for path in entries {
        let start = Instant::now();
        let outcome = match load_input(&path, config.threshold) {
            Ok(grid) => {
                let r = analyze(&grid, &config.symbols);
                FileOutcome::Recognized {
                    unknown: r.unknown,
                    glyphs: r.glyph_count(),
                    text: r.text,
                }
            }
            Err(e) => {
                log::warn!("skipping {}: {}", path.display(), e);
                FileOutcome::Failed(e.to_string())
            }
        };
        per_file.push(FileReport {
            path,
            outcome,
            elapsed_ms: start.elapsed().as_millis() as u64,
        });
    }

    let mut recognized = 0;
    let mut glyphs = 0;
    let mut unknown = 0;
    for f in &per_file {
        if let FileOutcome::Recognized { glyphs: g, unknown: u, .. } = &f.outcome {
            recognized += 1;
            glyphs += g;
            unknown += u;
        }
    }

    Ok(BatchReport {
        total_files: per_file.len(),
        recognized,
        glyphs,
        unknown,
        elapsed_ms: total_start.elapsed().as_millis() as u64,
        per_file,
    })
}

impl BatchReport {
    pub fn print_summary(&self) {
        println!("=== Glyph Recognition ===");
        println!("Files: {} | Recognized: {} | Failed: {}",
            self.total_files, self.recognized, self.total_files - self.recognized);
        println!("Glyphs: {} | Unknown: {} | Time: {}ms",
            self.glyphs, self.unknown, self.elapsed_ms);
    }

    pub fn print_detail(&self) {
        self.print_summary();
        println!("\nPer-file detail:");
        for f in &self.per_file {
            match &f.outcome {
                FileOutcome::Recognized { text, glyphs, unknown } => {
                    println!("  [OK] {} | {} glyphs={} unknown={} time={}ms",
                        f.path.display(), text, glyphs, unknown, f.elapsed_ms);
                }
                FileOutcome::Failed(msg) => {
                    println!("  [--] {} | {}", f.path.display(), msg);
                }
            }
        }
    }
}
