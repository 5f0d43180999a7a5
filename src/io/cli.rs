//! Command-line interface for batch camouflage generation from photographs

use crate::io::configuration::{
    DEFAULT_KMEANS_ITERATIONS, DEFAULT_PALETTE_SIZE, DEFAULT_SAMPLE_SIZE, DEFAULT_SEED,
    PALETTE_BAND_HEIGHT, PALETTE_SWATCH_WIDTH,
};
use crate::io::error::Result;
use crate::io::image::{CropWindow, export_canvas_as_png, export_palette_swatch, sample_pixels};
use crate::io::progress::ProgressManager;
use crate::palette::kmeans::extract_palette;
use crate::pattern::{self, PatternConfig, PatternStyle};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Source image extensions accepted for processing
const SUPPORTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Pattern style selection on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    /// Organic patches over a tonal background
    Woodland,
    /// Blocky clustered cells
    Digital,
    /// Stroked ink stripes over a blob underlayer
    Tiger,
    /// Sinusoidal banding with roughened edges
    Shadow,
}

impl From<StyleArg> for PatternStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Woodland => Self::Woodland,
            StyleArg::Digital => Self::Digital,
            StyleArg::Tiger => Self::TigerStripe,
            StyleArg::Shadow => Self::ShadowStripe,
        }
    }
}

#[derive(Parser)]
#[command(name = "camoforge")]
#[command(
    author,
    version,
    about = "Generate camouflage textures from photograph color palettes"
)]
/// Command-line arguments for the camouflage generation tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Styles to generate (default: all)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub styles: Vec<StyleArg>,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of dominant colors to extract
    #[arg(short = 'k', long, default_value_t = DEFAULT_PALETTE_SIZE)]
    pub colors: usize,

    /// Output width in pixels (implies square if height not specified)
    #[arg(short = 'w', long)]
    pub width: Option<usize>,

    /// Output height in pixels
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Number of woodland blobs
    #[arg(long)]
    pub blobs: Option<usize>,

    /// Number of tiger stripes
    #[arg(long)]
    pub stripes: Option<usize>,

    /// Digital cell edge length in pixels
    #[arg(long)]
    pub cell_size: Option<usize>,

    /// Side length of the downscaled sampling raster
    #[arg(long, default_value_t = DEFAULT_SAMPLE_SIZE)]
    pub sample_size: u32,

    /// Fractional crop applied before sampling
    #[arg(long, num_args = 4, value_names = ["LEFT", "TOP", "RIGHT", "BOTTOM"])]
    pub crop: Option<Vec<f64>>,

    /// Export a palette swatch preview alongside the patterns
    #[arg(short = 'p', long)]
    pub palette_preview: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Styles selected for generation, defaulting to all four
    pub fn selected_styles(&self) -> Vec<PatternStyle> {
        if self.styles.is_empty() {
            PatternStyle::ALL.to_vec()
        } else {
            self.styles.iter().copied().map(Into::into).collect()
        }
    }

    fn crop_window(&self) -> Result<Option<CropWindow>> {
        match &self.crop {
            None => Ok(None),
            Some(edges) => {
                let left = edges.first().copied().unwrap_or(0.0);
                let top = edges.get(1).copied().unwrap_or(0.0);
                let right = edges.get(2).copied().unwrap_or(1.0);
                let bottom = edges.get(3).copied().unwrap_or(1.0);
                CropWindow::new(left, top, right, bottom).map(Some)
            }
        }
    }

    fn canvas_bounds(&self) -> (usize, usize) {
        match (self.width, self.height) {
            (Some(w), Some(h)) => (w, h),
            (Some(w), None) => (w, w),
            (None, Some(h)) => (h, h),
            (None, None) => (
                crate::io::configuration::DEFAULT_WIDTH,
                crate::io::configuration::DEFAULT_HEIGHT,
            ),
        }
    }
}

/// Orchestrates batch processing of source images with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if Self::is_supported_source(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(crate::io::error::io_error(
                    "Target file must be a PNG or JPEG image",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if Self::is_supported_source(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(crate::io::error::io_error(
                "Target must be an image file or directory",
            ))
        }
    }

    fn is_supported_source(path: &Path) -> bool {
        let supported_extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .is_some_and(|extension| {
                SUPPORTED_EXTENSIONS.contains(&extension.to_ascii_lowercase().as_str())
            });
        supported_extension && !Self::is_generated_output(path)
    }

    // Directory runs would otherwise pick generated patterns back up as inputs
    fn is_generated_output(path: &Path) -> bool {
        let stem = path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        PatternStyle::ALL
            .iter()
            .map(|style| style.file_label())
            .chain(std::iter::once("palette"))
            .any(|label| stem.ends_with(&format!("_{label}")))
    }

    /// Styles whose output is still missing for this input
    fn pending_styles(&self, input_path: &Path) -> Vec<PatternStyle> {
        let selected = self.cli.selected_styles();
        if !self.cli.skip_existing() {
            return selected;
        }
        selected
            .into_iter()
            .filter(|style| !Self::output_path(input_path, style.file_label()).exists())
            .collect()
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if self.pending_styles(input_path).is_empty() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let start_time = Instant::now();
        let styles = self.pending_styles(input_path);
        let stage_count = styles.len() + 1;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, stage_count);
        }

        let samples = sample_pixels(input_path, self.cli.crop_window()?, self.cli.sample_size)?;
        let palette = extract_palette(
            &samples,
            self.cli.colors,
            DEFAULT_KMEANS_ITERATIONS,
            self.cli.seed,
        )?;
        let color_mapping = palette.rgba_mapping();

        if self.cli.palette_preview {
            let swatch_path = Self::output_path(input_path, "palette");
            export_palette_swatch(
                &color_mapping,
                swatch_path
                    .to_str()
                    .ok_or_else(|| crate::io::error::io_error("Invalid swatch path"))?,
                PALETTE_SWATCH_WIDTH,
                PALETTE_BAND_HEIGHT,
            )?;
        }

        let (width, height) = self.cli.canvas_bounds();
        let config = PatternConfig {
            width,
            height,
            blob_count: self
                .cli
                .blobs
                .unwrap_or(crate::io::configuration::DEFAULT_BLOB_COUNT),
            stripe_count: self
                .cli
                .stripes
                .unwrap_or(crate::io::configuration::DEFAULT_STRIPE_COUNT),
            cell_size: self
                .cli
                .cell_size
                .unwrap_or(crate::io::configuration::DEFAULT_CELL_SIZE),
            seed: self.cli.seed,
        };

        for (step, style) in styles.iter().enumerate() {
            if let Some(ref mut pm) = self.progress_manager {
                pm.update_stage(index, step + 1, style.file_label());
            }

            let canvas = pattern::generate(*style, &palette, &config)?;
            let output_path = Self::output_path(input_path, style.file_label());
            export_canvas_as_png(
                &canvas,
                &color_mapping,
                output_path
                    .to_str()
                    .ok_or_else(|| crate::io::error::io_error("Invalid output path"))?,
            )?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, start_time.elapsed());
        }

        Ok(())
    }

    fn output_path(input_path: &Path, label: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}_{label}.png", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
