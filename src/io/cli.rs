//! Command-line interface for batch painting of images

use crate::algorithm::executor::{Colony, FoodLayout};
use crate::analysis::evaluation::{Advice, EvaluationParams, evaluate};
use crate::analysis::markov::ColorMarkovChain;
use crate::analysis::profile::{TargetSelection, target_colors};
use crate::io::configuration::{
    COLOR_FILTERING_HIGHER_LIMIT, COLOR_FILTERING_LOWER_LIMIT, DEFAULT_SAMPLE_INTERVAL,
    DEFAULT_SEED, DEFAULT_TARGET_COLOR_COUNT, DEFAULT_TICKS, GIF_RELATIVE, IMG_FORMAT,
    MAXIMUM_IMAGE_SIZE, MOSAIC_NEIGHBORHOOD, MOSAIC_THRESHOLD, OIL_PAINTED_RELATIVE,
    OIL_PAINTED_SUFFIX, OIL_PAINTING_INTENSITY_LEVELS, OIL_PAINTING_RADIUS, OUTPUT_GIF_DELAY_MS,
    RAW_RELATIVE, RAW_SUFFIX, SimulationConfig,
};
use crate::io::error::{Result, SimulationError, invalid_source};
use crate::io::image::{load_rgb, rescale_to_limit, save_rgb};
use crate::io::painting::oil_paint;
use crate::io::progress::ProgressManager;
use crate::io::visualization::SnapshotCapture;
use clap::Parser;
use rand::seq::IndexedRandom;
use rand::{SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Install the stderr log subscriber, filtered by `RUST_LOG` when set
///
/// Falls back to `warn` when `quiet` and `info` otherwise. Returns whether the
/// subscriber was installed; a subscriber already in place is kept and the
/// refusal is logged through it.
pub fn init_tracing(quiet: bool) -> bool {
    let fallback = if quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    match tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        Ok(()) => true,
        Err(error) => {
            tracing::warn!("Keeping the existing tracing subscriber: {error}");
            false
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "antpaint")]
#[command(
    author,
    version,
    about = "Repaint images with an ant colony and Markov-sampled palettes"
)]
/// Command-line arguments for the painting tool
// Independent on/off switches for output and layout
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Palette image or directory of palettes, one is drawn per target color
    #[arg(short, long, value_name = "PALETTES")]
    pub palettes: PathBuf,

    /// Directory receiving raw, oil painted and animated outputs
    #[arg(short, long, default_value = "output")]
    pub output: PathBuf,

    /// Random seed for reproducible runs
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Ticks simulated per image
    #[arg(short, long, default_value_t = DEFAULT_TICKS)]
    pub ticks: u64,

    /// Number of target colors extracted from each image
    #[arg(short, long, default_value_t = DEFAULT_TARGET_COLOR_COUNT)]
    pub colors: usize,

    /// Cell side length in pixels
    #[arg(long)]
    pub cell_size: Option<u32>,

    /// Population cap
    #[arg(long)]
    pub max_ants: Option<usize>,

    /// Ticks between animation frames
    #[arg(long, default_value_t = DEFAULT_SAMPLE_INTERVAL)]
    pub sample_interval: u64,

    /// Scatter food on a blank canvas instead of using the image as a mask
    #[arg(long)]
    pub procedural: bool,

    /// Skip the animated GIF
    #[arg(long)]
    pub no_gif: bool,

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

    /// Engine configuration with command-line overrides applied
    pub fn simulation_config(&self) -> SimulationConfig {
        let mut config = SimulationConfig::default();
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        if let Some(max_ants) = self.max_ants {
            config.max_ants = max_ants;
        }
        config
    }
}

/// Output locations for one input image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// Canvas as simulated
    pub raw: PathBuf,
    /// Canvas after the oil painting filter
    pub oil_painted: PathBuf,
    /// Snapshot animation
    pub gif: PathBuf,
}

impl OutputPaths {
    /// Derive output paths for `input` under `output_dir`
    pub fn for_input(output_dir: &Path, input: &Path) -> Self {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        Self {
            raw: output_dir
                .join(RAW_RELATIVE)
                .join(format!("{stem}{RAW_SUFFIX}.{IMG_FORMAT}")),
            oil_painted: output_dir
                .join(OIL_PAINTED_RELATIVE)
                .join(format!("{stem}{OIL_PAINTED_SUFFIX}.{IMG_FORMAT}")),
            gif: output_dir.join(GIF_RELATIVE).join(format!("{stem}.gif")),
        }
    }
}

/// Whether `path` has a supported image extension
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| extension.eq_ignore_ascii_case(known))
        })
}

/// Image files at `path`: the file itself, or a directory's images sorted by name
///
/// # Errors
///
/// Returns an error if the path is neither an image nor a readable directory
pub fn collect_images(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        if is_image_file(path) {
            Ok(vec![path.to_path_buf()])
        } else {
            Err(invalid_source(&format!(
                "{} is not a png or jpeg image",
                path.display()
            )))
        }
    } else if path.is_dir() {
        let entries = std::fs::read_dir(path).map_err(|source| SimulationError::FileSystem {
            path: path.to_path_buf(),
            operation: "read directory",
            source,
        })?;
        let mut files = Vec::new();
        for entry in entries {
            let file = entry?.path();
            if file.is_file() && is_image_file(&file) {
                files.push(file);
            }
        }
        files.sort();
        Ok(files)
    } else {
        Err(invalid_source(&format!(
            "{} is not an image or directory",
            path.display()
        )))
    }
}

/// Orchestrates batch processing of images with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
    rng: StdRng,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);
        let rng = StdRng::seed_from_u64(cli.seed);

        Self {
            cli,
            progress_manager,
            rng,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the inputs or palettes cannot be listed, the
    /// configuration is invalid, or an image fails to load or export
    pub fn process(&mut self) -> Result<()> {
        self.cli.simulation_config().validate()?;
        let palettes = collect_images(&self.cli.palettes)?;
        if palettes.is_empty() {
            return Err(invalid_source(&format!(
                "no palette images found in {}",
                self.cli.palettes.display()
            )));
        }

        let files: Vec<PathBuf> = collect_images(&self.cli.target)?
            .into_iter()
            .filter(|file| self.should_process_file(file))
            .collect();
        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index, &palettes)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }
        let outputs = OutputPaths::for_input(&self.cli.output, input_path);
        if outputs.raw.exists() {
            tracing::info!(input = %input_path.display(), "skipping, output exists");
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize, palettes: &[PathBuf]) -> Result<()> {
        let start_time = Instant::now();
        let config = self.cli.simulation_config();
        tracing::info!(input = %input_path.display(), "painting");

        let image = rescale_to_limit(load_rgb(input_path)?, MAXIMUM_IMAGE_SIZE);
        let selection = TargetSelection {
            upper: COLOR_FILTERING_HIGHER_LIMIT,
            lower: COLOR_FILTERING_LOWER_LIMIT,
            background: config.background_color,
            tolerance: config.color_similarity_threshold,
            limit: self.cli.colors,
        };
        let targets = target_colors(&image, &selection);
        if targets.is_empty() {
            tracing::warn!(input = %input_path.display(), "no target colors found, skipping");
            return Ok(());
        }
        if targets.len() < self.cli.colors {
            tracing::warn!(
                found = targets.len(),
                requested = self.cli.colors,
                "fewer target colors than requested, proceeding with what was found"
            );
        }

        let mut chains = Vec::with_capacity(targets.len());
        for _ in &targets {
            let Some(palette) = palettes.choose(&mut self.rng) else {
                return Err(invalid_source(&"no palette images available"));
            };
            tracing::info!(palette = %palette.display(), "training palette");
            chains.push(ColorMarkovChain::trained(
                &load_rgb(palette)?,
                &[config.background_color],
                config.color_similarity_threshold,
            ));
        }

        let layout = if self.cli.procedural {
            FoodLayout::Procedural {
                width: image.width(),
                height: image.height(),
                targets,
            }
        } else {
            FoodLayout::Mask { image, targets }
        };
        let mut colony = Colony::build(config.clone(), layout, chains, self.cli.seed)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, self.cli.ticks);
        }
        let mut capture = SnapshotCapture::new(self.cli.sample_interval);
        capture.capture(colony.snapshot_pixels());
        let progress = &mut self.progress_manager;
        colony.run(self.cli.ticks, |state| {
            if let Some(pm) = progress.as_mut() {
                pm.update_tick(index, state.ticks(), state.ants().len());
            }
            capture.record(state.ticks(), state.snapshot_pixels());
        });
        let ants = colony.ants().len();
        colony.shutdown();
        capture.capture(colony.snapshot_pixels());

        let outputs = OutputPaths::for_input(&self.cli.output, input_path);
        let canvas = colony.snapshot_pixels();
        save_rgb(canvas, &outputs.raw)?;
        let painted = oil_paint(canvas, OIL_PAINTING_RADIUS, OIL_PAINTING_INTENSITY_LEVELS);
        save_rgb(&painted, &outputs.oil_painted)?;
        if !self.cli.no_gif {
            capture.export_gif(&outputs.gif, OUTPUT_GIF_DELAY_MS)?;
        }

        let evaluation = evaluate(
            canvas,
            &EvaluationParams {
                background: config.background_color,
                tolerance: config.color_similarity_threshold,
                neighborhood: MOSAIC_NEIGHBORHOOD,
                threshold: MOSAIC_THRESHOLD,
            },
        );
        tracing::info!(
            input = %input_path.display(),
            ticks = colony.ticks(),
            ants,
            faults = colony.faults(),
            coverage = evaluation.coverage,
            mosaic = evaluation.mosaic,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "painted"
        );
        match evaluation.coverage_advice() {
            Advice::LowCoverage => tracing::warn!("coverage is low, consider more ticks"),
            Advice::HighCoverage => tracing::warn!("coverage is high, consider fewer ticks"),
            _ => {}
        }
        match evaluation.mosaic_advice() {
            Advice::Rerun => tracing::warn!("mosaic score is poor, consider a rerun"),
            Advice::LowMosaic => tracing::warn!("mosaic score is low"),
            _ => {}
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }
        Ok(())
    }
}
