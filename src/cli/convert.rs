//! Convert command implementation.
//!
//! Loads an image, runs the mosaic pipeline, and writes the mosaic PNG, the
//! JSON colour report, and optionally a bead preview.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::MosaicConfig;
use crate::error::{MosaicError, Result};
use crate::output::{display_path, plural, Printer};
use crate::pixelate::{load_image, Mosaic, Pipeline, ResizeDraw};
use crate::render::{render_beads, write_image, write_png, write_report_json, Legend};
use crate::types::{CropRect, Palette};

use super::Dims;

/// Convert an image into a mosaic and colour matrix
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Image file to convert
    #[arg(required = true)]
    pub image: PathBuf,

    /// Region of the image to use, as X,Y,WIDTH,HEIGHT
    #[arg(long, conflicts_with = "square")]
    pub crop: Option<CropRect>,

    /// Use the largest centred square of the image
    #[arg(long)]
    pub square: bool,

    /// Working canvas size (WIDTHxHEIGHT or N)
    #[arg(long)]
    pub size: Option<Dims>,

    /// Block grid (COLUMNSxROWS or N)
    #[arg(long)]
    pub grid: Option<Dims>,

    /// Comma-separated palette, e.g. "#000000,#FFFFFF"
    #[arg(long)]
    pub palette: Option<String>,

    /// Config file (default: ./mosaic.yaml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Integer upscale of the written mosaic PNG
    #[arg(long)]
    pub scale: Option<u32>,

    /// Also write a bead preview with this many pixels per bead
    #[arg(long, value_name = "CELL")]
    pub beads: Option<u32>,

    /// Print the mosaic as a PNG data URL on stdout
    #[arg(long)]
    pub data_url: bool,

    /// Use nearest-neighbour instead of bilinear resampling
    #[arg(long)]
    pub nearest: bool,
}

/// Paths of the files written by one conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOutputs {
    pub mosaic: PathBuf,
    pub report: PathBuf,
    pub beads: Option<PathBuf>,
}

pub fn run(args: ConvertArgs, printer: &Printer) -> Result<ConvertOutputs> {
    let cwd = std::env::current_dir()?;
    let config = resolve_config(&args, &cwd)?;

    // Validate everything before touching the image.
    let pipeline_config = config.pipeline_config()?;
    let drawer = if args.nearest {
        ResizeDraw::nearest()
    } else {
        ResizeDraw::bilinear()
    };
    let pipeline = Pipeline::with_drawer(pipeline_config, drawer)?;

    let display = display_path(&args.image);
    let image = load_image(&args.image)?;
    printer.status(
        "Loaded",
        &format!("{} ({}x{})", display, image.width(), image.height()),
    );

    let crop = match (args.crop, args.square) {
        (Some(crop), _) => Some(crop),
        (None, true) => Some(CropRect::centred_square(image.width(), image.height())),
        (None, false) => None,
    };
    if let Some(crop) = crop {
        printer.info("Cropping", &crop.to_string());
    }
    if crop.is_none() && image.width() != image.height() {
        printer.warning(
            "Stretching",
            &format!(
                "{}x{} image onto a {}x{} canvas (use --square or --crop)",
                image.width(),
                image.height(),
                config.output_width,
                config.output_height
            ),
        );
    }

    let mosaic = pipeline.run(&image, crop)?;
    let grid = mosaic.grid();
    printer.status(
        "Quantized",
        &format!("{} into {}x{} blocks", display, grid.count_x, grid.count_y),
    );

    let outputs = write_outputs(&mosaic, &args, &config)?;

    let legend = Legend::for_mosaic(&mosaic);
    let used = legend.used().count();
    printer.status(
        "Wrote",
        &format!(
            "{} ({} of {})",
            display_path(&outputs.mosaic),
            plural(used, "colour", "colours"),
            mosaic.matrix().palette().len()
        ),
    );
    printer.status("Wrote", &display_path(&outputs.report));
    if let Some(beads) = &outputs.beads {
        printer.status("Wrote", &display_path(beads));
    }

    if args.data_url {
        println!("{}", mosaic.to_data_url()?);
    }

    Ok(outputs)
}

/// Config file values with command-line overrides applied.
fn resolve_config(args: &ConvertArgs, cwd: &Path) -> Result<MosaicConfig> {
    let mut config = MosaicConfig::discover(args.config.as_deref(), cwd)?;

    if let Some(size) = args.size {
        config.output_width = size.x;
        config.output_height = size.y;
    }
    if let Some(grid) = args.grid {
        config.count_pixel_x = grid.x;
        config.count_pixel_y = grid.y;
    }
    if let Some(palette) = &args.palette {
        config.palette = Palette::parse_list(palette)?.to_hex_list();
    }
    if let Some(output) = &args.output {
        config.output = output.clone();
    }
    if let Some(scale) = args.scale {
        config.scale = scale;
    }

    Ok(config)
}

fn write_outputs(
    mosaic: &Mosaic,
    args: &ConvertArgs,
    config: &MosaicConfig,
) -> Result<ConvertOutputs> {
    let out_dir = &config.output;
    if !out_dir.exists() {
        fs::create_dir_all(out_dir).map_err(|e| MosaicError::Io {
            path: out_dir.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let stem = args
        .image
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("mosaic");

    let mosaic_path = out_dir.join(format!("{}.mosaic.png", stem));
    write_png(mosaic.raster(), &mosaic_path, config.scale)?;

    let report_path = out_dir.join(format!("{}.mosaic.json", stem));
    write_report_json(mosaic, &report_path)?;

    let beads_path = match args.beads {
        Some(cell) => {
            let path = out_dir.join(format!("{}.beads.png", stem));
            write_image(&render_beads(&mosaic.block_pattern(), cell)?, &path)?;
            Some(path)
        }
        None => None,
    };

    Ok(ConvertOutputs {
        mosaic: mosaic_path,
        report: report_path,
        beads: beads_path,
    })
}
