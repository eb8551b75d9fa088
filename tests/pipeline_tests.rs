//! End-to-end checks of the mosaic pipeline through the public API.

use image::{DynamicImage, Rgba, RgbaImage};
use pretty_assertions::assert_eq;

use mosaic::{
    average_blocks, decode_image, encode_png, recolor, Colour, CropRect, Draw, Grid, MosaicError,
    Palette, Pipeline, PipelineConfig, Raster,
};

/// Deterministic stand-in for the resampler: a diagonal colour ramp.
struct RampDraw;

impl Draw for RampDraw {
    fn draw(&self, _image: &DynamicImage, width: u32, height: u32) -> mosaic::Result<Raster> {
        let mut raster = Raster::filled(width, height, Colour::BLACK);
        for y in 0..height {
            for x in 0..width {
                let r = (x * 255 / width) as u8;
                let g = (y * 255 / height) as u8;
                let b = ((x + y) * 127 / (width + height)) as u8;
                raster.set_pixel(x, y, Colour::new(r, g, b, 255));
            }
        }
        Ok(raster)
    }
}

fn photo() -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_fn(97, 61, |x, y| {
        Rgba([(x * 2) as u8, (y * 4) as u8, ((x * y) % 256) as u8, 255])
    }))
}

fn default_pipeline() -> Pipeline<RampDraw> {
    Pipeline::with_drawer(PipelineConfig::default(), RampDraw).unwrap()
}

#[test]
fn repeated_runs_are_byte_identical() {
    let pipeline = Pipeline::new(PipelineConfig::default()).unwrap();
    let image = photo();

    let first = pipeline.run(&image, Some(CropRect::new(10, 0, 61, 61))).unwrap();
    let second = pipeline.run(&image, Some(CropRect::new(10, 0, 61, 61))).unwrap();

    assert_eq!(first.raster().as_bytes(), second.raster().as_bytes());
    assert_eq!(first.matrix().hex_rows(), second.matrix().hex_rows());
    assert_eq!(first.to_data_url().unwrap(), second.to_data_url().unwrap());
}

#[test]
fn matrix_matches_raster_dimensions_for_any_grid() {
    for count in [1, 2, 7, 128, 300] {
        let config = PipelineConfig {
            grid: Grid::square(count),
            ..PipelineConfig::default()
        };
        let mosaic = Pipeline::with_drawer(config, RampDraw)
            .unwrap()
            .run(&photo(), None)
            .unwrap();

        let rows = mosaic.matrix().hex_rows();
        assert_eq!(rows.len() as u32, mosaic.raster().height());
        for row in &rows {
            assert_eq!(row.len() as u32, mosaic.raster().width());
        }
    }
}

#[test]
fn every_matrix_entry_is_a_palette_colour() {
    let mosaic = default_pipeline().run(&photo(), None).unwrap();
    let palette = mosaic.matrix().palette().to_hex_list();

    for row in mosaic.matrix().hex_rows() {
        for hex in row {
            assert!(palette.contains(&hex), "{} is not in the palette", hex);
        }
    }
}

#[test]
fn blocks_are_uniform_after_averaging_and_recolouring() {
    let grid = Grid::new(9, 5);
    let raster = RampDraw.draw(&photo(), 50, 40).unwrap();
    let averaged = average_blocks(raster, grid).unwrap();
    let (recoloured, matrix) = recolor(averaged.clone(), &Palette::default_palette());

    for by in 0..grid.count_y {
        let y0 = by * 40 / grid.count_y;
        let y1 = (by + 1) * 40 / grid.count_y;
        for bx in 0..grid.count_x {
            let x0 = bx * 50 / grid.count_x;
            let x1 = (bx + 1) * 50 / grid.count_x;
            for y in y0..y1 {
                for x in x0..x1 {
                    assert_eq!(averaged.pixel(x, y), averaged.pixel(x0, y0));
                    assert_eq!(recoloured.pixel(x, y), recoloured.pixel(x0, y0));
                    assert_eq!(matrix.get(x, y), matrix.get(x0, y0));
                }
            }
        }
    }
}

#[test]
fn equidistant_colour_goes_to_earlier_entry() {
    // (120, 0, 120) is exactly 120 * sqrt(2) from both entries.
    let probe = Colour::rgb(120, 0, 120);
    let forward = Palette::from_hex_list(&["#F00000", "#0000F0"]).unwrap();
    let backward = Palette::from_hex_list(&["#0000F0", "#F00000"]).unwrap();

    for _ in 0..5 {
        assert_eq!(forward.nearest(probe).1.to_string(), "#F00000");
        assert_eq!(backward.nearest(probe).1.to_string(), "#0000F0");
    }
}

#[test]
fn single_block_uniform_red_is_unchanged() {
    let red = Colour::new(255, 0, 0, 255);
    let averaged = average_blocks(Raster::filled(4, 4, red), Grid::square(1)).unwrap();
    assert_eq!(averaged, Raster::filled(4, 4, red));
}

#[test]
fn light_grey_matches_white() {
    let palette = Palette::from_hex_list(&["#000000", "#FFFFFF"]).unwrap();
    assert_eq!(palette.nearest(Colour::rgb(200, 200, 200)).1.to_string(), "#FFFFFF");
}

#[test]
fn exact_match_wins_over_neighbour() {
    let palette = Palette::from_hex_list(&["#808080", "#818181"]).unwrap();
    assert_eq!(palette.nearest(Colour::rgb(128, 128, 128)).1.to_string(), "#808080");
}

#[test]
fn hex_parses_to_channels() {
    let c = Colour::from_hex("#DBCABB").unwrap();
    assert_eq!((c.r, c.g, c.b), (219, 202, 187));
}

#[test]
fn empty_palette_is_rejected_before_any_pixel() {
    let empty: Vec<String> = Vec::new();
    let err = Palette::from_hex_list(empty.as_slice()).unwrap_err();
    assert!(matches!(err, MosaicError::InvalidPalette { .. }));

    let config = mosaic::MosaicConfig::parse("palette: []").unwrap();
    assert!(matches!(
        config.pipeline_config(),
        Err(MosaicError::InvalidPalette { .. })
    ));
}

#[test]
fn oversized_grid_is_rejected() {
    let config = PipelineConfig {
        grid: Grid::square(301),
        ..PipelineConfig::default()
    };
    assert!(matches!(
        Pipeline::with_drawer(config, RampDraw),
        Err(MosaicError::DegenerateGrid { .. })
    ));
}

#[test]
fn png_input_round_trips_through_pipeline() {
    let source = Raster::from(photo().to_rgba8());
    let bytes = encode_png(&source, 1).unwrap();
    let decoded = decode_image(&bytes).unwrap();

    let config = PipelineConfig {
        output_width: 97,
        output_height: 61,
        grid: Grid::new(97, 61),
        palette: Palette::default_palette(),
    };
    let pipeline = Pipeline::new(config).unwrap();
    let mosaic = pipeline.run(&decoded, None).unwrap();

    // One block per pixel: recolouring alone decides the output.
    let (expected, _) = recolor(source, &Palette::default_palette());
    assert_eq!(mosaic.raster(), &expected);
}
