//! Project configuration (mosaic.yaml) parsing.
//!
//! The config file holds pipeline defaults: canvas size, block grid, palette,
//! and where output goes. Command-line flags override it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MosaicError, Result};
use crate::pixelate::{Grid, PipelineConfig, DEFAULT_OUTPUT_SIZE, DEFAULT_PIXEL_COUNT};
use crate::types::{Palette, DEFAULT_PALETTE};

/// Config file name looked up in the working directory.
pub const CONFIG_FILENAME: &str = "mosaic.yaml";

/// Settings loaded from mosaic.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MosaicConfig {
    /// Working canvas width in pixels.
    pub output_width: u32,

    /// Working canvas height in pixels.
    pub output_height: u32,

    /// Blocks across.
    pub count_pixel_x: u32,

    /// Blocks down.
    pub count_pixel_y: u32,

    /// Palette as `#RRGGBB` strings, in display order.
    pub palette: Vec<String>,

    /// Output directory for rendered files.
    pub output: PathBuf,

    /// Integer upscale applied when writing the mosaic PNG.
    pub scale: u32,
}

impl Default for MosaicConfig {
    fn default() -> Self {
        Self {
            output_width: DEFAULT_OUTPUT_SIZE,
            output_height: DEFAULT_OUTPUT_SIZE,
            count_pixel_x: DEFAULT_PIXEL_COUNT,
            count_pixel_y: DEFAULT_PIXEL_COUNT,
            palette: DEFAULT_PALETTE.iter().map(|s| s.to_string()).collect(),
            output: PathBuf::from("dist"),
            scale: 1,
        }
    }
}

impl MosaicConfig {
    /// Load config from a yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| MosaicError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `path` if given, else `mosaic.yaml` in `dir` if present, else
    /// defaults.
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| MosaicError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Render as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| MosaicError::Build {
            message: format!("Failed to serialize config: {}", e),
            help: None,
        })
    }

    /// Validated palette.
    pub fn palette(&self) -> Result<Palette> {
        Palette::from_hex_list(self.palette.as_slice())
    }

    /// Turn into a validated pipeline configuration.
    pub fn pipeline_config(&self) -> Result<PipelineConfig> {
        let config = PipelineConfig {
            output_width: self.output_width,
            output_height: self.output_height,
            grid: Grid::new(self.count_pixel_x, self.count_pixel_y),
            palette: self.palette()?,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_parse_empty_uses_defaults() {
        let config = MosaicConfig::parse("{}").unwrap();
        assert_eq!(config, MosaicConfig::default());
    }

    #[test]
    fn test_parse_partial() {
        let yaml = "count_pixel_x: 32\ncount_pixel_y: 16\noutput: build\n";
        let config = MosaicConfig::parse(yaml).unwrap();

        assert_eq!(config.count_pixel_x, 32);
        assert_eq!(config.count_pixel_y, 16);
        assert_eq!(config.output, PathBuf::from("build"));
        assert_eq!(config.output_width, 300);
        assert_eq!(config.palette.len(), 6);
    }

    #[test]
    fn test_parse_palette() {
        let yaml = "palette:\n  - \"#000000\"\n  - \"#ffffff\"\n";
        let config = MosaicConfig::parse(yaml).unwrap();
        assert_eq!(
            config.palette().unwrap().to_hex_list(),
            vec!["#000000", "#FFFFFF"]
        );
    }

    #[test]
    fn test_empty_palette_is_invalid() {
        let config = MosaicConfig::parse("palette: []").unwrap();
        assert!(matches!(
            config.pipeline_config(),
            Err(MosaicError::InvalidPalette { .. })
        ));
    }

    #[test]
    fn test_oversized_grid_is_degenerate() {
        let config = MosaicConfig::parse("output_width: 64\ncount_pixel_x: 65").unwrap();
        assert!(matches!(
            config.pipeline_config(),
            Err(MosaicError::DegenerateGrid { .. })
        ));
    }

    #[test]
    fn test_parse_invalid_yaml() {
        assert!(MosaicConfig::parse("output_width: [").is_err());
        assert!(MosaicConfig::parse("output_width: wide").is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = MosaicConfig::default();
        let parsed = MosaicConfig::parse(&config.to_yaml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_discover() {
        let dir = tempdir().unwrap();
        assert_eq!(
            MosaicConfig::discover(None, dir.path()).unwrap(),
            MosaicConfig::default()
        );

        std::fs::write(dir.path().join(CONFIG_FILENAME), "scale: 3").unwrap();
        assert_eq!(MosaicConfig::discover(None, dir.path()).unwrap().scale, 3);

        let other = dir.path().join("other.yaml");
        std::fs::write(&other, "scale: 5").unwrap();
        assert_eq!(
            MosaicConfig::discover(Some(&other), dir.path()).unwrap().scale,
            5
        );
    }
}
