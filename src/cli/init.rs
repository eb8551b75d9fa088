//! Init command implementation.
//!
//! Writes a `mosaic.yaml` with the default pipeline settings.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{MosaicConfig, CONFIG_FILENAME};
use crate::error::{MosaicError, Result};
use crate::output::{display_path, Printer};

/// Write a default mosaic.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write into (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing mosaic.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(MosaicError::Build {
            message: format!("{} already exists", CONFIG_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let yaml = MosaicConfig::default().to_yaml()?;
    fs::write(&config_path, yaml).map_err(|e| MosaicError::Io {
        path: config_path.clone(),
        message: format!("Failed to write config: {}", e),
    })?;

    printer.status("Created", &display_path(&config_path));

    Ok(())
}
