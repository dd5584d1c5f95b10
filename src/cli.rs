use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Generate complete terminal color palettes from a handful of hex values.
#[derive(Parser, Debug)]
#[command(name = "openpalette", version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the palette JSON from the built-in set or a config file
    Generate {
        /// Write the palette to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (JSON) with custom variants and colors
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Palette version string (overrides the config's)
        #[arg(long = "set-version")]
        set_version: Option<String>,
    },

    /// Write an example configuration file to customize
    ExampleConfig {
        /// Output config file path
        #[arg(short, long, default_value = "palette-config.json")]
        output: PathBuf,
    },
}
