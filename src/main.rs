use std::io;

use anyhow::Result;
use clap::Parser;

use openpalette::cli::{Args, Command};
use openpalette::{builder, builtin, config, json};

fn main() -> Result<()> {
    match Args::parse().command {
        Command::Generate {
            output,
            config: config_path,
            set_version,
        } => {
            let (raw_variants, config_version) = match &config_path {
                Some(path) => config::load(path)?,
                None => (builtin::default_variants(), String::new()),
            };
            let version = set_version.unwrap_or(config_version);

            let palette = builder::generate(&raw_variants, &version)?;

            match output {
                Some(path) => json::write_json_file(&palette, &path)?,
                None => json::write_json(&palette, &mut io::stdout().lock())?,
            }
        }
        Command::ExampleConfig { output } => {
            config::write_example(&output)?;
            println!("Generated example config: {}", output.display());
            println!("Edit this file with your custom colors, then use:");
            println!("  openpalette generate -c {}", output.display());
        }
    }

    Ok(())
}
