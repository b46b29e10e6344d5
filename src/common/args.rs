use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Path to a configuration file. Defaults to `mdpress.toml` in the working directory, if one exists.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the conversion server.
    Serve {
        /// The address to listen on. Overrides the configuration file.
        #[arg(short, long)]
        address: Option<String>,
        /// The port to listen on. Overrides the configuration file.
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Render a single Markdown file to PDF, then exit.
    Convert {
        /// The Markdown file to render.
        input: PathBuf,
        /// Destination path. Defaults to the input path with a `.pdf` extension.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
