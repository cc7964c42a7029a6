//! Loads a Quiver library and prints it as a single JSON document.
//!
//! ```text
//! # To dump all the library contents into a single JSON
//! $ quiver-to-json /path/to/Quiver.qvlibrary > quiver.json
//!
//! # To include the content of all resources as data URIs
//! $ quiver-to-json --resources /path/to/Quiver.qvlibrary > quiver.json
//! ```

use clap::Parser;
use quiver::error::Result;
use quiver::loader::read_library;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quiver-to-json", version)]
#[command(about = "Dump a Quiver library as a single JSON document on stdout")]
struct Cli {
    /// Path to the .qvlibrary directory
    library: PathBuf,

    /// Also load note resources, embedded as data URIs
    #[arg(short, long)]
    resources: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let library = read_library(&cli.library, cli.resources)?;

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer(&mut stdout, &library)?;
    let _ = stdout.write_all(b"\n");
    Ok(())
}
