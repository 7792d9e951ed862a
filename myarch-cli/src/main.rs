//! MyArch CLI - LZ77 directory archiver
//!
//! Packs a file or directory tree into a single MYARCH stream and
//! restores it byte-for-byte.

mod utils;

use clap::{Parser, Subcommand};
use myarch_archive::{ArchiveReader, compress, decompress};
use myarch_core::EntryInfo;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use utils::{create_progress_bar, print_entries};

#[derive(Parser)]
#[command(name = "myarch")]
#[command(author, version, about = "LZ77 directory archiver")]
#[command(long_about = "
MyArch packs a file or directory tree into a single .myarch archive
using LZ77 compression, and restores it bit-for-bit.

Examples:
  myarch compress photos photos.myarch
  myarch compress notes.txt notes.myarch
  myarch extract photos.myarch -o restored
  myarch list photos.myarch
  myarch list photos.myarch --json
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file or directory into an archive
    #[command(alias = "c")]
    Compress {
        /// File or directory to compress
        input: PathBuf,

        /// Output archive file
        archive: PathBuf,

        /// Show progress bar
        #[arg(short = 'P', long, default_value = "true")]
        progress: bool,
    },

    /// Extract an archive
    #[command(alias = "x")]
    Extract {
        /// Archive file to extract
        archive: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Show progress bar
        #[arg(short = 'P', long, default_value = "true")]
        progress: bool,
    },

    /// List contents of an archive
    #[command(alias = "l")]
    List {
        /// Archive file to list
        archive: PathBuf,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },
}

/// JSON serializable entry data for archive listings.
#[derive(Debug, Serialize, Deserialize)]
struct EntryJson {
    name: String,
    size: u64,
    token_count: u32,
    is_dir: bool,
}

impl EntryJson {
    fn from_info(info: &EntryInfo) -> Self {
        Self {
            name: info.name.clone(),
            size: info.size,
            token_count: info.token_count,
            is_dir: info.is_dir(),
        }
    }
}

/// JSON output for archive listing.
#[derive(Debug, Serialize, Deserialize)]
struct ArchiveListJson {
    archive: String,
    entries: Vec<EntryJson>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Compress {
            input,
            archive,
            progress,
        } => {
            let pb = create_progress_bar(progress);
            pb.set_message(format!("compressing {}", input.display()));

            compress(&input, &archive, |pct| pb.set_position(pct as u64))?;

            pb.finish_with_message("done");
            println!("Created {}", archive.display());
        }

        Commands::Extract {
            archive,
            output,
            progress,
        } => {
            let pb = create_progress_bar(progress);
            pb.set_message(format!("extracting {}", archive.display()));

            decompress(&archive, &output, |pct| pb.set_position(pct as u64))?;

            pb.finish_with_message("done");
            println!("Extracted to {}", output.display());
        }

        Commands::List {
            archive,
            verbose,
            json,
        } => {
            let file = File::open(&archive)?;
            let entries = ArchiveReader::new(BufReader::new(file))?.entries()?;

            if json {
                let doc = ArchiveListJson {
                    archive: archive.display().to_string(),
                    entries: entries.iter().map(EntryJson::from_info).collect(),
                };
                println!("{}", serde_json::to_string_pretty(&doc)?);
            } else {
                println!("Archive: {}", archive.display());
                println!();
                print_entries(&entries, verbose);
            }
        }
    }

    Ok(())
}
