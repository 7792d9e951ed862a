//! Utility functions for the CLI.

use indicatif::{ProgressBar, ProgressStyle};
use myarch_core::EntryInfo;

/// Create a percentage progress bar with standard styling.
pub fn create_progress_bar(enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>3}% {msg}")
            .expect("progress bar template is valid")
            .progress_chars("█▓▒░ "),
    );
    pb
}

/// Print entries in a formatted table.
pub fn print_entries(entries: &[EntryInfo], verbose: bool) {
    if verbose {
        println!("{:>10} {:>10}  Name", "Size", "Tokens");
        println!("{}", "-".repeat(50));

        let mut total_size = 0u64;
        let mut files = 0usize;

        for entry in entries {
            let type_prefix = if entry.is_dir() { "d " } else { "  " };
            println!(
                "{:>10} {:>10}  {}{}",
                entry.size, entry.token_count, type_prefix, entry.name
            );

            if entry.is_file() {
                total_size += entry.size;
                files += 1;
            }
        }

        println!("{}", "-".repeat(50));
        println!(
            "{:>10} bytes in {} files, {} entries",
            total_size,
            files,
            entries.len()
        );
    } else {
        for entry in entries {
            println!("{}", entry.name);
        }
    }
}
