use std::path::PathBuf;

use clap::Parser;
use sdg16_explorer::Site;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file overriding the built-in site content
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Start in dark mode
    #[arg(long)]
    dark: bool,
}

fn main() {
    let args = Args::parse();
    let site = match args.content {
        Some(path) => Site::from_json(path),
        None => Site::embedded(),
    };
    let site = site.expect("Failed to load site content");

    if let Err(e) = site.dark_mode(args.dark).run() {
        eprintln!("Error running site: {}", e);
        std::process::exit(1);
    }
}
