use crate::batch::OptimizeOptions;
use crate::constants::DEFAULT_INPUT_DIR;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "img-tiers",
    about = "Generate responsive WebP and JPEG tiers for a directory of images",
    long_about = "img-tiers resizes every JPEG, PNG and WebP file in a directory into four width tiers \
                  (thumb 400px, medium 800px, large 1200px, full 2000px). Each tier is written as a lossy \
                  WebP and a progressive JPEG with orientation applied and all metadata stripped, and a \
                  manifest.json indexes the results. Images are never upscaled.",
    version,
    after_help = "EXAMPLES:\n  \
    img-tiers\n  \
    img-tiers -i ./photos -o ./public/img\n  \
    img-tiers --quiet"
)]
pub struct Args {
    #[arg(
        short = 'i',
        long,
        default_value = DEFAULT_INPUT_DIR,
        help = "Directory containing the source images",
        long_help = "Directory containing the source images. Only files directly inside it are \
                     processed; names containing 'optimized' are skipped."
    )]
    pub input: PathBuf,

    #[arg(
        short = 'o',
        long,
        help = "Output directory (default: <input>/optimized)",
        long_help = "Root of the generated layout: one subdirectory per tier plus manifest.json. \
                     Existing files are overwritten."
    )]
    pub output: Option<PathBuf>,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Only print errors"
    )]
    pub quiet: bool,

    #[arg(
        short = 'v',
        long,
        help = "Print dimensions and output paths for every tier"
    )]
    pub verbose: bool,
}

impl Args {
    pub fn to_options(&self) -> OptimizeOptions {
        OptimizeOptions::new(self.input.clone(), self.output.clone())
    }
}
