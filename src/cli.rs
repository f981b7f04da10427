use crate::constants::DEFAULT_GALLERY_DIR;
use crate::variant::Variant;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "optimize-gallery",
    about = "Shrink gallery images to fit 1080x1080 and re-encode them as WebP or JPEG",
    long_about = "optimize-gallery scans the gallery directory once and, for every image, either \
                  skips it when it is already small or resizes it to fit inside 1080x1080 and \
                  re-encodes it. The webp variant converts jpg/jpeg/png/webp files to WebP at \
                  quality 70 and removes the originals. The jpeg variant re-encodes jpg/jpeg/png \
                  files as JPEG at quality 80 in place.",
    version,
    after_help = "EXAMPLES:\n  \
    optimize-gallery\n  \
    optimize-gallery jpeg --dir ./public/images/galleria -v"
)]
pub struct Args {
    #[arg(
        value_parser = parse_variant,
        default_value = "webp",
        help = "Output variant (webp, jpeg)",
        long_help = "webp: convert to WebP at quality 70, skipping .webp files under 100 KiB. \
                     jpeg: re-encode as JPEG at quality 80 in place, skipping files under \
                     150 KiB that already fit 1080x1080."
    )]
    pub variant: Variant,

    #[arg(
        short = 'd',
        long,
        default_value = DEFAULT_GALLERY_DIR,
        help = "Gallery directory, relative to the current directory"
    )]
    pub dir: PathBuf,

    #[arg(short = 'q', long, conflicts_with = "verbose", help = "Only print errors")]
    pub quiet: bool,

    #[arg(short = 'v', long, help = "Print dimensions and target paths per file")]
    pub verbose: bool,
}

fn parse_variant(value: &str) -> Result<Variant, String> {
    value.parse::<Variant>().map_err(|e| e.to_string())
}
