use clap::Parser;
use std::path::PathBuf;
use tracing::{Level, info};
use votesheet::config::{self, GalleryConfig};
use votesheet::imaging::RustBackend;
use votesheet::{output, page, pipeline};

#[derive(Parser)]
#[command(name = "votesheet")]
#[command(about = "Generate thumbnails and a printable photo vote sheet")]
#[command(long_about = "\
Generate thumbnails and a printable photo vote sheet

Scans a folder tree for images, reports how they split across orientation
and DPI buckets, and writes serial-numbered thumbnails into one flat
output folder:

  gallery/
  ├── 001-Holiday_Pics-IMG_0042-4000x3000@300.jpg
  ├── 002-Holiday_Pics-IMG_0043-3000x4000@72.jpg
  └── ImageGallery.html            # with --html

Serials follow walk order (directories sorted by name) and stay stable
across re-runs, so --skip-existing makes incremental runs cheap. Width,
height and DPI in the name describe the original as it displays, after
EXIF orientation.

With --html the output folder also gets ImageGallery.html, a printable
contact sheet with four cards per page and, with --vote-box, a marked
voting area under each photo.")]
#[command(version)]
struct Cli {
    /// Base folder to scan for images
    #[arg(short, long, default_value = ".")]
    input: PathBuf,

    /// Output folder (default: <input>/gallery)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Thumbnail width in pixels
    #[arg(long, default_value_t = config::DEFAULT_THUMB_WIDTH)]
    thumb_width: u32,

    /// Comma-separated extensions, e.g. ".jpg,.jpeg"
    #[arg(long, default_value_t = config::DEFAULT_EXTENSIONS.join(","))]
    extensions: String,

    /// Skip creating a thumbnail if the output file already exists
    #[arg(long)]
    skip_existing: bool,

    /// Process at most N images (useful for quick tests)
    #[arg(long)]
    max_images: Option<u64>,

    /// Generate ImageGallery.html in the output folder
    #[arg(long)]
    html: bool,

    /// Include a 'VOTE HERE' box under each image (only with --html)
    #[arg(long)]
    vote_box: bool,

    /// Print the statistics as JSON instead of labelled lines
    #[arg(long)]
    stats_json: bool,

    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: Level,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(cli.log_level.into()),
        )
        .init();

    let mut config = GalleryConfig::new(cli.input, cli.output);
    config.thumb_width = cli.thumb_width;
    config.extensions = config::parse_extensions(&cli.extensions);
    config.skip_existing = cli.skip_existing;
    config.max_images = cli.max_images;

    info!("Input folder:   {}", config.input_dir.display());
    info!("Output folder:  {}", config.output_dir.display());
    info!("Thumb width:    {} px", config.thumb_width);
    info!("Extensions:     {}", config.extensions.join(", "));
    info!("Skip existing:  {}", config.skip_existing);
    if let Some(max) = config.max_images {
        info!("Max images:     {max}");
    }

    let backend = RustBackend::new();

    let stats = pipeline::collect_stats(&backend, &config);
    info!("Image statistics:");
    if cli.stats_json {
        println!("{}", output::format_stats_json(&stats)?);
    } else {
        output::print_stats_report(&stats);
    }

    let report = pipeline::generate_thumbnails(&backend, &config)?;
    info!("{}", output::format_batch_summary(&report));

    if cli.html {
        page::write_vote_sheet(&config.output_dir, cli.vote_box)?;
    }

    info!("Done.");
    Ok(())
}
