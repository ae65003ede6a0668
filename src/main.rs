use clap::Parser;

use image_downloader::cli::Cli;
use image_downloader::logging;
use image_downloader::ImageDownloader;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose);

    let downloader = ImageDownloader::new(&cli.client_config());

    // Nothing found and per-image failures both end in a normal exit.
    downloader.run(&cli.run_options())?;

    Ok(())
}
