use std::time::Duration;

use clap::builder::NonEmptyStringValueParser;
use clap::Parser;

use crate::fetcher::{ClientConfig, DEFAULT_USER_AGENT};
use crate::orchestrator::{RunOptions, DEFAULT_COUNT, DEFAULT_OUTPUT, DEFAULT_WORKERS};

/// Search for images and download them into a local folder.
#[derive(Debug, Parser)]
#[command(name = "image-downloader", version)]
#[command(about = "Google Image Downloader", long_about = None)]
pub struct Cli {
    /// Search query for images.
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub query: String,

    /// Number of images to download.
    #[arg(short = 'n', long = "num_images", visible_alias = "num-images", default_value_t = DEFAULT_COUNT)]
    pub num_images: usize,

    /// Output folder name.
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Number of threads to use for downloading.
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_WORKERS as u32,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub threads: u32,

    /// Give up on a request after this many seconds. Waits forever when unset.
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// User-Agent header sent with every request.
    #[arg(long, default_value = DEFAULT_USER_AGENT, hide_default_value = true)]
    pub user_agent: String,

    /// Log debug details.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            user_agent: self.user_agent.clone(),
            timeout: self.timeout.map(Duration::from_secs),
        }
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            query: self.query.clone(),
            count: self.num_images,
            output: self.output.clone(),
            workers: self.threads as usize,
        }
    }
}
