pub mod cli;
pub mod downloader;
pub mod error;
pub mod fetcher;
pub mod logging;
pub mod orchestrator;
pub mod search;

pub use downloader::{Download, DownloadTarget, Downloader};
pub use error::{Error, Result};
pub use fetcher::{ClientConfig, Fetcher, Response, UReqFetcher};
pub use orchestrator::{ImageDownloader, RunOptions, RunOutcome};
