//! Search, then fan the found images out over a fixed pool of download workers.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use rayon::ThreadPoolBuilder;
use tracing::{debug, info, warn};

use crate::downloader::{DownloadTarget, Downloader};
use crate::error::{Error, Result};
use crate::fetcher::{ClientConfig, Fetcher, UReqFetcher};
use crate::search::SearchClient;

pub const DEFAULT_COUNT: usize = 10;
pub const DEFAULT_OUTPUT: &str = "downloaded_images";
pub const DEFAULT_WORKERS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub query: String,
    pub count: usize,
    pub output: String,
    pub workers: usize,
}

impl RunOptions {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            query: String::new(),
            count: DEFAULT_COUNT,
            output: DEFAULT_OUTPUT.to_string(),
            workers: DEFAULT_WORKERS,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum RunOutcome {
    NothingToDo,
    Completed {
        folder: PathBuf,
        succeeded: usize,
        failed: usize,
    },
}

pub fn folder_name(query: &str) -> String {
    query.replace(' ', "_")
}

pub fn destination_folder(cwd: &Path, output: &str, query: &str) -> PathBuf {
    cwd.join(output).join(folder_name(query))
}

pub struct ImageDownloader<F: Fetcher> {
    fetcher: F,
}

impl<F> ImageDownloader<F>
where
    F: Fetcher,
{
    pub fn with_fetcher(fetcher: F) -> Self {
        ImageDownloader { fetcher }
    }

    pub fn run(&self, options: &RunOptions) -> Result<RunOutcome> {
        let cwd = env::current_dir().map_err(|e| Error::io(".", e))?;

        self.run_in(&cwd, options)
    }

    pub fn run_in(&self, cwd: &Path, options: &RunOptions) -> Result<RunOutcome> {
        info!("Searching for '{}' images...", options.query);

        let search = SearchClient::new(&self.fetcher);

        let urls = match search.search_images(&options.query, options.count) {
            Ok(urls) => urls,
            Err(Error::NoResultsFound { .. }) => {
                info!("No images found.");
                return Ok(RunOutcome::NothingToDo);
            }
            Err(e) => {
                warn!("Error fetching search results: {}", e);
                info!("No images found.");
                return Ok(RunOutcome::NothingToDo);
            }
        };

        info!("Found {} images. Downloading...", urls.len());

        let folder = destination_folder(cwd, &options.output, &options.query);
        let prefix = folder_name(&options.query);

        let targets: Vec<DownloadTarget> = urls
            .into_iter()
            .enumerate()
            .map(|(index, url)| DownloadTarget::new(url, folder.clone(), prefix.clone(), index))
            .collect();

        let (succeeded, failed) = self.download_all(&targets, options.workers)?;

        debug!("{} downloads succeeded, {} failed", succeeded, failed);

        info!("Download completed. Images saved in: {}", folder.display());

        Ok(RunOutcome::Completed {
            folder,
            succeeded,
            failed,
        })
    }

    fn download_all(&self, targets: &[DownloadTarget], workers: usize) -> Result<(usize, usize)> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers.max(1))
            .thread_name(|i| format!("download-{}", i))
            .build()?;

        let downloader = Downloader::with_fetcher(&self.fetcher);
        let (tx, rx) = mpsc::channel();

        pool.scope(|scope| {
            for target in targets {
                let downloader = &downloader;
                let tx = tx.clone();

                scope.spawn(move |_| {
                    let ok = match downloader.download(target) {
                        Ok(download) => {
                            let name = download
                                .file
                                .file_name()
                                .map(|name| name.to_string_lossy().into_owned())
                                .unwrap_or_default();
                            info!("Downloaded: {}", name);
                            true
                        }
                        Err(e) => {
                            warn!("Error downloading {}: {}", target.url, e);
                            false
                        }
                    };

                    let _ = tx.send(ok);
                });
            }
        });

        drop(tx);

        let succeeded = rx.iter().filter(|ok| *ok).count();

        Ok((succeeded, targets.len() - succeeded))
    }
}

impl ImageDownloader<UReqFetcher> {
    pub fn new(config: &ClientConfig) -> Self {
        ImageDownloader::with_fetcher(UReqFetcher::new(config))
    }
}
