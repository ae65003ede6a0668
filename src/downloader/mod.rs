mod data_url;

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;
use url::Url;

use crate::error::{Error, Result};
use crate::fetcher::{ClientConfig, Fetcher, UReqFetcher};

const EXTENSION: &str = "jpg";

#[derive(Debug, Clone, PartialEq)]
pub struct DownloadTarget {
    pub url: String,
    pub folder: PathBuf,
    pub prefix: String,
    pub index: usize,
}

impl DownloadTarget {
    pub fn new(url: String, folder: PathBuf, prefix: String, index: usize) -> Self {
        Self {
            url,
            folder,
            prefix,
            index,
        }
    }

    pub fn file_prefix(&self) -> String {
        format!("{}_{}", self.prefix, self.index)
    }
}

#[derive(Debug, PartialEq)]
pub struct Download {
    pub source: String,
    pub file: PathBuf,
    pub bytes: usize,
}

impl Download {
    pub fn new(source: String, file: PathBuf, bytes: usize) -> Self {
        Self {
            source,
            file,
            bytes,
        }
    }
}

pub struct Downloader<T: Fetcher> {
    fetcher: T,
}

impl<T> Downloader<T>
where
    T: Fetcher,
{
    pub fn with_fetcher(fetcher: T) -> Self {
        Downloader { fetcher }
    }

    pub fn download(&self, target: &DownloadTarget) -> Result<Download> {
        ensure_dir(&target.folder)?;

        let body = self.fetch_bytes(&target.url)?;

        let stamp = chrono::Utc::now().timestamp_millis();

        let file = write_unique(&target.folder, &target.file_prefix(), stamp, &body)?;

        debug!("saved {} bytes from {} to {}", body.len(), target.url, file.display());

        Ok(Download::new(target.url.clone(), file, body.len()))
    }

    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        if data_url::is_data_url(url) {
            return data_url::decode(url).map_err(|reason| Error::Download {
                url: url.to_string(),
                reason,
            });
        }

        let parsed = Url::parse(url).map_err(|_| Error::InvalidUrl {
            url: url.to_string(),
        })?;

        self.fetcher
            .fetch(parsed.as_str())
            .into_body()
            .map_err(|reason| Error::Download {
                url: url.to_string(),
                reason,
            })
    }
}

impl Downloader<UReqFetcher> {
    pub fn new(config: &ClientConfig) -> Self {
        Downloader::with_fetcher(UReqFetcher::new(config))
    }
}

/// Creates `path` and its parents. Succeeds when the directory is already
/// there, including when another worker created it a moment ago.
pub fn ensure_dir(path: &Path) -> Result<()> {
    match fs::create_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(e) => Err(Error::io(path, e)),
    }
}

/// Writes `body` to `{prefix}_{stamp}.jpg` in `folder`, or to
/// `{prefix}_{stamp}_{n}.jpg` with the smallest free `n` if that name is taken.
fn write_unique(folder: &Path, prefix: &str, stamp: i64, body: &[u8]) -> Result<PathBuf> {
    let mut attempt = 0u32;

    loop {
        let name = match attempt {
            0 => format!("{}_{}.{}", prefix, stamp, EXTENSION),
            n => format!("{}_{}_{}.{}", prefix, stamp, n, EXTENSION),
        };

        let path = folder.join(name);

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                attempt += 1;
                continue;
            }
            Err(e) => return Err(Error::io(path, e)),
        };

        if let Err(e) = file.write_all(body) {
            drop(file);
            let _ = fs::remove_file(&path);
            return Err(Error::io(path, e));
        }

        return Ok(path);
    }
}
