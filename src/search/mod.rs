mod extract;

use encoding_rs::{Encoding, UTF_8};
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};
use crate::fetcher::Fetcher;

pub use extract::extract_image_urls;

const SEARCH_ENDPOINT: &str = "https://www.google.com/search";

pub fn search_url(query: &str) -> Url {
    let mut url = Url::parse(SEARCH_ENDPOINT).expect("search endpoint is a valid url");

    url.query_pairs_mut()
        .append_pair("q", query)
        .append_pair("tbm", "isch");

    url
}

/// Decodes with the `charset` named in `content_type`, UTF-8 when it names
/// none or one we do not know. A byte order mark overrides both.
pub fn decode_page(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(charset)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8);

    let (text, _, _) = encoding.decode(body);

    text.into_owned()
}

fn charset(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;

        name.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"'))
    })
}

pub struct SearchClient<F: Fetcher> {
    fetcher: F,
}

impl<F> SearchClient<F>
where
    F: Fetcher,
{
    pub fn new(fetcher: F) -> Self {
        SearchClient { fetcher }
    }

    pub fn fetch_search_page(&self, query: &str) -> Result<String> {
        let url = search_url(query);

        debug!("fetching search page {}", url);

        let (body, content_type) = self
            .fetcher
            .fetch(url.as_str())
            .into_parts()
            .map_err(|reason| Error::Network {
                url: url.to_string(),
                reason,
            })?;

        Ok(decode_page(&body, content_type.as_deref()))
    }

    pub fn search_images(&self, query: &str, limit: usize) -> Result<Vec<String>> {
        let html = self.fetch_search_page(query)?;

        let urls = extract_image_urls(&html, limit);

        if urls.is_empty() {
            return Err(Error::NoResultsFound {
                query: query.to_string(),
            });
        }

        Ok(urls)
    }
}
