use scraper::{ElementRef, Html};

const DEFERRED_SRC: &str = "data-src";

/// Returns the first `limit` image sources in document order.
///
/// `data-src` wins over `src`; an `img` carrying neither is skipped. Elements
/// past the limit are never looked at, and nothing is validated or deduplicated.
/// Images inside `<noscript>` count too, at the position of their `noscript`.
pub fn extract_image_urls(html: &str, limit: usize) -> Vec<String> {
    let mut urls = Vec::new();

    if limit == 0 {
        return urls;
    }

    let document = Html::parse_document(html);

    collect_sources(document.root_element(), limit, &mut urls);

    urls
}

fn collect_sources(root: ElementRef<'_>, limit: usize, urls: &mut Vec<String>) {
    for element in root.descendants().filter_map(ElementRef::wrap) {
        if urls.len() >= limit {
            return;
        }

        match element.value().name() {
            "img" => {
                let img = element.value();

                if let Some(src) = img.attr(DEFERRED_SRC).or_else(|| img.attr("src")) {
                    urls.push(src.to_string());
                }
            }

            // With scripting on, the parser keeps noscript content as raw text.
            "noscript" => {
                let fragment = Html::parse_fragment(&element.text().collect::<String>());

                collect_sources(fragment.root_element(), limit, urls);
            }

            _ => {}
        }
    }
}
