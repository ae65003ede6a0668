use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use super::{Fetcher, Response};

/// Replays canned responses. Queued responses are handed out in request
/// order; routed responses are looked up by exact URL and may repeat.
pub struct MockFetcher {
    queue: Mutex<VecDeque<Response>>,
    routes: HashMap<String, Response>,
    requests: Mutex<Vec<String>>,
}

impl Fetcher for MockFetcher {
    fn fetch(&self, url: &str) -> Response {
        self.requests.lock().unwrap().push(url.to_string());

        if let Some(response) = self.routes.get(url) {
            return response.clone();
        }

        self.queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Response::network_error("no mocked response"))
    }
}

impl MockFetcher {
    pub fn new(responses: Vec<Response>) -> Self {
        Self {
            queue: Mutex::new(responses.into()),
            routes: HashMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn routed<'a>(routes: impl IntoIterator<Item = (&'a str, Response)>) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            routes: routes
                .into_iter()
                .map(|(url, response)| (url.to_string(), response))
                .collect(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}
