use ureq::Error::Status;

use super::{ClientConfig, Fetcher, Response};

use std::io::Read;

pub struct UReqFetcher {
    agent: ureq::Agent,
}

impl Fetcher for UReqFetcher {
    fn fetch(&self, url: &str) -> Response {
        let response = self.agent.get(url).call();

        match response {
            Ok(response) => {
                let mime = response.header("Content-Type").map(str::to_string);

                let mut body = Vec::new();

                if response.into_reader().read_to_end(&mut body).is_err() {
                    return Response::invalid_body();
                }

                match mime {
                    Some(mime) => Response::ok_with_type(body, mime),
                    None => Response::ok(body),
                }
            }

            Err(Status(404, _)) => Response::not_found(),

            Err(Status(code, _)) => Response::status(code),

            Err(error) => Response::network_error(error.to_string()),
        }
    }
}

impl UReqFetcher {
    pub fn new(config: &ClientConfig) -> Self {
        let builder = ureq::AgentBuilder::new().user_agent(&config.user_agent);

        let builder = match config.timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };

        UReqFetcher {
            agent: builder.build(),
        }
    }
}

impl Default for UReqFetcher {
    fn default() -> Self {
        Self::new(&ClientConfig::default())
    }
}
