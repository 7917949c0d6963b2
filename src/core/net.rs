// src/core/net.rs
// HTTP GET behind a small trait so the crawl can be driven offline.

use crate::config::options::NetOptions;
use crate::error::{Error, Result};

/// Status and raw body of one GET.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self { status: 200, body: body.into() }
    }

    /// Only a plain 200 counts; redirects and other 2xx codes do not.
    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Anything that can GET a URL. `Err` means no response at all;
/// a response with a bad status is still `Ok`.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<Response>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn fetch(&self, url: &str) -> Result<Response> {
        (**self).fetch(url)
    }
}

/// Blocking reqwest client with a bounded request time.
pub struct HttpClient {
    client: reqwest::blocking::Client,
}

impl HttpClient {
    pub fn new(opts: &NetOptions) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(opts.timeout)
            .user_agent(opts.user_agent.as_str())
            .build()
            .map_err(Error::Client)?;
        Ok(Self { client })
    }
}

impl Fetch for HttpClient {
    fn fetch(&self, url: &str) -> Result<Response> {
        let transport = |source| Error::Transport { url: s!(url), source };

        let resp = self.client.get(url).send().map_err(transport)?;
        let status = resp.status().as_u16();
        let body = resp.bytes().map_err(transport)?.to_vec();
        Ok(Response { status, body })
    }
}

/// GET `url` and return its body as text. Anything but 200 is an error.
pub fn get_page<F: Fetch + ?Sized>(fetcher: &F, url: &str) -> Result<String> {
    logd!("Download: {url}");
    let resp = fetcher.fetch(url)?;
    if !resp.is_success() {
        loge!("{url} response code {}", resp.status);
        return Err(Error::Status { url: s!(url), status: resp.status });
    }
    Ok(resp.text())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Canned(Response);

    impl Fetch for Canned {
        fn fetch(&self, _url: &str) -> Result<Response> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn only_200_is_success() {
        assert!(Response::ok("x").is_success());
        for status in [201, 204, 301, 404, 500] {
            assert!(!Response { status, body: vec![] }.is_success(), "{status}");
        }
    }

    #[test]
    fn get_page_decodes_body() {
        let page = get_page(&Canned(Response::ok("Слова".as_bytes())), "http://x/").unwrap();
        assert_eq!(page, "Слова");
    }

    #[test]
    fn get_page_reports_status_and_url() {
        let canned = Canned(Response { status: 404, body: b"gone".to_vec() });
        match get_page(&canned, "http://x/bukva/a") {
            Err(Error::Status { url, status }) => {
                assert_eq!(url, "http://x/bukva/a");
                assert_eq!(status, 404);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn client_setup_failure_names_no_url() {
        let opts = NetOptions { user_agent: s!("bad\nagent"), ..NetOptions::default() };
        match HttpClient::new(&opts) {
            Err(err @ Error::Client(_)) => assert!(err.failed_url().is_none()),
            Err(other) => panic!("unexpected: {other:?}"),
            Ok(_) => panic!("client built with an invalid user agent"),
        }
    }

    #[test]
    fn invalid_utf8_is_replaced_not_fatal() {
        let canned = Canned(Response::ok(vec![b'a', 0xff, b'b']));
        assert_eq!(get_page(&canned, "http://x/").unwrap(), "a\u{fffd}b");
    }
}
