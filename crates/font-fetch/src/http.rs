//! Blocking HTTP access with a browser-like header set.
//!
//! Font services tailor their payloads to the client; without browser headers
//! some of them answer with a different format than the one parsed here.

use log::debug;
use reqwest::{
    StatusCode,
    blocking::Client,
    header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, REFERER, USER_AGENT},
};

pub const BROWSER_USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 ",
    "(KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
);
pub const BROWSER_ACCEPT: &str = "text/css,*/*;q=0.1";
pub const BROWSER_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";
pub const BROWSER_REFERER: &str = "https://fonts.googleapis.com/";

/// Status and body of a completed request.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// A blocking GET capability.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<HttpResponse, reqwest::Error>;
}

/// Header set sent with every request.
pub fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers.insert(ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(BROWSER_ACCEPT_LANGUAGE));
    headers.insert(REFERER, HeaderValue::from_static(BROWSER_REFERER));
    headers
}

/// [`Fetch`] over a `reqwest` blocking client. No timeout, no retries.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder().default_headers(browser_headers()).build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpClient {
    fn get(&self, url: &str) -> Result<HttpResponse, reqwest::Error> {
        debug!("GET {url}");
        let response = self.client.get(url).send()?;
        let status = response.status();
        let body = response.bytes()?.to_vec();
        debug!("  {status} ({} bytes)", body.len());
        Ok(HttpResponse { status, body })
    }
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn get(&self, url: &str) -> Result<HttpResponse, reqwest::Error> {
        (**self).get(url)
    }
}
