//! Blocking HTTP client for the Path of Exile web API.
//!
//! Every request follows the same three steps:
//!
//! 1. Send through the shared [`reqwest::blocking::Client`], whose cookie jar
//!    attaches `POESESSID` to every request for the base host
//! 2. Read the entire body into memory
//! 3. Translate the status with [`classify`]; only 200 succeeds
//!
//! Redirects are never followed, so a session-expiry redirect surfaces as
//! [`StatusError::UnknownService`](crate::StatusError::UnknownService)
//! instead of silently landing on a login page.
//!
//! On any non-200 status the body is discarded and only the error is
//! returned.

use crate::config::ClientConfig;
use crate::error::{Result, classify};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::cookie::Jar;
use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "POESESSID";

const PROFILE_PATH: &str = "/api/profile";
const CHARACTERS_PATH: &str = "/character-window/get-characters";
const ITEMS_PATH: &str = "/character-window/get-items";
const PASSIVE_SKILLS_PATH: &str = "/character-window/get-passive-skills";

/// Endpoint URLs, computed once at construction.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// `GET /api/profile`
    pub profile: Url,
    /// `POST /character-window/get-characters`
    pub characters: Url,
    /// `POST /character-window/get-items`
    pub items: Url,
    /// `POST /character-window/get-passive-skills`
    pub passive_skills: Url,
}

impl Endpoints {
    fn new(base: &Url) -> Self {
        Self {
            profile: join_path(base, PROFILE_PATH),
            characters: join_path(base, CHARACTERS_PATH),
            items: join_path(base, ITEMS_PATH),
            passive_skills: join_path(base, PASSIVE_SKILLS_PATH),
        }
    }
}

/// Blocking client for one authenticated `POESESSID` session.
///
/// Holds a [`reqwest::blocking::Client`] with a cookie jar and the
/// precomputed [`Endpoints`]. API methods are implemented in separate modules
/// (`profile`, `characters`, `items`, `passives`) as `impl PoeClient` blocks.
///
/// The client is `Send + Sync`; share it between threads behind an `Arc`.
pub struct PoeClient {
    http: Client,
    base_url: Url,
    endpoints: Endpoints,
}

impl PoeClient {
    /// Create a client for `https://{host}` authenticated with `session_id`.
    ///
    /// No network traffic happens here.
    pub fn new(host: &str, session_id: &str) -> Result<Self> {
        Self::with_config(ClientConfig::new(host, session_id)?)
    }

    /// Create a client from an explicit [`ClientConfig`].
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let session_id = sanitize_cookie_value(&config.session_id);
        if session_id.len() != config.session_id.len() {
            debug!("dropped invalid bytes from session id");
        }
        let jar = Jar::default();
        jar.add_cookie_str(&format!("{SESSION_COOKIE}={session_id}"), &config.base_url);

        let http = Client::builder()
            .user_agent(config.user_agent)
            .cookie_provider(Arc::new(jar))
            .redirect(Policy::none())
            .timeout(config.timeout)
            .build()?;

        let endpoints = Endpoints::new(&config.base_url);
        Ok(Self {
            http,
            base_url: config.base_url,
            endpoints,
        })
    }

    /// Base URL the endpoints were derived from.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The precomputed endpoint URLs.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Send a GET to `url`, returning the body of a 200 response.
    pub(crate) fn get(&self, url: &Url) -> Result<Vec<u8>> {
        debug!(method = "GET", endpoint = url.path(), "sending request");
        execute(self.http.get(url.clone()))
    }

    /// Send a URL-encoded form POST to `url`, returning the body of a 200
    /// response.
    pub(crate) fn post_form(&self, url: &Url, fields: &[(&str, &str)]) -> Result<Vec<u8>> {
        debug!(method = "POST", endpoint = url.path(), "sending request");
        let req = self
            .http
            .post(url.clone())
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(encode_form(fields));
        execute(req)
    }
}

fn execute(req: RequestBuilder) -> Result<Vec<u8>> {
    let resp = req.send()?;
    let status = resp.status().as_u16();
    let body = resp.bytes()?;
    debug!(status, len = body.len(), "received response");

    classify(status)?;
    Ok(body.to_vec())
}

/// Drop characters that cannot appear in a cookie value (RFC 6265
/// `cookie-octet`): controls, whitespace, non-ASCII, `"`, `,`, `;` and `\`.
///
/// A `;` left in place would start cookie attributes and re-scope the cookie.
fn sanitize_cookie_value(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_graphic() && !matches!(c, '"' | ',' | ';' | '\\'))
        .collect()
}

/// Encode `fields` as an `application/x-www-form-urlencoded` body.
///
/// Values are sent as given; callers pass fields in sorted key order.
fn encode_form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Append `path` to the path of `base`, keeping any existing prefix.
fn join_path(base: &Url, path: &str) -> Url {
    let mut url = base.clone();
    let joined = format!("{}{path}", base.path().trim_end_matches('/'));
    url.set_path(&joined);
    url
}
