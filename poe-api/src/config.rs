//! Client configuration.
//!
//! A [`ClientConfig`] carries everything [`PoeClient`](crate::PoeClient)
//! needs at construction: the base URL, the `POESESSID` value, and transport
//! knobs. Nothing is read from files or the environment.
//!
//! ```no_run
//! use std::time::Duration;
//! use poe_api::{ClientConfig, PoeClient, DEFAULT_HOST};
//!
//! let config = ClientConfig::new(DEFAULT_HOST, "YOUR_POESESSID")
//!     .unwrap()
//!     .timeout(Duration::from_secs(10));
//! let client = PoeClient::with_config(config).unwrap();
//! ```

use crate::error::Result;
use std::time::Duration;
use url::{ParseError, Url};

/// Default host: the Tencent-operated Path of Exile realm.
pub const DEFAULT_HOST: &str = "poe.game.qq.com";

/// Realm identifier for the PC platform.
pub const DEFAULT_REALM: &str = "pc";

pub(crate) const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Construction parameters for [`PoeClient`](crate::PoeClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL the endpoint paths are appended to.
    pub base_url: Url,
    /// `POESESSID` cookie value, sent verbatim.
    pub session_id: String,
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl ClientConfig {
    /// Configuration for `https://{host}`.
    ///
    /// Fails with [`PoeError::Url`](crate::PoeError::Url) if `host` is not a
    /// valid host (empty, or containing forbidden characters such as spaces).
    pub fn new(host: &str, session_id: impl Into<String>) -> Result<Self> {
        // URL parsing strips tab, LF and CR instead of failing.
        if host.chars().any(|c| c.is_ascii_control()) {
            return Err(ParseError::InvalidDomainCharacter.into());
        }
        let base_url = Url::parse(&format!("https://{host}"))?;
        Ok(Self::with_base_url(base_url, session_id))
    }

    /// Configuration for an explicit base URL of any scheme.
    pub fn with_base_url(base_url: Url, session_id: impl Into<String>) -> Self {
        Self {
            base_url,
            session_id: session_id.into(),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Set a whole-request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the `User-Agent` header.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
