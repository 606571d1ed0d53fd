//! Character list API.
//!
//! Endpoint: `POST /character-window/get-characters`
//!
//! Form body: `accountName={name}&realm={realm}`
//!
//! Response (returned verbatim):
//! ```json
//! [
//!   { "name": "B站高远寒_S24", "league": "S24赛季", "classId": 5, "class": "Occultist", "level": 96 }
//! ]
//! ```

use crate::client::PoeClient;
use crate::error::Result;

impl PoeClient {
    /// List the characters of `account_name` on `realm`.
    ///
    /// Returns the response body as-is. Arguments are not validated locally.
    ///
    /// # Errors
    ///
    /// - [`PoeError::Http`](crate::PoeError::Http) — network failure
    /// - [`PoeError::Status`](crate::PoeError::Status) — e.g.
    ///   [`StatusError::ProfileHiddenOrMissing`](crate::StatusError::ProfileHiddenOrMissing)
    ///   for a private or unknown account
    /// - [`PoeError::Utf8`](crate::PoeError::Utf8) — 200 with a non-UTF-8 body
    pub fn get_characters(&self, account_name: &str, realm: &str) -> Result<String> {
        let body = self.post_form(
            &self.endpoints().characters,
            &[("accountName", account_name), ("realm", realm)],
        )?;
        Ok(String::from_utf8(body)?)
    }
}
