//! Character inventory API.
//!
//! Endpoint: `POST /character-window/get-items`
//!
//! Form body: `accountName={name}&character={character}&realm={realm}`
//!
//! The response holds the equipped and inventory `items` plus a `character`
//! summary. It is returned verbatim.

use crate::client::PoeClient;
use crate::error::Result;

impl PoeClient {
    /// Get the items of `character` owned by `account_name` on `realm`.
    ///
    /// Returns the response body as-is; on a non-200 status the body is
    /// dropped and only the error is returned.
    pub fn get_items(&self, account_name: &str, character: &str, realm: &str) -> Result<String> {
        let body = self.post_form(
            &self.endpoints().items,
            &[
                ("accountName", account_name),
                ("character", character),
                ("realm", realm),
            ],
        )?;
        Ok(String::from_utf8(body)?)
    }
}
