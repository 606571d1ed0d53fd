//! Passive skill tree API.
//!
//! Endpoint: `POST /character-window/get-passive-skills`
//!
//! Form body: `accountName={name}&character={character}&realm={realm}`
//!
//! The response contains `hashes`, `hashes_ex`, `mastery_effects`, and
//! `jewel_data`. It is returned verbatim.

use crate::client::PoeClient;
use crate::error::Result;

impl PoeClient {
    /// Get the allocated passive skills of `character`.
    pub fn get_passive_skills(
        &self,
        account_name: &str,
        character: &str,
        realm: &str,
    ) -> Result<String> {
        let body = self.post_form(
            &self.endpoints().passive_skills,
            &[
                ("accountName", account_name),
                ("character", character),
                ("realm", realm),
            ],
        )?;
        Ok(String::from_utf8(body)?)
    }
}
