// Encrypted customer mail addresses

use cdiscount_soap::ArrayOf;
use serde_json::{Value, json};

use crate::{connection::Connection, error::Result};

pub struct WebMail<'a> {
    connection: &'a Connection,
}

impl<'a> WebMail<'a> {
    pub(crate) fn new(connection: &'a Connection) -> Self {
        Self { connection }
    }

    /// Encrypted address to contact the customer of an order
    pub async fn generate_discussion_mail_guid(&self, scopus_id: &str) -> Result<Value> {
        self.connection
            .call(
                "GenerateDiscussionMailGuid",
                vec![("request", json!({ "ScopusId": scopus_id }))],
            )
            .await
    }

    /// Encrypted addresses to answer the given discussions
    pub async fn get_discussion_mail_list(&self, discussion_ids: &[i64]) -> Result<Value> {
        let ids = ArrayOf::longs(discussion_ids.iter().copied());
        self.connection
            .call(
                "GetDiscussionMailList",
                vec![("request", json!({ "DiscussionIds": ids }))],
            )
            .await
    }
}
