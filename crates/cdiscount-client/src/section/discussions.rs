// Claims and questions from customers

use cdiscount_soap::ArrayOf;
use serde_json::{Value, json};

use crate::{
    connection::Connection,
    error::{ClientError, Result},
    model::{DiscussionFilter, OrderClaimFilter},
};

/// Discussions are claims, offer questions and order questions.
///
/// A discussion cannot be closed before it has been answered; use the
/// discussion id with [`WebMail`](super::WebMail) to get an address to reply to.
pub struct Discussions<'a> {
    connection: &'a Connection,
}

impl<'a> Discussions<'a> {
    pub(crate) fn new(connection: &'a Connection) -> Self {
        Self { connection }
    }

    pub async fn get_order_claim_list(&self, filter: &OrderClaimFilter) -> Result<Value> {
        self.connection
            .call(
                "GetOrderClaimList",
                vec![("orderClaimFilter", serde_json::to_value(filter)?)],
            )
            .await
    }

    pub async fn get_offer_question_list(&self, filter: &DiscussionFilter) -> Result<Value> {
        self.connection
            .call(
                "GetOfferQuestionList",
                vec![("offerQuestionFilter", serde_json::to_value(filter)?)],
            )
            .await
    }

    pub async fn get_order_question_list(&self, filter: &DiscussionFilter) -> Result<Value> {
        self.connection
            .call(
                "GetOrderQuestionList",
                vec![("orderQuestionFilter", serde_json::to_value(filter)?)],
            )
            .await
    }

    /// Close the given discussions
    pub async fn close_discussion_list(&self, discussion_ids: &[i64]) -> Result<Value> {
        if discussion_ids.is_empty() {
            return Err(ClientError::InvalidArgument(
                "at least one discussion id is required".to_string(),
            ));
        }

        let ids = ArrayOf::longs(discussion_ids.iter().copied());
        self.connection
            .call(
                "CloseDiscussionList",
                vec![("closeDiscussionRequest", json!({ "DiscussionIds": ids }))],
            )
            .await
    }
}
