// Parcel shops and relay files

use serde::Serialize;
use serde_json::Value;

use crate::{connection::Connection, error::Result};

pub struct Relays<'a> {
    connection: &'a Connection,
}

impl<'a> Relays<'a> {
    pub(crate) fn new(connection: &'a Connection) -> Self {
        Self { connection }
    }

    /// Available parcel shops
    pub async fn get_parcel_shop_list(&self) -> Result<Value> {
        self.connection.call("GetParcelShopList", vec![]).await
    }

    /// Submit relay information as an XLSX file available at `relays_file_uri`
    pub async fn submit_relays_file(&self, relays_file_uri: &str) -> Result<Value> {
        #[derive(Serialize)]
        struct RelaysFileRequest<'a> {
            #[serde(rename = "RelaysFileURI")]
            relays_file_uri: &'a str,
        }

        let request = RelaysFileRequest { relays_file_uri };
        self.connection
            .call(
                "SubmitRelaysFile",
                vec![("relaysFileRequest", serde_json::to_value(&request)?)],
            )
            .await
    }

    /// Integration state of a relay file returned by [`submit_relays_file`](Self::submit_relays_file)
    pub async fn get_relays_file_submission_result(&self, relays_file_id: i64) -> Result<Value> {
        #[derive(Serialize)]
        #[serde(rename_all = "PascalCase")]
        struct RelaysFileFilter {
            relays_file_id: i64,
        }

        let filter = RelaysFileFilter { relays_file_id };
        self.connection
            .call(
                "GetRelaysFileSubmissionResult",
                vec![("relaysFileFilter", serde_json::to_value(&filter)?)],
            )
            .await
    }
}
