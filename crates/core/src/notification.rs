//! Notification (`notificacion`) records.
//!
//! Notifications are written by a process outside this service; the API only reads them.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// A message shown to users. Keys missing from the file, or set to `null`, read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Notification {
    #[serde(deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(rename = "fechaEnvio", deserialize_with = "null_as_empty")]
    pub send_date: String,
    #[serde(rename = "asunto", deserialize_with = "null_as_empty")]
    pub subject: String,
    #[serde(rename = "remitente", deserialize_with = "null_as_empty")]
    pub sender: String,
    #[serde(rename = "mensaje", deserialize_with = "null_as_empty")]
    pub message: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
