/// Course-completion certificates
///
/// A grant record: issued once per (user, course) by convention, stamped at
/// creation. Certificates are never updated or deleted through the store.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Certificate record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    /// Store-assigned identifier
    pub id: i32,

    pub user_id: i32,

    pub course_id: i32,

    /// Rendered certificate document
    pub certificate_url: Option<String>,

    /// Assigned at creation, immutable
    pub issued_at: DateTime<Utc>,
}

/// Input for issuing a certificate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCertificate {
    pub user_id: i32,

    pub course_id: i32,

    pub certificate_url: Option<String>,
}
