//! Generic record envelope shared by all entity kinds
//!
//! The record store keys every record by an opaque identifier and wraps the
//! mutable content in a `fields` map. Listing an app returns an
//! identifier-keyed map of bodies; single-record reads return the body with
//! an `id` member. Both shapes are normalized into [`Record`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A record as held in the remote store: identifier, envelope timestamps
/// and the entity-specific field map.
///
/// Timestamps are kept as the opaque strings the store emits; nothing in
/// the derived-state engine interprets them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record<F> {
    pub record_id: String,
    #[serde(rename = "createdat")]
    pub created_at: String,
    #[serde(rename = "updatedat")]
    pub updated_at: Option<String>,
    pub fields: F,
}

/// Record body as it appears in a listing response (no identifier member)
#[derive(Debug, Clone, Deserialize)]
pub struct RecordBody<F> {
    pub createdat: String,
    pub updatedat: Option<String>,
    pub fields: F,
}

/// Record body as returned by a single-record read (`id` member present)
#[derive(Debug, Clone, Deserialize)]
pub struct RecordWithId<F> {
    pub id: String,
    pub createdat: String,
    pub updatedat: Option<String>,
    pub fields: F,
}

impl<F> Record<F> {
    /// Flatten an identifier-keyed listing map into a record sequence,
    /// preserving the store's ordering.
    pub fn from_listing(map: IndexMap<String, RecordBody<F>>) -> Vec<Self> {
        map.into_iter()
            .map(|(record_id, body)| Self {
                record_id,
                created_at: body.createdat,
                updated_at: body.updatedat,
                fields: body.fields,
            })
            .collect()
    }
}

impl<F> From<RecordWithId<F>> for Record<F> {
    fn from(body: RecordWithId<F>) -> Self {
        Self {
            record_id: body.id,
            created_at: body.createdat,
            updated_at: body.updatedat,
            fields: body.fields,
        }
    }
}
