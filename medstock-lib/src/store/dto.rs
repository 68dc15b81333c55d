//! Wire shapes for the row store.

use serde::{Deserialize, Deserializer, Serialize};

use crate::entry::{Entry, EntryId};

/// POST envelope: the store accepts `{"data": [row, ...]}`.
#[derive(Debug, Serialize)]
pub(crate) struct AppendRequest<'a> {
    data: [&'a Entry; 1],
}

impl<'a> AppendRequest<'a> {
    pub fn new(entry: &'a Entry) -> Self {
        Self { data: [entry] }
    }
}

/// A row as the store returns it.
///
/// Identifier columns vary between backends: `id` falls back to `_id`, and a
/// row carrying neither gets a freshly generated identifier. The chain is not
/// assumed exhaustive.
#[derive(Debug, Deserialize)]
pub(crate) struct RemoteRow {
    #[serde(default)]
    id: Option<String>,
    #[serde(default, rename = "_id")]
    alt_id: Option<String>,
    #[serde(default)]
    date: String,
    #[serde(default)]
    branch: String,
    #[serde(default)]
    product: String,
    #[serde(default, deserialize_with = "lenient_quantity")]
    quantity: f64,
}

impl RemoteRow {
    pub fn into_entry(self) -> Entry {
        let id = self
            .id
            .filter(|id| !id.is_empty())
            .or(self.alt_id.filter(|id| !id.is_empty()))
            .map(EntryId::from)
            .unwrap_or_else(EntryId::generate);

        Entry {
            id,
            date: self.date,
            branch: self.branch,
            product: self.product,
            quantity: self.quantity,
        }
    }
}

/// Spreadsheet backends return numbers as strings about as often as not.
fn lenient_quantity<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(n) => n,
        Raw::Text(s) => s.trim().parse().unwrap_or(0.0),
    })
}
