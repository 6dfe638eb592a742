//! Provider feed schema.
//!
//! The published document is `{"data": [block, ...]}` where one block holds
//! the egress table at `body.json.rows`. Only that block is given a concrete
//! shape; the others are left as raw JSON.

use serde::Deserialize;

/// Note id the provider attaches to ranges that are not in use yet.
pub const NOT_READY_NOTE_ID: i64 = 3;

/// Top level of the published document.
#[derive(Deserialize, Debug)]
pub struct Feed {
    pub data: Vec<serde_json::Value>,
}

/// The data block containing the egress table.
#[derive(Deserialize, Debug)]
pub struct TableBlock {
    pub body: TableBody,
}

#[derive(Deserialize, Debug)]
pub struct TableBody {
    pub json: Table,
}

/// Table rows stay raw so the header row (index 0) is never interpreted.
#[derive(Deserialize, Debug)]
pub struct Table {
    pub rows: Vec<serde_json::Value>,
}

/// One region row of the egress table.
#[derive(Deserialize, Debug, Default)]
pub struct Row {
    #[serde(default)]
    pub cols: Vec<Col>,
}

#[derive(Deserialize, Debug, Default)]
pub struct Col {
    #[serde(default)]
    pub data: Vec<RawEntry>,
}

/// A table cell entry: either a single range, or a multi-VIP group whose
/// members are listed in `data`.
#[derive(Deserialize, Debug, Default)]
pub struct RawEntry {
    pub ip_address: Option<String>,
    pub region: Option<String>,
    pub location: Option<String>,
    #[serde(default, deserialize_with = "coordinate")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "coordinate")]
    pub longitude: Option<f64>,
    pub multivip: Option<bool>,
    pub ready: Option<bool>,
    pub notes: Option<Vec<Note>>,
    pub data: Option<Vec<RawEntry>>,
}

#[derive(Deserialize, Debug)]
pub struct Note {
    pub id: Option<serde_json::Value>,
}

impl RawEntry {
    pub fn is_multivip(&self) -> bool {
        self.multivip.unwrap_or(false)
    }

    /// An explicit `ready` flag wins; otherwise the entry is ready unless it
    /// carries the not-ready note.
    pub fn is_ready(&self) -> bool {
        self.ready.unwrap_or_else(|| {
            !self
                .notes
                .iter()
                .flatten()
                .any(|note| note.id.as_ref().and_then(|id| id.as_i64()) == Some(NOT_READY_NOTE_ID))
        })
    }
}

/// Coordinates show up as numbers or numeric strings.
fn coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Coordinate {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<Coordinate>::deserialize(deserializer)? {
        Some(Coordinate::Number(n)) => Some(n),
        Some(Coordinate::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}
