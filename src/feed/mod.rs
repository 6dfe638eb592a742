//! Provider feed access.
//!
//! This module handles everything on the remote side of the pipeline:
//! - [`fetch`] - the single HTTP GET against the published endpoint
//! - [`schema`] - the shape of the published JSON document

mod fetch;
mod schema;

pub use fetch::Fetcher;

use crate::error::ParseError;
use crate::models::EgressEntry;
use schema::{Feed, RawEntry, Row, TableBlock};

/// Parse the published document into a flat, ordered list of entries.
///
/// Rows of the egress table are walked in order; multi-VIP groups are
/// expanded into one entry per member. Every entry carries its readiness
/// flag, filtering happens later.
///
/// # Arguments
/// * `json` - Raw response body
/// * `table_block` - Index of the `data` block holding the egress table
pub fn parse_feed(json: &str, table_block: usize) -> Result<Vec<EgressEntry>, ParseError> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let feed: Feed =
        serde_path_to_error::deserialize(&mut deserializer).map_err(|e| ParseError::at("", e))?;
    deserializer.end().map_err(|e| ParseError::Json {
        path: ".".to_string(),
        message: e.to_string(),
    })?;

    let block = feed
        .data
        .get(table_block)
        .ok_or(ParseError::MissingBlock {
            index: table_block,
            available: feed.data.len(),
        })?;
    let block_path = format!("data[{table_block}]");
    let table: TableBlock =
        serde_path_to_error::deserialize(block).map_err(|e| ParseError::at(&block_path, e))?;

    let mut entries = Vec::new();
    // Row 0 is the table header
    for (i, row) in table.body.json.rows.iter().enumerate().skip(1) {
        let row_path = format!("{block_path}.body.json.rows[{i}]");
        let row: Row =
            serde_path_to_error::deserialize(row).map_err(|e| ParseError::at(&row_path, e))?;

        for (c, col) in row.cols.into_iter().enumerate() {
            for (d, raw) in col.data.into_iter().enumerate() {
                let path = format!("{row_path}.cols[{c}].data[{d}]");
                flatten_entry(raw, &path, &mut entries)?;
            }
        }
    }

    log::info!(
        "Parsed {} entries from {} rows",
        entries.len(),
        table.body.json.rows.len().saturating_sub(1)
    );
    Ok(entries)
}

fn flatten_entry(raw: RawEntry, path: &str, out: &mut Vec<EgressEntry>) -> Result<(), ParseError> {
    if raw.is_multivip() {
        for (m, member) in raw.data.into_iter().flatten().enumerate() {
            let member_path = format!("{path}.data[{m}]");
            out.push(to_entry(member, &member_path, true)?);
        }
        return Ok(());
    }
    out.push(to_entry(raw, path, false)?);
    Ok(())
}

fn to_entry(raw: RawEntry, path: &str, multivip: bool) -> Result<EgressEntry, ParseError> {
    let ready = raw.is_ready();
    let ip_address = raw.ip_address.ok_or_else(|| ParseError::MissingField {
        path: path.to_string(),
        field: "ip_address",
    })?;
    Ok(EgressEntry {
        ip_address,
        region: raw.region,
        location: raw.location,
        multivip,
        ready,
        latitude: raw.latitude,
        longitude: raw.longitude,
    })
}
