//! On-disk layout of the `savedCards` value.
//!
//! Current layout (version 1):
//!
//! ```text
//! { "version": 1, "cards": [ { "id": 1700000000000, "contact": {..}, "style": {..} } ] }
//! ```
//!
//! The legacy layout is a bare array of flat records:
//!
//! ```text
//! [ { "id": 1700000000000, "name": "..", ..., "styles": { "primary": "..", "text": "..",
//!     "font": "..", "template": "..", "rounded": true } } ]
//! ```
//!
//! Legacy values are decoded transparently and rewritten as version 1 on the
//! next append.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CardError, CardResult};
use crate::types::{CardStyle, ContactInfo, DesignId, DesignRecord, Template};

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct DesignCollection {
    version: u32,
    #[serde(default)]
    cards: Vec<DesignRecord>,
}

#[derive(Debug, Deserialize)]
struct LegacyStyles {
    primary: Option<String>,
    text: Option<String>,
    font: Option<String>,
    template: Option<String>,
    rounded: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct LegacyRecord {
    id: f64,
    name: Option<String>,
    title: Option<String>,
    company: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    website: Option<String>,
    address: Option<String>,
    styles: Option<LegacyStyles>,
}

impl From<LegacyRecord> for DesignRecord {
    fn from(legacy: LegacyRecord) -> Self {
        let defaults = CardStyle::default();
        let style = match legacy.styles {
            Some(s) => CardStyle {
                primary_color: s.primary.unwrap_or(defaults.primary_color),
                text_color: s.text.unwrap_or(defaults.text_color),
                font: s.font.unwrap_or(defaults.font),
                template: s.template.map(Template::from).unwrap_or_default(),
                rounded: s.rounded.unwrap_or(defaults.rounded),
            },
            None => defaults,
        };
        DesignRecord {
            id: DesignId(legacy.id as i64),
            contact: ContactInfo {
                name: legacy.name,
                title: legacy.title,
                company: legacy.company,
                phone: legacy.phone,
                email: legacy.email,
                website: legacy.website,
                address: legacy.address,
            },
            style,
            logo: None,
        }
    }
}

fn decode_err(e: impl std::fmt::Display) -> CardError {
    CardError::Decode(e.to_string())
}

fn decode_legacy_entry(entry: Value) -> CardResult<DesignRecord> {
    // Arrays written by this crate before versioning already used the nested layout.
    if entry.get("style").is_some() {
        serde_json::from_value(entry).map_err(decode_err)
    } else {
        serde_json::from_value::<LegacyRecord>(entry)
            .map(DesignRecord::from)
            .map_err(decode_err)
    }
}

/// Decode a stored `savedCards` value in either layout.
pub fn decode_designs(raw: &str) -> CardResult<Vec<DesignRecord>> {
    let value: Value = serde_json::from_str(raw).map_err(decode_err)?;
    match value {
        Value::Array(entries) => entries.into_iter().map(decode_legacy_entry).collect(),
        Value::Object(ref map) => {
            let version = map
                .get("version")
                .and_then(Value::as_u64)
                .ok_or_else(|| CardError::Decode("missing schema version".to_string()))?;
            if version > SCHEMA_VERSION as u64 {
                return Err(CardError::Decode(format!(
                    "schema version {} is newer than supported version {}",
                    version, SCHEMA_VERSION
                )));
            }
            let collection: DesignCollection = serde_json::from_value(value).map_err(decode_err)?;
            Ok(collection.cards)
        }
        other => Err(CardError::Decode(format!(
            "expected an array or object, found {}",
            type_name(&other)
        ))),
    }
}

/// Encode designs in the current layout.
pub fn encode_designs(cards: &[DesignRecord]) -> CardResult<String> {
    #[derive(Serialize)]
    struct Borrowed<'a> {
        version: u32,
        cards: &'a [DesignRecord],
    }
    serde_json::to_string(&Borrowed {
        version: SCHEMA_VERSION,
        cards,
    })
    .map_err(decode_err)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
