//! Editor State - the card currently being edited
//!
//! The form widgets are bound to this struct; it is the single source of
//! truth for the preview. It only becomes a [`DesignRecord`] on explicit save.

use serde::{Deserialize, Serialize};

use crate::types::{CardStyle, ContactField, DesignId, DesignRecord, LogoImage};

/// Live contact values. Unlike [`crate::ContactInfo`] there is no "absent"
/// state: an untouched widget holds an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactValues {
    pub name: String,
    pub title: String,
    pub company: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub address: String,
}

impl ContactValues {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Title => &self.title,
            ContactField::Company => &self.company,
            ContactField::Phone => &self.phone,
            ContactField::Email => &self.email,
            ContactField::Website => &self.website,
            ContactField::Address => &self.address,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Title => &mut self.title,
            ContactField::Company => &mut self.company,
            ContactField::Phone => &mut self.phone,
            ContactField::Email => &mut self.email,
            ContactField::Website => &mut self.website,
            ContactField::Address => &mut self.address,
        };
        *slot = value.into();
    }
}

/// Everything the form edits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorState {
    pub contact: ContactValues,
    pub style: CardStyle,
    #[serde(default)]
    pub logo: Option<LogoImage>,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot into a record. Every field is captured, empty ones as `Some("")`.
    pub fn to_record(&self, id: DesignId) -> DesignRecord {
        let mut contact = crate::types::ContactInfo::default();
        for field in ContactField::ALL {
            contact.set(field, Some(self.contact.get(field).to_string()));
        }
        DesignRecord {
            id,
            contact,
            style: self.style.clone(),
            logo: self.logo.clone(),
        }
    }

    /// Rebuild widget values from a saved record. Absent fields become empty.
    pub fn from_record(record: &DesignRecord) -> Self {
        let mut contact = ContactValues::default();
        for field in ContactField::ALL {
            contact.set(field, record.contact.get(field).unwrap_or_default());
        }
        Self {
            contact,
            style: record.style.clone(),
            logo: record.logo.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Template;

    #[test]
    fn test_defaults() {
        let state = EditorState::new();
        assert_eq!(state.contact.name, "");
        assert_eq!(state.style.template, Template::Default);
        assert!(state.style.rounded);
        assert!(state.logo.is_none());
    }

    #[test]
    fn test_record_snapshot_is_complete() {
        let mut state = EditorState::new();
        state.contact.set(ContactField::Email, "ada@example.com");
        let record = state.to_record(DesignId(7));

        assert_eq!(record.id, DesignId(7));
        for field in ContactField::ALL {
            assert!(record.contact.get(field).is_some(), "{:?} missing", field);
        }
        assert_eq!(record.contact.get(ContactField::Email), Some("ada@example.com"));
        assert_eq!(record.contact.get(ContactField::Name), Some(""));
    }

    #[test]
    fn test_from_record_fills_absent_with_empty() {
        let mut record = EditorState::new().to_record(DesignId(1));
        record.contact.phone = None;
        record.contact.title = Some("Engineer".to_string());

        let state = EditorState::from_record(&record);
        assert_eq!(state.contact.phone, "");
        assert_eq!(state.contact.title, "Engineer");
    }
}
