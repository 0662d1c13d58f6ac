//! Design Record - a saved snapshot of one business card
//!
//! A record is complete once written: every contact field and the whole style
//! block are captured together. Records are never updated in place.

use serde::{Deserialize, Serialize};

use super::{DesignId, LogoImage};

/// Contact fields edited through the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContactField {
    Name,
    Title,
    Company,
    Phone,
    Email,
    Website,
    Address,
}

impl ContactField {
    /// Every contact field, in form order
    pub const ALL: [ContactField; 7] = [
        ContactField::Name,
        ContactField::Title,
        ContactField::Company,
        ContactField::Phone,
        ContactField::Email,
        ContactField::Website,
        ContactField::Address,
    ];

    /// Fields that have a text node on the preview card.
    ///
    /// `Company` is stored with the design but not drawn.
    pub const PREVIEWED: [ContactField; 6] = [
        ContactField::Name,
        ContactField::Title,
        ContactField::Phone,
        ContactField::Email,
        ContactField::Website,
        ContactField::Address,
    ];

    /// Lowercase key used in placeholders and widget ids
    pub fn key(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Title => "title",
            ContactField::Company => "company",
            ContactField::Phone => "phone",
            ContactField::Email => "email",
            ContactField::Website => "website",
            ContactField::Address => "address",
        }
    }

    /// Human label for the form
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Full Name",
            ContactField::Title => "Job Title",
            ContactField::Company => "Company",
            ContactField::Phone => "Phone",
            ContactField::Email => "Email",
            ContactField::Website => "Website",
            ContactField::Address => "Address",
        }
    }

    pub fn is_previewed(&self) -> bool {
        !matches!(self, ContactField::Company)
    }

    /// Text shown on the card while the field is empty
    pub fn placeholder(&self) -> String {
        format!("Your {}", self.key())
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

/// Visual template preset.
///
/// Unknown names are carried through untouched so that designs saved by a
/// newer build still load; they render with the default presentation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Template {
    #[default]
    Default,
    ModernDark,
    Creative,
    Minimal,
    Other(String),
}

impl Template {
    /// Templates offered by the form selector
    pub const BUILTIN: [Template; 4] = [
        Template::Default,
        Template::ModernDark,
        Template::Creative,
        Template::Minimal,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Template::Default => "default",
            Template::ModernDark => "modern-dark",
            Template::Creative => "creative",
            Template::Minimal => "minimal",
            Template::Other(name) => name,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Template::Default => "Classic",
            Template::ModernDark => "Modern Dark",
            Template::Creative => "Creative",
            Template::Minimal => "Minimal",
            Template::Other(name) => name,
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "default" => Template::Default,
            "modern-dark" => Template::ModernDark,
            "creative" => Template::Creative,
            "minimal" => Template::Minimal,
            other => Template::Other(other.to_string()),
        }
    }
}

impl From<String> for Template {
    fn from(value: String) -> Self {
        Template::parse(&value)
    }
}

impl From<Template> for String {
    fn from(value: Template) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contact block of a saved design.
///
/// `None` means the field was absent from the stored record; `Some("")` is a
/// field that was saved empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl ContactInfo {
    pub fn get(&self, field: ContactField) -> Option<&str> {
        let slot = match field {
            ContactField::Name => &self.name,
            ContactField::Title => &self.title,
            ContactField::Company => &self.company,
            ContactField::Phone => &self.phone,
            ContactField::Email => &self.email,
            ContactField::Website => &self.website,
            ContactField::Address => &self.address,
        };
        slot.as_deref()
    }

    pub fn set(&mut self, field: ContactField, value: Option<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Title => &mut self.title,
            ContactField::Company => &mut self.company,
            ContactField::Phone => &mut self.phone,
            ContactField::Email => &mut self.email,
            ContactField::Website => &mut self.website,
            ContactField::Address => &mut self.address,
        };
        *slot = value;
    }
}

/// Style block shared by the editor state and saved designs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardStyle {
    pub primary_color: String,
    pub text_color: String,
    pub font: String,
    pub template: Template,
    pub rounded: bool,
}

impl CardStyle {
    pub const DEFAULT_PRIMARY_COLOR: &'static str = "#2563eb";
    pub const DEFAULT_TEXT_COLOR: &'static str = "#1e293b";
    pub const DEFAULT_FONT: &'static str = "'Inter', sans-serif";

    /// Font families offered by the form selector
    pub const FONTS: [(&'static str, &'static str); 5] = [
        ("Inter", "'Inter', sans-serif"),
        ("Roboto", "'Roboto', sans-serif"),
        ("Playfair Display", "'Playfair Display', serif"),
        ("Montserrat", "'Montserrat', sans-serif"),
        ("Courier Prime", "'Courier Prime', monospace"),
    ];
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            primary_color: Self::DEFAULT_PRIMARY_COLOR.to_string(),
            text_color: Self::DEFAULT_TEXT_COLOR.to_string(),
            font: Self::DEFAULT_FONT.to_string(),
            template: Template::Default,
            rounded: true,
        }
    }
}

/// A saved business card design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignRecord {
    pub id: DesignId,
    pub contact: ContactInfo,
    pub style: CardStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<LogoImage>,
}

impl DesignRecord {
    /// Display name for lists: the saved name, or a placeholder when empty
    pub fn display_name(&self) -> String {
        match self.contact.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => ContactField::Name.placeholder(),
        }
    }

    /// Save time derived from the id
    pub fn saved_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::from_timestamp_millis(self.id.as_millis())
    }
}
