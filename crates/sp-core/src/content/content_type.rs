use serde::{Deserialize, Serialize};

/// Detected category of a clipboard fragment.
///
/// Classification itself happens upstream in the clipboard monitor; this
/// crate only consumes the result. Every category maps to a non-empty rule
/// action list, so the popup is never empty-handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Url,
    Email,
    Phone,
    Financial,
    DateTime,
    Code,
    Address,
    PlainText,
}

impl ContentType {
    /// Total parse from the detector's display name.
    ///
    /// Unrecognized names fall back to [`ContentType::PlainText`] so a
    /// detector/controller version skew never leaves the popup without
    /// actions.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Url" => ContentType::Url,
            "Email" => ContentType::Email,
            "Phone" => ContentType::Phone,
            "Financial" => ContentType::Financial,
            "DateTime" => ContentType::DateTime,
            "Code" => ContentType::Code,
            "Address" => ContentType::Address,
            _ => ContentType::PlainText,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ContentType::Url => "Url",
            ContentType::Email => "Email",
            ContentType::Phone => "Phone",
            ContentType::Financial => "Financial",
            ContentType::DateTime => "DateTime",
            ContentType::Code => "Code",
            ContentType::Address => "Address",
            ContentType::PlainText => "PlainText",
        }
    }
}
