use serde::{Deserialize, Serialize};

use super::macros::string_enum;

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum BuiltinStatus {
        Office => "Office",
        Home => "Home",
        Vacation => "Vacation",
        Sick => "Sick",
        Branch => "Branch",
        Other => "Other",
    }
}

impl BuiltinStatus {
    pub const ALL: [BuiltinStatus; 6] = [
        BuiltinStatus::Office,
        BuiltinStatus::Home,
        BuiltinStatus::Vacation,
        BuiltinStatus::Sick,
        BuiltinStatus::Branch,
        BuiltinStatus::Other,
    ];

    /// Value keys reserved for the built-in taxonomy. Admin-defined
    /// options may not shadow these.
    pub fn is_reserved(value: &str) -> bool {
        Self::ALL.iter().any(|status| status.as_str() == value)
    }
}

/// One entry of the presence-status taxonomy. Built-in entries are
/// seeded with `is_default = true` and cannot be deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusOption {
    pub id: String,
    /// Unique key, e.g. "Office". Plans reference this value.
    pub value: String,
    pub label: String,
    pub label_he: String,
    pub icon: String,
    pub color: String,
    pub is_default: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusOptionInput {
    pub value: String,
    pub label: String,
    pub label_he: String,
    pub icon: String,
    pub color: String,
}

impl StatusOption {
    pub fn custom(input: StatusOptionInput) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            value: input.value,
            label: input.label,
            label_he: input.label_he,
            icon: input.icon,
            color: input.color,
            is_default: false,
        }
    }
}

/// The taxonomy every fresh installation starts with.
pub fn default_status_options() -> Vec<StatusOption> {
    let seed = [
        ("s1", BuiltinStatus::Office, "Office", "משרד", "office", "bg-blue-500"),
        ("s2", BuiltinStatus::Home, "Home", "בית", "home", "bg-green-500"),
        ("s3", BuiltinStatus::Vacation, "Vacation", "חופש", "sun", "bg-yellow-500"),
        ("s4", BuiltinStatus::Sick, "Sick", "מחלה", "heart", "bg-red-500"),
        ("s5", BuiltinStatus::Branch, "Branch", "סניף", "building", "bg-purple-500"),
        ("s6", BuiltinStatus::Other, "Other", "אחר", "question", "bg-gray-500"),
    ];

    seed.into_iter()
        .map(|(id, status, label, label_he, icon, color)| StatusOption {
            id: id.to_string(),
            value: status.as_str().to_string(),
            label: label.to_string(),
            label_he: label_he.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
            is_default: true,
        })
        .collect()
}
