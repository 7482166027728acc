mod tools;

use serde::{Deserialize, Serialize};

pub use tools::TOOLS;

/// Upstream model a tool dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::VariantArray)]
#[serde(rename_all = "snake_case")]
pub enum ToolModel {
    Flash,
    Pro,
    FlashTts,
}

impl ToolModel {
    /// The model identifier as it appears in the request path.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Flash => "gemini-3-flash-preview",
            Self::Pro => "gemini-3-pro-preview",
            Self::FlashTts => "gemini-2.5-flash-preview-tts",
        }
    }

    pub fn from_id(s: &str) -> Option<Self> {
        match s {
            "gemini-3-flash-preview" => Some(Self::Flash),
            "gemini-3-pro-preview" => Some(Self::Pro),
            "gemini-2.5-flash-preview-tts" => Some(Self::FlashTts),
            _ => None,
        }
    }
}

/// Shape of the prompt a tool expects. Purely presentational: a hint for
/// front ends choosing between a one-line input and a text area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Text,
    Textarea,
    Code,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::VariantArray,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Coding,
    Writing,
    Productivity,
    Learning,
}

/// One catalog entry: the prompt template plus its presentation metadata.
/// Definitions are compile-time constants; the catalog never changes at
/// runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolSpec {
    /// Stable identifier used on the command line.
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Hint shown where the prompt is entered.
    pub placeholder: &'static str,
    /// Fixed system instruction sent with every invocation of this tool.
    pub system_instruction: &'static str,
    pub model: ToolModel,
    pub input: InputKind,
    pub category: Category,
}

/// All registered tools, in display order.
pub fn all() -> &'static [ToolSpec] {
    TOOLS
}

/// Look up a tool by its stable identifier.
pub fn find(id: &str) -> Option<&'static ToolSpec> {
    TOOLS.iter().find(|tool| tool.id == id)
}

/// Case-insensitive search over tool names and descriptions, optionally
/// restricted to one category. An empty query matches everything.
pub fn search(query: &str, category: Option<Category>) -> Vec<&'static ToolSpec> {
    let query = query.to_lowercase();
    TOOLS
        .iter()
        .filter(|tool| category.map_or(true, |category| tool.category == category))
        .filter(|tool| {
            query.is_empty()
                || tool.name.to_lowercase().contains(&query)
                || tool.description.to_lowercase().contains(&query)
        })
        .collect()
}
