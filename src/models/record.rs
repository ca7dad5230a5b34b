//! Record model representing one bibliographic entry in a loaded dataset.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

/// The record attribute a query targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Author,
    Year,
    Link,
}

impl Field {
    /// Every field, in display order
    pub const ALL: [Field; 4] = [Field::Title, Field::Author, Field::Year, Field::Link];

    /// Returns the field identifier
    pub fn id(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::Year => "year",
            Field::Link => "link",
        }
    }

    /// Returns the display name of the field
    pub fn name(&self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Author => "Author",
            Field::Year => "Year",
            Field::Link => "Link",
        }
    }

    /// Textual rendering of this field on a record
    pub fn text<'r>(&self, record: &'r Record) -> &'r str {
        match self {
            Field::Title => &record.title,
            Field::Author => &record.author,
            Field::Year => &record.year,
            Field::Link => &record.link,
        }
    }

    /// Key used to order a sorted view on this field.
    ///
    /// Year keeps its raw text; every other field compares case-insensitively.
    pub fn sort_key(&self, record: &Record) -> String {
        match self {
            Field::Year => record.year.clone(),
            _ => self.text(record).to_lowercase(),
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Error returned when a field name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field: {0} (expected title, author, year or link)")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(Field::Title),
            "author" | "authors" => Ok(Field::Author),
            "year" => Ok(Field::Year),
            "link" | "url" => Ok(Field::Link),
            _ => Err(UnknownField(s.to_string())),
        }
    }
}

/// A bibliographic record
///
/// Records are read-only once loaded. No field is validated: a missing column
/// becomes an empty string and non-string values are rendered as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Paper title
    #[serde(default, deserialize_with = "text_value")]
    pub title: String,

    /// Publication year as text
    #[serde(default, deserialize_with = "text_value")]
    pub year: String,

    /// Authors, possibly several joined by `;` or `,`
    #[serde(default, deserialize_with = "text_value")]
    pub author: String,

    /// Paper URL
    #[serde(default, deserialize_with = "text_value")]
    pub link: String,
}

impl Record {
    /// Create a new record
    pub fn new(
        title: impl Into<String>,
        year: impl Into<String>,
        author: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            year: year.into(),
            author: author.into(),
            link: link.into(),
        }
    }

    /// Textual value of `field`
    pub fn get(&self, field: Field) -> &str {
        field.text(self)
    }

    /// Build a record from a JSON row, reading each field from the named column
    pub fn from_row(row: &Map<String, Value>, columns: &ColumnMapping) -> Self {
        let column = |name: &str| row.get(name).map(render_text).unwrap_or_default();

        Self {
            title: column(&columns.title),
            year: column(&columns.year),
            author: column(&columns.author),
            link: column(&columns.link),
        }
    }
}

/// Source column names for each record field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    #[serde(default = "default_title_column")]
    pub title: String,

    #[serde(default = "default_author_column")]
    pub author: String,

    #[serde(default = "default_year_column")]
    pub year: String,

    #[serde(default = "default_link_column")]
    pub link: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            title: default_title_column(),
            author: default_author_column(),
            year: default_year_column(),
            link: default_link_column(),
        }
    }
}

fn default_title_column() -> String {
    "Title".to_string()
}

fn default_author_column() -> String {
    "Author".to_string()
}

fn default_year_column() -> String {
    "Year".to_string()
}

fn default_link_column() -> String {
    "Link".to_string()
}

/// Render any JSON value as the text the matchers compare against
pub fn render_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                match n.as_f64() {
                    Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
                        format!("{}", f as i64)
                    }
                    Some(f) => f.to_string(),
                    None => n.to_string(),
                }
            }
        }
        other => other.to_string(),
    }
}

fn text_value<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(render_text(&value))
}

/// Builder for constructing Record objects
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    /// Create a new builder with a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            record: Record {
                title: title.into(),
                ..Default::default()
            },
        }
    }

    /// Set authors
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.record.author = author.into();
        self
    }

    /// Set year
    pub fn year(mut self, year: impl ToString) -> Self {
        self.record.year = year.to_string();
        self
    }

    /// Set link
    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.record.link = link.into();
        self
    }

    /// Build the Record
    pub fn build(self) -> Record {
        self.record
    }
}
