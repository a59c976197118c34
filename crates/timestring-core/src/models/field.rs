//! Field types and descriptors.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of field types a table can carry.
///
/// The names follow the usual GIS field keywords. Each type maps onto a SQLite
/// declared type when a field is created, and back from whatever declared type
/// an existing column carries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Variable length text
    Text,
    /// Small integer
    Short,
    /// 64-bit integer
    Long,
    /// Single precision float
    Float,
    /// Double precision float
    Double,
    /// Date or datetime
    Date,
    /// Binary data, including geometry columns
    Blob,
}

const GEOMETRY_TYPES: &[&str] = &[
    "GEOMETRY",
    "POINT",
    "LINESTRING",
    "POLYGON",
    "MULTIPOINT",
    "MULTILINESTRING",
    "MULTIPOLYGON",
    "GEOMETRYCOLLECTION",
];

impl FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "string" => Ok(FieldType::Text),
            "short" | "smallint" => Ok(FieldType::Short),
            "long" | "integer" => Ok(FieldType::Long),
            "float" => Ok(FieldType::Float),
            "double" | "real" => Ok(FieldType::Double),
            "date" | "datetime" => Ok(FieldType::Date),
            "blob" => Ok(FieldType::Blob),
            _ => Err(format!("Invalid field type: {s}")),
        }
    }
}

impl FieldType {
    /// Keyword representation of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Short => "short",
            FieldType::Long => "long",
            FieldType::Float => "float",
            FieldType::Double => "double",
            FieldType::Date => "date",
            FieldType::Blob => "blob",
        }
    }

    /// SQLite declared type used when creating a field of this type.
    pub fn sql_type(&self, length: Option<u32>) -> String {
        match (self, length) {
            (FieldType::Text, Some(length)) => format!("TEXT({length})"),
            (FieldType::Text, None) => "TEXT".to_string(),
            (FieldType::Short, _) => "SMALLINT".to_string(),
            (FieldType::Long, _) => "INTEGER".to_string(),
            (FieldType::Float, _) => "FLOAT".to_string(),
            (FieldType::Double, _) => "DOUBLE".to_string(),
            (FieldType::Date, _) => "DATETIME".to_string(),
            (FieldType::Blob, _) => "BLOB".to_string(),
        }
    }

    /// Classifies a SQLite declared column type.
    ///
    /// Unknown types classify as text. Columns declared without a type and
    /// GeoPackage geometry columns classify as blobs.
    pub fn from_declared(declared: &str) -> Self {
        let upper = declared.trim().to_uppercase();
        let base = upper.split('(').next().unwrap_or_default().trim();

        if base.is_empty() || base == "BLOB" || GEOMETRY_TYPES.contains(&base) {
            FieldType::Blob
        } else if base.contains("DATE") || base.contains("TIME") {
            FieldType::Date
        } else if matches!(base, "SMALLINT" | "TINYINT" | "MEDIUMINT" | "BOOLEAN") {
            FieldType::Short
        } else if base.contains("INT") {
            FieldType::Long
        } else if base == "FLOAT" {
            FieldType::Float
        } else if base.contains("REAL")
            || base.contains("DOUB")
            || base.contains("NUMERIC")
            || base.contains("DECIMAL")
        {
            FieldType::Double
        } else {
            FieldType::Text
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An existing field on a table.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub field_type: FieldType,
    /// Declared SQL type, verbatim
    pub declared_type: String,
    pub nullable: bool,
    pub primary_key: bool,
}

/// Request to add a field to a table.
///
/// Constraints not listed here (precision, scale, alias, domain) take the
/// host's defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub field_type: FieldType,
    pub length: Option<u32>,
    pub nullable: bool,
}

impl FieldSpec {
    /// A nullable field of the given type with default constraints.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            length: None,
            nullable: true,
        }
    }

    /// A nullable text field.
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Text)
    }

    /// Sets the text length.
    pub fn with_length(mut self, length: Option<u32>) -> Self {
        self.length = length;
        self
    }
}
