//! Attribute values held in memory.

use std::fmt;

use jiff::{
    civil::{DateTime, Time},
    fmt::temporal::{Pieces, PiecesOffset},
    tz::{Offset, TimeZone},
    Zoned,
};
use rusqlite::{
    types::{ToSqlOutput, Value, ValueRef},
    ToSql,
};

use super::FieldType;

/// A single attribute value.
///
/// Values are held as the table store returned them. The only decoding
/// performed is for datetime-typed fields, whose text is parsed into
/// [`CellValue::DateTime`] or, when the text carries an offset,
/// [`CellValue::Zoned`] pinned to that fixed offset.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
    DateTime(DateTime),
    Zoned(Zoned),
}

impl CellValue {
    /// Decodes a raw SQLite value read from a field of the given type.
    pub fn from_sql(value: ValueRef<'_>, field_type: FieldType) -> Result<Self, std::str::Utf8Error> {
        match (value, field_type) {
            (ValueRef::Text(bytes), FieldType::Date) => {
                let text = std::str::from_utf8(bytes)?;
                Ok(Self::parse_datetime(text).unwrap_or_else(|| CellValue::Text(text.to_string())))
            }
            (value, _) => Self::stored(value),
        }
    }

    /// Copies a raw SQLite value without any decoding.
    pub fn stored(value: ValueRef<'_>) -> Result<Self, std::str::Utf8Error> {
        Ok(match value {
            ValueRef::Null => CellValue::Null,
            ValueRef::Integer(v) => CellValue::Integer(v),
            ValueRef::Real(v) => CellValue::Real(v),
            ValueRef::Text(bytes) => CellValue::Text(std::str::from_utf8(bytes)?.to_string()),
            ValueRef::Blob(bytes) => CellValue::Blob(bytes.to_vec()),
        })
    }

    /// Parses ISO 8601 style datetime text.
    ///
    /// Accepts a date alone (`2021-03-04`), a date and time separated by `T`
    /// or a space, optional fractional seconds, and an optional `Z` or numeric
    /// offset. Returns `None` when the text is not a datetime.
    pub fn parse_datetime(text: &str) -> Option<Self> {
        let pieces = Pieces::parse(text.trim()).ok()?;
        let datetime = pieces
            .date()
            .to_datetime(pieces.time().unwrap_or(Time::midnight()));

        match pieces.offset() {
            None => Some(CellValue::DateTime(datetime)),
            Some(offset) => {
                let offset = match offset {
                    PiecesOffset::Numeric(numeric) => numeric.offset(),
                    _ => Offset::UTC,
                };
                datetime
                    .to_zoned(TimeZone::fixed(offset))
                    .ok()
                    .map(CellValue::Zoned)
            }
        }
    }

    /// Short name of the value's kind, used in messages.
    pub fn kind(&self) -> &'static str {
        match self {
            CellValue::Null => "null",
            CellValue::Integer(_) => "integer",
            CellValue::Real(_) => "real",
            CellValue::Text(_) => "text",
            CellValue::Blob(_) => "blob",
            CellValue::DateTime(_) | CellValue::Zoned(_) => "datetime",
        }
    }

    /// Returns the integer payload, if any.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            CellValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Field type able to hold this value when a column has to be created.
    pub fn field_type(&self) -> Option<FieldType> {
        match self {
            CellValue::Null => None,
            CellValue::Integer(_) => Some(FieldType::Long),
            CellValue::Real(_) => Some(FieldType::Double),
            CellValue::Text(_) => Some(FieldType::Text),
            CellValue::Blob(_) => Some(FieldType::Blob),
            CellValue::DateTime(_) | CellValue::Zoned(_) => Some(FieldType::Date),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => f.write_str("NULL"),
            CellValue::Integer(v) => write!(f, "{v}"),
            CellValue::Real(v) => write!(f, "{v}"),
            CellValue::Text(v) => f.write_str(v),
            CellValue::Blob(v) => write!(f, "<{} bytes>", v.len()),
            CellValue::DateTime(v) => write!(f, "{v}"),
            CellValue::Zoned(v) => write!(f, "{}", v.timestamp().display_with_offset(v.offset())),
        }
    }
}

impl ToSql for CellValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            CellValue::Null => ToSqlOutput::Owned(Value::Null),
            CellValue::Integer(v) => ToSqlOutput::Owned(Value::Integer(*v)),
            CellValue::Real(v) => ToSqlOutput::Owned(Value::Real(*v)),
            CellValue::Text(v) => ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes())),
            CellValue::Blob(v) => ToSqlOutput::Borrowed(ValueRef::Blob(v)),
            CellValue::DateTime(_) | CellValue::Zoned(_) => {
                ToSqlOutput::Owned(Value::Text(self.to_string()))
            }
        })
    }
}
