use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

/// Kind of token read from the input source.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum DataType {
    #[strum(serialize = "long", to_string = "long")]
    Long,
    #[default]
    #[strum(serialize = "word", to_string = "word")]
    Word,
    #[strum(serialize = "line", to_string = "line")]
    Line,
}

impl DataType {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| Error::InvalidDataType)
    }

    /// Human name used in the totals line, e.g. "Total numbers: 3."
    pub fn type_name(&self) -> &'static str {
        match self {
            DataType::Long => "number",
            DataType::Word => "word",
            DataType::Line => "line",
        }
    }
}

impl Serialize for DataType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_ref())
    }
}

impl<'de> Deserialize<'de> for DataType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DataType::try_from(&raw).map_err(|_| {
            serde::de::Error::custom(format!(
                "Unsupported data type: '{}'. Valid data types: {}",
                raw.trim(),
                valid_csv::<DataType>()
            ))
        })
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive,
)]
#[strum(ascii_case_insensitive)]
pub enum SortingType {
    #[default]
    #[strum(serialize = "natural", to_string = "natural")]
    Natural,
    #[strum(serialize = "bycount", to_string = "byCount")]
    ByCount,
}

impl SortingType {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| Error::InvalidSortingType)
    }
}

impl Serialize for SortingType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_ref())
    }
}

impl<'de> Deserialize<'de> for SortingType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        SortingType::try_from(&raw).map_err(|_| {
            serde::de::Error::custom(format!(
                "Unsupported sorting type: '{}'. Valid sorting types: {}",
                raw.trim(),
                valid_csv::<SortingType>()
            ))
        })
    }
}

/// One item of the input stream.
///
/// A single run only ever holds tokens of one variant, so the derived
/// ordering is numeric for numbers and lexicographic for words and lines.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Token {
    Number(i64),
    Word(String),
    Line(String),
}

impl Token {
    /// Builds a token of the given kind from one raw read.
    /// Only `DataType::Long` can fail.
    pub fn parse(data_type: DataType, raw: &str) -> std::result::Result<Self, String> {
        match data_type {
            DataType::Long => raw
                .parse::<i64>()
                .map(Token::Number)
                .map_err(|_| raw.to_string()),
            DataType::Word => Ok(Token::Word(raw.to_string())),
            DataType::Line => Ok(Token::Line(raw.to_string())),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{n}"),
            Token::Word(s) | Token::Line(s) => write!(f, "{s}"),
        }
    }
}
