//! Parser and rendering options shared by introspection and code generation.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

/// How arbitrary-precision and 64-bit integer columns are typed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumericParser {
    /// Lossy `number`.
    Number,
    /// Always a string on read.
    #[default]
    String,
    /// A union admitting both `number` and `string`.
    NumberOrString,
}

impl NumericParser {
    pub fn as_str(&self) -> &'static str {
        match self {
            NumericParser::Number => "number",
            NumericParser::String => "string",
            NumericParser::NumberOrString => "number-or-string",
        }
    }
}

impl fmt::Display for NumericParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NumericParser {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "number" => Ok(NumericParser::Number),
            "string" => Ok(NumericParser::String),
            "number-or-string" => Ok(NumericParser::NumberOrString),
            _ => Err(format!(
                "unknown numeric parser '{}', expected 'number', 'string' or 'number-or-string'",
                s
            )),
        }
    }
}

/// How `date` columns are typed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateParser {
    /// Keep the textual representation.
    String,
    /// Deserialize into a timestamp value at runtime.
    #[default]
    Timestamp,
}

impl DateParser {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateParser::String => "string",
            DateParser::Timestamp => "timestamp",
        }
    }
}

impl fmt::Display for DateParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateParser {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(DateParser::String),
            "timestamp" => Ok(DateParser::Timestamp),
            _ => Err(format!(
                "unknown date parser '{}', expected 'string' or 'timestamp'",
                s
            )),
        }
    }
}

/// How enum types are rendered.
///
/// `Disabled` renders a union of string literals. The other styles render a
/// runtime `enum` whose member names follow the given case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuntimeEnumStyle {
    #[default]
    Disabled,
    PascalCase,
    ScreamingSnakeCase,
}

impl RuntimeEnumStyle {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, RuntimeEnumStyle::Disabled)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RuntimeEnumStyle::Disabled => "false",
            RuntimeEnumStyle::PascalCase => "pascal-case",
            RuntimeEnumStyle::ScreamingSnakeCase => "screaming-snake-case",
        }
    }
}

impl fmt::Display for RuntimeEnumStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuntimeEnumStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "false" | "off" | "none" => Ok(RuntimeEnumStyle::Disabled),
            "true" | "screaming-snake-case" => Ok(RuntimeEnumStyle::ScreamingSnakeCase),
            "pascal-case" => Ok(RuntimeEnumStyle::PascalCase),
            _ => Err(format!(
                "unknown runtime enum style '{}', expected 'false', 'true', 'pascal-case' or 'screaming-snake-case'",
                s
            )),
        }
    }
}

// Accepts either a boolean or a style name.
impl<'de> Deserialize<'de> for RuntimeEnumStyle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Style(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Flag(false) => Ok(RuntimeEnumStyle::Disabled),
            Raw::Flag(true) => Ok(RuntimeEnumStyle::ScreamingSnakeCase),
            Raw::Style(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}
