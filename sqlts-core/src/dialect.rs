//! Database dialect identifiers.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Supported database dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// PostgreSQL
    Postgres,
    /// MySQL / MariaDB
    Mysql,
    /// SQLite
    Sqlite,
}

impl Dialect {
    /// Returns the dialect identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Postgres => "postgres",
            Dialect::Mysql => "mysql",
            Dialect::Sqlite => "sqlite",
        }
    }

    /// Infer the dialect from a connection URL.
    ///
    /// Returns `None` when the scheme is not recognized.
    pub fn from_url(url: &str) -> Option<Self> {
        let lower = url.trim().to_ascii_lowercase();
        let scheme = lower.split_once("://").map(|(scheme, _)| scheme);

        match scheme {
            Some("postgres" | "postgresql") => Some(Dialect::Postgres),
            Some("mysql" | "mariadb") => Some(Dialect::Mysql),
            Some("sqlite" | "file") => Some(Dialect::Sqlite),
            Some(_) => None,
            None if lower.starts_with("sqlite:") || lower.starts_with("file:") => {
                Some(Dialect::Sqlite)
            }
            None if lower == ":memory:"
                || lower.ends_with(".db")
                || lower.ends_with(".sqlite")
                || lower.ends_with(".sqlite3") =>
            {
                Some(Dialect::Sqlite)
            }
            None => None,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(Dialect::Postgres),
            "mysql" | "mariadb" => Ok(Dialect::Mysql),
            "sqlite" | "sqlite3" => Ok(Dialect::Sqlite),
            _ => Err(format!(
                "unknown dialect '{}', expected 'postgres', 'mysql' or 'sqlite'",
                s
            )),
        }
    }
}
