use crate::db::schema::{
    INSERT_FIRST_NAME, INSERT_LAST_NAME, SELECT_FIRST_NAMES, SELECT_LAST_NAMES,
};
use sqlx::FromRow;
use std::fmt;

/// Which of the two destination tables a name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NameTable {
    FirstNames,
    LastNames,
}

impl NameTable {
    pub const ALL: [NameTable; 2] = [NameTable::FirstNames, NameTable::LastNames];

    pub fn table_name(self) -> &'static str {
        match self {
            Self::FirstNames => "first_names",
            Self::LastNames => "last_names",
        }
    }

    /// Human label used in log lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstNames => "first names",
            Self::LastNames => "last names",
        }
    }

    pub(crate) fn insert_query(self) -> &'static str {
        match self {
            Self::FirstNames => INSERT_FIRST_NAME,
            Self::LastNames => INSERT_LAST_NAME,
        }
    }

    pub(crate) fn select_query(self) -> &'static str {
        match self {
            Self::FirstNames => SELECT_FIRST_NAMES,
            Self::LastNames => SELECT_LAST_NAMES,
        }
    }
}

impl fmt::Display for NameTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct NameRecord {
    pub id: i32,
    pub name: String,
}
