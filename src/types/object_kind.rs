//! PostgreSQL object kinds that carry an ACL column.
//!
//! Each kind has its own privilege alphabet; the alphabet lives as a constant
//! on the matching record type and is exposed here for runtime dispatch.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter};
use utoipa::ToSchema;

use crate::error::AclError;
use crate::traits::AclItem;

use super::privilege::Privilege;
use super::{Database, Function, Language, Schema, Sequence, Table};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    EnumIter,
    Display,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ObjectKind {
    /// `pg_language.lanacl`
    Language,
    /// `pg_namespace.nspacl`
    Schema,
    /// `pg_database.datacl`
    Database,
    /// `pg_class.relacl` for tables, views and foreign tables
    Table,
    /// `pg_class.relacl` for sequences
    Sequence,
    /// `pg_proc.proacl`
    Function,
}

impl ObjectKind {
    /// The privileges valid for this kind, in rendering order.
    pub fn privileges(&self) -> &'static [Privilege] {
        match self {
            Self::Language => Language::PRIVILEGES,
            Self::Schema => Schema::PRIVILEGES,
            Self::Database => Database::PRIVILEGES,
            Self::Table => Table::PRIVILEGES,
            Self::Sequence => Sequence::PRIVILEGES,
            Self::Function => Function::PRIVILEGES,
        }
    }
}

impl FromStr for ObjectKind {
    type Err = AclError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|kind| {
                let name: &str = kind.as_ref();
                name.eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| AclError::UnknownObjectKind(s.to_string()))
    }
}
