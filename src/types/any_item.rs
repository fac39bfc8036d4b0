//! An aclitem whose object kind is only known at runtime.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AclError;
use crate::traits::AclItem;

use super::object_kind::ObjectKind;
use super::{Database, Function, Language, Schema, Sequence, Table};

/// One decoded aclitem, tagged with its object kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AnyAclItem {
    Language(Language),
    Schema(Schema),
    Database(Database),
    Table(Table),
    Sequence(Sequence),
    Function(Function),
}

impl AnyAclItem {
    /// Parse `acl_item` using the alphabet of `kind`.
    pub fn parse(kind: ObjectKind, acl_item: &str) -> Result<Self, AclError> {
        Ok(match kind {
            ObjectKind::Language => Self::Language(Language::parse(acl_item)?),
            ObjectKind::Schema => Self::Schema(Schema::parse(acl_item)?),
            ObjectKind::Database => Self::Database(Database::parse(acl_item)?),
            ObjectKind::Table => Self::Table(Table::parse(acl_item)?),
            ObjectKind::Sequence => Self::Sequence(Sequence::parse(acl_item)?),
            ObjectKind::Function => Self::Function(Function::parse(acl_item)?),
        })
    }

    pub fn kind(&self) -> ObjectKind {
        match self {
            Self::Language(_) => ObjectKind::Language,
            Self::Schema(_) => ObjectKind::Schema,
            Self::Database(_) => ObjectKind::Database,
            Self::Table(_) => ObjectKind::Table,
            Self::Sequence(_) => ObjectKind::Sequence,
            Self::Function(_) => ObjectKind::Function,
        }
    }

    pub fn role(&self) -> &str {
        match self {
            Self::Language(item) => item.role(),
            Self::Schema(item) => item.role(),
            Self::Database(item) => item.role(),
            Self::Table(item) => item.role(),
            Self::Sequence(item) => item.role(),
            Self::Function(item) => item.role(),
        }
    }

    pub fn granted_by(&self) -> &str {
        match self {
            Self::Language(item) => item.granted_by(),
            Self::Schema(item) => item.granted_by(),
            Self::Database(item) => item.granted_by(),
            Self::Table(item) => item.granted_by(),
            Self::Sequence(item) => item.granted_by(),
            Self::Function(item) => item.granted_by(),
        }
    }

    /// Merge `incoming` into a copy of `self`. Both items must be of the same kind.
    pub fn merge(&self, incoming: &Self) -> Result<Self, AclError> {
        Ok(match (self, incoming) {
            (Self::Language(base), Self::Language(other)) => Self::Language(base.merge(other)),
            (Self::Schema(base), Self::Schema(other)) => Self::Schema(base.merge(other)),
            (Self::Database(base), Self::Database(other)) => Self::Database(base.merge(other)),
            (Self::Table(base), Self::Table(other)) => Self::Table(base.merge(other)),
            (Self::Sequence(base), Self::Sequence(other)) => Self::Sequence(base.merge(other)),
            (Self::Function(base), Self::Function(other)) => Self::Function(base.merge(other)),
            _ => {
                return Err(AclError::KindMismatch {
                    expected: self.kind(),
                    found: incoming.kind(),
                });
            }
        })
    }
}

impl Display for AnyAclItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Language(item) => write!(f, "{item}"),
            Self::Schema(item) => write!(f, "{item}"),
            Self::Database(item) => write!(f, "{item}"),
            Self::Table(item) => write!(f, "{item}"),
            Self::Sequence(item) => write!(f, "{item}"),
            Self::Function(item) => write!(f, "{item}"),
        }
    }
}

macro_rules! impl_from_item {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for AnyAclItem {
                fn from(item: $variant) -> Self {
                    Self::$variant(item)
                }
            }
        )*
    };
}

impl_from_item!(Language, Schema, Database, Table, Sequence, Function);
