//! Privileges on a schema (`pg_namespace.nspacl`).

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AclError;
use crate::traits::AclItem;

use super::object_kind::ObjectKind;
use super::privilege::Privilege;

/// A schema aclitem, e.g. `foo=UC*/bar`.
///
/// PostgreSQL prints `U` before `C`; both orders are accepted when parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct Schema {
    /// Grantee; empty for `PUBLIC`.
    pub role: String,
    /// Grantor; empty when unspecified.
    pub granted_by: String,
    pub create: bool,
    pub create_grant: bool,
    pub usage: bool,
    pub usage_grant: bool,
}

impl AclItem for Schema {
    const KIND: ObjectKind = ObjectKind::Schema;
    const PRIVILEGES: &'static [Privilege] = &[Privilege::Usage, Privilege::Create];

    fn role(&self) -> &str {
        &self.role
    }

    fn granted_by(&self) -> &str {
        &self.granted_by
    }

    fn set_role(&mut self, role: String) {
        self.role = role;
    }

    fn set_granted_by(&mut self, granted_by: String) {
        self.granted_by = granted_by;
    }

    fn flags(&self, privilege: Privilege) -> Option<(bool, bool)> {
        match privilege {
            Privilege::Create => Some((self.create, self.create_grant)),
            Privilege::Usage => Some((self.usage, self.usage_grant)),
            _ => None,
        }
    }

    fn flags_mut(&mut self, privilege: Privilege) -> Option<(&mut bool, &mut bool)> {
        match privilege {
            Privilege::Create => Some((&mut self.create, &mut self.create_grant)),
            Privilege::Usage => Some((&mut self.usage, &mut self.usage_grant)),
            _ => None,
        }
    }
}

impl FromStr for Schema {
    type Err = AclError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as AclItem>::parse(s)
    }
}

impl Display for Schema {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.render())
    }
}
