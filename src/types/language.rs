//! Privileges on a procedural language (`pg_language.lanacl`).

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AclError;
use crate::traits::AclItem;

use super::object_kind::ObjectKind;
use super::privilege::Privilege;

/// A language aclitem, e.g. `foo=U*/bar`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct Language {
    /// Grantee; empty for `PUBLIC`.
    pub role: String,
    /// Grantor; empty when unspecified.
    pub granted_by: String,
    pub usage: bool,
    pub usage_grant: bool,
}

impl AclItem for Language {
    const KIND: ObjectKind = ObjectKind::Language;
    const PRIVILEGES: &'static [Privilege] = &[Privilege::Usage];

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
            Privilege::Usage => Some((self.usage, self.usage_grant)),
            _ => None,
        }
    }

    fn flags_mut(&mut self, privilege: Privilege) -> Option<(&mut bool, &mut bool)> {
        match privilege {
            Privilege::Usage => Some((&mut self.usage, &mut self.usage_grant)),
            _ => None,
        }
    }
}

impl FromStr for Language {
    type Err = AclError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as AclItem>::parse(s)
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.render())
    }
}
