//! Privileges on a database (`pg_database.datacl`).

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AclError;
use crate::traits::AclItem;

use super::object_kind::ObjectKind;
use super::privilege::Privilege;

/// A database aclitem, e.g. `=Tc/postgres`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct Database {
    pub role: String,
    pub granted_by: String,
    pub create: bool,
    pub create_grant: bool,
    pub temporary: bool,
    pub temporary_grant: bool,
    pub connect: bool,
    pub connect_grant: bool,
}

impl AclItem for Database {
    const KIND: ObjectKind = ObjectKind::Database;
    const PRIVILEGES: &'static [Privilege] =
        &[Privilege::Create, Privilege::Temporary, Privilege::Connect];

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
            Privilege::Temporary => Some((self.temporary, self.temporary_grant)),
            Privilege::Connect => Some((self.connect, self.connect_grant)),
            _ => None,
        }
    }

    fn flags_mut(&mut self, privilege: Privilege) -> Option<(&mut bool, &mut bool)> {
        match privilege {
            Privilege::Create => Some((&mut self.create, &mut self.create_grant)),
            Privilege::Temporary => Some((&mut self.temporary, &mut self.temporary_grant)),
            Privilege::Connect => Some((&mut self.connect, &mut self.connect_grant)),
            _ => None,
        }
    }
}

impl FromStr for Database {
    type Err = AclError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as AclItem>::parse(s)
    }
}

impl Display for Database {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.render())
    }
}
