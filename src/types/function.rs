//! Privileges on a function or procedure (`pg_proc.proacl`).

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AclError;
use crate::traits::AclItem;

use super::object_kind::ObjectKind;
use super::privilege::Privilege;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct Function {
    pub role: String,
    pub granted_by: String,
    pub execute: bool,
    pub execute_grant: bool,
}

impl AclItem for Function {
    const KIND: ObjectKind = ObjectKind::Function;
    const PRIVILEGES: &'static [Privilege] = &[Privilege::Execute];

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
            Privilege::Execute => Some((self.execute, self.execute_grant)),
            _ => None,
        }
    }

    fn flags_mut(&mut self, privilege: Privilege) -> Option<(&mut bool, &mut bool)> {
        match privilege {
            Privilege::Execute => Some((&mut self.execute, &mut self.execute_grant)),
            _ => None,
        }
    }
}

impl FromStr for Function {
    type Err = AclError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as AclItem>::parse(s)
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.render())
    }
}
