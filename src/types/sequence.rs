//! Privileges on a sequence (`pg_class.relacl` with `relkind = 'S'`).

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AclError;
use crate::traits::AclItem;

use super::object_kind::ObjectKind;
use super::privilege::Privilege;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct Sequence {
    pub role: String,
    pub granted_by: String,
    pub select: bool,
    pub select_grant: bool,
    pub update: bool,
    pub update_grant: bool,
    pub usage: bool,
    pub usage_grant: bool,
}

impl AclItem for Sequence {
    const KIND: ObjectKind = ObjectKind::Sequence;
    const PRIVILEGES: &'static [Privilege] =
        &[Privilege::Select, Privilege::Update, Privilege::Usage];

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
            Privilege::Select => Some((self.select, self.select_grant)),
            Privilege::Update => Some((self.update, self.update_grant)),
            Privilege::Usage => Some((self.usage, self.usage_grant)),
            _ => None,
        }
    }

    fn flags_mut(&mut self, privilege: Privilege) -> Option<(&mut bool, &mut bool)> {
        match privilege {
            Privilege::Select => Some((&mut self.select, &mut self.select_grant)),
            Privilege::Update => Some((&mut self.update, &mut self.update_grant)),
            Privilege::Usage => Some((&mut self.usage, &mut self.usage_grant)),
            _ => None,
        }
    }
}

impl FromStr for Sequence {
    type Err = AclError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as AclItem>::parse(s)
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.render())
    }
}
