//! Privileges on a table, view or foreign table (`pg_class.relacl`).

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AclError;
use crate::traits::AclItem;

use super::object_kind::ObjectKind;
use super::privilege::Privilege;

/// A table aclitem, e.g. `alice=arwdDxtm/alice`.
///
/// `m` (MAINTAIN) only appears on PostgreSQL 17 and later; older servers
/// simply never emit it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct Table {
    pub role: String,
    pub granted_by: String,
    pub insert: bool,
    pub insert_grant: bool,
    pub select: bool,
    pub select_grant: bool,
    pub update: bool,
    pub update_grant: bool,
    pub delete: bool,
    pub delete_grant: bool,
    pub truncate: bool,
    pub truncate_grant: bool,
    pub references: bool,
    pub references_grant: bool,
    pub trigger: bool,
    pub trigger_grant: bool,
    pub maintain: bool,
    pub maintain_grant: bool,
}

impl AclItem for Table {
    const KIND: ObjectKind = ObjectKind::Table;
    const PRIVILEGES: &'static [Privilege] = &[
        Privilege::Insert,
        Privilege::Select,
        Privilege::Update,
        Privilege::Delete,
        Privilege::Truncate,
        Privilege::References,
        Privilege::Trigger,
        Privilege::Maintain,
    ];

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
            Privilege::Insert => Some((self.insert, self.insert_grant)),
            Privilege::Select => Some((self.select, self.select_grant)),
            Privilege::Update => Some((self.update, self.update_grant)),
            Privilege::Delete => Some((self.delete, self.delete_grant)),
            Privilege::Truncate => Some((self.truncate, self.truncate_grant)),
            Privilege::References => Some((self.references, self.references_grant)),
            Privilege::Trigger => Some((self.trigger, self.trigger_grant)),
            Privilege::Maintain => Some((self.maintain, self.maintain_grant)),
            _ => None,
        }
    }

    fn flags_mut(&mut self, privilege: Privilege) -> Option<(&mut bool, &mut bool)> {
        match privilege {
            Privilege::Insert => Some((&mut self.insert, &mut self.insert_grant)),
            Privilege::Select => Some((&mut self.select, &mut self.select_grant)),
            Privilege::Update => Some((&mut self.update, &mut self.update_grant)),
            Privilege::Delete => Some((&mut self.delete, &mut self.delete_grant)),
            Privilege::Truncate => Some((&mut self.truncate, &mut self.truncate_grant)),
            Privilege::References => Some((&mut self.references, &mut self.references_grant)),
            Privilege::Trigger => Some((&mut self.trigger, &mut self.trigger_grant)),
            Privilege::Maintain => Some((&mut self.maintain, &mut self.maintain_grant)),
            _ => None,
        }
    }
}

impl FromStr for Table {
    type Err = AclError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as AclItem>::parse(s)
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.render())
    }
}
