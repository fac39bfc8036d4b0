use tracing::trace;

use crate::error::AclError;
use crate::scanner;
use crate::types::{ObjectKind, Privilege};

/// A decoded aclitem for one PostgreSQL object kind, e.g. `foo=U*/bar` on a
/// language or `=UC/postgres` on a schema.
///
/// Implementors only describe their fields; scanning, rendering and merging
/// are shared.
pub trait AclItem: Default + Clone {
    /// The object kind this record describes.
    const KIND: ObjectKind;

    /// The kind's privilege alphabet, in the order `aclitemout` prints it.
    const PRIVILEGES: &'static [Privilege];

    /// The grantee, empty for `PUBLIC`.
    fn role(&self) -> &str;

    /// The grantor, empty when the item carries no `/grantor` suffix.
    fn granted_by(&self) -> &str;

    fn set_role(&mut self, role: String);

    fn set_granted_by(&mut self, granted_by: String);

    /// The `(privilege, grant option)` pair for `privilege`, or `None` when
    /// the privilege is not part of this kind's alphabet.
    fn flags(&self, privilege: Privilege) -> Option<(bool, bool)>;

    /// Mutable access to the `(privilege, grant option)` pair.
    fn flags_mut(&mut self, privilege: Privilege) -> Option<(&mut bool, &mut bool)>;

    /// Parse a single aclitem string.
    fn parse(acl_item: &str) -> Result<Self, AclError> {
        scanner::parse_acl_item(acl_item)
    }

    /// Render the canonical aclitem string.
    fn render(&self) -> String {
        scanner::render_acl_item(self)
    }

    /// Whether the grantee is the `PUBLIC` pseudo-role.
    fn is_public(&self) -> bool {
        self.role().is_empty()
    }

    fn has(&self, privilege: Privilege) -> bool {
        matches!(self.flags(privilege), Some((true, _)))
    }

    /// Whether `privilege` is held WITH GRANT OPTION.
    fn has_grant_option(&self, privilege: Privilege) -> bool {
        matches!(self.flags(privilege), Some((true, true)))
    }

    /// The privileges held, in rendering order, paired with their grant option.
    fn granted(&self) -> Vec<(Privilege, bool)> {
        Self::PRIVILEGES
            .iter()
            .filter_map(|&privilege| match self.flags(privilege) {
                Some((true, grant)) => Some((privilege, grant)),
                _ => None,
            })
            .collect()
    }

    /// Combine `incoming` into a copy of `self`.
    ///
    /// Non-empty strings and `true` flags from `incoming` win, anything else
    /// keeps the value from `self`. Flags are never cleared, so merging can
    /// accumulate privileges from several items but never revoke them.
    fn merge(&self, incoming: &Self) -> Self {
        let mut merged = self.clone();

        if !incoming.role().is_empty() {
            merged.set_role(incoming.role().to_string());
        }

        if !incoming.granted_by().is_empty() {
            merged.set_granted_by(incoming.granted_by().to_string());
        }

        for &privilege in Self::PRIVILEGES {
            let (Some((base, grant)), Some((merged_base, merged_grant))) =
                (incoming.flags(privilege), merged.flags_mut(privilege))
            else {
                continue;
            };
            *merged_base |= base;
            *merged_grant |= grant;
        }

        trace!(
            event = "AclItem",
            phase = "Merged",
            kind = %Self::KIND,
            base = self.render(),
            incoming = incoming.render(),
            merged = merged.render()
        );

        merged
    }
}
