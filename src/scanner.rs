//! The aclitem grammar shared by every object kind:
//!
//! ```text
//! aclitem    := grantee "=" privileges [ "/" grantor ]
//! privileges := { priv-letter [ "*" ] }
//! ```
//!
//! The letters themselves come from [`AclItem::PRIVILEGES`].

use tracing::debug;

use crate::error::AclError;
use crate::traits::AclItem;

pub(crate) fn parse_acl_item<T: AclItem>(input: &str) -> Result<T, AclError> {
    match scan::<T>(input) {
        Ok(item) => {
            debug!(
                event = "AclItem",
                phase = "Parsed",
                kind = %T::KIND,
                role = item.role(),
                granted_by = item.granted_by(),
                canonical = render_acl_item(&item)
            );
            Ok(item)
        }
        Err(err) => {
            debug!(
                event = "AclItem",
                phase = "Rejected",
                kind = %T::KIND,
                error = %err
            );
            Err(err)
        }
    }
}

fn scan<T: AclItem>(input: &str) -> Result<T, AclError> {
    let separator = input
        .find('=')
        .ok_or_else(|| AclError::MissingSeparator {
            input: input.to_string(),
        })?;

    let mut item = T::default();
    item.set_role(input[..separator].to_string());

    let bytes = input.as_bytes();
    let mut offset = separator + 1;
    while offset < bytes.len() {
        let byte = bytes[offset];

        // Everything after the first '/' is the grantor, even flag letters.
        if byte == b'/' {
            item.set_granted_by(input[offset + 1..].to_string());
            break;
        }

        let flags = match T::PRIVILEGES.iter().find(|p| p.letter() == byte) {
            Some(&privilege) => item.flags_mut(privilege),
            None => None,
        };
        let Some((base, grant)) = flags else {
            return Err(AclError::UnrecognizedByte {
                kind: T::KIND,
                byte,
                offset,
                input: input.to_string(),
            });
        };

        *base = true;
        // '*' is only ever consumed as the tail of a letter.
        if bytes.get(offset + 1) == Some(&b'*') {
            *grant = true;
            offset += 1;
        }
        offset += 1;
    }

    Ok(item)
}

pub(crate) fn render_acl_item<T: AclItem>(item: &T) -> String {
    let mut out = String::with_capacity(
        item.role().len() + 1 + 2 * T::PRIVILEGES.len() + 1 + item.granted_by().len(),
    );

    out.push_str(item.role());
    out.push('=');

    for &privilege in T::PRIVILEGES {
        if let Some((true, grant)) = item.flags(privilege) {
            out.push(char::from(privilege.letter()));
            if grant {
                out.push('*');
            }
        }
    }

    if !item.granted_by().is_empty() {
        out.push('/');
        out.push_str(item.granted_by());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ObjectKind, Schema};
    use yare::parameterized;

    #[parameterized(
        no_equals = { "bar*" },
        single_byte = { "%" },
        empty = { "" },
        role_only = { "foo" },
    )]
    fn test_missing_separator(input: &str) {
        let err = parse_acl_item::<Schema>(input).unwrap_err();
        assert_eq!(
            err,
            AclError::MissingSeparator {
                input: input.to_string()
            }
        );
    }

    #[parameterized(
        bare_star = { "foo=*", b'*', 4 },
        double_star = { "foo=U**", b'*', 6 },
        percent = { "foo=%", b'%', 4 },
        lowercase_letter = { "foo=u", b'u', 4 },
        foreign_letter = { "foo=UCX", b'X', 6 },
        space = { "foo= U", b' ', 4 },
        second_equals = { "foo=U=C", b'=', 5 },
        non_ascii = { "foo=é", 0xc3, 4 },
    )]
    fn test_unrecognized_byte(input: &str, byte: u8, offset: usize) {
        let err = parse_acl_item::<Schema>(input).unwrap_err();
        assert_eq!(
            err,
            AclError::UnrecognizedByte {
                kind: ObjectKind::Schema,
                byte,
                offset,
                input: input.to_string(),
            }
        );
    }

    #[test]
    fn test_role_is_split_on_first_equals() {
        let item: Schema = parse_acl_item("a b\"c=U").unwrap();
        assert_eq!(item.role, "a b\"c");

        let err = parse_acl_item::<Schema>("a=b").unwrap_err();
        assert!(matches!(err, AclError::UnrecognizedByte { offset: 2, .. }));
    }

    #[test]
    fn test_grantor_is_taken_verbatim() {
        let item: Schema = parse_acl_item("foo=U/C*=%/x").unwrap();
        assert_eq!(item.granted_by, "C*=%/x");
        assert!(item.usage);
        assert!(!item.create);
    }

    #[test]
    fn test_trailing_slash_leaves_grantor_empty() {
        let item: Schema = parse_acl_item("foo=C/").unwrap();
        assert_eq!(item.granted_by, "");
        assert_eq!(render_acl_item(&item), "foo=C");
    }

    #[test]
    fn test_star_at_end_of_string() {
        let item: Schema = parse_acl_item("=C*").unwrap();
        assert!(item.create);
        assert!(item.create_grant);
    }

    #[test]
    fn test_repeated_letters_are_idempotent() {
        let item: Schema = parse_acl_item("foo=UU*U").unwrap();
        assert!(item.usage);
        assert!(item.usage_grant);
        assert_eq!(render_acl_item(&item), "foo=U*");
    }
}
