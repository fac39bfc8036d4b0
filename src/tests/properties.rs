//! Laws that must hold for every object kind.

use std::fmt::Debug;

use crate::{
    AclError, AclItem, Database, Function, Language, Privilege, Schema, Sequence, Table,
};

/// Every canonical aclitem for `T` with grantee in `{PUBLIC, foo}` and grantor
/// in `{none, bar}`.
fn canonical_items<T: AclItem>() -> Vec<String> {
    let mut bodies = vec![String::new()];
    for privilege in T::PRIVILEGES {
        let letter = char::from(privilege.letter());
        bodies = bodies
            .into_iter()
            .flat_map(|body| {
                [
                    body.clone(),
                    format!("{body}{letter}"),
                    format!("{body}{letter}*"),
                ]
            })
            .collect();
    }

    let mut items = Vec::new();
    for role in ["", "foo"] {
        for body in &bodies {
            for grantor in ["", "bar"] {
                let mut item = format!("{role}={body}");
                if !grantor.is_empty() {
                    item.push('/');
                    item.push_str(grantor);
                }
                items.push(item);
            }
        }
    }
    items
}

fn parse_all<T: AclItem + Debug>(inputs: &[String]) -> Vec<T> {
    inputs
        .iter()
        .map(|input| T::parse(input).unwrap_or_else(|err| panic!("{input:?}: {err}")))
        .collect()
}

fn assert_round_trip<T: AclItem + Debug>() {
    for input in canonical_items::<T>() {
        let item = T::parse(&input).unwrap_or_else(|err| panic!("{input:?}: {err}"));
        assert_eq!(item.render(), input, "{} round trip", T::KIND);
    }
}

fn assert_merge_laws<T: AclItem + Debug + PartialEq>(step: usize) {
    let inputs: Vec<String> = canonical_items::<T>().into_iter().step_by(step).collect();
    let items = parse_all::<T>(&inputs);

    for base in &items {
        assert_eq!(&base.merge(base), base, "{} merge is not idempotent", T::KIND);

        for incoming in &items {
            let merged = base.merge(incoming);

            let expected_role = if incoming.role().is_empty() {
                base.role()
            } else {
                incoming.role()
            };
            assert_eq!(merged.role(), expected_role);

            let expected_grantor = if incoming.granted_by().is_empty() {
                base.granted_by()
            } else {
                incoming.granted_by()
            };
            assert_eq!(merged.granted_by(), expected_grantor);

            for &privilege in T::PRIVILEGES {
                let (base_flag, base_grant) = base.flags(privilege).unwrap();
                let (incoming_flag, incoming_grant) = incoming.flags(privilege).unwrap();
                assert_eq!(
                    merged.flags(privilege),
                    Some((base_flag || incoming_flag, base_grant || incoming_grant)),
                    "{base:?} merged with {incoming:?}"
                );
            }
        }
    }
}

#[test]
fn test_round_trip_language() {
    assert_round_trip::<Language>();
}

#[test]
fn test_round_trip_schema() {
    assert_round_trip::<Schema>();
}

#[test]
fn test_round_trip_database() {
    assert_round_trip::<Database>();
}

#[test]
fn test_round_trip_table() {
    assert_round_trip::<Table>();
}

#[test]
fn test_round_trip_sequence() {
    assert_round_trip::<Sequence>();
}

#[test]
fn test_round_trip_function() {
    assert_round_trip::<Function>();
}

#[test]
fn test_merge_laws_language() {
    assert_merge_laws::<Language>(1);
}

#[test]
fn test_merge_laws_schema() {
    assert_merge_laws::<Schema>(1);
}

#[test]
fn test_merge_laws_database() {
    assert_merge_laws::<Database>(1);
}

#[test]
fn test_merge_laws_table() {
    assert_merge_laws::<Table>(211);
}

#[test]
fn test_merge_laws_sequence() {
    assert_merge_laws::<Sequence>(1);
}

#[test]
fn test_merge_laws_function() {
    assert_merge_laws::<Function>(1);
}

#[test]
fn test_public_grantee() {
    let language = Language::parse("=U*").unwrap();
    assert_eq!(language.role, "");
    assert!(language.usage);
    assert!(language.usage_grant);
}

#[test]
fn test_bare_grant_option_is_rejected() {
    assert!(matches!(
        Language::parse("foo=*"),
        Err(AclError::UnrecognizedByte { byte: b'*', offset: 4, .. })
    ));
    assert!(matches!(
        Schema::parse("foo=*"),
        Err(AclError::UnrecognizedByte { byte: b'*', offset: 4, .. })
    ));
}

#[test]
fn test_missing_separator() {
    assert!(matches!(
        Schema::parse("bar*"),
        Err(AclError::MissingSeparator { .. })
    ));
    assert!(matches!(
        Language::parse("%"),
        Err(AclError::MissingSeparator { .. })
    ));
}

#[test]
fn test_invalid_byte_after_separator() {
    assert!(matches!(
        Language::parse("foo=%"),
        Err(AclError::UnrecognizedByte { byte: b'%', .. })
    ));
}

#[test]
fn test_grantor_stops_scan() {
    let language = Language::parse("foo=U*/bar").unwrap();
    assert_eq!(language.granted_by, "bar");

    let schema = Schema::parse("foo=U/UC").unwrap();
    assert_eq!(schema.granted_by, "UC");
    assert!(!schema.has(Privilege::Create));
}

#[test]
fn test_records_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Language>();
    assert_send_sync::<Schema>();
    assert_send_sync::<Database>();
    assert_send_sync::<Table>();
    assert_send_sync::<Sequence>();
    assert_send_sync::<Function>();
    assert_send_sync::<AclError>();
}
