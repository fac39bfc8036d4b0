use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::ObjectKind;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum AclError {
    #[error("invalid ACL item format, missing '=' separator: {input:?}")]
    MissingSeparator { input: String },

    #[error("invalid byte {byte:#04x} in {kind} ACL at {offset}: {input:?}")]
    UnrecognizedByte {
        kind: ObjectKind,
        byte: u8,
        offset: usize,
        input: String,
    },

    #[error("cannot merge {found} ACL item into {expected} ACL item")]
    KindMismatch {
        expected: ObjectKind,
        found: ObjectKind,
    },

    #[error("Unknown object kind: {0}")]
    UnknownObjectKind(String),
}
