// src/lib.rs
pub use error::AclError;
pub use traits::AclItem;
pub use types::{
    AnyAclItem, Database, Function, Language, ObjectKind, Privilege, Schema, Sequence, Table,
};

mod error;
mod scanner;
mod traits;
mod types;

#[cfg(test)]
mod tests;
