//! Typed aclitem records, one per PostgreSQL object kind.
//!
//! Canonical string form: `grantee=privileges[/grantor]`, where
//! - an empty grantee is `PUBLIC`,
//! - each privilege is one letter, optionally followed by `*` for WITH GRANT OPTION,
//! - letters are printed in `aclitemout` order regardless of the order they were parsed in.

mod any_item;
mod database;
mod function;
mod language;
mod object_kind;
mod privilege;
mod schema;
mod sequence;
mod table;

pub use any_item::AnyAclItem;
pub use database::Database;
pub use function::Function;
pub use language::Language;
pub use object_kind::ObjectKind;
pub use privilege::Privilege;
pub use schema::Schema;
pub use sequence::Sequence;
pub use table::Table;
