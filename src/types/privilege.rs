//! Single-letter privilege codes used in aclitem strings.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use utoipa::ToSchema;

/// A PostgreSQL privilege, declared in `aclitemout` bit order.
///
/// The declaration order is the order in which PostgreSQL prints the letters,
/// so `Ord` on this type sorts privileges the way an aclitem renders them.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    ToSchema,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Privilege {
    /// `a`
    Insert,
    /// `r`
    Select,
    /// `w`
    Update,
    /// `d`
    Delete,
    /// `D`
    Truncate,
    /// `x`
    References,
    /// `t`
    Trigger,
    /// `X`
    Execute,
    /// `U`
    Usage,
    /// `C`
    Create,
    /// `T`
    Temporary,
    /// `c`
    Connect,
    /// `m`
    Maintain,
}

impl Privilege {
    /// The letter PostgreSQL uses for this privilege.
    pub const fn letter(self) -> u8 {
        match self {
            Self::Insert => b'a',
            Self::Select => b'r',
            Self::Update => b'w',
            Self::Delete => b'd',
            Self::Truncate => b'D',
            Self::References => b'x',
            Self::Trigger => b't',
            Self::Execute => b'X',
            Self::Usage => b'U',
            Self::Create => b'C',
            Self::Temporary => b'T',
            Self::Connect => b'c',
            Self::Maintain => b'm',
        }
    }

    /// Reverse of [`Privilege::letter`]. Letters are case sensitive.
    pub fn from_letter(letter: u8) -> Option<Self> {
        use strum::IntoEnumIterator;
        Self::iter().find(|p| p.letter() == letter)
    }
}
