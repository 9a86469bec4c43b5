use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    #[error("employee key is empty")]
    Empty,

    #[error("invalid source tag '{0}': expected one ASCII letter or digit")]
    InvalidTag(String),

    #[error("invalid local id '{0}': expected a non-negative integer")]
    InvalidLocalId(String),
}

/// One-character prefix naming the office a record came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct SourceTag(char);

impl SourceTag {
    pub fn new(tag: char) -> Result<Self, KeyParseError> {
        if tag.is_ascii_alphanumeric() {
            Ok(Self(tag))
        } else {
            Err(KeyParseError::InvalidTag(tag.to_string()))
        }
    }

    #[inline]
    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<String> for SourceTag {
    type Error = KeyParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => SourceTag::new(c),
            _ => Err(KeyParseError::InvalidTag(value)),
        }
    }
}

impl fmt::Display for SourceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for SourceTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Company-wide employee identifier: source tag followed by the office-local id.
///
/// Ordering is by tag, then numerically by local id, so `A2 < A10 < B1`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct EmployeeKey {
    tag: SourceTag,
    local_id: u64,
}

impl EmployeeKey {
    #[inline]
    pub fn new(tag: SourceTag, local_id: u64) -> Self {
        Self { tag, local_id }
    }

    #[inline]
    pub fn tag(&self) -> SourceTag {
        self.tag
    }

    #[inline]
    pub fn local_id(&self) -> u64 {
        self.local_id
    }
}

impl fmt::Display for EmployeeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.tag, self.local_id)
    }
}

impl FromStr for EmployeeKey {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let tag = chars.next().ok_or(KeyParseError::Empty)?;
        let tag = SourceTag::new(tag)?;
        let rest = chars.as_str();
        if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(KeyParseError::InvalidLocalId(rest.to_string()));
        }
        let local_id = rest
            .parse::<u64>()
            .map_err(|_| KeyParseError::InvalidLocalId(rest.to_string()))?;
        Ok(Self::new(tag, local_id))
    }
}

impl TryFrom<String> for EmployeeKey {
    type Error = KeyParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for EmployeeKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
