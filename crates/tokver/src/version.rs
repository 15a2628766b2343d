use crate::{Component, ParseError, collation};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{cmp::Ordering, fmt, str::FromStr};

/// The wildcard component.
///
/// Permitted as the last populated component of a version when the caller
/// allows it; stands for "any value" in range-matching contexts.
pub const WILDCARD: &str = "+";

/// A version identifier of the form `MAJOR.MINOR.MICRO_QUALIFIER`.
///
/// Major, minor and micro are digit strings; the optional qualifier is a tag
/// drawn from `[-a-zA-Z0-9]`. Any component may instead be the terminal `+`
/// wildcard, after which nothing else may follow:
///
/// ```
/// use tokver::TokenizedVersion;
///
/// let version = TokenizedVersion::parse(Some("1.8.0_152"), true).unwrap();
/// assert_eq!(version.major(), Some("1"));
/// assert_eq!(version.qualifier(), Some("152"));
///
/// let range = TokenizedVersion::parse(Some("1.8.+"), true).unwrap();
/// assert!(range.is_wildcard());
/// ```
///
/// Values are immutable once constructed. `Display` returns the exact string
/// the version was parsed from, not a reconstruction from components.
#[derive(Clone, Debug)]
pub struct TokenizedVersion {
    /// The string this version was parsed from, returned verbatim by
    /// `Display`.
    raw: String,
    major: Option<String>,
    minor: Option<String>,
    micro: Option<String>,
    qualifier: Option<String>,
}

impl TokenizedVersion {
    /// Parses a version string.
    ///
    /// An absent `version` stands in for the wildcard when wildcards are
    /// allowed; with wildcards disallowed it fails validation like any other
    /// input with no components.
    pub fn parse(version: Option<&str>, allow_wildcards: bool) -> Result<Self, ParseError> {
        let raw = match version {
            Some(version) => version,
            None if allow_wildcards => {
                trace!("no version given, substituting the wildcard");
                WILDCARD
            }
            None => "",
        };

        let (major, tail) = numeric_and_tail(Some(raw), Component::Major)?;
        let (minor, tail) = numeric_and_tail(tail, Component::Minor)?;
        let (micro, qualifier) = micro_and_qualifier(tail)?;

        let this = Self {
            raw: raw.to_string(),
            major: major.map(str::to_string),
            minor: minor.map(str::to_string),
            micro: micro.map(str::to_string),
            qualifier: qualifier.map(str::to_string),
        };
        this.validate(allow_wildcards)?;
        Ok(this)
    }

    /// Returns the version consisting of a single wildcard, which matches
    /// any version.
    pub fn wildcard() -> Self {
        Self {
            raw: WILDCARD.to_string(),
            major: Some(WILDCARD.to_string()),
            minor: None,
            micro: None,
            qualifier: None,
        }
    }

    /// Returns the major component, if populated.
    pub fn major(&self) -> Option<&str> {
        self.major.as_deref()
    }

    /// Returns the minor component, if populated.
    pub fn minor(&self) -> Option<&str> {
        self.minor.as_deref()
    }

    /// Returns the micro component, if populated.
    pub fn micro(&self) -> Option<&str> {
        self.micro.as_deref()
    }

    /// Returns the qualifier, if one was given.
    pub fn qualifier(&self) -> Option<&str> {
        self.qualifier.as_deref()
    }

    /// Returns `true` if any component is the wildcard marker.
    pub fn is_wildcard(&self) -> bool {
        self.components().contains(&Some(WILDCARD))
    }

    /// The four component slots in comparison order.
    fn components(&self) -> [Option<&str>; 4] {
        [
            self.major.as_deref(),
            self.minor.as_deref(),
            self.micro.as_deref(),
            self.qualifier.as_deref(),
        ]
    }

    /// Checks wildcard placement and component count over the four slots in
    /// fixed order.
    fn validate(&self, allow_wildcards: bool) -> Result<(), ParseError> {
        let mut wildcard_seen = false;
        for component in self.components() {
            if component == Some(WILDCARD) && !allow_wildcards {
                return Err(ParseError::WildcardNotAllowed { input: self.raw.clone() });
            }
            if wildcard_seen && component.is_some() {
                return Err(ParseError::TrailingAfterWildcard { input: self.raw.clone() });
            }
            if component == Some(WILDCARD) {
                wildcard_seen = true;
            }
        }
        // Absent a wildcard, major, minor and micro are all mandatory; the
        // qualifier stays optional.
        if !wildcard_seen && self.components().iter().flatten().count() < 3 {
            return Err(ParseError::MissingComponent { input: self.raw.clone() });
        }
        Ok(())
    }
}

impl fmt::Display for TokenizedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for TokenizedVersion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(Some(s), true)
    }
}

/// Total order: major, minor and micro compare numerically, ties broken by
/// the qualifier collating sequence with an absent qualifier treated as
/// empty.
///
/// Absent and wildcard components coerce to 0 for the numeric steps, so a
/// wildcard major compares equal to an explicit major of `0`. Range matching
/// layered on top of this type is responsible for treating wildcards
/// specially.
impl Ord for TokenizedVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        numeric_value(self.major())
            .cmp(&numeric_value(other.major()))
            .then_with(|| numeric_value(self.minor()).cmp(&numeric_value(other.minor())))
            .then_with(|| numeric_value(self.micro()).cmp(&numeric_value(other.micro())))
            .then_with(|| {
                collation::compare(
                    self.qualifier().unwrap_or_default(),
                    other.qualifier().unwrap_or_default(),
                )
            })
    }
}

impl PartialOrd for TokenizedVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Equality follows the comparator, not the raw string: `01.2.3` and `1.2.3`
/// are equal. For the same reason there is no `Hash` implementation.
impl PartialEq for TokenizedVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TokenizedVersion {}

impl Serialize for TokenizedVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for TokenizedVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Numeric value of a component for ordering: absent and non-numeric
/// (wildcard) components coerce to 0.
fn numeric_value(component: Option<&str>) -> u64 {
    component.and_then(|c| c.parse().ok()).unwrap_or(0)
}

/// Splits off a major or minor token at the first `.`, returning the token
/// and the unparsed tail. An empty or absent input short-circuits to
/// `(None, None)`.
fn numeric_and_tail(
    s: Option<&str>,
    component: Component,
) -> Result<(Option<&str>, Option<&str>), ParseError> {
    let Some(s) = s.filter(|s| !s.is_empty()) else { return Ok((None, None)) };

    if s.ends_with('.') {
        return Err(ParseError::TrailingDelimiter { input: s.to_string(), delimiter: '.' });
    }
    if doubled_delimiter(s) {
        return Err(ParseError::MissingComponent { input: s.to_string() });
    }

    let (token, tail) = match s.split_once('.') {
        Some((token, tail)) => (token, Some(tail)),
        None => (s, None),
    };
    if !numeric_or_wildcard(token) {
        return Err(ParseError::InvalidComponent { component, value: token.to_string() });
    }

    Ok((Some(token), tail))
}

/// Splits the remaining tail into the micro token and the qualifier at the
/// first `_`. An empty or absent tail short-circuits to `(None, None)`.
fn micro_and_qualifier(s: Option<&str>) -> Result<(Option<&str>, Option<&str>), ParseError> {
    let Some(s) = s.filter(|s| !s.is_empty()) else { return Ok((None, None)) };

    if s.ends_with('_') {
        return Err(ParseError::TrailingDelimiter { input: s.to_string(), delimiter: '_' });
    }

    let (micro, qualifier) = match s.split_once('_') {
        Some((micro, qualifier)) => (micro, Some(qualifier)),
        None => (s, None),
    };
    if !numeric_or_wildcard(micro) {
        return Err(ParseError::InvalidComponent {
            component: Component::Micro,
            value: micro.to_string(),
        });
    }
    if let Some(qualifier) = qualifier
        && !valid_qualifier(qualifier)
    {
        return Err(ParseError::InvalidQualifier { value: qualifier.to_string() });
    }

    Ok((Some(micro), qualifier))
}

/// `.` immediately followed by `.` or `_` means a component collapsed to
/// nothing.
fn doubled_delimiter(s: &str) -> bool {
    s.as_bytes().windows(2).any(|pair| pair[0] == b'.' && matches!(pair[1], b'.' | b'_'))
}

fn numeric_or_wildcard(token: &str) -> bool {
    token == WILDCARD || (!token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()))
}

fn valid_qualifier(qualifier: &str) -> bool {
    qualifier == WILDCARD || qualifier.bytes().all(|b| b == b'-' || b.is_ascii_alphanumeric())
}
