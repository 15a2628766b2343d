use std::fmt;

/// A numeric component position within a version, used to point error
/// messages at the token that failed to parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Component {
    /// The first numeric component.
    Major,
    /// The second numeric component.
    Minor,
    /// The third numeric component.
    Micro,
}

impl Component {
    /// Returns the lowercase name of the component.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Micro => "micro",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned when parsing a version string.
///
/// Every variant carries the offending input or token, so the rendered
/// message alone is a usable diagnostic.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input ends in a delimiter where a component was expected.
    #[error("invalid version `{input}`: must not end in `{delimiter}`")]
    TrailingDelimiter {
        /// The input, or input tail, being tokenized.
        input: String,
        /// The offending trailing delimiter.
        delimiter: char,
    },
    /// A required component is absent, or a doubled delimiter (`..`, `._`)
    /// collapsed a component to nothing.
    #[error("invalid version `{input}`: missing component")]
    MissingComponent {
        /// The input being tokenized, empty if no input was given.
        input: String,
    },
    /// A major, minor or micro token is neither all digits nor the wildcard.
    #[error("invalid {component} version `{value}`")]
    InvalidComponent {
        /// The numeric component the token was extracted for.
        component: Component,
        /// The offending token.
        value: String,
    },
    /// The qualifier contains characters outside `[-a-zA-Z0-9]` and is not
    /// the wildcard.
    #[error("invalid qualifier `{value}`")]
    InvalidQualifier {
        /// The offending qualifier.
        value: String,
    },
    /// A wildcard appeared while the caller forbids wildcards.
    #[error("invalid version `{input}`: wildcards are not allowed in this context")]
    WildcardNotAllowed {
        /// The input being validated.
        input: String,
    },
    /// A component is populated after a wildcard component.
    #[error("invalid version `{input}`: no characters are allowed after a wildcard")]
    TrailingAfterWildcard {
        /// The input being validated.
        input: String,
    },
}
