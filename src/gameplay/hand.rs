use serde::Deserialize;
use serde::Serialize;

/// A move name, such as `ROCK` or `SPOCK`.
///
/// Hands are opaque: the only thing that gives a name meaning is its
/// position in the accepted sequence a [`crate::gameplay::Rules`] was
/// built from. Names compare exactly, without case folding.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand(String);

impl Hand {
    /// The placeholder hand for input that could not be read.
    /// Never part of a validated rule table, so it always evaluates as unknown.
    pub fn unknown() -> Self {
        Self::from(crate::UNKNOWN)
    }
    pub fn is_unknown(&self) -> bool {
        self.0 == crate::UNKNOWN
    }
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for Hand {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for Hand {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_case_sensitive() {
        assert_ne!(Hand::from("ROCK"), Hand::from("rock"));
    }

    #[test]
    fn unknown_sentinel() {
        assert!(Hand::unknown().is_unknown());
        assert!(!Hand::from("ROCK").is_unknown());
    }

    #[test]
    fn serializes_as_bare_string() {
        let json = serde_json::to_string(&Hand::from("LIZARD")).unwrap();
        assert_eq!(json, "\"LIZARD\"");
    }
}
