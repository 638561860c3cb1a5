//! Dotted property paths
//!
//! A path addresses a member of a target, possibly nested:
//! `material.color` descends through `material` and assigns `color`.
//! Segments are plain member names; no indexing or escaping syntax.

use std::fmt::Display;

use super::binder::BindingError;

/// A parsed dot-separated property path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyPath {
    raw: String,
    segments: Vec<String>,
}

impl PropertyPath {
    /// Parse a dotted path.
    ///
    /// # Errors
    ///
    /// [`BindingError::InvalidPath`] when the path is empty or contains
    /// an empty segment (`"a..b"`, `".a"`, `"a."`).
    pub fn parse(raw: &str) -> Result<Self, BindingError> {
        let segments: Vec<String> = raw.split('.').map(str::to_string).collect();
        if raw.is_empty() || segments.iter().any(String::is_empty) {
            return Err(BindingError::InvalidPath {
                path: raw.to_string(),
            });
        }
        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// All segments, left to right.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Segments descended through before the terminal one.
    #[must_use]
    pub fn intermediates(&self) -> &[String] {
        &self.segments[..self.segments.len() - 1]
    }

    /// The member the value is assigned to.
    #[must_use]
    pub fn terminal(&self) -> &str {
        // parse() guarantees at least one segment
        self.segments.last().map_or("", String::as_str)
    }

    /// The original dotted form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl Display for PropertyPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl TryFrom<&str> for PropertyPath {
    type Error = BindingError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn single_segment_has_no_intermediates() {
        let path = PropertyPath::parse("mass").unwrap();
        assert!(path.intermediates().is_empty());
        assert_eq!(path.terminal(), "mass");
    }

    #[test]
    fn dotted_path_splits_in_order() {
        let path = PropertyPath::parse("material.color").unwrap();
        assert_eq!(path.intermediates(), ["material".to_string()]);
        assert_eq!(path.terminal(), "color");
        assert_eq!(path.to_string(), "material.color");
    }

    #[test]
    fn empty_and_degenerate_paths_are_rejected() {
        for bad in ["", ".", "a..b", ".a", "a."] {
            assert!(PropertyPath::parse(bad).is_err(), "`{bad}` must not parse");
        }
    }
}
