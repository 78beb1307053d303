//! Package name parsing and validation

use std::fmt;

use crate::error::{NameError, Result, package};

use super::kind::PackageKind;
use super::staging::{BACKUP_SUFFIX, STAGING_SUFFIX};

/// A validated `bundle[/component]` name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageName {
    bundle: String,
    component: Option<String>,
}

impl PackageName {
    /// Validate `name` for `kind`.
    ///
    /// Runs before any I/O; every rejection names the specific reason.
    pub fn parse(name: &str, kind: &PackageKind) -> Result<Self> {
        let invalid = |reason| package::invalid_name(kind.kind, name, reason);

        if name.trim().is_empty() {
            return Err(invalid(NameError::Empty));
        }

        let segments: Vec<&str> = name.split('/').collect();
        if segments.len() > 2 {
            return Err(invalid(NameError::TooManySegments));
        }

        for segment in &segments {
            if segment.is_empty() {
                return Err(invalid(NameError::EmptySegment));
            }
            if !segment.chars().all(is_name_char) {
                return Err(invalid(NameError::IllegalCharacters));
            }
            if *segment == "." || *segment == ".." {
                return Err(invalid(NameError::Reserved));
            }
        }

        // The bundle's staging and backup directories sit next to it
        let bundle = segments[0];
        if bundle.ends_with(STAGING_SUFFIX) || bundle.ends_with(BACKUP_SUFFIX) {
            return Err(invalid(NameError::Reserved));
        }

        Ok(Self {
            bundle: bundle.to_string(),
            component: segments.get(1).map(|s| (*s).to_string()),
        })
    }

    /// Validate a name that must refer to a whole bundle
    pub fn parse_bundle(name: &str, kind: &PackageKind) -> Result<Self> {
        let parsed = Self::parse(name, kind)?;
        if parsed.component.is_some() {
            return Err(package::invalid_name(
                kind.kind,
                name,
                NameError::ComponentNotAllowed,
            ));
        }
        Ok(parsed)
    }

    pub fn bundle(&self) -> &str {
        &self.bundle
    }

    pub fn component(&self) -> Option<&str> {
        self.component.as_deref()
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.component {
            Some(component) => write!(f, "{}/{}", self.bundle, component),
            None => f.write_str(&self.bundle),
        }
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompanionError;

    fn reason_of(name: &str) -> NameError {
        match PackageName::parse(name, &PackageKind::WORKFLOW) {
            Err(CompanionError::InvalidName { reason, .. }) => reason,
            other => panic!("expected InvalidName for {name:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_accepts_simple_names() {
        for name in ["base", "demo-pack", "v1.2", "snake_case", "A9", "-x-"] {
            let parsed = PackageName::parse(name, &PackageKind::WORKFLOW).unwrap();
            assert_eq!(parsed.bundle(), name);
            assert_eq!(parsed.component(), None);
        }
    }

    #[test]
    fn test_accepts_bundle_and_component() {
        let parsed = PackageName::parse("base/review.md", &PackageKind::PROMPT).unwrap();
        assert_eq!(parsed.bundle(), "base");
        assert_eq!(parsed.component(), Some("review.md"));
        assert_eq!(parsed.to_string(), "base/review.md");
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(reason_of(""), NameError::Empty);
        assert_eq!(reason_of("   "), NameError::Empty);
    }

    #[test]
    fn test_rejects_too_many_segments() {
        assert_eq!(reason_of("a/b/c"), NameError::TooManySegments);
    }

    #[test]
    fn test_rejects_empty_segment() {
        assert_eq!(reason_of("a/"), NameError::EmptySegment);
        assert_eq!(reason_of("/b"), NameError::EmptySegment);
    }

    #[test]
    fn test_rejects_illegal_characters() {
        for name in ["has space", "semi;colon", "ümlaut", "a/b c", "x\\y"] {
            assert_eq!(reason_of(name), NameError::IllegalCharacters, "{name}");
        }
    }

    #[test]
    fn test_rejects_dot_segments() {
        assert_eq!(reason_of(".."), NameError::Reserved);
        assert_eq!(reason_of("base/."), NameError::Reserved);
    }

    #[test]
    fn test_rejects_staging_and_backup_bundle_names() {
        assert_eq!(reason_of("demo.tmp"), NameError::Reserved);
        assert_eq!(reason_of("demo.old"), NameError::Reserved);
        assert_eq!(reason_of("demo.old/review"), NameError::Reserved);
        assert!(PackageName::parse("demo/notes.tmp", &PackageKind::PROMPT).is_ok());
        assert!(PackageName::parse("demo.tmpl", &PackageKind::WORKFLOW).is_ok());
    }

    #[test]
    fn test_parse_bundle_rejects_component() {
        let err = PackageName::parse_bundle("base/review", &PackageKind::RULE).unwrap_err();
        assert!(matches!(
            err,
            CompanionError::InvalidName {
                reason: NameError::ComponentNotAllowed,
                ..
            }
        ));
    }

    #[test]
    fn test_error_names_kind_and_input() {
        let err = PackageName::parse("bad name", &PackageKind::RULE).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("rule"));
        assert!(message.contains("bad name"));
    }
}
