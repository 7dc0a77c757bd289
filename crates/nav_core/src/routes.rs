//! Static route table and path classification.
//!
//! Patterns use explicit named parameters (`/scsit/:course/semesters`),
//! matched segment for segment. A parameter consumes exactly one non-empty
//! segment; everything else must match literally. Query strings and
//! fragments are ignored.

use shared::domain::paths;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessClass {
    /// Reachable by anyone.
    Public,
    /// Login/signup family: a fully verified session is bounced home.
    AuthOnly,
    /// Requires an authenticated and verified session.
    Protected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(&'static str),
    Param(&'static str),
}

#[derive(Debug, Clone)]
pub struct RouteEntry {
    pattern: &'static str,
    segments: Vec<Segment>,
    access: AccessClass,
}

impl RouteEntry {
    pub fn new(pattern: &'static str, access: AccessClass) -> Self {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| match s.strip_prefix(':') {
                Some(name) => Segment::Param(name),
                None => Segment::Literal(s),
            })
            .collect();
        Self {
            pattern,
            segments,
            access,
        }
    }

    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    pub fn access(&self) -> AccessClass {
        self.access
    }

    fn matches(&self, path: &str) -> bool {
        let parts: Vec<&str> = normalize(path).split('/').filter(|s| !s.is_empty()).collect();
        if parts.len() != self.segments.len() {
            return false;
        }
        self.segments.iter().zip(parts).all(|(seg, part)| match seg {
            Segment::Literal(lit) => *lit == part,
            Segment::Param(_) => true,
        })
    }
}

/// Drops query string and fragment; matching only ever sees the path.
fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

/// Every page the shell declares, in declaration order. Exactly one entry
/// matches any reachable path; anything else is the caller's catch-all.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new(entries: Vec<RouteEntry>) -> Self {
        Self { entries }
    }

    /// The shell's fixed table.
    pub fn shell() -> Self {
        Self::new(vec![
            RouteEntry::new(paths::HOME, AccessClass::Protected),
            RouteEntry::new(paths::SIGNUP, AccessClass::AuthOnly),
            RouteEntry::new(paths::LOGIN, AccessClass::AuthOnly),
            RouteEntry::new(paths::FORGOT_PASSWORD, AccessClass::AuthOnly),
            RouteEntry::new(paths::RESET_PASSWORD, AccessClass::AuthOnly),
            RouteEntry::new(paths::UPLOAD, AccessClass::Protected),
            RouteEntry::new(paths::COURSES, AccessClass::Protected),
            RouteEntry::new(paths::COURSE_SEMESTERS, AccessClass::Protected),
            RouteEntry::new(paths::SEMESTER_FILES, AccessClass::Protected),
            RouteEntry::new(paths::VERIFY_EMAIL, AccessClass::Public),
        ])
    }

    /// First entry matching `path`, or `None` for the catch-all case.
    pub fn classify(&self, path: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.matches(path))
    }

    /// Whether `path` belongs to the login/signup family. Gestures are
    /// suppressed there.
    pub fn is_auth_only(&self, path: &str) -> bool {
        self.classify(path)
            .is_some_and(|entry| entry.access == AccessClass::AuthOnly)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::shell()
    }
}

#[cfg(test)]
#[path = "tests/routes_tests.rs"]
mod tests;
