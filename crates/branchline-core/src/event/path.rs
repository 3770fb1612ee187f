use std::fmt;
use std::str::FromStr;

use crate::event::error::EventSystemError;

/// Separator between the segments of a hierarchical event name
pub const SEGMENT_DELIMITER: char = '.';

/// Splits `raw` into its segments, rejecting empty input and empty segments.
fn split_segments(raw: &str) -> Result<Vec<String>, &'static str> {
    if raw.is_empty() {
        return Err("event path is empty");
    }
    let segments: Vec<String> = raw.split(SEGMENT_DELIMITER).map(str::to_string).collect();
    if segments.iter().any(String::is_empty) {
        return Err("event path contains an empty segment");
    }
    Ok(segments)
}

/// A dot-separated event path such as `user.onStart`, held as its ordered
/// segments. Matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventPath {
    segments: Vec<String>,
}

impl EventPath {
    /// Parse a full dot-separated path.
    pub fn parse(raw: &str) -> Result<Self, EventSystemError> {
        split_segments(raw)
            .map(|segments| Self { segments })
            .map_err(|reason| EventSystemError::InvalidEventPath {
                path: raw.to_string(),
                reason: reason.to_string(),
            })
    }

    /// Build a path from pre-split segments. Segments must be non-empty and
    /// must not themselves contain the delimiter.
    pub fn from_segments<I, S>(segments: I) -> Result<Self, EventSystemError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        let joined = segments.join(".");
        let invalid = |reason: &str| EventSystemError::InvalidEventPath {
            path: joined.clone(),
            reason: reason.to_string(),
        };
        if segments.is_empty() {
            return Err(invalid("event path has no segments"));
        }
        if segments.iter().any(String::is_empty) {
            return Err(invalid("event path contains an empty segment"));
        }
        if segments.iter().any(|s| s.contains(SEGMENT_DELIMITER)) {
            return Err(invalid("segment contains the delimiter"));
        }
        Ok(Self { segments })
    }

    /// Single-segment path from a segment already known to be valid.
    pub(crate) fn trusted_segment(segment: &str) -> Self {
        debug_assert!(!segment.is_empty() && !segment.contains(SEGMENT_DELIMITER));
        Self {
            segments: vec![segment.to_string()],
        }
    }

    /// The ordered segments of this path
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments (always at least one)
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Append the segments of `name` to this path.
    pub fn child(&self, name: &EventName) -> EventPath {
        let mut segments = self.segments.clone();
        segments.extend(name.segments());
        EventPath { segments }
    }
}

impl fmt::Display for EventPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl FromStr for EventPath {
    type Err = EventSystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventPath::parse(s)
    }
}

/// A short, host-defined event name such as `onStart`, declared by plugins
/// and prefixed with the engine namespace on registration.
///
/// The set of names is open; `LifecycleEvent` covers the editor's built-ins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventName(String);

impl EventName {
    /// Validate and wrap an event name.
    pub fn new(name: impl Into<String>) -> Result<Self, EventSystemError> {
        let name = name.into();
        match split_segments(&name) {
            Ok(_) => Ok(EventName(name)),
            Err(reason) => Err(EventSystemError::InvalidEventName {
                name,
                reason: reason.to_string(),
            }),
        }
    }

    /// Wrap a name already known to be valid (built-in lifecycle names).
    pub(crate) fn trusted(name: &str) -> Self {
        debug_assert!(split_segments(name).is_ok());
        EventName(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn segments(&self) -> impl Iterator<Item = String> + '_ {
        self.0.split(SEGMENT_DELIMITER).map(str::to_string)
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EventName {
    type Err = EventSystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventName::new(s)
    }
}

impl TryFrom<&str> for EventName {
    type Error = EventSystemError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        EventName::new(value)
    }
}

impl AsRef<str> for EventName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
