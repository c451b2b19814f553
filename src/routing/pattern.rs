//! Route template matching.
//!
//! # Responsibilities
//! - Compile an action pattern (`/game/{id}/move/{n}`) into an anchored matcher
//! - Extract the placeholder values from a fragment path, left to right
//! - Resolve a pattern back into a concrete URL from captured values
//!
//! # Design Decisions
//! - Literal text is escaped, so `.` or `+` in a pattern only match themselves
//! - Each placeholder becomes a lazy `(.+?)` group; the whole path must match
//! - Patterns are absolute (`/…`); a relative one could never match and is
//!   rejected at compile time
//! - Resolution rebuilds the URL from parsed segments instead of string
//!   replacement, so a captured value is never mistaken for a placeholder

use std::fmt;
use std::ops::Deref;

use regex::Regex;

use crate::error::{ArityError, PatternError, PatternResult};

/// The path a route pattern is matched against: the fragment with a leading `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FragmentPath(String);

impl FragmentPath {
    /// Build the match path for a fragment (`game/42` → `/game/42`).
    /// A leading `#` is tolerated and dropped.
    pub fn from_fragment(fragment: &str) -> Self {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        Self(format!("/{}", fragment))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FragmentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Values captured by a successful match, one per placeholder, in textual order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedValues(Vec<String>);

impl CapturedValues {
    pub fn new(values: Vec<String>) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl Deref for CapturedValues {
    type Target = [String];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// An action pattern compiled for matching and resolution.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    source: String,
    segments: Vec<Segment>,
    regex: Regex,
}

impl CompiledPattern {
    /// Compile an action pattern.
    pub fn compile(action_pattern: &str) -> PatternResult<Self> {
        let segments = parse_segments(action_pattern)?;

        let mut expr = String::with_capacity(action_pattern.len() + 8);
        expr.push('^');
        for segment in &segments {
            match segment {
                Segment::Literal(text) => expr.push_str(&regex::escape(text)),
                Segment::Placeholder(_) => expr.push_str("(.+?)"),
            }
        }
        expr.push('$');

        let regex = Regex::new(&expr).map_err(|e| PatternError::Compile {
            pattern: action_pattern.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            source: action_pattern.to_string(),
            segments,
            regex,
        })
    }

    /// The pattern text this matcher was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Placeholder names in textual order.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    pub fn placeholder_count(&self) -> usize {
        self.placeholders().count()
    }

    /// Match the whole fragment path, returning every captured value.
    pub fn match_path(&self, path: &FragmentPath) -> Option<CapturedValues> {
        let caps = self.regex.captures(path.as_str())?;
        let values = caps
            .iter()
            .skip(1)
            .map(|m| m.map(|m| m.as_str().to_string()).unwrap_or_default())
            .collect();
        Some(CapturedValues(values))
    }

    /// Substitute `values` for the placeholders, left to right.
    ///
    /// A pattern without placeholders resolves to itself whatever the values.
    pub fn resolve<S: AsRef<str>>(&self, values: &[S]) -> Result<String, ArityError> {
        let expected = self.placeholder_count();
        if expected == 0 {
            return Ok(self.source.clone());
        }
        if values.len() != expected {
            return Err(ArityError {
                expected,
                actual: values.len(),
            });
        }

        let mut resolved = String::with_capacity(self.source.len());
        let mut values = values.iter();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => resolved.push_str(text),
                Segment::Placeholder(_) => {
                    // Length was checked above.
                    if let Some(value) = values.next() {
                        resolved.push_str(value.as_ref());
                    }
                }
            }
        }
        Ok(resolved)
    }
}

/// Compile an action pattern. Shorthand for [`CompiledPattern::compile`].
pub fn compile(action_pattern: &str) -> PatternResult<CompiledPattern> {
    CompiledPattern::compile(action_pattern)
}

fn parse_segments(pattern: &str) -> PatternResult<Vec<Segment>> {
    if pattern.is_empty() {
        return Err(PatternError::Empty);
    }
    if !pattern.starts_with('/') {
        return Err(PatternError::Relative {
            pattern: pattern.to_string(),
        });
    }

    let malformed = |position: usize| PatternError::Malformed {
        pattern: pattern.to_string(),
        position,
    };

    let mut segments = Vec::new();
    let mut rest = pattern;
    let mut offset = 0;

    while let Some(open) = rest.find('{') {
        let after_open = &rest[open + 1..];
        let close = after_open.find('}').ok_or_else(|| malformed(offset + open))?;
        if close == 0 {
            return Err(malformed(offset + open));
        }

        if open > 0 {
            segments.push(Segment::Literal(rest[..open].to_string()));
        }
        segments.push(Segment::Placeholder(after_open[..close].to_string()));

        let consumed = open + close + 2;
        offset += consumed;
        rest = &rest[consumed..];
    }

    if !rest.is_empty() {
        segments.push(Segment::Literal(rest.to_string()));
    }

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(fragment: &str) -> FragmentPath {
        FragmentPath::from_fragment(fragment)
    }

    #[test]
    fn test_fragment_path() {
        assert_eq!(path("game/42").as_str(), "/game/42");
        assert_eq!(path("#game/42").as_str(), "/game/42");
        assert_eq!(path("").as_str(), "/");
    }

    #[test]
    fn test_single_placeholder() {
        let pattern = compile("/game/{id}").unwrap();
        let found = pattern.match_path(&path("game/42")).unwrap();
        assert_eq!(&*found, &["42".to_string()]);
        assert!(pattern.match_path(&path("game/")).is_none());
        assert!(pattern.match_path(&path("lobby/42")).is_none());
    }

    #[test]
    fn test_multiple_placeholders_in_order() {
        let pattern = compile("/game/{id}/move/{x}/{y}").unwrap();
        assert_eq!(pattern.placeholders().collect::<Vec<_>>(), vec!["id", "x", "y"]);

        let found = pattern.match_path(&path("game/7/move/3/4")).unwrap();
        assert_eq!(found.into_inner(), vec!["7", "3", "4"]);
    }

    #[test]
    fn test_literal_pattern_is_exact() {
        let pattern = compile("/index").unwrap();
        assert!(pattern.match_path(&path("index")).is_some());
        assert!(pattern.match_path(&path("index/more")).is_none());
        assert!(pattern.match_path(&path("xindex")).is_none());
        assert_eq!(pattern.match_path(&path("index")).unwrap().len(), 0);
    }

    #[test]
    fn test_literal_text_is_escaped() {
        let pattern = compile("/a.b/{id}").unwrap();
        assert!(pattern.match_path(&path("a.b/1")).is_some());
        assert!(pattern.match_path(&path("axb/1")).is_none());
    }

    #[test]
    fn test_compile_errors() {
        assert_eq!(compile("").unwrap_err(), PatternError::Empty);
        assert!(matches!(
            compile("/game/{id").unwrap_err(),
            PatternError::Malformed { position: 6, .. }
        ));
        assert!(matches!(
            compile("/game/{}").unwrap_err(),
            PatternError::Malformed { position: 6, .. }
        ));
    }

    #[test]
    fn test_relative_pattern_rejected() {
        assert_eq!(
            compile("game/{id}").unwrap_err(),
            PatternError::Relative {
                pattern: "game/{id}".to_string()
            }
        );
        assert!(compile("{screen}/{id}").is_err());
    }

    #[test]
    fn test_resolve() {
        let pattern = compile("/game/{id}/move/{n}").unwrap();
        assert_eq!(pattern.resolve(&["9", "12"]).unwrap(), "/game/9/move/12");
        assert_eq!(
            pattern.resolve(&["9"]).unwrap_err(),
            ArityError { expected: 2, actual: 1 }
        );
    }

    #[test]
    fn test_resolve_value_containing_braces() {
        let pattern = compile("/{a}/{b}").unwrap();
        assert_eq!(pattern.resolve(&["{b}", "x"]).unwrap(), "/{b}/x");
    }

    #[test]
    fn test_resolve_without_placeholders_ignores_values() {
        let pattern = compile("/lobby").unwrap();
        let none: [&str; 0] = [];
        assert_eq!(pattern.resolve(&none).unwrap(), "/lobby");
        assert_eq!(pattern.resolve(&["x", "y"]).unwrap(), "/lobby");
    }

    #[test]
    fn test_match_then_resolve_round_trip() {
        let cases: &[(&str, &[&str])] = &[
            ("/game/{id}", &["42"]),
            ("/game/{id}/move/{x}/{y}", &["abc", "3", "zz"]),
            ("/{a}{b}", &["xy", "z"]),
            ("/user-{name}.json", &["ada.lovelace"]),
        ];

        for (action, values) in cases {
            let pattern = compile(action).unwrap();
            let concrete = pattern.resolve(values).unwrap();
            let fragment = concrete.trim_start_matches('/');

            let captured = pattern.match_path(&path(fragment)).unwrap();
            assert_eq!(pattern.resolve(captured.as_slice()).unwrap(), concrete, "pattern {}", action);
        }
    }
}
