//! Matching of query names against local record patterns.
//!
//! Three pattern shapes are supported:
//!
//! - plain names (`example.com`), compared case-insensitively;
//! - any-depth wildcards (`_**.example.com`), matching the suffix itself and
//!   any number of labels in front of it. Without a `.` after the marker
//!   (`_**example.com`) the suffix is matched as plain text;
//! - single-label wildcards (`*.example.com`, `web-*.example.com`), where each
//!   `*` is confined to one label.
//!
//! Both sides lose one trailing `.` and are lowercased before comparison.

use std::fmt;

/// Marker matching zero or more leading labels.
pub const ANY_DEPTH_MARKER: &str = "_**";

/// Wildcard confined to a single label.
pub const LABEL_WILDCARD: char = '*';

/// Returns `true` when `query_name` matches `pattern`.
///
/// Compiles the pattern on every call; hot paths hold a [`DomainPattern`]
/// instead.
pub fn matches(pattern: &str, query_name: &str) -> bool {
    DomainPattern::parse(pattern).matches(query_name)
}

/// Strips a single trailing label separator and lowercases the name.
pub fn normalize(name: &str) -> String {
    name.strip_suffix('.').unwrap_or(name).to_ascii_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PatternKind {
    Exact,
    /// `label_boundary` is set when the marker is followed by a `.`.
    AnyDepth {
        suffix: String,
        label_boundary: bool,
    },
    SingleLevel { labels: Vec<String> },
}

/// A record pattern compiled once at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainPattern {
    normalized: String,
    kind: PatternKind,
}

impl DomainPattern {
    pub fn parse(pattern: &str) -> Self {
        let normalized = normalize(pattern);

        let kind = if let Some((_, rest)) = normalized.split_once(ANY_DEPTH_MARKER) {
            match rest.strip_prefix('.') {
                Some(suffix) => PatternKind::AnyDepth {
                    suffix: suffix.to_string(),
                    label_boundary: true,
                },
                None => PatternKind::AnyDepth {
                    suffix: rest.to_string(),
                    label_boundary: false,
                },
            }
        } else if normalized.contains(LABEL_WILDCARD) {
            PatternKind::SingleLevel {
                labels: normalized.split('.').map(str::to_string).collect(),
            }
        } else {
            PatternKind::Exact
        };

        Self { normalized, kind }
    }

    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    pub fn matches(&self, query_name: &str) -> bool {
        let name = normalize(query_name);

        if name == self.normalized {
            return true;
        }

        match &self.kind {
            PatternKind::Exact => false,
            PatternKind::AnyDepth {
                suffix,
                label_boundary,
            } => {
                if !name.ends_with(suffix.as_str()) {
                    return false;
                }
                let prefix_len = name.len() - suffix.len();
                !label_boundary
                    || suffix.is_empty()
                    || prefix_len == 0
                    || name.as_bytes()[prefix_len - 1] == b'.'
            }
            PatternKind::SingleLevel { labels } => {
                let query_labels: Vec<&str> = name.split('.').collect();
                if labels.len() != query_labels.len() {
                    return false;
                }
                let mut pairs = labels.iter().zip(query_labels);
                pairs.all(|(pattern, label)| label_matches(pattern, label))
            }
        }
    }
}

impl fmt::Display for DomainPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

fn label_matches(pattern: &str, label: &str) -> bool {
    if pattern == "*" {
        return !label.is_empty();
    }
    if !pattern.contains(LABEL_WILDCARD) {
        return pattern == label;
    }
    glob(pattern.as_bytes(), label.as_bytes())
}

/// `*` matches any run of bytes, including an empty one. The caller
/// guarantees neither side contains a `.`.
fn glob(pattern: &[u8], text: &[u8]) -> bool {
    let (mut p, mut t) = (0, 0);
    let mut backtrack: Option<(usize, usize)> = None;

    while t < text.len() {
        if p < pattern.len() && pattern[p] == b'*' {
            backtrack = Some((p, t));
            p += 1;
        } else if p < pattern.len() && pattern[p] == text[t] {
            p += 1;
            t += 1;
        } else if let Some((star, matched)) = backtrack {
            p = star + 1;
            t = matched + 1;
            backtrack = Some((star, matched + 1));
        } else {
            return false;
        }
    }

    pattern[p..].iter().all(|&b| b == b'*')
}
