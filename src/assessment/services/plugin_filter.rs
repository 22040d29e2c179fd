use crate::assessment::domain::AssessmentRun;
use crate::shared::error::AssessError;
use crate::shared::Result;
use std::cell::Cell;

const MAX_EXCLUDE_PATTERNS: usize = 64;
const MAX_PATTERN_LENGTH: usize = 255;

/// PluginFilter - drops runs whose plugin name matches an exclusion pattern
///
/// `*` matches zero or more characters. Matching is case-sensitive against
/// the plugin identifier (`plugin_name`), not its display name.
#[derive(Debug)]
pub struct PluginFilter {
    patterns: Vec<ExcludePattern>,
}

impl PluginFilter {
    /// Compiles raw patterns such as `"ntia"`, `"cisa-*"`, `"*-beta"`.
    ///
    /// # Errors
    /// - more than 64 patterns
    /// - an empty, over-long, wildcard-only, or badly-charactered pattern
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_EXCLUDE_PATTERNS {
            return Err(AssessError::Validation {
                message: format!(
                    "Too many plugin exclusion patterns: {} (maximum: {})",
                    patterns.len(),
                    MAX_EXCLUDE_PATTERNS
                ),
            }
            .into());
        }

        let patterns = patterns
            .into_iter()
            .map(ExcludePattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Keeps only runs whose plugin is not excluded, preserving order
    pub fn filter_runs(&self, runs: Vec<AssessmentRun>) -> Vec<AssessmentRun> {
        runs.into_iter()
            .filter(|run| !self.matches(&run.plugin_name))
            .collect()
    }

    fn matches(&self, plugin_name: &str) -> bool {
        // evaluate every pattern so each one records whether it was used
        self.patterns
            .iter()
            .fold(false, |hit, p| p.matches(plugin_name) || hit)
    }

    /// Patterns that matched nothing in any filtered run set so far
    pub fn unmatched_patterns(&self) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|p| !p.matched.get())
            .map(|p| p.original.clone())
            .collect()
    }
}

#[derive(Debug)]
struct ExcludePattern {
    original: String,
    matcher: PatternMatcher,
    matched: Cell<bool>,
}

impl ExcludePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;
        let matcher = PatternMatcher::compile(&pattern);
        Ok(Self {
            original: pattern,
            matcher,
            matched: Cell::new(false),
        })
    }

    fn matches(&self, plugin_name: &str) -> bool {
        let is_match = self.matcher.matches(plugin_name);
        if is_match {
            self.matched.set(true);
        }
        is_match
    }
}

#[derive(Debug)]
enum PatternMatcher {
    /// "ntia"
    Exact(String),
    /// "*-beta"
    EndsWith(String),
    /// "cisa-*"
    StartsWith(String),
    /// "*sbom*"
    Contains(String),
    /// "a*b*c" - parts must appear in order, anchored at both ends
    Segments(Vec<String>),
}

impl PatternMatcher {
    fn compile(pattern: &str) -> Self {
        let starts_wild = pattern.starts_with('*');
        let ends_wild = pattern.ends_with('*');
        let parts: Vec<String> = pattern
            .split('*')
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();

        match (parts.len(), starts_wild, ends_wild) {
            (1, false, false) if !pattern.contains('*') => PatternMatcher::Exact(parts[0].clone()),
            (1, true, false) => PatternMatcher::EndsWith(parts[0].clone()),
            (1, false, true) => PatternMatcher::StartsWith(parts[0].clone()),
            (1, true, true) => PatternMatcher::Contains(parts[0].clone()),
            _ => {
                let mut segments = parts;
                if starts_wild {
                    segments.insert(0, String::new());
                }
                if ends_wild {
                    segments.push(String::new());
                }
                PatternMatcher::Segments(segments)
            }
        }
    }

    fn matches(&self, name: &str) -> bool {
        match self {
            PatternMatcher::Exact(s) => name == s,
            PatternMatcher::EndsWith(suffix) => name.ends_with(suffix.as_str()),
            PatternMatcher::StartsWith(prefix) => name.starts_with(prefix.as_str()),
            PatternMatcher::Contains(middle) => name.contains(middle.as_str()),
            PatternMatcher::Segments(segments) => Self::matches_segments(segments, name),
        }
    }

    fn matches_segments(segments: &[String], name: &str) -> bool {
        let (Some(first), Some(last)) = (segments.first(), segments.last()) else {
            return false;
        };
        if !name.starts_with(first.as_str()) {
            return false;
        }
        let mut pos = first.len();
        let inner = &segments[1..segments.len().saturating_sub(1)];
        for part in inner {
            match name[pos..].find(part.as_str()) {
                Some(found) => pos += found + part.len(),
                None => return false,
            }
        }
        name.len() >= pos + last.len() && name[pos..].ends_with(last.as_str())
    }
}

fn validate_pattern(pattern: &str) -> Result<()> {
    let invalid = |message: String| -> anyhow::Error { AssessError::Validation { message }.into() };

    if pattern.is_empty() {
        return Err(invalid("Plugin exclusion pattern cannot be empty".to_string()));
    }
    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(invalid(format!(
            "Plugin exclusion pattern is too long ({} chars). Maximum: {} chars",
            pattern.len(),
            MAX_PATTERN_LENGTH
        )));
    }
    if let Some(ch) = pattern.chars().find(|c| !is_valid_pattern_char(*c)) {
        return Err(invalid(format!(
            "Plugin exclusion pattern '{}' contains invalid character '{}'. \
             Only alphanumeric, hyphens, underscores, dots, and asterisks (*) are allowed.",
            pattern, ch
        )));
    }
    if pattern.chars().all(|c| c == '*') {
        return Err(invalid(format!(
            "Plugin exclusion pattern cannot contain only wildcards: '{}'",
            pattern
        )));
    }
    Ok(())
}

fn is_valid_pattern_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '*')
}
