//! Context classification for false-positive suppression.
//!
//! A [`Classifier`] inspects a bounded window of text around a match and
//! decides whether the match should be reported. Each heuristic is a named
//! [`ContextPredicate`]; the first predicate that holds allows the match.

use std::fmt;

/// Number of bytes of context kept on each side of a match.
pub const DEFAULT_WINDOW: usize = 80;

/// Outcome of classifying a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The match is not a real violation.
    Allow,
    /// The match should be reported.
    Flag,
}

/// Text surrounding a match, bounded to the match's line and a window size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextWindow<'a> {
    /// Text on the same line before the match.
    pub before: &'a str,
    /// The matched text.
    pub matched: &'a str,
    /// Text on the same line after the match.
    pub after: &'a str,
}

impl<'a> ContextWindow<'a> {
    /// Extracts the window around `content[start..end]`.
    ///
    /// The window never crosses a line break and keeps at most `radius`
    /// bytes on each side, adjusted to character boundaries.
    #[must_use]
    pub fn around(content: &'a str, start: usize, end: usize, radius: usize) -> Self {
        let line_start = content[..start].rfind('\n').map_or(0, |i| i + 1);
        let line_end = content[end..].find('\n').map_or(content.len(), |i| end + i);

        let mut from = start.saturating_sub(radius).max(line_start);
        while !content.is_char_boundary(from) {
            from += 1;
        }
        let mut to = (end + radius).min(line_end);
        while !content.is_char_boundary(to) {
            to -= 1;
        }

        Self {
            before: &content[from..start],
            matched: &content[start..end],
            after: &content[end..to],
        }
    }
}

/// A named heuristic; returns `true` when the match should be allowed.
#[derive(Clone, Copy)]
pub struct ContextPredicate {
    /// Identifier shown in debug logs.
    pub name: &'static str,
    /// The heuristic itself.
    pub test: fn(&ContextWindow<'_>) -> bool,
}

impl ContextPredicate {
    /// Creates a named predicate.
    #[must_use]
    pub const fn new(name: &'static str, test: fn(&ContextWindow<'_>) -> bool) -> Self {
        Self { name, test }
    }
}

impl fmt::Debug for ContextPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ContextPredicate").field(&self.name).finish()
    }
}

/// An ordered list of predicates evaluated against a context window.
#[derive(Debug, Clone)]
pub struct Classifier {
    predicates: Vec<ContextPredicate>,
    radius: usize,
}

impl Classifier {
    /// Creates a classifier from predicates, using [`DEFAULT_WINDOW`].
    #[must_use]
    pub fn new(predicates: Vec<ContextPredicate>) -> Self {
        Self {
            predicates,
            radius: DEFAULT_WINDOW,
        }
    }

    /// Sets the window radius in bytes.
    #[must_use]
    pub fn radius(mut self, radius: usize) -> Self {
        self.radius = radius;
        self
    }

    /// Returns the configured predicates.
    #[must_use]
    pub fn predicates(&self) -> &[ContextPredicate] {
        &self.predicates
    }

    /// Classifies the match at `content[start..end]`.
    #[must_use]
    pub fn classify(&self, content: &str, start: usize, end: usize) -> Decision {
        let window = ContextWindow::around(content, start, end, self.radius);
        self.classify_window(&window)
    }

    /// Classifies an already extracted window.
    #[must_use]
    pub fn classify_window(&self, window: &ContextWindow<'_>) -> Decision {
        match self.predicates.iter().find(|p| (p.test)(window)) {
            Some(predicate) => {
                tracing::debug!(
                    "Allowing `{}` by predicate {}",
                    window.matched,
                    predicate.name
                );
                Decision::Allow
            }
            None => Decision::Flag,
        }
    }
}
