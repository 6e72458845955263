//! Index and slice selection over a tag list.
//!
//! A selector is a comma-separated list of terms. Each term is either a
//! signed index (`2`, `-1`) or a half-open slice (`1:3`, `:2`, `-2:`, `:`).
//! Negative values count from the end of the list. The selected indices are
//! merged into one ascending, duplicate-free set before rendering, so
//! `"3,0:2,1"` renders as tags 0, 1, 3.

use std::collections::BTreeSet;

use crate::error::SelectorError;

/// One term of a selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    Index(i64),
    Slice { start: Option<i64>, end: Option<i64> },
}

/// A parsed selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    terms: Vec<Term>,
}

impl Selection {
    /// Parse a selector string.
    pub fn parse(selector: &str) -> Result<Self, SelectorError> {
        let terms = selector
            .split(',')
            .map(parse_term)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { terms })
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Resolve every term against a list of `len` items.
    pub fn indices(&self, len: usize) -> Result<BTreeSet<usize>, SelectorError> {
        let len_i = len as i64;
        let mut selected = BTreeSet::new();

        for term in &self.terms {
            match *term {
                Term::Index(index) => {
                    let resolved = if index < 0 { index + len_i } else { index };
                    selected.insert(checked(resolved, index, len)?);
                }
                Term::Slice { start, end } => {
                    let start = normalize(start.unwrap_or(0), len_i);
                    let end = normalize(end.unwrap_or(len_i), len_i);
                    for i in start..end {
                        selected.insert(checked(i, i, len)?);
                    }
                }
            }
        }

        Ok(selected)
    }
}

fn normalize(bound: i64, len: i64) -> i64 {
    if bound < 0 {
        bound + len
    } else {
        bound
    }
}

fn checked(resolved: i64, original: i64, len: usize) -> Result<usize, SelectorError> {
    usize::try_from(resolved)
        .ok()
        .filter(|&i| i < len)
        .ok_or(SelectorError::IndexOutOfRange {
            index: original,
            len,
        })
}

fn parse_term(raw: &str) -> Result<Term, SelectorError> {
    let term = raw.trim();
    let invalid = |reason: &str| SelectorError::InvalidTerm {
        term: raw.to_string(),
        reason: reason.to_string(),
    };

    if term.is_empty() {
        return Err(invalid("empty term"));
    }

    match term.matches(':').count() {
        0 => term
            .parse()
            .map(Term::Index)
            .map_err(|_| invalid("not an integer")),
        1 => {
            let (start, end) = term.split_once(':').ok_or_else(|| invalid("missing ':'"))?;
            let bound = |s: &str| -> Result<Option<i64>, SelectorError> {
                let s = s.trim();
                if s.is_empty() {
                    Ok(None)
                } else {
                    s.parse().map(Some).map_err(|_| invalid("slice bound is not an integer"))
                }
            };
            Ok(Term::Slice {
                start: bound(start)?,
                end: bound(end)?,
            })
        }
        _ => Err(invalid("more than one ':'")),
    }
}

/// Select tags by `selector` and join them with `", "` in index order.
pub fn select(tags: &[String], selector: &str) -> Result<String, SelectorError> {
    let indices = Selection::parse(selector)?.indices(tags.len())?;
    let picked: Vec<&str> = indices.into_iter().map(|i| tags[i].as_str()).collect();
    Ok(picked.join(", "))
}
