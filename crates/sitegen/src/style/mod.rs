// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Class-name composition for rendered markup.
//!
//! [`cn`] merges a list of class fragments into a single `class` attribute
//! value. Fragments are either present (`"px-4 py-2"`) or absent; absent
//! fragments are how callers express conditional classes:
//!
//! ```
//! use sitegen::cn;
//! use sitegen::style::when;
//!
//! let active = false;
//! let class = cn!("block rounded-md px-2", when(active, "bg-muted"), "px-4");
//! assert_eq!(class, "block rounded-md px-4");
//! ```
//!
//! Duplicate tokens are kept once at their first position. Utility tokens that
//! set the same property (see [`conflict`]) are resolved in favour of the one
//! written last.

mod conflict;

pub use conflict::{ConflictKey, Group, conflict_key};

/// One input to [`cn`]: a whitespace-separated class list, or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassFragment<'a> {
    Present(&'a str),
    #[default]
    Absent,
}

impl<'a> From<&'a str> for ClassFragment<'a> {
    fn from(value: &'a str) -> Self {
        ClassFragment::Present(value)
    }
}

impl<'a> From<&'a String> for ClassFragment<'a> {
    fn from(value: &'a String) -> Self {
        ClassFragment::Present(value.as_str())
    }
}

impl<'a> From<Option<&'a str>> for ClassFragment<'a> {
    fn from(value: Option<&'a str>) -> Self {
        match value {
            Some(s) => ClassFragment::Present(s),
            None => ClassFragment::Absent,
        }
    }
}

/// `classes` when `condition` holds, otherwise absent.
pub fn when(condition: bool, classes: &str) -> ClassFragment<'_> {
    if condition {
        ClassFragment::Present(classes)
    } else {
        ClassFragment::Absent
    }
}

/// Merge class fragments into one space-separated class string.
pub fn cn(fragments: &[ClassFragment<'_>]) -> String {
    let mut merged: Vec<(&str, Option<ConflictKey>)> = Vec::new();

    for fragment in fragments {
        let ClassFragment::Present(classes) = fragment else {
            continue;
        };
        for token in classes.split_ascii_whitespace() {
            let key = conflict_key(token);
            if let Some(at) = merged.iter().position(|(existing, _)| *existing == token) {
                // A repeat only moves when it would override something written after it.
                let overrides_later = key.as_ref().is_some_and(|key| {
                    merged[at + 1..]
                        .iter()
                        .any(|(_, later)| later.as_ref().is_some_and(|later| key.overrides(later)))
                });
                if !overrides_later {
                    continue;
                }
                merged.remove(at);
            }
            if let Some(ref key) = key {
                merged.retain(|(_, existing)| match existing {
                    Some(existing) => !key.overrides(existing),
                    None => true,
                });
            }
            merged.push((token, key));
        }
    }

    merged
        .iter()
        .map(|(token, _)| *token)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Variadic form of [`cn`]: each argument is converted with `ClassFragment::from`.
#[macro_export]
macro_rules! cn {
    ($($fragment:expr),* $(,)?) => {
        $crate::style::cn(&[$($crate::style::ClassFragment::from($fragment)),*])
    };
}
