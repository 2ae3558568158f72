// src/link.rs

//! Hyperlinks laid out on a face.

use std::fmt;

/// Prefix marking an href as a reference to another face.
pub const FACE_LINK_PREFIX: &str = "#!";

/// Where a link leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Another face of the same cube, written `#!name`.
    Face(String),
    /// Anything else, handed back to the host untouched.
    External(String),
}

impl LinkTarget {
    pub fn parse(href: &str) -> Self {
        match href.strip_prefix(FACE_LINK_PREFIX) {
            Some(name) => LinkTarget::Face(name.to_string()),
            None => LinkTarget::External(href.to_string()),
        }
    }
}

impl fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkTarget::Face(name) => write!(f, "{}{}", FACE_LINK_PREFIX, name),
            LinkTarget::External(url) => f.write_str(url),
        }
    }
}

/// A link span: the cells its title was written into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub target: LinkTarget,
    pub title: String,
    /// `(row, col)` of every cubelet the title occupies, in writing order.
    pub cells: Vec<(usize, usize)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_links_use_bang_prefix() {
        assert_eq!(LinkTarget::parse("#!about"), LinkTarget::Face("about".into()));
        assert_eq!(
            LinkTarget::parse("http://jquery.com"),
            LinkTarget::External("http://jquery.com".into())
        );
        // A bare fragment is not a face reference
        assert_eq!(LinkTarget::parse("#top"), LinkTarget::External("#top".into()));
    }

    #[test]
    fn display_restores_href() {
        assert_eq!(LinkTarget::parse("#!loop").to_string(), "#!loop");
    }
}
