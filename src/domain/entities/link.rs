//! Link entity binding a short hash to its title and original URL.

use crate::utils::hash::generate_hash;

/// A persisted short link.
///
/// `hash` is the primary key and is derived from `original`, so the same URL
/// always maps to the same record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub hash: String,
    pub title: String,
    pub original: String,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(hash: String, title: String, original: String) -> Self {
        Self {
            hash,
            title,
            original,
        }
    }

    /// Builds a link whose hash is computed from `original`.
    pub fn from_original(title: String, original: String) -> Self {
        let hash = generate_hash(&original);
        Self::new(hash, title, original)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation() {
        let link = Link::new(
            "abc12345".to_string(),
            "Example".to_string(),
            "https://example.com".to_string(),
        );

        assert_eq!(link.hash, "abc12345");
        assert_eq!(link.title, "Example");
        assert_eq!(link.original, "https://example.com");
    }

    #[test]
    fn test_link_from_original() {
        let link = Link::from_original(
            "My Link".to_string(),
            "https://www.google.com".to_string(),
        );

        assert_eq!(link.hash, "7378mDnD");
        assert_eq!(link.title, "My Link");
        assert_eq!(link.original, "https://www.google.com");
    }

    #[test]
    fn test_same_original_same_hash() {
        let a = Link::from_original("A".to_string(), "https://rust-lang.org".to_string());
        let b = Link::from_original("B".to_string(), "https://rust-lang.org".to_string());

        assert_eq!(a.hash, b.hash);
        assert_ne!(a, b);
    }
}
