use std::collections::BTreeSet;

/// Place names the user has liked during this session.
///
/// Keyed by name alone, so same-named places on different days share one entry.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LikeTracker {
    liked: BTreeSet<String>,
}

impl LikeTracker {
    /// Returns whether the place is liked afterwards.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.liked.remove(name) {
            return false;
        }
        self.liked.insert(name.to_string());
        true
    }

    pub fn is_liked(&self, name: &str) -> bool {
        self.liked.contains(name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.liked.iter().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.liked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.liked.is_empty()
    }

    pub fn clear(&mut self) {
        self.liked.clear();
    }
}
