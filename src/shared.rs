//! Thread-safe tree access.
//!
//! Inserts split and promote edges in place, so readers must not observe a
//! tree mid-insert. [`SharedTree`] serializes every operation behind one
//! exclusive lock per tree.

use parking_lot::Mutex;

use crate::error::Result;
use crate::tree::RadixTree;
use crate::url::UrlTree;

/// Operations common to string trees
pub trait StringTree {
    /// Insert a string, returning whether it is now stored
    fn insert(&mut self, s: &str) -> Result<bool>;
    /// Check if a string is stored
    fn contains(&self, s: &str) -> Result<bool>;
    /// Remove a string, returning whether it was stored
    fn remove(&mut self, s: &str) -> Result<bool>;
    /// Number of stored strings
    fn len(&self) -> usize;

    /// Check if nothing is stored
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StringTree for RadixTree {
    fn insert(&mut self, s: &str) -> Result<bool> {
        Ok(RadixTree::insert(self, s))
    }

    fn contains(&self, s: &str) -> Result<bool> {
        Ok(RadixTree::contains(self, s))
    }

    fn remove(&mut self, s: &str) -> Result<bool> {
        Ok(RadixTree::remove(self, s))
    }

    fn len(&self) -> usize {
        RadixTree::len(self)
    }
}

impl StringTree for UrlTree {
    fn insert(&mut self, s: &str) -> Result<bool> {
        UrlTree::insert(self, s)
    }

    fn contains(&self, s: &str) -> Result<bool> {
        UrlTree::contains(self, s)
    }

    fn remove(&mut self, s: &str) -> Result<bool> {
        UrlTree::remove(self, s)
    }

    fn len(&self) -> usize {
        UrlTree::len(self)
    }
}

/// A tree behind a single exclusive lock
#[derive(Debug, Default)]
pub struct SharedTree<T> {
    inner: Mutex<T>,
}

impl<T: StringTree> SharedTree<T> {
    /// Wrap a tree
    pub fn new(tree: T) -> Self {
        Self {
            inner: Mutex::new(tree),
        }
    }

    /// Insert a string
    pub fn insert(&self, s: &str) -> Result<bool> {
        self.inner.lock().insert(s)
    }

    /// Check if a string is stored
    pub fn contains(&self, s: &str) -> Result<bool> {
        self.inner.lock().contains(s)
    }

    /// Remove a string
    pub fn remove(&self, s: &str) -> Result<bool> {
        self.inner.lock().remove(s)
    }

    /// Number of stored strings
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Check if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Run `f` with exclusive access to the tree
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut tree = self.inner.lock();
        f(&mut tree)
    }

    /// Unwrap the tree
    pub fn into_inner(self) -> T {
        self.inner.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_shared_radix_tree() {
        let shared = SharedTree::new(RadixTree::new());
        assert!(shared.is_empty());
        assert!(shared.insert("hello").unwrap());
        assert!(shared.contains("hello").unwrap());
        assert!(!shared.insert("").unwrap());
        assert!(shared.remove("hello").unwrap());
        assert!(!shared.contains("hello").unwrap());
    }

    #[test]
    fn test_shared_url_tree_propagates_errors() {
        let shared = SharedTree::new(UrlTree::new());
        assert!(shared.insert("http://example.com:x/").is_err());
        assert!(shared.insert("http://example.com/").unwrap());
        assert_eq!(shared.len(), 1);
    }

    #[test]
    fn test_concurrent_inserts() {
        let shared = Arc::new(SharedTree::new(UrlTree::new()));

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    for i in 0..50 {
                        let url = format!("http://host{}.example.com/page/{}", t, i);
                        assert!(shared.insert(&url).unwrap());
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.len(), 200);
        for t in 0..4 {
            for i in 0..50 {
                let url = format!("http://host{}.example.com/page/{}", t, i);
                assert!(shared.contains(&url).unwrap(), "missing {}", url);
            }
        }
    }

    #[test]
    fn test_with_and_into_inner() {
        let shared = SharedTree::new(RadixTree::new());
        shared.with(|tree| {
            tree.insert("hell");
            tree.insert("hello");
        });
        let tree = shared.into_inner();
        assert_eq!(tree.to_string(), "hell(,o())");
    }
}
