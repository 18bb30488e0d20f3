//! URL-aware radix tree.
//!
//! Subdomains of the same site do not share a prefix as written:
//!
//! ```text
//! http://foo.subdomain.example.com/
//! http://bar.subdomain.example.com/
//!   -> http://(bar.subdomain.example.com/(),foo.subdomain.example.com/())
//! ```
//!
//! [`UrlTree`] stores every URL with its host labels reversed, so the common
//! parent domain collapses into one edge:
//!
//! ```text
//! http://com.example.subdomain.foo/
//! http://com.example.subdomain.bar/
//!   -> http://com.example.subdomain.(bar/(),foo/())
//! ```

mod normalize;

pub use normalize::{normalize_domain, normalize_url, normalize_url_with, NormalizeOptions};

use std::fmt;

use log::debug;
use serde::{Serialize, Serializer};

use crate::error::Result;
use crate::tree::RadixTree;
use crate::types::TreeStats;

/// Radix tree of URLs keyed by their normalized form.
///
/// Every operation normalizes its argument before touching the tree, so a
/// URL that fails to normalize leaves the tree unchanged.
#[derive(Clone, Default)]
pub struct UrlTree {
    tree: RadixTree,
    options: NormalizeOptions,
}

impl UrlTree {
    /// Create an empty tree with default normalization
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tree with custom normalization options
    pub fn with_options(options: NormalizeOptions) -> Self {
        Self {
            tree: RadixTree::new(),
            options,
        }
    }

    /// Normalization options in use
    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// Insert `url`. See [`RadixTree::insert`].
    pub fn insert(&mut self, url: &str) -> Result<bool> {
        let normalized = self.normalize(url)?;
        Ok(self.tree.insert(&normalized))
    }

    /// Check whether `url` is stored.
    pub fn contains(&self, url: &str) -> Result<bool> {
        let normalized = self.normalize(url)?;
        Ok(self.tree.contains(&normalized))
    }

    /// Remove `url`. See [`RadixTree::remove`].
    pub fn remove(&mut self, url: &str) -> Result<bool> {
        let normalized = self.normalize(url)?;
        Ok(self.tree.remove(&normalized))
    }

    /// Number of stored URLs
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Check if the tree stores no URLs
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Remove every URL
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Size counters for the underlying tree
    pub fn stats(&self) -> TreeStats {
        self.tree.stats()
    }

    fn normalize(&self, url: &str) -> Result<String> {
        normalize_url_with(url, &self.options).map_err(|e| {
            debug!("rejected URL {:?}: {}", url, e);
            e
        })
    }
}

/// Trees are equal when they store the same normalized URLs.
impl PartialEq for UrlTree {
    fn eq(&self, other: &Self) -> bool {
        self.tree == other.tree
    }
}

impl Eq for UrlTree {}

impl fmt::Debug for UrlTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UrlTree({})", self.tree)
    }
}

impl Serialize for UrlTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.tree.serialize(serializer)
    }
}
