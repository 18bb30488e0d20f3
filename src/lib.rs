//! Radix Tree - a compressed prefix tree for strings and URLs
//!
//! This library provides:
//! - A radix tree with insert, lookup and removal of strings
//! - Longest-common-prefix selection among sibling edges
//! - A URL tree that reverses host labels so subdomains share prefixes
//! - A locked wrapper for sharing a tree across threads
//!
//! # Example
//!
//! ```rust
//! use radixtree_r::{RadixTree, UrlTree};
//!
//! let mut tree = RadixTree::new();
//! tree.insert("hell");
//! tree.insert("hello");
//! tree.insert("heck");
//!
//! assert!(tree.contains("hello"));
//! assert!(!tree.contains("he"));
//! assert_eq!(tree.to_string(), "he(ck(),ll(,o()))");
//!
//! // URLs are stored with their host labels reversed
//! let mut urls = UrlTree::new();
//! urls.insert("http://www.example.com/").unwrap();
//! urls.insert("http://mail.example.com/").unwrap();
//!
//! assert!(urls.contains("http://www.example.com/").unwrap());
//! assert!(!urls.contains("http://example.com/").unwrap());
//! ```
//!
//! # Notation
//!
//! `Display` prints each edge as `label(children)`, siblings separated by
//! commas. An empty entry marks a point where a stored string ends:
//!
//! | Inserted | Rendered |
//! |----------|----------|
//! | `hello` | `hello()` |
//! | `hell`, `hello` | `hell(,o())` |
//! | `a`, `c`, `b` | `a(),b(),c()` |
//! | `he`, `hell`, `hello` | `he(,ll(,o()))` |

pub mod error;
pub mod shared;
pub mod tree;
pub mod types;
pub mod url;

// Re-export commonly used items
pub use error::{NormalizationError, Result};
pub use shared::{SharedTree, StringTree};
pub use tree::{common_prefix_len, longest_prefix, RadixTree};
pub use types::TreeStats;
pub use url::{normalize_domain, normalize_url, normalize_url_with, NormalizeOptions, UrlTree};
