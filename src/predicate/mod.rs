//! Emptiness, length and truthiness predicates.
//!
//! This module replaces runtime "what kind of container is this?" checks with
//! typed capabilities:
//!
//! - [`Emptiness`]: Whether a value is semantically empty
//! - [`Length`]: Number of elements (or bytes, for strings)
//! - [`Truthy`]: Whether a loosely typed value means `true`
//!
//! On top of the traits, the variadic checks ([`no_empty`], [`exist_empty`],
//! [`part_empty`], [`all_empty`], [`not_all_empty`]) accept heterogeneous
//! values as `&dyn Emptiness`.
//!
//! # Examples
//!
//! ```rust
//! use groundwork::predicate::{Emptiness, exist_empty, no_empty};
//! use std::collections::HashMap;
//!
//! let name = "groundwork";
//! let tags: Vec<&str> = Vec::new();
//! let scores: HashMap<&str, u32> = HashMap::from([("a", 1)]);
//!
//! assert!(name.is_not_empty_value());
//! assert!(tags.is_empty_value());
//!
//! assert!(no_empty(&[&name, &scores]));
//! assert!(exist_empty(&[&name, &tags, &scores]));
//! ```

mod emptiness;
mod truthy;

pub use emptiness::Emptiness;
pub use emptiness::Length;
pub use emptiness::all_empty;
pub use emptiness::exist_empty;
pub use emptiness::first_non_empty;
pub use emptiness::no_empty;
pub use emptiness::not_all_empty;
pub use emptiness::part_empty;
pub use truthy::Truthy;
pub use truthy::is_all_true;
pub use truthy::is_true_or;
