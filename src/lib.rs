//! # groundwork
//!
//! Defensive, allocation-light helpers for application code: emptiness
//! predicates, sequence partitioning, set relations and string tokenization.
//!
//! ## Overview
//!
//! Every function in this crate is a pure, synchronous call over borrowed
//! input. Degenerate input (empty sequences, zero sizes, missing
//! delimiters) never panics; it maps to an empty `Vec` or to `None`.
//!
//! - **Predicates**: [`Emptiness`](predicate::Emptiness), [`Length`](predicate::Length)
//!   and [`Truthy`](predicate::Truthy) traits with variadic checks
//! - **Partitioning**: fixed-size and balanced group splitting
//! - **Set relations**: difference, intersection and intersection existence
//!   with a size-adaptive hash index
//! - **Tokenizing**: multi-delimiter splitting and mixed bracket extraction
//! - **Sequence, text and mapping helpers**: the null-safe odds and ends
//!   built on top of the predicates
//!
//! ## Feature Flags
//!
//! - `predicate`: Emptiness, length and truthiness traits
//! - `partition`: `split_by_size`, `split_average`
//! - `relation`: `difference`, `intersection`, `exist_intersection`
//! - `tokenize`: `split_str`, bracket extraction
//! - `sequence`: List helpers
//! - `text`: String helpers
//! - `mapping`: Map helpers
//! - `fxhash` / `ahash`: Faster hasher for internal hash indexes
//! - `full`: Enable all modules
//!
//! ## Example
//!
//! ```rust
//! use groundwork::prelude::*;
//!
//! let groups = split_average(&[1, 2, 3, 4, 5], 3);
//! assert_eq!(groups, vec![vec![1, 2], vec![3, 4], vec![5]]);
//!
//! assert_eq!(intersection(&[1, 2, 3], &[3, 2, 9]), vec![2, 3]);
//! assert_eq!(split_str("a,b;c", &[";", ","]), Some(vec!["a,b", "c"]));
//! assert_eq!(extract_content_in_brackets_mixed("price（USD）"), Some("USD"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the traits and the core partition, relation and tokenize
/// functions. The `sequence`, `text` and `mapping` helpers share names such
/// as `join` and `merge`, so they are reached through their modules.
///
/// # Usage
///
/// ```rust
/// use groundwork::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "predicate")]
    pub use crate::predicate::*;

    #[cfg(feature = "partition")]
    pub use crate::partition::*;

    #[cfg(feature = "relation")]
    pub use crate::relation::*;

    #[cfg(feature = "tokenize")]
    pub use crate::tokenize::*;
}

#[cfg(feature = "predicate")]
pub mod predicate;

#[cfg(feature = "partition")]
pub mod partition;

#[cfg(feature = "relation")]
pub mod relation;

#[cfg(feature = "tokenize")]
pub mod tokenize;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "text")]
pub mod text;

#[cfg(feature = "mapping")]
pub mod mapping;
