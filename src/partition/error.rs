//! Error type for the checked partition functions.
//!
//! The tolerant functions ([`split_by_size`](super::split_by_size),
//! [`split_average`](super::split_average)) absorb degenerate input into an
//! empty result. The `try_` variants report it through [`PartitionError`]
//! instead.

/// Represents degenerate input rejected by the checked partition functions.
///
/// # Examples
///
/// ```rust
/// use groundwork::partition::PartitionError;
///
/// let error = PartitionError::MoreGroupsThanElements {
///     requested: 5,
///     available: 2,
/// };
/// assert_eq!(
///     format!("{error}"),
///     "split_average: requested 5 groups but the source has only 2 elements"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartitionError {
    /// The source sequence has no elements.
    EmptySource,
    /// The chunk size passed to `try_split_by_size` is zero.
    ZeroSize,
    /// The group count passed to `try_split_average` is zero.
    ZeroGroups,
    /// More groups were requested than the source has elements.
    MoreGroupsThanElements {
        /// The number of groups requested.
        requested: usize,
        /// The number of elements in the source.
        available: usize,
    },
}

impl std::fmt::Display for PartitionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySource => write!(formatter, "source sequence is empty"),
            Self::ZeroSize => write!(formatter, "split_by_size: chunk size must be at least 1"),
            Self::ZeroGroups => write!(formatter, "split_average: group count must be at least 1"),
            Self::MoreGroupsThanElements {
                requested,
                available,
            } => write!(
                formatter,
                "split_average: requested {requested} groups but the source has only {available} elements"
            ),
        }
    }
}

impl std::error::Error for PartitionError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PartitionError::EmptySource, "source sequence is empty")]
    #[case(PartitionError::ZeroSize, "split_by_size: chunk size must be at least 1")]
    #[case(PartitionError::ZeroGroups, "split_average: group count must be at least 1")]
    fn test_partition_error_display(#[case] error: PartitionError, #[case] expected: &str) {
        assert_eq!(format!("{error}"), expected);
    }

    #[rstest]
    fn test_partition_error_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(PartitionError::EmptySource);
        assert_eq!(error.to_string(), "source sequence is empty");
    }
}
