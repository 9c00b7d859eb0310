//! # Iterator Helpers
//!
//! Adaptors for the everyday list chores of web applications: order-preserving
//! de-duplication, fixed-size partitioning, 1-based paging and blank-skipping
//! string joins.
//!
//! All adaptors are lazy and allocation is bounded by what they need to
//! remember (seen keys, the current chunk).
//!
//! ## Examples
//!
//! ```
//! use web_toolbelt_rs::iter::IterToolbelt;
//!
//! let distinct: Vec<_> = ["1", "2", "1"].into_iter().distinct_by(|x| *x).collect();
//! assert_eq!(distinct, vec!["1", "2"]);
//!
//! let pages: Vec<_> = (1..=12).partition_into(3).collect();
//! assert_eq!(pages.len(), 4);
//! ```

use std::collections::HashSet;
use std::hash::Hash;
use std::iter::{Skip, Take};

/// Extension trait adding the toolbelt adaptors to every iterator.
pub trait IterToolbelt: Iterator {
    /// Keeps the first item for each distinct key, preserving order.
    ///
    /// # Examples
    ///
    /// ```
    /// use web_toolbelt_rs::iter::IterToolbelt;
    ///
    /// let words = ["apple", "avocado", "banana"];
    /// let one_per_letter: Vec<_> = words
    ///     .into_iter()
    ///     .distinct_by(|w| w.chars().next())
    ///     .collect();
    /// assert_eq!(one_per_letter, vec!["apple", "banana"]);
    /// ```
    fn distinct_by<K, F>(self, key: F) -> DistinctBy<Self, F, K>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> K,
        K: Eq + Hash,
    {
        DistinctBy {
            iter: self,
            key,
            seen: HashSet::new(),
        }
    }

    /// Splits the iterator into chunks of up to `size` items.
    ///
    /// The last chunk may be shorter. Chunks are yielded as `Vec`s in input
    /// order.
    ///
    /// # Panics
    ///
    /// Panics when `size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use web_toolbelt_rs::iter::IterToolbelt;
    ///
    /// let chunks: Vec<Vec<i32>> = (1..=7).partition_into(3).collect();
    /// assert_eq!(chunks, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
    /// ```
    fn partition_into(self, size: usize) -> PartitionInto<Self>
    where
        Self: Sized,
    {
        assert!(size > 0, "partition size must be at least 1");
        PartitionInto { iter: self, size }
    }

    /// Filters by page and page size, with 1-based page numbers.
    ///
    /// # Examples
    ///
    /// ```
    /// use web_toolbelt_rs::iter::IterToolbelt;
    ///
    /// let page2: Vec<i32> = (1..=10).filter_paging(2, 3).collect();
    /// assert_eq!(page2, vec![4, 5, 6]);
    /// ```
    fn filter_paging(self, page: usize, page_size: usize) -> Take<Skip<Self>>
    where
        Self: Sized,
    {
        let skip = page_size * page.saturating_sub(1);
        self.skip(skip).take(page_size)
    }

    /// Joins string items with a separator, skipping blank entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use web_toolbelt_rs::iter::IterToolbelt;
    ///
    /// let joined = ["a", "", "b", "  ", "c"].into_iter().join_non_blank(", ");
    /// assert_eq!(joined, "a, b, c");
    /// ```
    fn join_non_blank(self, separator: &str) -> String
    where
        Self: Sized,
        Self::Item: AsRef<str>,
    {
        let mut result = String::new();
        for item in self {
            let item = item.as_ref();
            if item.trim().is_empty() {
                continue;
            }
            if !result.is_empty() {
                result.push_str(separator);
            }
            result.push_str(item);
        }
        result
    }
}

impl<I: Iterator> IterToolbelt for I {}

/// Iterator adaptor returned by [`IterToolbelt::distinct_by`].
pub struct DistinctBy<I, F, K> {
    iter: I,
    key: F,
    seen: HashSet<K>,
}

impl<I, F, K> Iterator for DistinctBy<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Eq + Hash,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.iter.next()?;
            let key = (self.key)(&item);
            if self.seen.insert(key) {
                return Some(item);
            }
        }
    }
}

/// Iterator adaptor returned by [`IterToolbelt::partition_into`].
pub struct PartitionInto<I> {
    iter: I,
    size: usize,
}

impl<I: Iterator> Iterator for PartitionInto<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut chunk = Vec::with_capacity(self.size);
        while chunk.len() < self.size {
            match self.iter.next() {
                Some(item) => chunk.push(item),
                None => break,
            }
        }

        if chunk.is_empty() { None } else { Some(chunk) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_by_removes_duplicate_entries() {
        let list = vec!["1", "2", "1"];
        let distinct: Vec<_> = list.into_iter().distinct_by(|x| x.to_string()).collect();
        assert_eq!(distinct.iter().filter(|x| **x == "1").count(), 1);
    }

    #[test]
    fn distinct_by_keeps_first_occurrence() {
        let pairs = vec![(1, "a"), (2, "b"), (1, "c")];
        let distinct: Vec<_> = pairs.into_iter().distinct_by(|(id, _)| *id).collect();
        assert_eq!(distinct, vec![(1, "a"), (2, "b")]);
    }

    #[test]
    fn partition_splits_list_in_multiple_partitions() {
        let partitioned: Vec<Vec<i32>> = (0..12).partition_into(3).collect();
        assert_eq!(partitioned.len(), 4);
        assert!(partitioned.iter().all(|chunk| chunk.len() == 3));
    }

    #[test]
    fn partition_keeps_short_final_chunk() {
        let partitioned: Vec<Vec<i32>> = (0..7).partition_into(3).collect();
        assert_eq!(partitioned.last().map(Vec::len), Some(1));
    }

    #[test]
    fn partition_of_empty_input_is_empty() {
        let partitioned: Vec<Vec<i32>> = std::iter::empty().partition_into(3).collect();
        assert!(partitioned.is_empty());
    }

    #[test]
    #[should_panic(expected = "partition size must be at least 1")]
    fn partition_rejects_zero_size() {
        let _ = (0..3).partition_into(0);
    }

    #[test]
    fn filter_paging_slices_the_requested_page() {
        let page: Vec<i32> = (1..=10).filter_paging(2, 4).collect();
        assert_eq!(page, vec![5, 6, 7, 8]);
    }

    #[test]
    fn filter_paging_past_the_end_is_empty() {
        let page: Vec<i32> = (1..=10).filter_paging(4, 4).collect();
        assert!(page.is_empty());
    }

    #[test]
    fn join_non_blank_skips_blank_entries() {
        let joined = ["x", " ", "", "y"].into_iter().join_non_blank("-");
        assert_eq!(joined, "x-y");
    }
}
