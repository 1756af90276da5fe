use std::cmp::Ordering;
use std::collections::BTreeSet;

use itertools::{EitherOrBoth, Itertools};

/// The set of line numbers (0-based, unique, ascending) a term or query matches.
pub type LineSet = BTreeSet<usize>;

/// An extension trait for `LineSet`s that enables computing the set algebra
/// a query is evaluated with. Every operation is a single ordered scan.
pub trait LineSetAlgebra {
    /// Computes the lines present in either self or other.
    fn union_lines(&self, other: &Self) -> LineSet;

    /// Computes the lines present in both self and other.
    fn intersect_lines(&self, other: &Self) -> LineSet;

    /// Computes every line in `0..len` that is not in self.
    ///
    /// # Examples
    ///
    /// ```
    /// use text_query::{LineSet, LineSetAlgebra};
    ///
    /// let lines: LineSet = [0, 2].iter().cloned().collect();
    /// let complement: Vec<_> = lines.complement_lines(4).into_iter().collect();
    /// assert_eq!(complement, [1, 3]);
    /// ```
    fn complement_lines(&self, len: usize) -> LineSet;
}

impl LineSetAlgebra for LineSet {
    fn union_lines(&self, other: &LineSet) -> LineSet {
        self.iter().merge(other.iter()).dedup().cloned().collect()
    }

    fn intersect_lines(&self, other: &LineSet) -> LineSet {
        self.iter()
            .merge_join_by(other.iter(), |l, r| l.cmp(r))
            .filter_map(|either| match either {
                EitherOrBoth::Both(line, _) => Some(*line),
                _ => None,
            })
            .collect()
    }

    fn complement_lines(&self, len: usize) -> LineSet {
        let mut present = self.iter().cloned().peekable();
        let mut complement = LineSet::new();
        for line in 0..len {
            // Skip over anything the scan has already passed
            while let Some(&next) = present.peek() {
                if next < line {
                    present.next();
                } else {
                    break;
                }
            }
            match present.peek().map(|next| next.cmp(&line)) {
                Some(Ordering::Equal) => {
                    present.next();
                }
                _ => {
                    complement.insert(line);
                }
            }
        }
        complement
    }
}
