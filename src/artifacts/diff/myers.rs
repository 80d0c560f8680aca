use derive_new::new;
use similar::{Algorithm, DiffOp};
use std::collections::HashSet;
use std::hash::Hash;

/// One step of an edit script, borrowing the line it refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit<'d, T> {
    Equal(&'d T),
    Delete(&'d T),
    Insert(&'d T),
}

pub trait DiffAlgorithm<'d, T> {
    /// Ordered edit script turning `a` into `b`
    fn diff(&self) -> Vec<Edit<'d, T>>;
}

/// Myers' O((N+M)D) shortest edit script, in linear space
///
/// Elements with no counterpart on the other side can never be kept, so they
/// are set aside before aligning; a rewritten file costs no alignment at all.
/// The script is a longest-common-subsequence alignment: `Equal` edits keep
/// their relative order, deletions come before insertions at the same spot.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<'d, T: Eq + Hash + Ord> MyersDiff<'d, T> {
    /// Positions in `side` whose element also occurs in `other`
    fn shared(side: &[T], other: &[T]) -> Vec<usize> {
        let present = other.iter().collect::<HashSet<_>>();

        (0..side.len())
            .filter(|&i| present.contains(&side[i]))
            .collect()
    }

    /// Ascending `(i, j)` pairs with `a[i] == b[j]`, a longest common subsequence
    fn common_pairs(&self) -> Vec<(usize, usize)> {
        let a_kept = Self::shared(self.a, self.b);
        let b_kept = Self::shared(self.b, self.a);

        let a_view = a_kept.iter().map(|&i| &self.a[i]).collect::<Vec<_>>();
        let b_view = b_kept.iter().map(|&j| &self.b[j]).collect::<Vec<_>>();

        let mut pairs = Vec::new();
        for op in similar::capture_diff_slices(Algorithm::Myers, &a_view, &b_view) {
            if let DiffOp::Equal {
                old_index,
                new_index,
                len,
            } = op
            {
                pairs.extend((0..len).map(|t| (a_kept[old_index + t], b_kept[new_index + t])));
            }
        }

        pairs
    }
}

impl<'d, T: Eq + Hash + Ord> DiffAlgorithm<'d, T> for MyersDiff<'d, T> {
    fn diff(&self) -> Vec<Edit<'d, T>> {
        let (a, b) = (self.a, self.b);
        let mut edits = Vec::with_capacity(a.len() + b.len());
        let (mut x, mut y) = (0, 0);

        // the trailing (len, len) pair flushes what follows the last match
        let end = std::iter::once((a.len(), b.len()));
        for (i, j) in self.common_pairs().into_iter().chain(end) {
            edits.extend(a[x..i].iter().map(Edit::Delete));
            edits.extend(b[y..j].iter().map(Edit::Insert));
            if let Some(kept) = a.get(i) {
                edits.push(Edit::Equal(kept));
            }
            (x, y) = (i + 1, j + 1);
        }

        edits
    }
}
