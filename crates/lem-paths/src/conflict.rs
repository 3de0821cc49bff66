//! Pairwise interior-overlap matrix.

use lem_core::RoomId;

use crate::Path;

/// Symmetric bit matrix: bit `(i, j)` is set iff paths `i` and `j` share an
/// interior room.  Row `i` occupies `words` consecutive `u64`s.
#[derive(Clone, Debug)]
pub struct ConflictMatrix {
    n:     usize,
    words: usize,
    bits:  Vec<u64>,
}

impl ConflictMatrix {
    /// Build from `paths` in the given order.
    ///
    /// Buckets paths by interior room first, so the cost is proportional to
    /// the number of conflicting pairs rather than all `n²` pairs.
    pub fn build(paths: &[&Path]) -> Self {
        let n = paths.len();
        let words = n.div_ceil(64);
        let mut m = Self { n, words, bits: vec![0; n * words] };

        let room_span = paths
            .iter()
            .flat_map(|p| p.interior().iter())
            .map(|r| r.index() + 1)
            .max()
            .unwrap_or(0);
        let mut owners: Vec<Vec<usize>> = vec![Vec::new(); room_span];
        for (i, p) in paths.iter().enumerate() {
            for &RoomId(r) in p.interior() {
                owners[r as usize].push(i);
            }
        }

        for bucket in &owners {
            for (k, &i) in bucket.iter().enumerate() {
                for &j in &bucket[k + 1..] {
                    m.set(i, j);
                    m.set(j, i);
                }
            }
        }
        m
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// `true` if paths `i` and `j` overlap.  Out-of-range indices never do.
    #[inline]
    pub fn conflicts(&self, i: usize, j: usize) -> bool {
        if i >= self.n || j >= self.n {
            return false;
        }
        self.bits[i * self.words + j / 64] & (1u64 << (j % 64)) != 0
    }

    /// `true` if `candidate` overlaps none of `selected`.
    #[inline]
    pub fn compatible(&self, selected: &[usize], candidate: usize) -> bool {
        selected.iter().all(|&s| !self.conflicts(s, candidate))
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize) {
        self.bits[i * self.words + j / 64] |= 1u64 << (j % 64);
    }
}
