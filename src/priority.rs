//! Doubly-linked bucket index: `O(1)` insertion, removal, and score change.
//!
//! Vertices are kept in a fixed-size slab (one slot per vertex id, sized to
//! the graph's `nodes_len`); buckets store ids, never addresses, so there is
//! no pointer fix-up on clone. This module never looks at the `Graph` — it
//! only knows vertex ids and integer priorities, matching §2 of the spec.

/// A bucket-keyed priority index over vertex ids `0..capacity`.
#[derive(Debug, Clone)]
pub struct PriorityIndex {
    heads: Vec<Option<usize>>,
    tails: Vec<Option<usize>>,
    prev: Vec<Option<usize>>,
    next: Vec<Option<usize>>,
    bucket_of: Vec<Option<usize>>,
    min_ptr: Option<usize>,
    max_ptr: Option<usize>,
}

impl PriorityIndex {
    /// Create an index over vertex ids `0..capacity`, with `initial_buckets`
    /// bucket slots pre-allocated (grown by doubling as needed).
    pub fn new(capacity: usize, initial_buckets: usize) -> Self {
        let buckets = initial_buckets.max(1);
        PriorityIndex {
            heads: vec![None; buckets],
            tails: vec![None; buckets],
            prev: vec![None; capacity],
            next: vec![None; capacity],
            bucket_of: vec![None; capacity],
            min_ptr: None,
            max_ptr: None,
        }
    }

    /// The smallest occupied bucket index, if any.
    pub fn min_bucket(&self) -> Option<usize> {
        self.min_ptr
    }

    /// The largest occupied bucket index, if any.
    pub fn max_bucket(&self) -> Option<usize> {
        self.max_ptr
    }

    /// The vertex at the head of the smallest occupied bucket.
    pub fn min_vertex(&self) -> Option<usize> {
        self.min_ptr.and_then(|k| self.heads[k])
    }

    /// The vertex at the head of the largest occupied bucket.
    pub fn max_vertex(&self) -> Option<usize> {
        self.max_ptr.and_then(|k| self.heads[k])
    }

    /// All vertices currently linked into bucket `k`, head-to-tail.
    pub fn bucket_members(&self, k: usize) -> impl Iterator<Item = usize> + '_ {
        let mut cur = self.heads.get(k).copied().flatten();
        core::iter::from_fn(move || {
            let v = cur?;
            cur = self.next[v];
            Some(v)
        })
    }

    /// The bucket currently holding `vid`, or `None` if unlinked.
    pub fn bucket_of(&self, vid: usize) -> Option<usize> {
        self.bucket_of[vid]
    }

    fn ensure_capacity(&mut self, k: usize) {
        if k >= self.heads.len() {
            let mut new_len = self.heads.len();
            while k >= new_len {
                new_len *= 2;
            }
            self.heads.resize(new_len, None);
            self.tails.resize(new_len, None);
        }
    }

    /// Link `vid` into bucket `k`, at the tail of its list.
    pub fn add(&mut self, vid: usize, k: usize) {
        self.ensure_capacity(k);

        self.prev[vid] = self.tails[k];
        self.next[vid] = None;
        match self.tails[k] {
            Some(tail) => self.next[tail] = Some(vid),
            None => self.heads[k] = Some(vid),
        }
        self.tails[k] = Some(vid);
        self.bucket_of[vid] = Some(k);

        self.max_ptr = Some(self.max_ptr.map_or(k, |m| m.max(k)));
        self.min_ptr = Some(self.min_ptr.map_or(k, |m| m.min(k)));
    }

    /// Unlink `vid` from whichever bucket currently holds it. No-op if `vid`
    /// is not linked.
    pub fn remove(&mut self, vid: usize) {
        let Some(k) = self.bucket_of[vid] else {
            return;
        };

        let p = self.prev[vid];
        let n = self.next[vid];
        match p {
            Some(p) => self.next[p] = n,
            None => self.heads[k] = n,
        }
        match n {
            Some(n) => self.prev[n] = p,
            None => self.tails[k] = p,
        }
        self.prev[vid] = None;
        self.next[vid] = None;
        self.bucket_of[vid] = None;

        if self.heads[k].is_none() {
            self.repair_cursors();
        }
    }

    fn repair_cursors(&mut self) {
        if let Some(mut hi) = self.max_ptr {
            while self.heads[hi].is_none() {
                if hi == 0 {
                    self.max_ptr = None;
                    self.min_ptr = None;
                    return;
                }
                hi -= 1;
            }
            self.max_ptr = Some(hi);
        }
        if let Some(mut lo) = self.min_ptr {
            while lo < self.heads.len() && self.heads[lo].is_none() {
                lo += 1;
            }
            self.min_ptr = if lo < self.heads.len() { Some(lo) } else { None };
        }
    }

    /// Equivalent to `remove(vid)` followed by `add(vid, k)`.
    pub fn move_to(&mut self, vid: usize, k: usize) {
        self.remove(vid);
        self.add(vid, k);
    }
}
