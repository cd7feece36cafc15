//! Order-preserving merges of contributor stop groups.
//!
//! A route's stops come from several contributors, each of whom fixed the
//! order of their own stops. Any merge that keeps every contributor's order
//! is a plausible driving order. The number of such merges is the
//! multinomial coefficient of the group sizes, so enumeration is capped.

use std::num::NonZeroUsize;

use carpool_core::Stop;

/// Default cap on enumerated orderings per route.
pub const DEFAULT_MAX_INTERLEAVINGS: NonZeroUsize = match NonZeroUsize::new(500) {
    Some(cap) => cap,
    None => NonZeroUsize::MIN,
};

/// Enumerate order-preserving merges of `groups`, stopping at `cap` results.
///
/// Zero groups yield no orderings and a single group yields exactly itself.
/// Otherwise orderings are produced depth first, trying groups left to right
/// at every branch point. Once `cap` orderings are recorded the walk stops,
/// so a truncated result favours orderings that take early groups first.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use geo::Coord;
/// use carpool_core::Stop;
/// use carpool_deviation::enumerate_interleavings;
///
/// let origin = Coord { x: 0.0, y: 0.0 };
/// let (a, b, c) = (Stop::new(1, origin), Stop::new(2, origin), Stop::new(3, origin));
/// let groups = vec![vec![&a, &b], vec![&c]];
/// let cap = NonZeroUsize::new(10).expect("non-zero");
///
/// let ids: Vec<Vec<u64>> = enumerate_interleavings(&groups, cap)
///     .iter()
///     .map(|ordering| ordering.iter().map(|stop| stop.id).collect())
///     .collect();
/// assert_eq!(ids, vec![vec![1, 2, 3], vec![1, 3, 2], vec![3, 1, 2]]);
/// ```
#[must_use]
pub fn enumerate_interleavings<'a>(
    groups: &[Vec<&'a Stop>],
    cap: NonZeroUsize,
) -> Vec<Vec<&'a Stop>> {
    match groups {
        [] => Vec::new(),
        [only] => vec![only.clone()],
        _ => {
            let mut walker = Walker::new(groups, cap.get());
            walker.walk();
            walker.results
        }
    }
}

/// Number of order-preserving merges of groups with the given sizes.
///
/// This is the multinomial coefficient `(n1 + ... + nk)! / (n1! ... nk!)`.
/// Returns `None` when the computation overflows a `u128`. An empty slice
/// counts the single empty merge.
///
/// # Examples
/// ```
/// use carpool_deviation::interleaving_count;
///
/// assert_eq!(interleaving_count(&[2, 1]), Some(3));
/// assert_eq!(interleaving_count(&[2, 2, 2]), Some(90));
/// assert_eq!(interleaving_count(&[200, 200]), None);
/// ```
#[must_use]
pub fn interleaving_count(group_sizes: &[usize]) -> Option<u128> {
    let mut placed: u128 = 0;
    let mut count: u128 = 1;
    for &size in group_sizes {
        let size = u128::try_from(size).ok()?;
        placed = placed.checked_add(size)?;
        count = count.checked_mul(binomial(placed, size)?)?;
    }
    Some(count)
}

/// `n` choose `k`, or `None` on overflow.
#[expect(
    clippy::integer_division,
    reason = "each partial product is divisible by its step"
)]
fn binomial(n: u128, k: u128) -> Option<u128> {
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 1..=k {
        // result * (n - k + i) / i is C(n - k + i, i), always integral.
        result = result.checked_mul(n - k + i)? / i;
    }
    Some(result)
}

struct Walker<'g, 'a> {
    groups: &'g [Vec<&'a Stop>],
    cursors: Vec<usize>,
    current: Vec<&'a Stop>,
    results: Vec<Vec<&'a Stop>>,
    cap: usize,
    total: usize,
}

impl<'g, 'a> Walker<'g, 'a> {
    fn new(groups: &'g [Vec<&'a Stop>], cap: usize) -> Self {
        let total = groups.iter().map(Vec::len).sum();
        Self {
            groups,
            cursors: vec![0; groups.len()],
            current: Vec::with_capacity(total),
            results: Vec::new(),
            cap,
            total,
        }
    }

    fn walk(&mut self) {
        if self.results.len() >= self.cap {
            return;
        }
        if self.current.len() == self.total {
            self.results.push(self.current.clone());
            return;
        }
        for index in 0..self.groups.len() {
            let Some(stop) = self.next_stop(index) else {
                continue;
            };
            self.advance(index, stop);
            self.walk();
            self.retreat(index);
        }
    }

    fn next_stop(&self, index: usize) -> Option<&'a Stop> {
        let cursor = *self.cursors.get(index)?;
        self.groups.get(index)?.get(cursor).copied()
    }

    fn advance(&mut self, index: usize, stop: &'a Stop) {
        self.current.push(stop);
        if let Some(cursor) = self.cursors.get_mut(index) {
            *cursor += 1;
        }
    }

    fn retreat(&mut self, index: usize) {
        self.current.pop();
        if let Some(cursor) = self.cursors.get_mut(index) {
            *cursor -= 1;
        }
    }
}
