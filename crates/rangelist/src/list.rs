use shared::Interval;

use ahash::AHasher;
use ethers_core::types::I256;
use tracing::instrument;

use std::hash::{Hash, Hasher};
use std::mem::discriminant;

/// Storage state of a [`RangeList`].
///
/// Empty and full are explicit states rather than reserved interval values,
/// so every interval held in `Finite` is a genuine member of the set.
#[derive(Debug, Clone)]
pub(crate) enum Repr {
    Empty,
    Full,
    /// Non-empty, ascending by lower bound, pairwise disjoint and
    /// non-adjacent: `ranges[i].upper() < ranges[i + 1].lower()` strictly.
    Finite(Vec<Interval>),
}

/// An ordered list of disjoint, non-adjacent half-open intervals over one
/// signed bit-width domain, denoting the union of its members.
///
/// The list is a value type: the set operations return new instances, and
/// only [`insert_merging`](Self::insert_merging),
/// [`append_sorted_unchecked`](Self::append_sorted_unchecked) and
/// [`compute_hash`](Self::compute_hash) mutate in place. Instances are
/// attached to IR values as range metadata and compare by cached structural
/// hash so a deduplicating pool can fold identical metadata together.
#[derive(Debug, Clone)]
pub struct RangeList {
    pub(crate) width: u16,
    pub(crate) repr: Repr,
    pub(crate) hash: u64,
}

impl RangeList {
    /// The empty set over the signed `width`-bit domain.
    pub fn empty(width: u16) -> Self {
        assert!((1..=256).contains(&width), "unsupported bit width: {width}");
        Self {
            width,
            repr: Repr::Empty,
            hash: 0,
        }
    }

    /// The full set over the signed `width`-bit domain.
    pub fn full(width: u16) -> Self {
        assert!((1..=256).contains(&width), "unsupported bit width: {width}");
        Self {
            width,
            repr: Repr::Full,
            hash: 0,
        }
    }

    /// Build a one-interval list from two 64-bit literals, widened through
    /// their decimal rendering into the 64-bit working width.
    pub fn from_bounds(lower: i64, upper: i64) -> Self {
        // a decimal rendering of an i64 always re-parses
        let lower = I256::from_dec_str(&lower.to_string()).unwrap();
        let upper = I256::from_dec_str(&upper.to_string()).unwrap();
        Self {
            width: 64,
            repr: Repr::Finite(vec![Interval::new(64, lower, upper)]),
            hash: 0,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Number of stored intervals (zero in the empty and full states).
    pub fn len(&self) -> usize {
        self.intervals().len()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.repr, Repr::Empty)
    }

    pub fn is_full(&self) -> bool {
        matches!(self.repr, Repr::Full)
    }

    /// The stored intervals, ascending by lower bound.
    pub fn intervals(&self) -> &[Interval] {
        match &self.repr {
            Repr::Finite(ranges) => ranges,
            _ => &[],
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals().iter()
    }

    /// Push an interval, trusting the caller for ordering.
    ///
    /// Appending into the full set is absorbed; appending into the empty set
    /// replaces it with a one-interval list. Otherwise the interval must
    /// start strictly after the current last interval ends, which is only
    /// checked in debug builds. [`insert_merging`](Self::insert_merging) is
    /// the checked equivalent for arbitrary input.
    pub fn append_sorted_unchecked(&mut self, interval: Interval) {
        debug_assert_eq!(
            interval.width(),
            self.width,
            "interval bit width doesn't agree with the list"
        );
        match &mut self.repr {
            Repr::Full => {}
            Repr::Empty => self.repr = Repr::Finite(vec![interval]),
            Repr::Finite(ranges) => {
                debug_assert!(
                    ranges[ranges.len() - 1].upper() < interval.lower(),
                    "appended interval must start strictly after the list ends"
                );
                ranges.push(interval);
            }
        }
    }

    /// Insert one interval, coalescing with any existing intervals it
    /// touches or overlaps, and report whether the list changed.
    ///
    /// Inserting into the full set is absorbed; inserting an interval that
    /// is already present verbatim is a no-op.
    #[instrument(level = "trace", skip_all)]
    pub fn insert_merging(&mut self, interval: Interval) -> bool {
        assert_eq!(
            interval.width(),
            self.width,
            "interval bit width doesn't agree with the list"
        );
        let ranges = match &mut self.repr {
            Repr::Full => return false,
            Repr::Empty => {
                self.repr = Repr::Finite(vec![interval]);
                return true;
            }
            Repr::Finite(ranges) => ranges,
        };

        // strictly before the first interval, nothing to coalesce
        if interval.upper() < ranges[0].lower() {
            ranges.insert(0, interval);
            return true;
        }
        // strictly after the last interval
        if ranges[ranges.len() - 1].upper() < interval.lower() {
            ranges.push(interval);
            return true;
        }

        let at = ranges.partition_point(|r| r.lower() < interval.lower());
        if at < ranges.len() && ranges[at] == interval {
            return false;
        }

        let tail = ranges.split_off(at);
        match ranges.last_mut() {
            // touching intervals coalesce, so the comparison is non-strict
            Some(last) if interval.lower() <= last.upper() => {
                if last.upper() < interval.upper() {
                    *last = Interval::new(self.width, last.lower(), interval.upper());
                }
            }
            _ => ranges.push(interval),
        }
        for next in tail {
            // the prefix gained an element above, `last_mut` cannot fail
            let last = ranges.last_mut().unwrap();
            if last.upper() < next.lower() {
                ranges.push(next);
            } else if last.upper() < next.upper() {
                *last = Interval::new(self.width, last.lower(), next.upper());
            }
        }
        true
    }

    /// Refresh the cached structural hash: an order-sensitive combine over
    /// the width, the storage state, the interval count and each interval's
    /// bounds.
    ///
    /// Mutators do not refresh the hash. A caller that inserts or appends
    /// and then relies on `==` (or `Hash`) must call this first.
    pub fn compute_hash(&mut self) {
        let mut hasher = AHasher::default();
        self.width.hash(&mut hasher);
        discriminant(&self.repr).hash(&mut hasher);
        let ranges = self.intervals();
        ranges.len().hash(&mut hasher);
        for range in ranges {
            range.lower().hash(&mut hasher);
            range.upper().hash(&mut hasher);
        }
        self.hash = hasher.finish();
    }

    /// The cached structural hash (zero until the first
    /// [`compute_hash`](Self::compute_hash)).
    pub fn structural_hash(&self) -> u64 {
        self.hash
    }

    /// Element-wise equality, for callers that cannot tolerate the hash
    /// collision risk `==` accepts.
    pub fn structural_eq(&self, other: &Self) -> bool {
        if self.width != other.width {
            return false;
        }
        match (&self.repr, &other.repr) {
            (Repr::Empty, Repr::Empty) | (Repr::Full, Repr::Full) => true,
            (Repr::Finite(a), Repr::Finite(b)) => a == b,
            _ => false,
        }
    }
}

/// Equality by cached structural hash, not element-wise comparison. Two
/// lists whose hashes collide compare equal; the deduplicating pools this
/// feeds accept that as a collision-resistant approximation of equality.
/// Callers that need exactness use [`RangeList::structural_eq`].
impl PartialEq for RangeList {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for RangeList {}

impl Hash for RangeList {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl<'a> IntoIterator for &'a RangeList {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;
    fn into_iter(self) -> Self::IntoIter {
        self.intervals().iter()
    }
}
