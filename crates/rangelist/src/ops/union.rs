use crate::RangeList;

use shared::Interval;

use tracing::instrument;

impl RangeList {
    /// Set union with `other`.
    ///
    /// Touching intervals coalesce, matching
    /// [`insert_merging`](Self::insert_merging), so the result is canonical.
    #[instrument(level = "trace", skip_all)]
    pub fn union_with(&self, other: &Self) -> Self {
        assert_eq!(self.width, other.width, "range list bit widths don't agree");

        // Handle common cases.
        if self.is_empty() || other.is_full() {
            return other.clone();
        }
        if other.is_empty() || self.is_full() {
            return self.clone();
        }

        let lhs = self.intervals();
        let rhs = other.intervals();
        let mut result = RangeList::empty(self.width);
        let (mut i, mut j) = (0, 0);
        let mut current = if lhs[0].lower() < rhs[0].lower() {
            i += 1;
            lhs[0]
        } else {
            j += 1;
            rhs[0]
        };
        while i < lhs.len() || j < rhs.len() {
            let next = if j == rhs.len() || (i < lhs.len() && lhs[i].lower() < rhs[j].lower()) {
                i += 1;
                lhs[i - 1]
            } else {
                j += 1;
                rhs[j - 1]
            };
            if current.upper() < next.lower() {
                result.append_sorted_unchecked(current);
                current = next;
            } else if current.upper() < next.upper() {
                // touching or overlapping, keep the larger upper bound
                current = Interval::new(self.width, current.lower(), next.upper());
            }
        }
        result.append_sorted_unchecked(current);
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::list::test_util::*;
    use crate::RangeList;

    #[test]
    fn empty_is_identity() {
        let a = list64(&[(0, 5), (10, 15)]);
        let empty = RangeList::empty(64);
        assert!(a.union_with(&empty).structural_eq(&a));
        assert!(empty.union_with(&a).structural_eq(&a));
    }

    #[test]
    fn full_absorbs() {
        let a = list64(&[(0, 5)]);
        let full = RangeList::full(64);
        assert!(a.union_with(&full).is_full());
        assert!(full.union_with(&a).is_full());
    }

    #[test]
    fn union_with_self_is_idempotent() {
        let a = list64(&[(0, 5), (10, 15)]);
        assert!(a.union_with(&a).structural_eq(&a));
    }

    #[test]
    fn bridging_interval_merges_both_sides() {
        let a = list64(&[(0, 5), (10, 15)]);
        let b = list64(&[(3, 12)]);
        let result = a.union_with(&b);
        assert_eq!(result.intervals(), &[iv64(0, 15)]);
        assert_canonical(&result);
    }

    #[test]
    fn touching_intervals_coalesce() {
        let a = list64(&[(0, 5)]);
        let b = list64(&[(5, 10)]);
        assert_eq!(a.union_with(&b).intervals(), &[iv64(0, 10)]);
    }

    #[test]
    fn disjoint_intervals_interleave() {
        let a = list64(&[(0, 2), (8, 10)]);
        let b = list64(&[(4, 6)]);
        let result = a.union_with(&b);
        assert_eq!(result.intervals(), &[iv64(0, 2), iv64(4, 6), iv64(8, 10)]);
        assert_canonical(&result);
    }

    #[test]
    fn nested_interval_keeps_outer_bounds() {
        let a = list64(&[(0, 10)]);
        let b = list64(&[(2, 4)]);
        assert_eq!(a.union_with(&b).intervals(), &[iv64(0, 10)]);
        assert_eq!(b.union_with(&a).intervals(), &[iv64(0, 10)]);
    }

    #[test]
    fn exhausts_longer_tail() {
        let a = list64(&[(0, 2)]);
        let b = list64(&[(4, 6), (8, 10), (12, 14)]);
        let result = a.union_with(&b);
        assert_eq!(
            result.intervals(),
            &[iv64(0, 2), iv64(4, 6), iv64(8, 10), iv64(12, 14)]
        );
    }

    #[test]
    #[should_panic(expected = "don't agree")]
    fn width_mismatch_is_fatal() {
        let a = list64(&[(0, 5)]);
        let b = list8(&[(0, 5)]);
        a.union_with(&b);
    }
}
