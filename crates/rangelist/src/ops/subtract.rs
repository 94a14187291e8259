use crate::RangeList;

use tracing::instrument;

impl RangeList {
    /// Set difference `self \ other`, as intersection with the complement.
    #[instrument(level = "trace", skip_all)]
    pub fn subtract_with(&self, other: &Self) -> Self {
        assert_eq!(self.width, other.width, "range list bit widths don't agree");

        // Handle common cases.
        if self.is_empty() || other.is_full() {
            return RangeList::empty(self.width);
        }
        if other.is_empty() {
            return self.clone();
        }
        if self.is_full() {
            return other.inverse();
        }
        self.intersect_with(&other.inverse())
    }
}

#[cfg(test)]
mod tests {
    use crate::list::test_util::*;
    use crate::RangeList;

    #[test]
    fn subtracting_empty_is_identity() {
        let a = list8(&[(0, 5), (10, 15)]);
        assert!(a.subtract_with(&RangeList::empty(8)).structural_eq(&a));
    }

    #[test]
    fn subtracting_full_leaves_nothing() {
        let a = list8(&[(0, 5)]);
        assert!(a.subtract_with(&RangeList::full(8)).is_empty());
    }

    #[test]
    fn empty_receiver_stays_empty() {
        let empty = RangeList::empty(8);
        let b = list8(&[(0, 5)]);
        assert!(empty.subtract_with(&b).is_empty());
    }

    #[test]
    fn full_receiver_becomes_the_complement() {
        let full = RangeList::full(8);
        let b = list8(&[(0, 10)]);
        assert!(full.subtract_with(&b).structural_eq(&b.inverse()));
    }

    #[test]
    fn carves_a_hole() {
        let a = list8(&[(0, 10)]);
        let b = list8(&[(3, 5)]);
        let result = a.subtract_with(&b);
        assert_eq!(result.intervals(), &[iv8(0, 3), iv8(5, 10)]);
        assert_canonical(&result);
    }

    #[test]
    fn matches_intersection_with_complement() {
        let cases = [
            (vec![(0i64, 10i64), (20, 30)], vec![(5i64, 25i64)]),
            (vec![(-50, -40), (0, 5)], vec![(-45, 2)]),
            (vec![(0, 5)], vec![(10, 15)]),
        ];
        for (lhs, rhs) in cases {
            let a = list8(&lhs);
            let b = list8(&rhs);
            assert!(a
                .subtract_with(&b)
                .structural_eq(&a.intersect_with(&b.inverse())));
        }
    }

    #[test]
    #[should_panic(expected = "don't agree")]
    fn width_mismatch_is_fatal() {
        let a = list64(&[(0, 5)]);
        let b = list8(&[(0, 5)]);
        a.subtract_with(&b);
    }
}
