use crate::RangeList;

use shared::Interval;

use tracing::instrument;

impl RangeList {
    /// Set intersection with `other`.
    #[instrument(level = "trace", skip_all)]
    pub fn intersect_with(&self, other: &Self) -> Self {
        assert_eq!(self.width, other.width, "range list bit widths don't agree");

        // Handle common cases.
        if self.is_empty() || other.is_full() {
            return self.clone();
        }
        if other.is_empty() || self.is_full() {
            return other.clone();
        }

        let lhs = self.intervals();
        let rhs = other.intervals();
        let mut result = RangeList::empty(self.width);
        let (mut i, mut j) = (0, 0);
        while i < lhs.len() && j < rhs.len() {
            let start = lhs[i].lower().max(rhs[j].lower());
            let end = lhs[i].upper().min(rhs[j].upper());
            if start < end {
                result.append_sorted_unchecked(Interval::new(self.width, start, end));
            }
            // the side ending first cannot overlap anything further on the
            // other side; ties advance the receiver
            if lhs[i].upper() <= rhs[j].upper() {
                i += 1;
            } else {
                j += 1;
            }
        }
        result
    }
}
