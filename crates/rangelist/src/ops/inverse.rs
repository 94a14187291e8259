use crate::RangeList;

use shared::{signed_max_value, signed_min_value, Interval};

use tracing::instrument;

impl RangeList {
    /// Set complement within the signed `width`-bit domain.
    ///
    /// The domain's maximum value is excluded from any complement: stored
    /// upper bounds are exclusive and cap at the domain maximum, so the
    /// trailing gap ends just below it.
    #[instrument(level = "trace", skip_all)]
    pub fn inverse(&self) -> Self {
        if self.is_empty() {
            return RangeList::full(self.width);
        }
        if self.is_full() {
            return RangeList::empty(self.width);
        }

        let mut result = RangeList::empty(self.width);
        let mut gap_start = signed_min_value(self.width);
        for range in self.intervals() {
            if range.lower() != gap_start {
                result.append_sorted_unchecked(Interval::new(
                    self.width,
                    gap_start,
                    range.lower(),
                ));
            }
            gap_start = range.upper();
        }
        let domain_end = signed_max_value(self.width);
        if gap_start < domain_end {
            result.append_sorted_unchecked(Interval::new(self.width, gap_start, domain_end));
        }
        result
    }
}
