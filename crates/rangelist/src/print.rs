use crate::list::{RangeList, Repr};

use itertools::Itertools;

use std::fmt;
use std::io::{self, Write};

impl fmt::Display for RangeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Full => write!(f, "full-set"),
            Repr::Empty => write!(f, "empty-set"),
            Repr::Finite(ranges) => {
                write!(f, "{}", ranges.iter().map(|r| r.to_string()).join(", "))
            }
        }
    }
}

impl RangeList {
    /// Write `prefix` followed by the textual form to `w`.
    pub fn print<W: Write>(&self, w: &mut W, prefix: &str) -> io::Result<()> {
        write!(w, "{prefix}{self}")
    }

    /// Print the textual form and a newline to stderr. Debug builds only.
    #[cfg(debug_assertions)]
    pub fn dump(&self) {
        eprintln!("{self}");
    }
}
