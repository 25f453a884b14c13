// src/process/months.rs

/// One calendar month as the feed labels it: the monthly columns carry
/// Roman-numeral headers I..XII.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month {
    pub name: &'static str,
    pub roman: &'static str,
}

pub const MONTHS: [Month; 12] = [
    Month { name: "January", roman: "I" },
    Month { name: "February", roman: "II" },
    Month { name: "March", roman: "III" },
    Month { name: "April", roman: "IV" },
    Month { name: "May", roman: "V" },
    Month { name: "June", roman: "VI" },
    Month { name: "July", roman: "VII" },
    Month { name: "August", roman: "VIII" },
    Month { name: "September", roman: "IX" },
    Month { name: "October", roman: "X" },
    Month { name: "November", roman: "XI" },
    Month { name: "December", roman: "XII" },
];

/// Month for a zero-based index (0 = January), `None` past 11.
pub fn by_index(month: usize) -> Option<&'static Month> {
    MONTHS.get(month)
}
