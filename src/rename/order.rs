//! Rename ordering.
//!
//! Files are ranked by the first run of ASCII digits anywhere in their name
//! ("IMG_0042_v2.jpg" ranks 42), with unnumbered files after all numbered
//! ones. The full name breaks ties, so the order never depends on the order
//! the directory happened to be listed in.

use std::cmp::Ordering;
use std::ffi::OsStr;

use super::scan::FileEntry;

/// Digit run with leading zeros stripped ("007" and "7" are equal).
///
/// Compared by length, then lexically: the integer order, for runs of any length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digits(String);

impl Digits {
    fn new(run: &[u8]) -> Self {
        let trimmed = match run.iter().position(|&b| b != b'0') {
            Some(first) => &run[first..],
            None => &run[run.len() - 1..],
        };
        // ASCII digits only, so always valid UTF-8.
        Digits(trimmed.iter().map(|&b| b as char).collect())
    }

    /// Integer value, when it fits in a u128.
    pub fn value(&self) -> Option<u128> {
        self.0.parse().ok()
    }
}

impl Ord for Digits {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Digits {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Numeric rank of a name. `Infinite` (no digits) sorts after every `Finite`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum NumericRank {
    Finite(Digits),
    Infinite,
}

impl NumericRank {
    pub fn of(name: &OsStr) -> Self {
        let bytes = name.as_encoded_bytes();
        let Some(start) = bytes.iter().position(u8::is_ascii_digit) else {
            return NumericRank::Infinite;
        };
        let len = bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        NumericRank::Finite(Digits::new(&bytes[start..start + len]))
    }
}

/// `(rank, name)`; field order gives the derived lexicographic comparison.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey<'a> {
    pub rank: NumericRank,
    pub name: &'a OsStr,
}

impl<'a> SortKey<'a> {
    pub fn of(name: &'a OsStr) -> Self {
        SortKey {
            rank: NumericRank::of(name),
            name,
        }
    }
}

/// Sort entries into rename order.
pub fn sort_entries(entries: &mut [FileEntry]) {
    entries.sort_by_cached_key(|e| {
        let key = SortKey::of(e.name());
        (key.rank, e.name().to_os_string())
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut v: Vec<&str> = names.to_vec();
        v.sort_by(|a, b| SortKey::of(OsStr::new(a)).cmp(&SortKey::of(OsStr::new(b))));
        v.into_iter().map(String::from).collect()
    }

    fn rank(s: &str) -> Option<u128> {
        match NumericRank::of(OsStr::new(s)) {
            NumericRank::Finite(d) => d.value(),
            NumericRank::Infinite => None,
        }
    }

    #[test]
    fn first_digit_run_anywhere() {
        assert_eq!(rank("IMG_0042_v2.jpg"), Some(42));
        assert_eq!(rank("10.jpg"), Some(10));
        assert_eq!(rank("a10b20.png"), Some(10));
        assert_eq!(rank("000.png"), Some(0));
        assert_eq!(rank("cover.png"), None);
    }

    #[test]
    fn numeric_not_lexicographic() {
        assert_eq!(sorted(&["10.jpg", "2.jpg", "1.jpg"]), ["1.jpg", "2.jpg", "10.jpg"]);
    }

    #[test]
    fn worked_example() {
        assert_eq!(
            sorted(&["b2.png", "a10.png", "c.png", "a1.png"]),
            ["a1.png", "b2.png", "a10.png", "c.png"]
        );
    }

    #[test]
    fn unnumbered_last_in_name_order() {
        assert_eq!(
            sorted(&["zeta.txt", "99.txt", "alpha.txt", "m.txt"]),
            ["99.txt", "alpha.txt", "m.txt", "zeta.txt"]
        );
    }

    #[test]
    fn equal_rank_breaks_on_name() {
        assert_eq!(sorted(&["b5.png", "a05.png", "c5.png"]), ["a05.png", "b5.png", "c5.png"]);
    }

    #[test]
    fn huge_runs_order_by_magnitude() {
        let big = "123456789012345678901234567890123456789012.png";
        assert_eq!(rank(big), None, "42 digits overflow u128");
        assert_eq!(sorted(&[big, "99999.png"]), ["99999.png", big]);
        assert_eq!(
            sorted(&["2000000000000000000000000000000000000000000.png", big]),
            [big, "2000000000000000000000000000000000000000000.png"]
        );
    }

    #[test]
    fn sort_is_deterministic_across_input_orders() {
        let a = ["x3.png", "x03.png", "q.png", "1.png", "b.png", "x3.jpg"];
        let mut b = a;
        b.reverse();
        let once = sorted(&a);
        assert_eq!(once, sorted(&b));
        assert_eq!(once, ["1.png", "x03.png", "x3.jpg", "x3.png", "b.png", "q.png"]);
    }

    #[test]
    fn sort_entries_uses_key() {
        let mut entries: Vec<FileEntry> = ["c.png", "a10.png", "a1.png", "b2.png"]
            .into_iter()
            .map(|n| FileEntry::new(OsString::from(n)))
            .collect();
        sort_entries(&mut entries);
        let names: Vec<_> = entries.iter().map(|e| e.name().to_str().unwrap()).collect();
        assert_eq!(names, ["a1.png", "b2.png", "a10.png", "c.png"]);
    }
}
