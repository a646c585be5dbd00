/// An ordered, immutable sequence of digit values, one per battery in a bank.
///
/// Each puzzle-input line maps to one bank. Digits keep their positional
/// identity; selections over a bank must preserve left-to-right order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bank {
    digits: Vec<u8>,
}

impl Bank {
    /// Builds a bank from raw digit values, each in `0..=9`.
    pub fn new(digits: Vec<u8>) -> Self {
        debug_assert!(digits.iter().all(|&d| d <= 9), "digit out of range");
        Self { digits }
    }

    /// Builds a bank from one line of ASCII digit characters.
    ///
    /// The parse layer guarantees the line contains only `0-9`.
    pub fn from_line(line: &str) -> Self {
        Self::new(line.bytes().map(|b| b - b'0').collect())
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}
