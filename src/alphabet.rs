//! Base58 alphabets.
//! Forward (digit -> symbol) and reverse (byte -> digit) tables are built at
//! compile time; building panics at compile time on a malformed alphabet.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Marker in the reverse table for bytes outside the alphabet.
pub const INVALID: u8 = 0xFF;

/// Bitcoin alphabet, also used by Bitcoin SV, IPFS and Solana.
pub const BITCOIN: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Ripple (XRP Ledger) alphabet.
pub const RIPPLE: &[u8; 58] = b"rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz";

static BITCOIN_TABLE: Table = Table::new(BITCOIN);
static RIPPLE_TABLE: Table = Table::new(RIPPLE);

/// Selects one of the built-in symbol tables.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Alphabet {
    #[default]
    Bitcoin,
    Ripple,
}

impl Alphabet {
    pub const ALL: [Alphabet; 2] = [Alphabet::Bitcoin, Alphabet::Ripple];

    #[must_use]
    #[inline]
    pub fn table(self) -> &'static Table {
        match self {
            Alphabet::Bitcoin => &BITCOIN_TABLE,
            Alphabet::Ripple => &RIPPLE_TABLE,
        }
    }

    /// Symbol for digit 0, emitted once per leading zero byte.
    #[must_use]
    #[inline]
    pub fn zero_symbol(self) -> u8 {
        self.table().symbols[0]
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Alphabet::Bitcoin => "bitcoin",
            Alphabet::Ripple => "ripple",
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Alphabet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Alphabet::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownAlphabet(s.to_owned()))
    }
}

/// Bijective mapping between the 58 symbols and digit values 0..58.
#[derive(Debug)]
pub struct Table {
    symbols: [u8; 58],
    values: [u8; 256],
}

impl Table {
    const fn new(symbols: &[u8; 58]) -> Self {
        let mut values = [INVALID; 256];
        let mut i = 0;
        while i < 58 {
            let ch = symbols[i];
            assert!(ch.is_ascii_graphic(), "alphabet symbols must be printable ASCII");
            assert!(values[ch as usize] == INVALID, "duplicate symbol in alphabet");
            #[allow(clippy::cast_possible_truncation)]
            {
                values[ch as usize] = i as u8;
            }
            i += 1;
        }
        Table {
            symbols: *symbols,
            values,
        }
    }

    #[must_use]
    #[inline]
    pub fn symbols(&self) -> &[u8; 58] {
        &self.symbols
    }

    /// Symbol for `digit`. `digit` must be below 58.
    #[must_use]
    #[inline]
    pub fn symbol(&self, digit: u8) -> u8 {
        self.symbols[usize::from(digit)]
    }

    /// Digit value of `byte`, or `None` when it is not in the alphabet.
    #[must_use]
    #[inline]
    pub fn value(&self, byte: u8) -> Option<u8> {
        match self.values[usize::from(byte)] {
            INVALID => None,
            v => Some(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_bijective() {
        for alphabet in Alphabet::ALL {
            let table = alphabet.table();
            let mut valid = 0;
            for byte in 0..=255u8 {
                if let Some(v) = table.value(byte) {
                    assert_eq!(table.symbol(v), byte);
                    valid += 1;
                }
            }
            assert_eq!(valid, 58, "{alphabet}");
            for digit in 0..58u8 {
                assert_eq!(table.value(table.symbol(digit)), Some(digit));
            }
        }
    }

    #[test]
    fn ambiguous_symbols_rejected() {
        let table = Alphabet::Bitcoin.table();
        for ch in [b'0', b'O', b'I', b'l', b'+', b'/', 0, 0x80, 0xFF] {
            assert_eq!(table.value(ch), None);
        }
    }

    #[test]
    fn zero_symbols() {
        assert_eq!(Alphabet::Bitcoin.zero_symbol(), b'1');
        assert_eq!(Alphabet::Ripple.zero_symbol(), b'r');
        assert_eq!(Alphabet::default(), Alphabet::Bitcoin);
    }

    #[test]
    fn names_round_trip() {
        for alphabet in Alphabet::ALL {
            assert_eq!(alphabet.to_string().parse::<Alphabet>(), Ok(alphabet));
        }
        assert_eq!("XRP".parse::<Alphabet>(), Err(Error::UnknownAlphabet("XRP".into())));
        assert_eq!("Ripple".parse::<Alphabet>(), Ok(Alphabet::Ripple));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_names() {
        assert_eq!(serde_json::to_string(&Alphabet::Ripple).unwrap(), "\"ripple\"");
        let parsed: Alphabet = serde_json::from_str("\"bitcoin\"").unwrap();
        assert_eq!(parsed, Alphabet::Bitcoin);
    }
}
