//! Term (bound) tables: each sign split into five unequal segments, one per
//! non-luminary planet.

use serde::{Deserialize, Serialize};

use crate::chart::ids::{JUPITER, MARS, MERCURY, SATURN, VENUS};
use crate::error::{Result, UraniaError};
use crate::zodiac::Sign;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TermEntry {
    pub sign: Sign,
    pub body: String,
    /// Degree within the sign where the term starts, [0, 30)
    pub start: f64,
}

impl TermEntry {
    /// Absolute ecliptic longitude of the term's start.
    pub fn longitude(&self) -> f64 {
        self.sign.start() + self.start
    }
}

/// (sign, ruler, start degree) in zodiac order.
const EGYPTIAN: &[(Sign, &str, f64)] = &[
    (Sign::Aries, JUPITER, 0.0),
    (Sign::Aries, VENUS, 6.0),
    (Sign::Aries, MERCURY, 12.0),
    (Sign::Aries, MARS, 20.0),
    (Sign::Aries, SATURN, 25.0),
    (Sign::Taurus, VENUS, 0.0),
    (Sign::Taurus, MERCURY, 8.0),
    (Sign::Taurus, JUPITER, 14.0),
    (Sign::Taurus, SATURN, 22.0),
    (Sign::Taurus, MARS, 27.0),
    (Sign::Gemini, MERCURY, 0.0),
    (Sign::Gemini, JUPITER, 6.0),
    (Sign::Gemini, VENUS, 12.0),
    (Sign::Gemini, MARS, 17.0),
    (Sign::Gemini, SATURN, 24.0),
    (Sign::Cancer, MARS, 0.0),
    (Sign::Cancer, VENUS, 7.0),
    (Sign::Cancer, MERCURY, 13.0),
    (Sign::Cancer, JUPITER, 19.0),
    (Sign::Cancer, SATURN, 26.0),
    (Sign::Leo, JUPITER, 0.0),
    (Sign::Leo, VENUS, 6.0),
    (Sign::Leo, SATURN, 11.0),
    (Sign::Leo, MERCURY, 18.0),
    (Sign::Leo, MARS, 24.0),
    (Sign::Virgo, MERCURY, 0.0),
    (Sign::Virgo, VENUS, 7.0),
    (Sign::Virgo, JUPITER, 17.0),
    (Sign::Virgo, MARS, 21.0),
    (Sign::Virgo, SATURN, 28.0),
    (Sign::Libra, SATURN, 0.0),
    (Sign::Libra, MERCURY, 6.0),
    (Sign::Libra, JUPITER, 14.0),
    (Sign::Libra, VENUS, 21.0),
    (Sign::Libra, MARS, 28.0),
    (Sign::Scorpio, MARS, 0.0),
    (Sign::Scorpio, VENUS, 7.0),
    (Sign::Scorpio, MERCURY, 11.0),
    (Sign::Scorpio, JUPITER, 19.0),
    (Sign::Scorpio, SATURN, 24.0),
    (Sign::Sagittarius, JUPITER, 0.0),
    (Sign::Sagittarius, VENUS, 12.0),
    (Sign::Sagittarius, MERCURY, 17.0),
    (Sign::Sagittarius, SATURN, 21.0),
    (Sign::Sagittarius, MARS, 26.0),
    (Sign::Capricorn, MERCURY, 0.0),
    (Sign::Capricorn, JUPITER, 7.0),
    (Sign::Capricorn, VENUS, 14.0),
    (Sign::Capricorn, SATURN, 22.0),
    (Sign::Capricorn, MARS, 26.0),
    (Sign::Aquarius, MERCURY, 0.0),
    (Sign::Aquarius, VENUS, 7.0),
    (Sign::Aquarius, JUPITER, 13.0),
    (Sign::Aquarius, MARS, 20.0),
    (Sign::Aquarius, SATURN, 25.0),
    (Sign::Pisces, VENUS, 0.0),
    (Sign::Pisces, JUPITER, 12.0),
    (Sign::Pisces, MERCURY, 16.0),
    (Sign::Pisces, MARS, 19.0),
    (Sign::Pisces, SATURN, 28.0),
];

lazy_static::lazy_static! {
    static ref EGYPTIAN_TERMS: TermTable = TermTable {
        entries: EGYPTIAN
            .iter()
            .map(|(sign, body, start)| TermEntry {
                sign: *sign,
                body: body.to_string(),
                start: *start,
            })
            .collect(),
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermTable {
    entries: Vec<TermEntry>,
}

impl TermTable {
    /// Builds a validated table. Entries are kept in the given order.
    pub fn new(entries: Vec<TermEntry>) -> Result<Self> {
        let table = Self { entries };
        table.validate()?;
        Ok(table)
    }

    pub fn egyptian() -> Self {
        EGYPTIAN_TERMS.clone()
    }

    pub fn entries(&self) -> &[TermEntry] {
        &self.entries
    }

    /// Longitude where `body` starts its term in `sign`.
    pub fn lookup(&self, body: &str, sign: Sign) -> Result<f64> {
        self.entries
            .iter()
            .find(|entry| entry.sign == sign && entry.body == body)
            .map(TermEntry::longitude)
            .ok_or_else(|| UraniaError::not_found("term table", format!("{} in {}", body, sign)))
    }

    /// Every sign must be covered, starts must rise within [0, 30) and a body
    /// may rule only one term per sign.
    pub fn validate(&self) -> Result<()> {
        for sign in Sign::ALL {
            let terms: Vec<&TermEntry> = self.entries.iter().filter(|e| e.sign == sign).collect();
            if terms.is_empty() {
                return Err(UraniaError::InvalidTermTable {
                    message: format!("{} has no terms", sign),
                });
            }
            for (i, term) in terms.iter().enumerate() {
                if !term.start.is_finite() || !(0.0..30.0).contains(&term.start) {
                    return Err(UraniaError::InvalidTermTable {
                        message: format!("{} in {} starts at {}", term.body, sign, term.start),
                    });
                }
                if term.body.is_empty() {
                    return Err(UraniaError::InvalidTermTable {
                        message: format!("term at {} in {} has no body", term.start, sign),
                    });
                }
                if let Some(prev) = i.checked_sub(1).map(|j| terms[j]) {
                    if prev.start >= term.start {
                        return Err(UraniaError::InvalidTermTable {
                            message: format!("terms of {} are not in ascending order", sign),
                        });
                    }
                }
                if terms[..i].iter().any(|other| other.body == term.body) {
                    return Err(UraniaError::InvalidTermTable {
                        message: format!("{} rules two terms in {}", term.body, sign),
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for TermTable {
    fn default() -> Self {
        Self::egyptian()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_egyptian_is_valid() {
        let table = TermTable::egyptian();
        assert!(table.validate().is_ok());
        assert_eq!(table.entries().len(), 60);
    }

    #[test]
    fn test_lookup() {
        let table = TermTable::egyptian();
        assert_eq!(table.lookup(VENUS, Sign::Aries).unwrap(), 6.0);
        assert_eq!(table.lookup(SATURN, Sign::Pisces).unwrap(), 358.0);
        assert!(matches!(
            table.lookup("sun", Sign::Leo),
            Err(UraniaError::NotFound { .. })
        ));
    }

    #[test]
    fn test_missing_sign_is_invalid() {
        let entries = TermTable::egyptian()
            .entries()
            .iter()
            .filter(|e| e.sign != Sign::Leo)
            .cloned()
            .collect();
        assert!(matches!(
            TermTable::new(entries),
            Err(UraniaError::InvalidTermTable { .. })
        ));
    }

    #[test]
    fn test_duplicate_body_is_invalid() {
        let mut entries = TermTable::egyptian().entries().to_vec();
        entries[1].body = JUPITER.to_string();
        assert!(TermTable::new(entries).is_err());
    }
}
