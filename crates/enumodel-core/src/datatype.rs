//! Value datatypes attributes can declare.

use std::cmp::Ordering;

/// A value datatype, resolvable by qualified name at lookup time.
///
/// Attributes store the datatype name as a string and re-resolve it when
/// needed, so a dangling datatype name is a validation finding rather than an
/// unrepresentable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueDatatype {
    /// UTF-8 string.
    String,
    /// 32-bit signed integer.
    Integer,
    /// 64-bit signed integer.
    Long,
    /// Decimal number.
    Decimal,
    /// Boolean value, `true` or `false`.
    Boolean,
    /// Amount plus ISO currency code, e.g. `10.00 EUR`.
    Money,
}

impl ValueDatatype {
    /// All registered datatypes.
    pub const ALL: &'static [ValueDatatype] = &[
        ValueDatatype::String,
        ValueDatatype::Integer,
        ValueDatatype::Long,
        ValueDatatype::Decimal,
        ValueDatatype::Boolean,
        ValueDatatype::Money,
    ];

    /// Resolve a datatype by its qualified name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "String" => Some(ValueDatatype::String),
            "Integer" => Some(ValueDatatype::Integer),
            "Long" => Some(ValueDatatype::Long),
            "Decimal" => Some(ValueDatatype::Decimal),
            "Boolean" => Some(ValueDatatype::Boolean),
            "Money" => Some(ValueDatatype::Money),
            _ => None,
        }
    }

    /// The qualified name of this datatype.
    pub fn name(&self) -> &'static str {
        match self {
            ValueDatatype::String => "String",
            ValueDatatype::Integer => "Integer",
            ValueDatatype::Long => "Long",
            ValueDatatype::Decimal => "Decimal",
            ValueDatatype::Boolean => "Boolean",
            ValueDatatype::Money => "Money",
        }
    }

    /// Check whether a raw string parses as an instance of this datatype.
    ///
    /// The empty string parses for every datatype. Absence of a value is not
    /// a parse failure.
    pub fn is_parsable(&self, raw: &str) -> bool {
        if raw.is_empty() {
            return true;
        }
        match self {
            ValueDatatype::String => true,
            ValueDatatype::Integer => raw.parse::<i32>().is_ok(),
            ValueDatatype::Long => raw.parse::<i64>().is_ok(),
            ValueDatatype::Decimal => raw.parse::<f64>().is_ok(),
            ValueDatatype::Boolean => matches!(raw, "true" | "false"),
            ValueDatatype::Money => parse_money(raw).is_some(),
        }
    }

    /// Check whether this datatype defines a total order usable for
    /// boundary comparisons.
    pub fn supports_compare(&self) -> bool {
        // Money compares only within one currency, which is still enough
        // for a boundary check against a fixed boundary value.
        true
    }

    /// Compare two raw values under this datatype.
    ///
    /// Returns `None` when either operand does not parse, or when the
    /// operands are not comparable (money amounts in different currencies).
    pub fn compare(&self, a: &str, b: &str) -> Option<Ordering> {
        match self {
            ValueDatatype::String => Some(a.cmp(b)),
            ValueDatatype::Integer => Some(a.parse::<i32>().ok()?.cmp(&b.parse::<i32>().ok()?)),
            ValueDatatype::Long => Some(a.parse::<i64>().ok()?.cmp(&b.parse::<i64>().ok()?)),
            ValueDatatype::Decimal => a.parse::<f64>().ok()?.partial_cmp(&b.parse::<f64>().ok()?),
            ValueDatatype::Boolean => {
                let parse = |s: &str| match s {
                    "true" => Some(true),
                    "false" => Some(false),
                    _ => None,
                };
                Some(parse(a)?.cmp(&parse(b)?))
            }
            ValueDatatype::Money => {
                let (amount_a, currency_a) = parse_money(a)?;
                let (amount_b, currency_b) = parse_money(b)?;
                if currency_a != currency_b {
                    return None;
                }
                amount_a.partial_cmp(&amount_b)
            }
        }
    }
}

/// Parse a money literal of the form `<amount> <CURRENCY>`.
fn parse_money(raw: &str) -> Option<(f64, &str)> {
    let (amount, currency) = raw.split_once(' ')?;
    if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_uppercase()) {
        return None;
    }
    Some((amount.parse::<f64>().ok()?, currency))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_by_name() {
        assert_eq!(ValueDatatype::from_name("Integer"), Some(ValueDatatype::Integer));
        assert_eq!(ValueDatatype::from_name("Money"), Some(ValueDatatype::Money));
        assert_eq!(ValueDatatype::from_name("Uuid"), None);
        for datatype in ValueDatatype::ALL {
            assert_eq!(ValueDatatype::from_name(datatype.name()), Some(*datatype));
        }
    }

    #[test]
    fn test_parsable() {
        assert!(ValueDatatype::Integer.is_parsable("42"));
        assert!(!ValueDatatype::Integer.is_parsable("42x"));
        assert!(ValueDatatype::Boolean.is_parsable("true"));
        assert!(!ValueDatatype::Boolean.is_parsable("yes"));
        assert!(ValueDatatype::Money.is_parsable("10.00 EUR"));
        assert!(!ValueDatatype::Money.is_parsable("10.00"));
        assert!(ValueDatatype::Decimal.is_parsable("3.14"));
    }

    #[test]
    fn test_empty_string_always_parses() {
        for datatype in ValueDatatype::ALL {
            assert!(datatype.is_parsable(""));
        }
    }

    #[test]
    fn test_compare_numeric() {
        assert_eq!(ValueDatatype::Integer.compare("5", "10"), Some(Ordering::Less));
        assert_eq!(ValueDatatype::Integer.compare("10", "10"), Some(Ordering::Equal));
        assert_eq!(ValueDatatype::Integer.compare("a", "10"), None);
        assert_eq!(ValueDatatype::Decimal.compare("2.5", "2.50"), Some(Ordering::Equal));
    }

    #[test]
    fn test_compare_money() {
        assert_eq!(
            ValueDatatype::Money.compare("9.99 EUR", "10.00 EUR"),
            Some(Ordering::Less)
        );
        assert_eq!(ValueDatatype::Money.compare("9.99 EUR", "10.00 USD"), None);
    }
}
