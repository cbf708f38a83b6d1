use once_cell::sync::Lazy;
use regex::Regex;

static POSTAL_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{3}$").unwrap());

/// Shipping charged before the customer asks for a quote.
pub const DEFAULT_SHIPPING_CENTS: u32 = 200;

/// Normalizes free-form input towards `####-###` as the user types.
pub fn format_postal_code(input: &str) -> String {
    let mut value: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect();
    if value.len() > 4 && !value.contains('-') {
        value.insert(4, '-');
    }
    value.truncate(8);
    value
}

pub fn is_valid_postal_code(code: &str) -> bool {
    POSTAL_CODE.is_match(code)
}

/// Flat rate by region, keyed on the first digit of the postal code.
pub fn quote_shipping(code: &str) -> Option<u32> {
    if !is_valid_postal_code(code) {
        return None;
    }
    let region = code.chars().next()?.to_digit(10)?;
    Some(match region {
        6..=9 => 300,
        0 | 1 => 150,
        _ => DEFAULT_SHIPPING_CENTS,
    })
}

pub fn format_euros(cents: u32) -> String {
    if cents % 100 == 0 {
        format!("{}€", cents / 100)
    } else {
        format!("{}.{:02}€", cents / 100, cents % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_inserts_hyphen_and_truncates() {
        assert_eq!(format_postal_code("1000100"), "1000-100");
        assert_eq!(format_postal_code("1000-1001"), "1000-100");
        assert_eq!(format_postal_code("ab12"), "12");
        assert_eq!(format_postal_code("4700 123"), "4700-123");
    }

    #[test]
    fn validation_requires_full_code() {
        assert!(is_valid_postal_code("1000-100"));
        assert!(!is_valid_postal_code("1000-10"));
        assert!(!is_valid_postal_code("100-1000"));
    }

    #[test]
    fn quote_depends_on_region() {
        assert_eq!(quote_shipping("1000-100"), Some(150));
        assert_eq!(quote_shipping("4700-123"), Some(200));
        assert_eq!(quote_shipping("8000-001"), Some(300));
        assert_eq!(quote_shipping("8000"), None);
    }

    #[test]
    fn euros_drop_zero_cents() {
        assert_eq!(format_euros(200), "2€");
        assert_eq!(format_euros(150), "1.50€");
        assert_eq!(format_euros(7450), "74.50€");
    }
}
