//! Privacy masking utilities.
//!
//! Pure string transforms that reveal a small fixed fragment of a value
//! and replace the rest with a fixed mask token. Deterministic, no state.

const MASK: &str = "****";

/// Reveal the first and last character of a name.
///
/// Names of two characters or fewer are returned unchanged; there is
/// nothing left to hide once both ends are revealed.
pub fn mask_name(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= 2 {
        return name.to_string();
    }
    format!(
        "{}{}{}",
        chars[0],
        MASK,
        chars[chars.len() - 1]
    )
}

/// Reveal the last four digits of a phone number.
pub fn mask_phone(phone: &str) -> String {
    let digits: Vec<char> = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() <= 4 {
        return format!("{}{}", MASK, digits.iter().collect::<String>());
    }
    let last_four: String = digits[digits.len() - 4..].iter().collect();
    format!("{}{}", MASK, last_four)
}

/// Reveal the domain of an email address.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((_, domain)) => format!("{}@{}", MASK, domain),
        None => MASK.to_string(),
    }
}

/// Reveal the city (the final comma-separated segment) of an address.
pub fn mask_address(address: &str) -> String {
    match address.rsplit_once(',') {
        Some((_, city)) => format!("{}, {}", MASK, city.trim()),
        None => MASK.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_name() {
        assert_eq!(mask_name("Ananya"), "A****a");
        assert_eq!(mask_name("Om"), "Om");
        assert_eq!(mask_name(""), "");
    }

    #[test]
    fn test_mask_phone_keeps_last_four_digits() {
        assert_eq!(mask_phone("+91 98765 43210"), "****3210");
        assert_eq!(mask_phone("43210"), "****3210");
        assert_eq!(mask_phone("21"), "****21");
    }

    #[test]
    fn test_mask_email_keeps_domain() {
        assert_eq!(mask_email("ananya.iyer@example.com"), "****@example.com");
        assert_eq!(mask_email("not-an-email"), "****");
    }

    #[test]
    fn test_mask_address_keeps_city() {
        assert_eq!(mask_address("12 Temple Road, Madurai"), "****, Madurai");
        assert_eq!(mask_address("Madurai"), "****");
    }

    #[test]
    fn test_masking_is_deterministic() {
        assert_eq!(mask_phone("+91 98765 43210"), mask_phone("+91 98765 43210"));
    }
}
