//! Name masking and phone normalisation.

use crate::constants::MASK_CHAR;

/// Hide all but the first character of a patient name.
///
/// Names of zero or one character are returned unchanged. Longer names keep their first
/// character and replace each remaining character with [`MASK_CHAR`], so the result has the
/// same number of characters as the input.
pub fn mask_name(name: &str) -> String {
    let mut chars = name.chars();
    match (chars.next(), chars.clone().next()) {
        (Some(first), Some(_)) => {
            let mut masked = String::with_capacity(name.len());
            masked.push(first);
            masked.extend(chars.map(|_| MASK_CHAR));
            masked
        }
        _ => name.to_string(),
    }
}

/// Strip hyphens and whitespace from a phone number.
///
/// Digits, parentheses, plus signs and country codes are left as they are.
pub fn normalize_phone(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect()
}

/// Compare a supplied phone number with the stored one after normalisation.
pub fn phones_match(supplied: &str, stored: &str) -> bool {
    normalize_phone(supplied) == normalize_phone(stored)
}
