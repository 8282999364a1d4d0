//! Product draft validation.
//!
//! Rules run in a fixed order and stop at the first failure, so the user
//! always sees a single message for the earliest problem in the form.

use crate::product::{Category, Product, ProductDraft};

pub const MIN_NAME_CHARS: usize = 3;
pub const MIN_DESCRIPTION_CHARS: usize = 10;
pub const MIN_PRICE: f64 = 0.01;
pub const MAX_PRICE: f64 = 1_000_000.0;

/// The first rule a draft breaks. `Display` is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Product name is required.")]
    NameRequired,
    #[error("Product name cannot be only numbers.")]
    NameNumeric,
    #[error("Product name must have at least 3 characters.")]
    NameTooShort,
    #[error("Description is required.")]
    DescriptionRequired,
    #[error("Description must have at least 10 characters.")]
    DescriptionTooShort,
    #[error("Price is required and must be a number.")]
    PriceNotNumeric,
    #[error("Price must be between R$ 0,01 and R$ 1.000.000,00.")]
    PriceOutOfRange,
    #[error("Product image is required.")]
    ImageRequired,
    #[error("Select a valid category.")]
    CategoryInvalid,
}

struct Rule {
    passes: fn(&ProductDraft) -> bool,
    error: ValidationError,
}

const RULES: [Rule; 9] = [
    Rule {
        passes: |d| !d.name.trim().is_empty(),
        error: ValidationError::NameRequired,
    },
    Rule {
        passes: |d| !is_numeric(d.name.trim()),
        error: ValidationError::NameNumeric,
    },
    Rule {
        passes: |d| d.name.trim().chars().count() >= MIN_NAME_CHARS,
        error: ValidationError::NameTooShort,
    },
    Rule {
        passes: |d| !d.description.trim().is_empty(),
        error: ValidationError::DescriptionRequired,
    },
    Rule {
        passes: |d| d.description.trim().chars().count() >= MIN_DESCRIPTION_CHARS,
        error: ValidationError::DescriptionTooShort,
    },
    Rule {
        passes: |d| parse_price(&d.price).is_some_and(|p| p != 0.0),
        error: ValidationError::PriceNotNumeric,
    },
    Rule {
        passes: |d| parse_price(&d.price).is_some_and(|p| (MIN_PRICE..=MAX_PRICE).contains(&p)),
        error: ValidationError::PriceOutOfRange,
    },
    Rule {
        passes: |d| !d.image.trim().is_empty(),
        error: ValidationError::ImageRequired,
    },
    Rule {
        passes: |d| Category::parse(&d.category).is_some(),
        error: ValidationError::CategoryInvalid,
    },
];

/// Whether a browser would read `s` as a number: decimal or exponent
/// notation, the `Infinity` keyword, or an unsigned `0x`/`0o`/`0b` literal.
/// Rust-only spellings such as `inf` and `NaN` do not count.
fn is_numeric(s: &str) -> bool {
    if matches!(s, "Infinity" | "+Infinity" | "-Infinity") {
        return true;
    }
    if let Some((radix, digits)) = radix_literal(s) {
        return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
    }
    s.parse::<f64>().is_ok_and(f64::is_finite)
}

fn radix_literal(s: &str) -> Option<(u32, &str)> {
    let (prefix, digits) = (s.get(..2)?, s.get(2..)?);
    let radix = match prefix.to_ascii_lowercase().as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    Some((radix, digits))
}

/// Parse a price field. Empty, non-numeric and non-finite input yields `None`.
pub fn parse_price(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|p| p.is_finite())
}

/// Run every rule in order, returning the first one the draft breaks.
pub fn check(draft: &ProductDraft) -> Result<(), ValidationError> {
    match RULES.iter().find(|rule| !(rule.passes)(draft)) {
        Some(rule) => Err(rule.error),
        None => Ok(()),
    }
}

/// Validate the draft and build the record to send to the backend.
///
/// Text fields are sent as typed; trimming only applies to the checks.
pub fn validate(draft: &ProductDraft) -> Result<Product, ValidationError> {
    check(draft)?;
    let price = parse_price(&draft.price).ok_or(ValidationError::PriceNotNumeric)?;
    let category = Category::parse(&draft.category).ok_or(ValidationError::CategoryInvalid)?;
    Ok(Product {
        name: draft.name.clone(),
        price,
        description: draft.description.clone(),
        image: draft.image.clone(),
        category_id: category.id(),
    })
}
