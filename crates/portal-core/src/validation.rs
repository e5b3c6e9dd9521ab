//! Form input validation for profile updates.
//!
//! Every function returns the user-facing message of the first rule the
//! input breaks; messages are surfaced verbatim as flash messages.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email pattern")
});

/// Russian mobile format: `+7` followed by exactly ten digits.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+7\d{10}$").expect("valid phone pattern"));

/// An address must name a street and a house to be deliverable.
const ADDRESS_TOKENS: &[&str] = &["ул.", "улица", "проспект", "пр.", "дом", "д."];

const PHOTO_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".bmp", ".webp"];

/// Validates a login/contact email.
///
/// # Errors
///
/// Returns a validation error when the email does not match the
/// `name@domain.tld` shape.
pub fn validate_email(email: &str) -> Result<()> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(Error::validation(
            "Email должен быть в формате example@domain.com",
        ))
    }
}

/// Validates a contact phone number.
///
/// # Errors
///
/// Returns a validation error unless the phone is `+7` plus ten digits.
pub fn validate_phone(phone: &str) -> Result<()> {
    if PHONE_RE.is_match(phone) {
        Ok(())
    } else {
        Err(Error::validation(
            "Телефон должен быть в формате +7XXXXXXXXXX (10 цифр после +7)",
        ))
    }
}

/// Validates a postal address.
///
/// # Errors
///
/// Returns a validation error when the address is shorter than five
/// characters or names no street/house locality token.
pub fn validate_address(address: &str) -> Result<()> {
    if address.chars().count() < 5 {
        return Err(Error::validation(
            "Адрес должен содержать не менее 5 символов",
        ));
    }

    let lowered = address.to_lowercase();
    if !ADDRESS_TOKENS.iter().any(|token| lowered.contains(token)) {
        return Err(Error::validation(
            "Адрес должен содержать указание на улицу и дом (например, \"ул. Ленина, д. 10\")",
        ));
    }

    Ok(())
}

/// Validates a profile photo URL.
///
/// # Errors
///
/// Returns a validation error when the URL is empty, does not end in an
/// image extension, or is not an http(s) URL.
pub fn validate_photo_url(url: &str) -> Result<()> {
    if url.is_empty() {
        return Err(Error::validation("Пожалуйста, укажите URL фотографии"));
    }

    let lowered = url.to_lowercase();
    if !PHOTO_EXTENSIONS
        .iter()
        .any(|extension| lowered.ends_with(extension))
    {
        return Err(Error::validation(
            "URL должен вести на изображение (jpg, png, gif, bmp, webp)",
        ));
    }

    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(Error::validation(
            "URL должен начинаться с http:// или https://",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_email() {
        assert!(validate_email("student@university.ru").is_ok());
        assert!(validate_email("first.last+tag@edu.example.com").is_ok());
    }

    #[test]
    fn rejects_malformed_email() {
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign.ru").is_err());
        assert!(validate_email("a@b").is_err());
        assert!(validate_email("a@b.x").is_err());
    }

    #[test]
    fn accepts_russian_mobile_phone() {
        assert!(validate_phone("+79991234567").is_ok());
    }

    #[test]
    fn rejects_phone_with_wrong_digit_count() {
        assert!(validate_phone("+7999123456").is_err());
        assert!(validate_phone("+799912345678").is_err());
    }

    #[test]
    fn rejects_phone_without_plus_seven_prefix() {
        assert!(validate_phone("89991234567").is_err());
        assert!(validate_phone("+89991234567").is_err());
        assert!(validate_phone("+7999123456a").is_err());
    }

    #[test]
    fn accepts_address_with_street_and_house() {
        assert!(validate_address("ул. Ленина, д. 10").is_ok());
        assert!(validate_address("Проспект Мира, дом 4").is_ok());
    }

    #[test]
    fn rejects_short_or_tokenless_address() {
        assert!(validate_address("abc").is_err());
        assert!(validate_address("Москва, Тверская 1").is_err());
    }

    #[test]
    fn address_length_counts_characters_not_bytes() {
        // Five Cyrillic characters are ten bytes; the char count is what matters.
        assert!(validate_address("улица").is_ok());
    }

    #[test]
    fn accepts_http_image_url() {
        assert!(validate_photo_url("https://cdn.example.com/me.jpg").is_ok());
        assert!(validate_photo_url("http://cdn.example.com/ME.PNG").is_ok());
    }

    #[test]
    fn rejects_bad_photo_url() {
        assert!(validate_photo_url("").is_err());
        assert!(validate_photo_url("https://cdn.example.com/me.pdf").is_err());
        assert!(validate_photo_url("ftp://cdn.example.com/me.jpg").is_err());
    }
}
