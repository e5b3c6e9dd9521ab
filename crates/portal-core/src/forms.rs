//! Form and query payloads for the HTTP surface.
//!
//! Text fields default to empty strings so a missing field reaches the
//! validators instead of failing deserialization.

use serde::Deserialize;

/// Login form.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    /// Login email.
    #[serde(default)]
    pub email: String,
    /// Password.
    #[serde(default)]
    pub password: String,
}

/// Contact-details update form.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileUpdateForm {
    /// New email.
    #[serde(default)]
    pub email: String,
    /// New phone.
    #[serde(default)]
    pub phone: String,
    /// New address.
    #[serde(default)]
    pub address: String,
}

/// Password change form.
#[derive(Debug, Clone, Deserialize)]
pub struct PasswordUpdateForm {
    /// Current password, rechecked before the update.
    #[serde(default)]
    pub current_password: String,
    /// New password.
    #[serde(default)]
    pub new_password: String,
    /// Confirmation, must equal `new_password`.
    #[serde(default)]
    pub confirm_password: String,
}

/// Profile photo form.
#[derive(Debug, Clone, Deserialize)]
pub struct PhotoUploadForm {
    /// URL of the new photo.
    #[serde(default)]
    pub photo_url: String,
}

/// Achievement claim form.
#[derive(Debug, Clone, Deserialize)]
pub struct AchievementForm {
    /// Claimed criterion.
    pub criteria_id: i64,
    /// Academic period the claim belongs to.
    pub period_id: i64,
    /// Instance count, defaults to one.
    #[serde(default = "default_quantity")]
    pub quantity: i32,
    /// Supporting document title.
    #[serde(default)]
    pub document_title: String,
}

fn default_quantity() -> i32 {
    1
}

/// Query parameters of the achievement filter.
///
/// The frontend sends empty strings for unset filters; both are treated as
/// absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterParams {
    /// Optional period filter.
    #[serde(default)]
    pub period_id: Option<String>,
    /// Optional category-code filter.
    #[serde(default)]
    pub category_cod: Option<String>,
}

impl FilterParams {
    /// The period filter, when present and numeric.
    #[must_use]
    pub fn period(&self) -> Option<i64> {
        self.period_id
            .as_deref()
            .filter(|value| !value.is_empty())
            .and_then(|value| value.parse().ok())
    }

    /// The category filter, when present and non-empty.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category_cod
            .as_deref()
            .filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn achievement_quantity_defaults_to_one() {
        let form: AchievementForm =
            serde_urlencoded::from_str("criteria_id=3&period_id=2&document_title=Диплом").unwrap();
        assert_eq!(form.quantity, 1);
        assert_eq!(form.criteria_id, 3);
    }

    #[test]
    fn filter_params_treat_empty_strings_as_absent() {
        let params = FilterParams {
            period_id: Some(String::new()),
            category_cod: Some(String::new()),
        };
        assert_eq!(params.period(), None);
        assert_eq!(params.category(), None);
    }

    #[test]
    fn filter_params_parse_numeric_period() {
        let params = FilterParams {
            period_id: Some("12".to_string()),
            category_cod: Some("sport".to_string()),
        };
        assert_eq!(params.period(), Some(12));
        assert_eq!(params.category(), Some("sport"));
    }

    #[test]
    fn filter_params_ignore_non_numeric_period() {
        let params = FilterParams {
            period_id: Some("all".to_string()),
            category_cod: None,
        };
        assert_eq!(params.period(), None);
    }
}
