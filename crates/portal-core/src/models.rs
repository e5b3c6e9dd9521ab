//! Database row models and session types.
//!
//! Every struct here mirrors one SELECT shape; column aliases in the SQL
//! must match the field names. Entities themselves live in the external
//! MySQL schema; these are projections, not an ORM.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize, Serializer};
use sqlx::FromRow;

/// Date format used throughout the portal UI.
const DMY_FORMAT: &str = "%d.%m.%Y";

/// Formats a date the way the portal UI displays it (`dd.mm.yyyy`).
#[must_use]
pub fn format_dmy(date: NaiveDate) -> String {
    date.format(DMY_FORMAT).to_string()
}

fn serialize_dmy<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_dmy(value.date()))
}

/// A student row joined with its group, specialty, study form, and tutor.
///
/// Produced by both the login query (which additionally matches the
/// password) and the profile query.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct StudentRecord {
    /// Primary key.
    pub id: i64,
    /// Surname.
    pub surname: String,
    /// First name.
    pub first_name: String,
    /// Middle name (patronymic), if recorded.
    pub middle_name: Option<String>,
    /// Login email.
    pub email: String,
    /// Contact phone in `+7XXXXXXXXXX` form.
    pub phone: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// Profile photo URL.
    pub profile_photo: Option<String>,
    /// Date of birth.
    pub birth_date: Option<NaiveDate>,
    /// Enrollment timestamp.
    pub created_at: NaiveDateTime,
    /// Group naming, e.g. "ИС-21".
    pub group_name: String,
    /// Course number within the group.
    pub course: i32,
    /// Specialty title.
    pub specialty_name: String,
    /// Specialty code.
    pub cod_specialty: String,
    /// Study form title (full-time, part-time, ...).
    pub form_study_name: String,
    /// Tutor surname.
    pub tutor_surname: String,
    /// Tutor first name.
    pub tutor_first_name: String,
    /// Tutor middle name.
    pub tutor_middle_name: Option<String>,
}

impl StudentRecord {
    /// Surname plus first name, the display name used across pages.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.surname, self.first_name)
    }

    /// Tutor's full name including the middle name when present.
    #[must_use]
    pub fn tutor_full_name(&self) -> String {
        match self.tutor_middle_name.as_deref() {
            Some(middle) => format!(
                "{} {} {}",
                self.tutor_surname, self.tutor_first_name, middle
            ),
            None => format!("{} {}", self.tutor_surname, self.tutor_first_name),
        }
    }

    /// Birth date formatted as `dd.mm.yyyy`.
    #[must_use]
    pub fn birth_date_str(&self) -> Option<String> {
        self.birth_date.map(format_dmy)
    }

    /// Year the student was enrolled.
    #[must_use]
    pub fn enrollment_year(&self) -> i32 {
        self.created_at.year()
    }

    /// Expected graduation year (enrollment plus the four-year program).
    #[must_use]
    pub fn graduation_year(&self) -> i32 {
        self.created_at.year() + 4
    }
}

/// The authenticated student marker kept in the server-side session.
///
/// Holds the handful of fields pages read back between requests; the full
/// record is re-fetched where needed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStudent {
    /// Student primary key. Presence of this marker is the access control.
    pub id: i64,
    /// Surname.
    pub surname: String,
    /// First name.
    pub first_name: String,
    /// Login email.
    pub email: String,
    /// Profile photo URL.
    pub photo: Option<String>,
    /// Group naming.
    pub group_name: String,
    /// Course number.
    pub course: i32,
    /// Specialty title.
    pub specialty_name: String,
}

impl SessionStudent {
    /// Surname plus first name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.surname, self.first_name)
    }
}

impl From<&StudentRecord> for SessionStudent {
    fn from(record: &StudentRecord) -> Self {
        Self {
            id: record.id,
            surname: record.surname.clone(),
            first_name: record.first_name.clone(),
            email: record.email.clone(),
            photo: record.profile_photo.clone(),
            group_name: record.group_name.clone(),
            course: record.course,
            specialty_name: record.specialty_name.clone(),
        }
    }
}

/// An activity category, a named bucket of achievement types.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ActivityCategory {
    /// Primary key.
    pub id: i64,
    /// Category name, e.g. "Учебная деятельность".
    pub naming: String,
    /// Short category code used in URLs.
    pub cod: String,
}

/// An academic period (semester) with its date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct AcademicPeriod {
    /// Primary key.
    pub id: i64,
    /// Period name, e.g. "Осенний семестр 2025".
    pub naming: String,
    /// First day of the period.
    pub start_date: NaiveDate,
    /// Last day of the period.
    pub end_date: NaiveDate,
}

/// A criteria level (university, regional, ...).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LevelType {
    /// Primary key.
    pub id: i64,
    /// Level title.
    pub title: String,
}

/// A rating criterion row for the category criteria listing.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CriteriaRow {
    /// Primary key.
    pub id: i64,
    /// Section the criterion belongs to.
    pub section_naming: String,
    /// Criterion description.
    pub description_text: String,
    /// Level title.
    pub level: String,
    /// Points awarded per claimed instance.
    pub points: i32,
}

/// A rating criterion with the full detail set for the structured lookup.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CriteriaDetail {
    /// Primary key.
    pub id: i64,
    /// Section the criterion belongs to.
    pub section_naming: String,
    /// Criterion description.
    pub description_text: String,
    /// Level reference.
    pub level_type_id: i64,
    /// Points awarded per claimed instance.
    pub points: i32,
    /// Achievement kind; `other` when the schema has none recorded.
    pub achievement_type: String,
    /// Level title.
    pub level_title: String,
}

/// One achievement inside a category block of the portfolio page,
/// scoped to the current period.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CategoryAchievement {
    /// Section of the matched criterion.
    pub section_naming: String,
    /// Criterion description.
    pub description_text: String,
    /// Level title.
    pub level: String,
    /// Points per instance.
    pub points: i32,
    /// Claimed instance count.
    pub quantity: i32,
    /// Score contribution, `points × quantity`.
    pub total: i64,
    /// When the achievement was claimed.
    pub created_at: NaiveDateTime,
    /// Supporting document title.
    pub document_title: String,
}

/// One row of the full achievement history, unscoped by period.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RecentAchievement {
    /// Achievement primary key.
    pub id: i64,
    /// Claimed instance count.
    pub quantity: i32,
    /// Supporting document title.
    pub document_title: String,
    /// When the achievement was claimed.
    pub created_at: NaiveDateTime,
    /// Criterion description.
    pub description_text: String,
    /// Points per instance.
    pub points: i32,
    /// Category name.
    pub category_name: String,
    /// Period name.
    pub period_name: String,
    /// Level title.
    pub level_title: String,
}

/// One row of the filtered achievement listing (AJAX).
///
/// `created_at` serializes as `dd.mm.yyyy`, the format the frontend table
/// renders directly.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FilteredAchievement {
    /// Achievement primary key.
    pub id: i64,
    /// Claimed instance count.
    pub quantity: i32,
    /// When the achievement was claimed.
    #[serde(serialize_with = "serialize_dmy")]
    pub created_at: NaiveDateTime,
    /// Supporting document title.
    pub document_title: String,
    /// Criterion description.
    pub description_text: String,
    /// Points per instance.
    pub points: i32,
    /// Category name.
    pub category_name: String,
    /// Category code.
    pub category_cod: String,
    /// Level title.
    pub level_title: String,
}

/// One row of the peer-rank analysis produced by the
/// `GetCourseRatingAnalysis` stored procedure.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CourseRatingRow {
    /// Peer surname.
    pub surname: String,
    /// Peer first name.
    pub first_name: String,
    /// Peer group naming.
    pub group_name: String,
    /// Total rating points for the period.
    pub total_points: i64,
    /// Standing within the course.
    pub rank_position: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> StudentRecord {
        StudentRecord {
            id: 7,
            surname: "Иванов".to_string(),
            first_name: "Пётр".to_string(),
            middle_name: None,
            email: "ivanov@edu.ru".to_string(),
            phone: Some("+79991234567".to_string()),
            address: None,
            profile_photo: None,
            birth_date: NaiveDate::from_ymd_opt(2003, 4, 9),
            created_at: NaiveDate::from_ymd_opt(2021, 9, 1)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap(),
            group_name: "ИС-21".to_string(),
            course: 3,
            specialty_name: "Информационные системы".to_string(),
            cod_specialty: "09.03.02".to_string(),
            form_study_name: "Очная".to_string(),
            tutor_surname: "Петрова".to_string(),
            tutor_first_name: "Анна".to_string(),
            tutor_middle_name: Some("Сергеевна".to_string()),
        }
    }

    #[test]
    fn derived_profile_fields() {
        let student = record();
        assert_eq!(student.full_name(), "Иванов Пётр");
        assert_eq!(student.tutor_full_name(), "Петрова Анна Сергеевна");
        assert_eq!(student.birth_date_str().as_deref(), Some("09.04.2003"));
        assert_eq!(student.enrollment_year(), 2021);
        assert_eq!(student.graduation_year(), 2025);
    }

    #[test]
    fn session_student_carries_the_marker_fields() {
        let student = record();
        let session = SessionStudent::from(&student);
        assert_eq!(session.id, 7);
        assert_eq!(session.full_name(), "Иванов Пётр");
        assert_eq!(session.email, "ivanov@edu.ru");
    }

    #[test]
    fn filtered_achievement_serializes_dmy_dates() {
        let row = FilteredAchievement {
            id: 1,
            quantity: 2,
            created_at: NaiveDate::from_ymd_opt(2025, 11, 3)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            document_title: "Диплом".to_string(),
            description_text: "Олимпиада".to_string(),
            points: 5,
            category_name: "Учебная".to_string(),
            category_cod: "study".to_string(),
            level_title: "Вузовский".to_string(),
        };

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["created_at"], "03.11.2025");
    }
}
