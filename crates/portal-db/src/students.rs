//! Student queries: authentication, profile, contact updates.

use portal_core::{Result, StudentRecord};
use sqlx::MySqlPool;

/// The joined student projection shared by the login and profile queries.
const STUDENT_JOIN: &str = r"
SELECT s.id, s.surname, s.first_name, s.middle_name, s.email, s.phone, s.address,
       s.profile_photo, s.birth_date, s.created_at,
       sg.naming AS group_name, sg.course,
       sp.title AS specialty_name, sp.cod_specialty,
       fs.title AS form_study_name,
       t.surname AS tutor_surname, t.first_name AS tutor_first_name,
       t.middle_name AS tutor_middle_name
FROM Student s
JOIN Student_group sg ON s.student_group_id = sg.id
JOIN Specialty sp ON sg.specialty_id = sp.id
JOIN Form_study fs ON sg.form_study_id = fs.id
JOIN tutor t ON sg.tutor_id = t.id
";

/// Matches a student by email and password.
///
/// # Errors
///
/// Returns a database error when the query fails.
pub async fn authenticate(
    pool: &MySqlPool,
    email: &str,
    password: &str,
) -> Result<Option<StudentRecord>> {
    let sql = format!("{STUDENT_JOIN} WHERE s.email = ? AND s.student_password = ?");
    let student = sqlx::query_as::<_, StudentRecord>(&sql)
        .bind(email)
        .bind(password)
        .fetch_optional(pool)
        .await?;
    Ok(student)
}

/// Loads the full joined record for a student id.
///
/// # Errors
///
/// Returns a database error when the query fails.
pub async fn fetch_profile(pool: &MySqlPool, student_id: i64) -> Result<Option<StudentRecord>> {
    let sql = format!("{STUDENT_JOIN} WHERE s.id = ?");
    let student = sqlx::query_as::<_, StudentRecord>(&sql)
        .bind(student_id)
        .fetch_optional(pool)
        .await?;
    Ok(student)
}

/// Whether another student already uses this email.
///
/// # Errors
///
/// Returns a database error when the query fails.
pub async fn email_taken_by_other(pool: &MySqlPool, email: &str, student_id: i64) -> Result<bool> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM Student WHERE email = ? AND id != ?")
        .bind(email)
        .bind(student_id)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

/// Whether another student already uses this phone.
///
/// # Errors
///
/// Returns a database error when the query fails.
pub async fn phone_taken_by_other(pool: &MySqlPool, phone: &str, student_id: i64) -> Result<bool> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM Student WHERE phone = ? AND id != ?")
        .bind(phone)
        .bind(student_id)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

/// Updates the contact details of a student.
///
/// # Errors
///
/// Returns a database error when the update fails.
pub async fn update_contact(
    pool: &MySqlPool,
    student_id: i64,
    email: &str,
    phone: &str,
    address: &str,
) -> Result<()> {
    sqlx::query("UPDATE Student SET email = ?, phone = ?, address = ? WHERE id = ?")
        .bind(email)
        .bind(phone)
        .bind(address)
        .bind(student_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Whether the stored password of a student matches `password`.
///
/// # Errors
///
/// Returns a database error when the query fails.
pub async fn password_matches(pool: &MySqlPool, student_id: i64, password: &str) -> Result<bool> {
    let row: Option<(i64,)> =
        sqlx::query_as("SELECT id FROM Student WHERE id = ? AND student_password = ?")
            .bind(student_id)
            .bind(password)
            .fetch_optional(pool)
            .await?;
    Ok(row.is_some())
}

/// Replaces the password of a student.
///
/// # Errors
///
/// Returns a database error when the update fails.
pub async fn update_password(pool: &MySqlPool, student_id: i64, password: &str) -> Result<()> {
    sqlx::query("UPDATE Student SET student_password = ? WHERE id = ?")
        .bind(password)
        .bind(student_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Replaces the profile photo URL of a student.
///
/// # Errors
///
/// Returns a database error when the update fails.
pub async fn update_photo(pool: &MySqlPool, student_id: i64, photo_url: &str) -> Result<()> {
    sqlx::query("UPDATE Student SET profile_photo = ? WHERE id = ?")
        .bind(photo_url)
        .bind(student_id)
        .execute(pool)
        .await?;
    Ok(())
}
