//! Portfolio aggregation.
//!
//! The rating page tallies achievement points per activity category for the
//! current academic period. Rows are fetched per category; the sums are
//! folded here so the arithmetic lives in one place.

use serde::Serialize;

use crate::models::{
    AcademicPeriod, ActivityCategory, CategoryAchievement, CourseRatingRow, RecentAchievement,
};

/// One category block of the portfolio page.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryReport {
    /// Category primary key.
    pub id: i64,
    /// Category name.
    pub name: String,
    /// Category code.
    pub cod: String,
    /// Point sum for the current period, `Σ points × quantity`.
    pub points: i64,
    /// Claimed instance count for the current period, `Σ quantity`.
    pub total_count: i64,
    /// The achievements behind the numbers.
    pub achievements: Vec<CategoryAchievement>,
}

impl CategoryReport {
    /// Folds a category's current-period achievements into its report.
    #[must_use]
    pub fn build(category: &ActivityCategory, achievements: Vec<CategoryAchievement>) -> Self {
        let points = achievements
            .iter()
            .map(|achievement| i64::from(achievement.points) * i64::from(achievement.quantity))
            .sum();
        let total_count = achievements
            .iter()
            .map(|achievement| i64::from(achievement.quantity))
            .sum();

        Self {
            id: category.id,
            name: category.naming.clone(),
            cod: category.cod.clone(),
            points,
            total_count,
            achievements,
        }
    }
}

/// Running total across all category reports.
#[must_use]
pub fn overall_total(reports: &[CategoryReport]) -> i64 {
    reports.iter().map(|report| report.points).sum()
}

/// The assembled portfolio page payload.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioData {
    /// Per-category blocks for the current period.
    pub categories: Vec<CategoryReport>,
    /// Total points across categories.
    pub total_points: i64,
    /// All periods, most recent first, for the history filter.
    pub periods: Vec<AcademicPeriod>,
    /// The resolved current period, if any period exists.
    pub current_period: Option<AcademicPeriod>,
    /// Full achievement history, newest first.
    pub recent_achievements: Vec<RecentAchievement>,
    /// Peer-rank analysis for the current period.
    pub analysis: Vec<CourseRatingRow>,
}

impl PortfolioData {
    /// An empty payload, used when assembly fails and the page still renders.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            categories: Vec::new(),
            total_points: 0,
            periods: Vec::new(),
            current_period: None,
            recent_achievements: Vec::new(),
            analysis: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn category(id: i64, cod: &str) -> ActivityCategory {
        ActivityCategory {
            id,
            naming: format!("Категория {id}"),
            cod: cod.to_string(),
        }
    }

    fn achievement(points: i32, quantity: i32) -> CategoryAchievement {
        CategoryAchievement {
            section_naming: "Раздел".to_string(),
            description_text: "Описание".to_string(),
            level: "Вузовский".to_string(),
            points,
            quantity,
            total: i64::from(points) * i64::from(quantity),
            created_at: NaiveDate::from_ymd_opt(2025, 10, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            document_title: "Документ".to_string(),
        }
    }

    #[test]
    fn category_report_folds_points_and_counts() {
        let report = CategoryReport::build(
            &category(1, "study"),
            vec![achievement(5, 2), achievement(3, 1)],
        );

        assert_eq!(report.points, 13);
        assert_eq!(report.total_count, 3);
        assert_eq!(report.achievements.len(), 2);
    }

    #[test]
    fn category_points_agree_with_row_totals() {
        let rows = vec![achievement(10, 3), achievement(7, 2), achievement(1, 5)];
        let row_total: i64 = rows.iter().map(|row| row.total).sum();
        let report = CategoryReport::build(&category(2, "sport"), rows);

        assert_eq!(report.points, row_total);
    }

    #[test]
    fn empty_category_scores_zero() {
        let report = CategoryReport::build(&category(3, "culture"), Vec::new());
        assert_eq!(report.points, 0);
        assert_eq!(report.total_count, 0);
    }

    #[test]
    fn overall_total_is_the_sum_of_category_totals() {
        let reports = vec![
            CategoryReport::build(&category(1, "study"), vec![achievement(5, 2)]),
            CategoryReport::build(&category(2, "sport"), vec![achievement(4, 1)]),
            CategoryReport::build(&category(3, "culture"), Vec::new()),
        ];

        assert_eq!(overall_total(&reports), 14);
        assert_eq!(
            overall_total(&reports),
            reports.iter().map(|report| report.points).sum::<i64>()
        );
    }
}
