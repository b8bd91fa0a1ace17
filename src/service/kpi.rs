use chrono::{Datelike, Utc};
use sea_orm::DatabaseConnection;

use crate::{data::client::ClientRepository, error::AppError, model::kpi::AgeKpi};

pub struct KpiService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> KpiService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes the average and population standard deviation of client
    /// ages.
    ///
    /// Ages are derived as `current year - birth year`, the same coarse
    /// measure regardless of whether the birthday has passed this year.
    /// Fails with `EmptyDataset` when no clients are stored.
    pub async fn client_age_kpi(&self) -> Result<AgeKpi, AppError> {
        let birth_days = ClientRepository::new(self.db).birth_days().await?;

        if birth_days.is_empty() {
            return Err(AppError::EmptyDataset);
        }

        let current_year = Utc::now().year();
        let ages: Vec<f64> = birth_days
            .iter()
            .map(|birth_day| f64::from(current_year - birth_day.year()))
            .collect();

        let (average_age, age_standard_deviation) = population_stats(&ages);

        Ok(AgeKpi {
            average_age,
            age_standard_deviation,
        })
    }
}

/// Mean and population standard deviation (divisor `n`, not `n - 1`).
///
/// Callers guarantee `values` is non-empty.
fn population_stats(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

    (mean, variance.sqrt())
}
