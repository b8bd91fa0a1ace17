use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Population statistics over the ages of all stored clients.
///
/// Ages are derived from birth years at query time, not read from the
/// declared `age` column, so stale declarations do not skew the numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct AgeKpi {
    pub average_age: f64,
    pub age_standard_deviation: f64,
}

impl AgeKpi {
    pub fn into_dto(self) -> AgeKpiDto {
        AgeKpiDto {
            average_age: self.average_age,
            age_standard_deviation: self.age_standard_deviation,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AgeKpiDto {
    pub average_age: f64,
    pub age_standard_deviation: f64,
}
