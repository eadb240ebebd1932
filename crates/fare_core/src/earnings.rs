use serde::{Deserialize, Serialize};

use crate::format::format_currency;

/// One bar of the weekly earnings chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyEarning {
    pub day: String,
    pub amount: u64,
    pub rides: u32,
}

/// Dashboard totals over a run of days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EarningsSummary {
    pub total_amount: u64,
    pub total_rides: u32,
    pub days: usize,
}

impl EarningsSummary {
    pub fn from_days(days: &[DailyEarning]) -> Self {
        days.iter().fold(
            Self {
                days: days.len(),
                ..Self::default()
            },
            |acc, day| Self {
                total_amount: acc.total_amount.saturating_add(day.amount),
                total_rides: acc.total_rides.saturating_add(day.rides),
                days: acc.days,
            },
        )
    }

    /// Mean fare per ride rounded to whole rupees; `None` with no rides.
    pub fn average_per_ride(&self) -> Option<u64> {
        if self.total_rides == 0 {
            return None;
        }
        let rides = u64::from(self.total_rides);
        let (quotient, remainder) = (self.total_amount / rides, self.total_amount % rides);
        // remainder < rides <= u32::MAX, so doubling cannot overflow.
        Some(quotient + u64::from(remainder * 2 >= rides))
    }

    pub fn formatted_total(&self) -> String {
        format_currency(i64::try_from(self.total_amount).unwrap_or(i64::MAX))
    }
}
