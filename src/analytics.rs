use std::path::Path;

use anyhow::{Context, Result};
use chrono::Month;
use serde_json::json;

use crate::constants::REVENUE_WINDOW_MONTHS;
use crate::logging;
use crate::model::{AnalyticsData, MonthlyRevenue};

const MOCK_MONTHLY_REVENUE: [u64; REVENUE_WINDOW_MONTHS] =
    [12_480, 9_730, 15_210, 11_045, 18_390, 14_660];

/// Three-letter month name, the way the revenue chart labels its x axis.
pub fn short_month_name(month: Month) -> &'static str {
    &month.name()[..3]
}

/// Fixed analytics snapshot shown when no analytics file is configured.
pub fn mock_analytics(total_products: usize) -> AnalyticsData {
    let mut month = Month::January;
    let mut revenue_by_month = Vec::with_capacity(REVENUE_WINDOW_MONTHS);
    for revenue in MOCK_MONTHLY_REVENUE {
        revenue_by_month.push(MonthlyRevenue {
            month: short_month_name(month).to_string(),
            revenue,
        });
        month = month.succ();
    }

    AnalyticsData {
        total_users: 842,
        total_products: total_products as u64,
        total_revenue: 81_515,
        active_sessions: 127,
        revenue_by_month,
    }
}

pub async fn load_analytics(path: &Path) -> Result<AnalyticsData> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read analytics snapshot at {:?}", path))?;
    let data: AnalyticsData = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse analytics snapshot at {:?}", path))?;

    logging::info(
        "analytics.load",
        "Analytics snapshot loaded",
        json!({
            "path": path.display().to_string(),
            "months": data.revenue_by_month.len(),
        }),
    );
    Ok(data)
}
