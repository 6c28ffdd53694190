use anyhow::Result;

use crate::config::DashboardConfig;
use crate::report::render_summary;

pub async fn run(config: &DashboardConfig) -> Result<()> {
    let products = config.products().await?;
    let analytics = config.analytics(&products).await?;
    print!("{}", render_summary(&analytics, &products));
    Ok(())
}
