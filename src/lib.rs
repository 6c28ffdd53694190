pub mod analytics;
pub mod catalog;
pub mod classify;
pub mod cli;
pub mod config;
pub mod constants;
pub mod list;
pub mod logging;
pub mod model;
pub mod report;
pub mod status;
pub mod summary;

pub use model::{AnalyticsData, Category, MonthlyRevenue, Product, StockStatus};
pub use status::{label_for, label_for_raw, style_class_for, style_class_for_raw, StatusError};
