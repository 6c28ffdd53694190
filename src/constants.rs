pub const REVENUE_WINDOW_MONTHS: usize = 6;
pub const NAME_COLUMN_WIDTH: usize = 16;
