pub mod app;
pub mod dashboard;

pub use app::render_app;
pub use dashboard::{render_dashboard, stat_value_text, RecentReportsBranch};
