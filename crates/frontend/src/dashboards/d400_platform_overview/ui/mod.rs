mod dashboard;
mod top_churches;

pub use dashboard::PlatformOverviewDashboard;
