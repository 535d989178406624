pub mod d400_platform_overview;

pub use d400_platform_overview::ui::PlatformOverviewDashboard;
