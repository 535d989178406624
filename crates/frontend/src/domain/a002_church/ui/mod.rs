mod switcher;

pub use switcher::ChurchSwitcher;
