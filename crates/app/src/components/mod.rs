pub mod account_menu;
pub mod dashboard_sidebar;
pub mod nav_icon;
pub mod stay_search;

pub use account_menu::AccountMenu;
pub use dashboard_sidebar::DashboardSidebar;
pub use nav_icon::NavGlyph;
pub use stay_search::StaySearchForm;
