// Standalone components
pub mod button;
pub mod card;
pub mod form;
pub mod input;
pub mod page_header;

// Primitive wrappers
pub mod avatar;
pub mod date_picker;
pub mod dropdown_menu;
pub mod toast;

// Depends on the sidebar context
pub mod sidebar;

pub use avatar::*;
pub use button::*;
pub use card::*;
pub use date_picker::*;
pub use dropdown_menu::*;
pub use form::*;
pub use input::*;
pub use page_header::*;
pub use sidebar::*;
pub use toast::*;
