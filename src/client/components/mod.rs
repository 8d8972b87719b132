pub mod language_toggle;
pub mod navbar;
pub mod page;

pub use language_toggle::LanguageToggle;
pub use navbar::Navbar;
pub use page::Page;
