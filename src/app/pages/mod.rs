//! Page components, one per route.
//!
//! The four content pages are static: one heading, one paragraph.

mod blog;
mod careers;
mod home;
mod not_found;
mod security;
mod updates;

pub use blog::BlogPage;
pub use careers::CareersPage;
pub use home::HomePage;
pub use not_found::NotFound;
pub use security::SecurityPage;
pub use updates::UpdatesPage;
