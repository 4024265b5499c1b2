// Page chrome shared by every route

mod footer;
mod nav;

pub use footer::{Footer, copyright_notice, current_year};
pub use nav::Navbar;
