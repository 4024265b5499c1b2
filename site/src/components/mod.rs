//! Reusable UI primitives shared by the sections and pages.
//!
//! # Component Hierarchy
//!
//! ```text
//! Button
//! ├── <button> (default)
//! └── AsChild slot
//!     └── Link
//! ```

mod button;
mod link;

pub use button::{AsChild, Button, ButtonSize, ButtonVariant, button_class};
pub use link::Link;
