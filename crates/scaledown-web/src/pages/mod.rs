//! Server-rendered pages.
//!
//! - `layout`: document shell shared by every page
//! - `home`: product hero at `/`
//! - `admin`: model-ops placeholder at `/admin`
//! - `not_found`: 404 / 500 bodies
//! - `button`: reusable button component

pub mod admin;
pub mod button;
pub mod home;
pub mod layout;
pub mod not_found;

pub use layout::{root_layout, Metadata, SITE_METADATA};

/// Full HTML document for `/`.
pub fn home_document() -> String {
    root_layout(&home::render())
}

/// Full HTML document for `/admin`.
pub fn admin_document() -> String {
    root_layout(&admin::render())
}

/// Full HTML document for unknown paths.
pub fn not_found_document() -> String {
    root_layout(&not_found::render())
}
