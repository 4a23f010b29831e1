//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `site_chrome` frames every page; `admin_nav` frames the protected pages and
//! owns the logout action.

pub mod admin_nav;
pub mod site_chrome;
