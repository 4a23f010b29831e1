//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Public pages are static presentation. `admin_*` pages are mounted behind
//! the route guard and load their data through the admin API client.

pub mod admin_lead;
pub mod admin_leads;
pub mod admin_pricing;
pub mod contact;
pub mod home;
pub mod legal;
pub mod login;
pub mod references;
pub mod services;
