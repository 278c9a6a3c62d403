//! UI Components
//!
//! This module contains all UI components organized by feature:
//! - `auth`: login screen and session gate
//! - `leads`: lead capture form
//! - `layout`: application shell
//! - `toast`: notification system
//! - `common`: shared/reusable components

pub mod auth;
pub mod common;
pub mod layout;
pub mod leads;
pub mod toast;
