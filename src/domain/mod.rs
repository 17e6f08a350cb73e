//! Core domain types and logic.

pub mod operation;
pub mod company;
pub mod reference_data;
pub mod selection;
pub mod date_filter;
pub mod aggregate;
pub mod pager;
pub mod settings;
pub mod action;
pub mod session;
pub mod config_validation;
pub mod error;
