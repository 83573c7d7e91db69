//! FieldFlow - Retail Field-Audit Workflow
//!
//! Administrators plan visit cycles and open visits channel by channel,
//! auditors fill in shelf audits on site, and clients follow compliance.
//! This crate holds the domain model and the handlers that drive it.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
