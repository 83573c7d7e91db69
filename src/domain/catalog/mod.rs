//! Catalog module - clients, stores, templates and scheduled visits.

mod client;
mod seed;
mod store;
mod template;
mod visit;

pub use client::{
    Client, ClientReportConfig, ColorKey, ColorScheme, ContractPeriod, PhotoGallery,
    ReportDefinition, ReportField,
};
pub use seed::Catalog;
pub use store::{Coordinates, Store};
pub use template::Template;
pub use visit::{Visit, VisitFilter, VisitStatus};
