//! Client brands and their portal configuration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ClientId, ReportId};
use crate::domain::visit::Cycle;

/// Brand colours applied to a client's portal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub header_band: String,
    pub button_foreground: String,
    pub button_background: String,
    pub background: String,
    pub text: String,
}

/// One editable colour of a [`ColorScheme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorKey {
    HeaderBand,
    ButtonForeground,
    ButtonBackground,
    Background,
    Text,
}

impl ColorScheme {
    /// Palette offered when a client is created from scratch.
    pub fn draft() -> Self {
        Self {
            header_band: "#1e293b".to_string(),
            background: "#f8fafc".to_string(),
            ..Self::default()
        }
    }

    pub fn get(&self, key: ColorKey) -> &str {
        match key {
            ColorKey::HeaderBand => &self.header_band,
            ColorKey::ButtonForeground => &self.button_foreground,
            ColorKey::ButtonBackground => &self.button_background,
            ColorKey::Background => &self.background,
            ColorKey::Text => &self.text,
        }
    }

    /// Replaces one colour, leaving the others alone.
    pub fn set(&mut self, key: ColorKey, value: impl Into<String>) {
        let slot = match key {
            ColorKey::HeaderBand => &mut self.header_band,
            ColorKey::ButtonForeground => &mut self.button_foreground,
            ColorKey::ButtonBackground => &mut self.button_background,
            ColorKey::Background => &mut self.background,
            ColorKey::Text => &mut self.text,
        };
        *slot = value.into();
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            header_band: "#10b981".to_string(),
            button_foreground: "#ffffff".to_string(),
            button_background: "#10b981".to_string(),
            background: "#ffffff".to_string(),
            text: "#0f172a".to_string(),
        }
    }
}

/// A contracted audit period for one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractPeriod {
    pub country: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub frequency: String,
    #[serde(default)]
    pub cycles: Vec<Cycle>,
}

/// A dashboard report published to the client portal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDefinition {
    pub id: ReportId,
    pub name: String,
    pub file_name: String,
    pub country: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// Editable text attribute of a [`ReportDefinition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportField {
    Name,
    FileName,
    Country,
}

impl ReportDefinition {
    fn set(&mut self, field: ReportField, value: String) {
        match field {
            ReportField::Name => self.name = value,
            ReportField::FileName => self.file_name = value,
            ReportField::Country => self.country = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoGallery {
    pub enabled: bool,
    pub allow_download: bool,
    pub allow_zoom: bool,
}

impl Default for PhotoGallery {
    fn default() -> Self {
        Self {
            enabled: true,
            allow_download: true,
            allow_zoom: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientReportConfig {
    #[serde(default)]
    pub reports: Vec<ReportDefinition>,
    #[serde(default)]
    pub default_landing_report_id: Option<String>,
    #[serde(default)]
    pub photo_gallery: PhotoGallery,
}

impl ClientReportConfig {
    /// Report shown first, falling back to the first configured one.
    pub fn landing_report(&self) -> Option<&ReportDefinition> {
        self.default_landing_report_id
            .as_deref()
            .and_then(|id| self.reports.iter().find(|r| r.id.as_str() == id))
            .or_else(|| self.reports.first())
    }
}

/// A brand whose products are audited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub countries_covered: Vec<String>,
    #[serde(default)]
    pub geo_validation_required: bool,
    #[serde(default)]
    pub allow_multiple_datasets: bool,
    #[serde(default)]
    pub color_scheme: ColorScheme,
    #[serde(default)]
    pub database_name: String,
    #[serde(default)]
    pub watermark: String,
    #[serde(default)]
    pub contract_periods: Vec<ContractPeriod>,
    #[serde(default)]
    pub auto_mail_on_non_compliance: bool,
    #[serde(default)]
    pub sos_calculation_with_assumption: bool,
    #[serde(default)]
    pub report_config: ClientReportConfig,
}

fn default_true() -> bool {
    true
}

impl Client {
    /// An empty, active client as the "New Client" form starts it.
    pub fn draft(id: ClientId) -> Self {
        Self {
            id,
            name: String::new(),
            logo: String::new(),
            is_active: true,
            countries_covered: Vec::new(),
            geo_validation_required: false,
            allow_multiple_datasets: false,
            color_scheme: ColorScheme::draft(),
            database_name: String::new(),
            watermark: String::new(),
            contract_periods: Vec::new(),
            auto_mail_on_non_compliance: false,
            sos_calculation_with_assumption: false,
            report_config: ClientReportConfig::default(),
        }
    }

    pub fn covers(&self, country: &str) -> bool {
        self.countries_covered
            .iter()
            .any(|c| c.eq_ignore_ascii_case(country))
    }

    /// Case-insensitive match on the client name.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty() || self.name.to_lowercase().contains(&term)
    }

    // ───────────────────────────────────────────────────────────────
    // Editing
    // ───────────────────────────────────────────────────────────────

    /// Adds a covered country.
    ///
    /// Blank entries and countries already covered (ignoring case) are
    /// ignored. Returns true if the list grew.
    pub fn add_country(&mut self, country: &str) -> bool {
        let country = country.trim();
        if country.is_empty() || self.covers(country) {
            return false;
        }
        self.countries_covered.push(country.to_string());
        true
    }

    /// Returns true if the country was covered.
    pub fn remove_country(&mut self, country: &str) -> bool {
        let country = country.trim();
        let before = self.countries_covered.len();
        self.countries_covered
            .retain(|c| !c.eq_ignore_ascii_case(country));
        self.countries_covered.len() != before
    }

    pub fn update_color(&mut self, key: ColorKey, value: impl Into<String>) {
        self.color_scheme.set(key, value);
    }

    /// Appends a blank report row.
    ///
    /// Its country defaults to the first covered country, or is empty when
    /// none is covered yet.
    pub fn add_report(&mut self) -> &ReportDefinition {
        let report = ReportDefinition {
            id: ReportId::generate(),
            name: String::new(),
            file_name: String::new(),
            country: self.countries_covered.first().cloned().unwrap_or_default(),
            category: None,
        };
        let reports = &mut self.report_config.reports;
        reports.push(report);
        &reports[reports.len() - 1]
    }

    /// Sets one attribute of a report. Unknown ids change nothing.
    pub fn update_report(
        &mut self,
        id: &ReportId,
        field: ReportField,
        value: impl Into<String>,
    ) -> bool {
        match self.report_config.reports.iter_mut().find(|r| &r.id == id) {
            Some(report) => {
                report.set(field, value.into());
                true
            }
            None => false,
        }
    }

    /// Removes a report. Unknown ids change nothing.
    ///
    /// A landing report that is deleted stops being the landing report.
    pub fn delete_report(&mut self, id: &ReportId) -> bool {
        let config = &mut self.report_config;
        let before = config.reports.len();
        config.reports.retain(|r| &r.id != id);
        if config.default_landing_report_id.as_deref() == Some(id.as_str()) {
            config.default_landing_report_id = None;
        }
        config.reports.len() != before
    }
}
