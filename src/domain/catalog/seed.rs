//! Catalog - the reference data behind every portal screen.
//!
//! Loaded from YAML. The built-in fixture is compiled into the binary;
//! an alternative file can be supplied through configuration.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

use crate::domain::foundation::{
    ClientId, CycleId, DomainError, ErrorCode, StoreId, TemplateId, VisitId,
};
use crate::domain::visit::{Cycle, CycleStore};

use super::{Client, Store, Template, Visit, VisitFilter};

const SEED_YAML: &str = include_str!("seed.yaml");

/// Clients, stores, templates, visits and cycles for one session.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    clients: Vec<Client>,
    #[serde(default)]
    stores: Vec<Store>,
    #[serde(default)]
    templates: Vec<Template>,
    #[serde(default)]
    visits: Vec<Visit>,
    #[serde(default)]
    cycles: Vec<Cycle>,
}

impl Catalog {
    /// The built-in demo data.
    pub fn seed() -> Result<Self, DomainError> {
        Self::from_yaml_str(SEED_YAML)
    }

    /// Loads a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// - `SeedDataError` if the file cannot be read, parsed or
    ///   references unknown records
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            DomainError::new(ErrorCode::SeedDataError, format!("Cannot read seed file: {}", e))
                .with_detail("path", path.display().to_string())
        })?;
        Self::from_yaml_str(&text)
            .map_err(|e| e.with_detail("path", path.display().to_string()))
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, DomainError> {
        let catalog: Catalog = serde_yaml::from_str(yaml).map_err(|e| {
            DomainError::new(ErrorCode::SeedDataError, format!("Invalid seed data: {}", e))
        })?;
        catalog.check_references()?;
        tracing::debug!(
            clients = catalog.clients.len(),
            stores = catalog.stores.len(),
            visits = catalog.visits.len(),
            cycles = catalog.cycles.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    fn check_references(&self) -> Result<(), DomainError> {
        let stores: HashSet<&StoreId> = self.stores.iter().map(|s| &s.id).collect();
        let templates: HashSet<&TemplateId> = self.templates.iter().map(|t| &t.id).collect();
        let cycles: HashSet<&CycleId> = self.cycles.iter().map(|c| c.id()).collect();

        let dangling = |what: &str, id: &str, visit: &VisitId| {
            DomainError::new(
                ErrorCode::SeedDataError,
                format!("Visit {} references unknown {} '{}'", visit, what, id),
            )
        };
        for visit in &self.visits {
            if !stores.contains(&visit.store_id) {
                return Err(dangling("store", visit.store_id.as_str(), &visit.id));
            }
            if !templates.contains(&visit.template_id) {
                return Err(dangling("template", visit.template_id.as_str(), &visit.id));
            }
            if !cycles.contains(&visit.cycle_id) {
                return Err(dangling("cycle", visit.cycle_id.as_str(), &visit.id));
            }
        }
        Ok(())
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    pub fn client(&self, id: &ClientId) -> Option<&Client> {
        self.clients.iter().find(|c| &c.id == id)
    }

    pub fn store(&self, id: &StoreId) -> Option<&Store> {
        self.stores.iter().find(|s| &s.id == id)
    }

    pub fn template(&self, id: &TemplateId) -> Option<&Template> {
        self.templates.iter().find(|t| &t.id == id)
    }

    pub fn visit(&self, id: &VisitId) -> Option<&Visit> {
        self.visits.iter().find(|v| &v.id == id)
    }

    // ───────────────────────────────────────────────────────────────
    // Queries
    // ───────────────────────────────────────────────────────────────

    /// Display name of a store, if known.
    pub fn store_name(&self, id: &StoreId) -> Option<&str> {
        self.store(id).map(|s| s.name.as_str())
    }

    pub fn visits_matching(&self, filter: VisitFilter) -> Vec<&Visit> {
        self.visits
            .iter()
            .filter(|v| filter.matches(v.status))
            .collect()
    }

    /// Stores assigned to a virtual channel by name.
    pub fn stores_in_channel(&self, channel_name: &str) -> Vec<&Store> {
        self.stores
            .iter()
            .filter(|s| s.virtual_channel == channel_name)
            .collect()
    }

    pub fn search_stores(&self, term: &str) -> Vec<&Store> {
        self.stores.iter().filter(|s| s.matches(term)).collect()
    }

    pub fn search_clients(&self, term: &str) -> Vec<&Client> {
        self.clients.iter().filter(|c| c.matches(term)).collect()
    }

    pub fn active_clients(&self) -> Vec<&Client> {
        self.clients.iter().filter(|c| c.is_active).collect()
    }

    /// A cycle store over this catalog's cycles, first cycle selected.
    pub fn cycle_store(&self) -> Result<CycleStore, DomainError> {
        CycleStore::from_cycles(self.cycles.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::VisitStatus;
    use std::io::Write;

    fn seed() -> Catalog {
        Catalog::seed().unwrap()
    }

    #[test]
    fn seed_loads_demo_data() {
        let catalog = seed();
        assert_eq!(catalog.clients().len(), 3);
        assert_eq!(catalog.stores().len(), 3);
        assert_eq!(catalog.templates().len(), 2);
        assert_eq!(catalog.visits().len(), 3);
        assert_eq!(catalog.cycles().len(), 1);
    }

    #[test]
    fn store_name_lookup() {
        let catalog = seed();
        assert_eq!(
            catalog.store_name(&StoreId::new("2").unwrap()),
            Some("7-Eleven")
        );
        assert_eq!(catalog.store_name(&StoreId::new("99").unwrap()), None);
    }

    #[test]
    fn visit_filters() {
        let catalog = seed();
        assert_eq!(catalog.visits_matching(VisitFilter::All).len(), 3);

        let planned = catalog.visits_matching(VisitFilter::Planned);
        assert_eq!(planned.len(), 1);
        assert_eq!(planned[0].status, VisitStatus::Planned);

        let completed = catalog.visits_matching(VisitFilter::Completed);
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id.as_str(), "3");
    }

    #[test]
    fn channel_a_holds_two_stores() {
        let names: Vec<_> = seed()
            .stores_in_channel("A")
            .iter()
            .map(|s| s.name.clone())
            .collect();
        assert_eq!(names, vec!["Walmart Supercenter", "Carrefour"]);
    }

    #[test]
    fn store_search_covers_name_city_and_channel() {
        let catalog = seed();
        assert_eq!(catalog.search_stores("tokyo").len(), 1);
        assert_eq!(catalog.search_stores("MARKET").len(), 2);
        assert_eq!(catalog.search_stores("walmart").len(), 1);
        assert_eq!(catalog.search_stores("").len(), 3);
    }

    #[test]
    fn inactive_clients_are_excluded() {
        let names: Vec<_> = seed()
            .active_clients()
            .iter()
            .map(|c| c.name.clone())
            .collect();
        assert_eq!(names, vec!["Coca Cola", "Nestle"]);
    }

    #[test]
    fn standard_template_builds_a_form() {
        let catalog = seed();
        let template = catalog.template(&TemplateId::new("t1").unwrap()).unwrap();
        let form = template.form().unwrap();
        assert_eq!(form.fields().len(), 5);
        assert_eq!(template.required_count(), 3);
    }

    #[test]
    fn cycle_store_selects_first_cycle() {
        let store = seed().cycle_store().unwrap();
        assert_eq!(store.selected_id().map(|id| id.as_str()), Some("c1"));
        assert_eq!(store.selected_progress().len(), 3);
    }

    #[test]
    fn dangling_store_reference_is_rejected() {
        let yaml = r#"
templates: [{ id: t1, name: T }]
cycles: [{ id: c1, cycle_no: 1, start_date: 2024-01-01 }]
visits:
  - { id: "1", store_id: "404", auditor_id: a1, date: 2024-03-20, status: planned, template_id: t1, cycle_id: c1, visit_number: 1 }
"#;
        let err = Catalog::from_yaml_str(yaml).unwrap_err();
        assert_eq!(err.code, ErrorCode::SeedDataError);
        assert!(err.message.contains("store '404'"));
    }

    #[test]
    fn loads_alternative_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "stores:\n  - {{ id: s9, name: Corner Shop, address: 1 High St, city: Leeds, state: WY, country: UK, channel: Convenience, virtual_channel: B, required_visits: 1 }}"
        )
        .unwrap();

        let catalog = Catalog::from_yaml_file(file.path()).unwrap();
        assert_eq!(catalog.stores().len(), 1);
        assert!(catalog.cycles().is_empty());
    }

    #[test]
    fn missing_file_is_seed_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::from_yaml_file(dir.path().join("nope.yaml")).unwrap_err();
        assert_eq!(err.code, ErrorCode::SeedDataError);
        assert!(err.details.contains_key("path"));
    }
}
