//! Demo entry point: loads configuration, seeds a session and prints the
//! landing dashboard for the configured role as JSON.

use std::error::Error;
use std::sync::Arc;

use fieldflow::adapters::InMemoryVisitBoard;
use fieldflow::application::GetDashboardHandler;
use fieldflow::config::{init_tracing, AppConfig};
use fieldflow::domain::catalog::{Catalog, VisitFilter};
use fieldflow::domain::foundation::UserId;
use fieldflow::domain::navigation::{RoleContext, User};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging)?;

    let catalog = match &config.session.seed_path {
        Some(path) => Catalog::from_yaml_file(path)?,
        None => Catalog::seed()?,
    };
    tracing::info!(
        role = %config.session.default_role,
        cycles = catalog.cycles().len(),
        "Session seeded"
    );

    let board = InMemoryVisitBoard::new(catalog.cycle_store()?);
    let ctx = RoleContext::new(User {
        id: UserId::from_static("1"),
        name: config.session.user_name.clone(),
        email: config.session.user_email.clone(),
        role: config.session.default_role,
    });

    let dashboard = GetDashboardHandler::new(Arc::new(board), Arc::new(catalog))
        .handle(&ctx, VisitFilter::All)
        .await?;
    println!("{}", serde_json::to_string_pretty(&dashboard)?);
    Ok(())
}
