use std::sync::Arc;

use clap::{Parser, Subcommand};
use promodesk::{
    forms::FieldUpdate,
    promotions::{PromotionField, PromotionId},
};
use promodesk_app::{
    config::AppConfig,
    dashboard::Dashboard,
    gateway::HttpPromotionsGateway,
    observability,
};

mod create;
mod delete;
mod list;
mod output;
mod report;
mod update;

#[derive(Debug, Parser)]
#[command(name = "promodesk", about = "Promotions dashboard", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    config: AppConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List promotions
    List(list::ListArgs),

    /// Create a promotion
    Create(create::CreateArgs),

    /// Change fields of a promotion
    Update(update::UpdateArgs),

    /// Delete a promotion
    Delete(delete::DeleteArgs),

    /// Budget and sales impact totals
    Report(report::ReportArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        observability::init_subscriber(&self.config.logging)
            .map_err(|error| error.to_string())?;

        let gateway = HttpPromotionsGateway::new(self.config.gateway.http())
            .map_err(|error| format!("failed to build promotions client: {error}"))?;

        let mut dashboard =
            Dashboard::new(Arc::new(gateway)).with_language(self.config.gateway.lang);

        dashboard
            .refresh()
            .await
            .map_err(|error| format!("failed to load promotions: {error}"))?;

        match self.command {
            Commands::List(args) => list::run(&mut dashboard, args),
            Commands::Create(args) => create::run(&mut dashboard, args).await,
            Commands::Update(args) => update::run(&mut dashboard, args).await,
            Commands::Delete(args) => delete::run(&mut dashboard, &args).await,
            Commands::Report(args) => report::run(&dashboard, &args),
        }
    }
}

/// Find a loaded promotion by the id text shown in `list`.
fn resolve_id(dashboard: &Dashboard, raw: &str) -> Result<PromotionId, String> {
    dashboard
        .store()
        .iter()
        .find(|promotion| promotion.id.to_string() == raw)
        .map(|promotion| promotion.id.clone())
        .ok_or_else(|| format!("promotion {raw} not found"))
}

/// Type raw values into the open form.
fn fill_form(
    dashboard: &mut Dashboard,
    fields: impl IntoIterator<Item = (PromotionField, Option<String>)>,
) -> Result<(), String> {
    for (field, raw) in fields {
        let Some(raw) = raw else {
            continue;
        };

        let update = FieldUpdate::parse(field, &raw).map_err(|error| error.to_string())?;

        dashboard
            .set_field(update)
            .map_err(|error| error.to_string())?;
    }

    Ok(())
}
