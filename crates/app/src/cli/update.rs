use std::io;

use clap::Args;
use promodesk::promotions::PromotionField;
use promodesk_app::dashboard::Dashboard;

use super::{fill_form, output, resolve_id};

#[derive(Debug, Args)]
pub(crate) struct UpdateArgs {
    /// Id of the promotion to change
    #[arg(long)]
    id: String,

    /// New name
    #[arg(long)]
    name: Option<String>,

    /// New first day (YYYY-MM-DD)
    #[arg(long)]
    start: Option<String>,

    /// New last day (YYYY-MM-DD)
    #[arg(long)]
    end: Option<String>,

    /// New budget
    #[arg(long)]
    budget: Option<String>,

    /// New sales impact; an empty value clears it
    #[arg(long)]
    sales_impact: Option<String>,
}

pub(crate) async fn run(dashboard: &mut Dashboard, args: UpdateArgs) -> Result<(), String> {
    let id = resolve_id(dashboard, &args.id)?;

    dashboard.edit(&id).map_err(|error| error.to_string())?;

    fill_form(
        dashboard,
        [
            (PromotionField::Name, args.name),
            (PromotionField::StartDate, args.start),
            (PromotionField::EndDate, args.end),
            (PromotionField::Budget, args.budget),
            (PromotionField::SalesImpact, args.sales_impact),
        ],
    )?;

    dashboard
        .submit()
        .await
        .map_err(|error| format!("failed to update promotion: {error}"))?;

    output::write_advisory(&mut io::stdout().lock(), dashboard.advisory())
        .map_err(|error| output::write_failed(&error))
}
