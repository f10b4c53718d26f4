use std::io;

use clap::Args;
use promodesk::promotions::PromotionField;
use promodesk_app::dashboard::{Dashboard, SubmitOutcome};

use super::{fill_form, output};

#[derive(Debug, Args)]
pub(crate) struct CreateArgs {
    /// Promotion name
    #[arg(long)]
    name: String,

    /// First day (YYYY-MM-DD)
    #[arg(long)]
    start: String,

    /// Last day (YYYY-MM-DD), after the first day
    #[arg(long)]
    end: String,

    /// Budget, zero or more
    #[arg(long)]
    budget: String,

    /// Estimated sales impact
    #[arg(long)]
    sales_impact: Option<String>,
}

pub(crate) async fn run(dashboard: &mut Dashboard, args: CreateArgs) -> Result<(), String> {
    dashboard.new_promotion().map_err(|error| error.to_string())?;

    fill_form(
        dashboard,
        [
            (PromotionField::Name, Some(args.name)),
            (PromotionField::StartDate, Some(args.start)),
            (PromotionField::EndDate, Some(args.end)),
            (PromotionField::Budget, Some(args.budget)),
            (PromotionField::SalesImpact, args.sales_impact),
        ],
    )?;

    let outcome = dashboard
        .submit()
        .await
        .map_err(|error| format!("failed to create promotion: {error}"))?;

    let mut out = io::stdout().lock();

    output::write_advisory(&mut out, dashboard.advisory())
        .map_err(|error| output::write_failed(&error))?;

    if let SubmitOutcome::Created(Some(id)) = outcome {
        output::write_field(&mut out, "promotion_id", &id)
            .map_err(|error| output::write_failed(&error))?;
    }

    Ok(())
}
