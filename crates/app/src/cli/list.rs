use std::io;

use clap::Args;
use promodesk::{
    promotions::PromotionField,
    views::sorting::{SortConfig, SortDirection},
};
use promodesk_app::dashboard::Dashboard;

use super::output;

#[derive(Debug, Args)]
pub(crate) struct ListArgs {
    /// Case-sensitive text matched against name, displayed dates and amounts
    #[arg(long, default_value = "")]
    search: String,

    /// Column to sort by (name, startDate, endDate, budget, salesImpact)
    #[arg(long, default_value = "name")]
    sort: PromotionField,

    /// Sort in descending order
    #[arg(long)]
    desc: bool,
}

pub(crate) fn run(dashboard: &mut Dashboard, args: ListArgs) -> Result<(), String> {
    let direction = if args.desc {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    };

    dashboard.set_sort(SortConfig::new(args.sort, direction));
    dashboard.set_search(args.search);

    output::write_promotions(
        &mut io::stdout().lock(),
        &dashboard.visible_promotions(),
        dashboard.language(),
    )
    .map_err(|error| output::write_failed(&error))
}
