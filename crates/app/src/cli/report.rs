use std::io;

use clap::Args;
use jiff::civil::Date;
use promodesk::views::reports::DateRange;
use promodesk_app::dashboard::Dashboard;

use super::output;

#[derive(Debug, Args)]
pub(crate) struct ReportArgs {
    /// Only count promotions starting on or after this day (YYYY-MM-DD)
    #[arg(long)]
    from: Option<Date>,

    /// Only count promotions ending on or before this day (YYYY-MM-DD)
    #[arg(long)]
    to: Option<Date>,
}

pub(crate) fn run(dashboard: &Dashboard, args: &ReportArgs) -> Result<(), String> {
    let range = DateRange {
        start: args.from,
        end: args.to,
    };

    output::write_report(
        &mut io::stdout().lock(),
        &dashboard.report(range),
        range,
        dashboard.language(),
    )
    .map_err(|error| output::write_failed(&error))
}
