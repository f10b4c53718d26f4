use std::io;

use clap::Args;
use promodesk_app::dashboard::Dashboard;

use super::{output, resolve_id};

#[derive(Debug, Args)]
pub(crate) struct DeleteArgs {
    /// Id of the promotion to delete
    #[arg(long)]
    id: String,
}

pub(crate) async fn run(dashboard: &mut Dashboard, args: &DeleteArgs) -> Result<(), String> {
    let id = resolve_id(dashboard, &args.id)?;

    dashboard
        .delete(&id)
        .await
        .map_err(|error| format!("failed to delete promotion: {error}"))?;

    output::write_advisory(&mut io::stdout().lock(), dashboard.advisory())
        .map_err(|error| output::write_failed(&error))
}
