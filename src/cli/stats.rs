//! Statistics command

use crate::api::ApiClient;
use crate::config::Settings;
use crate::display::stats;
use crate::error::EerisResult;
use crate::session::Session;

/// Handle `eeris stats`
pub async fn handle_stats(
    api: &ApiClient,
    session: &Session,
    settings: &Settings,
) -> EerisResult<()> {
    let response = api.statistics(session).await?;
    print!(
        "{}",
        stats::format_statistics(&response, &settings.currency_symbol)
    );
    Ok(())
}
