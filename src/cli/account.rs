//! Account maintenance commands
//!
//! Password changes force a logout (the issued token is for the old
//! credentials); account deletion clears the session too.

use clap::Subcommand;

use crate::api::ApiClient;
use crate::config::EerisPaths;
use crate::display::notify;
use crate::error::{EerisError, EerisResult};
use crate::session::Session;

/// Account subcommands
#[derive(Subcommand, Debug)]
pub enum AccountCommands {
    /// Change your password (logs you out on success)
    ChangePassword,

    /// Delete your account permanently
    Delete {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Handle account subcommands
pub async fn handle_account_command(
    api: &ApiClient,
    session: &mut Session,
    paths: &EerisPaths,
    cmd: AccountCommands,
) -> EerisResult<()> {
    match cmd {
        AccountCommands::ChangePassword => handle_change_password(api, session, paths).await,
        AccountCommands::Delete { yes } => handle_delete(api, session, paths, yes).await,
    }
}

async fn handle_change_password(
    api: &ApiClient,
    session: &mut Session,
    paths: &EerisPaths,
) -> EerisResult<()> {
    let current = rpassword::prompt_password("Current password: ")
        .map_err(|e| EerisError::Io(format!("Failed to read password: {}", e)))?;
    if current.is_empty() {
        return Err(EerisError::Validation(
            "Password change canceled".to_string(),
        ));
    }

    let new_password = rpassword::prompt_password("New password: ")
        .map_err(|e| EerisError::Io(format!("Failed to read password: {}", e)))?;
    let confirmation = rpassword::prompt_password("Confirm new password: ")
        .map_err(|e| EerisError::Io(format!("Failed to read password: {}", e)))?;

    if new_password.is_empty() {
        return Err(EerisError::Validation(
            "Password change canceled".to_string(),
        ));
    }
    if new_password != confirmation {
        return Err(EerisError::Validation(
            "New passwords do not match".to_string(),
        ));
    }

    let message = api.change_password(session, &current, &new_password).await?;
    notify::success(&message);

    // The token was issued against the old password; force a fresh login
    session.clear();
    session.save(paths)?;
    notify::info("You have been logged out; run `eeris login` with your new password.");
    Ok(())
}

async fn handle_delete(
    api: &ApiClient,
    session: &mut Session,
    paths: &EerisPaths,
    yes: bool,
) -> EerisResult<()> {
    if !yes
        && !notify::confirm("Are you sure you want to delete your account? This cannot be undone.")
    {
        notify::info("Delete canceled.");
        return Ok(());
    }

    let message = api.delete_account(session).await?;
    notify::success(&message);

    session.clear();
    session.save(paths)?;
    Ok(())
}
