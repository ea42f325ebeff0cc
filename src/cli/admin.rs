//! Admin panel commands

use clap::Subcommand;

use crate::api::ApiClient;
use crate::display::{notify, users};
use crate::error::{EerisError, EerisResult};
use crate::session::{Role, Session};

/// Admin subcommands
#[derive(Subcommand, Debug)]
pub enum AdminCommands {
    /// List all user accounts
    Users,

    /// Change a user's role
    SetRole {
        /// User id
        id: i64,

        /// New role: employee, supervisor, or admin
        role: String,
    },

    /// Delete a user's account
    DeleteUser {
        /// User id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Handle admin subcommands
pub async fn handle_admin_command(
    api: &ApiClient,
    session: &Session,
    cmd: AdminCommands,
) -> EerisResult<()> {
    // The admin panel is only reachable for the admin role; the backend
    // enforces this authoritatively on every endpoint.
    let admin = session
        .current_role()
        .map(|r| r.is_admin())
        .unwrap_or(false);
    if !admin {
        return Err(EerisError::Validation(
            "The admin panel requires the admin role".to_string(),
        ));
    }

    match cmd {
        AdminCommands::Users => {
            let users = api.all_users(session).await?;
            println!("{}", users::format_users(&users));
            Ok(())
        }
        AdminCommands::SetRole { id, role } => {
            let role: Role = role.parse()?;
            let message = api
                .update_user_role(session, id, role.backend_name())
                .await?;
            notify::success(&message);
            Ok(())
        }
        AdminCommands::DeleteUser { id, yes } => {
            if !yes
                && !notify::confirm(&format!(
                    "Are you sure you want to delete user #{}'s account?",
                    id
                ))
            {
                notify::info("Delete canceled.");
                return Ok(());
            }

            let message = api.delete_user(session, id).await?;
            notify::success(&message);
            Ok(())
        }
    }
}
