//! Login, registration, and logout

use std::io::{self, BufRead, Write};

use crate::api::types::RegisterRequest;
use crate::api::ApiClient;
use crate::config::EerisPaths;
use crate::display::notify;
use crate::error::{EerisError, EerisResult};
use crate::session::{Role, Session};

/// Handle `eeris login`
pub async fn handle_login(
    api: &ApiClient,
    session: &mut Session,
    paths: &EerisPaths,
    email: Option<String>,
) -> EerisResult<()> {
    let email = match email {
        Some(email) => email,
        None => prompt_line("Email: ")?,
    };
    let password = rpassword::prompt_password("Password: ")
        .map_err(|e| EerisError::Io(format!("Failed to read password: {}", e)))?;

    if email.trim().is_empty() || password.is_empty() {
        return Err(EerisError::Validation(
            "Please enter valid credentials".to_string(),
        ));
    }

    let (token, role) = api.login(email.trim(), &password).await?;
    session.establish(token, role);
    session.save(paths)?;

    notify::success(&format!("Logged in as {} ({})", email.trim(), role));
    Ok(())
}

/// Handle `eeris register`
pub async fn handle_register(
    api: &ApiClient,
    name: String,
    email: String,
    role: Role,
) -> EerisResult<()> {
    if name.trim().is_empty() || email.trim().is_empty() {
        return Err(EerisError::Validation(
            "Name and email are required".to_string(),
        ));
    }

    let password = rpassword::prompt_password("Password: ")
        .map_err(|e| EerisError::Io(format!("Failed to read password: {}", e)))?;
    if password.is_empty() {
        return Err(EerisError::Validation("A password is required".to_string()));
    }

    let message = api
        .register(&RegisterRequest {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password,
            role_id: role.backend_role_id(),
        })
        .await?;

    notify::success(&message);
    notify::info("Log in with `eeris login`.");
    Ok(())
}

/// Handle `eeris logout`
pub fn handle_logout(session: &mut Session, paths: &EerisPaths) -> EerisResult<()> {
    if !session.is_authenticated() {
        notify::info("No session to log out of.");
        return Ok(());
    }

    session.clear();
    session.save(paths)?;
    notify::success("Logged out.");
    Ok(())
}

fn prompt_line(prompt: &str) -> EerisResult<String> {
    print!("{}", prompt);
    io::stdout()
        .flush()
        .map_err(|e| EerisError::Io(e.to_string()))?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| EerisError::Io(e.to_string()))?;
    Ok(line.trim().to_string())
}
