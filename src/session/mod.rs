//! Session context
//!
//! Holds the bearer token and role handed out at login. The context is an
//! explicit value passed to whoever needs it, not ambient global state, so
//! tests can construct sessions freely. The only client-side persistence is
//! the two opaque values (token, role) in a session file, cleared on logout,
//! password change, and account deletion.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::EerisPaths;
use crate::error::{EerisError, EerisResult};

/// User role as assigned by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Employee,
    Supervisor,
    Admin,
}

impl Role {
    /// Whether this role sees other users' records (the "User" column,
    /// the all-users history endpoint, review actions)
    pub fn is_elevated(&self) -> bool {
        matches!(self, Self::Supervisor | Self::Admin)
    }

    /// Whether this role may administer user accounts
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// The capitalized role name the backend's role table uses
    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Employee => "Employee",
            Self::Supervisor => "Supervisor",
            Self::Admin => "Admin",
        }
    }

    /// The backend's numeric role id used at registration
    pub fn backend_role_id(&self) -> i64 {
        match self {
            Self::Employee => 1,
            Self::Supervisor => 2,
            Self::Admin => 3,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Employee => "employee",
            Self::Supervisor => "supervisor",
            Self::Admin => "admin",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Role {
    type Err = EerisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "employee" => Ok(Self::Employee),
            "supervisor" => Ok(Self::Supervisor),
            "admin" => Ok(Self::Admin),
            other => Err(EerisError::Validation(format!("Unknown role: {}", other))),
        }
    }
}

/// The authenticated state of this client
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Credentials {
    token: String,
    role: Role,
}

/// Session context consulted before every gated action
///
/// An unauthenticated session carries no credentials; accessors report that
/// instead of panicking so callers can redirect to `eeris login`.
#[derive(Debug, Clone, Default)]
pub struct Session {
    credentials: Option<Credentials>,
}

impl Session {
    /// Create an unauthenticated session
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful login
    pub fn establish(&mut self, token: impl Into<String>, role: Role) {
        self.credentials = Some(Credentials {
            token: token.into(),
            role,
        });
    }

    /// Forget the credentials (logout, password change, account deletion)
    pub fn clear(&mut self) {
        self.credentials = None;
    }

    /// Whether a login has been recorded
    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    /// The current role, if authenticated
    pub fn current_role(&self) -> Option<Role> {
        self.credentials.as_ref().map(|c| c.role)
    }

    /// The current bearer token, if authenticated
    pub fn current_token(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.token.as_str())
    }

    /// The token, or an error directing the user to log in
    pub fn require_token(&self) -> EerisResult<&str> {
        self.current_token()
            .ok_or_else(|| EerisError::Unauthorized("run `eeris login` first".to_string()))
    }

    /// Load the persisted session, or an unauthenticated one if none exists
    pub fn load(paths: &EerisPaths) -> EerisResult<Self> {
        let path = paths.session_file();
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| EerisError::Io(format!("Failed to read session: {}", e)))?;
        let credentials: Credentials = serde_json::from_str(&content)
            .map_err(|e| EerisError::Json(format!("Failed to parse session: {}", e)))?;

        Ok(Self {
            credentials: Some(credentials),
        })
    }

    /// Persist the current credentials (or remove the file when cleared)
    pub fn save(&self, paths: &EerisPaths) -> EerisResult<()> {
        let path = paths.session_file();
        match &self.credentials {
            Some(credentials) => {
                paths.ensure_directories()?;
                let content = serde_json::to_string_pretty(credentials)
                    .map_err(|e| EerisError::Json(format!("Failed to serialize session: {}", e)))?;
                std::fs::write(&path, content)
                    .map_err(|e| EerisError::Io(format!("Failed to write session: {}", e)))?;
            }
            None => {
                if path.exists() {
                    std::fs::remove_file(&path)
                        .map_err(|e| EerisError::Io(format!("Failed to remove session: {}", e)))?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_establish_and_read() {
        let mut session = Session::new();
        assert!(!session.is_authenticated());

        session.establish("opaque-token", Role::Supervisor);
        assert!(session.is_authenticated());
        assert_eq!(session.current_role(), Some(Role::Supervisor));
        assert_eq!(session.current_token(), Some("opaque-token"));
    }

    #[test]
    fn test_clear_reports_unauthenticated() {
        let mut session = Session::new();
        session.establish("opaque-token", Role::Admin);
        session.clear();

        assert!(!session.is_authenticated());
        assert_eq!(session.current_role(), None);
        assert_eq!(session.current_token(), None);
        assert!(session.require_token().is_err());
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("Supervisor".parse::<Role>().unwrap(), Role::Supervisor);
        assert!("manager".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_gates() {
        assert!(Role::Admin.is_elevated());
        assert!(Role::Supervisor.is_elevated());
        assert!(!Role::Employee.is_elevated());
        assert!(Role::Admin.is_admin());
        assert!(!Role::Supervisor.is_admin());
    }

    #[test]
    fn test_persistence_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EerisPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut session = Session::new();
        session.establish("tok-123", Role::Employee);
        session.save(&paths).unwrap();

        let loaded = Session::load(&paths).unwrap();
        assert_eq!(loaded.current_token(), Some("tok-123"));
        assert_eq!(loaded.current_role(), Some(Role::Employee));
    }

    #[test]
    fn test_clear_removes_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EerisPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut session = Session::new();
        session.establish("tok-123", Role::Employee);
        session.save(&paths).unwrap();
        assert!(paths.session_file().exists());

        session.clear();
        session.save(&paths).unwrap();
        assert!(!paths.session_file().exists());

        let loaded = Session::load(&paths).unwrap();
        assert!(!loaded.is_authenticated());
    }
}
