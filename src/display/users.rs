//! Admin panel user listing

use tabled::{Table, Tabled};

use crate::api::types::UserRecord;

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Role")]
    role: String,
}

/// Format the user account list as a table
pub fn format_users(users: &[UserRecord]) -> String {
    if users.is_empty() {
        return "No users found.".to_string();
    }

    let rows: Vec<UserRow> = users
        .iter()
        .map(|u| UserRow {
            id: u.id,
            name: u.name.clone(),
            email: u.email.clone(),
            role: u.role.clone(),
        })
        .collect();

    Table::new(rows).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_users() {
        let users = vec![UserRecord {
            id: 1,
            name: "Jordan".to_string(),
            email: "jordan@example.com".to_string(),
            role: "Admin".to_string(),
        }];

        let output = format_users(&users);
        assert!(output.contains("Jordan"));
        assert!(output.contains("jordan@example.com"));
        assert!(output.contains("Admin"));
    }

    #[test]
    fn test_empty_users() {
        assert_eq!(format_users(&[]), "No users found.");
    }
}
