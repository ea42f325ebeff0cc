//! API client
//!
//! HTTP client for the EERIS backend. The session context is passed in
//! explicitly for every authenticated call; the client itself holds no
//! credentials.

use reqwest::multipart;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

use crate::error::{EerisError, EerisResult};
use crate::models::{ExpenseDraft, HistoryEntry, ReceiptStatus};
use crate::session::{Role, Session};

use super::types::*;

/// EERIS backend client
pub struct ApiClient {
    /// HTTP client
    client: Client,
    /// Base URL of the backend
    base_url: String,
}

impl ApiClient {
    /// Create a new client
    pub fn new(base_url: impl Into<String>) -> EerisResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| EerisError::Connection(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, builder: RequestBuilder, session: &Session) -> EerisResult<RequestBuilder> {
        let token = session.require_token()?;
        Ok(builder.bearer_auth(token))
    }

    /// Authenticate and return the issued token and role
    pub async fn login(&self, email: &str, password: &str) -> EerisResult<(String, Role)> {
        debug!(email, "POST /login");
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self
            .client
            .post(self.url("/login"))
            .json(&request)
            .send()
            .await?;

        let body: LoginResponse = parse(response).await?;
        let role = body.role.parse::<Role>()?;
        Ok((body.token, role))
    }

    /// Register a new account
    pub async fn register(&self, request: &RegisterRequest) -> EerisResult<String> {
        debug!(email = %request.email, "POST /register");
        let response = self
            .client
            .post(self.url("/register"))
            .json(request)
            .send()
            .await?;

        message(response, "User registered successfully!").await
    }

    /// List all user accounts (admin only)
    pub async fn all_users(&self, session: &Session) -> EerisResult<Vec<UserRecord>> {
        debug!("GET /all-users");
        let builder = self.client.get(self.url("/all-users"));
        let response = self.authorized(builder, session)?.send().await?;

        let body: UsersResponse = parse(response).await?;
        Ok(body.users)
    }

    /// Change another user's role (admin only)
    pub async fn update_user_role(
        &self,
        session: &Session,
        user_id: i64,
        role: &str,
    ) -> EerisResult<String> {
        debug!(user_id, role, "POST /update-user-role");
        let builder = self
            .client
            .post(self.url(&format!("/update-user-role/{}", user_id)))
            .json(&UpdateRoleRequest {
                role: role.to_string(),
            });
        let response = self.authorized(builder, session)?.send().await?;

        message(response, "User role updated successfully").await
    }

    /// Delete another user's account (admin only)
    pub async fn delete_user(&self, session: &Session, user_id: i64) -> EerisResult<String> {
        debug!(user_id, "DELETE /delete-user");
        let builder = self
            .client
            .delete(self.url(&format!("/delete-user/{}", user_id)));
        let response = self.authorized(builder, session)?.send().await?;

        message(response, "User deleted successfully!").await
    }

    /// Fetch the receipt tiles visible to this session
    pub async fn fetch_receipts(&self, session: &Session) -> EerisResult<ReceiptsResponse> {
        debug!("GET /fetch-receipts");
        let builder = self.client.get(self.url("/fetch-receipts"));
        let response = self.authorized(builder, session)?.send().await?;

        parse(response).await
    }

    /// Fetch spending statistics
    pub async fn statistics(&self, session: &Session) -> EerisResult<StatisticsResponse> {
        debug!("GET /statistics");
        let builder = self.client.get(self.url("/statistics"));
        let response = self.authorized(builder, session)?.send().await?;

        parse(response).await
    }

    /// Fetch the line items and submitter of one receipt
    pub async fn receipt_details(
        &self,
        session: &Session,
        receipt_id: i64,
    ) -> EerisResult<ReceiptDetailsResponse> {
        debug!(receipt_id, "GET /receipt-details");
        let builder = self
            .client
            .get(self.url(&format!("/receipt-details/{}", receipt_id)));
        let response = self.authorized(builder, session)?.send().await?;

        parse(response).await
    }

    /// Approve or reject a receipt (supervisor review)
    pub async fn update_receipt_status(
        &self,
        session: &Session,
        receipt_id: i64,
        status: ReceiptStatus,
    ) -> EerisResult<String> {
        if status == ReceiptStatus::Pending {
            return Err(EerisError::Validation(
                "A review can only approve or reject".to_string(),
            ));
        }

        debug!(receipt_id, %status, "POST /update-receipt-status");
        let builder = self
            .client
            .post(self.url(&format!("/update-receipt-status/{}", receipt_id)))
            .json(&UpdateStatusRequest { status });
        let response = self.authorized(builder, session)?.send().await?;

        message(response, "Receipt status updated").await
    }

    /// Delete a receipt (admin only)
    pub async fn delete_receipt(&self, session: &Session, receipt_id: i64) -> EerisResult<String> {
        debug!(receipt_id, "DELETE /delete-receipt");
        let builder = self
            .client
            .delete(self.url(&format!("/delete-receipt/{}", receipt_id)));
        let response = self.authorized(builder, session)?.send().await?;

        message(response, "Receipt deleted successfully").await
    }

    /// Submit a completed expense draft
    pub async fn submit_manual_receipt(
        &self,
        session: &Session,
        draft: &ExpenseDraft,
    ) -> EerisResult<String> {
        debug!(store = %draft.store, category = %draft.category, "POST /manual-receipt");
        let builder = self.client.post(self.url("/manual-receipt")).json(draft);
        let response = self.authorized(builder, session)?.send().await?;

        message(response, "Receipt and items submitted successfully!").await
    }

    /// Upload a receipt image for OCR extraction
    ///
    /// The file is not stored backend-side as a receipt; the response is the
    /// extraction result for the user to review and correct.
    pub async fn upload_receipt(
        &self,
        session: &Session,
        file_path: &Path,
    ) -> EerisResult<ExtractionResponse> {
        let file_name = file_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| EerisError::Validation("Invalid receipt file name".to_string()))?
            .to_string();

        let bytes = std::fs::read(file_path)
            .map_err(|e| EerisError::Io(format!("Failed to read {}: {}", file_path.display(), e)))?;

        debug!(file = %file_name, size = bytes.len(), "POST /upload-receipt");
        let part = multipart::Part::bytes(bytes).file_name(file_name);
        let form = multipart::Form::new().part("receipt", part);

        let builder = self.client.post(self.url("/upload-receipt")).multipart(form);
        let response = self.authorized(builder, session)?.send().await?;

        parse(response).await
    }

    /// Fetch the expense history appropriate to the session's role
    pub async fn expense_history(&self, session: &Session) -> EerisResult<Vec<HistoryEntry>> {
        let elevated = session
            .current_role()
            .map(|r| r.is_elevated())
            .unwrap_or(false);
        let path = if elevated {
            "/all-expense-history"
        } else {
            "/user-expense-history"
        };

        debug!(path, "GET expense history");
        let builder = self.client.get(self.url(path));
        let response = self.authorized(builder, session)?.send().await?;

        let body: HistoryResponse = parse(response).await?;
        Ok(body.history)
    }

    /// Change the logged-in user's password
    pub async fn change_password(
        &self,
        session: &Session,
        current_password: &str,
        new_password: &str,
    ) -> EerisResult<String> {
        debug!("POST /change-password");
        let builder = self
            .client
            .post(self.url("/change-password"))
            .json(&ChangePasswordRequest {
                current_password: current_password.to_string(),
                new_password: new_password.to_string(),
            });
        let response = self.authorized(builder, session)?.send().await?;

        message(response, "Password changed successfully!").await
    }

    /// Delete the logged-in user's account
    pub async fn delete_account(&self, session: &Session) -> EerisResult<String> {
        debug!("DELETE /delete-account");
        let builder = self.client.delete(self.url("/delete-account"));
        let response = self.authorized(builder, session)?.send().await?;

        message(response, "Account deleted successfully!").await
    }
}

/// Parse a successful response body, or turn a failure status into an error
///
/// Failure bodies are the backend's `{"error": "..."}` envelope when they
/// parse, raw text otherwise.
async fn parse<T: DeserializeOwned>(response: Response) -> EerisResult<T> {
    let status = response.status();
    if status.is_success() {
        Ok(response.json().await?)
    } else {
        Err(error_from(status.as_u16(), response).await)
    }
}

/// Parse a `{message}` envelope, falling back to a default on absent text
async fn message(response: Response, default: &str) -> EerisResult<String> {
    let body: MessageResponse = parse(response).await?;
    Ok(body.message.unwrap_or_else(|| default.to_string()))
}

async fn error_from(status: u16, response: Response) -> EerisError {
    let text = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<MessageResponse>(&text)
        .ok()
        .and_then(|m| m.error.or(m.message))
        .unwrap_or(text);
    EerisError::api(status, detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client = ApiClient::new("http://127.0.0.1:5000/").unwrap();
        assert_eq!(client.url("/login"), "http://127.0.0.1:5000/login");
    }

    #[test]
    fn test_authorized_requires_session() {
        let client = ApiClient::new("http://127.0.0.1:5000").unwrap();
        let session = Session::new();

        let builder = client.client.get(client.url("/fetch-receipts"));
        let result = client.authorized(builder, &session);
        assert!(matches!(result, Err(EerisError::Unauthorized(_))));
    }
}
