//! Sign-up controller.

use std::sync::Arc;

use crate::domain::{Account, RegistrationInput};
use crate::ports::{AddAccount, Validation};

use super::http::{HttpRequest, HttpResponse, bad_request, server_error, success};

/// Handles a registration request end to end.
///
/// The request is validated first. A rejection answers 400 and a checker
/// failure answers 500, both without touching the use case. A valid request
/// calls [`AddAccount`] exactly once: a failure answers 500, a created
/// account answers 200 with the account as returned by the use case.
#[derive(Clone)]
pub struct SignUpController {
    validation: Arc<dyn Validation>,
    add_account: Arc<dyn AddAccount>,
}

impl SignUpController {
    pub fn new(validation: Arc<dyn Validation>, add_account: Arc<dyn AddAccount>) -> Self {
        Self {
            validation,
            add_account,
        }
    }

    pub async fn handle(&self, request: HttpRequest<RegistrationInput>) -> HttpResponse<Account> {
        let input = request.body;

        match self.validation.validate(&input) {
            Ok(None) => {}
            Ok(Some(error)) => {
                tracing::debug!(field = %error.field(), %error, "Sign-up rejected");
                return bad_request(error);
            }
            Err(error) => {
                tracing::error!(%error, "Sign-up validation crashed");
                return server_error();
            }
        }

        let account = match input.into_account_model() {
            Ok(account) => account,
            Err(error) => return bad_request(error),
        };

        match self.add_account.add(account).await {
            Ok(account) => {
                tracing::info!(account_id = %account.id, "Account created");
                success(account)
            }
            Err(error) => {
                tracing::error!(%error, "Failed to add account");
                server_error()
            }
        }
    }
}
