//! Hand-written stubs for the ports, shared by the unit tests of this crate.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::{Account, AddAccountModel, RegistrationInput};
use crate::error::{CheckerError, DomainError, RepoError, ValidationError};
use crate::ports::{AddAccount, EmailValidator, PasswordValidator, Validation};

pub fn valid_input() -> RegistrationInput {
    RegistrationInput::new(
        "qualquer_nome",
        "qualquer_@email.com",
        "qualquer_senha",
        "qualquer_senha",
    )
}

pub fn fake_account() -> Account {
    Account {
        id: "valid_id".to_string(),
        name: "valid_nome".to_string(),
        email: "valid_email@email.com".to_string(),
        password: "valid_senha".to_string(),
        access_token: None,
    }
}

/// Checker stub that records every value it is asked about.
pub struct StubChecker {
    outcome: Result<bool, CheckerError>,
    calls: Mutex<Vec<String>>,
}

impl StubChecker {
    pub fn accepting() -> Self {
        Self::with(Ok(true))
    }

    pub fn rejecting() -> Self {
        Self::with(Ok(false))
    }

    pub fn failing() -> Self {
        Self::with(Err(CheckerError::new("stub checker", "boom")))
    }

    fn with(outcome: Result<bool, CheckerError>) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn check(&self, value: &str) -> Result<bool, CheckerError> {
        self.calls.lock().unwrap().push(value.to_string());
        self.outcome.clone()
    }
}

impl EmailValidator for StubChecker {
    fn is_valid(&self, email: &str) -> Result<bool, CheckerError> {
        self.check(email)
    }
}

impl PasswordValidator for StubChecker {
    fn is_valid(&self, password: &str) -> Result<bool, CheckerError> {
        self.check(password)
    }
}

/// Validation stub with a fixed outcome and a call counter.
pub struct CountingValidation {
    outcome: Result<Option<ValidationError>, CheckerError>,
    calls: AtomicUsize,
}

impl CountingValidation {
    pub fn new(outcome: Result<Option<ValidationError>, CheckerError>) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Validation for CountingValidation {
    fn validate(&self, _input: &RegistrationInput) -> Result<Option<ValidationError>, CheckerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

/// `AddAccount` stub that records the models it receives.
pub struct StubAddAccount {
    fail: bool,
    calls: Mutex<Vec<AddAccountModel>>,
}

impl StubAddAccount {
    pub fn returning_fake_account() -> Self {
        Self {
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<AddAccountModel> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AddAccount for StubAddAccount {
    async fn add(&self, account: AddAccountModel) -> Result<Account, DomainError> {
        self.calls.lock().unwrap().push(account);
        if self.fail {
            return Err(RepoError::Connection("stub failure".to_string()).into());
        }
        Ok(fake_account())
    }
}
