//! Dependency wiring: builds controllers from concrete adapters.

use std::sync::Arc;

use signup_core::ports::AccountRepository;
use signup_core::presentation::SignUpController;
use signup_core::usecases::DbAddAccount;
use signup_core::validation::ValidationComposite;
use signup_infra::{
    Argon2PasswordService, EmailFormatValidator, PasswordPolicy, PasswordStrengthValidator,
};

pub fn make_sign_up_validation(policy: PasswordPolicy) -> ValidationComposite {
    ValidationComposite::sign_up(
        Arc::new(EmailFormatValidator::new()),
        Arc::new(PasswordStrengthValidator::new(policy)),
    )
}

pub fn make_sign_up_controller(
    repository: Arc<dyn AccountRepository>,
    policy: PasswordPolicy,
) -> SignUpController {
    let add_account = DbAddAccount::new(Arc::new(Argon2PasswordService::new()), repository);
    SignUpController::new(
        Arc::new(make_sign_up_validation(policy)),
        Arc::new(add_account),
    )
}
