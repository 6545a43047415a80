//! Sign-up handler.

use actix_web::{HttpResponse, http::StatusCode, web};

use signup_core::domain::{Account, RegistrationInput};
use signup_core::error::ServerError;
use signup_core::presentation::{self, ResponseBody};
use signup_shared::ErrorResponse;
use signup_shared::dto::{AccountResponse, SignUpRequest};

use crate::state::AppState;

/// POST /api/signup
pub async fn sign_up(state: web::Data<AppState>, body: web::Json<SignUpRequest>) -> HttpResponse {
    let request = presentation::HttpRequest::new(registration_input(body.into_inner()));
    let response = state.sign_up.handle(request).await;
    into_http_response(response)
}

fn registration_input(req: SignUpRequest) -> RegistrationInput {
    RegistrationInput {
        name: req.nome,
        email: req.email,
        password: req.senha,
        password_confirmation: req.senha_confirme,
    }
}

fn account_response(account: Account) -> AccountResponse {
    AccountResponse {
        id: account.id,
        nome: account.name,
        email: account.email,
        senha: account.password,
        access_token: account.access_token,
    }
}

fn into_http_response(response: presentation::HttpResponse<Account>) -> HttpResponse {
    let status =
        StatusCode::from_u16(response.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut builder = HttpResponse::build(status);

    match response.body {
        ResponseBody::Ok(account) => builder.json(account_response(account)),
        ResponseBody::BadRequest(error) => {
            builder.json(ErrorResponse::new(error.field().as_str(), error.to_string()))
        }
        ResponseBody::ServerError(error) => {
            builder.json(ErrorResponse::new(ServerError::NAME, error.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, test};
    use async_trait::async_trait;
    use serde_json::{Value, json};

    use signup_core::domain::AddAccountModel;
    use signup_core::error::{DomainError, RepoError};
    use signup_core::ports::AddAccount;
    use signup_core::presentation::SignUpController;
    use signup_infra::{InMemoryAccountRepository, PasswordPolicy};

    use super::*;
    use crate::factories::{make_sign_up_controller, make_sign_up_validation};
    use crate::handlers::configure_routes;
    use crate::middleware::error::json_config;

    const STRONG_PASSWORD: &str = "Valid_senha1";

    fn valid_body() -> Value {
        json!({
            "nome": "valid_nome",
            "email": "valid_email@email.com",
            "senha": STRONG_PASSWORD,
            "senhaConfirme": STRONG_PASSWORD,
        })
    }

    fn in_memory_state() -> AppState {
        AppState::new(make_sign_up_controller(
            Arc::new(InMemoryAccountRepository::new()),
            PasswordPolicy::default(),
        ))
    }

    async fn post(state: AppState, body: Value) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(json_config())
                .configure(configure_routes),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/signup")
            .set_json(body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_sign_up_returns_created_account() {
        let (status, body) = post(in_memory_state(), valid_body()).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
        assert_eq!(body["nome"], "valid_nome");
        assert_eq!(body["email"], "valid_email@email.com");
        assert!(body["senha"].as_str().unwrap().starts_with("$argon2"));
        assert!(body.get("senhaConfirme").is_none());
        assert!(body.get("accessToken").is_none());
    }

    #[actix_web::test]
    async fn test_sign_up_reports_missing_field() {
        let mut body = valid_body();
        body.as_object_mut().unwrap().remove("senhaConfirme");

        let (status, body) = post(in_memory_state(), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "name": "senhaConfirme", "message": "Missing param: senhaConfirme" })
        );
    }

    #[actix_web::test]
    async fn test_sign_up_treats_empty_field_as_missing() {
        let mut body = valid_body();
        body["nome"] = json!("");

        let (status, body) = post(in_memory_state(), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["name"], "nome");
    }

    #[actix_web::test]
    async fn test_sign_up_reports_mismatched_confirmation() {
        let mut body = valid_body();
        body["senhaConfirme"] = json!("Other_senha1");

        let (status, body) = post(in_memory_state(), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "name": "senhaConfirme", "message": "Invalid param: senhaConfirme" })
        );
    }

    #[actix_web::test]
    async fn test_sign_up_reports_invalid_email() {
        let mut body = valid_body();
        body["email"] = json!("invalid_email");

        let (status, body) = post(in_memory_state(), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "name": "email", "message": "Invalid param: email" }));
    }

    #[actix_web::test]
    async fn test_sign_up_reports_weak_password() {
        let mut body = valid_body();
        body["senha"] = json!("weak");
        body["senhaConfirme"] = json!("weak");

        let (status, body) = post(in_memory_state(), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "name": "senha", "message": "Invalid param: senha" }));
    }

    #[actix_web::test]
    async fn test_sign_up_twice_with_same_email_is_server_error() {
        let state = in_memory_state();
        let (first, _) = post(state.clone(), valid_body()).await;

        let (status, body) = post(state, valid_body()).await;

        assert_eq!(first, StatusCode::OK);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({ "name": "ServerError", "message": "Internal server error" })
        );
    }

    struct FailingAddAccount;

    #[async_trait]
    impl AddAccount for FailingAddAccount {
        async fn add(&self, _account: AddAccountModel) -> Result<Account, DomainError> {
            Err(RepoError::Connection("connection refused by 10.0.0.5".to_string()).into())
        }
    }

    #[actix_web::test]
    async fn test_sign_up_hides_use_case_failure_details() {
        let state = AppState::new(SignUpController::new(
            Arc::new(make_sign_up_validation(PasswordPolicy::default())),
            Arc::new(FailingAddAccount),
        ));

        let (status, body) = post(state, valid_body()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["name"], "ServerError");
        assert!(!body.to_string().contains("10.0.0.5"));
    }

    #[actix_web::test]
    async fn test_sign_up_rejects_malformed_json() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(in_memory_state()))
                .app_data(json_config())
                .configure(configure_routes),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/signup")
            .insert_header(("content-type", "application/json"))
            .set_payload(r#"{"nome": "sara", "#)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["name"], "body");
    }

    #[actix_web::test]
    async fn test_sign_up_rejects_wrongly_typed_field() {
        let mut body = valid_body();
        body["nome"] = json!(42);

        let (status, body) = post(in_memory_state(), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["name"], "body");
    }
}
