//! Unit tests for the authentication service

use std::sync::Arc;

use crate::domain::entities::User;
use crate::errors::DomainError;
use crate::repositories::{InMemoryUserRepository, UserRepository};
use crate::services::auth::{AttemptTracker, AuthService};

use super::mocks::{CountingVerifier, StaticTokenIssuer};

type TestAuthService = AuthService<InMemoryUserRepository, CountingVerifier, StaticTokenIssuer>;

async fn service_with_user(
    email: &str,
    password: &str,
) -> (TestAuthService, Arc<CountingVerifier>) {
    let repo = Arc::new(InMemoryUserRepository::new());
    repo.create(User::new(
        "Anna".to_string(),
        email.to_string(),
        CountingVerifier::hash_of(password),
    ))
    .await
    .unwrap();

    let verifier = Arc::new(CountingVerifier::new());
    let service = AuthService::new(
        repo,
        Arc::clone(&verifier),
        Arc::new(StaticTokenIssuer),
        Arc::new(AttemptTracker::with_defaults()),
    )
    .unwrap();

    (service, verifier)
}

#[tokio::test]
async fn successful_login_returns_token_and_attempt_count() {
    let (service, _) = service_with_user("anna@example.com", "s3cret").await;

    let response = service.authenticate("anna@example.com", "s3cret").await.unwrap();
    assert_eq!(response.email, "anna@example.com");
    assert!(response.token.starts_with("token-"));
    assert_eq!(response.login_attempts, 0);
}

#[tokio::test]
async fn unknown_email_and_wrong_password_are_indistinguishable() {
    let (service, _) = service_with_user("anna@example.com", "s3cret").await;

    let unknown = service
        .authenticate("ghost@example.com", "s3cret")
        .await
        .unwrap_err();
    let wrong = service
        .authenticate("anna@example.com", "not-it")
        .await
        .unwrap_err();

    assert!(matches!(unknown, DomainError::InvalidCredentials));
    assert!(matches!(wrong, DomainError::InvalidCredentials));
    assert_eq!(unknown.to_string(), wrong.to_string());
}

#[tokio::test]
async fn both_failure_paths_cost_one_verifier_call() {
    let (service, verifier) = service_with_user("anna@example.com", "s3cret").await;

    service
        .authenticate("ghost@example.com", "guess")
        .await
        .unwrap_err();
    assert_eq!(verifier.match_calls(), 1);

    service
        .authenticate("anna@example.com", "guess")
        .await
        .unwrap_err();
    assert_eq!(verifier.match_calls(), 2);
}

#[tokio::test]
async fn sixth_attempt_is_locked_out_without_verifier_call() {
    let (service, verifier) = service_with_user("anna@example.com", "s3cret").await;

    for _ in 0..5 {
        let err = service
            .authenticate("anna@example.com", "wrong")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidCredentials));
    }
    assert_eq!(verifier.match_calls(), 5);

    // Even the correct password is refused while locked out, and the
    // verifier is never consulted.
    let err = service
        .authenticate("anna@example.com", "s3cret")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::LockedOut));
    assert_eq!(verifier.match_calls(), 5);
}

#[tokio::test]
async fn success_clears_the_attempt_count() {
    let (service, _) = service_with_user("anna@example.com", "s3cret").await;

    for _ in 0..3 {
        service
            .authenticate("anna@example.com", "wrong")
            .await
            .unwrap_err();
    }

    let response = service.authenticate("anna@example.com", "s3cret").await.unwrap();
    assert_eq!(response.login_attempts, 3);

    // A failure after a success starts counting from 1 again.
    service
        .authenticate("anna@example.com", "wrong")
        .await
        .unwrap_err();
    assert_eq!(service.failed_attempts("anna@example.com"), 1);
}

#[tokio::test]
async fn email_matching_is_case_insensitive() {
    let (service, _) = service_with_user("anna@example.com", "s3cret").await;

    let response = service
        .authenticate("  Anna@Example.COM ", "s3cret")
        .await
        .unwrap();
    assert_eq!(response.email, "anna@example.com");

    // Throttling keys on the normalized identity too.
    service
        .authenticate("ANNA@EXAMPLE.COM", "wrong")
        .await
        .unwrap_err();
    assert_eq!(service.failed_attempts("anna@example.com"), 1);
}
