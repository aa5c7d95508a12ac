//! End-to-end flows through the public API: registration, throttled login,
//! and the online banking lifecycle, wired with the real bcrypt verifier and
//! JWT issuer.

use std::sync::Arc;

use rust_decimal::Decimal;

use bl_core::errors::DomainError;
use bl_core::repositories::{InMemoryAccountRepository, InMemoryUserRepository};
use bl_core::services::auth::{AttemptTracker, AuthService};
use bl_core::services::banking::BankingService;
use bl_core::services::password::BcryptPasswordVerifier;
use bl_core::services::token::{JwtTokenIssuer, TokenIssuer};
use bl_core::services::users::UserService;

// The minimum bcrypt cost keeps the suite fast; the flows are identical.
fn verifier() -> Arc<BcryptPasswordVerifier> {
    Arc::new(BcryptPasswordVerifier::new(4))
}

#[tokio::test]
async fn register_login_throttle_flow() {
    let users = Arc::new(InMemoryUserRepository::new());
    let verifier = verifier();
    let issuer = Arc::new(JwtTokenIssuer::with_defaults());

    let user_service = UserService::new(Arc::clone(&users), Arc::clone(&verifier));
    let auth_service = AuthService::new(
        users,
        Arc::clone(&verifier),
        Arc::clone(&issuer),
        Arc::new(AttemptTracker::with_defaults()),
    )
    .unwrap();

    let registered = user_service
        .register("Anna", "Anna@Example.com", "s3cret")
        .await
        .unwrap();

    // Four failures, then a success that clears the counter.
    for _ in 0..4 {
        let err = auth_service
            .authenticate("anna@example.com", "wrong")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidCredentials));
    }

    let login = auth_service
        .authenticate("anna@example.com", "s3cret")
        .await
        .unwrap();
    assert_eq!(login.user_id, registered.id);
    assert_eq!(login.login_attempts, 4);

    let claims = issuer.decode(&login.token).unwrap();
    assert_eq!(claims.sub, "anna@example.com");
    assert_eq!(claims.uid, registered.id);

    // Five fresh failures lock the identity out entirely.
    for _ in 0..5 {
        auth_service
            .authenticate("anna@example.com", "wrong")
            .await
            .unwrap_err();
    }
    let err = auth_service
        .authenticate("anna@example.com", "s3cret")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::LockedOut));
}

#[tokio::test]
async fn banking_lifecycle_flow() {
    let banking = BankingService::new(Arc::new(InMemoryAccountRepository::new()), verifier()).unwrap();

    let account = banking
        .open_account("Anna", "anna@bank.example", "pin-code", Decimal::from(500))
        .await
        .unwrap();

    let after_deposit = banking
        .adjust_balance(account.id, "anna@bank.example", "pin-code", Decimal::from(250))
        .await
        .unwrap();
    assert_eq!(after_deposit, Decimal::from(750));

    let after_withdrawal = banking
        .adjust_balance(account.id, "anna@bank.example", "pin-code", Decimal::from(-100))
        .await
        .unwrap();
    assert_eq!(after_withdrawal, Decimal::from(650));

    assert_eq!(
        banking
            .balance_of("anna@bank.example", "pin-code")
            .await
            .unwrap(),
        Decimal::from(650)
    );

    banking
        .close_account(account.id, "anna@bank.example", "pin-code")
        .await
        .unwrap();

    let err = banking
        .balance_of("anna@bank.example", "pin-code")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidCredentials));
}

#[tokio::test]
async fn user_and_bank_namespaces_are_disjoint() {
    let users = Arc::new(InMemoryUserRepository::new());
    let verifier = verifier();
    let user_service = UserService::new(users, Arc::clone(&verifier));
    let banking = BankingService::new(Arc::new(InMemoryAccountRepository::new()), verifier).unwrap();

    // The same email may exist once per namespace.
    user_service
        .register("Anna", "anna@example.com", "pw")
        .await
        .unwrap();
    banking
        .open_account("Anna", "anna@example.com", "pin", Decimal::ZERO)
        .await
        .unwrap();

    let err = banking
        .open_account("Anna", "anna@example.com", "pin", Decimal::ZERO)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::EmailTaken));
}
