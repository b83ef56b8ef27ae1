//! Account creation and authentication.

mod common;

use common::{create_user, test_env};
use profnet_core::user::{NewAccount, ProfileUpdate};

#[tokio::test]
async fn authenticate_requires_the_exact_pair() {
    let env = test_env().await;
    create_user(&env, "alice", "pw1").await;

    assert_eq!(env.accounts.authenticate("alice", "pw1").await.unwrap(), "alice");

    let wrong_password = env.accounts.authenticate("alice", "pw2").await.unwrap_err();
    assert!(wrong_password.is_not_authenticated());

    // An unknown login is indistinguishable from a wrong password.
    let unknown_user = env.accounts.authenticate("mallory", "pw1").await.unwrap_err();
    assert!(unknown_user.is_not_authenticated());
}

#[tokio::test]
async fn duplicate_login_is_rejected() {
    let env = test_env().await;
    create_user(&env, "alice", "pw1").await;

    let err = env
        .accounts
        .create_account(&NewAccount {
            login: "alice".to_string(),
            password: "other".to_string(),
            email: "alice2@example.com".to_string(),
            full_name: None,
            date_of_birth: None,
        })
        .await
        .unwrap_err();
    assert!(err.is_duplicate_key());
}

#[tokio::test]
async fn passwords_are_stored_hashed() {
    let env = test_env().await;
    create_user(&env, "alice", "pw1").await;

    let stored: String =
        sqlx::query_scalar("SELECT password_hash FROM usr WHERE user_id = 'alice'")
            .fetch_one(&env.pool)
            .await
            .unwrap();
    assert_ne!(stored, "pw1");
    assert!(stored.starts_with("$argon2"));
}

#[tokio::test]
async fn password_update_rotates_the_credential() {
    let env = test_env().await;
    create_user(&env, "alice", "pw1").await;

    env.profiles
        .update("alice", ProfileUpdate::Password("pw2".to_string()))
        .await
        .unwrap();

    assert!(env.accounts.authenticate("alice", "pw1").await.is_err());
    assert_eq!(env.accounts.authenticate("alice", "pw2").await.unwrap(), "alice");
}
