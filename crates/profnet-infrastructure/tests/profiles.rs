//! Profile reads, updates, history listings, search, and the composed
//! profile view.

mod common;

use chrono::NaiveDate;
use common::{connect_pair, create_user, test_env, TestEnv};
use profnet_core::user::ProfileUpdate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn seed_work(env: &TestEnv, user: &str, company: &str, start: NaiveDate) {
    sqlx::query(
        "INSERT INTO work_expr (user_id, company, role, location, start_date, end_date)
         VALUES (?1, ?2, 'Engineer', 'Riverside', ?3, NULL)",
    )
    .bind(user)
    .bind(company)
    .bind(start)
    .execute(&env.pool)
    .await
    .unwrap();
}

#[tokio::test]
async fn unknown_user_profile_is_none() {
    let env = test_env().await;
    assert!(env.profiles.profile("ghost").await.unwrap().is_none());
}

#[tokio::test]
async fn field_updates_overwrite_unconditionally() {
    let env = test_env().await;
    create_user(&env, "alice", "pw1").await;

    env.profiles
        .update("alice", ProfileUpdate::Name("Alice Liddell".to_string()))
        .await
        .unwrap();
    env.profiles
        .update("alice", ProfileUpdate::DateOfBirth(date(1990, 5, 4)))
        .await
        .unwrap();

    let profile = env.profiles.profile("alice").await.unwrap().unwrap();
    assert_eq!(profile.name.as_deref(), Some("Alice Liddell"));
    assert_eq!(profile.date_of_birth, Some(date(1990, 5, 4)));

    // Last writer wins.
    env.profiles
        .update("alice", ProfileUpdate::Name("A. Liddell".to_string()))
        .await
        .unwrap();
    let profile = env.profiles.profile("alice").await.unwrap().unwrap();
    assert_eq!(profile.name.as_deref(), Some("A. Liddell"));
}

#[tokio::test]
async fn history_lists_are_ordered_and_default_empty() {
    let env = test_env().await;
    create_user(&env, "alice", "pw1").await;
    create_user(&env, "bob", "pw2").await;

    seed_work(&env, "alice", "SecondCorp", date(2021, 3, 1)).await;
    seed_work(&env, "alice", "FirstCorp", date(2018, 7, 1)).await;

    let view = env.profiles.view("bob", "alice").await.unwrap();
    let companies: Vec<&str> = view
        .work_experience
        .iter()
        .map(|w| w.company.as_str())
        .collect();
    assert_eq!(companies, ["FirstCorp", "SecondCorp"]);

    // No rows is an empty list, not an error.
    let view = env.profiles.view("alice", "bob").await.unwrap();
    assert!(view.work_experience.is_empty());
    assert!(view.education.is_empty());
}

#[tokio::test]
async fn view_shows_fields_regardless_of_connection() {
    let env = test_env().await;
    create_user(&env, "alice", "pw1").await;
    create_user(&env, "bob", "pw2").await;
    env.profiles
        .update("bob", ProfileUpdate::Name("Bob Builder".to_string()))
        .await
        .unwrap();

    let unconnected = env.profiles.view("alice", "bob").await.unwrap();
    assert_eq!(
        unconnected.profile.as_ref().unwrap().name.as_deref(),
        Some("Bob Builder")
    );
    assert!(!unconnected.connected);
    assert!(!unconnected.can_view_connections);
    assert!(unconnected.can_send_request);

    connect_pair(&env, "alice", "bob").await;
    let connected = env.profiles.view("alice", "bob").await.unwrap();
    assert_eq!(
        connected.profile.as_ref().unwrap().name.as_deref(),
        Some("Bob Builder")
    );
    assert!(connected.connected);
    assert!(connected.can_view_connections);
    assert!(!connected.can_send_request);
}

#[tokio::test]
async fn view_withholds_request_action_when_gate_fails() {
    let env = test_env().await;
    create_user(&env, "hub", "pw").await;
    for login in ["f1", "f2", "f3", "f4", "f5", "stranger"] {
        create_user(&env, login, "pw").await;
    }
    for friend in ["f1", "f2", "f3", "f4", "f5"] {
        connect_pair(&env, "hub", friend).await;
    }

    let view = env.profiles.view("hub", "stranger").await.unwrap();
    // The profile itself still renders; only the action is withheld.
    assert!(view.profile.is_some());
    assert!(!view.can_send_request);
}

#[tokio::test]
async fn search_matches_the_exact_name_only() {
    let env = test_env().await;
    create_user(&env, "alice", "pw1").await;
    create_user(&env, "alison", "pw2").await;
    create_user(&env, "alice2", "pw3").await;
    env.profiles
        .update("alice", ProfileUpdate::Name("Alice Liddell".to_string()))
        .await
        .unwrap();
    env.profiles
        .update("alice2", ProfileUpdate::Name("Alice Liddell".to_string()))
        .await
        .unwrap();
    env.profiles
        .update("alison", ProfileUpdate::Name("Alison Liddell".to_string()))
        .await
        .unwrap();

    let matches = env.profiles.search_by_name("Alice Liddell").await.unwrap();
    assert_eq!(matches, ["alice", "alice2"]);
    assert!(env
        .profiles
        .search_by_name("alice liddell")
        .await
        .unwrap()
        .is_empty());
}
