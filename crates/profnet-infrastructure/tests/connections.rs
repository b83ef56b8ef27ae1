//! Connection graph: requests, responses, listings, and the eligibility
//! gate.

mod common;

use common::{connect_pair, create_user, test_env};
use profnet_core::connection::ConnectionDecision;

#[tokio::test]
async fn request_accept_roundtrip_is_direction_agnostic() {
    let env = test_env().await;
    create_user(&env, "alice", "pw1").await;
    create_user(&env, "bob", "pw2").await;

    env.connections.send_request("alice", "bob").await.unwrap();
    assert_eq!(env.connections.list_pending("bob").await.unwrap(), ["alice"]);
    assert!(!env.connections.are_connected("alice", "bob").await.unwrap());

    env.connections
        .respond("bob", "alice", ConnectionDecision::Accept)
        .await
        .unwrap();

    // One directed row serves both endpoints.
    assert_eq!(env.connections.list_accepted("alice").await.unwrap(), ["bob"]);
    assert_eq!(env.connections.list_accepted("bob").await.unwrap(), ["alice"]);
    assert!(env.connections.are_connected("bob", "alice").await.unwrap());
    assert!(env.connections.list_pending("bob").await.unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_request_is_rejected_in_either_direction() {
    let env = test_env().await;
    create_user(&env, "alice", "pw1").await;
    create_user(&env, "bob", "pw2").await;

    env.connections.send_request("alice", "bob").await.unwrap();

    let same_direction = env.connections.send_request("alice", "bob").await.unwrap_err();
    assert!(same_direction.is_duplicate_key());

    let reverse_direction = env.connections.send_request("bob", "alice").await.unwrap_err();
    assert!(reverse_direction.is_duplicate_key());
}

#[tokio::test]
async fn responding_without_a_pending_request_is_not_found() {
    let env = test_env().await;
    create_user(&env, "alice", "pw1").await;
    create_user(&env, "bob", "pw2").await;

    let err = env
        .connections
        .respond("bob", "alice", ConnectionDecision::Accept)
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn a_rejected_pair_can_be_requested_again() {
    let env = test_env().await;
    create_user(&env, "alice", "pw1").await;
    create_user(&env, "bob", "pw2").await;

    env.connections.send_request("alice", "bob").await.unwrap();
    env.connections
        .respond("bob", "alice", ConnectionDecision::Reject)
        .await
        .unwrap();
    assert!(env.connections.list_pending("bob").await.unwrap().is_empty());

    // The fresh request replaces the stale rejected row, even from the
    // other side of the pair.
    env.connections.send_request("bob", "alice").await.unwrap();
    assert_eq!(env.connections.list_pending("alice").await.unwrap(), ["bob"]);

    env.connections
        .respond("alice", "bob", ConnectionDecision::Accept)
        .await
        .unwrap();
    assert!(env.connections.are_connected("alice", "bob").await.unwrap());
}

#[tokio::test]
async fn small_circles_may_request_anyone() {
    let env = test_env().await;
    create_user(&env, "hub", "pw").await;
    for login in ["f1", "f2", "f3", "f4", "stranger"] {
        create_user(&env, login, "pw").await;
    }
    for friend in ["f1", "f2", "f3", "f4"] {
        connect_pair(&env, "hub", friend).await;
    }

    // Four accepted connections is still within the unconditional
    // allowance, regardless of who the target is.
    env.connections.send_request("hub", "stranger").await.unwrap();
}

#[tokio::test]
async fn large_circles_are_limited_to_friends_of_friends() {
    let env = test_env().await;
    create_user(&env, "hub", "pw").await;
    for login in ["f1", "f2", "f3", "f4", "f5", "stranger", "fof"] {
        create_user(&env, login, "pw").await;
    }
    for friend in ["f1", "f2", "f3", "f4", "f5"] {
        connect_pair(&env, "hub", friend).await;
    }
    connect_pair(&env, "fof", "f1").await;

    let err = env.connections.send_request("hub", "stranger").await.unwrap_err();
    assert!(err.is_not_eligible());

    // fof shares f1 with hub, so the gate passes.
    env.connections.send_request("hub", "fof").await.unwrap();
    assert_eq!(env.connections.list_pending("fof").await.unwrap(), ["hub"]);
}
