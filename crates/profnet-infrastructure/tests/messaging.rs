//! Messaging: send, read transition, listings, and two-sided soft delete.

mod common;

use common::{create_user, test_env};
use profnet_core::message::{DeleteSide, MessageStatus};

#[tokio::test]
async fn unread_then_read_moves_to_inbox() {
    let env = test_env().await;
    create_user(&env, "alice", "pw1").await;
    create_user(&env, "bob", "pw2").await;

    let msg_id = env.messages.send("alice", "bob", "hi").await.unwrap();

    let unread = env.messages.list_unread("bob").await.unwrap();
    assert_eq!(unread.len(), 1);
    assert_eq!(unread[0].msg_id, msg_id);
    assert_eq!(unread[0].sender_id, "alice");

    assert_eq!(env.messages.read(msg_id, "bob").await.unwrap(), "hi");

    assert!(env.messages.list_unread("bob").await.unwrap().is_empty());
    let inbox = env.messages.list_inbox("bob").await.unwrap();
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0].status, MessageStatus::Read);
}

#[tokio::test]
async fn reading_is_idempotent() {
    let env = test_env().await;
    create_user(&env, "alice", "pw1").await;
    create_user(&env, "bob", "pw2").await;

    let msg_id = env.messages.send("alice", "bob", "hi").await.unwrap();
    assert_eq!(env.messages.read(msg_id, "bob").await.unwrap(), "hi");
    // A second read changes nothing and returns the same contents.
    assert_eq!(env.messages.read(msg_id, "bob").await.unwrap(), "hi");

    let inbox = env.messages.list_inbox("bob").await.unwrap();
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0].status, MessageStatus::Read);
}

#[tokio::test]
async fn only_the_receiver_can_read() {
    let env = test_env().await;
    create_user(&env, "alice", "pw1").await;
    create_user(&env, "bob", "pw2").await;

    let msg_id = env.messages.send("alice", "bob", "hi").await.unwrap();
    let err = env.messages.read(msg_id, "alice").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn viewing_a_sent_message_does_not_mark_it_read() {
    let env = test_env().await;
    create_user(&env, "alice", "pw1").await;
    create_user(&env, "bob", "pw2").await;

    let msg_id = env.messages.send("alice", "bob", "hi").await.unwrap();
    assert_eq!(env.messages.view_sent(msg_id, "alice").await.unwrap(), "hi");

    let unread = env.messages.list_unread("bob").await.unwrap();
    assert_eq!(unread.len(), 1);
    assert_eq!(unread[0].status, MessageStatus::Delivered);
}

#[tokio::test]
async fn message_ids_are_unique_and_stable() {
    let env = test_env().await;
    create_user(&env, "alice", "pw1").await;
    create_user(&env, "bob", "pw2").await;

    let first = env.messages.send("alice", "bob", "one").await.unwrap();
    let second = env.messages.send("alice", "bob", "two").await.unwrap();
    assert_ne!(first, second);
    assert_eq!(env.messages.read(first, "bob").await.unwrap(), "one");
    assert_eq!(env.messages.read(second, "bob").await.unwrap(), "two");
}

#[tokio::test]
async fn delete_is_per_side_and_removal_needs_both() {
    let env = test_env().await;
    create_user(&env, "alice", "pw1").await;
    create_user(&env, "bob", "pw2").await;

    let msg_id = env.messages.send("alice", "bob", "hi").await.unwrap();

    // Sender-side delete hides it from alice only.
    env.messages.delete(msg_id, "alice", DeleteSide::Sender).await.unwrap();
    assert!(env.messages.list_sent("alice").await.unwrap().is_empty());
    assert_eq!(env.messages.list_inbox("bob").await.unwrap().len(), 1);

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM message WHERE msg_id = ?1")
        .bind(msg_id)
        .fetch_one(&env.pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);

    // Once the receiver deletes too, the row is physically gone.
    env.messages.delete(msg_id, "bob", DeleteSide::Receiver).await.unwrap();
    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM message WHERE msg_id = ?1")
        .bind(msg_id)
        .fetch_one(&env.pool)
        .await
        .unwrap();
    assert_eq!(rows, 0);
    assert!(env.messages.read(msg_id, "bob").await.unwrap_err().is_not_found());
    assert!(env.messages.view_sent(msg_id, "alice").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn repeating_a_delete_on_the_same_side_is_not_found() {
    let env = test_env().await;
    create_user(&env, "alice", "pw1").await;
    create_user(&env, "bob", "pw2").await;

    let msg_id = env.messages.send("alice", "bob", "hi").await.unwrap();
    env.messages.delete(msg_id, "alice", DeleteSide::Sender).await.unwrap();

    // The side that already deleted no longer sees the row.
    let err = env
        .messages
        .delete(msg_id, "alice", DeleteSide::Sender)
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    // The receiver's view is unaffected by the repeat attempt.
    assert_eq!(env.messages.list_inbox("bob").await.unwrap().len(), 1);
}
