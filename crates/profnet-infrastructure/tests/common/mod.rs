//! Shared setup for the integration suite: an in-memory database with the
//! full service stack wired over the sqlite repositories.

#![allow(dead_code)]

use profnet_core::auth::AccountService;
use profnet_core::connection::{ConnectionDecision, ConnectionRepository, ConnectionService};
use profnet_core::message::{MessageRepository, MessageService};
use profnet_core::profile::ProfileService;
use profnet_core::user::{NewAccount, UserRepository};
use profnet_infrastructure::{
    SqliteConnectionRepository, SqliteMessageRepository, SqlitePool, SqliteUserRepository,
    connect_in_memory,
};
use std::sync::Arc;

pub struct TestEnv {
    pub pool: SqlitePool,
    pub accounts: AccountService,
    pub profiles: ProfileService,
    pub connections: ConnectionService,
    pub messages: MessageService,
}

pub async fn test_env() -> TestEnv {
    let pool = connect_in_memory().await.expect("in-memory database");
    let users: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(pool.clone()));
    let connection_repo: Arc<dyn ConnectionRepository> =
        Arc::new(SqliteConnectionRepository::new(pool.clone()));
    let message_repo: Arc<dyn MessageRepository> =
        Arc::new(SqliteMessageRepository::new(pool.clone()));

    let connections = ConnectionService::new(connection_repo);
    TestEnv {
        accounts: AccountService::new(users.clone()),
        profiles: ProfileService::new(users, connections.clone()),
        connections,
        messages: MessageService::new(message_repo),
        pool,
    }
}

pub async fn create_user(env: &TestEnv, login: &str, password: &str) {
    env.accounts
        .create_account(&NewAccount {
            login: login.to_string(),
            password: password.to_string(),
            email: format!("{login}@example.com"),
            full_name: None,
            date_of_birth: None,
        })
        .await
        .expect("create account");
}

/// Request from `a` to `b`, accepted by `b`.
pub async fn connect_pair(env: &TestEnv, a: &str, b: &str) {
    env.connections.send_request(a, b).await.expect("request");
    env.connections
        .respond(b, a, ConnectionDecision::Accept)
        .await
        .expect("accept");
}
