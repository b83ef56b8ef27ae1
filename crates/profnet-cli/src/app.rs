//! Service assembly over a connected pool.

use profnet_core::auth::AccountService;
use profnet_core::connection::{ConnectionRepository, ConnectionService};
use profnet_core::message::{MessageRepository, MessageService};
use profnet_core::profile::ProfileService;
use profnet_core::user::UserRepository;
use profnet_infrastructure::{
    SqliteConnectionRepository, SqliteMessageRepository, SqlitePool, SqliteUserRepository,
};
use std::sync::Arc;

/// The wired-up application services the menu layer dispatches into.
pub struct App {
    pub accounts: AccountService,
    pub profiles: ProfileService,
    pub connections: ConnectionService,
    pub messages: MessageService,
}

impl App {
    pub fn new(pool: SqlitePool) -> Self {
        let users: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(pool.clone()));
        let connection_repo: Arc<dyn ConnectionRepository> =
            Arc::new(SqliteConnectionRepository::new(pool.clone()));
        let message_repo: Arc<dyn MessageRepository> =
            Arc::new(SqliteMessageRepository::new(pool));

        let connections = ConnectionService::new(connection_repo);
        Self {
            accounts: AccountService::new(users.clone()),
            profiles: ProfileService::new(users, connections.clone()),
            connections,
            messages: MessageService::new(message_repo),
        }
    }
}
