use std::time::Duration;

use moka::future::Cache;
use uuid::Uuid;

use crate::model::user::UserInfo;

/// Server-side login sessions keyed by the id stored in the session cookie.
///
/// Sessions live until logout (or the optional idle expiry) and are lost on restart.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Cache<String, UserInfo>,
}

impl SessionStore {
    pub fn new(idle_ttl: Option<Duration>) -> Self {
        let builder = Cache::builder().max_capacity(100_000);
        let sessions = match idle_ttl {
            Some(ttl) => builder.time_to_idle(ttl).build(),
            None => builder.build(),
        };
        Self { sessions }
    }

    /// Starts a session for `user` and returns its id.
    pub async fn create(&self, user: UserInfo) -> String {
        let id = Uuid::new_v4().to_string();
        self.sessions.insert(id.clone(), user).await;
        id
    }

    pub async fn get(&self, id: &str) -> Option<UserInfo> {
        self.sessions.get(id).await
    }

    pub async fn remove(&self, id: &str) {
        self.sessions.invalidate(id).await;
    }
}
