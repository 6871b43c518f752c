use crate::catalog::models::Image;
use crate::sessions::models::{
    GameSession, SessionError, SessionSummary, StartedRound, SubmittedGuess,
};
use crate::sessions::requests::GuessRequest;
use crate::storage::interface::{ISessionStorage, SessionGameFlowHandler, SessionRepo};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory sessions. Every mutation happens under the write lock, so two requests for the
/// same session never draw the same image.
#[derive(Clone, Default)]
pub struct HashMapSessionsStorage {
    storage: Arc<RwLock<HashMap<String, GameSession>>>,
}

impl ISessionStorage for HashMapSessionsStorage {}

impl SessionRepo for HashMapSessionsStorage {
    async fn create(&self, catalog: Arc<[Image]>) -> String {
        let session_id = generate_session_id();
        self.storage
            .write()
            .await
            .insert(session_id.clone(), GameSession::new(catalog));
        session_id
    }

    async fn summary(&self, session_id: &str) -> Result<SessionSummary, SessionError> {
        self.storage
            .read()
            .await
            .get(session_id)
            .map(GameSession::summary)
            .ok_or(SessionError::SessionNotFound)
    }

    async fn remove(&self, session_id: &str) -> Result<SessionSummary, SessionError> {
        self.storage
            .write()
            .await
            .remove(session_id)
            .map(|session| session.summary())
            .ok_or(SessionError::SessionNotFound)
    }

    async fn count(&self) -> usize {
        self.storage.read().await.len()
    }
}

impl SessionGameFlowHandler for HashMapSessionsStorage {
    async fn next_image(&self, session_id: &str) -> Result<StartedRound, SessionError> {
        self.storage
            .write()
            .await
            .get_mut(session_id)
            .ok_or(SessionError::SessionNotFound)?
            .next_image()
    }

    async fn submit_guess(
        &self,
        session_id: &str,
        request: GuessRequest,
    ) -> Result<SubmittedGuess, SessionError> {
        self.storage
            .write()
            .await
            .get_mut(session_id)
            .ok_or(SessionError::SessionNotFound)?
            .submit_guess(request)
    }

    async fn reset(&self, session_id: &str) -> Result<(), SessionError> {
        self.storage
            .write()
            .await
            .get_mut(session_id)
            .ok_or(SessionError::SessionNotFound)?
            .reset();
        Ok(())
    }
}

fn generate_session_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
