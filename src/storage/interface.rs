use crate::catalog::models::Image;
use crate::sessions::models::{SessionError, SessionSummary, StartedRound, SubmittedGuess};
use crate::sessions::requests::GuessRequest;
use std::sync::Arc;

pub trait ISessionStorage:
    SessionRepo + SessionGameFlowHandler + Clone + Send + Sync + 'static
{
}

pub trait SessionRepo {
    async fn create(&self, catalog: Arc<[Image]>) -> String;

    async fn summary(&self, session_id: &str) -> Result<SessionSummary, SessionError>;

    async fn remove(&self, session_id: &str) -> Result<SessionSummary, SessionError>;

    async fn count(&self) -> usize;
}

pub trait SessionGameFlowHandler {
    async fn next_image(&self, session_id: &str) -> Result<StartedRound, SessionError>;

    async fn submit_guess(
        &self,
        session_id: &str,
        request: GuessRequest,
    ) -> Result<SubmittedGuess, SessionError>;

    async fn reset(&self, session_id: &str) -> Result<(), SessionError>;
}
