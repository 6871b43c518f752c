use crate::app_context::{AppContext, RequestContext};
use crate::sessions::handlers::responses::{
    CreateSessionResponse, NextImageResponse, ResetSessionResponse, SessionSummaryResponse,
    SubmitGuessResponse,
};
use crate::sessions::requests::GuessRequest;
use crate::storage::interface::ISessionStorage;

pub struct CreateSessionHttpHandler<SS: ISessionStorage> {
    app_context: AppContext<SS>,
}

impl<SS> CreateSessionHttpHandler<SS>
where
    SS: ISessionStorage,
{
    pub fn new(app_context: AppContext<SS>) -> Self {
        Self { app_context }
    }

    pub async fn create(&self) -> CreateSessionResponse {
        let session_id = self
            .app_context
            .sessions
            .create(self.app_context.catalog.shared())
            .await;
        tracing::info!(
            task = "session_created",
            session_id = %session_id,
            catalog_size = self.app_context.catalog.len(),
        );
        CreateSessionResponse { session_id }
    }
}

pub struct SessionHttpHandler<'a, SS: ISessionStorage> {
    app_context: AppContext<SS>,
    request_context: &'a RequestContext,
}

impl<'a, SS> SessionHttpHandler<'a, SS>
where
    SS: ISessionStorage,
{
    pub fn new(app_context: AppContext<SS>, request_context: &'a RequestContext) -> Self {
        Self {
            app_context,
            request_context,
        }
    }

    pub async fn summary(&self) -> SessionSummaryResponse {
        match self
            .app_context
            .sessions
            .summary(&self.request_context.session_id)
            .await
        {
            Ok(summary) => SessionSummaryResponse {
                error: false,
                error_code: None,
                summary: Some(summary),
            },
            Err(err) => SessionSummaryResponse {
                error: true,
                error_code: Some(err),
                summary: None,
            },
        }
    }

    pub async fn next_image(&self) -> NextImageResponse {
        let session_id = &self.request_context.session_id;
        match self.app_context.sessions.next_image(session_id).await {
            Ok(round) => {
                tracing::info!(
                    task = "image_selected",
                    session_id = %session_id,
                    stage = round.stage,
                    title = %round.image.title,
                );
                NextImageResponse {
                    error: false,
                    error_code: None,
                    stage: Some(round.stage),
                    image: Some(round.image),
                }
            }
            Err(err) => {
                tracing::info!(
                    task = "image_selection_refused",
                    session_id = %session_id,
                    reason = ?err,
                );
                NextImageResponse {
                    error: true,
                    error_code: Some(err),
                    stage: None,
                    image: None,
                }
            }
        }
    }

    pub async fn submit_guess(&self, request: GuessRequest) -> SubmitGuessResponse {
        let session_id = &self.request_context.session_id;
        match self
            .app_context
            .sessions
            .submit_guess(session_id, request)
            .await
        {
            Ok(submitted) => {
                tracing::info!(
                    task = "guess_submitted",
                    session_id = %session_id,
                    stage = %submitted.guess.stage,
                    distance = submitted.guess.distance,
                    floor_correct = submitted.guess.floor_correct,
                    score = submitted.guess.score,
                );
                SubmitGuessResponse {
                    error: false,
                    error_code: None,
                    guess: Some(submitted.guess),
                    total_score: Some(submitted.total_score),
                }
            }
            Err(err) => SubmitGuessResponse {
                error: true,
                error_code: Some(err),
                guess: None,
                total_score: None,
            },
        }
    }

    pub async fn reset(&self) -> ResetSessionResponse {
        let session_id = &self.request_context.session_id;
        match self.app_context.sessions.reset(session_id).await {
            Ok(()) => {
                tracing::info!(task = "session_reset", session_id = %session_id);
                ResetSessionResponse {
                    error: false,
                    error_code: None,
                }
            }
            Err(err) => ResetSessionResponse {
                error: true,
                error_code: Some(err),
            },
        }
    }

    pub async fn finish(&self) -> SessionSummaryResponse {
        let session_id = &self.request_context.session_id;
        match self.app_context.sessions.remove(session_id).await {
            Ok(summary) => {
                let sessions_left = self.app_context.sessions.count().await;
                tracing::info!(
                    task = "session_finished",
                    session_id = %session_id,
                    stages_played = summary.stages_played,
                    total_score = summary.total_score,
                    sessions_left,
                );
                SessionSummaryResponse {
                    error: false,
                    error_code: None,
                    summary: Some(summary),
                }
            }
            Err(err) => SessionSummaryResponse {
                error: true,
                error_code: Some(err),
                summary: None,
            },
        }
    }
}
