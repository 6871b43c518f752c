use crate::catalog::models::Image;
use crate::scoring;
use crate::scoring::models::Guess;
use crate::selector::{NonRepeatingSelector, SelectionError};
use crate::sessions::requests::GuessRequest;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// A single player's game: which images were already shown, the round in progress and the
/// guesses made so far.
#[derive(Clone, Debug)]
pub struct GameSession {
    selector: NonRepeatingSelector<Image>,
    current_round: Option<Round>,
    stages_played: u64,
    guesses: Vec<Guess>,
    total_score: u64,
}

#[derive(Clone, Debug)]
struct Round {
    image: Image,
    stage: u64,
    started_at: Instant,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartedRound {
    pub stage: u64,
    pub image: Image,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedGuess {
    pub guess: Guess,
    pub total_score: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub stages_played: u64,
    pub guesses: Vec<Guess>,
    pub total_score: u64,
    pub images_shown: usize,
    pub images_left: usize,
    pub exhausted: bool,
    pub round_in_progress: bool,
    /// Lets clients tell a catalog that never loaded apart from one that was played through.
    pub catalog_size: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionError {
    SessionNotFound,
    Exhausted,
    NoImageSelected,
}

impl From<SelectionError> for SessionError {
    fn from(err: SelectionError) -> Self {
        match err {
            SelectionError::Exhausted => Self::Exhausted,
        }
    }
}

impl GameSession {
    pub fn new(catalog: Arc<[Image]>) -> Self {
        Self {
            selector: NonRepeatingSelector::new(catalog),
            current_round: None,
            stages_played: 0,
            guesses: Vec::new(),
            total_score: 0,
        }
    }

    /// Draws an image not shown before in this session and opens a round for it. A round
    /// that was still open is dropped without a guess.
    pub fn next_image(&mut self) -> Result<StartedRound, SessionError> {
        let image = self.selector.select()?.item.clone();
        self.stages_played += 1;
        self.current_round = Some(Round {
            image: image.clone(),
            stage: self.stages_played,
            started_at: Instant::now(),
        });
        Ok(StartedRound {
            stage: self.stages_played,
            image,
        })
    }

    pub fn submit_guess(&mut self, request: GuessRequest) -> Result<SubmittedGuess, SessionError> {
        let round = self
            .current_round
            .take()
            .ok_or(SessionError::NoImageSelected)?;
        let guess = scoring::evaluate(
            request.location(),
            request.floor,
            &round.image,
            round.started_at.elapsed(),
            round.stage,
        );
        self.total_score += guess.score;
        self.guesses.push(guess.clone());
        Ok(SubmittedGuess {
            guess,
            total_score: self.total_score,
        })
    }

    /// Makes every image selectable again and forgets the rounds played so far.
    pub fn reset(&mut self) {
        self.selector.reset();
        self.current_round = None;
        self.stages_played = 0;
        self.guesses.clear();
        self.total_score = 0;
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            stages_played: self.stages_played,
            guesses: self.guesses.clone(),
            total_score: self.total_score,
            images_shown: self.selector.selected().len(),
            images_left: self.selector.remaining(),
            exhausted: self.selector.is_exhausted(),
            round_in_progress: self.has_open_round(),
            catalog_size: self.selector.len(),
        }
    }

    pub fn has_open_round(&self) -> bool {
        self.current_round.is_some()
    }
}
