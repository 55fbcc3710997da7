//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::Mode;
use crate::api::{ApiError, NewPattern, PatternStore, SavedPattern};
use crate::core::state::{App, GameParameters};

/// A store that records submissions instead of talking to a server.
pub struct RecordingStore {
    pub created: Mutex<Vec<NewPattern>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self {
            created: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl PatternStore for RecordingStore {
    fn name(&self) -> &str {
        "recording"
    }

    async fn create_pattern(&self, pattern: &NewPattern) -> Result<(), ApiError> {
        self.created.lock().unwrap().push(pattern.clone());
        Ok(())
    }

    async fn list_patterns(&self, owner: &str) -> Result<Vec<SavedPattern>, ApiError> {
        let created = self.created.lock().unwrap();
        Ok(created
            .iter()
            .filter(|p| p.owner == owner)
            .map(|p| SavedPattern {
                owner: p.owner.clone(),
                name: p.name.clone(),
                body: p.body.clone(),
                created_at: None,
            })
            .collect())
    }
}

/// A 3x3 glider, the canonical non-empty board.
pub fn glider_grid() -> Vec<Vec<u8>> {
    vec![vec![0, 1, 0], vec![0, 0, 1], vec![1, 1, 1]]
}

/// Creates a test App signed in as alice with a glider on the board.
pub fn test_app() -> App {
    let game = GameParameters {
        is_running: false,
        physics_active: false,
        username: Some("alice".to_string()),
        configuration: glider_grid(),
    };
    App::new(Arc::new(RecordingStore::new()), game, Mode::TwoD)
}

/// Creates a test App with no signed-in user.
pub fn test_app_anonymous() -> App {
    let game = GameParameters {
        configuration: glider_grid(),
        ..Default::default()
    };
    App::new(Arc::new(RecordingStore::new()), game, Mode::TwoD)
}
