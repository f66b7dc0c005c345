//! User Profile Operations
//!
//! Reads user documents from `users/{id}` and applies the two permitted
//! partial updates: profile picture and theme preference. Updates go through
//! `PATCH` so unrelated fields on the document survive.
//!
//! Profile pictures are base64 image data URLs. They are validated (shape
//! and size) before any write reaches the database.

use std::sync::Arc;

use serde_json::json;
use thiserror::Error;

use super::client::{RealtimeDb, StoreError};
use super::paths;
use crate::records::UserRecord;

/// Upper bound on a stored profile picture, in bytes of the data URL
pub const MAX_PROFILE_IMAGE_BYTES: usize = 500 * 1024;

/// Why a profile picture payload was rejected
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileImageError {
    #[error("profile picture must be a base64 image data URL")]
    NotAnImageDataUrl,

    #[error("profile picture exceeds {MAX_PROFILE_IMAGE_BYTES} bytes")]
    TooLarge,
}

#[derive(Debug, Error)]
pub enum ProfileUpdateError {
    #[error(transparent)]
    Invalid(#[from] ProfileImageError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Check that a string is a `data:image/...;base64,` URL with a payload
pub fn is_image_data_url(value: &str) -> bool {
    let Some(rest) = value.strip_prefix("data:image/") else {
        return false;
    };
    let Some((subtype, payload)) = rest.split_once(";base64,") else {
        return false;
    };
    !subtype.is_empty()
        && subtype.chars().all(|c| c.is_ascii_lowercase())
        && !payload.is_empty()
}

/// Validate a profile picture payload before writing it
pub fn validate_profile_picture(data_url: &str) -> Result<(), ProfileImageError> {
    if !is_image_data_url(data_url) {
        return Err(ProfileImageError::NotAnImageDataUrl);
    }
    if data_url.len() > MAX_PROFILE_IMAGE_BYTES {
        return Err(ProfileImageError::TooLarge);
    }
    Ok(())
}

pub struct UserStore {
    db: Arc<RealtimeDb>,
}

impl UserStore {
    pub fn new(db: Arc<RealtimeDb>) -> Self {
        Self { db }
    }

    /// Fetch a user document; `None` when the id is unknown
    pub async fn fetch(&self, id: u64) -> Result<Option<UserRecord>, StoreError> {
        self.db.get(&paths::user(id)).await
    }

    /// Replace the user's profile picture with a validated data URL
    pub async fn update_profile_picture(
        &self,
        id: u64,
        data_url: &str,
    ) -> Result<(), ProfileUpdateError> {
        validate_profile_picture(data_url)?;

        self.db
            .update(&paths::user(id), &json!({ "profilePicture": data_url }))
            .await?;
        tracing::info!(id, "updated profile picture");
        Ok(())
    }

    /// Persist the user's theme preference
    pub async fn update_theme(&self, id: u64, is_dark: bool) -> Result<(), StoreError> {
        self.db
            .update(&paths::user(id), &json!({ "isDark": is_dark }))
            .await?;
        tracing::info!(id, is_dark, "updated theme preference");
        Ok(())
    }
}
