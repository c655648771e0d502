//! Profile service

use super::{Clock, require_actor, require_text, system_clock};
use crate::core::models::{Profile, UpdateProfileInput};
use crate::storage::ProfileStore;
use crate::utils::error::{Result, TaskflowError};
use crate::utils::logging::SecurityLogger;
use std::sync::Arc;
use tracing::{debug, info};

/// Profile reads for any signed-in user, writes for the profile's owner
#[derive(Clone)]
pub struct ProfileService {
    profiles: Arc<dyn ProfileStore>,
    clock: Clock,
}

impl std::fmt::Debug for ProfileService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileService").finish_non_exhaustive()
    }
}

impl ProfileService {
    /// Create a new profile service
    pub fn new(profiles: Arc<dyn ProfileStore>) -> Self {
        info!("Profile service initialized");
        Self {
            profiles,
            clock: system_clock(),
        }
    }

    /// Replace the clock used for timestamps
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Return the actor's profile, creating one with defaults on first sign-in
    pub async fn ensure_profile(&self, actor: &str, email: &str) -> Result<Profile> {
        require_actor(actor)?;
        if let Some(profile) = self.profiles.get_profile(actor).await? {
            return Ok(profile);
        }

        let email = require_email(email)?;
        match self
            .profiles
            .insert_profile(Profile::new(actor, email, (self.clock)()))
            .await
        {
            Ok(profile) => {
                info!(user_id = %actor, "Profile created");
                Ok(profile)
            }
            // Lost a race with a concurrent first sign-in.
            Err(TaskflowError::Conflict(_)) => self.load(actor).await,
            Err(e) => Err(e),
        }
    }

    /// Fetch a user's profile
    ///
    /// Profiles are visible to every signed-in user so task creators and
    /// assignees can be displayed.
    pub async fn get_profile(&self, user_id: &str, actor: &str) -> Result<Profile> {
        require_actor(actor)?;
        self.load(user_id).await
    }

    /// Apply a partial update to the actor's own profile
    pub async fn update_profile(
        &self,
        user_id: &str,
        actor: &str,
        mut update: UpdateProfileInput,
    ) -> Result<Profile> {
        require_actor(actor)?;
        if user_id != actor {
            SecurityLogger::log_authz_event(
                actor,
                &format!("profile:{}", user_id),
                "profile:update",
                false,
                Some("not the profile owner"),
            );
            return Err(TaskflowError::forbidden("Users can only update their own profile"));
        }

        if let Some(email) = update.email.take() {
            update.email = Some(require_email(&email)?);
        }
        if let Some(timezone) = update.timezone.take() {
            update.timezone = Some(require_text("Timezone", &timezone)?);
        }

        let mut profile = self.load(user_id).await?;
        profile.apply_update(update, (self.clock)());
        let profile = self.profiles.update_profile(profile).await?;
        debug!(user_id, "Profile updated");
        Ok(profile)
    }

    async fn load(&self, user_id: &str) -> Result<Profile> {
        self.profiles
            .get_profile(user_id)
            .await?
            .ok_or_else(|| TaskflowError::not_found(format!("Profile {}", user_id)))
    }
}

fn require_email(email: &str) -> Result<String> {
    let email = require_text("Email", email)?;
    if !email.contains('@') {
        return Err(TaskflowError::validation(format!("Invalid email address: {}", email)));
    }
    Ok(email)
}
