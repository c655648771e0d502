//! Profile service integration tests

#[cfg(test)]
mod tests {
    use crate::common::{ErrorAssertions, epoch, ticking_clock};
    use std::sync::Arc;
    use taskflow::{MemoryStore, NotificationSettings, ProfileService, UpdateProfileInput};

    fn service() -> ProfileService {
        ProfileService::new(Arc::new(MemoryStore::new())).with_clock(ticking_clock())
    }

    #[tokio::test]
    async fn test_first_sign_in_creates_default_profile() {
        let profiles = service();

        let created = profiles
            .ensure_profile("carol", "carol@example.com")
            .await
            .unwrap();
        assert_eq!(created.id, "carol");
        assert_eq!(created.timezone, "UTC");
        assert_eq!(created.created_at, epoch());

        let again = profiles
            .ensure_profile("carol", "ignored@example.com")
            .await
            .unwrap();
        assert_eq!(again, created);

        profiles.ensure_profile("dave", "not-an-email").await.assert_invalid();
    }

    #[tokio::test]
    async fn test_profiles_are_readable_by_signed_in_users() {
        let profiles = service();
        profiles
            .ensure_profile("carol", "carol@example.com")
            .await
            .unwrap();

        let seen = profiles.get_profile("carol", "dave").await.unwrap();
        assert_eq!(seen.email, "carol@example.com");

        profiles.get_profile("carol", "").await.assert_forbidden();
        profiles.get_profile("nobody", "dave").await.assert_not_found();
    }

    #[tokio::test]
    async fn test_only_owner_updates_profile() {
        let profiles = service();
        let created = profiles
            .ensure_profile("carol", "carol@example.com")
            .await
            .unwrap();

        let update = UpdateProfileInput {
            full_name: Some(Some("Carol".to_string())),
            notification_settings: Some(NotificationSettings {
                push_notifications: false,
                ..NotificationSettings::default()
            }),
            ..UpdateProfileInput::default()
        };

        profiles
            .update_profile("carol", "dave", update.clone())
            .await
            .assert_forbidden();

        let updated = profiles.update_profile("carol", "carol", update).await.unwrap();
        assert_eq!(updated.full_name.as_deref(), Some("Carol"));
        assert!(!updated.notification_settings.push_notifications);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);

        profiles
            .update_profile(
                "carol",
                "carol",
                UpdateProfileInput {
                    email: Some("carol".to_string()),
                    ..UpdateProfileInput::default()
                },
            )
            .await
            .assert_invalid();
        profiles
            .update_profile("dave", "dave", UpdateProfileInput::default())
            .await
            .assert_not_found();
    }
}
