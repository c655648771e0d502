//! Configuration integration tests
//!
//! Loads configuration files from disk and wires the result into services.

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;
    use taskflow::config::Config;
    use taskflow::{CreateTaskInput, MemoryStore, TaskFilters, TaskService, TeamRole, TeamService};
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_loaded_config_drives_services() {
        let file = write_config(
            r#"
tasks:
  default_page_size: 2
  duplicate_suffix: " [copy]"
rbac:
  personal_role: admin
"#,
        );
        let config = Config::from_file(file.path()).await.unwrap();

        let store = Arc::new(MemoryStore::new());
        let tasks = TaskService::new(store.clone(), store.clone(), config.tasks.clone());
        let teams = TeamService::new(store, config.rbac.clone());

        let first = tasks
            .create_task(CreateTaskInput::titled("one"), "erin")
            .await
            .unwrap();
        for title in ["two", "three"] {
            tasks
                .create_task(CreateTaskInput::titled(title), "erin")
                .await
                .unwrap();
        }

        let page = tasks.list_tasks("erin", &TaskFilters::default()).await.unwrap();
        assert_eq!(page.len(), 2);

        let copy = tasks.duplicate_task(first.id(), "erin").await.unwrap();
        assert_eq!(copy.title, "one [copy]");

        let ctx = teams.auth_context("erin").await.unwrap();
        assert_eq!(ctx.current_role(None), TeamRole::Admin);
    }

    #[tokio::test]
    async fn test_invalid_file_is_rejected() {
        let file = write_config("tasks:\n  default_page_size: 10\n  max_page_size: 5\n");
        assert!(Config::from_file(file.path()).await.is_err());

        let file = write_config("logging:\n  level: \"taskflow=loud\"\n");
        assert!(Config::from_file(file.path()).await.is_err());
    }

    #[tokio::test]
    async fn test_env_overrides_complete_an_invalid_file() {
        let file = write_config("tasks:\n  max_page_size: 1000\n  default_page_size: 800\n");
        assert!(Config::from_file(file.path()).await.is_ok());

        let file = write_config("tasks:\n  default_page_size: 800\n");
        assert!(Config::from_file(file.path()).await.is_err());

        let config = Config::read_file(file.path())
            .await
            .unwrap()
            .apply_env(|key| (key == "TASKFLOW_MAX_PAGE_SIZE").then(|| "1000".to_string()))
            .unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.tasks.page_size(Some(900)), 900);
    }

    #[test]
    fn test_example_config_parses() {
        let content = include_str!("../../config/taskflow.yaml.example");
        let config = Config::from_yaml(content).unwrap();
        assert_eq!(config.rbac.personal_role, TeamRole::Member);
    }
}
