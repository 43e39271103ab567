//! Read-only access to notifications.
//!
//! The notifications file is populated by an external process; this service never writes it.

use crate::config::CoreConfig;
use crate::error::StoreResult;
use crate::notification::Notification;
use crate::store::JsonFileStore;
use std::sync::Arc;

#[derive(Debug)]
pub struct NotificationService {
    store: JsonFileStore<Notification>,
}

impl NotificationService {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self {
            store: JsonFileStore::new(cfg.notifications_file()),
        }
    }

    /// Returns every notification in file order. A missing or blank file yields an empty list.
    pub fn list_all(&self) -> StoreResult<Vec<Notification>> {
        self.store.read_all()
    }

    /// Returns the first notification whose id equals `id`.
    pub fn get_by_id(&self, id: &str) -> StoreResult<Option<Notification>> {
        Ok(self.list_all()?.into_iter().find(|n| n.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use std::fs;
    use tempfile::TempDir;

    fn service_with(temp_dir: &TempDir, contents: Option<&str>) -> NotificationService {
        let path = temp_dir.path().join("notificaciones.json");
        if let Some(contents) = contents {
            fs::write(&path, contents).unwrap();
        }
        let cfg = CoreConfig::new(temp_dir.path().join("citas.json"), path).unwrap();
        NotificationService::new(Arc::new(cfg))
    }

    #[test]
    fn test_missing_or_blank_file_is_empty() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        assert!(service_with(&temp_dir, None).list_all().unwrap().is_empty());

        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        assert!(service_with(&temp_dir, Some("\n")).list_all().unwrap().is_empty());
    }

    #[test]
    fn test_get_by_id_returns_first_match() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let service = service_with(
            &temp_dir,
            Some(
                r#"[
                    {"id":"n1","fechaEnvio":"2024-01-01","asunto":"A","remitente":"S","mensaje":"first"},
                    {"id":"n1","fechaEnvio":"2024-01-02","asunto":"B","remitente":"S","mensaje":"second"},
                    {"id":"n2","fechaEnvio":"2024-01-03","asunto":"C","remitente":"S","mensaje":"third"}
                ]"#,
            ),
        );

        assert_eq!(service.list_all().unwrap().len(), 3);
        assert_eq!(service.get_by_id("n1").unwrap().unwrap().message, "first");
        assert!(service.get_by_id("n3").unwrap().is_none());
    }

    #[test]
    fn test_malformed_file_is_reported() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let service = service_with(&temp_dir, Some("[1, 2"));

        assert!(matches!(
            service.get_by_id("n1"),
            Err(StoreError::Deserialization(_))
        ));
    }

    #[test]
    fn test_null_field_does_not_fail_the_whole_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let service = service_with(
            &temp_dir,
            Some(r#"[{"id":"n1","fechaEnvio":"2024","asunto":null,"remitente":"S","mensaje":"m"}]"#),
        );

        let notifications = service.list_all().unwrap();

        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].subject, "");
        assert_eq!(service.get_by_id("n1").unwrap().unwrap().message, "m");
    }
}
