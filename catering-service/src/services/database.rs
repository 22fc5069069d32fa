use crate::config::DatabaseConfig;
use futures::TryStreamExt;
use mongodb::{
    bson::{self, doc, Bson, DateTime as BsonDateTime, Document},
    options::ClientOptions,
    Client as MongoClient, Collection, Database,
};
use serde::Serialize;
use service_core::error::AppError;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database not configured: {0}")]
    Unconfigured(String),

    #[error("{0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Failed to encode document: {0}")]
    Encode(#[from] bson::ser::Error),
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::DatabaseError(anyhow::Error::new(err))
    }
}

#[derive(Clone)]
enum Backend {
    Connected { client: MongoClient, db: Database },
    Unavailable { reason: String },
}

/// The only gateway to MongoDB.
///
/// Built once at startup. When configuration is missing or the client cannot
/// be created, the store stays `Unavailable` and every call fails fast with
/// [`StorageError::Unconfigured`].
#[derive(Clone)]
pub struct DocumentStore {
    backend: Backend,
}

impl DocumentStore {
    pub async fn connect(config: &DatabaseConfig) -> Self {
        match Self::try_connect(config).await {
            Ok(store) => store,
            Err(e) => {
                tracing::error!(error = %e, "MongoDB unavailable, continuing without storage");
                match e {
                    StorageError::Unconfigured(reason) => Self::unavailable(reason),
                    other => Self::unavailable(other.to_string()),
                }
            }
        }
    }

    async fn try_connect(config: &DatabaseConfig) -> Result<Self, StorageError> {
        let uri = config
            .url
            .as_deref()
            .ok_or_else(|| StorageError::Unconfigured("DATABASE_URL is not set".to_string()))?;
        let name = config
            .name
            .as_deref()
            .ok_or_else(|| StorageError::Unconfigured("DATABASE_NAME is not set".to_string()))?;

        tracing::info!(database = %name, "Connecting to MongoDB");
        let mut options = ClientOptions::parse(uri).await.map_err(|e| {
            tracing::error!("Failed to parse MongoDB connection string: {}", e);
            StorageError::from(e)
        })?;
        options.app_name = Some("catering-service".to_string());
        options.server_selection_timeout = Some(Duration::from_secs(config.timeout_secs));

        let client = MongoClient::with_options(options)?;
        tracing::info!(database = %name, "MongoDB client ready");
        Ok(Self::from_client(client, name))
    }

    pub fn from_client(client: MongoClient, database: &str) -> Self {
        let db = client.database(database);
        Self {
            backend: Backend::Connected { client, db },
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            backend: Backend::Unavailable {
                reason: reason.into(),
            },
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self.backend, Backend::Connected { .. })
    }

    pub fn client(&self) -> Option<&MongoClient> {
        match &self.backend {
            Backend::Connected { client, .. } => Some(client),
            Backend::Unavailable { .. } => None,
        }
    }

    fn database(&self) -> Result<&Database, StorageError> {
        match &self.backend {
            Backend::Connected { db, .. } => Ok(db),
            Backend::Unavailable { reason } => Err(StorageError::Unconfigured(reason.clone())),
        }
    }

    fn collection(&self, name: &str) -> Result<Collection<Document>, StorageError> {
        Ok(self.database()?.collection(name))
    }

    /// Insert `record` stamped with `created_at`/`updated_at`; returns the new id.
    pub async fn create_document<T: Serialize>(
        &self,
        collection: &str,
        record: &T,
    ) -> Result<String, StorageError> {
        let mut document = bson::to_document(record)?;
        let now = BsonDateTime::now();
        document.insert("created_at", now);
        document.insert("updated_at", now);

        let result = self
            .collection(collection)?
            .insert_one(document, None)
            .await
            .map_err(|e| {
                tracing::error!(collection = %collection, "Failed to insert document: {}", e);
                StorageError::from(e)
            })?;

        Ok(match result.inserted_id {
            Bson::ObjectId(id) => id.to_hex(),
            other => other.to_string(),
        })
    }

    /// Every document in `collection`, in the server's natural order.
    pub async fn get_documents(&self, collection: &str) -> Result<Vec<Document>, StorageError> {
        let cursor = self
            .collection(collection)?
            .find(doc! {}, None)
            .await
            .map_err(|e| {
                tracing::error!(collection = %collection, "Failed to query documents: {}", e);
                StorageError::from(e)
            })?;

        let documents: Vec<Document> = cursor.try_collect().await.map_err(|e| {
            tracing::error!(collection = %collection, "Failed to collect documents: {}", e);
            StorageError::from(e)
        })?;

        Ok(documents)
    }

    pub async fn count_documents(&self, collection: &str) -> Result<u64, StorageError> {
        self.collection(collection)?
            .count_documents(doc! {}, None)
            .await
            .map_err(|e| {
                tracing::error!(collection = %collection, "Failed to count documents: {}", e);
                StorageError::from(e)
            })
    }

    pub async fn list_collection_names(&self) -> Result<Vec<String>, StorageError> {
        self.database()?
            .list_collection_names(None)
            .await
            .map_err(StorageError::from)
    }

    pub async fn health_check(&self) -> Result<(), StorageError> {
        let client = match &self.backend {
            Backend::Connected { client, .. } => client,
            Backend::Unavailable { reason } => {
                return Err(StorageError::Unconfigured(reason.clone()));
            }
        };

        client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                StorageError::from(e)
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unavailable_store_fails_fast() {
        let store = DocumentStore::unavailable("DATABASE_URL is not set");

        assert!(!store.is_available());
        assert!(store.client().is_none());

        let err = store.count_documents("menuitem").await.unwrap_err();
        assert!(matches!(err, StorageError::Unconfigured(_)));
        assert_eq!(
            err.to_string(),
            "Database not configured: DATABASE_URL is not set"
        );

        let err = store
            .create_document("contactinquiry", &doc! { "name": "x" })
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Unconfigured(_)));
        assert!(store.get_documents("menuitem").await.is_err());
        assert!(store.list_collection_names().await.is_err());
        assert!(store.health_check().await.is_err());
    }

    #[tokio::test]
    async fn missing_configuration_degrades() {
        let config = DatabaseConfig {
            url: None,
            name: Some("catering".to_string()),
            timeout_secs: 1,
        };

        let store = DocumentStore::connect(&config).await;
        assert!(!store.is_available());

        let config = DatabaseConfig {
            url: Some("mongodb://localhost:27017".to_string()),
            name: None,
            timeout_secs: 1,
        };
        let err = DocumentStore::connect(&config)
            .await
            .count_documents("menuitem")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("DATABASE_NAME"));
    }

    #[tokio::test]
    async fn malformed_url_degrades() {
        let config = DatabaseConfig {
            url: Some("postgres://nope".to_string()),
            name: Some("catering".to_string()),
            timeout_secs: 1,
        };

        assert!(!DocumentStore::connect(&config).await.is_available());
    }

    #[tokio::test]
    async fn client_construction_is_lazy() {
        let client = MongoClient::with_uri_str("mongodb://localhost:27017")
            .await
            .unwrap();
        let store = DocumentStore::from_client(client, "catering_test");

        assert!(store.is_available());
        assert!(store.client().is_some());
    }
}
