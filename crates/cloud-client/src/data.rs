//! Managed Task data API client
//!
//! Every endpoint answers with the `{data, errors}` envelope, which is
//! passed through verbatim as a [`StoreReply`]; only transport and
//! decode failures become [`StoreError`]s.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use ct_core::error::StoreError;
use ct_core::task::{StoreReply, Task, TaskDraft, TaskStore};

use crate::config::ClientConfig;

#[derive(Serialize)]
struct CompletedPatch {
    completed: bool,
}

/// [`TaskStore`] over the managed data API
pub struct HttpTaskStore {
    client: Client,
    config: ClientConfig,
}

impl HttpTaskStore {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.api_key {
            Some(api_key) => request.header("x-api-key", api_key),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<StoreReply<T>, StoreError> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let text = response
            .text()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        serde_json::from_str(&text).map_err(|e| StoreError::MalformedResponse(e.to_string()))
    }

    fn list_url(&self, user_id: &str) -> String {
        format!(
            "{}?userId={}",
            self.config.url("/tasks"),
            urlencoding::encode(user_id)
        )
    }

    fn task_url(&self, id: &str) -> String {
        self.config
            .url(&format!("/tasks/{}", urlencoding::encode(id)))
    }
}

#[async_trait]
impl TaskStore for HttpTaskStore {
    async fn create(&self, draft: TaskDraft) -> Result<StoreReply<Task>, StoreError> {
        let request = self.client.post(self.config.url("/tasks")).json(&draft);
        self.send(request).await
    }

    async fn list_by_user(&self, user_id: &str) -> Result<StoreReply<Vec<Task>>, StoreError> {
        let request = self.client.get(self.list_url(user_id));
        self.send(request).await
    }

    async fn set_completed(
        &self,
        id: &str,
        completed: bool,
    ) -> Result<StoreReply<Task>, StoreError> {
        let request = self
            .client
            .patch(self.task_url(id))
            .json(&CompletedPatch { completed });
        self.send(request).await
    }

    async fn delete(&self, id: &str) -> Result<StoreReply<Task>, StoreError> {
        let request = self.client.delete(self.task_url(id));
        self.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> HttpTaskStore {
        HttpTaskStore::new(ClientConfig::new("https://api.example.com"))
    }

    #[test]
    fn test_list_url_encodes_user_id() {
        let url = store().list_url("user id+1");
        assert_eq!(url, "https://api.example.com/tasks?userId=user%20id%2B1");
    }

    #[test]
    fn test_task_url_encodes_id() {
        let url = store().task_url("t/1");
        assert_eq!(url, "https://api.example.com/tasks/t%2F1");
    }

    #[test]
    fn test_reply_envelope_parses_data_and_errors() {
        let body = r#"{
            "data": {
                "id": "t1",
                "userId": "u1",
                "title": "Buy milk",
                "completed": false,
                "createdAt": "2024-01-01T00:00:00Z",
                "updatedAt": "2024-01-01T00:00:01Z"
            },
            "errors": null
        }"#;
        let reply: StoreReply<Task> = serde_json::from_str(body).unwrap();
        assert_eq!(reply.data.unwrap().id, "t1");
        assert!(reply.errors.is_none());

        let body = r#"{"data": null, "errors": [{"field": "title", "message": "required"}]}"#;
        let reply: StoreReply<Task> = serde_json::from_str(body).unwrap();
        assert!(reply.data.is_none());
        assert_eq!(reply.errors.unwrap()[0].message, "required");
    }
}
