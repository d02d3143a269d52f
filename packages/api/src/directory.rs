//! # Users collection: existence check and record persistence
//!
//! [`UserDirectory`] is the async port the registrar uses to ask whether a username
//! is already registered, and the UI uses to persist a new record once it has been
//! dispatched. Two implementations:
//!
//! | Type | Backing |
//! |------|---------|
//! | [`HttpDirectory`] | REST collection over `reqwest`: `GET <users_url>?username=<name>` returns a JSON array (empty = available), `POST <users_url>` stores a record. |
//! | [`MemoryDirectory`] | Shared in-process list. Can be switched offline to simulate a transport failure, and counts lookups. |
//!
//! A failed lookup is always an `Err`, never `Ok(true)`: the caller decides how to
//! present "could not check" separately from "taken".

use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use serde::de::IgnoredAny;
use store::UserRecord;

use crate::error::DirectoryError;
use crate::settings::Settings;

/// Async access to the remote users collection.
pub trait UserDirectory {
    fn username_exists(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<bool, DirectoryError>>;
    fn create_user(
        &self,
        user: &UserRecord,
    ) -> impl Future<Output = Result<(), DirectoryError>>;
}

/// UserDirectory backed by a REST users collection.
#[derive(Clone, Debug)]
pub struct HttpDirectory {
    client: reqwest::Client,
    users_url: String,
}

impl HttpDirectory {
    pub fn new(users_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            users_url: users_url.into(),
        }
    }

    /// Use a preconfigured client (timeouts, proxy, TLS).
    pub fn with_client(client: reqwest::Client, users_url: impl Into<String>) -> Self {
        Self {
            client,
            users_url: users_url.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.users_url.clone())
    }

    pub fn users_url(&self) -> &str {
        &self.users_url
    }
}

impl UserDirectory for HttpDirectory {
    async fn username_exists(&self, username: &str) -> Result<bool, DirectoryError> {
        let response = self
            .client
            .get(&self.users_url)
            .query(&[("username", username)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Status(status.as_u16()));
        }

        // Only the length matters
        let matches: Vec<IgnoredAny> = response.json().await?;
        Ok(!matches.is_empty())
    }

    async fn create_user(&self, user: &UserRecord) -> Result<(), DirectoryError> {
        let response = self.client.post(&self.users_url).json(user).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Status(status.as_u16()));
        }
        Ok(())
    }
}

/// In-memory UserDirectory for tests and offline development.
#[derive(Clone, Debug, Default)]
pub struct MemoryDirectory {
    users: Arc<Mutex<Vec<UserRecord>>>,
    offline: Arc<AtomicBool>,
    lookups: Arc<AtomicUsize>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: impl IntoIterator<Item = UserRecord>) -> Self {
        let directory = Self::new();
        if let Ok(mut stored) = directory.users.lock() {
            stored.extend(users);
        }
        directory
    }

    /// While offline every call fails with [`DirectoryError::Unavailable`].
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Number of `username_exists` calls received, including failed ones.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn users(&self) -> Vec<UserRecord> {
        self.users
            .lock()
            .map(|users| users.clone())
            .unwrap_or_default()
    }

    fn ensure_online(&self) -> Result<(), DirectoryError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(DirectoryError::Unavailable("directory is offline".into()));
        }
        Ok(())
    }

    fn poisoned() -> DirectoryError {
        DirectoryError::Unavailable("user list lock poisoned".into())
    }
}

impl UserDirectory for MemoryDirectory {
    async fn username_exists(&self, username: &str) -> Result<bool, DirectoryError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.ensure_online()?;
        let users = self.users.lock().map_err(|_| Self::poisoned())?;
        Ok(users.iter().any(|u| u.username == username))
    }

    async fn create_user(&self, user: &UserRecord) -> Result<(), DirectoryError> {
        self.ensure_online()?;
        self.users
            .lock()
            .map_err(|_| Self::poisoned())?
            .push(user.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> UserRecord {
        UserRecord::new(
            format!("id-{name}"),
            name.to_string(),
            "hash".to_string(),
            "url".to_string(),
        )
    }

    #[tokio::test]
    async fn test_exact_username_match() {
        let directory = MemoryDirectory::with_users([user("alice")]);

        assert!(directory.username_exists("alice").await.unwrap());
        assert!(!directory.username_exists("alic").await.unwrap());
        assert!(!directory.username_exists("alice2").await.unwrap());
        assert_eq!(directory.lookups(), 3);
    }

    #[tokio::test]
    async fn test_create_then_exists() {
        let directory = MemoryDirectory::new();
        assert!(!directory.username_exists("bob").await.unwrap());

        directory.create_user(&user("bob")).await.unwrap();

        assert!(directory.username_exists("bob").await.unwrap());
        assert_eq!(directory.users().len(), 1);
    }

    #[tokio::test]
    async fn test_offline_is_an_error_not_taken() {
        let directory = MemoryDirectory::with_users([user("alice")]);
        directory.set_offline(true);

        assert!(matches!(
            directory.username_exists("carol").await,
            Err(DirectoryError::Unavailable(_))
        ));
        assert!(directory.create_user(&user("carol")).await.is_err());
        assert_eq!(directory.users().len(), 1);

        directory.set_offline(false);
        assert!(!directory.username_exists("carol").await.unwrap());
    }

    /// Accept one connection on a local port, answer it with `status` and `body`,
    /// and hand back the raw request that came in.
    async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/users", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
                if let Some(head_end) = request.windows(4).position(|w| w == b"\r\n\r\n") {
                    let head = String::from_utf8_lossy(&request[..head_end]).to_lowercase();
                    let body_len = head
                        .lines()
                        .find_map(|line| line.strip_prefix("content-length:"))
                        .and_then(|v| v.trim().parse::<usize>().ok())
                        .unwrap_or(0);
                    if request.len() >= head_end + 4 + body_len {
                        break;
                    }
                }
            }

            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&request).into_owned()
        });

        (url, handle)
    }

    // Talk to the local listener directly, whatever HTTP_PROXY says
    fn local_directory(url: String) -> HttpDirectory {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        HttpDirectory::with_client(client, url)
    }

    #[tokio::test]
    async fn test_http_empty_collection_is_available() {
        let (url, server) = serve_once("200 OK", "[]").await;
        let directory = local_directory(url);

        assert!(!directory.username_exists("alice").await.unwrap());

        let request = server.await.unwrap();
        assert!(
            request.starts_with("GET /users?username=alice HTTP/1.1\r\n"),
            "{request}"
        );
    }

    #[tokio::test]
    async fn test_http_non_empty_collection_is_taken() {
        let (url, server) = serve_once("200 OK", r#"[{"id":"1","username":"alice"}]"#).await;
        let directory = local_directory(url);

        assert!(directory.username_exists("alice").await.unwrap());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_http_username_is_url_encoded() {
        let (url, server) = serve_once("200 OK", "[]").await;
        let directory = local_directory(url);

        assert!(!directory.username_exists("a b&c").await.unwrap());

        let request = server.await.unwrap();
        assert!(
            request.starts_with("GET /users?username=a+b%26c HTTP/1.1\r\n"),
            "{request}"
        );
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let (url, server) = serve_once("503 Service Unavailable", "").await;
        let directory = local_directory(url);

        assert!(matches!(
            directory.username_exists("alice").await,
            Err(DirectoryError::Status(503))
        ));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_http_non_array_body_is_network_error() {
        let (url, server) = serve_once("200 OK", r#"{"error":"nope"}"#).await;
        let directory = local_directory(url);

        let err = directory.username_exists("alice").await.unwrap_err();
        assert!(matches!(err, DirectoryError::Transport(_)), "{err}");
        assert!(matches!(
            crate::error::RegistrationError::from(err),
            crate::error::RegistrationError::Network(_)
        ));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_http_create_user_posts_record() {
        let (url, server) = serve_once("201 Created", "{}").await;
        let directory = local_directory(url);

        directory.create_user(&user("bob")).await.unwrap();

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /users HTTP/1.1\r\n"), "{request}");
        assert!(request.contains(r#""username":"bob""#), "{request}");
        assert!(request.contains(r#""profilePictureURL":"url""#), "{request}");
    }

    #[test]
    fn test_http_directory_from_settings() {
        let settings = Settings {
            users_url: "http://users.test/users".into(),
            ..Settings::default()
        };
        let directory = HttpDirectory::from_settings(&settings);
        assert_eq!(directory.users_url(), "http://users.test/users");
    }
}
