//! Gallery API client implementation

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, COOKIE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use urlencoding::encode;

use crate::config::Config;
use crate::domain::entities::{FavoriteToggle, NewPost, PostId, PostPage, Tag, UserId};
use crate::domain::ports::FeedApi;
use crate::error::{ApiError, FeedError};

/// HTTP implementation of the gallery API
#[derive(Clone)]
pub struct HttpFeedApi {
    http: Client,
    base_url: String,
}

impl HttpFeedApi {
    pub fn new(config: &Config) -> Result<Self, FeedError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(cookie) = &config.session_cookie {
            headers.insert(
                COOKIE,
                HeaderValue::from_str(cookie)
                    .map_err(|_| FeedError::Config("Invalid session cookie".to_string()))?,
            );
        }

        let http = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| FeedError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    async fn get_page(&self, path: &str, page: u32) -> Result<PostPage, ApiError> {
        tracing::debug!("GET {} page {}", path, page);
        let response = self
            .http
            .get(self.api_url(path))
            .query(&[("page", page)])
            .send()
            .await?;

        handle_response(response).await
    }

    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        tracing::debug!("POST {}", path);
        let response = self.http.post(self.api_url(path)).json(body).send().await?;

        handle_empty_response(response).await
    }
}

async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();

    if status.is_success() {
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        let message = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

async fn handle_empty_response(response: reqwest::Response) -> Result<(), ApiError> {
    let status = response.status();

    if status.is_success() {
        Ok(())
    } else {
        let message = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl FeedApi for HttpFeedApi {
    async fn list_posts(&self, page: u32) -> Result<PostPage, ApiError> {
        self.get_page("/posts", page).await
    }

    async fn popular_tags(&self) -> Result<Vec<Tag>, ApiError> {
        tracing::debug!("GET /tags/popular");
        let response = self.http.get(self.api_url("/tags/popular")).send().await?;
        handle_response(response).await
    }

    async fn posts_by_tag(&self, tag: &str, page: u32) -> Result<PostPage, ApiError> {
        self.get_page(&tag_path(tag), page).await
    }

    async fn posts_by_user(&self, user_id: UserId, page: u32) -> Result<PostPage, ApiError> {
        self.get_page(&format!("/posts/user/{}", user_id), page).await
    }

    async fn replies(&self, post_id: PostId, page: u32) -> Result<PostPage, ApiError> {
        self.get_page(&format!("/posts/{}/replies", post_id), page)
            .await
    }

    async fn favorites(&self, page: u32) -> Result<PostPage, ApiError> {
        self.get_page("/posts/favorites", page).await
    }

    async fn create_post(&self, draft: &NewPost) -> Result<(), ApiError> {
        self.post_json("/posts", draft).await
    }

    async fn create_reply(&self, parent: PostId, draft: &NewPost) -> Result<(), ApiError> {
        self.post_json(&format!("/posts/{}/replies", parent), draft)
            .await
    }

    async fn toggle_favorite(&self, post_id: PostId) -> Result<FavoriteToggle, ApiError> {
        let path = format!("/posts/{}/favorite", post_id);
        tracing::debug!("POST {}", path);
        let response = self.http.post(self.api_url(&path)).send().await?;
        handle_response(response).await
    }

    async fn delete_post(&self, post_id: PostId) -> Result<(), ApiError> {
        let path = format!("/posts/{}", post_id);
        tracing::debug!("DELETE {}", path);
        let response = self.http.delete(self.api_url(&path)).send().await?;
        handle_empty_response(response).await
    }
}

/// Tag names are user text and go into a path segment
fn tag_path(tag: &str) -> String {
    format!("/posts/tag/{}", encode(tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::FavoriteAction;
    use axum::extract::{Path, Query};
    use axum::http::{header, HeaderMap, StatusCode};
    use axum::response::IntoResponse;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::time::Duration;

    fn config(base_url: &str) -> Config {
        Config {
            api_base_url: base_url.to_string(),
            session_cookie: Some("session=abc123".to_string()),
            viewer: None,
            timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn test_client_new() {
        let client = HttpFeedApi::new(&config("http://gallery.local")).unwrap();
        assert_eq!(client.base_url(), "http://gallery.local");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = HttpFeedApi::new(&config("http://gallery.local/")).unwrap();
        assert_eq!(client.base_url(), "http://gallery.local");
        assert_eq!(client.api_url("/posts"), "http://gallery.local/api/posts");
    }

    #[test]
    fn test_invalid_cookie_rejected() {
        let mut cfg = config("http://gallery.local");
        cfg.session_cookie = Some("bad\ncookie".to_string());
        assert!(matches!(
            HttpFeedApi::new(&cfg),
            Err(FeedError::Config(_))
        ));
    }

    #[test]
    fn test_tag_path_is_encoded() {
        assert_eq!(tag_path("rust"), "/posts/tag/rust");
        assert_eq!(tag_path("AI 会話"), "/posts/tag/AI%20%E4%BC%9A%E8%A9%B1");
        assert_eq!(tag_path("a/b"), "/posts/tag/a%2Fb");
    }

    // ===== response handling tests =====

    fn post_body(id: i64, tags: Vec<String>) -> Value {
        json!({
            "id": id,
            "content": format!("post {}", id),
            "url": "",
            "tags": tags,
            "replies_count": null,
            "favorite_count": 1,
            "is_favorited": false,
            "is_own": false,
            "created_at": "2024-05-01T12:00:00.123456",
            "author": {"id": 4, "name": "taro", "profile_pic": null}
        })
    }

    fn gallery_router() -> Router {
        Router::new()
            .route(
                "/api/posts",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database down") })
                    .post(|| async { StatusCode::CREATED }),
            )
            .route("/api/posts/favorites", get(|| async { "not json" }))
            .route(
                "/api/posts/:id/replies",
                get(
                    |Path(id): Path<i64>, Query(query): Query<HashMap<String, String>>| async move {
                        let page = query.get("page").and_then(|p| p.parse::<u32>().ok());
                        Json(json!({
                            "replies": [post_body(id * 10, vec![])],
                            "has_next": false,
                            "total": 1,
                            "current_page": page,
                            "pages": 1
                        }))
                    },
                ),
            )
            .route(
                "/api/posts/tag/:tag",
                get(|Path(tag): Path<String>| async move {
                    Json(json!({"posts": [post_body(1, vec![tag])], "has_next": true}))
                }),
            )
            .route(
                "/api/posts/:id/favorite",
                post(|| async { Json(json!({"action": "added", "favorite_count": 2})) }),
            )
            .route(
                "/api/posts/:id",
                axum::routing::delete(|Path(id): Path<i64>| async move {
                    if id == 404 {
                        (StatusCode::NOT_FOUND, "no such post").into_response()
                    } else {
                        StatusCode::NO_CONTENT.into_response()
                    }
                }),
            )
            .route(
                "/api/tags/popular",
                get(|headers: HeaderMap| async move {
                    match headers.get(header::COOKIE) {
                        Some(cookie) if cookie == "session=abc123" => {
                            Json(json!([{"name": "ai", "count": 3}])).into_response()
                        }
                        _ => StatusCode::UNAUTHORIZED.into_response(),
                    }
                }),
            )
    }

    async fn serve_gallery() -> HttpFeedApi {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, gallery_router()).await.unwrap();
        });
        HttpFeedApi::new(&config(&format!("http://{}", addr))).unwrap()
    }

    #[tokio::test]
    async fn test_non_success_keeps_body_as_message() {
        let api = serve_gallery().await;

        match api.list_posts(1).await {
            Err(ApiError::Status { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "database down");
            }
            other => panic!("expected a status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_is_decode_error() {
        let api = serve_gallery().await;

        let err = api.favorites(1).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)), "got {:?}", err);
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn test_reply_page_decodes_with_page_query() {
        let api = serve_gallery().await;

        let page = api.replies(PostId(7), 3).await.unwrap();
        assert_eq!(page.posts.len(), 1);
        assert_eq!(page.posts[0].id, PostId(70));
        assert_eq!(page.posts[0].reply_count, 0);
        assert_eq!(page.posts[0].author.avatar_url, "");
        assert!(!page.has_next);
        assert_eq!(page.current_page, Some(3));
    }

    #[tokio::test]
    async fn test_tag_name_round_trips_through_path() {
        let api = serve_gallery().await;

        let page = api.posts_by_tag("machine learning", 1).await.unwrap();
        assert_eq!(page.posts[0].tags, vec!["machine learning".to_string()]);
        assert!(page.has_next);
    }

    #[tokio::test]
    async fn test_empty_responses() {
        let api = serve_gallery().await;
        let draft = NewPost {
            content: "hello".to_string(),
            url: "https://chat.example.com/s/1".to_string(),
            tags: vec![],
        };

        assert!(api.create_post(&draft).await.is_ok());
        assert!(api.delete_post(PostId(1)).await.is_ok());
        assert_eq!(
            api.delete_post(PostId(404)).await.unwrap_err().status(),
            Some(404)
        );
    }

    #[tokio::test]
    async fn test_toggle_favorite_decodes() {
        let api = serve_gallery().await;

        let toggle = api.toggle_favorite(PostId(1)).await.unwrap();
        assert_eq!(toggle.action, FavoriteAction::Added);
        assert_eq!(toggle.favorite_count, 2);
    }

    #[tokio::test]
    async fn test_session_cookie_is_sent() {
        let api = serve_gallery().await;

        let tags = api.popular_tags().await.unwrap();
        assert_eq!(tags[0].name, "ai");
        assert_eq!(tags[0].count, 3);
    }
}
