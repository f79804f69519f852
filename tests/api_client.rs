//! HTTP behaviour of `ApiClient` against a mock backend.

mod common;

use cardviewer::api::{ApiClient, ApiError, CardSource};
use cardviewer::model::{Flashcard, FlashcardDraft, WordCard, WordDraft};
use common::mock_backend::{MockBackend, MockResponse};

#[tokio::test]
async fn list_flashcards_gets_collection_path() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(
            r#"[{"id": 1, "question": "2+2?", "answer": "4", "created_at": "2024-01-01T00:00:00Z"},
                {"id": 2, "question": "Capital of Japan?", "answer": "Tokyo", "created_at": null}]"#,
        ))
        .await;

    let client = ApiClient::new(backend.base_url()).unwrap();
    let cards = CardSource::<Flashcard>::list(&client).await.unwrap();

    assert_eq!(cards.len(), 2);
    assert_eq!(cards[1].answer, "Tokyo");

    let requests = backend.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/flashcards");
}

#[tokio::test]
async fn create_posts_json_body() {
    let backend = MockBackend::start().await;
    let client = ApiClient::new(format!("{}/", backend.base_url())).unwrap();

    let draft = FlashcardDraft {
        question: "What is Rust?".into(),
        answer: "A language".into(),
    };
    CardSource::<Flashcard>::create(&client, draft).await.unwrap();

    let requests = backend.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/flashcards");
    assert_eq!(
        requests[0].json(),
        serde_json::json!({"question": "What is Rust?", "answer": "A language"})
    );
}

#[tokio::test]
async fn words_accept_array_graphemes() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(
            r#"[{"id": 3, "original_word": "chair", "category": "furniture",
                 "image_url": "https://example.com/chair.jpg", "graphemes": ["ch", "ai", "r"]}]"#,
        ))
        .await;

    let client = ApiClient::new(backend.base_url()).unwrap();
    let words = CardSource::<WordCard>::list(&client).await.unwrap();

    assert_eq!(words[0].original_word, "chair");
    assert_eq!(words[0].graphemes.as_deref(), Some("ch ai r"));
    assert_eq!(backend.captured_requests().await[0].path, "/words");
}

#[tokio::test]
async fn word_create_sends_null_graphemes() {
    let backend = MockBackend::start().await;
    let client = ApiClient::new(backend.base_url()).unwrap();

    let draft = WordDraft {
        original_word: "sun".into(),
        category: "nature".into(),
        image_url: "https://via.placeholder.com/150".into(),
        graphemes: None,
    };
    CardSource::<WordCard>::create(&client, draft).await.unwrap();

    let body = backend.captured_requests().await[0].json();
    assert_eq!(body["original_word"], "sun");
    assert_eq!(body["graphemes"], serde_json::Value::Null);
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::error(500, "boom"))
        .await;
    backend
        .enqueue_response(MockResponse::error(422, "invalid"))
        .await;

    let client = ApiClient::new(backend.base_url()).unwrap();

    let err = CardSource::<Flashcard>::list(&client).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().starts_with("GET "));

    let draft = FlashcardDraft {
        question: "Q".into(),
        answer: "A".into(),
    };
    let err = CardSource::<Flashcard>::create(&client, draft).await.unwrap_err();
    assert_eq!(err.status(), Some(422));
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(r#"{"not": "a list"}"#))
        .await;

    let client = ApiClient::new(backend.base_url()).unwrap();
    let err = CardSource::<Flashcard>::list(&client).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }));
}

#[tokio::test]
async fn unreachable_backend_is_a_connection_error() {
    // Bind then drop to get a port nothing listens on.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let client = ApiClient::new(format!("http://127.0.0.1:{}", port)).unwrap();

    let err = CardSource::<Flashcard>::list(&client).await.unwrap_err();
    assert!(matches!(err, ApiError::Connection { .. }));
    assert_eq!(err.status(), None);
}
