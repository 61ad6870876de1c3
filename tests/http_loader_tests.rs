use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use todoboard::config::BoardConfig;
use todoboard::domain::task::Task;
use todoboard::services::{HttpTaskSource, LoadError, LoadOutcome, TaskSource, load_initial};

/// Answers exactly one request with a canned response and returns its URL.
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 2048];
        let _ = socket.read(&mut buf).await;

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
    });

    format!("http://{}/todos", addr)
}

#[tokio::test]
async fn test_fetch_decodes_task_array() {
    let url = serve_once(
        "200 OK",
        r#"[{"userId":1,"id":1,"title":"delectus aut autem","completed":false},
            {"userId":1,"id":2,"title":"quis ut nam facilis","completed":true},
            {"userId":2,"id":3,"title":"fugiat veniam minus","completed":false}]"#,
    )
    .await;

    let tasks = HttpTaskSource::new(url).fetch().await.unwrap();

    assert_eq!(tasks.len(), 3);
    assert_eq!(tasks[1], Task::new(2, "quis ut nam facilis").with_completed(true));
}

#[tokio::test]
async fn test_invalid_json_becomes_empty_list() {
    let url = serve_once("200 OK", "<html>oops</html>").await;
    let source = HttpTaskSource::new(url);

    let outcome = load_initial(&source).await;

    assert!(matches!(outcome, LoadOutcome::Failed(LoadError::Decode(_))));
    assert!(outcome.into_tasks().is_empty());
}

#[tokio::test]
async fn test_error_status_is_a_failure() {
    let url = serve_once("404 Not Found", "{}").await;

    let err = HttpTaskSource::new(url).fetch().await.unwrap_err();

    assert!(matches!(err, LoadError::Status(404)));
}

#[tokio::test]
async fn test_connection_refused_becomes_empty_list() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let source = HttpTaskSource::new(format!("http://{}/todos", addr));
    let outcome = load_initial(&source).await;

    assert!(matches!(outcome, LoadOutcome::Failed(LoadError::Request(_))));
    assert!(outcome.into_tasks().is_empty());
}

#[tokio::test]
async fn test_configured_timeout_is_applied() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (_socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(10)).await;
    });

    let config = BoardConfig {
        endpoint: format!("http://{}/todos", addr),
        request_timeout: Some(Duration::from_millis(200)),
        ..Default::default()
    };
    let err = HttpTaskSource::from_config(&config).fetch().await.unwrap_err();

    assert_eq!(err.kind(), "timeout");
}
