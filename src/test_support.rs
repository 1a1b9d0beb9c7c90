// Helpers shared by the tests that run against local HTTP servers.

use httpmock::{
    Method::{GET, HEAD},
    Mock, MockServer,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use url::Url;

// Serves `html` at `path` for both the HEAD probe and the GET.
// Returns (head_mock, get_mock) so tests can assert on hit counts.
pub async fn mock_html<'a>(server: &'a MockServer, path: &str, html: &str) -> (Mock<'a>, Mock<'a>) {
    mock_response(server, path, 200, "text/html; charset=utf-8", html).await
}

pub async fn mock_response<'a>(
    server: &'a MockServer,
    path: &str,
    status: u16,
    content_type: &str,
    body: &str,
) -> (Mock<'a>, Mock<'a>) {
    let head = server
        .mock_async(|when, then| {
            when.method(HEAD).path(path);
            then.status(status).header("content-type", content_type);
        })
        .await;
    let get = server
        .mock_async(|when, then| {
            when.method(GET).path(path);
            then.status(status).header("content-type", content_type).body(body);
        })
        .await;
    (head, get)
}

// A raw TCP server whose GET responses promise 100 bytes but send 10 and
// hang up. HEAD answers look like a normal HTML page.
// Returns the URL of its root page.
pub async fn serve_truncated_html() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut buf = [0u8; 4096];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let head = b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: 100\r\nConnection: close\r\n\r\n";
                let _ = socket.write_all(head).await;
                if !buf[..n].starts_with(b"HEAD") {
                    // a complete link, so a body mistaken for whole would add a child
                    let _ = socket.write_all(b"<a href=a>").await;
                }
                let _ = socket.shutdown().await;
            });
        }
    });

    Url::parse(&format!("http://{address}/")).unwrap()
}
