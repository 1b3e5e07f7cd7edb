//! One-shot HTTP server answering with a canned response.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

pub struct CannedServer {
    pub base_url: String,
    request: oneshot::Receiver<String>,
}

impl CannedServer {
    /// Accept a single connection, answer with `status` and `body`, then
    /// close it.
    pub async fn start(status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {status} Canned\r\n\
             Content-Type: application/json\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\
             \r\n\
             {body}",
            body.len()
        );
        let (request_tx, request_rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut head = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&chunk[..n]);
                if head.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            let _ = request_tx.send(String::from_utf8_lossy(&head).into_owned());
        });

        Self {
            base_url: format!("http://{addr}"),
            request: request_rx,
        }
    }

    /// Request head as sent by the client, header names lowercased.
    pub async fn request(self) -> String {
        self.request.await.unwrap().to_lowercase()
    }
}
