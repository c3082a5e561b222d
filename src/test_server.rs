//! Loopback http server for tests, answers every path from a fixed table.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

#[derive(Debug, Clone)]
pub(crate) enum Route {
  Respond { status: u16, delay: Duration, body: String },
  /// Answers HEAD with a `content-length` but sends no body, GET gets `length` bytes.
  Advertise { length: usize },
  /// Accepts the connection and never answers.
  Hang,
}

impl Route {
  pub(crate) fn status(status: u16) -> Self {
    Self::Respond { status, delay: Duration::ZERO, body: String::new() }
  }

  pub(crate) fn delayed(status: u16, delay: Duration) -> Self {
    Self::Respond { status, delay, body: String::new() }
  }

  pub(crate) fn json(body: &str) -> Self {
    Self::Respond { status: 200, delay: Duration::ZERO, body: body.to_string() }
  }
}

/// What the server has seen so far.
#[derive(Default)]
pub(crate) struct Traffic {
  connections: AtomicUsize,
  request_heads: Mutex<Vec<String>>,
}

impl Traffic {
  pub(crate) fn connections(&self) -> usize {
    self.connections.load(Ordering::SeqCst)
  }

  /// Lowercased request lines and headers, one entry per request.
  pub(crate) fn request_heads(&self) -> Vec<String> {
    self.request_heads.lock().expect("traffic lock poisoned").clone()
  }
}

pub(crate) struct TestServer {
  pub(crate) address: SocketAddr,
  pub(crate) traffic: Arc<Traffic>,
  handle: JoinHandle<()>,
}

impl TestServer {
  pub(crate) async fn start(routes: HashMap<String, Route>) -> Self {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("couldn't bind test server");
    let address = listener.local_addr().expect("test server has no address");
    let routes = Arc::new(routes);
    let traffic = Arc::new(Traffic::default());
    let accepted = traffic.clone();
    let handle = tokio::spawn(async move {
      while let Ok((socket, _)) = listener.accept().await {
        accepted.connections.fetch_add(1, Ordering::SeqCst);
        let routes = routes.clone();
        let traffic = accepted.clone();
        tokio::spawn(async move {
          let _ = serve(socket, routes, traffic).await;
        });
      }
    });
    Self { address, traffic, handle }
  }

  /// `http://127.0.0.1:port/` followed by `path` without its leading slash.
  pub(crate) fn url(&self, path: &str) -> String {
    format!("http://{}/{}", self.address, path.trim_start_matches('/'))
  }
}

impl Drop for TestServer {
  fn drop(&mut self) {
    self.handle.abort();
  }
}

async fn serve(mut socket: TcpStream, routes: Arc<HashMap<String, Route>>, traffic: Arc<Traffic>) -> std::io::Result<()> {
  let mut request = Vec::new();
  let mut chunk = [0_u8; 1024];
  while !request.windows(4).any(|window| window == b"\r\n\r\n") {
    let read = socket.read(&mut chunk).await?;
    if read == 0 {
      return Ok(());
    }
    request.extend_from_slice(&chunk[..read]);
  }
  let head = String::from_utf8_lossy(&request).to_string();
  if let Ok(mut heads) = traffic.request_heads.lock() {
    heads.push(head.to_lowercase());
  }
  let mut request_line = head.lines().next().unwrap_or_default().split_whitespace();
  let method = request_line.next().unwrap_or_default().to_string();
  let path = request_line.next().unwrap_or("/").to_string();

  let (status, body) = match routes.get(&path) {
    Some(Route::Hang) => {
      tokio::time::sleep(Duration::from_secs(3600)).await;
      return Ok(());
    },
    Some(Route::Respond { status, delay, body }) => {
      tokio::time::sleep(*delay).await;
      (*status, body.clone())
    },
    Some(Route::Advertise { length }) => (200, "x".repeat(*length)),
    None => (404, String::new()),
  };

  let response = format!(
    "HTTP/1.1 {} {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n",
    status,
    reason(status),
    body.len()
  );
  socket.write_all(response.as_bytes()).await?;
  if method != "HEAD" {
    socket.write_all(body.as_bytes()).await?;
  }
  socket.shutdown().await
}

fn reason(status: u16) -> &'static str {
  match status {
    200 => "OK",
    403 => "Forbidden",
    404 => "Not Found",
    500 => "Internal Server Error",
    503 => "Service Unavailable",
    _ => "Unknown",
  }
}
