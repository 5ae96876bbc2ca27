use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use bioverse_api::{ApiError, Backend, ClientConfig, HttpBackend};

/// Request captured by [`serve_once`].
struct Captured {
	request_line: String,
	body: String,
}

/// Accept a single connection, record the request and reply with `status` and
/// `body`. Returns the base URL and a receiver for the captured request.
fn serve_once(status: &'static str, body: &'static str) -> (String, mpsc::Receiver<Captured>) {
	let listener = TcpListener::bind("127.0.0.1:0").unwrap();
	let addr = listener.local_addr().unwrap();
	let (tx, rx) = mpsc::channel();

	thread::spawn(move || {
		let (stream, _) = listener.accept().unwrap();
		let mut reader = BufReader::new(stream.try_clone().unwrap());

		let mut request_line = String::new();
		reader.read_line(&mut request_line).unwrap();

		let mut content_length = 0usize;
		loop {
			let mut header = String::new();
			reader.read_line(&mut header).unwrap();
			let header = header.trim_end();
			if header.is_empty() {
				break;
			}
			if let Some((name, value)) = header.split_once(':') {
				if name.eq_ignore_ascii_case("content-length") {
					content_length = value.trim().parse().unwrap();
				}
			}
		}
		let mut body_buf = vec![0u8; content_length];
		reader.read_exact(&mut body_buf).unwrap();

		let response = format!(
			"HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
			body.len()
		);
		let mut stream = stream;
		stream.write_all(response.as_bytes()).unwrap();
		stream.flush().unwrap();

		let _ = tx.send(Captured {
			request_line: request_line.trim_end().to_string(),
			body: String::from_utf8(body_buf).unwrap(),
		});
	});

	(format!("http://{addr}"), rx)
}

fn client(base: &str) -> HttpBackend {
	let config = ClientConfig::new(base).with_timeout(Some(Duration::from_secs(5)));
	HttpBackend::new(&config).unwrap()
}

fn captured(rx: &mpsc::Receiver<Captured>) -> Captured {
	rx.recv_timeout(Duration::from_secs(5)).expect("server saw request")
}

#[test]
fn search_parses_results_in_order() {
	let (base, rx) = serve_once(
		"200 OK",
		r#"{"query":"x","count":2,"results":[{"title":"A","description":"B"},{"title":"C","description":"D"}]}"#,
	);
	let response = client(&base).search("x").unwrap();

	let titles: Vec<_> = response.results.iter().map(|hit| hit.title.as_str()).collect();
	assert_eq!(titles, ["A", "C"]);
	assert_eq!(response.results[0].description, "B");
	assert_eq!(response.count, Some(2));
	assert_eq!(captured(&rx).request_line, "GET /search?q=x HTTP/1.1");
}

#[test]
fn recommend_keeps_hits_without_description() {
	let (base, _rx) = serve_once(
		"200 OK",
		r#"{"query":"bone","results":[{"id":"OSD-7","title":"Bone density","description":null}]}"#,
	);
	let response = client(&base).recommend("bone").unwrap();
	assert_eq!(response.results.len(), 1);
	assert_eq!(response.results[0].title, "Bone density");
	assert_eq!(response.results[0].description, "");
}

#[test]
fn query_is_percent_encoded() {
	let (base, rx) = serve_once("200 OK", r#"{"summary":"ok"}"#);
	client(&base).describe("plant growth & roots").unwrap();

	let request_line = captured(&rx).request_line;
	assert_eq!(
		request_line,
		"GET /describe?q=plant+growth+%26+roots HTTP/1.1"
	);
}

#[test]
fn recommend_accepts_empty_message_response() {
	let (base, _rx) = serve_once(
		"200 OK",
		r#"{"query":"zzz","message":"No recommendations found","results":[]}"#,
	);
	let response = client(&base).recommend("zzz").unwrap();
	assert!(response.results.is_empty());
	assert_eq!(response.message.as_deref(), Some("No recommendations found"));
}

#[test]
fn ner_posts_text_as_json() {
	let (base, rx) = serve_once("200 OK", r#"{"entities":[{"text":"Arabidopsis"}]}"#);
	let payload = client(&base).recognize("Arabidopsis in microgravity").unwrap();

	assert_eq!(payload.0["entities"][0]["text"], "Arabidopsis");
	let request = captured(&rx);
	assert_eq!(request.request_line, "POST /scibert/ner HTTP/1.1");
	let sent: serde_json::Value = serde_json::from_str(&request.body).unwrap();
	assert_eq!(sent, serde_json::json!({ "text": "Arabidopsis in microgravity" }));
}

#[test]
fn server_error_maps_to_status_with_detail() {
	let (base, _rx) = serve_once(
		"500 Internal Server Error",
		r#"{"detail":"SciBERT service unavailable"}"#,
	);
	let err = client(&base).recognize("mice").unwrap_err();

	assert_eq!(err.status(), Some(500));
	assert!(
		err.to_string().contains("SciBERT service unavailable"),
		"unexpected message: {err}"
	);
}

#[test]
fn malformed_json_maps_to_decode_error() {
	let (base, _rx) = serve_once("200 OK", "{not json");
	let err = client(&base).search("x").unwrap_err();
	assert!(matches!(err, ApiError::Decode { .. }), "got {err:?}");
}

#[test]
fn unreachable_backend_maps_to_transport_error() {
	let listener = TcpListener::bind("127.0.0.1:0").unwrap();
	let addr = listener.local_addr().unwrap();
	drop(listener);

	let err = client(&format!("http://{addr}")).search("x").unwrap_err();
	assert!(matches!(err, ApiError::Transport { .. }), "got {err:?}");
}
