//! Shared helpers for CLI integration tests: a throwaway HTTP stub standing
//! in for the Joplin clipper service, and JEX archive fixtures.

#![allow(dead_code)]

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::thread;

pub const X: &str = "11111111111111111111111111111111";
pub const Y: &str = "22222222222222222222222222222222";
pub const Z: &str = "33333333333333333333333333333333";
pub const W: &str = "44444444444444444444444444444444";

/// Minimal HTTP/1.1 server answering `"METHOD /path?query"` keys with canned
/// `(status, body)` pairs. Unknown routes get 404. One request per
/// connection.
pub struct StubService {
    pub port: u16,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubService {
    pub fn start(routes: Vec<(String, u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind stub service");
        let port = listener.local_addr().expect("No local addr").port();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let routes: HashMap<String, (u16, String)> = routes
            .into_iter()
            .map(|(key, status, body)| (key, (status, body)))
            .collect();

        let recorded = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { continue };
                let mut reader = BufReader::new(match stream.try_clone() {
                    Ok(s) => s,
                    Err(_) => continue,
                });

                let mut request_line = String::new();
                if reader.read_line(&mut request_line).is_err() {
                    continue;
                }
                loop {
                    let mut header = String::new();
                    match reader.read_line(&mut header) {
                        Ok(0) => break,
                        Ok(_) if header == "\r\n" => break,
                        Ok(_) => {}
                        Err(_) => break,
                    }
                }

                let key = request_line
                    .split_whitespace()
                    .take(2)
                    .collect::<Vec<_>>()
                    .join(" ");
                recorded.lock().expect("poisoned").push(key.clone());

                let (status, body) = routes
                    .get(&key)
                    .cloned()
                    .unwrap_or((404, String::new()));
                let response = format!(
                    "HTTP/1.1 {status} STUB\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.flush();
            }
        });

        Self { port, requests }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("poisoned").clone()
    }

    pub fn deletes(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter(|r| r.starts_with("DELETE "))
            .collect()
    }
}

/// Routes for a single-page catalog of `(id, title)` pairs, listed with token `T`.
pub fn catalog_routes(resources: &[(&str, &str)]) -> Vec<(String, u16, String)> {
    let items = resources
        .iter()
        .map(|(id, title)| format!(r#"{{"id":"{id}","title":"{title}"}}"#))
        .collect::<Vec<_>>()
        .join(",");

    let mut routes = vec![(
        "GET /resources?token=T&limit=50&page=1".to_string(),
        200,
        format!(r#"{{"items":[{items}],"has_more":false}}"#),
    )];
    for (id, _) in resources {
        routes.push((format!("DELETE /resources/{id}?token=T"), 200, String::new()));
    }
    routes
}

/// Write a JEX archive referencing `ids`, plus one note entry.
pub fn write_export(dir: &Path, ids: &[&str]) -> PathBuf {
    let path = dir.join("export.jex");
    let file = File::create(&path).expect("Failed to create archive");
    let mut builder = tar::Builder::new(file);

    let mut names = vec![format!("{}.md", "a".repeat(32))];
    names.extend(ids.iter().map(|id| format!("resources/{id}.png")));
    for name in names {
        let data = b"x";
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        builder
            .append_data(&mut header, name, &data[..])
            .expect("Failed to append entry");
    }
    builder.finish().expect("Failed to finish archive");
    path
}

/// Point the project config at the stub's loopback address.
pub fn write_project_config(dir: &Path) {
    let config_dir = dir.join(".jexvac");
    fs::create_dir_all(&config_dir).expect("Failed to create .jexvac dir");
    fs::write(
        config_dir.join("config.toml"),
        "[service]\nhost = \"127.0.0.1\"\nrequest_timeout_secs = 5\n",
    )
    .expect("Failed to write config");
}
