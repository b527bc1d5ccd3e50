#![allow(dead_code)]

use std::collections::VecDeque;
use std::future::Future;
use std::process::{Command, Output};
use std::sync::{Arc, Mutex};

use censo::error::{CensoError, Result};
use censo::fetch::Transport;
use censo::query::Request;
use serde_json::Value;
use tempfile::TempDir;

/// Nothing listens here, so any request fails fast with a refused connection
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

/// Helper struct to run censo commands against an isolated config directory
pub struct CensoTest {
    pub temp_dir: TempDir,
}

impl CensoTest {
    pub fn new() -> Self {
        CensoTest {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_censo"))
            .args(args)
            .env("CENSO_CONFIG_DIR", self.temp_dir.path())
            .env("CENSO_API_URL", UNREACHABLE_URL)
            .env("NO_COLOR", "1")
            .env_remove("CENSO_LOG")
            .output()
            .expect("Failed to execute censo command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Command {:?} should have failed\nstdout: {}",
            args,
            String::from_utf8_lossy(&output.stdout)
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }
}

#[derive(Default)]
struct MockState {
    responses: VecDeque<Result<Value>>,
    requests: Vec<Request>,
}

/// In-memory transport that replays queued responses and records requests
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, payload: Value) -> &Self {
        self.state.lock().unwrap().responses.push_back(Ok(payload));
        self
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.state
            .lock()
            .unwrap()
            .responses
            .push_back(Err(CensoError::RequestFailed(message.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }
}

impl Transport for MockTransport {
    fn get(&self, request: &Request) -> impl Future<Output = Result<Value>> + Send {
        let outcome = {
            let mut state = self.state.lock().unwrap();
            state.requests.push(request.clone());
            state
                .responses
                .pop_front()
                .unwrap_or_else(|| Err(CensoError::RequestFailed("no response queued".to_string())))
        };
        async move { outcome }
    }
}
