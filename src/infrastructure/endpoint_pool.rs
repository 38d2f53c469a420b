// Round-robin rotation over inference endpoints
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug)]
pub struct EndpointPool {
    endpoints: Vec<String>,
    next: AtomicUsize,
}

impl EndpointPool {
    pub fn new(endpoints: Vec<String>) -> Self {
        Self {
            endpoints: endpoints
                .into_iter()
                .map(|e| e.trim_end_matches('/').to_string())
                .collect(),
            next: AtomicUsize::new(0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Every endpoint once, starting one past where the previous call
    /// started.
    pub fn rotation(&self) -> impl Iterator<Item = &str> {
        let len = self.endpoints.len();
        let start = if len == 0 {
            0
        } else {
            self.next.fetch_add(1, Ordering::Relaxed) % len
        };
        (0..len).map(move |i| self.endpoints[(start + i) % len].as_str())
    }
}
