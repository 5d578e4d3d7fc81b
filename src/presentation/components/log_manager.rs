use std::collections::VecDeque;
use std::sync::mpsc::Receiver;

const MAX_LOG_SIZE: usize = 200;

/// The most recent captured log lines, oldest first.
pub struct LogManager {
    logs: VecDeque<String>,
}

impl LogManager {
    pub fn new() -> Self {
        Self {
            logs: VecDeque::with_capacity(MAX_LOG_SIZE),
        }
    }

    pub fn push(&mut self, message: String) {
        if self.logs.len() >= MAX_LOG_SIZE {
            self.logs.pop_front();
        }
        self.logs.push_back(message);
    }

    /// Moves everything waiting on `rx` into the buffer; returns how many lines arrived.
    pub fn drain(&mut self, rx: &Receiver<String>) -> usize {
        let mut received = 0;
        for message in rx.try_iter() {
            self.push(message);
            received += 1;
        }
        received
    }

    pub fn all_logs(&self) -> impl Iterator<Item = &str> {
        self.logs.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.logs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
