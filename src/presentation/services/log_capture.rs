use std::fmt::{self, Write as _};
use std::sync::mpsc::{Receiver, Sender, channel};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

const CRATE_TARGET: &str = "startpage";

/// Installs the global subscriber and hands back the stream of formatted
/// log lines emitted by this crate. Only the first call installs anything.
pub fn init_log_capture() -> Receiver<String> {
    let (tx, rx) = channel();

    let installed = tracing_subscriber::registry()
        .with(max_level())
        .with(StartPageLogLayer { lines: tx })
        .try_init();
    if installed.is_err() {
        eprintln!("a tracing subscriber is already installed, log lines will not be captured");
    }

    rx
}

fn max_level() -> LevelFilter {
    if cfg!(any(debug_assertions, feature = "verbose-logging")) {
        LevelFilter::TRACE
    } else {
        LevelFilter::DEBUG
    }
}

struct StartPageLogLayer {
    lines: Sender<String>,
}

impl<S: Subscriber> Layer<S> for StartPageLogLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let Some(module) = metadata.target().strip_prefix(CRATE_TARGET) else {
            return;
        };

        let mut fields = LineFields::default();
        event.record(&mut fields);
        if let Some(line) = fields.into_line(*metadata.level(), module.trim_start_matches("::")) {
            // The receiver going away just means nobody is watching anymore.
            let _ = self.lines.send(line);
        }
    }
}

/// Message plus any structured `key = value` fields of one event.
#[derive(Default)]
struct LineFields {
    message: String,
    extra: String,
}

impl LineFields {
    fn into_line(self, level: Level, module: &str) -> Option<String> {
        if self.message.is_empty() && self.extra.is_empty() {
            return None;
        }
        let mut line = format!("[{level}]");
        if !module.is_empty() {
            let _ = write!(line, " {module}:");
        }
        if !self.message.is_empty() {
            let _ = write!(line, " {}", self.message);
        }
        line.push_str(&self.extra);
        Some(line)
    }
}

impl Visit for LineFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            let _ = write!(self.extra, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            let _ = write!(self.extra, " {}={:?}", field.name(), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_carry_level_module_and_fields() {
        let fields = LineFields {
            message: "Saved settings".into(),
            extra: " entries=3".into(),
        };
        assert_eq!(
            fields.into_line(Level::INFO, "application::use_cases").as_deref(),
            Some("[INFO] application::use_cases: Saved settings entries=3")
        );
    }

    #[test]
    fn empty_events_produce_no_line() {
        assert_eq!(LineFields::default().into_line(Level::WARN, ""), None);
    }

    #[test]
    fn crate_root_events_omit_the_module() {
        let fields = LineFields {
            message: "Start page loaded".into(),
            extra: String::new(),
        };
        assert_eq!(
            fields.into_line(Level::DEBUG, "").as_deref(),
            Some("[DEBUG] Start page loaded")
        );
    }
}
