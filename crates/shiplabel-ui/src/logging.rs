//! Browser console sink for `tracing` events.
//!
//! # Design
//! - Events are formatted by the `tracing-subscriber` fmt layer, one line each.
//! - Each line is routed to the console method matching its level.
//! - The emitter is injected so the routing runs natively in tests.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Console method an event is written with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsoleLevel {
    /// `console.log`
    Log,
    /// `console.warn`
    Warn,
    /// `console.error`
    Error,
}

impl ConsoleLevel {
    /// Console method for a tracing level.
    #[must_use]
    pub fn for_level(level: Level) -> Self {
        if level == Level::ERROR {
            Self::Error
        } else if level == Level::WARN {
            Self::Warn
        } else {
            Self::Log
        }
    }
}

/// Function receiving each formatted line.
pub type Emit = fn(ConsoleLevel, &str);

/// [`MakeWriter`] handing out one buffered writer per event.
#[derive(Clone, Copy)]
pub struct ConsoleMakeWriter {
    emit: Emit,
}

impl ConsoleMakeWriter {
    /// Route formatted lines through `emit`.
    #[must_use]
    pub const fn new(emit: Emit) -> Self {
        Self { emit }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleLevel::Log, self.emit)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleLevel::for_level(*meta.level()), self.emit)
    }
}

/// Collects one formatted event and emits it on drop.
pub struct ConsoleWriter {
    level: ConsoleLevel,
    emit: Emit,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    const fn new(level: ConsoleLevel, emit: Emit) -> Self {
        Self {
            level,
            emit,
            buffer: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buffer);
        let line = line.trim_end();
        if !line.is_empty() {
            (self.emit)(self.level, line);
        }
    }
}

/// Subscriber writing `info` and above through `emit`.
#[must_use]
pub fn console_subscriber(emit: Emit) -> impl tracing::Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter::new(emit))
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .finish()
}

/// Install the browser console subscriber; later calls are ignored.
#[cfg(target_arch = "wasm32")]
pub fn init_console_logging() {
    use tracing::subscriber::set_global_default;

    if set_global_default(console_subscriber(browser_console)).is_err() {
        gloo::console::warn!("tracing subscriber already installed");
    }
}

#[cfg(target_arch = "wasm32")]
fn browser_console(level: ConsoleLevel, line: &str) {
    match level {
        ConsoleLevel::Log => gloo::console::log!(line.to_string()),
        ConsoleLevel::Warn => gloo::console::warn!(line.to_string()),
        ConsoleLevel::Error => gloo::console::error!(line.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{self, AppStore};
    use shiplabel_core::{AuthError, Authenticator, BackendError, StubAuthenticator};
    use shiplabel_models::LabelField;
    use std::cell::RefCell;

    thread_local! {
        static LINES: RefCell<Vec<(ConsoleLevel, String)>> = const { RefCell::new(Vec::new()) };
    }

    fn capture(level: ConsoleLevel, line: &str) {
        LINES.with(|lines| lines.borrow_mut().push((level, line.to_string())));
    }

    fn captured<F: FnOnce()>(action: F) -> Vec<(ConsoleLevel, String)> {
        LINES.with(|lines| lines.borrow_mut().clear());
        tracing::subscriber::with_default(console_subscriber(capture), action);
        LINES.with(|lines| lines.borrow_mut().drain(..).collect())
    }

    fn warnings(lines: &[(ConsoleLevel, String)]) -> Vec<&str> {
        lines
            .iter()
            .filter(|(level, _)| *level == ConsoleLevel::Warn)
            .map(|(_, line)| line.as_str())
            .collect()
    }

    struct Refusing;

    impl Authenticator for Refusing {
        fn authenticate(&self) -> Result<(), AuthError> {
            Err(AuthError::Rejected)
        }
    }

    #[test]
    fn levels_map_to_console_methods() {
        assert_eq!(ConsoleLevel::for_level(Level::ERROR), ConsoleLevel::Error);
        assert_eq!(ConsoleLevel::for_level(Level::WARN), ConsoleLevel::Warn);
        assert_eq!(ConsoleLevel::for_level(Level::INFO), ConsoleLevel::Log);
        assert_eq!(ConsoleLevel::for_level(Level::TRACE), ConsoleLevel::Log);
    }

    #[test]
    fn invalid_compiled_url_warns_on_console() {
        let lines = captured(|| {
            let _ = crate::config::resolve(Some("ftp://example.com"));
        });
        let warned = warnings(&lines);
        assert_eq!(warned.len(), 1);
        assert!(warned[0].contains("ignoring invalid backend URL"));
    }

    #[test]
    fn rejected_login_warns_on_console() {
        let lines = captured(|| {
            store::login(&mut AppStore::default(), &Refusing);
        });
        assert!(warnings(&lines).iter().any(|line| line.contains("login rejected")));
    }

    #[test]
    fn workflow_failure_cause_reaches_console() {
        let lines = captured(|| {
            let mut state = AppStore::default();
            store::login(&mut state, &StubAuthenticator);
            for field in LabelField::all() {
                store::update_field(&mut state, field, "x".into());
            }
            let _ = store::begin_submit(&mut state);
            store::finish_submit(
                &mut state,
                Err(BackendError::Status {
                    operation: "generate-label",
                    status: 503,
                }),
            );
        });
        let warned = warnings(&lines);
        assert_eq!(warned.len(), 1);
        assert!(warned[0].contains("503"));
    }

    #[test]
    fn debug_events_are_filtered() {
        let lines = captured(|| tracing::debug!("hidden"));
        assert!(lines.is_empty());
    }
}
