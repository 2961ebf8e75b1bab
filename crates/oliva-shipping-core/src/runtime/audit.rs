// crates/oliva-shipping-core/src/runtime/audit.rs
// ============================================================================
// Module: Shipping Audit Sinks
// Description: Reference audit sink implementations.
// Purpose: Emit structured audit records as JSON lines or discard them.
// Dependencies: crate::interfaces, serde_json
// ============================================================================

//! ## Overview
//! [`JsonLinesAuditSink`] writes one JSON object per event to any writer
//! (stderr, a log file). [`NoopAuditSink`] discards events. Write failures
//! are swallowed so that logging never changes the outcome of a commit or
//! a resolution.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Stderr;
use std::io::Write;
use std::sync::Mutex;

use crate::interfaces::ShippingAuditEvent;
use crate::interfaces::ShippingAuditSink;

// ============================================================================
// SECTION: No-op Sink
// ============================================================================

/// Audit sink that discards every event.
///
/// # Invariants
/// - Events are intentionally discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAuditSink;

impl ShippingAuditSink for NoopAuditSink {
    fn record(&self, _event: &ShippingAuditEvent) {}
}

// ============================================================================
// SECTION: JSON Lines Sink
// ============================================================================

/// Audit sink writing newline-delimited JSON.
///
/// # Invariants
/// - Each event is written as a single line and flushed.
/// - Writer access is serialized through a mutex.
#[derive(Debug)]
pub struct JsonLinesAuditSink<W: Write + Send> {
    /// Destination writer.
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLinesAuditSink<W> {
    /// Wraps a writer.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl JsonLinesAuditSink<Stderr> {
    /// Creates a sink writing to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write + Send> ShippingAuditSink for JsonLinesAuditSink<W> {
    fn record(&self, event: &ShippingAuditEvent) {
        let Ok(mut line) = serde_json::to_vec(event) else {
            return;
        };
        line.push(b'\n');
        let mut writer = self.writer.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        if writer.write_all(&line).is_ok() {
            let _ = writer.flush();
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::expect_used, reason = "Test-only assertions are permitted.")]
mod tests {
    use super::JsonLinesAuditSink;
    use crate::core::ConfigVersion;
    use crate::interfaces::ShippingAuditEvent;
    use crate::interfaces::ShippingAuditSink;

    #[test]
    fn json_lines_sink_writes_one_tagged_line_per_event() {
        let sink = JsonLinesAuditSink::new(Vec::new());
        sink.record(&ShippingAuditEvent::ConfigBootstrapped {
            version: ConfigVersion::INITIAL,
        });
        sink.record(&ShippingAuditEvent::CommitRejected {
            active_version: None,
            reason: "tier_gap".to_string(),
            message: "gap".to_string(),
        });
        let output = String::from_utf8(sink.into_inner()).expect("utf-8");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], r#"{"event":"config_bootstrapped","version":1}"#);
        assert!(lines[1].contains(r#""reason":"tier_gap""#));
    }
}
