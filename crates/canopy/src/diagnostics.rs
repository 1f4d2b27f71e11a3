//! Observational hook for the offset relaxer.
//!
//! The relaxer reports each non-zero centering move and each pass beyond the
//! second through a [`Diagnostics`] sink. Sinks only observe; nothing they do
//! can change a layout.

use log::debug;

/// Receives diagnostic messages from a layout run.
pub trait Diagnostics {
    fn log(&mut self, message: &str);
}

/// Forwards messages to the `log` facade at debug level.
///
/// This is the sink used by [`crate::layout`] and [`crate::LayoutEngine::new`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn log(&mut self, message: &str) {
        debug!(target: "canopy::relax", "{message}");
    }
}

/// Discards every message.
impl Diagnostics for () {
    fn log(&mut self, _message: &str) {}
}

/// Collects messages, mostly useful in tests.
impl Diagnostics for Vec<String> {
    fn log(&mut self, message: &str) {
        self.push(message.to_owned());
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for &mut D {
    fn log(&mut self, message: &str) {
        (**self).log(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(sink: &mut impl Diagnostics) {
        sink.log("first");
        sink.log("second");
    }

    #[test]
    fn test_vec_collects_in_order() {
        let mut messages = Vec::new();
        emit(&mut messages);
        assert_eq!(messages, vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn test_mut_reference_forwards() {
        let mut messages = Vec::new();
        {
            let mut borrowed = &mut messages;
            emit(&mut borrowed);
        }
        assert_eq!(messages.len(), 2);
    }

    #[test]
    fn test_unit_and_log_sinks_accept_messages() {
        emit(&mut ());
        emit(&mut LogDiagnostics);
    }
}
