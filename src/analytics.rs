use thiserror::Error;

/// Event name sent when a route doesn't match.
pub const PAGE_NOT_FOUND: &str = "page_not_found";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyticsEvent<'a> {
    pub name: &'static str,
    pub page_path: &'a str,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("analytics hook threw: {0}")]
    Rejected(String),
}

/// Host-provided analytics function, when the page has one.
pub trait AnalyticsSink {
    fn send(&self, event: &AnalyticsEvent<'_>) -> Result<(), AnalyticsError>;
}

/// Report an unmatched path. Fire and forget: no sink means nothing to do,
/// and a failing sink is only logged. Returns whether the event went out.
pub fn track_not_found(sink: Option<&dyn AnalyticsSink>, path: &str) -> bool {
    let Some(sink) = sink else {
        return false;
    };
    let event = AnalyticsEvent {
        name: PAGE_NOT_FOUND,
        page_path: path,
    };
    match sink.send(&event) {
        Ok(()) => true,
        Err(err) => {
            log::debug!("dropping {PAGE_NOT_FOUND} event for {path}: {err}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        events: RefCell<Vec<(String, String)>>,
    }

    impl AnalyticsSink for Recorder {
        fn send(&self, event: &AnalyticsEvent<'_>) -> Result<(), AnalyticsError> {
            self.events
                .borrow_mut()
                .push((event.name.to_string(), event.page_path.to_string()));
            Ok(())
        }
    }

    struct Throwing;

    impl AnalyticsSink for Throwing {
        fn send(&self, _event: &AnalyticsEvent<'_>) -> Result<(), AnalyticsError> {
            Err(AnalyticsError::Rejected("gtag is not a function".to_string()))
        }
    }

    #[test]
    fn test_no_sink_is_not_an_error() {
        assert!(!track_not_found(None, "/missing"));
    }

    #[test]
    fn test_sink_called_once_with_path() {
        let recorder = Recorder::default();
        assert!(track_not_found(Some(&recorder), "/does/not/exist"));
        assert_eq!(
            recorder.events.into_inner(),
            vec![(
                "page_not_found".to_string(),
                "/does/not/exist".to_string()
            )]
        );
    }

    #[test]
    fn test_failing_sink_is_swallowed() {
        assert!(!track_not_found(Some(&Throwing), "/missing"));
    }
}
