use crate::error::ServiceError;

/// Lifecycle of one panel's request: Idle -> Loading -> {Succeeded, Failed}.
///
/// `Succeeded` and `Failed` are resting states like `Idle`: the trigger is
/// enabled again and a new request may begin from them.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestPhase<T> {
    Idle,
    Loading,
    Succeeded(T),
    Failed(ServiceError),
}

impl<T> Default for RequestPhase<T> {
    fn default() -> Self {
        RequestPhase::Idle
    }
}

/// Returned by [`RequestPhase::begin`] when a request is already in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InFlight;

impl<T> RequestPhase<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestPhase::Loading)
    }

    /// Whether the trigger control accepts clicks.
    pub fn controls_enabled(&self) -> bool {
        !self.is_loading()
    }

    /// Enter `Loading`, dropping any previous result or error.
    pub fn begin(&mut self) -> Result<(), InFlight> {
        if self.is_loading() {
            return Err(InFlight);
        }
        *self = RequestPhase::Loading;
        Ok(())
    }

    /// Record the outcome of the in-flight request. Returns false, leaving
    /// the phase untouched, when nothing was in flight.
    pub fn settle(&mut self, outcome: Result<T, ServiceError>) -> bool {
        if !self.is_loading() {
            return false;
        }
        *self = match outcome {
            Ok(value) => RequestPhase::Succeeded(value),
            Err(e) => RequestPhase::Failed(e),
        };
        true
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            RequestPhase::Succeeded(v) => Some(v),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&ServiceError> {
        match self {
            RequestPhase::Failed(e) => Some(e),
            _ => None,
        }
    }
}
