use super::{EventType, Payload};
use crate::sse::{Event, EventBuildError};
use smallvec::{SmallVec, smallvec};
use smol_str::SmolStr;

/// [`RemoveSignals`] sends signals to the browser to be removed from the signals.
///
/// All paths are written space-separated on a single `paths` line,
/// which is why a path can contain no whitespace.
///
/// See the [Datastar documentation](https://data-star.dev/reference/sse_events#datastar-remove-signals) for more information.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoveSignals {
    /// `paths` is a list of strings that represent the signal paths to be removed from the signals.
    ///
    /// The paths ***must*** be valid . delimited paths to signals within the signals.
    /// The Datastar client side will use these paths to remove the data from the signals.
    pub paths: SmallVec<[SmolStr; 4]>,
}

impl RemoveSignals {
    pub const TYPE: EventType = EventType::RemoveSignals;

    /// Create a new [`RemoveSignals`] data blob.
    pub fn new(path: impl Into<SmolStr>) -> Self {
        Self {
            paths: smallvec![path.into()],
        }
    }

    /// Create a new [`RemoveSignals`] data blob.
    ///
    /// An empty list is allowed, resulting in a `paths` line without paths.
    pub fn new_multi(paths: impl IntoIterator<Item = impl Into<SmolStr>>) -> Self {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    crate::macros::generate_set_and_with! {
        /// Add an additional path to remove.
        pub fn additional_path(mut self, path: impl Into<SmolStr>) -> Self {
            self.paths.push(path.into());
            self
        }
    }

    /// Consume `self` as an [`Event`].
    ///
    /// Fails if any path is empty or contains whitespace,
    /// as the client could no longer tell the paths apart.
    pub fn try_into_event(self) -> Result<Event, EventBuildError> {
        let mut joined = String::with_capacity(self.paths.iter().map(|p| p.len() + 1).sum());
        for (index, path) in self.paths.iter().enumerate() {
            if path.is_empty() || path.contains(char::is_whitespace) {
                return Err(EventBuildError::invalid_signal_path(path.clone()));
            }
            if index > 0 {
                joined.push(' ');
            }
            joined.push_str(path);
        }

        let mut payload = Payload::new();
        payload.push_option("paths", joined);
        Ok(payload.into_event(Self::TYPE))
    }
}

impl TryFrom<RemoveSignals> for Event {
    type Error = EventBuildError;

    #[inline]
    fn try_from(value: RemoveSignals) -> Result<Self, Self::Error> {
        value.try_into_event()
    }
}
