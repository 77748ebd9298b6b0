use super::{
    EventType, Payload,
    consts::{DEFAULT_SETTLE_DURATION, DEFAULT_USE_VIEW_TRANSITION},
    single_line,
};
use crate::sse::{Event, EventBuildError};
use smol_str::SmolStr;
use std::time::Duration;

/// [`RemoveFragments`] sends a selector to the browser to remove HTML fragments from the DOM.
///
/// See the [Datastar documentation](https://data-star.dev/reference/sse_events#datastar-remove-fragments) for more information.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoveFragments {
    /// `selector` is a CSS selector that represents the fragments to be removed from the DOM.
    ///
    /// The selector must be a valid, non-empty, CSS selector.
    /// The Datastar client side will use this selector to remove the fragment from the DOM.
    pub selector: SmolStr,
    /// The amount of time that a fragment should take before removing any CSS related to settling.
    ///
    /// If not provided the Datastar client side will default to 300ms.
    pub settle_duration: Duration,
    /// Whether to use view transitions,
    ///
    /// if not provided the Datastar client side will default to `false`.
    pub use_view_transition: bool,
}

impl RemoveFragments {
    pub const TYPE: EventType = EventType::RemoveFragments;

    /// Create a new [`RemoveFragments`] data blob.
    ///
    /// Fails if the selector is empty.
    pub fn try_new(selector: impl Into<SmolStr>) -> Result<Self, EventBuildError> {
        let selector = selector.into();
        if selector.is_empty() {
            return Err(EventBuildError::missing_selector());
        }
        Ok(Self {
            selector,
            settle_duration: DEFAULT_SETTLE_DURATION,
            use_view_transition: DEFAULT_USE_VIEW_TRANSITION,
        })
    }

    crate::macros::generate_set_and_with! {
        /// Set the settle duration of the removal.
        ///
        /// Only whole milliseconds are written.
        pub fn settle_duration(mut self, duration: Duration) -> Self {
            self.settle_duration = duration;
            self
        }
    }

    crate::macros::generate_set_and_with! {
        /// Sets whether to use view transitions.
        pub fn use_view_transition(mut self, use_view_transition: bool) -> Self {
            self.use_view_transition = use_view_transition;
            self
        }
    }

    /// Consume `self` as an [`Event`].
    pub fn try_into_event(self) -> Result<Event, EventBuildError> {
        if self.selector.is_empty() {
            return Err(EventBuildError::missing_selector());
        }

        let mut payload = Payload::new();
        payload.push_option("selector", single_line("selector", &self.selector)?);

        if self.settle_duration.as_millis() != DEFAULT_SETTLE_DURATION.as_millis() {
            payload.push_option("settleDuration", self.settle_duration.as_millis());
        }

        if self.use_view_transition {
            payload.push_option("useViewTransition", true);
        }

        Ok(payload.into_event(Self::TYPE))
    }
}

impl TryFrom<RemoveFragments> for Event {
    type Error = EventBuildError;

    #[inline]
    fn try_from(value: RemoveFragments) -> Result<Self, Self::Error> {
        value.try_into_event()
    }
}
