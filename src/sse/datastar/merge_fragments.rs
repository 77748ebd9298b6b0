use super::{
    EventType, FragmentMergeMode, Payload,
    consts::{DEFAULT_FRAGMENT_MERGE_MODE, DEFAULT_SETTLE_DURATION, DEFAULT_USE_VIEW_TRANSITION},
    single_line,
};
use crate::sse::{Event, EventBuildError};
use smol_str::SmolStr;
use std::{borrow::Cow, time::Duration};

/// [`MergeFragments`] merges one or more fragments into the DOM.
///
/// By default, Datastar merges fragments using Idiomorph,
/// which matches top level elements based on their ID.
///
/// See the [Datastar documentation](https://data-star.dev/reference/sse_events#datastar-merge-fragments)
/// for more information.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MergeFragments {
    /// The HTML fragments to merge into the DOM.
    ///
    /// Every line is written as its own `fragments` line.
    /// Empty fragments are allowed, in which case no `fragments` line is written.
    pub fragments: Cow<'static, str>,
    /// The CSS selector used to insert the fragments.
    ///
    /// If not provided, Datastar will default to using the id attribute of the fragment.
    pub selector: Option<SmolStr>,
    /// The mode to use when merging the fragment into the DOM.
    ///
    /// If not provided the Datastar client side will default to [`FragmentMergeMode::Morph`].
    pub merge_mode: FragmentMergeMode,
    /// The amount of time that a fragment should take before removing any CSS related to settling.
    ///
    /// If not provided the Datastar client side will default to 300ms.
    pub settle_duration: Duration,
    /// Whether to use view transitions.
    ///
    /// If not provided the Datastar client side will default to `false`.
    pub use_view_transition: bool,
}

impl MergeFragments {
    pub const TYPE: EventType = EventType::MergeFragments;

    /// Create a new [`MergeFragments`] data blob.
    pub fn new(fragments: impl Into<Cow<'static, str>>) -> Self {
        Self {
            fragments: fragments.into(),
            selector: None,
            merge_mode: DEFAULT_FRAGMENT_MERGE_MODE,
            settle_duration: DEFAULT_SETTLE_DURATION,
            use_view_transition: DEFAULT_USE_VIEW_TRANSITION,
        }
    }

    crate::macros::generate_set_and_with! {
        /// Set the CSS selector used to insert the fragments.
        pub fn selector(mut self, selector: impl Into<SmolStr>) -> Self {
            self.selector = Some(selector.into());
            self
        }
    }

    crate::macros::generate_set_and_with! {
        /// Set mode to use when merging the fragment into the DOM.
        pub fn merge_mode(mut self, mode: FragmentMergeMode) -> Self {
            self.merge_mode = mode;
            self
        }
    }

    crate::macros::generate_set_and_with! {
        /// Set the settle duration of the merge.
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
    ///
    /// Fails only if the selector contains a line break.
    pub fn try_into_event(self) -> Result<Event, EventBuildError> {
        let mut payload = Payload::new();

        if let Some(selector) = self.selector.as_deref()
            && !selector.is_empty()
        {
            payload.push_option("selector", single_line("selector", selector)?);
        }

        if self.merge_mode != DEFAULT_FRAGMENT_MERGE_MODE {
            payload.push_option("mergeMode", self.merge_mode);
        }

        if self.settle_duration.as_millis() != DEFAULT_SETTLE_DURATION.as_millis() {
            payload.push_option("settleDuration", self.settle_duration.as_millis());
        }

        if self.use_view_transition {
            payload.push_option("useViewTransition", true);
        }

        payload.push_body("fragments", &self.fragments);

        Ok(payload.into_event(Self::TYPE))
    }
}

impl TryFrom<MergeFragments> for Event {
    type Error = EventBuildError;

    #[inline]
    fn try_from(value: MergeFragments) -> Result<Self, Self::Error> {
        value.try_into_event()
    }
}
