//! SSE support
//!
//! An [`Event`] is a single server-sent event, rendered in the text format
//! defined by the [HTML Living Standard](https://html.spec.whatwg.org/multipage/server-sent-events.html).
//! Events are produced by the [`datastar`] builders.

mod event;
pub(crate) mod lines;

#[doc(inline)]
pub use event::{Event, EventBuildError};

pub mod datastar;
