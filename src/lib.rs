//! Datastar server-sent event encoding.
//!
//! [Datastar](https://data-star.dev/) drives a page from the server
//! by streaming server-sent events (SSE) with a small set of event types.
//! This crate turns typed descriptions of those events into the exact text
//! the datastar client expects on the wire:
//!
//! - [`sse::datastar`] holds one builder per event type,
//!   each producing an [`sse::Event`];
//! - [`sse::Event`] renders itself as a single SSE message,
//!   either through [`Display`](std::fmt::Display) or as [`Bytes`](bytes::Bytes);
//! - [`extract`] (`http` feature) reads the signals the client sends
//!   along with its requests.
//!
//! Transport is left to the caller: write the rendered messages to any
//! response body with the `text/event-stream` content type.
//!
//! ```
//! use datastar_sse::sse::datastar::{MergeSignals, Signals};
//! use serde_json::json;
//!
//! let mut signals = Signals::new();
//! signals.insert("count".to_owned(), json!(1));
//!
//! let event = MergeSignals::new(signals)
//!     .with_only_if_missing(true)
//!     .try_into_event()
//!     .unwrap()
//!     .try_with_id("1")
//!     .unwrap();
//!
//! assert_eq!(
//!     event.to_string(),
//!     "event: datastar-merge-signals\n\
//!      id: 1\n\
//!      data: onlyIfMissing true\n\
//!      data: signals {\"count\":1}\n\n",
//! );
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]
#![forbid(unsafe_code)]

mod macros;

pub mod error;
pub mod sse;

#[cfg(feature = "http")]
pub mod extract;
