//! Protocol defaults.
//!
//! Options equal to their default are never written on the wire,
//! as the datastar client side assumes these same values.

use std::time::Duration;

use super::FragmentMergeMode;

/// Default client reconnection delay. The `retry` field is omitted for this value.
pub const DEFAULT_RETRY: Duration = Duration::from_millis(1000);

/// Default settle duration of fragment merges and removals.
pub const DEFAULT_SETTLE_DURATION: Duration = Duration::from_millis(300);

/// Default fragment merge mode.
pub const DEFAULT_FRAGMENT_MERGE_MODE: FragmentMergeMode = FragmentMergeMode::Morph;

/// Default for whether fragment updates use view transitions.
pub const DEFAULT_USE_VIEW_TRANSITION: bool = false;

/// Default for whether signals are only merged if missing.
pub const DEFAULT_ONLY_IF_MISSING: bool = false;

/// Default for whether an executed script is removed from the DOM afterwards.
pub const DEFAULT_AUTO_REMOVE: bool = true;

/// Script attribute written when no attributes are given.
pub const DEFAULT_SCRIPT_ATTRIBUTE: &str = "type module";

/// Query parameter carrying the signals of a `GET` request.
pub const DATASTAR_QUERY_PARAM: &str = "datastar";

/// Header set by the datastar client on every request it makes.
pub const DATASTAR_REQUEST_HEADER: &str = "datastar-request";
