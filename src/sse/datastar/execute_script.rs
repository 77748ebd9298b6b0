//! [`ExecuteScript`] and its script attributes.

use super::{
    EventType, Payload,
    consts::{DEFAULT_AUTO_REMOVE, DEFAULT_SCRIPT_ATTRIBUTE},
    single_line,
};
use crate::sse::{Event, EventBuildError};
use mime::Mime;
use smol_str::SmolStr;
use std::{borrow::Cow, convert::Infallible, fmt, str::FromStr};

/// [`ExecuteScript`] executes JavaScript in the browser
///
/// See the [Datastar documentation](https://data-star.dev/reference/sse_events#datastar-execute-script).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExecuteScript {
    /// `script` is a string that represents the JavaScript to be executed by the browser.
    ///
    /// Every line is written as its own `script` line.
    pub script: Cow<'static, str>,
    /// Whether to remove the script after execution.
    ///
    /// If not provided the Datastar client side will default to `true`.
    pub auto_remove: bool,
    /// A list of attributes to add to the script element.
    ///
    /// When empty a single `type module` attribute is written,
    /// as the Datastar client side expects at least one attribute.
    pub attributes: Vec<ScriptAttribute>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Valid attributes for scripts that can be attached to a [`ExecuteScript`].
///
/// Each attribute is written as `attributes <key> <value>`,
/// boolean attributes use `true` as their value.
pub enum ScriptAttribute {
    /// Any valid URL or relative path to a .js file.
    ///
    /// If omitted, the script content is inline.
    Src(String),
    /// Type of script.
    Type(ScriptType),
    /// Script is fetched and executed as soon as possible (non-blocking).
    Async,
    /// Script is fetched asynchronously but executed after HTML parsing completes.
    Defer,
    /// Used to deliver fallback scripts to older browsers.
    NoModule,
    /// A valid SRI hash.
    ///
    /// Cfr: <https://developer.mozilla.org/en-US/docs/Web/Security/Subresource_Integrity>
    Integrity(String),
    /// CORS request
    CrossOrigin(CrossOriginKind),
    /// Controls what Referer is sent when fetching the script.
    ReferrerPolicy(ReferrerPolicy),
    /// Largely ignored by modern browsers; use UTF-8 everywhere.
    Charset(SmolStr),
    /// Any other script attribute, a missing value marks a boolean attribute.
    Custom { key: SmolStr, value: Option<String> },
    /// A `key value` entry, written exactly as given.
    Raw(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
/// Possible values for [`ScriptAttribute::Type`].
pub enum ScriptType {
    #[default]
    /// ES Modules, enables top-level import/export.
    Module,
    /// Only for import maps (not script logic).
    ImportMap,
    /// [`mime::TEXT_JAVASCRIPT`] is the default for scripts,
    /// but [`ScriptType::Module`] is the default value in a datastar context.
    Mime(Mime),
}

crate::macros::enum_builder! {
    /// Possible values for [`ScriptAttribute::CrossOrigin`].
    pub enum CrossOriginKind {
        /// No credentials (cookies, headers).
        Anonymous => "anonymous",
        /// Include credentials.
        UseCredentials => "use-credentials",
    }
}

crate::macros::enum_builder! {
    /// Possible values for [`ScriptAttribute::ReferrerPolicy`].
    pub enum ReferrerPolicy {
        NoReferrer => "no-referrer",
        NoReferrerWhenDowngrade => "no-referrer-when-downgrade",
        Origin => "origin",
        OriginWhenCrossOrigin => "origin-when-cross-origin",
        SameOrigin => "same-origin",
        StrictOrigin => "strict-origin",
        StrictOriginWhenCrossOrigin => "strict-origin-when-cross-origin",
        UnsafeUrl => "unsafe-url",
    }
}

impl fmt::Display for ScriptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Module => f.write_str("module"),
            Self::ImportMap => f.write_str("importmap"),
            Self::Mime(mime) => fmt::Display::fmt(mime, f),
        }
    }
}

impl ScriptAttribute {
    /// Create a [`ScriptAttribute::Custom`] attribute.
    pub fn custom(key: impl Into<SmolStr>, value: Option<impl Into<String>>) -> Self {
        Self::Custom {
            key: key.into(),
            value: value.map(Into::into),
        }
    }
}

impl fmt::Display for ScriptAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Src(src) => write!(f, "src {src}"),
            Self::Type(script_type) => write!(f, "type {script_type}"),
            Self::Async => f.write_str("async true"),
            Self::Defer => f.write_str("defer true"),
            Self::NoModule => f.write_str("nomodule true"),
            Self::Integrity(integrity) => write!(f, "integrity {integrity}"),
            Self::CrossOrigin(kind) => write!(f, "crossorigin {kind}"),
            Self::ReferrerPolicy(policy) => write!(f, "referrerpolicy {policy}"),
            Self::Charset(charset) => write!(f, "charset {charset}"),
            Self::Custom { key, value } => match value {
                Some(value) => write!(f, "{key} {value}"),
                None => write!(f, "{key} true"),
            },
            Self::Raw(raw) => f.write_str(raw),
        }
    }
}

impl FromStr for ScriptAttribute {
    type Err = Infallible;

    /// Keep a `key value` entry as a [`ScriptAttribute::Raw`] attribute.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.into())
    }
}

impl From<&str> for ScriptAttribute {
    fn from(s: &str) -> Self {
        Self::Raw(s.to_owned())
    }
}

impl From<String> for ScriptAttribute {
    fn from(s: String) -> Self {
        Self::Raw(s)
    }
}

impl From<ScriptType> for ScriptAttribute {
    fn from(value: ScriptType) -> Self {
        Self::Type(value)
    }
}

impl ExecuteScript {
    pub const TYPE: EventType = EventType::ExecuteScript;

    /// Create a new [`ExecuteScript`] data blob.
    ///
    /// Fails if the script is empty.
    pub fn try_new(script: impl Into<Cow<'static, str>>) -> Result<Self, EventBuildError> {
        let script = script.into();
        if script.is_empty() {
            return Err(EventBuildError::missing_script());
        }
        Ok(Self {
            script,
            auto_remove: DEFAULT_AUTO_REMOVE,
            attributes: Vec::new(),
        })
    }

    crate::macros::generate_set_and_with! {
        /// Set whether to remove the script after execution.
        pub fn auto_remove(mut self, auto_remove: bool) -> Self {
            self.auto_remove = auto_remove;
            self
        }
    }

    crate::macros::generate_set_and_with! {
        /// Set a single attribute to add to the script element.
        ///
        /// This overwrites any previously added script attribute.
        pub fn attribute(mut self, attribute: impl Into<ScriptAttribute>) -> Self {
            self.attributes = vec![attribute.into()];
            self
        }
    }

    crate::macros::generate_set_and_with! {
        /// Set a list of attributes to add to the script element.
        ///
        /// An empty list behaves the same as never setting any attributes.
        pub fn attributes(
            mut self,
            attributes: impl IntoIterator<Item = impl Into<ScriptAttribute>>,
        ) -> Self {
            self.attributes = attributes.into_iter().map(Into::into).collect();
            self
        }
    }

    crate::macros::generate_set_and_with! {
        /// Add an additional attribute
        pub fn additional_attribute(mut self, attribute: impl Into<ScriptAttribute>) -> Self {
            self.attributes.push(attribute.into());
            self
        }
    }

    /// Consume `self` as an [`Event`].
    ///
    /// Fails if the script is empty or an attribute contains a line break.
    pub fn try_into_event(self) -> Result<Event, EventBuildError> {
        if self.script.is_empty() {
            return Err(EventBuildError::missing_script());
        }

        let mut payload = Payload::new();

        if self.auto_remove != DEFAULT_AUTO_REMOVE {
            payload.push_option("autoRemove", self.auto_remove);
        }

        if self.attributes.is_empty() {
            tracing::trace!(
                attribute = DEFAULT_SCRIPT_ATTRIBUTE,
                "ExecuteScript: no attributes set: write default attribute"
            );
            payload.push_option("attributes", DEFAULT_SCRIPT_ATTRIBUTE);
        } else {
            for attribute in &self.attributes {
                let attribute = attribute.to_string();
                payload.push_option("attributes", single_line("attributes", &attribute)?);
            }
        }

        payload.push_body("script", &self.script);

        Ok(payload.into_event(Self::TYPE))
    }
}

impl TryFrom<ExecuteScript> for Event {
    type Error = EventBuildError;

    #[inline]
    fn try_from(value: ExecuteScript) -> Result<Self, Self::Error> {
        value.try_into_event()
    }
}
