//! [🚀 Datastar](https://data-star.dev/) signals extractor.

use crate::{
    error::BoxError,
    sse::datastar::{
        Signals,
        consts::{DATASTAR_QUERY_PARAM, DATASTAR_REQUEST_HEADER},
    },
};
use http::{HeaderValue, Method, Request, Response, StatusCode, header};
use http_body::Body;
use http_body_util::BodyExt as _;
use serde::{Deserialize, de::DeserializeOwned};
use std::fmt;

/// [`ReadSignals`] reads the datastar signals sent by the client along with a request.
///
/// - `GET` requests carry the signals as URL-encoded JSON
///   in the `datastar` query parameter;
/// - requests with any other method carry them as the JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadSignals<T = Signals>(pub T);

#[derive(Deserialize)]
struct DatastarParam {
    datastar: Option<String>,
}

/// Error returned when [`ReadSignals`] cannot read the signals of a request.
///
/// Any such error is the fault of the client, see [`Self::status_code`].
#[derive(Debug)]
pub struct ReadSignalsError {
    kind: ReadSignalsErrorKind,
}

#[derive(Debug)]
enum ReadSignalsErrorKind {
    MissingQueryParam,
    InvalidQuery(BoxError),
    InvalidJson(serde_json::Error),
    Body(BoxError),
}

impl ReadSignalsError {
    fn missing_query_param() -> Self {
        Self {
            kind: ReadSignalsErrorKind::MissingQueryParam,
        }
    }

    fn invalid_query(err: impl Into<BoxError>) -> Self {
        Self {
            kind: ReadSignalsErrorKind::InvalidQuery(err.into()),
        }
    }

    fn invalid_json(err: serde_json::Error) -> Self {
        Self {
            kind: ReadSignalsErrorKind::InvalidJson(err),
        }
    }

    fn body(err: impl Into<BoxError>) -> Self {
        Self {
            kind: ReadSignalsErrorKind::Body(err.into()),
        }
    }

    /// Returns true if the `datastar` query parameter of a `GET` request was missing or empty.
    #[must_use]
    pub fn is_missing_query_param(&self) -> bool {
        matches!(self.kind, ReadSignalsErrorKind::MissingQueryParam)
    }

    /// Returns true if the signals were not valid JSON
    /// or did not match the expected signals type.
    #[must_use]
    pub fn is_invalid_json(&self) -> bool {
        matches!(self.kind, ReadSignalsErrorKind::InvalidJson(_))
    }

    /// Returns true if the request body could not be read.
    #[must_use]
    pub fn is_body(&self) -> bool {
        matches!(self.kind, ReadSignalsErrorKind::Body(_))
    }

    /// The status code to respond with: always `400 Bad Request`.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    /// Turn the error into a plain text `400 Bad Request` response.
    #[must_use]
    pub fn into_response(self) -> Response<String> {
        let mut response = Response::new(self.to_string());
        *response.status_mut() = self.status_code();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        );
        response
    }
}

impl fmt::Display for ReadSignalsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ReadSignalsErrorKind::MissingQueryParam => write!(
                f,
                "missing '{DATASTAR_QUERY_PARAM}' key in query parameters"
            ),
            ReadSignalsErrorKind::InvalidQuery(err) => {
                write!(f, "invalid query parameters in request: {err}")
            }
            ReadSignalsErrorKind::InvalidJson(err) => {
                write!(f, "invalid JSON data in request: {err}")
            }
            ReadSignalsErrorKind::Body(err) => write!(f, "failed to read request body: {err}"),
        }
    }
}

impl std::error::Error for ReadSignalsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ReadSignalsErrorKind::MissingQueryParam => None,
            ReadSignalsErrorKind::InvalidQuery(err) | ReadSignalsErrorKind::Body(err) => {
                Some(err.as_ref())
            }
            ReadSignalsErrorKind::InvalidJson(err) => Some(err),
        }
    }
}

impl<T: DeserializeOwned> ReadSignals<T> {
    /// Read the signals from the request.
    ///
    /// Consumes the request, as the body is read for any method but `GET`.
    pub async fn from_request<B>(req: Request<B>) -> Result<Self, ReadSignalsError>
    where
        B: Body,
        B::Error: Into<BoxError>,
    {
        let signals = match *req.method() {
            Method::GET => Self::from_query_str(req.uri().query().unwrap_or_default())?,
            _ => {
                let body = req
                    .into_body()
                    .collect()
                    .await
                    .map_err(|err| {
                        let err = ReadSignalsError::body(err);
                        tracing::debug!(%err, "failed to read datastar payload from request body");
                        err
                    })?
                    .to_bytes();
                Self::from_json_slice(&body)?
            }
        };

        Ok(signals)
    }

    /// Same as [`Self::from_request`], but returning `None`
    /// for requests which were not made by the datastar client,
    /// recognised by the absence of the `datastar-request` header.
    pub async fn from_optional_request<B>(req: Request<B>) -> Result<Option<Self>, ReadSignalsError>
    where
        B: Body,
        B::Error: Into<BoxError>,
    {
        if !req.headers().contains_key(DATASTAR_REQUEST_HEADER) {
            tracing::trace!(
                "no datastar request header present: returning no read signals as such"
            );
            return Ok(None);
        }
        Self::from_request(req).await.map(Some)
    }

    /// Read the signals from the `datastar` parameter of a raw query string.
    pub fn from_query_str(query: &str) -> Result<Self, ReadSignalsError> {
        let param: DatastarParam = serde_html_form::from_str(query).map_err(|err| {
            let err = ReadSignalsError::invalid_query(err);
            tracing::debug!(%err, "failed to parse query of datastar GET request");
            err
        })?;

        let signals = match param.datastar {
            Some(signals) if !signals.is_empty() => signals,
            Some(_) | None => {
                let err = ReadSignalsError::missing_query_param();
                tracing::debug!(%err, "failed to get datastar query value from GET request");
                return Err(err);
            }
        };

        Self::from_json_slice(signals.as_bytes())
    }

    /// Read the signals from raw JSON bytes.
    pub fn from_json_slice(json: &[u8]) -> Result<Self, ReadSignalsError> {
        serde_json::from_slice(json).map(Self).map_err(|err| {
            let err = ReadSignalsError::invalid_json(err);
            tracing::debug!(%err, "failed to parse datastar signals json");
            err
        })
    }
}

impl<T> ReadSignals<T> {
    /// Consume `self` and return the signals.
    pub fn into_inner(self) -> T {
        self.0
    }
}
