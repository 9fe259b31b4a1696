//! The session-gated request pipeline.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::{Instrument, debug, info, info_span, instrument, trace};

use reqwest::header::{HeaderName, HeaderValue};

use openlaw_core::error::{InvalidInputError, ServerError, TransportError};
use openlaw_core::http::CONTENT_TYPE;
use openlaw_core::{
    ApiResponse, Call, CallKind, ClientConfig, Credentials, Endpoint, Error, Headers, Params,
    Result, SESSION_TOKEN_HEADER, SessionToken, Transport, TransportRequest,
};

use crate::gate::{LoginGate, LoginHandle, ReadyHandle};
use crate::transport::HttpTransport;

/// Content type of write calls that do not set one.
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A client for the OpenLaw API.
///
/// Cheap to clone: clones share the configuration, the session token and the
/// login gate.
///
/// # Request pipeline
///
/// Every call, whether issued through [`dispatch`](Self::dispatch) or one of
/// the endpoint methods:
///
/// 1. waits for the most recently started [`login`](Self::login) to settle,
///    successfully or not;
/// 2. sends the held session token in the `OPENLAW_JWT` header, plus the
///    configured basic auth;
/// 3. stores the token from the `OPENLAW_JWT` response header, if present,
///    replacing the previous one;
/// 4. surfaces the server's payload as [`Error::Server`] when a read call
///    fails with a body, and the raw [`Error::Transport`] otherwise.
pub struct ApiClient<T = HttpTransport> {
    inner: Arc<ClientInner<T>>,
}

impl<T> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct ClientInner<T> {
    transport: T,
    config: RwLock<ClientConfig>,
    token: RwLock<Option<SessionToken>>,
    gate: LoginGate,
}

impl ApiClient<HttpTransport> {
    /// Create a client using the default HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_transport(config, HttpTransport::new()?))
    }

    /// Create a client for a root URL, without basic auth.
    pub fn from_root(root: impl AsRef<str>) -> Result<Self> {
        Self::new(ClientConfig::from_root(root)?)
    }
}

impl<T: Transport + 'static> ApiClient<T> {
    /// Create a client over a custom transport.
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                transport,
                config: RwLock::new(config),
                token: RwLock::new(None),
                gate: LoginGate::new(),
            }),
        }
    }

    /// Seed the session token, e.g. from a persisted session.
    #[must_use]
    pub fn with_session_token(self, token: SessionToken) -> Self {
        self.inner.store_token(token);
        self
    }

    /// Returns a snapshot of the current configuration.
    pub fn config(&self) -> ClientConfig {
        self.inner
            .config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the configuration. Calls already dispatched are unaffected.
    pub fn reconfigure(&self, config: ClientConfig) {
        info!(root = %config.root, "Reconfiguring client");
        *self
            .inner
            .config
            .write()
            .unwrap_or_else(PoisonError::into_inner) = config;
    }

    /// Returns the session token currently held, if any.
    pub fn session_token(&self) -> Option<SessionToken> {
        self.inner
            .token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drop the held session token.
    pub fn clear_session_token(&self) {
        *self
            .inner
            .token
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Returns a handle on the most recently started login.
    ///
    /// The handle is already settled when no login was ever started.
    pub fn await_ready(&self) -> ReadyHandle {
        self.inner.gate.ready()
    }

    /// Start a login.
    ///
    /// The new login is tracked by the gate as soon as this returns, so any
    /// call made afterwards waits for it. A login issued while another is in
    /// flight waits for that one first: logins complete in call order and the
    /// last one started determines the session token.
    ///
    /// Must be called within a tokio runtime.
    #[instrument(skip(self, credentials), fields(user = %credentials.identifier()))]
    pub fn login(&self, credentials: Credentials) -> LoginHandle {
        info!("Starting login");

        let (previous, guard) = self.inner.gate.begin();
        let inner = Arc::clone(&self.inner);
        let call = Call::new(Endpoint::Login).with_params(
            Params::new()
                .with("userId", credentials.identifier())
                .with("password", credentials.password()),
        );

        let span = info_span!("login_request", user = %credentials.identifier());
        let task = tokio::spawn(
            async move {
                previous.await;
                let result = inner.send(call).await;
                match &result {
                    Ok(_) => debug!("Login succeeded"),
                    Err(e) => debug!(error = %e, "Login failed"),
                }
                drop(guard);
                result
            }
            .instrument(span),
        );

        LoginHandle::new(task)
    }

    /// Dispatch a call through the pipeline.
    #[instrument(skip(self, call), fields(endpoint = %call.endpoint()))]
    pub async fn dispatch(&self, call: Call) -> Result<ApiResponse> {
        let ready = self.await_ready();
        if !ready.is_settled() {
            debug!("Waiting for login to settle");
        }
        ready.await;

        self.inner.send(call).await
    }

    /// Dispatch a read call with the given query parameters.
    pub(crate) async fn read(&self, endpoint: Endpoint, params: Params) -> Result<ApiResponse> {
        debug_assert_eq!(endpoint.call_kind(), CallKind::Read);
        self.dispatch(Call::new(endpoint).with_params(params)).await
    }

    /// Dispatch a write call with the given form parameters.
    pub(crate) async fn write(&self, endpoint: Endpoint, params: Params) -> Result<ApiResponse> {
        debug_assert_eq!(endpoint.call_kind(), CallKind::Write);
        self.dispatch(Call::new(endpoint).with_params(params)).await
    }
}

impl<T: Transport> ClientInner<T> {
    /// Send a call without waiting on the gate.
    async fn send(&self, call: Call) -> Result<ApiResponse> {
        let call_kind = call.call_kind();
        let request = self.build_request(&call)?;

        debug!(
            method = call_kind.method(),
            url = %request.url,
            response_kind = ?request.response_kind,
            "Dispatching request"
        );
        trace!(params = ?call.params(), headers = ?request.headers, "request details");

        match self.transport.execute(request).await {
            Ok(response) => {
                trace!(status = response.status, "response");
                self.observe_token(&response.headers);
                Ok(response)
            }
            Err(err) => {
                if let Some(headers) = err.headers() {
                    self.observe_token(headers);
                }
                debug!(error = %err, "Request failed");
                Err(surface_error(call_kind, err))
            }
        }
    }

    fn build_request(&self, call: &Call) -> Result<TransportRequest> {
        let config = self
            .config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        let mut url = config.root.endpoint_url(call.endpoint())?;
        let mut headers = call.headers().clone();

        let body = match call.call_kind() {
            CallKind::Read => {
                call.params().append_to(&mut url);
                None
            }
            CallKind::Write => {
                if !headers.contains(CONTENT_TYPE) {
                    headers.insert(CONTENT_TYPE, FORM_CONTENT_TYPE);
                }
                Some(call.encoded_body())
            }
        };

        if let Some(token) = self.current_token() {
            headers.insert(SESSION_TOKEN_HEADER, token.as_str());
        }
        validate_headers(&headers)?;

        Ok(TransportRequest {
            call_kind: call.call_kind(),
            url,
            body,
            headers,
            basic_auth: config.auth,
            response_kind: call.response_kind(),
        })
    }

    /// The token to send: held and non-empty.
    fn current_token(&self) -> Option<SessionToken> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .filter(|token| !token.is_empty())
            .cloned()
    }

    fn observe_token(&self, headers: &Headers) {
        if let Some(value) = headers.get(SESSION_TOKEN_HEADER) {
            debug!("Session token refreshed");
            self.store_token(SessionToken::new(value));
        }
    }

    fn store_token(&self, token: SessionToken) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token);
    }
}

/// Rejects headers the transport could not put on the wire.
fn validate_headers(headers: &Headers) -> Result<()> {
    for (name, value) in headers.iter() {
        let invalid = |reason: String| InvalidInputError::Header {
            name: name.to_string(),
            reason,
        };
        HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(e.to_string()))?;
        HeaderValue::from_str(value).map_err(|e| invalid(e.to_string()))?;
    }
    Ok(())
}

/// Read failures carrying a server payload surface that payload; everything
/// else surfaces the raw transport error.
fn surface_error(call_kind: CallKind, err: TransportError) -> Error {
    match (call_kind, err) {
        (
            CallKind::Read,
            TransportError::Status {
                status,
                payload: Some(payload),
                ..
            },
        ) if !payload.is_empty() => ServerError::new(status, payload).into(),
        (_, err) => err.into(),
    }
}

impl<T> std::fmt::Debug for ApiClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let config = self
            .inner
            .config
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("ApiClient")
            .field("root", &config.root.as_str())
            .field("basic_auth", &config.auth.is_some())
            .field("token", &"[REDACTED]")
            .finish()
    }
}
