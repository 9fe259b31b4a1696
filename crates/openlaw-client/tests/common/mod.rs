//! Shared fixtures for the pipeline tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use openlaw_client::ApiClient;
use openlaw_core::error::TransportError;
use openlaw_core::{
    ApiResponse, ClientConfig, FileSaver, Headers, ResponseBody, Result, Transport,
    TransportRequest,
};

pub const ROOT: &str = "https://lib.openlaw.test";

type Reply = std::result::Result<ApiResponse, TransportError>;
type Responder = Box<dyn Fn(&TransportRequest) -> Reply + Send + Sync>;

/// A transport that records every request and answers from a closure.
///
/// Login requests can be held until [`FakeTransport::release_login`] is
/// called, to observe the gate while a login is in flight.
pub struct FakeTransport {
    requests: Mutex<Vec<TransportRequest>>,
    responder: Responder,
    login_hold: Option<Notify>,
}

impl FakeTransport {
    pub fn new<F>(responder: F) -> Arc<Self>
    where
        F: Fn(&TransportRequest) -> Reply + Send + Sync + 'static,
    {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            responder: Box::new(responder),
            login_hold: None,
        })
    }

    /// Like [`new`](Self::new), but each login waits for a release.
    pub fn holding_logins<F>(responder: F) -> Arc<Self>
    where
        F: Fn(&TransportRequest) -> Reply + Send + Sync + 'static,
    {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            responder: Box::new(responder),
            login_hold: Some(Notify::new()),
        })
    }

    /// Let one held login proceed.
    pub fn release_login(&self) {
        if let Some(hold) = &self.login_hold {
            hold.notify_one();
        }
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|r| r.url.path().to_string())
            .collect()
    }

    pub fn last(&self) -> TransportRequest {
        self.requests().pop().expect("no request recorded")
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn execute(
        &self,
        request: TransportRequest,
    ) -> std::result::Result<ApiResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        if request.url.path() == "/app/login" {
            if let Some(hold) = &self.login_hold {
                hold.notified().await;
            }
        }
        (self.responder)(&request)
    }
}

pub fn client(transport: &Arc<FakeTransport>) -> ApiClient<Arc<FakeTransport>> {
    ApiClient::with_transport(ClientConfig::from_root(ROOT).unwrap(), Arc::clone(transport))
}

/// Let spawned tasks run until they block.
pub async fn settle() {
    for _ in 0..20 {
        tokio::task::yield_now().await;
    }
}

pub fn ok(body: &str) -> Reply {
    Ok(ApiResponse {
        status: 200,
        headers: Headers::new(),
        body: ResponseBody::Text(body.to_string()),
    })
}

pub fn ok_with_token(body: &str, token: &str) -> Reply {
    Ok(ApiResponse {
        status: 200,
        headers: [("OPENLAW_JWT", token)].into_iter().collect(),
        body: ResponseBody::Text(body.to_string()),
    })
}

pub fn file(bytes: &[u8], disposition: Option<&str>) -> Reply {
    let mut headers = Headers::new();
    if let Some(disposition) = disposition {
        headers.insert("Content-Disposition", disposition);
    }
    Ok(ApiResponse {
        status: 200,
        headers,
        body: ResponseBody::Bytes(bytes.to_vec()),
    })
}

pub fn failure(status: u16, body: &str) -> Reply {
    Err(TransportError::Status {
        status,
        headers: Headers::new(),
        payload: (!body.is_empty()).then(|| ResponseBody::Text(body.to_string())),
    })
}

/// A download sink that keeps saved files in memory.
#[derive(Default)]
pub struct MemorySaver {
    pub saved: Mutex<Vec<(String, Vec<u8>)>>,
}

#[async_trait]
impl FileSaver for MemorySaver {
    async fn save(&self, bytes: &[u8], suggested_name: &str) -> Result<()> {
        self.saved
            .lock()
            .unwrap()
            .push((suggested_name.to_string(), bytes.to_vec()));
        Ok(())
    }
}
