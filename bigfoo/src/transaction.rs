//! The single request issued by every simulated user
use crate::constants::{BIGFOO_HEADERS, BIGFOO_PATH, TRANSACTION_NAME};
use crate::payload::Payload;
use goose::prelude::*;
use std::sync::Arc;
#[allow(unused_imports)]
use tracing::{debug, error, info, trace, warn};

/// A fixed POST request: same path, same headers and same body on every send.
#[derive(Debug)]
pub struct BigfooRequest {
    path: &'static str,
    headers: &'static [(&'static str, &'static str)],
    payload: Payload,
}

impl BigfooRequest {
    pub fn new(payload: Payload) -> Self {
        Self {
            path: BIGFOO_PATH,
            headers: &BIGFOO_HEADERS,
            payload,
        }
    }

    pub fn path(&self) -> &str {
        self.path
    }

    pub fn headers(&self) -> &[(&'static str, &'static str)] {
        self.headers
    }

    pub fn body(&self) -> &[u8] {
        self.payload.as_bytes()
    }

    /// Issue exactly one POST through goose.
    ///
    /// The response is neither inspected nor retried; goose records the outcome itself.
    pub async fn send(&self, user: &mut GooseUser) -> TransactionResult {
        let mut request_builder = user.get_request_builder(&GooseMethod::Post, self.path)?;
        for (name, value) in self.headers {
            request_builder = request_builder.header(*name, *value);
        }
        let request_builder = request_builder.body(self.payload.bytes());

        let goose_request = GooseRequest::builder()
            .method(GooseMethod::Post)
            .path(self.path)
            .set_request_builder(request_builder)
            .build();

        trace!("POST {} ({} bytes)", self.path, self.payload.len());
        let _goose = user.request(goose_request).await?;

        Ok(())
    }
}

/// Wrap [`BigfooRequest::send`] as a goose transaction.
pub fn bigfoo_transaction(request: Arc<BigfooRequest>) -> Transaction {
    let closure: TransactionFunction = Arc::new(move |user| {
        let request = request.clone();
        Box::pin(async move { request.send(user).await })
    });

    Transaction::new(closure).set_name(TRANSACTION_NAME)
}
