use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use thiserror::Error;

use crate::config::SinkConfig;
use super::lead::Lead;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("lead sink is not configured")]
    NotConfigured,
    #[error("request failed: {0}")]
    Request(#[from] gloo_net::Error),
    #[error("insert rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Destination that accepts one lead per call.
///
/// Futures are not `Send`: everything runs on the browser's event loop.
pub trait LeadSink {
    fn insert(&self, lead: Lead) -> LocalBoxFuture<'static, Result<(), SinkError>>;
}

/// Inserts rows into a hosted PostgREST table.
#[derive(Clone, Debug, PartialEq)]
pub struct SupabaseSink {
    config: Option<SinkConfig>,
}

impl SupabaseSink {
    pub fn new(config: Option<SinkConfig>) -> Self {
        if config.is_none() {
            log::warn!("SUPABASE_URL / SUPABASE_ANON_KEY not set at build time; lead submissions will fail");
        }
        Self { config }
    }

    pub fn from_env() -> Self {
        Self::new(SinkConfig::from_env())
    }
}

impl LeadSink for SupabaseSink {
    fn insert(&self, lead: Lead) -> LocalBoxFuture<'static, Result<(), SinkError>> {
        let config = self.config.clone();
        async move {
            let config = config.ok_or(SinkError::NotConfigured)?;

            let response = Request::post(&config.insert_url())
                .header("apikey", &config.anon_key)
                .header("Authorization", &format!("Bearer {}", config.anon_key))
                .header("Prefer", "return=minimal")
                .json(&[lead])?
                .send()
                .await?;

            if response.ok() {
                return Ok(());
            }

            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(SinkError::Rejected { status, body })
        }
        .boxed_local()
    }
}
