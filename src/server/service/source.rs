//! Upstream contract source.
//!
//! The upstream serves one JSON array of contract records per system at
//! `{base_url}/contracts/{system}`. Each element is decoded on its own so that a single bad
//! record is skipped instead of failing the whole system.

use std::{future::Future, time::Duration};

use dioxus_logger::tracing;
use reqwest::{Client, Url};
use serde_json::Value;

use crate::{
    model::{contract::ContractRecord, error::ContractError},
    server::error::{upstream::UpstreamError, Error},
};

/// Contract records fetched for one system.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractBatch {
    /// Records that decoded successfully, in upstream order.
    pub records: Vec<ContractRecord>,
    /// Elements of the upstream array that could not be decoded.
    pub skipped: Vec<ContractError>,
}

/// Source of contract records for a system.
pub trait ContractSource {
    /// Fetches every contract currently listed for `system`.
    fn fetch_system_contracts(
        &self,
        system: &str,
    ) -> impl Future<Output = Result<ContractBatch, Error>> + Send;
}

/// [`ContractSource`] backed by the upstream contract HTTP API.
#[derive(Debug, Clone)]
pub struct HttpContractSource {
    client: Client,
    base_url: Url,
}

impl HttpContractSource {
    /// Creates a new instance of [`HttpContractSource`]
    ///
    /// # Arguments
    /// - `base_url` - Base URL of the upstream API
    /// - `timeout` - Timeout applied to every request
    /// - `user_agent` - User agent sent with every request
    ///
    /// # Returns
    /// - `Ok(HttpContractSource)` - Source ready to fetch contracts
    /// - `Err(Error::UpstreamError)` - The base URL cannot be parsed or cannot carry a path
    /// - `Err(Error::ReqwestError)` - The HTTP client could not be built
    pub fn new(base_url: &str, timeout: Duration, user_agent: &str) -> Result<Self, Error> {
        let parsed = Url::parse(base_url).map_err(|e| UpstreamError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        if parsed.cannot_be_a_base() {
            return Err(UpstreamError::InvalidUrl {
                url: base_url.to_string(),
                reason: "URL cannot carry a path".to_string(),
            }
            .into());
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// URL listing the contracts of `system`, with the system name percent-encoded.
    pub fn system_url(&self, system: &str) -> Url {
        let mut url = self.base_url.clone();

        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("contracts").push(system);
        }

        url
    }
}

impl ContractSource for HttpContractSource {
    async fn fetch_system_contracts(&self, system: &str) -> Result<ContractBatch, Error> {
        let url = self.system_url(system);
        tracing::debug!("Fetching contracts for system {} from {}", system, url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(UpstreamError::UnexpectedStatus {
                system: system.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        let values: Vec<Value> = response
            .json()
            .await
            .map_err(|e| UpstreamError::InvalidBody {
                system: system.to_string(),
                reason: e.to_string(),
            })?;

        Ok(decode_contracts(values))
    }
}

/// Decodes each element of an upstream array, skipping elements that are not contract records.
pub fn decode_contracts(values: Vec<Value>) -> ContractBatch {
    let mut batch = ContractBatch::default();

    for (index, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<ContractRecord>(value) {
            Ok(record) => batch.records.push(record),
            Err(e) => {
                let err = ContractError::MalformedContractRecord {
                    index,
                    reason: e.to_string(),
                };
                tracing::warn!("{}", err);

                batch.skipped.push(err);
            }
        }
    }

    batch
}
