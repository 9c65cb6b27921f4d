use std::collections::BTreeSet;

use anyhow::Result;
use async_trait::async_trait;

use crate::client::Client;
use crate::types::JobResult;

/// The slice of the search platform the harness drives. `Client` is the real
/// implementation; tests substitute a scripted stub.
#[async_trait]
pub trait Platform: Send + Sync {
    async fn submit_event_data(
        &self,
        index: &str,
        data: Vec<u8>,
        sourcetype: &str,
        source: &str,
        host: &str,
    ) -> Result<()>;

    async fn run_search(
        &self,
        search: &str,
        pass_condition: &str,
        earliest_time: &str,
        latest_time: &str,
    ) -> Result<JobResult>;

    async fn wait_for_indexing_to_complete(&self, sourcetype: &str, index: &str) -> Result<bool>;

    async fn delete_attack_data(&self, indices: &BTreeSet<String>) -> Result<()>;
}

#[async_trait]
impl Platform for Client {
    async fn submit_event_data(
        &self,
        index: &str,
        data: Vec<u8>,
        sourcetype: &str,
        source: &str,
        host: &str,
    ) -> Result<()> {
        Client::submit_event_data(self, index, data, sourcetype, source, host).await
    }

    async fn run_search(
        &self,
        search: &str,
        pass_condition: &str,
        earliest_time: &str,
        latest_time: &str,
    ) -> Result<JobResult> {
        Ok(Client::run_search(self, search, pass_condition, earliest_time, latest_time).await)
    }

    async fn wait_for_indexing_to_complete(&self, sourcetype: &str, index: &str) -> Result<bool> {
        Client::wait_for_indexing_to_complete(self, sourcetype, index).await
    }

    async fn delete_attack_data(&self, indices: &BTreeSet<String>) -> Result<()> {
        Client::delete_attack_data(self, indices).await
    }
}
