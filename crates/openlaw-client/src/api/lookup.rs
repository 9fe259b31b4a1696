//! Address lookup and activity feed.

use serde_json::Value;
use tracing::instrument;

use openlaw_core::{Endpoint, Params, Result, Transport};

use crate::ApiClient;

impl<T: Transport + 'static> ApiClient<T> {
    /// Suggest postal addresses matching a search term.
    #[instrument(skip(self))]
    pub async fn search_address(&self, term: &str) -> Result<Value> {
        self.read(Endpoint::SearchAddress, Params::new().with("term", term))
            .await?
            .json()
    }

    /// Resolve a suggested address to its full details.
    #[instrument(skip(self))]
    pub async fn get_address_details(&self, place_id: &str) -> Result<Value> {
        self.read(
            Endpoint::AddressDetails,
            Params::new().with("placeId", place_id),
        )
        .await?
        .json()
    }

    /// Fetch recent activity, filtered by kind (e.g. contracts or templates).
    #[instrument(skip(self))]
    pub async fn get_community_activity(
        &self,
        filter: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Value> {
        let params = Params::new()
            .with("filter", filter)
            .with("page", page)
            .with("pageSize", page_size);
        self.read(Endpoint::RecentActivity, params).await?.json()
    }
}
