//! User administration.

use serde_json::Value;
use tracing::instrument;

use openlaw_core::{ApiResponse, Endpoint, Params, Result, Transport};

use crate::ApiClient;

use super::templates::search_params;

impl<T: Transport + 'static> ApiClient<T> {
    /// Search users by keyword.
    #[instrument(skip(self))]
    pub async fn search_users(&self, keyword: &str, page: u32, page_size: u32) -> Result<Value> {
        self.read(Endpoint::SearchUsers, search_params(keyword, page, page_size))
            .await?
            .json()
    }

    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: &str) -> Result<Value> {
        self.read(Endpoint::DeleteUser, Params::new().with("userId", user_id))
            .await?
            .json()
    }

    #[instrument(skip(self))]
    pub async fn to_admin_user(&self, user_id: &str) -> Result<ApiResponse> {
        self.read(Endpoint::ToAdminUser, Params::new().with("userId", user_id))
            .await
    }

    #[instrument(skip(self))]
    pub async fn to_restricted_user(&self, user_id: &str) -> Result<ApiResponse> {
        self.read(
            Endpoint::ToRestrictedUser,
            Params::new().with("userId", user_id),
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn to_standard_user(&self, user_id: &str) -> Result<ApiResponse> {
        self.read(Endpoint::ToStandardUser, Params::new().with("userId", user_id))
            .await
    }

    /// List the Stripe accounts linked to the current user.
    #[instrument(skip(self))]
    pub async fn get_stripe_accounts(&self) -> Result<Value> {
        self.read(Endpoint::StripeAccounts, Params::new())
            .await?
            .json()
    }
}
