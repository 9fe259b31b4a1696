//! Contract and flow operations.

use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use openlaw_core::{ApiResponse, Call, Endpoint, Params, Result, Transport};

use crate::ApiClient;

use super::templates::search_params;
use super::{TEXT_CONTENT_TYPE, string_data};

impl<T: Transport + 'static> ApiClient<T> {
    /// Upload a contract draft. Returns the contract identifier.
    #[instrument(skip(self, contract))]
    pub async fn upload_contract<P: Serialize + ?Sized>(&self, contract: &P) -> Result<String> {
        let call = Call::new(Endpoint::UploadContract)
            .with_body(serde_json::to_string(contract)?, TEXT_CONTENT_TYPE);
        let response = self.dispatch(call).await?;
        string_data(&response)
    }

    /// Upload a flow. Returns the flow identifier.
    #[instrument(skip(self, flow))]
    pub async fn upload_flow<P: Serialize + ?Sized>(&self, flow: &P) -> Result<String> {
        let call = Call::new(Endpoint::UploadFlow)
            .with_body(serde_json::to_string(flow)?, TEXT_CONTENT_TYPE);
        let response = self.dispatch(call).await?;
        string_data(&response)
    }

    /// Request the Google Drive authorization page for exporting a contract.
    #[instrument(skip(self))]
    pub async fn upload_contract_to_google(&self, contract_id: &str) -> Result<ApiResponse> {
        self.read(
            Endpoint::DriveAuthPage(contract_id.to_string()),
            Params::new(),
        )
        .await
    }

    /// Fetch a contract. The access token grants access to a shared contract.
    #[instrument(skip(self, access_token))]
    pub async fn get_contract(
        &self,
        contract_id: &str,
        access_token: Option<&str>,
    ) -> Result<Value> {
        let params = Params::new().with_opt("accessToken", access_token);
        self.read(Endpoint::ContractRaw(contract_id.to_string()), params)
            .await?
            .json()
    }

    /// Fetch a flow.
    #[instrument(skip(self, access_token))]
    pub async fn get_flow(&self, flow_id: &str, access_token: Option<&str>) -> Result<Value> {
        let params = Params::new().with_opt("accessToken", access_token);
        self.read(Endpoint::FlowRaw(flow_id.to_string()), params)
            .await?
            .json()
    }

    /// Search contracts by keyword.
    #[instrument(skip(self))]
    pub async fn search_contracts(
        &self,
        keyword: &str,
        page: u32,
        page_size: u32,
        sort_by: &str,
    ) -> Result<Value> {
        let params = search_params(keyword, page, page_size).with("sortBy", sort_by);
        self.read(Endpoint::SearchContracts, params).await?.json()
    }

    #[instrument(skip(self))]
    pub async fn change_contract_alias(
        &self,
        contract_id: &str,
        new_name: &str,
    ) -> Result<ApiResponse> {
        let params = Params::new()
            .with("contractId", contract_id)
            .with("newName", new_name);
        self.read(Endpoint::ContractAlias(contract_id.to_string()), params)
            .await
    }

    #[instrument(skip(self))]
    pub async fn stop_contract(&self, contract_id: &str) -> Result<ApiResponse> {
        self.read(Endpoint::StopContract(contract_id.to_string()), Params::new())
            .await
    }

    #[instrument(skip(self))]
    pub async fn resume_contract(&self, contract_id: &str) -> Result<ApiResponse> {
        self.read(Endpoint::ResumeContract(contract_id.to_string()), Params::new())
            .await
    }

    /// Share a contract: read-only with some addresses, editable by others.
    #[instrument(skip(self, readonly_emails, edit_emails))]
    pub async fn send_contract(
        &self,
        readonly_emails: &[String],
        edit_emails: &[String],
        contract_id: &str,
    ) -> Result<ApiResponse> {
        let params = Params::new()
            .with_all("readonlyEmails", readonly_emails)
            .with_all("editEmails", edit_emails)
            .with("id", contract_id);
        self.write(Endpoint::SendContract, params).await
    }

    /// Fetch the access token of a contract.
    #[instrument(skip(self))]
    pub async fn get_access_token(&self, contract_id: &str) -> Result<ApiResponse> {
        self.read(Endpoint::ContractToken(contract_id.to_string()), Params::new())
            .await
    }

    /// Fetch the access token of a flow.
    #[instrument(skip(self))]
    pub async fn get_flow_access_token(&self, flow_id: &str) -> Result<String> {
        let response = self
            .read(Endpoint::FlowToken(flow_id.to_string()), Params::new())
            .await?;
        string_data(&response)
    }

    /// Issue a new access token for a flow, invalidating the previous one.
    #[instrument(skip(self))]
    pub async fn generate_flow_access_token(&self, flow_id: &str) -> Result<String> {
        let response = self
            .write(Endpoint::UpdateFlowToken(flow_id.to_string()), Params::new())
            .await?;
        string_data(&response)
    }
}
