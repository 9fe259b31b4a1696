//! E-signature workflow and blockchain network settings.

use serde_json::Value;
use tracing::instrument;

use openlaw_core::{ApiResponse, Endpoint, Params, Result, Transport};

use crate::ApiClient;

impl<T: Transport + 'static> ApiClient<T> {
    /// Prepare the signature of a contract for the named signatory.
    #[instrument(skip(self, access_token))]
    pub async fn prepare_signature(
        &self,
        contract_id: &str,
        full_name: &str,
        access_token: Option<&str>,
    ) -> Result<ApiResponse> {
        let params = Params::new()
            .with("fullName", full_name)
            .with_opt("accessToken", access_token);
        self.read(Endpoint::PrepareSignature(contract_id.to_string()), params)
            .await
    }

    /// Sign a contract as the named signatory.
    #[instrument(skip(self, access_token))]
    pub async fn sign_contract(
        &self,
        contract_id: &str,
        full_name: &str,
        access_token: Option<&str>,
    ) -> Result<ApiResponse> {
        let params = Params::new()
            .with("fullName", full_name)
            .with_opt("accessToken", access_token);
        self.read(Endpoint::SignContract(contract_id.to_string()), params)
            .await
    }

    /// Load the signature status of a contract.
    #[instrument(skip(self, access_token))]
    pub async fn load_contract_status(
        &self,
        contract_id: &str,
        access_token: Option<&str>,
    ) -> Result<Value> {
        let params = Params::new()
            .with("id", contract_id)
            .with_opt("accessToken", access_token);
        self.read(Endpoint::ContractSignStatus, params).await?.json()
    }

    /// Report the transaction hash of an on-chain signature.
    #[instrument(skip(self, access_token))]
    pub async fn send_tx_hash(
        &self,
        contract_id: &str,
        network: &str,
        tx_hash: &str,
        access_token: Option<&str>,
    ) -> Result<ApiResponse> {
        let params = Params::new()
            .with("contractId", contract_id)
            .with("network", network)
            .with("txHash", tx_hash)
            .with_opt("accessToken", access_token);
        self.read(Endpoint::SendTxHash, params).await
    }

    /// Report the transaction hash of a smart contract call.
    #[instrument(skip(self))]
    pub async fn send_tx_hash_for_call(
        &self,
        contract_id: &str,
        user_account: &str,
        smart_contract_address: &str,
        network: &str,
        tx_hash: &str,
    ) -> Result<ApiResponse> {
        let params = Params::new()
            .with("contractId", contract_id)
            .with("userAccount", user_account)
            .with("smartContractAddress", smart_contract_address)
            .with("network", network)
            .with("txHash", tx_hash);
        self.read(Endpoint::SendCallTxHash, params).await
    }

    /// Submit EIP-712 signed data for a smart contract call.
    #[instrument(skip(self, signed_data))]
    pub async fn send_erc712_signature_for_call(
        &self,
        contract_id: &str,
        identifier: &str,
        user_account: &str,
        smart_contract_address: &str,
        signed_data: &str,
    ) -> Result<ApiResponse> {
        let params = Params::new()
            .with("contractId", contract_id)
            .with("userAccount", user_account)
            .with("smartContractAddress", smart_contract_address)
            .with("signedData", signed_data)
            .with("identifier", identifier);
        self.read(Endpoint::SendCallErc712, params).await
    }

    /// Switch the Ethereum network used by the server.
    #[instrument(skip(self))]
    pub async fn change_ethereum_network(&self, name: &str) -> Result<ApiResponse> {
        self.read(
            Endpoint::ChangeEthereumNetwork(name.to_string()),
            Params::new(),
        )
        .await
    }

    /// Returns the Ethereum network currently in use.
    #[instrument(skip(self))]
    pub async fn get_current_network(&self) -> Result<Value> {
        self.read(Endpoint::Network, Params::new()).await?.json()
    }
}
