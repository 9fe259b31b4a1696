//! File exports.
//!
//! Every download is fetched as an opaque byte stream and handed to a
//! [`FileSaver`] under the name suggested by the server's
//! `content-disposition` header, falling back to `unknown`. The methods
//! return the name the file was saved under.

use serde::Serialize;
use tracing::{debug, instrument};

use openlaw_core::{ApiResponse, Endpoint, FileSaver, Params, Result, Transport};

use crate::ApiClient;

impl<T: Transport + 'static> ApiClient<T> {
    /// Render a contract document as DOCX and save it.
    #[instrument(skip(self, params, saver))]
    pub async fn download_as_docx<P: Serialize + ?Sized>(
        &self,
        params: &P,
        saver: &dyn FileSaver,
    ) -> Result<String> {
        let response = self
            .write(Endpoint::DownloadContractDocx, document_params(params)?)
            .await?;
        save_download(&response, saver).await
    }

    /// Render a contract document as PDF and save it.
    #[instrument(skip(self, params, saver))]
    pub async fn download_as_pdf<P: Serialize + ?Sized>(
        &self,
        params: &P,
        saver: &dyn FileSaver,
    ) -> Result<String> {
        let response = self
            .write(Endpoint::DownloadContractPdf, document_params(params)?)
            .await?;
        save_download(&response, saver).await
    }

    #[instrument(skip(self, saver))]
    pub async fn download_template_as_json(
        &self,
        title: &str,
        saver: &dyn FileSaver,
    ) -> Result<String> {
        let response = self
            .read(Endpoint::TemplateJson(title.to_string()), Params::new())
            .await?;
        save_download(&response, saver).await
    }

    #[instrument(skip(self, saver))]
    pub async fn download_contract_as_docx(
        &self,
        contract_id: &str,
        saver: &dyn FileSaver,
    ) -> Result<String> {
        let response = self
            .read(Endpoint::ContractDocx(contract_id.to_string()), Params::new())
            .await?;
        save_download(&response, saver).await
    }

    #[instrument(skip(self, saver))]
    pub async fn download_contract_as_pdf(
        &self,
        contract_id: &str,
        saver: &dyn FileSaver,
    ) -> Result<String> {
        let response = self
            .read(Endpoint::ContractPdf(contract_id.to_string()), Params::new())
            .await?;
        save_download(&response, saver).await
    }

    #[instrument(skip(self, saver))]
    pub async fn download_contract_as_json(
        &self,
        contract_id: &str,
        saver: &dyn FileSaver,
    ) -> Result<String> {
        let response = self
            .read(Endpoint::ContractJson(contract_id.to_string()), Params::new())
            .await?;
        save_download(&response, saver).await
    }
}

/// The document description travels JSON-encoded in the `data` form field.
fn document_params<P: Serialize + ?Sized>(params: &P) -> Result<Params> {
    Ok(Params::new().with("data", serde_json::to_string(params)?))
}

async fn save_download(response: &ApiResponse, saver: &dyn FileSaver) -> Result<String> {
    let name = response.suggested_filename();
    debug!(name = %name, size = response.bytes().len(), "Saving download");
    saver.save(response.bytes(), &name).await?;
    Ok(name)
}
