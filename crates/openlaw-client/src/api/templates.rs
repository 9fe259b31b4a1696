//! Template operations.

use serde_json::Value;
use tracing::instrument;

use openlaw_core::{ApiResponse, Call, Endpoint, Params, Result, Template, Transport};

use crate::ApiClient;

use super::{TEXT_CONTENT_TYPE, string_data};

impl<T: Transport + 'static> ApiClient<T> {
    /// Save a new revision of a template from its source text.
    #[instrument(skip(self, source))]
    pub async fn save_template(&self, title: &str, source: &str) -> Result<ApiResponse> {
        let call = Call::new(Endpoint::UploadTemplate(title.to_string()))
            .with_body(source, TEXT_CONTENT_TYPE);
        self.dispatch(call).await
    }

    /// List the stored revisions of a template, newest first.
    #[instrument(skip(self))]
    pub async fn get_template_versions(
        &self,
        title: &str,
        page_size: u32,
        page: u32,
    ) -> Result<Vec<Template>> {
        let params = Params::new()
            .with("title", title)
            .with("pageSize", page_size)
            .with("page", page);
        self.read(Endpoint::TemplateVersions, params).await?.json()
    }

    /// Fetch the latest revision of a template by title.
    #[instrument(skip(self))]
    pub async fn get_template(&self, title: &str) -> Result<Value> {
        self.read(Endpoint::TemplateRaw(title.to_string()), Params::new())
            .await?
            .json()
    }

    /// Fetch a template revision by its identifier.
    #[instrument(skip(self))]
    pub async fn get_template_by_id(&self, id: &str) -> Result<Value> {
        self.read(Endpoint::TemplateRawById(id.to_string()), Params::new())
            .await?
            .json()
    }

    /// Fetch the source text of a specific template revision.
    #[instrument(skip(self))]
    pub async fn get_template_version(&self, title: &str, version: &str) -> Result<String> {
        let endpoint = Endpoint::TemplateRawVersion {
            title: title.to_string(),
            version: version.to_string(),
        };
        let response = self.read(endpoint, Params::new()).await?;
        string_data(&response)
    }

    /// Search templates by keyword.
    #[instrument(skip(self))]
    pub async fn template_search(&self, keyword: &str, page: u32, page_size: u32) -> Result<Value> {
        let params = search_params(keyword, page, page_size);
        self.read(Endpoint::SearchTemplates, params).await?.json()
    }

    /// Search deleted templates by keyword.
    #[instrument(skip(self))]
    pub async fn search_deleted_templates(
        &self,
        keyword: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Value> {
        let params = search_params(keyword, page, page_size);
        self.read(Endpoint::SearchDeletedTemplates, params)
            .await?
            .json()
    }

    #[instrument(skip(self))]
    pub async fn delete_template(&self, name: &str) -> Result<ApiResponse> {
        self.read(Endpoint::DeleteTemplate, Params::new().with("name", name))
            .await
    }

    #[instrument(skip(self))]
    pub async fn restore_template(&self, name: &str) -> Result<ApiResponse> {
        self.read(Endpoint::RestoreTemplate, Params::new().with("name", name))
            .await
    }

    #[instrument(skip(self))]
    pub async fn rename_template(&self, old_name: &str, new_name: &str) -> Result<ApiResponse> {
        let params = Params::new().with("name", old_name).with("newName", new_name);
        self.read(Endpoint::RenameTemplate, params).await
    }
}

pub(super) fn search_params(keyword: &str, page: u32, page_size: u32) -> Params {
    Params::new()
        .with("keyword", keyword)
        .with("page", page)
        .with("pageSize", page_size)
}
