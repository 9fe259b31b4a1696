//! The endpoint catalog.
//!
//! Every remote operation is an [`Endpoint`] variant. The variant fixes the
//! HTTP method ([`CallKind`]), the path, and whether the response body is a
//! file ([`ResponseKind::Bytes`]) or decoded text.

use std::fmt;

/// GET-style vs POST-style operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallKind {
    Read,
    Write,
}

impl CallKind {
    /// Returns the HTTP method name.
    pub fn method(&self) -> &'static str {
        match self {
            CallKind::Read => "GET",
            CallKind::Write => "POST",
        }
    }
}

/// How the transport should treat a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResponseKind {
    /// Decode the body as text (JSON payloads included).
    #[default]
    Decoded,
    /// Keep the body as an opaque byte stream.
    Bytes,
}

/// A remote API operation.
///
/// Variants carrying a `String` hold the trailing path segment (a contract,
/// flow or template identifier). Segments are percent-encoded when the URL is
/// built, so they may contain spaces or slashes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Login,

    // Uploads
    UploadContract,
    UploadFlow,
    UploadTemplate(String),
    DriveAuthPage(String),

    // Signature workflow
    PrepareSignature(String),
    SignContract(String),
    ContractSignStatus,
    ContractToken(String),
    FlowToken(String),
    UpdateFlowToken(String),
    StopContract(String),
    ResumeContract(String),
    SendContract,
    SendTxHash,
    SendCallTxHash,
    SendCallErc712,
    ContractAlias(String),

    // Network
    ChangeEthereumNetwork(String),
    Network,

    // Templates
    TemplateVersions,
    TemplateRaw(String),
    TemplateRawById(String),
    TemplateRawVersion { title: String, version: String },
    SearchTemplates,
    SearchDeletedTemplates,
    DeleteTemplate,
    RestoreTemplate,
    RenameTemplate,

    // Contracts and flows
    ContractRaw(String),
    FlowRaw(String),
    SearchContracts,

    // Users
    SearchUsers,
    DeleteUser,
    ToAdminUser,
    ToRestrictedUser,
    ToStandardUser,
    StripeAccounts,

    // Misc lookups
    SearchAddress,
    AddressDetails,
    RecentActivity,

    // File exports
    DownloadContractDocx,
    DownloadContractPdf,
    TemplateJson(String),
    ContractDocx(String),
    ContractPdf(String),
    ContractJson(String),
}

impl Endpoint {
    /// Returns whether this operation is a read (GET) or write (POST).
    pub fn call_kind(&self) -> CallKind {
        use Endpoint::*;
        match self {
            Login
            | UploadContract
            | UploadFlow
            | UploadTemplate(_)
            | UpdateFlowToken(_)
            | SendContract
            | DownloadContractDocx
            | DownloadContractPdf => CallKind::Write,
            _ => CallKind::Read,
        }
    }

    /// Returns how the response body of this operation must be handled.
    pub fn response_kind(&self) -> ResponseKind {
        use Endpoint::*;
        match self {
            DownloadContractDocx
            | DownloadContractPdf
            | TemplateJson(_)
            | ContractDocx(_)
            | ContractPdf(_)
            | ContractJson(_) => ResponseKind::Bytes,
            _ => ResponseKind::Decoded,
        }
    }

    /// Returns the unencoded path segments of this operation.
    pub fn path_segments(&self) -> Vec<&str> {
        use Endpoint::*;
        match self {
            Login => vec!["app", "login"],
            UploadContract => vec!["upload", "contract"],
            UploadFlow => vec!["upload", "flow"],
            UploadTemplate(title) => vec!["upload", "template", title.as_str()],
            DriveAuthPage(id) => vec!["driveAuthPage", id.as_str()],
            PrepareSignature(id) => vec!["prepareSignature", "contract", id.as_str()],
            SignContract(id) => vec!["sign", "contract", id.as_str()],
            ContractSignStatus => vec!["contract", "sign", "status"],
            ContractToken(id) => vec!["contract", "token", id.as_str()],
            FlowToken(id) => vec!["flow", "token", id.as_str()],
            UpdateFlowToken(id) => vec!["flow", "updateToken", id.as_str()],
            StopContract(id) => vec!["contract", "stop", id.as_str()],
            ResumeContract(id) => vec!["contract", "resume", id.as_str()],
            SendContract => vec!["send", "contract"],
            SendTxHash => vec!["contract", "signature", "sendTxHash"],
            SendCallTxHash => vec!["contract", "call", "sendTxHash"],
            SendCallErc712 => vec!["contract", "call", "erc712"],
            ContractAlias(id) => vec!["contract", "alias", id.as_str()],
            ChangeEthereumNetwork(name) => {
                vec!["ethereum", "changeEthereumNetwork", name.as_str()]
            }
            Network => vec!["network"],
            TemplateVersions => vec!["templates", "version"],
            TemplateRaw(title) => vec!["template", "raw", title.as_str()],
            TemplateRawById(id) => vec!["template", "id", "raw", id.as_str()],
            TemplateRawVersion { title, version } => {
                vec!["template", "raw", title.as_str(), version.as_str()]
            }
            SearchTemplates => vec!["templates", "search"],
            SearchDeletedTemplates => vec!["templates", "searchDeleted"],
            DeleteTemplate => vec!["templates", "delete"],
            RestoreTemplate => vec!["templates", "restore"],
            RenameTemplate => vec!["templates", "rename"],
            ContractRaw(id) => vec!["contract", "raw", id.as_str()],
            FlowRaw(id) => vec!["flow", "raw", id.as_str()],
            SearchContracts => vec!["contracts", "search"],
            SearchUsers => vec!["users", "search"],
            DeleteUser => vec!["users", "delete"],
            ToAdminUser => vec!["users", "toadmin"],
            ToRestrictedUser => vec!["users", "torestricted"],
            ToStandardUser => vec!["users", "touser"],
            StripeAccounts => vec!["user", "getStripeAccounts"],
            SearchAddress => vec!["address", "search"],
            AddressDetails => vec!["address", "details"],
            RecentActivity => vec!["recentActivity"],
            DownloadContractDocx => vec!["download", "contract", "docx"],
            DownloadContractPdf => vec!["download", "contract", "pdf"],
            TemplateJson(title) => vec!["templates", "json", title.as_str()],
            ContractDocx(id) => vec!["contract", "docx", id.as_str()],
            ContractPdf(id) => vec!["contract", "pdf", id.as_str()],
            ContractJson(id) => vec!["contract", "json", id.as_str()],
        }
    }

    /// Returns the unencoded path, e.g. `/contract/raw/abc`.
    pub fn path(&self) -> String {
        let mut path = String::new();
        for segment in self.path_segments() {
            path.push('/');
            path.push_str(segment);
        }
        path
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.call_kind().method(), self.path())
    }
}
