/// Outbound provider requests
use serde::{Deserialize, Serialize};

/// Account summary query (quota, usage, status). Takes no parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescAccountSummaryRequest {}

/// Single-recipient send command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleSendMailRequest {
    /// Sender account configured in the console
    pub account_name: String,
    /// 0 = random account, 1 = sender address
    pub address_type: u8,
    pub reply_to_address: bool,
    pub to_address: String,
    pub subject: String,
    pub html_body: String,
}

/// The two operations this service issues against the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "request")]
pub enum ProviderRequest {
    AccountSummary(DescAccountSummaryRequest),
    SingleSendMail(SingleSendMailRequest),
}

impl ProviderRequest {
    /// RPC action name
    pub fn action(&self) -> &'static str {
        match self {
            Self::AccountSummary(_) => "DescAccountSummary",
            Self::SingleSendMail(_) => "SingleSendMail",
        }
    }

    /// RPC parameters, excluding the action and version which travel as headers
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::AccountSummary(_) => Vec::new(),
            Self::SingleSendMail(req) => vec![
                ("AccountName", req.account_name.clone()),
                ("AddressType", req.address_type.to_string()),
                ("ReplyToAddress", req.reply_to_address.to_string()),
                ("ToAddress", req.to_address.clone()),
                ("Subject", req.subject.clone()),
                ("HtmlBody", req.html_body.clone()),
            ],
        }
    }
}

impl From<DescAccountSummaryRequest> for ProviderRequest {
    fn from(req: DescAccountSummaryRequest) -> Self {
        Self::AccountSummary(req)
    }
}

impl From<SingleSendMailRequest> for ProviderRequest {
    fn from(req: SingleSendMailRequest) -> Self {
        Self::SingleSendMail(req)
    }
}
