/// Single send action
use axum::response::Response;
use dmrelay_core::{
    SingleSendMailRequest,
    constants::{DEFAULT_BODY, DEFAULT_SUBJECT, SENDER_ADDRESS_TYPE},
    utils::{redact_email, redact_subject},
};
use tracing::info;

use crate::{
    api::{QueryParams, success},
    context::ApiContext,
    error::ApiError,
};

/// Send parameters read from the query string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMailParams {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub body: String,
}

impl SendMailParams {
    /// Fails with [`ApiError::MissingParameters`] unless both `to` and `from` are present
    pub fn from_query(params: &QueryParams) -> Result<Self, ApiError> {
        let (Some(to), Some(from)) = (params.get("to"), params.get("from")) else {
            return Err(ApiError::MissingParameters);
        };

        Ok(Self {
            to: to.to_string(),
            from: from.to_string(),
            subject: params.get("subject").unwrap_or(DEFAULT_SUBJECT).to_string(),
            body: params.get("body").unwrap_or(DEFAULT_BODY).to_string(),
        })
    }

    pub fn into_request(self) -> SingleSendMailRequest {
        SingleSendMailRequest {
            account_name: self.from,
            address_type: SENDER_ADDRESS_TYPE,
            reply_to_address: true,
            to_address: self.to,
            subject: self.subject,
            html_body: render_html_body(&self.body),
        }
    }
}

/// Wraps the text in the fixed HTML template.
///
/// The text is inserted verbatim, without HTML escaping: markup in `body`
/// reaches the recipient as markup.
pub fn render_html_body(body: &str) -> String {
    format!("<html><body><p>{}</p></body></html>", body)
}

/// Validates the parameters, then issues one send call
pub async fn handle(ctx: &ApiContext, params: &QueryParams) -> Result<Response, ApiError> {
    let params = SendMailParams::from_query(params)?;

    info!(
        to = %redact_email(&params.to),
        from = %redact_email(&params.from),
        subject = %redact_subject(&params.subject),
        "Sending single mail"
    );

    let client = ctx.provider()?;
    let result = client.single_send_mail(params.into_request()).await?;

    info!(status = result.status_code, "Single mail accepted");

    success(result)
}
