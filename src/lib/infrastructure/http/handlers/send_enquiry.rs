//! Send enquiry handler

use anyhow::anyhow;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::{
    domain::enquiries::{Enquiry, EnquiryError, EnquiryService, RequiredField},
    infrastructure::http::{errors::ApiError, state::AppState},
};

/// Returned once the enquiry has been relayed
pub const SUCCESS_MESSAGE: &str = "Enquiry sent successfully";

/// Contact form submission
///
/// Fields stay untyped until the required ones have been checked in order.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct SendEnquiryBody {
    /// The customer's name
    #[schema(value_type = Option<String>, example = "Ravi Kumar")]
    pub name: Option<Value>,

    /// The customer's mobile number
    #[schema(value_type = Option<String>, example = "9876543210")]
    pub mobile: Option<Value>,

    /// The customer's email address
    #[schema(value_type = Option<String>, example = "ravi@example.com")]
    pub email: Option<Value>,

    /// Free text message, "No message provided" when left out
    #[schema(value_type = Option<String>, example = "Please share rates for 2x2 vitrified tiles")]
    pub message: Option<Value>,
}

impl TryFrom<SendEnquiryBody> for Enquiry {
    type Error = ApiError;

    fn try_from(body: SendEnquiryBody) -> Result<Self, Self::Error> {
        let required = [
            (&body.name, RequiredField::Name),
            (&body.mobile, RequiredField::Mobile),
            (&body.email, RequiredField::Email),
        ];

        for (value, field) in required {
            if value.as_ref().map_or(true, is_blank) {
                return Err(EnquiryError::MissingField(field).into());
            }
        }

        Ok(Enquiry::new(
            text(body.name, "name")?,
            text(body.mobile, "mobile")?,
            text(body.email, "email")?,
            text(body.message, "message")?,
        )?)
    }
}

/// `null`, `false`, zero and empty strings, arrays and objects count as missing.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn text(value: Option<Value>, key: &str) -> Result<Option<String>, ApiError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(anyhow!("field `{key}` must be a string, got {other}").into()),
    }
}

/// Send enquiry response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SendEnquiryResponse {
    /// Always `true`
    #[schema(example = true)]
    pub success: bool,

    /// Confirmation message
    #[schema(example = "Enquiry sent successfully")]
    pub message: String,
}

/// Relay a contact form enquiry to the shop mailbox
#[utoipa::path(
    post,
    operation_id = "send_enquiry",
    tag = "Enquiries",
    path = "/send-enquiry",
    request_body = SendEnquiryBody,
    responses(
        (status = 200, description = "Enquiry sent", body = SendEnquiryResponse),
        (status = 400, description = "A required field is missing", body = ErrorResponse, example = json!({"success": false, "message": "Name is required"})),
        (status = 500, description = "Delivery or server failure", body = ErrorResponse, example = json!({"success": false, "message": "Failed to send enquiry. Please try again."})),
    )
)]
pub async fn handler<E: EnquiryService>(
    State(state): State<AppState<E>>,
    request: Result<Json<SendEnquiryBody>, JsonRejection>,
) -> Result<Json<SendEnquiryResponse>, ApiError> {
    let Json(request) = request?;

    let enquiry: Enquiry = request.try_into()?;

    state.enquiries.send_enquiry(&enquiry).await?;

    Ok(Json(SendEnquiryResponse {
        success: true,
        message: SUCCESS_MESSAGE.to_string(),
    }))
}
