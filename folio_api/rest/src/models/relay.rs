use serde::Serialize;

pub const RECEIVED_MESSAGE: &str = "Contact message received";

#[derive(Serialize)]
pub struct ApiRelaySuccess {
    pub success: bool,
    pub message: &'static str,
}

impl Default for ApiRelaySuccess {
    fn default() -> Self {
        Self {
            success: true,
            message: RECEIVED_MESSAGE,
        }
    }
}

#[derive(Serialize)]
pub struct ApiRelayError {
    pub error: String,
}
