use serde::{Deserialize, Serialize};

use crate::model::message::Message;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Prior turns in conversation order. The newest user turn is carried in
    /// `message`, not appended here by the frontend.
    pub history: Vec<Message>,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}
