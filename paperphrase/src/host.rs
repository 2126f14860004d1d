//! Hand-off to the host application.
//!
//! The phrase core never talks to the wallet stack directly. It serializes
//! a small tagged message and pushes it through an injected [`HostBridge`],
//! which stands in for whatever transport the embedding application uses
//! (a webview bridge in the reference host).

use serde::{Deserialize, Serialize};

/// Operation tag for a wallet-connection request.
pub const OP_CONNECT: &str = "connect";

/// Structured payload forwarded to the host application.
///
/// Field names follow the host's message schema:
/// `{"fn": "<operation>", "data": "<payload>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostMessage {
    /// Operation tag identifying the request.
    #[serde(rename = "fn")]
    pub op: String,
    /// Operation payload; for [`OP_CONNECT`], the space-joined phrase.
    pub data: String,
}

impl HostMessage {
    /// A connection request carrying the assembled phrase.
    pub fn connect(phrase: &str) -> Self {
        Self {
            op: OP_CONNECT.to_owned(),
            data: phrase.to_owned(),
        }
    }
}

/// The opaque channel into the host application.
///
/// Delivery is fire-and-forget: the phrase core does not observe whether
/// the host accepted or acted on the message.
pub trait HostBridge {
    /// Deliver a serialized message to the host.
    fn invoke(&mut self, payload: &str);
}
