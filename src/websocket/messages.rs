//! WebSocket Message Types
//!
//! Defines all message types for WebSocket communication between the
//! dashboard page and the server.

use serde::{Deserialize, Serialize};

use crate::callbacks::{ChartUpdate, ControlState};
use crate::charts::ChartSpec;

/// Messages sent from client to server
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// A control changed value
    SetControl {
        /// Control identifier (e.g. "site-dropdown")
        control: String,
        /// New value: a site name / "ALL", or a `[min, max]` pair
        value: serde_json::Value,
    },
    /// Re-send every chart for the current state
    Refresh,
    /// Ping for keepalive
    Ping,
}

/// Messages sent from server to client
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Session established
    Connected {
        /// Unique session identifier
        session_id: String,
        /// Initial control values
        state: ControlState,
    },
    /// An output was recomputed
    ChartUpdate {
        /// Output identifier
        output: String,
        figure: ChartSpec,
    },
    /// Pong response to ping
    Pong,
    /// Error message
    Error {
        /// Error description
        message: String,
    },
}

impl From<ChartUpdate> for ServerMessage {
    fn from(update: ChartUpdate) -> Self {
        ServerMessage::ChartUpdate {
            output: update.id,
            figure: update.figure,
        }
    }
}
