//! WebSocket Handler
//!
//! Handles WebSocket upgrade requests and runs one reactive session per
//! connection. The session owns its control state; each `set_control`
//! message applies one change and recomputes the charts that read it.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

use super::messages::{ClientMessage, ServerMessage};
use crate::api::AppState;
use crate::callbacks::ControlState;

/// WebSocket upgrade handler
///
/// This is the entry point for WebSocket connections.
/// It upgrades the HTTP connection to WebSocket and starts message handling.
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Control state of one connected page
#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub controls: ControlState,
}

impl Session {
    pub fn new(state: &AppState) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            controls: state.initial_controls(),
        }
    }

    /// Greeting plus every chart for the initial control values
    pub fn open(&self, state: &AppState) -> Vec<ServerMessage> {
        let mut messages = vec![ServerMessage::Connected {
            session_id: self.id.clone(),
            state: self.controls.clone(),
        }];
        messages.extend(
            state
                .callbacks
                .render_all(&state.dataset, &self.controls)
                .into_iter()
                .map(ServerMessage::from),
        );
        messages
    }

    /// Handle one client message, returning the replies in order
    pub fn handle(&mut self, state: &AppState, message: ClientMessage) -> Vec<ServerMessage> {
        match message {
            ClientMessage::SetControl { control, value } => {
                if let Err(e) = self.controls.apply(&control, value) {
                    tracing::debug!(session_id = %self.id, error = %e, "Rejected control change");
                    return vec![ServerMessage::Error {
                        message: e.to_string(),
                    }];
                }

                match state
                    .callbacks
                    .dispatch(&control, &state.dataset, &self.controls)
                {
                    Ok(updates) => updates.into_iter().map(ServerMessage::from).collect(),
                    Err(e) => vec![ServerMessage::Error {
                        message: e.to_string(),
                    }],
                }
            }
            ClientMessage::Refresh => state
                .callbacks
                .render_all(&state.dataset, &self.controls)
                .into_iter()
                .map(ServerMessage::from)
                .collect(),
            ClientMessage::Ping => vec![ServerMessage::Pong],
        }
    }
}

/// Handle an established WebSocket connection
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let _guard = state.track_session();
    let (mut sender, mut receiver) = socket.split();

    // Create channel for sending messages to this connection
    let (tx, mut rx) = mpsc::unbounded_channel::<ServerMessage>();

    let mut session = Session::new(&state);
    let session_id = session.id.clone();
    tracing::info!(session_id = %session_id, "Dashboard session opened");

    for msg in session.open(&state) {
        let _ = tx.send(msg);
    }

    let conn_id_for_send = session_id.clone();

    // Task to forward messages from channel to WebSocket
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            match serde_json::to_string(&msg) {
                Ok(text) => {
                    if sender.send(Message::Text(text)).await.is_err() {
                        tracing::debug!(
                            session_id = %conn_id_for_send,
                            "WebSocket send failed, closing connection"
                        );
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to serialize message");
                }
            }
        }
    });

    let state_for_recv = Arc::clone(&state);

    // Task to receive messages from WebSocket and handle them
    let mut recv_task = tokio::spawn(async move {
        while let Some(result) = receiver.next().await {
            match result {
                Ok(msg) => {
                    if !handle_ws_message(&state_for_recv, &mut session, &tx, msg) {
                        break;
                    }
                }
                Err(e) => {
                    tracing::debug!(
                        session_id = %session.id,
                        error = %e,
                        "WebSocket receive error"
                    );
                    break;
                }
            }
        }
    });

    // Wait for either task to complete
    tokio::select! {
        _ = &mut send_task => {
            recv_task.abort();
        }
        _ = &mut recv_task => {
            send_task.abort();
        }
    }

    tracing::info!(session_id = %session_id, "Dashboard session closed");
}

/// Handle a received WebSocket message
///
/// Returns false if the connection should be closed.
fn handle_ws_message(
    state: &AppState,
    session: &mut Session,
    tx: &mpsc::UnboundedSender<ServerMessage>,
    message: Message,
) -> bool {
    let replies = match message {
        Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
            Ok(client_msg) => session.handle(state, client_msg),
            Err(e) => {
                tracing::debug!(
                    session_id = %session.id,
                    error = %e,
                    text = %text,
                    "Invalid client message"
                );
                // Send error but keep connection open
                vec![ServerMessage::Error {
                    message: format!("Invalid message format: {}", e),
                }]
            }
        },
        Message::Binary(_) => vec![ServerMessage::Error {
            message: "Binary messages not supported".to_string(),
        }],
        // Axum answers pings itself
        Message::Ping(_) | Message::Pong(_) => Vec::new(),
        Message::Close(_) => {
            tracing::debug!(session_id = %session.id, "Client requested close");
            return false;
        }
    };

    for reply in replies {
        if tx.send(reply).is_err() {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callbacks::{SCATTER_CHART, SUCCESS_PIE_CHART};
    use crate::config::DashboardConfig;
    use crate::dataset::{Dataset, LaunchRecord, PayloadRange, SiteFilter};
    use serde_json::json;

    fn app_state() -> AppState {
        let dataset = Dataset::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 0.0, "v1.0", 0),
            LaunchRecord::new("CCAFS LC-40", 525.0, "v1.0", 1),
            LaunchRecord::new("KSC LC-39A", 4000.0, "FT", 1),
            LaunchRecord::new("KSC LC-39A", 9600.0, "B5", 0),
        ])
        .unwrap();
        AppState::new(dataset, &DashboardConfig::default())
    }

    fn outputs(messages: &[ServerMessage]) -> Vec<&str> {
        messages
            .iter()
            .filter_map(|m| match m {
                ServerMessage::ChartUpdate { output, .. } => Some(output.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_open_sends_state_and_all_charts() {
        let state = app_state();
        let session = Session::new(&state);
        let messages = session.open(&state);

        match &messages[0] {
            ServerMessage::Connected { state: controls, .. } => {
                assert_eq!(controls.site, SiteFilter::All);
                assert_eq!(controls.payload, PayloadRange::new(0.0, 9600.0));
            }
            other => panic!("Expected Connected, got {other:?}"),
        }
        assert_eq!(outputs(&messages), vec![SUCCESS_PIE_CHART, SCATTER_CHART]);
    }

    #[test]
    fn test_slider_change_updates_scatter_only() {
        let state = app_state();
        let mut session = Session::new(&state);

        let replies = session.handle(
            &state,
            ClientMessage::SetControl {
                control: "payload-slider".to_string(),
                value: json!([100, 5000]),
            },
        );

        assert_eq!(outputs(&replies), vec![SCATTER_CHART]);
        assert_eq!(session.controls.payload, PayloadRange::new(100.0, 5000.0));
        match &replies[0] {
            ServerMessage::ChartUpdate { figure, .. } => {
                assert_eq!(figure.as_scatter().unwrap().points.len(), 2);
            }
            other => panic!("Expected ChartUpdate, got {other:?}"),
        }
    }

    #[test]
    fn test_site_change_keeps_slider_state() {
        let state = app_state();
        let mut session = Session::new(&state);

        session.handle(
            &state,
            ClientMessage::SetControl {
                control: "payload-slider".to_string(),
                value: json!([100, 5000]),
            },
        );
        let replies = session.handle(
            &state,
            ClientMessage::SetControl {
                control: "site-dropdown".to_string(),
                value: json!("KSC LC-39A"),
            },
        );

        assert_eq!(outputs(&replies), vec![SUCCESS_PIE_CHART, SCATTER_CHART]);
        match &replies[1] {
            ServerMessage::ChartUpdate { figure, .. } => {
                let scatter = figure.as_scatter().unwrap();
                assert_eq!(scatter.points.len(), 1);
                assert_eq!(scatter.points[0].x, 4000.0);
            }
            other => panic!("Expected ChartUpdate, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_control_returns_error_and_keeps_state() {
        let state = app_state();
        let mut session = Session::new(&state);
        let before = session.controls.clone();

        let replies = session.handle(
            &state,
            ClientMessage::SetControl {
                control: "launch-year".to_string(),
                value: json!(2017),
            },
        );

        assert!(matches!(replies.as_slice(), [ServerMessage::Error { .. }]));
        assert_eq!(session.controls, before);
    }

    #[test]
    fn test_ping_and_refresh() {
        let state = app_state();
        let mut session = Session::new(&state);

        assert!(matches!(
            session.handle(&state, ClientMessage::Ping).as_slice(),
            [ServerMessage::Pong]
        ));
        assert_eq!(
            outputs(&session.handle(&state, ClientMessage::Refresh)),
            vec![SUCCESS_PIE_CHART, SCATTER_CHART]
        );
    }

    #[test]
    fn test_invalid_text_keeps_connection_open() {
        let state = app_state();
        let mut session = Session::new(&state);
        let (tx, mut rx) = mpsc::unbounded_channel();

        assert!(handle_ws_message(
            &state,
            &mut session,
            &tx,
            Message::Text("not json".to_string())
        ));
        assert!(matches!(rx.try_recv(), Ok(ServerMessage::Error { .. })));

        assert!(!handle_ws_message(&state, &mut session, &tx, Message::Close(None)));
    }
}
