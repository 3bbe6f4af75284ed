//! WebSocket module for live dashboard updates
//!
//! Pushes the dashboard view to connected clients whenever its revision
//! changes, so the screen follows simulated ticks and selections.

use actix::{Actor, ActorContext, ActorFutureExt, AsyncContext, StreamHandler};
use actix_web_actors::ws;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::state::{DashboardState, SharedDashboard};
use crate::view::DashboardView;

/// How often heartbeat pings are sent
const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(5);

/// How long before lack of client response causes a timeout
const CLIENT_TIMEOUT: Duration = Duration::from_secs(30);

/// How often the dashboard revision is checked
const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Messages pushed to the client
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum WsMessage {
    /// Dashboard changed since the last push
    DashboardUpdate(Box<DashboardView>),
    /// Connection acknowledgment
    Connected { client_id: String },
    /// Error message
    Error { message: String },
    /// Heartbeat/pong response
    Pong,
}

/// Messages accepted from the client
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum ClientMessage {
    /// Heartbeat/ping
    Ping,
}

/// WebSocket session actor
pub struct WsSession {
    client_id: String,
    last_heartbeat: Instant,
    state: SharedDashboard,
    last_revision: Option<u64>,
}

impl WsSession {
    pub fn new(client_id: String, state: SharedDashboard) -> Self {
        Self {
            client_id,
            last_heartbeat: Instant::now(),
            state,
            last_revision: None,
        }
    }

    /// View to push, or `None` when the client already has this revision
    fn pending_view(last_revision: Option<u64>, state: &DashboardState) -> Option<DashboardView> {
        if last_revision == Some(state.revision()) {
            None
        } else {
            Some(DashboardView::from(state))
        }
    }

    fn start_heartbeat(&self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(HEARTBEAT_INTERVAL, |act, ctx| {
            if Instant::now().duration_since(act.last_heartbeat) > CLIENT_TIMEOUT {
                warn!(
                    client_id = %act.client_id,
                    "WebSocket heartbeat timeout"
                );
                ctx.stop();
                return;
            }
            ctx.ping(b"");
        });
    }

    fn start_dashboard_polling(&self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(POLL_INTERVAL, |act, ctx| {
            let state = act.state.clone();
            let last_revision = act.last_revision;

            let fut = async move {
                let state = state.read().await;
                Self::pending_view(last_revision, &state)
            };

            let fut = actix::fut::wrap_future::<_, Self>(fut);

            ctx.spawn(fut.map(|view, act, ctx| {
                if let Some(view) = view {
                    act.last_revision = Some(view.revision);

                    let msg = WsMessage::DashboardUpdate(Box::new(view));
                    if let Ok(json) = serde_json::to_string(&msg) {
                        ctx.text(json);
                    }
                }
            }));
        });
    }
}

impl Actor for WsSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!(client_id = %self.client_id, "WebSocket connected");

        self.start_heartbeat(ctx);
        self.start_dashboard_polling(ctx);

        let msg = WsMessage::Connected {
            client_id: self.client_id.clone(),
        };

        if let Ok(json) = serde_json::to_string(&msg) {
            ctx.text(json);
        }
    }

    fn stopped(&mut self, _: &mut Self::Context) {
        info!(client_id = %self.client_id, "WebSocket disconnected");
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for WsSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(msg)) => {
                self.last_heartbeat = Instant::now();
                ctx.pong(&msg);
            }
            Ok(ws::Message::Pong(_)) => {
                self.last_heartbeat = Instant::now();
            }
            Ok(ws::Message::Text(text)) => {
                debug!(client_id = %self.client_id, message = %text);

                match serde_json::from_str::<ClientMessage>(&text) {
                    Ok(ClientMessage::Ping) => {
                        self.last_heartbeat = Instant::now();
                        if let Ok(json) = serde_json::to_string(&WsMessage::Pong) {
                            ctx.text(json);
                        }
                    }
                    Err(e) => {
                        warn!(client_id = %self.client_id, error = %e);
                        let err = WsMessage::Error {
                            message: "Invalid message format".into(),
                        };
                        if let Ok(json) = serde_json::to_string(&err) {
                            ctx.text(json);
                        }
                    }
                }
            }
            Ok(ws::Message::Close(reason)) => {
                info!(client_id = %self.client_id, reason = ?reason);
                ctx.stop();
            }
            Err(e) => {
                warn!(client_id = %self.client_id, error = %e);
                ctx.stop();
            }
            _ => {}
        }
    }
}
