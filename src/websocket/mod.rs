//! WebSocket Reactive Sessions
//!
//! Drives the dashboard page over a WebSocket: the page reports control
//! changes and the server pushes back recomputed chart specs.
//!
//! ## Architecture
//!
//! - **Handler**: Handles WebSocket upgrade and runs one `Session` per connection
//! - **Messages**: Defines client and server message formats
//!
//! ## Example
//!
//! ```javascript
//! // Browser
//! const ws = new WebSocket('ws://localhost:8050/ws');
//!
//! ws.onopen = () => {
//!   ws.send(JSON.stringify({type: 'set_control', control: 'payload-slider', value: [0, 5000]}));
//! };
//!
//! ws.onmessage = (event) => {
//!   const msg = JSON.parse(event.data);
//!   if (msg.type === 'chart_update') console.log(msg.output, msg.figure);
//! };
//! ```

mod handler;
mod messages;

pub use handler::{websocket_handler, Session};
pub use messages::{ClientMessage, ServerMessage};
