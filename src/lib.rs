//! penhook — pen-only pointer input for Win32 windows.
//!
//! Intercepts a window's pointer messages, rejects touch/palm contacts, normalizes
//! pen telemetry (pressure, tilt, position) and streams the result to a single
//! subscriber.
//!
//! ```text
//! WM_POINTER* ─▶ MessageInterceptor ─▶ classify ─▶ extract ─▶ normalize ─▶ EventPublisher ─▶ sink
//!                       │
//!                       └──────────────── always ───────────────▶ default handling
//! ```

pub mod arena;
pub mod backends;
pub mod command;
pub mod config;
pub mod error;
pub mod event;
pub mod interceptor;
pub mod logger;
pub mod normalize;
pub mod plugin;
pub mod pointer;
pub mod publisher;

pub use command::*;
pub use config::InkConfig;
pub use error::*;
pub use event::*;
pub use interceptor::{MessageInterceptor, PointerMessage};
pub use logger::LogSink;
pub use normalize::Normalizer;
pub use plugin::InkPlugin;
pub use pointer::*;
pub use publisher::*;
