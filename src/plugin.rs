//! Host integration.
//!
//! [`InkPlugin`] ties the pieces together for a host that owns one window:
//! - the event stream (`on_listen` / `on_cancel`) drives the shared [`EventPublisher`]
//! - the request channel goes to [`CapabilityHandler`]
//! - on Windows, [`InkPlugin::attach`] hooks the window so pen messages reach the publisher
//!
//! The hook is released when the plugin is dropped, or earlier through
//! [`InkPlugin::detach`].
//!
//! # Example
//! ```no_run
//! use penhook::{InkConfig, InkPlugin, PayloadSink};
//!
//! let plugin = InkPlugin::new(InkConfig::default());
//! plugin.on_listen(PayloadSink::new(|payload| println!("{payload}")));
//! assert_eq!(plugin.handle_method_call("isInkSupported").unwrap(), true);
//! ```

use crate::command::CapabilityHandler;
use crate::config::InkConfig;
use crate::error::MethodError;
use crate::interceptor::MessageInterceptor;
use crate::normalize::Normalizer;
use crate::pointer::{ClientSpace, PointerSource};
use crate::publisher::{EventPublisher, InkSink};
use serde_json::Value;
use std::rc::Rc;

#[cfg(target_os = "windows")]
use crate::backends::windows::{SubclassHook, Win32ClientSpace, Win32PointerSource};
#[cfg(target_os = "windows")]
use crate::error::HookError;
#[cfg(target_os = "windows")]
use windows_sys::Win32::Foundation::HWND;

pub struct InkPlugin {
    config: InkConfig,
    publisher: Rc<EventPublisher>,
    commands: CapabilityHandler,
    #[cfg(target_os = "windows")]
    hook: Option<SubclassHook>,
}

impl InkPlugin {
    pub fn new(config: InkConfig) -> Self {
        Self {
            config,
            publisher: Rc::new(EventPublisher::new()),
            commands: CapabilityHandler::new(),
            #[cfg(target_os = "windows")]
            hook: None,
        }
    }

    pub fn config(&self) -> &InkConfig {
        &self.config
    }

    /// Shared handle to the publisher the interceptors push into.
    pub fn publisher(&self) -> Rc<EventPublisher> {
        Rc::clone(&self.publisher)
    }

    /// Event stream subscribe: `sink` replaces any current subscriber.
    pub fn on_listen(&self, sink: impl InkSink + 'static) {
        self.publisher.subscribe(sink);
    }

    /// Event stream cancel.
    pub fn on_cancel(&self) {
        self.publisher.unsubscribe();
    }

    /// Answer a request from the method channel.
    pub fn handle_method_call(&self, method: &str) -> Result<Value, MethodError> {
        self.commands.handle(method)
    }

    /// Build an interceptor publishing into this plugin's stream.
    pub fn interceptor(
        &self,
        source: impl PointerSource + 'static,
        space: impl ClientSpace + 'static,
    ) -> MessageInterceptor {
        MessageInterceptor::new(
            source,
            space,
            Normalizer::new(self.config.pressure_max),
            self.publisher(),
        )
    }

    /// Hook `hwnd` so its pen messages are published.
    ///
    /// Must be called on the window's thread.
    #[cfg(target_os = "windows")]
    pub fn attach(&mut self, hwnd: HWND) -> Result<(), HookError> {
        let subclass_id = self.config.subclass_id;
        if self.hook.is_some() {
            return Err(HookError::AlreadyAttached { subclass_id });
        }
        let interceptor = self.interceptor(Win32PointerSource, Win32ClientSpace::new(hwnd));
        self.hook = Some(SubclassHook::install(hwnd, subclass_id, interceptor)?);
        Ok(())
    }

    /// Unhook the window. Does nothing if not attached.
    #[cfg(target_os = "windows")]
    pub fn detach(&mut self) {
        self.hook = None;
    }

    #[cfg(target_os = "windows")]
    pub fn is_attached(&self) -> bool {
        self.hook.is_some()
    }
}

impl Default for InkPlugin {
    fn default() -> Self {
        Self::new(InkConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_handlers_drive_the_publisher() {
        let plugin = InkPlugin::default();
        assert!(!plugin.publisher().has_subscriber());

        plugin.on_listen(|_: &crate::event::PointerEvent| {});
        assert!(plugin.publisher().has_subscriber());

        plugin.on_cancel();
        assert!(!plugin.publisher().has_subscriber());
    }

    #[test]
    fn method_calls_reach_the_capability_handler() {
        let plugin = InkPlugin::default();
        assert_eq!(plugin.handle_method_call("isInkSupported"), Ok(Value::Bool(true)));
        assert!(matches!(
            plugin.handle_method_call("foo"),
            Err(MethodError::NotImplemented { .. })
        ));
    }
}
