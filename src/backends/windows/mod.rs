#![cfg(target_os = "windows")]

//! Windows pointer backend.
//!
//! - **Pointer input**: `GetPointerType` / `GetPointerPenInfo` lookups and
//!   `ScreenToClient` conversion
//! - **Subclass**: the `SetWindowSubclass` hook that routes a window's messages
//!   through an interceptor
//!
//! Most users should go through [`InkPlugin::attach`](crate::plugin::InkPlugin::attach)
//! instead of installing a [`SubclassHook`] by hand.

pub mod pointer_input;
pub mod subclass;

pub use pointer_input::{Win32ClientSpace, Win32PointerSource};
pub use subclass::SubclassHook;
