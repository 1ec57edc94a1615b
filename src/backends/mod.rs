//! OS backends for `penhook`.
//!
//! Implementations of [`PointerSource`](crate::pointer::PointerSource) and
//! [`ClientSpace`](crate::pointer::ClientSpace), plus the window hook that feeds
//! messages into a [`MessageInterceptor`](crate::interceptor::MessageInterceptor).
//!
//! Only Windows has native pointer-type discrimination; on other platforms the
//! pipeline is still usable with host-provided sources, but nothing hooks a window.

#[cfg(target_os = "windows")]
#[cfg_attr(docsrs, doc(cfg(target_os = "windows")))]
pub mod windows;
