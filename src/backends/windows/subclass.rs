//! Window subclass hook.
//!
//! [`SubclassHook`] inserts [`subclass_proc`] into a window's message chain with
//! `SetWindowSubclass`, leaving every existing handler in place. The hook owns
//! its interceptor through a thread-local [`InterceptorArena`]; the subclass
//! reference data is the arena key.
//!
//! Lifetime rules:
//! - Installing and dropping must happen on the window's thread (a Win32 rule
//!   for subclassing, and the arena is per-thread).
//! - Dropping the hook removes the subclass and frees the arena slot, once.
//! - If the window is destroyed first, `WM_NCDESTROY` removes the subclass and
//!   the later drop only frees the slot.

#![cfg(target_os = "windows")]

use crate::arena::{ArenaKey, InterceptorArena};
use crate::error::HookError;
use crate::interceptor::MessageInterceptor;
use std::cell::RefCell;
use std::rc::Rc;
use windows_sys::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows_sys::Win32::UI::Shell::{DefSubclassProc, RemoveWindowSubclass, SetWindowSubclass};

const WM_NCDESTROY: u32 = 0x0082;

thread_local! {
    static INTERCEPTORS: RefCell<InterceptorArena<MessageInterceptor>> =
        RefCell::new(InterceptorArena::new());
}

/// An installed subclass. Dropping it uninstalls the hook.
#[derive(Debug)]
pub struct SubclassHook {
    hwnd: HWND,
    subclass_id: usize,
    key: ArenaKey,
}

impl SubclassHook {
    /// Route `hwnd`'s messages through `interceptor`.
    pub fn install(
        hwnd: HWND,
        subclass_id: usize,
        interceptor: MessageInterceptor,
    ) -> Result<Self, HookError> {
        let key = INTERCEPTORS.with(|arena| arena.borrow_mut().insert(Rc::new(interceptor)));

        let ok = unsafe { SetWindowSubclass(hwnd, Some(subclass_proc), subclass_id, key) };
        if ok == 0 {
            INTERCEPTORS.with(|arena| arena.borrow_mut().remove(key));
            return Err(HookError::SubclassRejected { subclass_id });
        }

        log::debug!("installed pen subclass {subclass_id} on {hwnd:?}");
        Ok(Self {
            hwnd,
            subclass_id,
            key,
        })
    }

    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }

    pub fn subclass_id(&self) -> usize {
        self.subclass_id
    }
}

impl Drop for SubclassHook {
    fn drop(&mut self) {
        // Fails harmlessly if WM_NCDESTROY already removed it.
        unsafe { RemoveWindowSubclass(self.hwnd, Some(subclass_proc), self.subclass_id) };
        let _ = INTERCEPTORS.try_with(|arena| arena.borrow_mut().remove(self.key));
        log::debug!("removed pen subclass {} from {:?}", self.subclass_id, self.hwnd);
    }
}

unsafe extern "system" fn subclass_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
    subclass_id: usize,
    key: usize,
) -> LRESULT {
    if msg == WM_NCDESTROY {
        unsafe { RemoveWindowSubclass(hwnd, Some(subclass_proc), subclass_id) };
        return unsafe { DefSubclassProc(hwnd, msg, wparam, lparam) };
    }

    // Clone the handle out so the arena is not borrowed while handlers re-enter.
    let interceptor = INTERCEPTORS
        .try_with(|arena| arena.borrow().get(key))
        .ok()
        .flatten();

    let forward = || unsafe { DefSubclassProc(hwnd, msg, wparam, lparam) };
    match interceptor {
        Some(interceptor) => interceptor.intercept(msg, wparam, forward),
        None => forward(),
    }
}
