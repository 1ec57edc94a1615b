//! Win32 pointer lookups.
//!
//! Thin wrappers around `GetPointerType`, `GetPointerPenInfo` and
//! `ScreenToClient`. They only read OS state for the pointer carried by the
//! message currently being dispatched; nothing is cached.
//!
//! ## Conventions
//! - Pressure is the raw `POINTER_PEN_INFO::pressure` value (0..=1024 on most digitizers).
//! - Tilt is reported in whole degrees, `[-90, 90]`.
//! - Positions are `ptPixelLocation` (screen pixels, DPI-adjusted by the OS).

#![cfg(target_os = "windows")]

use crate::pointer::{ClientSpace, Point, PointerId, PointerKind, PointerSource, RawPenSample};
use windows_sys::Win32::Foundation::{HWND, POINT};
use windows_sys::Win32::Graphics::Gdi::ScreenToClient;
use windows_sys::Win32::UI::Input::Pointer::{GetPointerPenInfo, GetPointerType, POINTER_PEN_INFO};

// Local constants (avoid relying on module exports that vary by windows-sys version)
const POINTER_FLAG_INCONTACT: u32 = 0x0000_0004;

/// Pointer lookups against the calling thread's pointer state.
#[derive(Clone, Copy, Debug, Default)]
pub struct Win32PointerSource;

impl PointerSource for Win32PointerSource {
    fn pointer_kind(&self, id: PointerId) -> Option<PointerKind> {
        let mut raw = 0;
        let ok = unsafe { GetPointerType(id, &mut raw) };
        if ok == 0 {
            return None;
        }
        Some(PointerKind::from_raw(raw))
    }

    fn pen_sample(&self, id: PointerId) -> Option<RawPenSample> {
        unsafe {
            let mut info: POINTER_PEN_INFO = core::mem::zeroed();
            if GetPointerPenInfo(id, &mut info) == 0 {
                return None;
            }

            let location = info.pointerInfo.ptPixelLocation;
            Some(RawPenSample {
                pressure: info.pressure,
                tilt_x: info.tiltX,
                tilt_y: info.tiltY,
                rotation: info.rotation,
                screen: Point {
                    x: location.x,
                    y: location.y,
                },
                in_contact: (info.pointerInfo.pointerFlags & POINTER_FLAG_INCONTACT) != 0,
            })
        }
    }
}

/// Client area of one window.
#[derive(Clone, Copy, Debug)]
pub struct Win32ClientSpace {
    hwnd: HWND,
}

impl Win32ClientSpace {
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }
}

impl ClientSpace for Win32ClientSpace {
    fn screen_to_client(&self, point: Point) -> Point {
        let mut pt = POINT {
            x: point.x,
            y: point.y,
        };
        // On failure `pt` is left as-is, so the screen position passes through.
        unsafe { ScreenToClient(self.hwnd, &mut pt) };
        Point { x: pt.x, y: pt.y }
    }
}
