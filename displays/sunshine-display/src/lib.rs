//! Draw surface abstraction and shared components for Sunshine
//!
//! This crate provides:
//! - `DrawSurface` trait implemented by whatever actually puts pixels on
//!   the watch (a canvas, a framebuffer, a terminal)
//! - Geometry, colour and text paint types shared by the renderer and
//!   the surfaces
//! - `FrameRecorder`, a surface that records draw calls instead of
//!   rasterizing them
//!
//! # Architecture
//!
//! The face renderer in `sunshine-core` only talks to `DrawSurface`. Fonts,
//! pixel formats and bitmap decoding belong to the surface implementation.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod backend;
pub mod recorder;

// Re-export key types
pub use backend::{Bounds, Color, DrawSurface, IconHandle, Point, Rect, SurfaceError, TextPaint};
pub use recorder::{DrawOp, FrameRecorder};
