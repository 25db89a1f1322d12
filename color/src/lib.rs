// Distributed under The MIT License (MIT)
//
// Copyright (c) 2026 The `image-rs` developers
//! # Colorext
//!
//! Extended color models for generic image code.
//!
//! Every color representation in this crate implements [`Color`], which converts it into the
//! common interchange tuple [`Rgba64`]: four premultiplied, unsigned 16-bit channels. A
//! [`Model`] goes the other way and converts any color into one specific representation.
//!
//! The main addition is [`GrayS16`], a grayscale value stored with a zero-centered signed range
//! instead of the conventional `0..=65535`.
//!
//! ```
//! use image_colorext::{Color, GrayS16, Model, Rgba, GRAY_S16_MODEL};
//!
//! let red = Rgba { r: 0xff, g: 0, b: 0, a: 0xff };
//! let gray = GRAY_S16_MODEL.convert(&red);
//! assert_eq!(gray, GrayS16::new(-13173));
//!
//! // The signed value maps back onto the unsigned range by a constant shift.
//! assert_eq!(GrayS16::new(0).rgba().r, 0x8000);
//! ```
#![cfg_attr(not(doctest), no_std)]
#![deny(unsafe_code)]

mod color;
mod grays16;
#[cfg(feature = "image")]
mod interop;
mod model;


pub use self::color::{Color, Gray, Gray16, Rgba, Rgba64};
pub use self::grays16::{gray_s16_model, GrayS16, GRAY_S16_MODEL};
pub use self::model::{Model, ModelFn};
