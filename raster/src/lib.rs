// Distributed under The MIT License (MIT)
//
// Copyright (c) 2026 The `image-rs` developers
//! # Grays16
//!
//! A raster of signed 16-bit grayscale pixels.
//!
//! The image is a rectangle of pixels that need not start at the origin, each pixel stored as
//! two big-endian bytes in a row-strided byte buffer. The buffer is shared: a sub-image is a
//! narrower view onto the same bytes, and writes through either are visible through the other.
//!
//! ## Usage
//!
//! ```
//! use image_colorext::{GrayS16, Rgba};
//! use image_grays16::{GrayS16Image, Rect};
//!
//! let image = GrayS16Image::new(Rect::new(-4, -4, 4, 4));
//! assert_eq!(image.stride(), 16);
//!
//! // Writes convert any color, reads return the stored value.
//! image.set(-4, -4, &Rgba { r: 0xff, g: 0xff, b: 0xff, a: 0xff });
//! assert_eq!(image.gray_s16_at(-4, -4), GrayS16::WHITE);
//!
//! // The quadrant aliases its parent.
//! let quadrant = image.sub_image(Rect::new(0, 0, 4, 4));
//! quadrant.set_gray_s16(1, 1, GrayS16::new(-7));
//! assert_eq!(image.gray_s16_at(1, 1), GrayS16::new(-7));
//!
//! // Probing outside the rectangle is harmless.
//! image.set_gray_s16(100, 100, GrayS16::WHITE);
//! assert_eq!(image.gray_s16_at(100, 100), GrayS16::new(0));
//! ```
//!
//! The bytes are held in cells, so images are neither `Send` nor `Sync`. An image and all views
//! derived from it stay on one thread.
#![cfg_attr(not(doctest), no_std)]
#![deny(unsafe_code)]
extern crate alloc;

mod grays16;
mod image;
mod rect;
mod storage;

pub use self::grays16::{GrayS16Image, LayoutError};
pub use self::image::{Image, ImageMut, SubImage};
pub use self::rect::{Point, Rect};
