// Distributed under The MIT License (MIT)
//
// Copyright (c) 2026 The `image-rs` developers
use crate::color::{Color, Rgba64};
use crate::model::ModelFn;
use bytemuck::{Pod, Zeroable};
use core::any::Any;

/// A signed 16-bit grayscale color.
///
/// The luma is centered on zero: `-32768` is black and `32767` is white. Conversion into the
/// interchange tuple shifts the value onto the unsigned range, see [`GrayS16::rgba`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct GrayS16 {
    pub y: i16,
}

/// The color model for [`GrayS16`].
pub static GRAY_S16_MODEL: ModelFn<GrayS16> = ModelFn::new(gray_s16_model);

/// Offset between the signed luma and the unsigned luma of the interchange tuple.
const SIGN_SHIFT: i32 = 1 << 15;

impl GrayS16 {
    /// The darkest value, `-32768`.
    pub const BLACK: Self = GrayS16 { y: i16::MIN };
    /// The brightest value, `32767`.
    pub const WHITE: Self = GrayS16 { y: i16::MAX };

    /// A gray with the given signed luma.
    pub const fn new(y: i16) -> Self {
        GrayS16 { y }
    }

    /// The luma shifted onto the unsigned range `0..=65535`.
    pub const fn unsigned_luma(self) -> u16 {
        (self.y as i32 + SIGN_SHIFT) as u16
    }

    /// The inverse of [`GrayS16::unsigned_luma`].
    pub const fn from_unsigned_luma(luma: u16) -> Self {
        GrayS16 {
            y: (luma as i32 - SIGN_SHIFT) as i16,
        }
    }
}

impl Color for GrayS16 {
    /// Gray with all channels at the shifted luma, and full alpha.
    ///
    /// ```
    /// use image_colorext::{Color, GrayS16, Rgba64};
    ///
    /// assert_eq!(GrayS16::new(0).rgba(), Rgba64::gray(32768));
    /// assert_eq!(GrayS16::BLACK.rgba(), Rgba64::gray(0));
    /// assert_eq!(GrayS16::WHITE.rgba(), Rgba64::gray(65535));
    /// ```
    fn rgba(&self) -> Rgba64 {
        Rgba64::gray(self.unsigned_luma())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Convert any color to [`GrayS16`].
///
/// The luma uses the JFIF weights `0.299`, `0.587` and `0.114` in 16-bit fixed point. The three
/// coefficients sum to exactly `65536`, so white stays white and the computation is exact on
/// every platform. Alpha is ignored.
pub fn gray_s16_model(color: &dyn Color) -> GrayS16 {
    if let Some(&gray) = color.as_any().downcast_ref::<GrayS16>() {
        return gray;
    }

    let Rgba64 { r, g, b, a: _ } = color.rgba();
    let (r, g, b) = (u32::from(r), u32::from(g), u32::from(b));
    // At most 65536 * 65535 + 32768, which fits.
    let luma = (19595 * r + 38470 * g + 7471 * b + (1 << 15)) >> 16;
    GrayS16::from_unsigned_luma(luma as u16)
}

impl From<i16> for GrayS16 {
    fn from(y: i16) -> Self {
        GrayS16 { y }
    }
}

impl From<GrayS16> for i16 {
    fn from(gray: GrayS16) -> Self {
        gray.y
    }
}
