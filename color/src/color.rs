//! The generic color contract and the standard colors implementing it.
use bytemuck::{Pod, Zeroable};
use core::any::Any;

/// A value that can be expressed in the common interchange format.
///
/// Implementations are required to be `'static` so that a [`Model`](crate::Model) can recognize
/// its own representation behind a `&dyn Color` and skip the conversion.
pub trait Color: Any {
    /// The premultiplied, 16-bit red, green, blue and alpha channels of this color.
    ///
    /// No channel may exceed the alpha channel.
    fn rgba(&self) -> Rgba64;

    /// The value as `Any`, to downcast a color of unknown type.
    fn as_any(&self) -> &dyn Any;
}

/// The interchange tuple: premultiplied red, green, blue and alpha, 16 bits each.
///
/// This is a color in its own right, converting to itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct Rgba64 {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

/// Premultiplied 8-bit red, green, blue and alpha.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// An opaque 8-bit gray.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct Gray {
    pub y: u8,
}

/// An opaque 16-bit gray, in the conventional unsigned range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct Gray16 {
    pub y: u16,
}

impl Rgba64 {
    /// The opaque alpha value.
    pub const OPAQUE: u16 = 0xffff;

    /// A gray tuple, with all three color channels equal and full alpha.
    pub const fn gray(luma: u16) -> Self {
        Rgba64 {
            r: luma,
            g: luma,
            b: luma,
            a: Self::OPAQUE,
        }
    }
}

/// Scale an 8-bit channel onto the full 16-bit range, such that `0xff` becomes `0xffff`.
pub(crate) const fn widen(c: u8) -> u16 {
    (c as u16) * 0x101
}

impl Color for Rgba64 {
    fn rgba(&self) -> Rgba64 {
        *self
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Color for Rgba {
    fn rgba(&self) -> Rgba64 {
        Rgba64 {
            r: widen(self.r),
            g: widen(self.g),
            b: widen(self.b),
            a: widen(self.a),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Color for Gray {
    fn rgba(&self) -> Rgba64 {
        Rgba64::gray(widen(self.y))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Color for Gray16 {
    fn rgba(&self) -> Rgba64 {
        Rgba64::gray(self.y)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
