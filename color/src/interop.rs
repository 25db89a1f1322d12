//! Pixel types of the `image` crate as colors.
//!
//! Their channels are not premultiplied, the conversion applies alpha.
use crate::color::{widen, Color, Rgba64};
use core::any::Any;
use image::{Luma, Rgb, Rgba};

fn premultiply(c: u16, a: u16) -> u16 {
    (u32::from(c) * u32::from(a) / 0xffff) as u16
}

fn straight(r: u16, g: u16, b: u16, a: u16) -> Rgba64 {
    Rgba64 {
        r: premultiply(r, a),
        g: premultiply(g, a),
        b: premultiply(b, a),
        a,
    }
}

impl Color for Luma<u8> {
    fn rgba(&self) -> Rgba64 {
        Rgba64::gray(widen(self.0[0]))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Color for Luma<u16> {
    fn rgba(&self) -> Rgba64 {
        Rgba64::gray(self.0[0])
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Color for Rgb<u8> {
    fn rgba(&self) -> Rgba64 {
        let [r, g, b] = self.0.map(widen);
        Rgba64 {
            r,
            g,
            b,
            a: Rgba64::OPAQUE,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Color for Rgb<u16> {
    fn rgba(&self) -> Rgba64 {
        let [r, g, b] = self.0;
        Rgba64 {
            r,
            g,
            b,
            a: Rgba64::OPAQUE,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Color for Rgba<u8> {
    fn rgba(&self) -> Rgba64 {
        let [r, g, b, a] = self.0.map(widen);
        straight(r, g, b, a)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Color for Rgba<u16> {
    fn rgba(&self) -> Rgba64 {
        let [r, g, b, a] = self.0;
        straight(r, g, b, a)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
