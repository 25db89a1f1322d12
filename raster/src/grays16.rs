// Distributed under The MIT License (MIT)
//
// Copyright (c) 2026 The `image-rs` developers
use crate::image::{Image, ImageMut, SubImage};
use crate::rect::{Point, Rect};
use crate::storage::SharedBytes;
use alloc::vec::Vec;
use bytemuck::Zeroable;
use core::fmt;
use image_colorext::{gray_s16_model, Color, GrayS16, Model, GRAY_S16_MODEL};

/// Bytes per pixel.
const PIXEL: usize = 2;

/// An in-memory image of [`GrayS16`] pixels.
///
/// Each pixel is stored as two bytes, the big-endian two's complement of its luma. Rows start
/// `stride` bytes apart and the pixel at `bounds().min` comes first.
///
/// The bytes are shared. Cloning the image, or taking a [`sub_image`](Self::sub_image), creates
/// another view of the same bytes, and all views observe each other's writes. This is why the
/// setters only need `&self`.
#[derive(Clone)]
pub struct GrayS16Image {
    pix: SharedBytes,
    stride: usize,
    rect: Rect,
}

/// Error when the geometry of an image can not be represented.
pub struct LayoutError {
    kind: LayoutErrorKind,
}

#[derive(Debug)]
enum LayoutErrorKind {
    TooLarge,
    StrideTooSmall { stride: usize, row: usize },
    BufferTooSmall { required: usize, len: usize },
}

impl GrayS16Image {
    /// Allocate a zeroed image covering `rect`.
    ///
    /// The stride is exactly two bytes per column. An empty rectangle yields an empty image.
    ///
    /// # Panics
    ///
    /// If the byte size of the image overflows. See [`GrayS16Image::try_new`] for a fallible
    /// alternative.
    #[track_caller]
    pub fn new(rect: Rect) -> Self {
        Self::try_new(rect).unwrap_or_else(allocation_failed)
    }

    /// Allocate a zeroed image covering `rect`, checking its size.
    ///
    /// Only the byte length computation is checked: it must not overflow and must stay within
    /// `isize::MAX`. A length that passes but exceeds available memory still aborts on
    /// allocation, as for any other collection.
    pub fn try_new(rect: Rect) -> Result<Self, LayoutError> {
        let stride = (rect.width() as usize)
            .checked_mul(PIXEL)
            .ok_or(LayoutError::TOO_LARGE)?;
        let len = stride
            .checked_mul(rect.height() as usize)
            .filter(|&len| len <= isize::MAX as usize)
            .ok_or(LayoutError::TOO_LARGE)?;

        Ok(GrayS16Image {
            pix: SharedBytes::new(len),
            stride,
            rect,
        })
    }

    /// Create an image with a copy of existing pixel bytes.
    ///
    /// The bytes are interpreted as rows of big-endian pixels, `stride` bytes apart. The stride
    /// must cover at least the width of `rect`, and `bytes` must reach to the end of the last
    /// pixel in the last row.
    pub fn from_bytes(bytes: &[u8], stride: usize, rect: Rect) -> Result<Self, LayoutError> {
        if !rect.is_empty() {
            let row = (rect.width() as usize)
                .checked_mul(PIXEL)
                .ok_or(LayoutError::TOO_LARGE)?;

            if stride < row {
                return Err(LayoutError {
                    kind: LayoutErrorKind::StrideTooSmall { stride, row },
                });
            }

            let required = stride
                .checked_mul(rect.height() as usize - 1)
                .and_then(|len| len.checked_add(row))
                .ok_or(LayoutError::TOO_LARGE)?;

            if bytes.len() < required {
                return Err(LayoutError {
                    kind: LayoutErrorKind::BufferTooSmall {
                        required,
                        len: bytes.len(),
                    },
                });
            }
        }

        Ok(GrayS16Image {
            pix: SharedBytes::with_bytes(bytes),
            stride,
            rect,
        })
    }

    /// The distance between the start of two rows, in bytes.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The rectangle of valid coordinates.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The number of bytes visible to this image, from its first pixel on.
    ///
    /// For a sub-image this includes bytes of the parent past its own last pixel.
    pub fn byte_len(&self) -> usize {
        self.pix.len()
    }

    /// Copy the visible bytes, see [`GrayS16Image::byte_len`].
    pub fn to_bytes(&self) -> Vec<u8> {
        self.pix.to_vec()
    }

    /// Check if both images are views of the same bytes.
    pub fn shares_storage_with(&self, other: &GrayS16Image) -> bool {
        self.pix.ptr_eq(&other.pix)
    }

    /// The byte index of the pixel at `(x, y)`.
    ///
    /// This is computed for any coordinate but only indexes the image if the point lies within
    /// its rectangle. Points before the first pixel result in negative offsets.
    pub fn pix_offset(&self, x: i32, y: i32) -> isize {
        let dy = (y as isize).wrapping_sub(self.rect.min.y as isize);
        let dx = (x as isize).wrapping_sub(self.rect.min.x as isize);
        dy.wrapping_mul(self.stride as isize)
            .wrapping_add(dx.wrapping_mul(PIXEL as isize))
    }

    /// The offset of an in-bounds pixel.
    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if !self.rect.contains(Point::new(x, y)) {
            return None;
        }

        // Both differences are non-negative within the rectangle.
        let dy = (i64::from(y) - i64::from(self.rect.min.y)) as usize;
        let dx = (i64::from(x) - i64::from(self.rect.min.x)) as usize;
        Some(dy * self.stride + dx * PIXEL)
    }

    /// The pixel at `(x, y)`, or zero outside the rectangle.
    pub fn gray_s16_at(&self, x: i32, y: i32) -> GrayS16 {
        let Some(idx) = self.index_of(x, y) else {
            return GrayS16::zeroed();
        };

        let pix = self.pix.as_cells();
        let be = [pix[idx].get(), pix[idx + 1].get()];
        GrayS16::new(i16::from_be(bytemuck::cast(be)))
    }

    /// Store a pixel at `(x, y)`, without conversion.
    ///
    /// Does nothing outside the rectangle.
    pub fn set_gray_s16(&self, x: i32, y: i32, color: GrayS16) {
        let Some(idx) = self.index_of(x, y) else {
            return;
        };

        let [hi, lo]: [u8; 2] = bytemuck::cast(color.y.to_be());
        let pix = self.pix.as_cells();
        pix[idx].set(hi);
        pix[idx + 1].set(lo);
    }

    /// Convert a color with [`GRAY_S16_MODEL`] and store it at `(x, y)`.
    ///
    /// Does nothing outside the rectangle.
    pub fn set(&self, x: i32, y: i32, color: &dyn Color) {
        if !self.rect.contains(Point::new(x, y)) {
            return;
        }

        self.set_gray_s16(x, y, gray_s16_model(color));
    }

    /// A view of the pixels inside `rect`, sharing this image's bytes.
    ///
    /// When `rect` does not overlap the image the result is a new, empty image that shares
    /// nothing.
    pub fn sub_image(&self, rect: Rect) -> GrayS16Image {
        let rect = rect.intersect(&self.rect);

        let offset = match self.index_of(rect.min.x, rect.min.y) {
            Some(offset) if !rect.is_empty() => offset,
            _ => return GrayS16Image::default(),
        };

        GrayS16Image {
            pix: self.pix.suffix(offset),
            stride: self.stride,
            rect,
        }
    }

    /// Always true, the pixels carry no alpha.
    pub fn opaque(&self) -> bool {
        true
    }
}

impl Default for GrayS16Image {
    /// An empty image at the origin.
    fn default() -> Self {
        GrayS16Image {
            pix: SharedBytes::new(0),
            stride: 0,
            rect: Rect::ZERO,
        }
    }
}

impl Image for GrayS16Image {
    type Pixel = GrayS16;

    fn color_model(&self) -> &dyn Model<Color = GrayS16> {
        &GRAY_S16_MODEL
    }

    fn bounds(&self) -> Rect {
        self.rect
    }

    fn at(&self, x: i32, y: i32) -> GrayS16 {
        self.gray_s16_at(x, y)
    }
}

impl ImageMut for GrayS16Image {
    fn set(&mut self, x: i32, y: i32, color: &dyn Color) {
        GrayS16Image::set(self, x, y, color)
    }
}

impl SubImage for GrayS16Image {
    fn sub_image(&self, rect: Rect) -> Self {
        GrayS16Image::sub_image(self, rect)
    }
}

impl fmt::Debug for GrayS16Image {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("GrayS16Image")
            .field("rect", &self.rect)
            .field("stride", &self.stride)
            .field("bytes", &self.pix.len())
            .finish()
    }
}

impl LayoutError {
    const TOO_LARGE: Self = LayoutError {
        kind: LayoutErrorKind::TooLarge,
    };
}

#[cold]
#[track_caller]
fn allocation_failed(err: LayoutError) -> GrayS16Image {
    panic!("{}", err)
}

impl fmt::Debug for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("LayoutError")
            .field("kind", &self.kind)
            .finish()
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            LayoutErrorKind::TooLarge => write!(f, "Image byte size overflows"),
            LayoutErrorKind::StrideTooSmall { stride, row } => write!(
                f,
                "Stride of {} bytes is shorter than a row of {} bytes",
                stride, row
            ),
            LayoutErrorKind::BufferTooSmall { required, len } => write!(
                f,
                "Image requires {} bytes but buffer has only {}",
                required, len
            ),
        }
    }
}

impl core::error::Error for LayoutError {}
