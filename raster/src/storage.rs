//! Byte storage shared between image descriptors.
use alloc::vec::Vec;
use core::cell::Cell;
use image_texel::image::CellImage;
use image_texel::layout::Bytes;
use image_texel::texels::U8;

/// A suffix of a shared, unsynchronized byte buffer.
///
/// Clones refer to the same buffer. Writes by any holder are observed by all others.
#[derive(Clone)]
pub(crate) struct SharedBytes {
    buf: CellImage<Bytes>,
    start: usize,
}

impl SharedBytes {
    /// Allocate zeroed bytes.
    pub fn new(len: usize) -> Self {
        SharedBytes {
            buf: CellImage::new(Bytes(len)),
            start: 0,
        }
    }

    /// Allocate with a copy of existing bytes.
    pub fn with_bytes(bytes: &[u8]) -> Self {
        SharedBytes {
            buf: CellImage::with_bytes(Bytes(bytes.len()), bytes),
            start: 0,
        }
    }

    /// The same buffer, starting `offset` bytes further in.
    ///
    /// # Panics
    ///
    /// If `offset` is beyond the end of the visible bytes.
    #[track_caller]
    pub fn suffix(&self, offset: usize) -> Self {
        assert!(offset <= self.len());
        SharedBytes {
            buf: self.buf.clone(),
            start: self.start + offset,
        }
    }

    pub fn as_cells(&self) -> &[Cell<u8>] {
        // The buffer may be padded beyond its layout.
        let end = self.buf.layout().0;
        &self.buf.as_texels(U8).as_slice_of_cells()[self.start..end]
    }

    pub fn len(&self) -> usize {
        self.buf.layout().0 - self.start
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.buf.ptr_eq(&other.buf)
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.as_cells().iter().map(Cell::get).collect()
    }
}
