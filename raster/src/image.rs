//! The capabilities generic image code relies on.
use crate::rect::Rect;
use image_colorext::{Color, Model};

/// A rectangular grid of colors.
pub trait Image {
    /// The color representation of each pixel.
    type Pixel: Color;

    /// The model converting arbitrary colors into the pixel representation.
    fn color_model(&self) -> &dyn Model<Color = Self::Pixel>;

    /// The domain of [`Image::at`].
    ///
    /// Need not contain the origin.
    fn bounds(&self) -> Rect;

    /// The pixel at a coordinate.
    ///
    /// Coordinates outside of the bounds return the zero value of the pixel type.
    fn at(&self, x: i32, y: i32) -> Self::Pixel;
}

/// An image that can be written pixel by pixel.
pub trait ImageMut: Image {
    /// Convert a color with the color model and store it.
    ///
    /// Coordinates outside of the bounds are ignored.
    fn set(&mut self, x: i32, y: i32, color: &dyn Color);
}

/// An image that can be restricted to a rectangle.
pub trait SubImage: Image {
    /// A view of the part of the image inside `rect`.
    ///
    /// The result shares its pixels with `self`. It may be empty.
    fn sub_image(&self, rect: Rect) -> Self
    where
        Self: Sized;
}
