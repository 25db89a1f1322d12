use crate::color::Color;
use core::fmt;

/// Converts arbitrary colors into one representation.
pub trait Model {
    /// The representation produced by this model.
    type Color: Color;

    /// Convert a color of any kind.
    ///
    /// A color that already has the target representation must be returned unchanged.
    fn convert(&self, color: &dyn Color) -> Self::Color;
}

/// A model defined by a plain conversion function.
///
/// ```
/// use image_colorext::{Color, Gray16, Model, ModelFn};
///
/// fn gray16(color: &dyn Color) -> Gray16 {
///     Gray16 { y: color.rgba().g }
/// }
///
/// static GRAY16: ModelFn<Gray16> = ModelFn::new(gray16);
/// assert_eq!(GRAY16.convert(&Gray16 { y: 7 }), Gray16 { y: 7 });
/// ```
pub struct ModelFn<C> {
    convert: fn(&dyn Color) -> C,
}

impl<C: Color> ModelFn<C> {
    /// Wrap a conversion function, which must return colors of its own type unchanged.
    pub const fn new(convert: fn(&dyn Color) -> C) -> Self {
        ModelFn { convert }
    }
}

impl<C: Color> Model for ModelFn<C> {
    type Color = C;

    fn convert(&self, color: &dyn Color) -> C {
        (self.convert)(color)
    }
}

impl<C> Clone for ModelFn<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for ModelFn<C> {}

impl<C> fmt::Debug for ModelFn<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ModelFn")
            .field("color", &core::any::type_name::<C>())
            .finish()
    }
}
