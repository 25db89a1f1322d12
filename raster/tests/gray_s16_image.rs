use image_colorext::{Color, Gray16, GrayS16, Model, Rgba};
use image_grays16::{GrayS16Image, Image, ImageMut, Point, Rect, SubImage};

#[test]
fn geometry() {
    let image = GrayS16Image::new(Rect::new(0, 0, 10, 10));
    assert_eq!(image.stride(), 20);
    assert_eq!(image.byte_len(), 200);
    assert_eq!(image.bounds(), Rect::new(0, 0, 10, 10));
    assert!(image.to_bytes().iter().all(|&b| b == 0));
}

#[test]
fn bounds_are_kept() {
    let rects = [
        Rect::new(0, 0, 10, 10),
        Rect::new(5, 5, 15, 15),
        Rect::new(-10, -10, 10, 10),
        Rect::new(0, 0, 0, 0),
    ];

    for rect in rects {
        assert_eq!(GrayS16Image::new(rect).bounds(), rect, "for {}", rect);
    }
}

#[test]
fn empty_image() {
    let image = GrayS16Image::new(Rect::new(3, 3, 3, 8));
    assert_eq!(image.byte_len(), 0);
    assert_eq!(image.gray_s16_at(3, 3), GrayS16::new(0));
    image.set_gray_s16(3, 3, GrayS16::WHITE);
    assert!(image.to_bytes().is_empty());
}

#[test]
fn pix_offset() {
    let image = GrayS16Image::new(Rect::new(0, 0, 10, 10));
    assert_eq!(image.pix_offset(0, 0), 0);
    assert_eq!(image.pix_offset(1, 0), 2);
    assert_eq!(image.pix_offset(0, 1), 20);

    let image = GrayS16Image::new(Rect::new(5, 5, 15, 15));
    assert_eq!(image.pix_offset(5, 5), 0);
    assert_eq!(image.pix_offset(6, 5), 2);
    assert_eq!(image.pix_offset(5, 6), 20);
}

#[test]
fn set_and_get() {
    let image = GrayS16Image::new(Rect::new(0, 0, 10, 10));
    let values = [i16::MIN, -1000, -1, 0, 1, 1000, i16::MAX];

    for (i, &y) in values.iter().enumerate() {
        let x = i as i32;
        image.set_gray_s16(x, 3, GrayS16::new(y));
    }

    for (i, &y) in values.iter().enumerate() {
        let x = i as i32;
        assert_eq!(image.gray_s16_at(x, 3), GrayS16::new(y));
        assert_eq!(image.at(x, 3), GrayS16::new(y));
    }
}

#[test]
fn every_value_survives_storage() {
    let image = GrayS16Image::new(Rect::new(-1, -1, 1, 1));
    for y in i16::MIN..=i16::MAX {
        image.set_gray_s16(-1, 0, GrayS16::new(y));
        assert_eq!(image.gray_s16_at(-1, 0).y, y);
    }
}

#[test]
fn byte_order() {
    let image = GrayS16Image::new(Rect::new(0, 0, 2, 1));
    image.set_gray_s16(0, 0, GrayS16::new(0x1234));
    image.set_gray_s16(1, 0, GrayS16::new(-1));
    assert_eq!(image.to_bytes(), [0x12, 0x34, 0xff, 0xff]);

    // Negative values keep their bit pattern, they are not shifted like the luma.
    image.set_gray_s16(0, 0, GrayS16::new(i16::MIN));
    assert_eq!(image.to_bytes()[..2], [0x80, 0x00]);
}

#[test]
fn set_converts_colors() {
    let image = GrayS16Image::new(Rect::new(0, 0, 10, 10));

    image.set(0, 0, &Rgba { r: 255, g: 255, b: 255, a: 255 });
    assert_eq!(image.gray_s16_at(0, 0), GrayS16::new(32767));

    image.set(1, 0, &Gray16 { y: 0 });
    assert_eq!(image.gray_s16_at(1, 0), GrayS16::new(-32768));

    image.set(2, 0, &GrayS16::new(-42));
    assert_eq!(image.gray_s16_at(2, 0), GrayS16::new(-42));
}

#[test]
fn out_of_bounds_reads_are_zero() {
    let image = GrayS16Image::new(Rect::new(0, 0, 10, 10));
    for y in 0..10 {
        for x in 0..10 {
            image.set_gray_s16(x, y, GrayS16::WHITE);
        }
    }

    let outside = [(-1, 0), (0, -1), (10, 0), (0, 10), (10, 10), (i32::MIN, i32::MAX)];
    for (x, y) in outside {
        assert_eq!(image.gray_s16_at(x, y), GrayS16::new(0), "at {}, {}", x, y);
    }
}

#[test]
fn out_of_bounds_writes_are_ignored() {
    let image = GrayS16Image::new(Rect::new(0, 0, 10, 10));
    let before = image.to_bytes();

    for (x, y) in [(-1, 0), (0, -1), (10, 0), (0, 10), (100, 100), (i32::MAX, i32::MIN)] {
        image.set_gray_s16(x, y, GrayS16::new(1000));
        image.set(x, y, &Rgba { r: 1, g: 2, b: 3, a: 4 });
    }

    assert_eq!(image.to_bytes(), before);
}

#[test]
fn non_zero_origin() {
    let image = GrayS16Image::new(Rect::new(5, 5, 15, 15));
    image.set_gray_s16(7, 8, GrayS16::new(1234));
    assert_eq!(image.gray_s16_at(7, 8), GrayS16::new(1234));

    let offset = image.pix_offset(7, 8) as usize;
    assert_eq!(image.to_bytes()[offset..offset + 2], 1234i16.to_be_bytes());
}

#[test]
fn negative_origin() {
    let image = GrayS16Image::new(Rect::new(-10, -10, 10, 10));
    image.set_gray_s16(-10, -10, GrayS16::new(-5));
    image.set_gray_s16(9, 9, GrayS16::new(5));
    assert_eq!(image.gray_s16_at(-10, -10), GrayS16::new(-5));
    assert_eq!(image.gray_s16_at(9, 9), GrayS16::new(5));
    assert_eq!(image.to_bytes()[..2], [0xff, 0xfb]);
}

#[test]
fn sub_image_aliases_parent() {
    let image = GrayS16Image::new(Rect::new(0, 0, 10, 10));
    image.set_gray_s16(5, 5, GrayS16::new(1000));
    image.set_gray_s16(6, 6, GrayS16::new(2000));

    let sub = image.sub_image(Rect::new(5, 5, 8, 8));
    assert_eq!(sub.bounds(), Rect::new(5, 5, 8, 8));
    assert_eq!(sub.stride(), image.stride());
    assert!(sub.shares_storage_with(&image));
    assert_eq!(sub.gray_s16_at(5, 5), GrayS16::new(1000));

    sub.set_gray_s16(6, 6, GrayS16::new(3000));
    assert_eq!(image.gray_s16_at(6, 6), GrayS16::new(3000));

    image.set_gray_s16(7, 7, GrayS16::new(-3000));
    assert_eq!(sub.gray_s16_at(7, 7), GrayS16::new(-3000));

    // Points of the parent outside of the view stay unreachable through it.
    assert_eq!(sub.gray_s16_at(4, 4), GrayS16::new(0));
    sub.set_gray_s16(8, 8, GrayS16::WHITE);
    assert_eq!(image.gray_s16_at(8, 8), GrayS16::new(0));
}

#[test]
fn sub_image_is_clipped() {
    let image = GrayS16Image::new(Rect::new(0, 0, 10, 10));
    let sub = image.sub_image(Rect::new(-5, 8, 3, 20));
    assert_eq!(sub.bounds(), Rect::new(0, 8, 3, 10));

    sub.set_gray_s16(2, 9, GrayS16::new(9));
    assert_eq!(image.gray_s16_at(2, 9), GrayS16::new(9));
}

#[test]
fn nested_sub_images() {
    let image = GrayS16Image::new(Rect::new(-4, -4, 4, 4));
    let outer = image.sub_image(Rect::new(-2, -2, 4, 4));
    let inner = outer.sub_image(Rect::new(0, 0, 2, 2));

    inner.set_gray_s16(1, 1, GrayS16::new(11));
    assert_eq!(image.gray_s16_at(1, 1), GrayS16::new(11));
    assert_eq!(outer.gray_s16_at(1, 1), GrayS16::new(11));
    assert_eq!(inner.pix_offset(1, 1), 18);
}

#[test]
fn sub_image_empty() {
    let image = GrayS16Image::new(Rect::new(0, 0, 10, 10));
    let sub = image.sub_image(Rect::new(5, 5, 5, 5));
    assert!(sub.bounds().is_empty());
    assert!(!sub.shares_storage_with(&image));
}

#[test]
fn sub_image_disjoint() {
    let image = GrayS16Image::new(Rect::new(0, 0, 10, 10));
    let sub = image.sub_image(Rect::new(20, 20, 30, 30));
    assert!(sub.bounds().is_empty());
    assert!(!sub.shares_storage_with(&image));

    // Writes to the empty view go nowhere.
    sub.set_gray_s16(20, 20, GrayS16::WHITE);
    assert!(image.to_bytes().iter().all(|&b| b == 0));
}

#[test]
fn sub_image_at_bottom_right() {
    let image = GrayS16Image::new(Rect::new(0, 0, 4, 4));
    let corner = image.sub_image(Rect::new(3, 3, 4, 4));
    assert_eq!(corner.byte_len(), 2);

    corner.set_gray_s16(3, 3, GrayS16::new(0x0102));
    assert_eq!(image.to_bytes()[30..], [0x01, 0x02]);
}

#[test]
fn clone_shares_pixels() {
    let image = GrayS16Image::new(Rect::new(0, 0, 2, 2));
    let alias = image.clone();
    alias.set_gray_s16(1, 1, GrayS16::new(77));
    assert_eq!(image.gray_s16_at(1, 1), GrayS16::new(77));
}

#[test]
fn from_bytes_with_padding() {
    // Two rows of two pixels, with a stride of three pixels.
    let bytes = [0x00, 0x01, 0x00, 0x02, 0xaa, 0xaa, 0xff, 0xff, 0x80, 0x00];
    let image = GrayS16Image::from_bytes(&bytes, 6, Rect::new(1, 1, 3, 3)).expect("valid layout");

    assert_eq!(image.gray_s16_at(1, 1), GrayS16::new(1));
    assert_eq!(image.gray_s16_at(2, 1), GrayS16::new(2));
    assert_eq!(image.gray_s16_at(1, 2), GrayS16::new(-1));
    assert_eq!(image.gray_s16_at(2, 2), GrayS16::new(i16::MIN));
}

#[test]
fn from_bytes_rejects_short_buffers() {
    let err = GrayS16Image::from_bytes(&[0; 3], 4, Rect::new(0, 0, 2, 1)).unwrap_err();
    assert_eq!(err.to_string(), "Image requires 4 bytes but buffer has only 3");

    let err = GrayS16Image::from_bytes(&[0; 16], 2, Rect::new(0, 0, 2, 2)).unwrap_err();
    assert_eq!(err.to_string(), "Stride of 2 bytes is shorter than a row of 4 bytes");
}

#[test]
fn opaque() {
    let image = GrayS16Image::new(Rect::new(0, 0, 10, 10));
    assert!(image.opaque());
    image.set_gray_s16(0, 0, GrayS16::BLACK);
    assert!(image.opaque());
}

#[test]
fn color_model_converts() {
    let image = GrayS16Image::new(Rect::new(0, 0, 1, 1));
    let model = image.color_model();
    assert_eq!(model.convert(&Rgba { r: 0, g: 0, b: 255, a: 255 }), GrayS16::new(-25297));
    assert_eq!(model.convert(&GrayS16::new(3)), GrayS16::new(3));
}

/// Generic code that only knows the image capabilities.
fn fill<I: ImageMut>(image: &mut I, color: &dyn Color) {
    let bounds = image.bounds();
    for y in bounds.min.y..bounds.max.y {
        for x in bounds.min.x..bounds.max.x {
            image.set(x, y, color);
        }
    }
}

fn count_equal<I: Image>(image: &I, pixel: I::Pixel) -> usize
where
    I::Pixel: PartialEq,
{
    let bounds = image.bounds();
    (bounds.min.y..bounds.max.y)
        .flat_map(|y| (bounds.min.x..bounds.max.x).map(move |x| Point::new(x, y)))
        .filter(|p| image.at(p.x, p.y) == pixel)
        .count()
}

#[test]
fn through_generic_capabilities() {
    let image = GrayS16Image::new(Rect::new(0, 0, 6, 6));
    let mut window = SubImage::sub_image(&image, Rect::new(2, 2, 4, 4));
    fill(&mut window, &Gray16 { y: 0xffff });

    assert_eq!(count_equal(&image, GrayS16::WHITE), 4);
    assert_eq!(count_equal(&image, GrayS16::new(0)), 32);
}
