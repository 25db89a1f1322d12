//! Benchmarks pixel access and color conversion on a full image.
use brunch::Bench;

use image_colorext::{GrayS16, Rgba};
use image_grays16::{GrayS16Image, Rect};

#[derive(Debug, Clone, Copy)]
enum Access {
    /// Store signed values directly.
    SetGray,
    /// Store 8-bit colors through the model.
    SetColor,
    /// Read all pixels back.
    Read,
}

#[derive(Debug)]
struct Sweep {
    access: Access,
    sz: u32,
}

impl Sweep {
    fn name(&self) -> String {
        format!("{:?}({})", self.access, self.sz)
    }

    fn prepare(&self) -> impl FnMut() -> i64 {
        let image = GrayS16Image::new(Rect::from_size(self.sz, self.sz));
        let bounds = image.rect();
        let access = self.access;

        move || {
            let mut acc = 0i64;
            for y in bounds.min.y..bounds.max.y {
                for x in bounds.min.x..bounds.max.x {
                    match access {
                        Access::SetGray => image.set_gray_s16(x, y, GrayS16::new((x ^ y) as i16)),
                        Access::SetColor => {
                            let c = (x ^ y) as u8;
                            image.set(x, y, &Rgba { r: c, g: !c, b: c, a: 0xff });
                        }
                        Access::Read => acc += i64::from(image.gray_s16_at(x, y).y),
                    }
                }
            }
            acc
        }
    }
}

fn main() {
    let tests = [
        Sweep {
            access: Access::SetGray,
            sz: 128,
        },
        Sweep {
            access: Access::SetColor,
            sz: 128,
        },
        Sweep {
            access: Access::Read,
            sz: 128,
        },
        Sweep {
            access: Access::Read,
            sz: 1024,
        },
    ];

    let mut benches = brunch::Benches::default();
    benches.extend(
        tests.map(|sweep| Bench::new(format!("grays16::access::{}", sweep.name())).run(sweep.prepare())),
    );
    benches.finish();
}
