//! Shared trigonometric lookup tables.
//!
//! The Q10 pair is the authoritative data for the hardware path: signed
//! 16-bit values in `[-1024, 1024]`, one entry per degree over `[0, 180)`.
//! Index domain violations are caller bugs and are not defended against.
//!
//! The floating pair backs the reference variant in [`crate::floating`] and
//! the cross-validation tests; it never feeds the integer path.

use crate::THETAS;

pub static SIN_TABLE: [i16; THETAS] = [
    0x0, 0x11, 0x23, 0x35, 0x47, 0x59, 0x6b, 0x7c, 0x8e, 0xa0, 0xb1, 0xc3, 0xd4, 0xe6, 0xf7,
    0x109, 0x11a, 0x12b, 0x13c, 0x14d, 0x15e, 0x16e, 0x17f, 0x190, 0x1a0, 0x1b0, 0x1c0, 0x1d0,
    0x1e0, 0x1f0, 0x200, 0x20f, 0x21e, 0x22d, 0x23c, 0x24b, 0x259, 0x268, 0x276, 0x284, 0x292,
    0x29f, 0x2ad, 0x2ba, 0x2c7, 0x2d4, 0x2e0, 0x2ec, 0x2f8, 0x304, 0x310, 0x31b, 0x326, 0x331,
    0x33c, 0x346, 0x350, 0x35a, 0x364, 0x36d, 0x376, 0x37f, 0x388, 0x390, 0x398, 0x3a0, 0x3a7,
    0x3ae, 0x3b5, 0x3bb, 0x3c2, 0x3c8, 0x3cd, 0x3d3, 0x3d8, 0x3dd, 0x3e1, 0x3e5, 0x3e9, 0x3ed,
    0x3f0, 0x3f3, 0x3f6, 0x3f8, 0x3fa, 0x3fc, 0x3fd, 0x3fe, 0x3ff, 0x3ff, 0x400, 0x3ff, 0x3ff,
    0x3fe, 0x3fd, 0x3fc, 0x3fa, 0x3f8, 0x3f6, 0x3f3, 0x3f0, 0x3ed, 0x3e9, 0x3e5, 0x3e1, 0x3dd,
    0x3d8, 0x3d3, 0x3cd, 0x3c8, 0x3c2, 0x3bb, 0x3b5, 0x3ae, 0x3a7, 0x3a0, 0x398, 0x390, 0x388,
    0x37f, 0x376, 0x36d, 0x364, 0x35a, 0x350, 0x346, 0x33c, 0x331, 0x326, 0x31b, 0x310, 0x304,
    0x2f8, 0x2ec, 0x2e0, 0x2d4, 0x2c7, 0x2ba, 0x2ad, 0x29f, 0x292, 0x284, 0x276, 0x268, 0x259,
    0x24b, 0x23c, 0x22d, 0x21e, 0x20f, 0x200, 0x1f0, 0x1e0, 0x1d0, 0x1c0, 0x1b0, 0x1a0, 0x190,
    0x17f, 0x16e, 0x15e, 0x14d, 0x13c, 0x12b, 0x11a, 0x109, 0xf7, 0xe6, 0xd4, 0xc3, 0xb1, 0xa0,
    0x8e, 0x7c, 0x6b, 0x59, 0x47, 0x35, 0x23, 0x11
];

pub static COS_TABLE: [i16; THETAS] = [
    0x400, 0x3ff, 0x3ff, 0x3fe, 0x3fd, 0x3fc, 0x3fa, 0x3f8, 0x3f6, 0x3f3, 0x3f0, 0x3ed, 0x3e9,
    0x3e5, 0x3e1, 0x3dd, 0x3d8, 0x3d3, 0x3cd, 0x3c8, 0x3c2, 0x3bb, 0x3b5, 0x3ae, 0x3a7, 0x3a0,
    0x398, 0x390, 0x388, 0x37f, 0x376, 0x36d, 0x364, 0x35a, 0x350, 0x346, 0x33c, 0x331, 0x326,
    0x31b, 0x310, 0x304, 0x2f8, 0x2ec, 0x2e0, 0x2d4, 0x2c7, 0x2ba, 0x2ad, 0x29f, 0x292, 0x284,
    0x276, 0x268, 0x259, 0x24b, 0x23c, 0x22d, 0x21e, 0x20f, 0x200, 0x1f0, 0x1e0, 0x1d0, 0x1c0,
    0x1b0, 0x1a0, 0x190, 0x17f, 0x16e, 0x15e, 0x14d, 0x13c, 0x12b, 0x11a, 0x109, 0xf7, 0xe6, 0xd4,
    0xc3, 0xb1, 0xa0, 0x8e, 0x7c, 0x6b, 0x59, 0x47, 0x35, 0x23, 0x11, 0x0, -0x11, -0x23, -0x35,
    -0x47, -0x59, -0x6b, -0x7c, -0x8e, -0xa0, -0xb1, -0xc3, -0xd4, -0xe6, -0xf7, -0x109, -0x11a,
    -0x12b, -0x13c, -0x14d, -0x15e, -0x16e, -0x17f, -0x190, -0x1a0, -0x1b0, -0x1c0, -0x1d0,
    -0x1e0, -0x1f0, -0x200, -0x20f, -0x21e, -0x22d, -0x23c, -0x24b, -0x259, -0x268, -0x276,
    -0x284, -0x292, -0x29f, -0x2ad, -0x2ba, -0x2c7, -0x2d4, -0x2e0, -0x2ec, -0x2f8, -0x304,
    -0x310, -0x31b, -0x326, -0x331, -0x33c, -0x346, -0x350, -0x35a, -0x364, -0x36d, -0x376,
    -0x37f, -0x388, -0x390, -0x398, -0x3a0, -0x3a7, -0x3ae, -0x3b5, -0x3bb, -0x3c2, -0x3c8,
    -0x3cd, -0x3d3, -0x3d8, -0x3dd, -0x3e1, -0x3e5, -0x3e9, -0x3ed, -0x3f0, -0x3f3, -0x3f6,
    -0x3f8, -0x3fa, -0x3fc, -0x3fd, -0x3fe, -0x3ff, -0x3ff
];

/// Floating sine/cosine at one-degree resolution, single precision.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct FloatTables {
    pub sin: [f32; THETAS],
    pub cos: [f32; THETAS],
}

/// Process-wide floating tables, computed once on first use.
#[cfg(feature = "std")]
pub fn float_tables() -> &'static FloatTables {
    use std::sync::OnceLock;

    static TABLES: OnceLock<FloatTables> = OnceLock::new();
    TABLES.get_or_init(|| {
        let mut sin = [0.0f32; THETAS];
        let mut cos = [0.0f32; THETAS];
        for theta in 0..THETAS {
            let radians = (theta as f64).to_radians();
            sin[theta] = radians.sin() as f32;
            cos[theta] = radians.cos() as f32;
        }
        FloatTables { sin, cos }
    })
}
