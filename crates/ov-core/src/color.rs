use core::fmt;

/// One RGBA pixel, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Builds a pixel from wide channel values, clamping each to `[0, 255]`.
    pub fn clamped(r: i32, g: i32, b: i32, a: i32) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
            a: clamp_channel(a),
        }
    }

    pub const fn from_array(c: [u8; 4]) -> Self {
        Self {
            r: c[0],
            g: c[1],
            b: c[2],
            a: c[3],
        }
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Canonical, hashable identity of a pixel color.
///
/// Two pixels share a key iff their clamped channels are equal. The key
/// renders as `#rrggbbaa`, which is also the `fill` value in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorKey([u8; 4]);

impl ColorKey {
    pub fn from_channels(r: i32, g: i32, b: i32, a: i32) -> Self {
        Self::from(Rgba::clamped(r, g, b, a))
    }

    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl From<Rgba> for ColorKey {
    fn from(c: Rgba) -> Self {
        Self(c.to_array())
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

#[inline]
fn clamp_channel(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}
