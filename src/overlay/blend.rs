use std::fmt;
use std::str::FromStr;

use crate::foundation::error::OsdError;
use crate::foundation::math::{quantize_trunc, unit};
use crate::foundation::pixel::Pixel;

/// Pixel-combination rule applied by an overlay.
///
/// Every rule is a pure function of `(back, front)`: it never looks at neighbouring pixels or at
/// the traversal order, so an overlay may be evaluated in any order with identical results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// The payload overwrites the canvas, alpha included.
    ReplaceAll,
    /// Payload pixels with non-zero alpha overwrite the canvas; fully transparent ones are skipped.
    ReplaceNonAlpha,
    /// Porter-Duff "over" for premultiplied inputs. The result stays premultiplied.
    OverPremultiplied,
    /// Porter-Duff "over" for straight (non-premultiplied) inputs.
    OverStraight,
}

impl Algorithm {
    /// All algorithms, in declaration order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::ReplaceAll,
        Algorithm::ReplaceNonAlpha,
        Algorithm::OverPremultiplied,
        Algorithm::OverStraight,
    ];

    /// Combine a canvas pixel (`back`) with a payload pixel (`front`).
    #[inline]
    pub fn apply(self, back: Pixel, front: Pixel) -> Pixel {
        match self {
            Algorithm::ReplaceAll => replace_all(back, front),
            Algorithm::ReplaceNonAlpha => replace_non_alpha(back, front),
            Algorithm::OverPremultiplied => over_premultiplied(back, front),
            Algorithm::OverStraight => over_straight(back, front),
        }
    }

    /// Stable snake_case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::ReplaceAll => "replace_all",
            Algorithm::ReplaceNonAlpha => "replace_non_alpha",
            Algorithm::OverPremultiplied => "over_premultiplied",
            Algorithm::OverStraight => "over_straight",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = OsdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| OsdError::validation(format!("unknown overlay algorithm '{s}'")))
    }
}

/// Returns `front` unconditionally.
#[inline]
pub fn replace_all(_back: Pixel, front: Pixel) -> Pixel {
    front
}

/// Returns `front` when its alpha is non-zero, otherwise `back`.
#[inline]
pub fn replace_non_alpha(back: Pixel, front: Pixel) -> Pixel {
    if front.a() != 0 { front } else { back }
}

/// Premultiplied "over".
///
/// `a = fa + ba*(1-fa)` and `c = fc + bc*(1-fa)` on channels normalized to `[0, 1]`, then
/// re-quantized by truncation. Color channels larger than alpha (not valid premultiplied data)
/// saturate at 255.
///
/// See <https://en.wikipedia.org/wiki/Alpha_compositing>.
pub fn over_premultiplied(back: Pixel, front: Pixel) -> Pixel {
    let fa = unit(front.a());
    let ba = unit(back.a());
    let inv = 1.0 - fa;

    let a = fa + ba * inv;
    let r = unit(front.r()) + unit(back.r()) * inv;
    let g = unit(front.g()) + unit(back.g()) * inv;
    let b = unit(front.b()) + unit(back.b()) * inv;

    Pixel::TRANSPARENT
        .with_a(quantize_trunc(a))
        .with_r(quantize_trunc(r))
        .with_g(quantize_trunc(g))
        .with_b(quantize_trunc(b))
}

/// Straight-alpha "over".
///
/// `a = fa + ba*(1-fa)` and `c = (fc*fa + bc*ba*(1-fa)) / a`. When both inputs are fully
/// transparent `a` is zero and the result is [`Pixel::TRANSPARENT`].
///
/// See <https://en.wikipedia.org/wiki/Alpha_compositing>.
pub fn over_straight(back: Pixel, front: Pixel) -> Pixel {
    let fa = unit(front.a());
    let ba = unit(back.a());
    let inv = 1.0 - fa;

    let a = fa + ba * inv;
    if a <= 0.0 {
        return Pixel::TRANSPARENT;
    }

    let mix = |fc: u8, bc: u8| (unit(fc) * fa + unit(bc) * ba * inv) / a;

    Pixel::TRANSPARENT
        .with_a(quantize_trunc(a))
        .with_r(quantize_trunc(mix(front.r(), back.r())))
        .with_g(quantize_trunc(mix(front.g(), back.g())))
        .with_b(quantize_trunc(mix(front.b(), back.b())))
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/blend.rs"]
mod tests;
