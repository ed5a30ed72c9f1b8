//! Pixel element types.
//!
//! Image samples are processed in floating point, but the storage type they
//! came from decides whether results are clamped. [`PixelType`] keeps that
//! information at runtime.

use std::fmt;
use std::str::FromStr;

use burn::tensor::{Element, ElementConversion};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::ImageError;

/// Broad numeric category of a pixel type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelKind {
    Unsigned,
    Signed,
    Float,
}

/// Storage element type of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelType {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    F32,
    F64,
}

impl PixelType {
    /// All supported pixel types.
    pub const ALL: [PixelType; 10] = [
        PixelType::U8,
        PixelType::I8,
        PixelType::U16,
        PixelType::I16,
        PixelType::U32,
        PixelType::I32,
        PixelType::U64,
        PixelType::I64,
        PixelType::F32,
        PixelType::F64,
    ];

    /// Numeric category of the type.
    pub fn kind(self) -> PixelKind {
        match self {
            PixelType::U8 | PixelType::U16 | PixelType::U32 | PixelType::U64 => PixelKind::Unsigned,
            PixelType::I8 | PixelType::I16 | PixelType::I32 | PixelType::I64 => PixelKind::Signed,
            PixelType::F32 | PixelType::F64 => PixelKind::Float,
        }
    }

    /// True for signed and unsigned integer types.
    pub fn is_integer(self) -> bool {
        self.kind() != PixelKind::Float
    }

    /// Representable `[min, max]` range of integer types.
    ///
    /// Floating point types have no fixed range and return `None`.
    /// The 64-bit maxima are the largest `f64` values not above the type maximum.
    pub fn bounds(self) -> Option<(f64, f64)> {
        match self {
            PixelType::U8 => Some((u8::MIN as f64, u8::MAX as f64)),
            PixelType::I8 => Some((i8::MIN as f64, i8::MAX as f64)),
            PixelType::U16 => Some((u16::MIN as f64, u16::MAX as f64)),
            PixelType::I16 => Some((i16::MIN as f64, i16::MAX as f64)),
            PixelType::U32 => Some((u32::MIN as f64, u32::MAX as f64)),
            PixelType::I32 => Some((i32::MIN as f64, i32::MAX as f64)),
            PixelType::U64 => Some((u64::MIN as f64, (u64::MAX - 2047) as f64)),
            PixelType::I64 => Some((i64::MIN as f64, (i64::MAX - 1023) as f64)),
            PixelType::F32 | PixelType::F64 => None,
        }
    }

    /// [`PixelType::bounds`] narrowed to values the float element `E` stores exactly.
    ///
    /// Clamping an `E` tensor to these bounds keeps every sample inside the
    /// type's range, e.g. `i32::MAX` becomes `2147483520.0` for `f32`.
    pub fn bounds_in<E: Element>(self) -> Option<(f64, f64)> {
        self.bounds()
            .map(|(min, max)| (stored_toward::<E>(min, 1.0), stored_toward::<E>(max, -1.0)))
    }

    /// True when `value` survives conversion to the float element `E` unchanged.
    pub fn is_stored_exactly<E: Element>(value: f64) -> bool {
        value.elem::<E>().elem::<f64>() == value
    }

    /// Short lowercase name (`u8`, `i16`, `f32`, ...).
    pub fn name(self) -> &'static str {
        match self {
            PixelType::U8 => "u8",
            PixelType::I8 => "i8",
            PixelType::U16 => "u16",
            PixelType::I16 => "i16",
            PixelType::U32 => "u32",
            PixelType::I32 => "i32",
            PixelType::U64 => "u64",
            PixelType::I64 => "i64",
            PixelType::F32 => "f32",
            PixelType::F64 => "f64",
        }
    }
}

impl fmt::Display for PixelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PixelType {
    type Err = ImageError;

    /// Accepts the short names as well as the long names used by array
    /// libraries (`uint8`, `int16`, `float32`, `double`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pixel_type = match s.trim().to_ascii_lowercase().as_str() {
            "u8" | "uint8" => PixelType::U8,
            "i8" | "int8" => PixelType::I8,
            "u16" | "uint16" => PixelType::U16,
            "i16" | "int16" => PixelType::I16,
            "u32" | "uint32" => PixelType::U32,
            "i32" | "int32" => PixelType::I32,
            "u64" | "uint64" => PixelType::U64,
            "i64" | "int64" => PixelType::I64,
            "f32" | "float32" | "float" | "single" => PixelType::F32,
            "f64" | "float64" | "double" => PixelType::F64,
            _ => return Err(ImageError::unsupported_pixel_type(s)),
        };
        Ok(pixel_type)
    }
}

/// Value of `E` closest to `bound` that does not lie beyond it.
///
/// `inward` is `1.0` for a lower bound and `-1.0` for an upper bound.
fn stored_toward<E: Element>(bound: f64, inward: f64) -> f64 {
    let mut stored = bound.elem::<E>().elem::<f64>();
    let mut delta = 1.0;
    while (stored - bound) * inward < 0.0 {
        stored = (bound + inward * delta).elem::<E>().elem::<f64>();
        delta *= 2.0;
    }
    stored
}

/// Rust primitive that can be stored as an image sample.
pub trait Pixel: Copy + ToPrimitive + Send + Sync + 'static {
    /// Pixel type tag for this primitive.
    const PIXEL_TYPE: PixelType;
}

macro_rules! impl_pixel {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Pixel for $ty {
                const PIXEL_TYPE: PixelType = PixelType::$variant;
            }
        )*
    };
}

impl_pixel!(
    u8 => U8,
    i8 => I8,
    u16 => U16,
    i16 => I16,
    u32 => U32,
    i32 => I32,
    u64 => U64,
    i64 => I64,
    f32 => F32,
    f64 => F64,
);
