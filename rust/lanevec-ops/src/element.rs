//! Arithmetic on the primitive element types.

/// A primitive numeric element that lanes can be built from.
///
/// Integer arithmetic wraps, so integer sums are exact modulo `2^bits`
/// regardless of the order in which the elements are combined. Float
/// arithmetic follows IEEE 754.
pub trait Element: bytemuck::Pod + PartialEq + std::fmt::Debug {
    const ZERO: Self;

    fn add(self, rhs: Self) -> Self;

    fn sub(self, rhs: Self) -> Self;

    fn mul(self, rhs: Self) -> Self;

    /// Lossy conversion used to compare results with a tolerance.
    fn to_f64(self) -> f64;
}

macro_rules! impl_int_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                const ZERO: Self = 0;

                #[inline(always)]
                fn add(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline(always)]
                fn sub(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }

                #[inline(always)]
                fn mul(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }

                #[inline(always)]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

macro_rules! impl_float_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                const ZERO: Self = 0.0;

                #[inline(always)]
                fn add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline(always)]
                fn sub(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline(always)]
                fn mul(self, rhs: Self) -> Self {
                    self * rhs
                }

                #[inline(always)]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_int_element!(u8, u16, u32, u64, i8, i16, i32, i64);
impl_float_element!(f32, f64);
