//! 边权与累加器
//!
//! 调用方通过 `Fn(&E) -> W` 从边负载中提取权重。整数权重统一放宽到 `i64`
//! 累加，浮点权重统一放宽到 `f64` 累加。不实现 `Weight` 的类型在编译期即被拒绝；
//! 无法无损放入累加器的权重值（超出 `i64` 的无符号数、NaN、无穷大）在运行期
//! 以 `GraphError::InvalidWeightType` 立即失败，而不是被截断。累加时的溢出
//! 同样立即失败（`GraphError::WeightOverflow`），不会落到"不可达"哨兵上。

use std::fmt::Debug;

use crate::core::error::{GraphError, GraphResult};

/// 距离/总权重的累加类型
pub trait Measure: Copy + PartialOrd + Debug + Send + Sync + 'static {
    fn zero() -> Self;

    /// 表示"不可达"的哨兵值，大于任何可行路径之和
    fn infinity() -> Self;

    fn is_infinite(self) -> bool;

    fn is_negative(self) -> bool;

    /// 加法；任一操作数为无穷时结果为无穷，
    /// 有限操作数之和溢出或与哨兵相撞时返回 `WeightOverflow`
    fn combine(self, other: Self) -> GraphResult<Self>;
}

impl Measure for i64 {
    fn zero() -> Self {
        0
    }

    fn infinity() -> Self {
        i64::MAX
    }

    fn is_infinite(self) -> bool {
        self == i64::MAX
    }

    fn is_negative(self) -> bool {
        self < 0
    }

    fn combine(self, other: Self) -> GraphResult<Self> {
        if self.is_infinite() || other.is_infinite() {
            return Ok(i64::MAX);
        }
        match self.checked_add(other) {
            Some(sum) if sum != i64::MAX => Ok(sum),
            _ => Err(GraphError::WeightOverflow(format!("{} + {}", self, other))),
        }
    }
}

impl Measure for f64 {
    fn zero() -> Self {
        0.0
    }

    fn infinity() -> Self {
        f64::INFINITY
    }

    fn is_infinite(self) -> bool {
        self == f64::INFINITY
    }

    fn is_negative(self) -> bool {
        self < 0.0
    }

    fn combine(self, other: Self) -> GraphResult<Self> {
        if self.is_infinite() || other.is_infinite() {
            return Ok(f64::INFINITY);
        }
        let sum = self + other;
        if sum.is_finite() {
            Ok(sum)
        } else {
            Err(GraphError::WeightOverflow(format!("{} + {}", self, other)))
        }
    }
}

/// 可用作边权的类型
pub trait Weight: Copy + Debug {
    type Accum: Measure;

    /// 放宽到累加类型
    fn widen(self) -> GraphResult<Self::Accum>;
}

macro_rules! integral_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                type Accum = i64;

                fn widen(self) -> GraphResult<i64> {
                    match i64::try_from(self) {
                        Ok(v) if v != i64::MAX => Ok(v),
                        _ => Err(GraphError::InvalidWeightType(format!(
                            "{} ({}) 超出 i64 累加范围",
                            self,
                            stringify!($t)
                        ))),
                    }
                }
            }
        )*
    };
}

integral_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Weight for f64 {
    type Accum = f64;

    fn widen(self) -> GraphResult<f64> {
        if self.is_finite() {
            Ok(self)
        } else {
            Err(GraphError::InvalidWeightType(format!(
                "浮点权重必须是有限值, 实际为 {}",
                self
            )))
        }
    }
}

impl Weight for f32 {
    type Accum = f64;

    fn widen(self) -> GraphResult<f64> {
        f64::from(self).widen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_widening() {
        assert_eq!(7u8.widen(), Ok(7i64));
        assert_eq!((-3i32).widen(), Ok(-3i64));
        assert_eq!(42usize.widen(), Ok(42i64));
        assert_eq!((-9i128).widen(), Ok(-9i64));
        assert_eq!(12u128.widen(), Ok(12i64));
    }

    #[test]
    fn test_out_of_range_integral_fails_fast() {
        let err = u64::MAX.widen().expect_err("u64::MAX should not fit in test");
        assert!(matches!(err, GraphError::InvalidWeightType(_)));
        // i64::MAX 与"不可达"哨兵冲突
        assert!(i64::MAX.widen().is_err());
        assert!(matches!(
            u128::MAX.widen(),
            Err(GraphError::InvalidWeightType(_))
        ));
        assert!(i128::MIN.widen().is_err());
    }

    #[test]
    fn test_float_widening() {
        assert_eq!(1.5f32.widen(), Ok(1.5f64));
        assert!(f64::NAN.widen().is_err());
        assert!(f64::INFINITY.widen().is_err());
    }

    #[test]
    fn test_combine_with_infinity() {
        assert_eq!(i64::infinity().combine(-5), Ok(i64::MAX));
        assert_eq!(i64::MAX.combine(0), Ok(i64::MAX));
        assert_eq!(3i64.combine(4), Ok(7));
        assert_eq!(f64::infinity().combine(-1.0), Ok(f64::INFINITY));
    }

    #[test]
    fn test_combine_overflow_fails_fast() {
        let err = (i64::MAX - 1)
            .combine(5)
            .expect_err("Overflowing sum should fail in test");
        assert!(matches!(err, GraphError::WeightOverflow(_)));
        assert!(err.is_weight_error());
        // 恰好等于哨兵也不是合法的路径长度
        assert!((i64::MAX - 1).combine(1).is_err());
        assert!(i64::MIN.combine(-1).is_err());
        assert!(f64::MAX.combine(f64::MAX).is_err());
        assert_eq!((i64::MAX - 2).combine(1), Ok(i64::MAX - 1));
    }

    #[test]
    fn test_negativity() {
        assert!(Measure::is_negative(-2i64));
        assert!(!Measure::is_negative(0i64));
        assert!(Measure::is_negative(-0.5f64));
        assert!(!Measure::is_negative(0.0f64));
        assert!(!Measure::is_negative(-0.0f64));
    }
}
