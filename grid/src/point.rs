use std::ops::{Div, DivAssign, Mul, MulAssign};
use std::str::FromStr;

use derive_more::{Add, AddAssign, Display, From, Into, Neg, Sub, SubAssign};

use crate::error::{GridError, InvalidArgument};

/// Integer 2D point/vector. Ordered by `x`, then `y`.
#[derive(
    Debug,
    Display,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    From,
    Into,
    Add,
    Sub,
    Neg,
    AddAssign,
    SubAssign,
)]
#[display(fmt = "{} {}", x, y)]
pub struct Point2i {
    pub x: i32,
    pub y: i32,
}

impl Point2i {
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn set(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    pub const fn pos(self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// 0 is x, 1 is y
    pub const fn elem(self, index: usize) -> Option<i32> {
        match index {
            0 => Some(self.x),
            1 => Some(self.y),
            _ => None,
        }
    }

    pub const fn is_zero(self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Moves in place and returns the new position
    pub fn move_by(&mut self, delta: impl Into<Point2i>) -> Self {
        *self += delta.into();
        *self
    }

    pub fn moved_by(self, delta: impl Into<Point2i>) -> Self {
        self + delta.into()
    }

    fn map(self, f: impl Fn(i32) -> i32) -> Self {
        Self::new(f(self.x), f(self.y))
    }
}

impl Mul for Point2i {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Div for Point2i {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl Mul<i32> for Point2i {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self::Output {
        self.map(|n| n * rhs)
    }
}

impl Div<i32> for Point2i {
    type Output = Self;

    fn div(self, rhs: i32) -> Self::Output {
        self.map(|n| n / rhs)
    }
}

impl Mul<Point2i> for i32 {
    type Output = Point2i;

    fn mul(self, rhs: Point2i) -> Self::Output {
        rhs * self
    }
}

// float scaling truncates towards zero
macro_rules! scale_by_float {
    ($($float:ty),+) => {
        $(
            impl Mul<$float> for Point2i {
                type Output = Self;

                fn mul(self, rhs: $float) -> Self::Output {
                    self.map(|n| (n as $float * rhs) as i32)
                }
            }

            impl Div<$float> for Point2i {
                type Output = Self;

                fn div(self, rhs: $float) -> Self::Output {
                    self.map(|n| (n as $float / rhs) as i32)
                }
            }

            impl Mul<Point2i> for $float {
                type Output = Point2i;

                fn mul(self, rhs: Point2i) -> Self::Output {
                    rhs * self
                }
            }

            impl MulAssign<$float> for Point2i {
                fn mul_assign(&mut self, rhs: $float) {
                    *self = *self * rhs;
                }
            }

            impl DivAssign<$float> for Point2i {
                fn div_assign(&mut self, rhs: $float) {
                    *self = *self / rhs;
                }
            }
        )+
    };
}

scale_by_float!(f32, f64);

impl MulAssign for Point2i {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Point2i {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl MulAssign<i32> for Point2i {
    fn mul_assign(&mut self, rhs: i32) {
        *self = *self * rhs;
    }
}

impl DivAssign<i32> for Point2i {
    fn div_assign(&mut self, rhs: i32) {
        *self = *self / rhs;
    }
}

/// Parses `"x y"`, the same format as `Display` writes
impl FromStr for Point2i {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || GridError::from(InvalidArgument::Point(s.to_owned()));

        let mut parts = s.split_whitespace().map(str::parse::<i32>);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(Ok(x)), Some(Ok(y)), None) => Ok(Self::new(x, y)),
            _ => Err(bad()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let a = Point2i::new(3, -4);
        let b = Point2i::new(1, 2);

        assert_eq!(a + b, Point2i::new(4, -2));
        assert_eq!(a - b, Point2i::new(2, -6));
        assert_eq!(-a, Point2i::new(-3, 4));
        assert_eq!(a * b, Point2i::new(3, -8));
        assert_eq!(a / b, Point2i::new(3, -2));
        assert_eq!(a * 2, Point2i::new(6, -8));
        assert_eq!(2 * a, a * 2);
        assert_eq!(a / 2, Point2i::new(1, -2));

        let mut c = a;
        c += b;
        c -= Point2i::new(0, 1);
        assert_eq!(c, Point2i::new(4, -3));
        c *= 3;
        assert_eq!(c, Point2i::new(12, -9));
        c /= Point2i::new(4, 3);
        assert_eq!(c, Point2i::new(3, -3));
    }

    #[test]
    fn float_scaling_truncates() {
        let p = Point2i::new(5, -5);
        assert_eq!(p * 0.5f32, Point2i::new(2, -2));
        assert_eq!(p / 2.0f64, Point2i::new(2, -2));
        assert_eq!(1.5f64 * p, Point2i::new(7, -7));

        let mut q = p;
        q *= 2.5f32;
        assert_eq!(q, Point2i::new(12, -12));
    }

    #[test]
    fn ordering_is_x_then_y() {
        let mut points = vec![
            Point2i::new(2, 0),
            Point2i::new(1, 5),
            Point2i::new(1, -1),
            Point2i::new(0, 9),
        ];
        points.sort();
        assert_eq!(
            points,
            vec![
                Point2i::new(0, 9),
                Point2i::new(1, -1),
                Point2i::new(1, 5),
                Point2i::new(2, 0),
            ]
        );
        assert!(Point2i::new(1, 2) <= Point2i::new(1, 2));
        assert!(Point2i::new(1, 3) > Point2i::new(1, 2));
    }

    #[test]
    fn helpers() {
        let mut p = Point2i::default();
        assert!(p.is_zero());

        p.set(1, 2);
        assert_eq!(p.pos(), (1, 2));
        assert_eq!(p.elem(0), Some(1));
        assert_eq!(p.elem(1), Some(2));
        assert_eq!(p.elem(2), None);

        assert_eq!(p.moved_by((1, 1)), Point2i::new(2, 3));
        assert_eq!(p, Point2i::new(1, 2));
        assert_eq!(p.move_by(Point2i::new(-1, -2)), Point2i::ZERO);
        assert!(p.is_zero());

        let tuple: (i32, i32) = Point2i::new(7, 8).into();
        assert_eq!(tuple, (7, 8));
    }

    #[test]
    fn text_round_trip() {
        let p = Point2i::new(-3, 12);
        assert_eq!(p.to_string(), "-3 12");
        assert_eq!("-3 12".parse::<Point2i>(), Ok(p));
        assert_eq!("  4\t5 ".parse::<Point2i>(), Ok(Point2i::new(4, 5)));

        assert!("4".parse::<Point2i>().is_err());
        assert!("4 5 6".parse::<Point2i>().is_err());
        assert!("x 5".parse::<Point2i>().is_err());
    }
}
