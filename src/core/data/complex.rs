use std::ops::{Add, Mul, Sub};

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    /// True when both components differ from `other` by less than `epsilon`.
    #[must_use]
    pub fn is_within(&self, other: Complex, epsilon: f64) -> bool {
        (self.real - other.real).abs() < epsilon && (self.imag - other.imag).abs() < epsilon
    }

    /// Clamps each component into `[min, max]` componentwise.
    #[must_use]
    pub fn clamp(self, min: Complex, max: Complex) -> Self {
        Self {
            real: self.real.clamp(min.real, max.real),
            imag: self.imag.clamp(min.imag, max.imag),
        }
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            real: self.real - other.real,
            imag: self.imag - other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

impl Mul<f64> for Complex {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        Self {
            real: self.real * factor,
            imag: self.imag * factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_squared() {
        let c = Complex::new(3.0, 4.0);
        assert_eq!(c.magnitude_squared(), 25.0); // 3² + 4² = 25
    }

    #[test]
    fn test_magnitude_squared_negative_components() {
        let c = Complex::new(-3.0, -4.0);
        assert_eq!(c.magnitude_squared(), 25.0);
    }

    #[test]
    fn test_add_and_sub_are_inverse() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(-3.0, 7.5);

        assert_eq!((a + b) - b, a);
    }

    #[test]
    fn test_mul() {
        // (1 + 2i) * (3 + 4i) = 3 + 4i + 6i + 8i² = -5 + 10i
        let result = Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0);
        assert_eq!(result, Complex::new(-5.0, 10.0));
    }

    #[test]
    fn test_mul_by_scalar() {
        let result = Complex::new(1.5, -2.0) * 2.0;
        assert_eq!(result, Complex::new(3.0, -4.0));
    }

    #[test]
    fn test_is_within_is_strict_in_both_components() {
        let origin = Complex::ZERO;

        assert!(Complex::new(0.05, -0.05).is_within(origin, 0.1));
        assert!(!Complex::new(0.1, 0.0).is_within(origin, 0.1));
        assert!(!Complex::new(0.0, 0.2).is_within(origin, 0.1));
    }

    #[test]
    fn test_clamp() {
        let min = Complex::new(-3.0, -2.0);
        let max = Complex::new(3.0, 2.0);

        assert_eq!(Complex::new(5.0, -9.0).clamp(min, max), Complex::new(3.0, -2.0));
        assert_eq!(Complex::new(0.5, 1.0).clamp(min, max), Complex::new(0.5, 1.0));
    }
}
