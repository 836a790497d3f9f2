/// Hyperbolic discount: `W(t) = 1 / (1 + k·t)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Discount {
    k: f64,
}

impl Discount {
    #[must_use]
    pub fn new(k: f64) -> Self {
        Self { k }
    }

    /// Returns the discount weight at time `t`.
    #[must_use]
    pub fn weight(&self, t: f64) -> f64 {
        1.0 / (1.0 + self.k * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn weight_is_one_at_zero() {
        for k in [0.1, 1.0, 5.0] {
            assert_eq!(Discount::new(k).weight(0.0), 1.0);
        }
    }

    #[test]
    fn weight_strictly_decreases() {
        for k in [0.1, 1.0, 5.0] {
            let discount = Discount::new(k);
            let mut prev = discount.weight(0.0);
            for i in 1..=200 {
                let t = f64::from(i) * 0.1;
                let w = discount.weight(t);
                assert!(w < prev, "W({t}) = {w} not below {prev} for k = {k}");
                prev = w;
            }
        }
    }

    #[test]
    fn known_value() {
        assert_relative_eq!(Discount::new(1.0).weight(3.0), 0.25);
    }
}
