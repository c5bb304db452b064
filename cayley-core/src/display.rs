//! Text rendering of algebra elements.
//!
//! The canonical form is `(a0+a1u1-a2u2…)`: the real coordinate, then each
//! further coordinate with an explicit sign and its unit name. Unit names
//! come from an explicit [`Units`] value; the plain [`Display`] impl uses
//! `e1 … e(2ⁿ−1)`.

use std::borrow::Cow;
use std::fmt::{self, Display, Write};

use dashu::integer::IBig;
use dashu::rational::RBig;

use crate::{Algebra, AlgebraConfig, BigFloat, Doubling, Pair};

/// How a scalar splits into sign and magnitude text.
pub trait ScalarFormat {
    /// `(negative, magnitude)`
    fn sign_and_magnitude(&self) -> (bool, String);

    /// Non-finite values carry their sign even in leading position.
    fn always_signed(&self) -> bool {
        false
    }
}

fn split_sign(text: String) -> (bool, String) {
    match text.strip_prefix('-') {
        Some(magnitude) => (true, magnitude.to_string()),
        None => (false, text),
    }
}

macro_rules! display_scalar_format {
    ($($t:ty),*) => {
        $(
            impl ScalarFormat for $t {
                fn sign_and_magnitude(&self) -> (bool, String) {
                    split_sign(self.to_string())
                }
            }
        )*
    };
}

display_scalar_format!(i64, IBig, RBig, BigFloat);

impl ScalarFormat for f64 {
    fn sign_and_magnitude(&self) -> (bool, String) {
        let magnitude = if self.is_nan() {
            "NaN".to_string()
        } else if self.is_infinite() {
            "Inf".to_string()
        } else {
            self.abs().to_string()
        };
        (self.is_sign_negative(), magnitude)
    }

    fn always_signed(&self) -> bool {
        !self.is_finite()
    }
}

/// Per-context unit names, indexed from 1 in flat coordinate order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Units {
    names: Vec<String>,
}

impl Units {
    pub fn new<I, T>(names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// `e1 … e{count}`
    pub fn numbered(count: usize) -> Self {
        Self::new((1..=count).map(|k| format!("e{k}")))
    }

    pub fn from_config(config: &AlgebraConfig) -> Self {
        Self::new(config.units.iter().copied())
    }

    /// Name of unit `k` (1-based). Indices past the table fall back to `e{k}`.
    pub fn name(&self, k: usize) -> Cow<'_, str> {
        match k.checked_sub(1).and_then(|i| self.names.get(i)) {
            Some(name) => Cow::Borrowed(name.as_str()),
            None => Cow::Owned(format!("e{k}")),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Write `(a0+a1u1…)` for the given coordinates.
pub fn write_coordinates<S: ScalarFormat, W: Write>(
    out: &mut W,
    coords: &[S],
    units: &Units,
) -> fmt::Result {
    out.write_char('(')?;
    for (k, coord) in coords.iter().enumerate() {
        let (negative, magnitude) = coord.sign_and_magnitude();
        if negative {
            out.write_char('-')?;
        } else if k > 0 || coord.always_signed() {
            out.write_char('+')?;
        }
        out.write_str(&magnitude)?;
        if k > 0 {
            out.write_str(&units.name(k))?;
        }
    }
    out.write_char(')')
}

/// Helper returned by [`Pair::display_with`].
pub struct DisplayWith<'a, A> {
    value: &'a A,
    units: &'a Units,
}

impl<A: Algebra> Display for DisplayWith<'_, A>
where
    A::Scalar: ScalarFormat,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_coordinates(f, &self.value.to_flat(), self.units)
    }
}

impl<B: Algebra, K: Doubling> Pair<B, K>
where
    B::Scalar: ScalarFormat,
{
    /// Render with an explicit unit table.
    pub fn display_with<'a>(&'a self, units: &'a Units) -> DisplayWith<'a, Self> {
        DisplayWith { value: self, units }
    }
}

impl<B: Algebra, K: Doubling> Display for Pair<B, K>
where
    B::Scalar: ScalarFormat,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_coordinates(f, &self.to_flat(), &Units::numbered(Self::DIM - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Complex, Octonion, QUATERNION_CONFIG};

    #[test]
    fn default_units_are_numbered() {
        let z = Complex::from_pair(3i64, -4);
        assert_eq!(z.to_string(), "(3-4e1)");
    }

    #[test]
    fn configured_units() {
        let units = Units::from_config(&QUATERNION_CONFIG);
        let q = crate::Quaternion::<i64>::from_flat(&[1, -2, 0, 4]).unwrap();
        assert_eq!(q.display_with(&units).to_string(), "(1-2i+0j+4k)");
    }

    #[test]
    fn octonion_last_unit_is_seventh() {
        let o = Octonion::<i64>::from_flat(&[0, 0, 0, 0, 0, 0, 0, 9]).unwrap();
        assert_eq!(o.to_string(), "(0+0e1+0e2+0e3+0e4+0e5+0e6+9e7)");
    }

    #[test]
    fn f64_special_values() {
        let z = Complex::from_pair(f64::INFINITY, f64::NEG_INFINITY);
        assert_eq!(z.to_string(), "(+Inf-Infe1)");
        let n = Complex::from_pair(f64::NAN, -f64::NAN);
        assert_eq!(n.to_string(), "(+NaN-NaNe1)");
    }

    #[test]
    fn f64_signed_zero() {
        let z = Complex::from_pair(-0.0f64, 0.0);
        assert_eq!(z.to_string(), "(-0+0e1)");
    }

    #[test]
    fn missing_unit_names_fall_back() {
        let units = Units::new(["i"]);
        assert_eq!(units.name(1), "i");
        assert_eq!(units.name(3), "e3");
    }
}
