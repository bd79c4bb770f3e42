use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Challenge difficulty as a finite number, zero when unknown.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Difficulty(f64);

impl Difficulty {
    pub const ZERO: Self = Self(0.0);

    /// Wraps `value`, replacing NaN and infinities with zero.
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value)
        } else {
            Self::ZERO
        }
    }

    /// Loose numeric reading of a raw cell value.
    ///
    /// Numbers are kept, strings are trimmed and parsed as decimals, and
    /// everything else (null, booleans, arrays, objects, unparsable or
    /// non-finite text) counts as zero.
    pub fn coerce(value: &Value) -> Self {
        let parsed = match value {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => parse_decimal(text),
            Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
        };

        match parsed {
            Some(difficulty) => Self::new(difficulty),
            None => {
                if !value.is_null() {
                    log::debug!("Non-numeric difficulty {value}, counting as 0");
                }
                Self::ZERO
            }
        }
    }

    pub const fn value(self) -> f64 {
        self.0
    }
}

fn parse_decimal(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0.0);
    }
    text.parse().ok()
}

impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::coerce(&value))
    }
}

impl Serialize for Difficulty {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let value = self.0;
        // i64::MAX as f64 rounds up, hence the strict upper bound
        if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
            serializer.serialize_i64(value as i64)
        } else {
            serializer.serialize_f64(value)
        }
    }
}

/// Explicit boolean coercion for loosely typed flags.
///
/// `false`, zero, NaN, the empty string, `None`, `()` and JSON `null` are
/// falsy. Every other value, including empty arrays and objects, is truthy.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for () {
    fn is_truthy(&self) -> bool {
        false
    }
}

macro_rules! impl_truthy_for_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Truthy for $ty {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(|value| value.is_truthy())
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(flag) => *flag,
            Value::Number(number) => number.as_f64().is_some_and(|value| value.is_truthy()),
            Value::String(text) => text.is_truthy(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coerce_keeps_numbers_and_parses_numeric_strings() {
        assert_eq!(Difficulty::coerce(&json!(7)).value(), 7.0);
        assert_eq!(Difficulty::coerce(&json!(2.5)).value(), 2.5);
        assert_eq!(Difficulty::coerce(&json!("4")).value(), 4.0);
        assert_eq!(Difficulty::coerce(&json!(" 6 ")).value(), 6.0);
        assert_eq!(Difficulty::coerce(&json!("-3")).value(), -3.0);
    }

    #[test]
    fn coerce_falls_back_to_zero_for_anything_else() {
        for raw in [
            json!(null),
            json!(""),
            json!("hard"),
            json!("NaN"),
            json!("inf"),
            json!(true),
            json!([4]),
            json!({ "value": 4 }),
        ] {
            assert_eq!(Difficulty::coerce(&raw), Difficulty::ZERO, "{raw}");
        }
    }

    #[test]
    fn new_rejects_non_finite_values() {
        assert_eq!(Difficulty::new(f64::NAN), Difficulty::ZERO);
        assert_eq!(Difficulty::new(f64::INFINITY), Difficulty::ZERO);
        assert_eq!(Difficulty::new(3.0).value(), 3.0);
    }

    #[test]
    fn whole_difficulties_serialize_as_integers() {
        assert_eq!(serde_json::to_value(Difficulty::new(8.0)).unwrap(), json!(8));
        assert_eq!(serde_json::to_value(Difficulty::new(1.5)).unwrap(), json!(1.5));
    }

    #[test]
    fn truthiness_follows_loose_boolean_rules() {
        assert!(!false.is_truthy());
        assert!(!().is_truthy());
        assert!(!0_i32.is_truthy());
        assert!(!0.0_f64.is_truthy());
        assert!(!f64::NAN.is_truthy());
        assert!(!"".is_truthy());
        assert!(!None::<bool>.is_truthy());
        assert!(!json!(null).is_truthy());
        assert!(!json!(0).is_truthy());
        assert!(!json!("").is_truthy());

        assert!(true.is_truthy());
        assert!((-1_i64).is_truthy());
        assert!(0.1_f32.is_truthy());
        assert!("false".is_truthy());
        assert!(Some(1_u8).is_truthy());
        assert!(json!([]).is_truthy());
        assert!(json!({}).is_truthy());
    }
}
