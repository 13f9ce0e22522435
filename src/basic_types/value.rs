use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;

use crate::basic_types::SolverError;

/// A value drawn from a variable's domain, or produced by evaluating an expression.
///
/// Domains are either integer or stepped-float; arithmetic between the two promotes
/// to [`Value::Float`] following the usual widening rule. Two values compare and hash
/// equal when they denote the same number regardless of which variant holds it, so
/// `Value::Int(2) == Value::Float(2.0)`.
#[derive(Debug, Clone, Copy)]
pub enum Value {
    /// A 64-bit integer value.
    Int(i64),
    /// A 64-bit floating-point value.
    Float(f64),
}

impl Value {
    /// The value as an `f64`, regardless of which variant it is stored as.
    pub fn as_f64(self) -> f64 {
        match self {
            Value::Int(i) => i as f64,
            Value::Float(f) => f,
        }
    }

    /// `true` if this value is exactly `0` or `1` and came from (or could come from)
    /// an integer domain, i.e. it is usable as a boolean-variable value.
    pub fn is_zero_or_one(self) -> bool {
        matches!(self, Value::Int(0) | Value::Int(1))
    }

    fn both_int(self, other: Value) -> Option<(i64, i64)> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some((a, b)),
            _ => None,
        }
    }

    pub(crate) fn add(self, other: Value) -> Value {
        match self.both_int(other) {
            Some((a, b)) => Value::Int(a.saturating_add(b)),
            None => Value::Float(self.as_f64() + other.as_f64()),
        }
    }

    pub(crate) fn sub(self, other: Value) -> Value {
        match self.both_int(other) {
            Some((a, b)) => Value::Int(a.saturating_sub(b)),
            None => Value::Float(self.as_f64() - other.as_f64()),
        }
    }

    pub(crate) fn mul(self, other: Value) -> Value {
        match self.both_int(other) {
            Some((a, b)) => Value::Int(a.saturating_mul(b)),
            None => Value::Float(self.as_f64() * other.as_f64()),
        }
    }

    pub(crate) fn div(self, other: Value) -> Result<Value, SolverError> {
        match self.both_int(other) {
            Some((_, 0)) => Err(SolverError::DivisionByZero),
            Some((a, b)) => Ok(Value::Float(a as f64 / b as f64)),
            None => {
                if other.as_f64() == 0.0 {
                    Err(SolverError::DivisionByZero)
                } else {
                    Ok(Value::Float(self.as_f64() / other.as_f64()))
                }
            }
        }
    }

    pub(crate) fn floor_div(self, other: Value) -> Result<Value, SolverError> {
        match self.both_int(other) {
            Some((_, 0)) => Err(SolverError::DivisionByZero),
            Some((a, b)) => Ok(Value::Int(a.div_euclid(b))),
            None => {
                if other.as_f64() == 0.0 {
                    Err(SolverError::DivisionByZero)
                } else {
                    Ok(Value::Float((self.as_f64() / other.as_f64()).floor()))
                }
            }
        }
    }

    pub(crate) fn modulo(self, other: Value) -> Result<Value, SolverError> {
        match self.both_int(other) {
            Some((_, 0)) => Err(SolverError::ModulusByZero),
            Some((a, b)) => Ok(Value::Int(a.rem_euclid(b))),
            None => {
                if other.as_f64() == 0.0 {
                    Err(SolverError::ModulusByZero)
                } else {
                    Ok(Value::Float(self.as_f64().rem_euclid(other.as_f64())))
                }
            }
        }
    }

    pub(crate) fn pow(self, other: Value) -> Value {
        match self.both_int(other) {
            Some((a, b)) if b >= 0 => Value::Int(a.saturating_pow(b as u32)),
            _ => Value::Float(self.as_f64().powf(other.as_f64())),
        }
    }

    pub(crate) fn neg(self) -> Value {
        match self {
            Value::Int(a) => Value::Int(-a),
            Value::Float(a) => Value::Float(-a),
        }
    }

    pub(crate) fn abs(self) -> Value {
        match self {
            Value::Int(a) => Value::Int(a.abs()),
            Value::Float(a) => Value::Float(a.abs()),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.as_f64() == other.as_f64()
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_f64().partial_cmp(&other.as_f64())
    }
}

impl Eq for Value {}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other)
            .expect("Value never holds NaN in a well-formed domain")
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_f64().to_bits().hash(state);
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
        }
    }
}
