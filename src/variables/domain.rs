use std::collections::HashSet;
use std::rc::Rc;

use crate::basic_types::Value;

/// A finite, ordered sequence of distinct admissible values for a [`super::Variable`].
///
/// The sequence is materialised eagerly at construction time; iteration order is the
/// order values are reported in (user-visible insertion order for sets, ascending
/// order for ranges).
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    values: Rc<Vec<Value>>,
}

impl Domain {
    /// The domain's values, in iteration order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// The number of values in the domain.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` if the domain has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn from_interval(lo: i64, hi: i64) -> Domain {
        let values = if lo > hi {
            Vec::new()
        } else {
            (lo..=hi).map(Value::Int).collect()
        };
        Domain {
            values: Rc::new(values),
        }
    }

    pub(crate) fn from_set(values: impl IntoIterator<Item = i64>) -> Domain {
        let mut seen = HashSet::new();
        let mut ordered = Vec::new();
        for v in values {
            if seen.insert(v) {
                ordered.push(Value::Int(v));
            }
        }
        Domain {
            values: Rc::new(ordered),
        }
    }

    pub(crate) fn from_stepped_range(lo: f64, hi: f64, step: f64) -> Result<Domain, String> {
        if step <= 0.0 {
            return Err(format!("step must be positive, got {step}"));
        }
        let mut values = Vec::new();
        let mut current = lo;
        // Naive repeated addition: rounding artefacts near the upper bound are
        // observable and intentionally not smoothed out.
        while current <= hi {
            values.push(Value::Float(current));
            current += step;
        }
        Ok(Domain {
            values: Rc::new(values),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_domain_is_inclusive() {
        let d = Domain::from_interval(1, 3);
        assert_eq!(d.values(), [Value::Int(1), Value::Int(2), Value::Int(3)]);
    }

    #[test]
    fn set_domain_deduplicates_preserving_order() {
        let d = Domain::from_set([3, 1, 3, 2, 1]);
        assert_eq!(d.values(), [Value::Int(3), Value::Int(1), Value::Int(2)]);
    }

    #[test]
    fn stepped_range_rejects_nonpositive_step() {
        assert!(Domain::from_stepped_range(0.0, 1.0, 0.0).is_err());
        assert!(Domain::from_stepped_range(0.0, 1.0, -0.5).is_err());
    }

    #[test]
    fn stepped_range_includes_last_value_at_or_below_hi() {
        let d = Domain::from_stepped_range(0.0, 1.0, 0.5).unwrap();
        assert_eq!(
            d.values(),
            [Value::Float(0.0), Value::Float(0.5), Value::Float(1.0)]
        );
    }
}
