//! Built-in callbacks for the `map` command.

use std::cmp::Ordering;

use anyhow::anyhow;
use clap::ValueEnum;
use logeach_core::{Callback, CallbackError, Invocation, Value};

/// Callback applied to every broadcast row
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum MapOp {
    /// Add the elements (strings concatenate)
    Sum,
    /// Multiply the elements
    Product,
    /// Join the elements as text
    Concat,
    /// Largest element
    Max,
    /// Smallest element
    Min,
    /// Zero-based row index
    Index,
    /// Sum of the elements times the context's `factor`
    Scale,
}

impl MapOp {
    /// Build the callback for this operation.
    pub fn callback(self) -> Callback {
        match self {
            MapOp::Sum => Callback::map(sum),
            MapOp::Product => Callback::new(product),
            MapOp::Concat => Callback::map(|values| {
                Value::from(values.iter().map(ToString::to_string).collect::<String>())
            }),
            MapOp::Max => Callback::new(|inv| extreme(inv, Ordering::Greater)),
            MapOp::Min => Callback::new(|inv| extreme(inv, Ordering::Less)),
            MapOp::Index => Callback::new(|inv| Ok(Value::from(inv.index))),
            MapOp::Scale => Callback::new(scale),
        }
    }
}

fn sum(values: &[Value]) -> Value {
    values
        .iter()
        .cloned()
        .reduce(|acc, v| acc.plus(&v))
        .unwrap_or(Value::Int(0))
}

fn numbers(values: &[Value]) -> Result<Vec<f64>, CallbackError> {
    values
        .iter()
        .map(|v| {
            v.as_f64()
                .ok_or_else(|| anyhow!("non-numeric value `{v}`").into())
        })
        .collect()
}

fn product(inv: &Invocation<'_>) -> Result<Value, CallbackError> {
    let ints: Option<Vec<i64>> = inv
        .values
        .iter()
        .map(|v| match v {
            Value::Int(n) => Some(*n),
            _ => None,
        })
        .collect();
    if let Some(product) = ints.and_then(|ints| ints.into_iter().try_fold(1i64, i64::checked_mul)) {
        return Ok(Value::Int(product));
    }
    Ok(Value::Float(numbers(inv.values)?.into_iter().product()))
}

fn extreme(inv: &Invocation<'_>, keep: Ordering) -> Result<Value, CallbackError> {
    let numbers = numbers(inv.values)?;
    let mut best: Option<(usize, f64)> = None;
    for (i, n) in numbers.into_iter().enumerate() {
        match best {
            Some((_, current)) if n.partial_cmp(&current) != Some(keep) => {}
            _ => best = Some((i, n)),
        }
    }
    Ok(best.map_or(Value::Null, |(i, _)| inv.arg(i)))
}

fn scale(inv: &Invocation<'_>) -> Result<Value, CallbackError> {
    let factor = inv
        .this_field("factor")
        .and_then(Value::as_f64)
        .ok_or_else(|| anyhow!("scale requires a context with a numeric `factor`"))?;
    let total = sum(inv.values)
        .as_f64()
        .ok_or_else(|| anyhow!("cannot scale non-numeric values"))?;
    let scaled = total * factor;
    Ok(match Value::from(scaled).as_i64() {
        Some(n) if inv.values.iter().all(|v| matches!(v, Value::Int(_))) => Value::Int(n),
        _ => Value::Float(scaled),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(op: MapOp, values: &[Value], this: Option<&Value>) -> Result<Value, CallbackError> {
        op.callback().call(&Invocation {
            this,
            values,
            index: 4,
            arrays: &[],
        })
    }

    #[test]
    fn test_sum_and_concat() {
        let values = [Value::from(1), Value::from(2)];
        assert_eq!(run(MapOp::Sum, &values, None).unwrap(), Value::Int(3));
        assert_eq!(run(MapOp::Concat, &values, None).unwrap(), Value::from("12"));
    }

    #[test]
    fn test_product_keeps_integers() {
        let values = [Value::from(3), Value::from(4)];
        assert_eq!(run(MapOp::Product, &values, None).unwrap(), Value::Int(12));
        let values = [Value::from(0.5), Value::from(4)];
        assert_eq!(run(MapOp::Product, &values, None).unwrap(), Value::Float(2.0));
        assert!(run(MapOp::Product, &[Value::from("x")], None).is_err());
    }

    #[test]
    fn test_max_and_min_return_elements() {
        let values = [Value::from(3), Value::from(9.5), Value::from(-1)];
        assert_eq!(run(MapOp::Max, &values, None).unwrap(), Value::Float(9.5));
        assert_eq!(run(MapOp::Min, &values, None).unwrap(), Value::Int(-1));
        assert_eq!(run(MapOp::Max, &[], None).unwrap(), Value::Null);
    }

    #[test]
    fn test_index_reports_row() {
        assert_eq!(run(MapOp::Index, &[], None).unwrap(), Value::Int(4));
    }

    #[test]
    fn test_scale_uses_context() {
        let ctx: Value = [("factor", 3)].into_iter().collect();
        let values = [Value::from(2)];
        assert_eq!(run(MapOp::Scale, &values, Some(&ctx)).unwrap(), Value::Int(6));
        assert!(run(MapOp::Scale, &values, None).is_err());
    }
}
