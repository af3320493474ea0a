//! Naive recursive Fibonacci kernel
//!
//! Exists to measure recursive call overhead: `fibonacci` is the textbook
//! double recursion with no memoization and no accumulator, so `fibonacci(n)`
//! makes on the order of `F(n)` calls.
//!
//! # Numeric semantics
//!
//! Values are `i64`. Additions wrap on overflow (two's complement) in both
//! debug and release builds; `fibonacci(93)` is the first wrapped result.
//! Deep inputs are not guarded: the recursion depth is `n`, and the running
//! time grows as roughly 1.6^n.

use bj::{HarnessError, Setup};

/// The nth Fibonacci number, with `F(0) = 0` and `F(1) = 1`
///
/// Any `n <= 1`, including negative `n`, is returned unchanged.
pub fn fibonacci(n: i64) -> i64 {
    if n <= 1 {
        n
    } else {
        fibonacci(n - 1).wrapping_add(fibonacci(n - 2))
    }
}

/// Plugs [`fibonacci`] into the bj harness
///
/// Input and output documents are bare JSON numbers: `10` in, `55` out.
#[derive(Debug, Default, Clone, Copy)]
pub struct FibonacciSetup;

impl Setup for FibonacciSetup {
    type Input = i64;
    type Output = i64;

    fn name(&self) -> &str {
        "fibonacci"
    }

    fn input(&self, src: &serde_json::Value) -> Result<i64, HarnessError> {
        match src {
            serde_json::Value::Number(num) => match num.as_i64() {
                Some(n) => Ok(n),
                None => match num.as_f64() {
                    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
                    Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                        Ok(f as i64)
                    }
                    Some(f) if f.fract() != 0.0 => Err(HarnessError::Input(format!(
                        "expected an integer, found {}",
                        num
                    ))),
                    _ => Err(HarnessError::Input(format!(
                        "{} is not representable as a 64-bit integer",
                        num
                    ))),
                },
            },
            other => Err(HarnessError::Input(format!(
                "expected an integer, found {}",
                json_kind(other)
            ))),
        }
    }

    fn compute(&self, x: i64) -> i64 {
        fibonacci(x)
    }

    fn output(&self, x: i64) -> serde_json::Value {
        serde_json::Value::from(x)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
