use logeach_core::{Callback, Value};

/// Helper function to run a console call against an in-memory sink
pub fn capture<F>(run: F) -> Vec<String>
where
    F: FnOnce(&mut Vec<String>) -> logeach_core::Result<()>,
{
    let mut lines = Vec::new();
    run(&mut lines).expect("Console call failed");
    lines
}

/// Helper callback returning the sum of the current elements
#[allow(dead_code)]
pub fn sum() -> Callback {
    Callback::map(|values| {
        values
            .iter()
            .cloned()
            .reduce(|acc, v| acc.plus(&v))
            .unwrap_or(Value::Int(0))
    })
}

/// Helper callback doubling its first element
#[allow(dead_code)]
pub fn double() -> Callback {
    Callback::map(|values| values[0].plus(&values[0]))
}
