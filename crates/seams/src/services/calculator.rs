use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use tracing::debug;

pub const DIVISION_BY_ZERO: &str = "Division by zero is not allowed";
pub const NON_FINITE_RESULT: &str = "Result is not a finite number";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub operation: Operation,
    pub a: f64,
    pub b: f64,
}

impl CalculationRequest {
    pub fn new(operation: Operation, a: f64, b: f64) -> Self {
        CalculationRequest { operation, a, b }
    }
}

/// Result of a calculation. Exactly one of `result` and `error` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResponse {
    pub operation: Operation,
    pub operands: Vec<f64>,
    pub result: Option<f64>,
    pub error: Option<String>,
}

pub fn calculate(request: &CalculationRequest) -> CalculationResponse {
    let CalculationRequest { operation, a, b } = *request;

    let outcome = match operation {
        Operation::Add => Ok(a + b),
        Operation::Subtract => Ok(a - b),
        Operation::Multiply => Ok(a * b),
        Operation::Divide if b == 0.0 => Err(DIVISION_BY_ZERO.to_string()),
        Operation::Divide => Ok(a / b),
    }
    .and_then(|value: f64| {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(NON_FINITE_RESULT.to_string())
        }
    });
    debug!(%operation, a, b, ?outcome, "calculated");

    let (result, error) = match outcome {
        Ok(value) => (Some(value), None),
        Err(message) => (None, Some(message)),
    };

    CalculationResponse {
        operation,
        operands: vec![a, b],
        result,
        error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn test_four_operations() {
        let cases = [
            (Operation::Add, 15.0, 27.0, 42.0),
            (Operation::Subtract, 50.0, 8.0, 42.0),
            (Operation::Multiply, 7.0, 9.0, 63.0),
            (Operation::Divide, 100.0, 4.0, 25.0),
        ];

        for (operation, a, b, expected) in cases {
            let response = calculate(&CalculationRequest::new(operation, a, b));
            assert_eq!(response.operation, operation);
            assert_eq!(response.operands, vec![a, b]);
            assert_eq!(response.result, Some(expected));
            assert_eq!(response.error, None);
        }
    }

    #[test]
    fn test_division_by_zero() {
        let response = calculate(&CalculationRequest::new(Operation::Divide, 10.0, 0.0));
        assert_eq!(response.result, None);
        assert_eq!(response.error.as_deref(), Some(DIVISION_BY_ZERO));
    }

    #[test]
    fn test_overflow_sets_error() {
        let response = calculate(&CalculationRequest::new(Operation::Multiply, 1e308, 10.0));
        assert_eq!(response.result, None);
        assert_eq!(response.error.as_deref(), Some(NON_FINITE_RESULT));

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["error"], json!("Result is not a finite number"));
    }

    #[test]
    fn test_wire_format() {
        let request: CalculationRequest =
            serde_json::from_value(json!({"operation": "multiply", "a": 7.0, "b": 6.0})).unwrap();
        assert_eq!(request, CalculationRequest::new(Operation::Multiply, 7.0, 6.0));

        let response = calculate(&CalculationRequest::new(Operation::Divide, 10.0, 0.0));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "operation": "divide",
                "operands": [10.0, 0.0],
                "result": null,
                "error": "Division by zero is not allowed"
            })
        );
    }

    #[test]
    fn test_unknown_operation_is_rejected() {
        let result = serde_json::from_value::<CalculationRequest>(
            json!({"operation": "invalid", "a": 1.0, "b": 2.0}),
        );
        assert!(result.is_err());
        assert!(Operation::from_str("modulo").is_err());
    }

    #[test]
    fn test_operation_names() {
        let names: Vec<String> = [
            Operation::Add,
            Operation::Subtract,
            Operation::Multiply,
            Operation::Divide,
        ]
        .iter()
        .map(|op| op.to_string())
        .collect();
        assert_eq!(names, vec!["add", "subtract", "multiply", "divide"]);
        assert_eq!(Operation::from_str("divide").unwrap(), Operation::Divide);
    }
}
