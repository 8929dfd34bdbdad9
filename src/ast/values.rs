use serde::{Deserialize, Serialize};

/// A literal value carried by an INSERT or UPDATE request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// NULL value
    Null,
    /// Boolean
    Bool(bool),
    /// Integer
    Int(i64),
    /// Float
    Float(f64),
    /// String, single-quoted on output
    Text(String),
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "'{}'", s.replace('\'', "''")),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_formatting() {
        assert_eq!(Value::Null.to_string(), "NULL");
        assert_eq!(Value::from(42).to_string(), "42");
        assert_eq!(Value::from(3.5).to_string(), "3.5");
        assert_eq!(Value::from("abc").to_string(), "'abc'");
        assert_eq!(Value::from(true).to_string(), "true");
    }

    #[test]
    fn test_none_is_null() {
        let v: Value = Option::<i64>::None.into();
        assert_eq!(v.to_string(), "NULL");
    }

    #[test]
    fn test_embedded_quote_is_doubled() {
        assert_eq!(Value::from("O'Brien").to_string(), "'O''Brien'");
    }
}
