use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Filter operator vocabulary understood by the list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterOperator {
    /// Equal (=)
    Eq,
    /// Not equal (<>)
    Neq,
    /// Greater than (>)
    Gt,
    /// Greater than or equal (>=)
    Gte,
    /// Less than (<)
    Lt,
    /// Less than or equal (<=)
    Lte,
    /// Case-sensitive pattern match
    Like,
    /// Case-insensitive pattern match
    ILike,
    /// In list
    In,
}

impl FilterOperator {
    pub const ALL: [FilterOperator; 9] = [
        FilterOperator::Eq,
        FilterOperator::Neq,
        FilterOperator::Gt,
        FilterOperator::Gte,
        FilterOperator::Lt,
        FilterOperator::Lte,
        FilterOperator::Like,
        FilterOperator::ILike,
        FilterOperator::In,
    ];

    /// Field name used for this operator in the wire form
    pub fn wire_name(&self) -> &'static str {
        match self {
            FilterOperator::Eq => "eq",
            FilterOperator::Neq => "neq",
            FilterOperator::Gt => "gt",
            FilterOperator::Gte => "gte",
            FilterOperator::Lt => "lt",
            FilterOperator::Lte => "lte",
            FilterOperator::Like => "like",
            FilterOperator::ILike => "iLike",
            FilterOperator::In => "in",
        }
    }
}

/// Filter operand: a single value or a list (for `in`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Single(String),
    Many(Vec<String>),
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Single(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Single(value)
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(values: Vec<String>) -> Self {
        FilterValue::Many(values)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterWireError {
    #[error("filter '{0}' has no operator field")]
    MissingOperator(String),
    #[error("filter '{key}' has several operator fields: {operators:?}")]
    SeveralOperators {
        key: String,
        operators: Vec<&'static str>,
    },
}

/// A single filter condition: `key <operator> value`.
///
/// On the wire the operator is the name of the field carrying the value,
/// e.g. `{"key": "status", "eq": "ACTIVE"}`. Exactly one operator field
/// must be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FilterWire", into = "FilterWire")]
pub struct Filter {
    pub key: String,
    pub operator: FilterOperator,
    pub value: FilterValue,
}

impl Filter {
    pub fn new(key: impl Into<String>, operator: FilterOperator, value: impl Into<FilterValue>) -> Self {
        Self {
            key: key.into(),
            operator,
            value: value.into(),
        }
    }

    pub fn eq(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, FilterOperator::Eq, value.into())
    }

    pub fn gte(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, FilterOperator::Gte, value.into())
    }

    pub fn lte(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, FilterOperator::Lte, value.into())
    }

    pub fn i_like(key: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::new(key, FilterOperator::ILike, pattern.into())
    }

    /// `in` always carries a list, even for one element
    pub fn any_of<I, S>(key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        Self::new(key, FilterOperator::In, FilterValue::Many(values))
    }
}

/// Wire representation: one optional field per operator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct FilterWire {
    key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    eq: Option<FilterValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    neq: Option<FilterValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gt: Option<FilterValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gte: Option<FilterValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lt: Option<FilterValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lte: Option<FilterValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    like: Option<FilterValue>,
    #[serde(default, rename = "iLike", skip_serializing_if = "Option::is_none")]
    i_like: Option<FilterValue>,
    #[serde(default, rename = "in", skip_serializing_if = "Option::is_none")]
    in_list: Option<FilterValue>,
}

impl FilterWire {
    fn slot_mut(&mut self, operator: FilterOperator) -> &mut Option<FilterValue> {
        match operator {
            FilterOperator::Eq => &mut self.eq,
            FilterOperator::Neq => &mut self.neq,
            FilterOperator::Gt => &mut self.gt,
            FilterOperator::Gte => &mut self.gte,
            FilterOperator::Lt => &mut self.lt,
            FilterOperator::Lte => &mut self.lte,
            FilterOperator::Like => &mut self.like,
            FilterOperator::ILike => &mut self.i_like,
            FilterOperator::In => &mut self.in_list,
        }
    }
}

impl From<Filter> for FilterWire {
    fn from(filter: Filter) -> Self {
        let mut wire = FilterWire {
            key: filter.key,
            ..Default::default()
        };
        *wire.slot_mut(filter.operator) = Some(filter.value);
        wire
    }
}

impl TryFrom<FilterWire> for Filter {
    type Error = FilterWireError;

    fn try_from(mut wire: FilterWire) -> Result<Self, Self::Error> {
        let mut populated: Vec<(FilterOperator, FilterValue)> = Vec::new();
        for operator in FilterOperator::ALL {
            if let Some(value) = wire.slot_mut(operator).take() {
                populated.push((operator, value));
            }
        }

        match populated.len() {
            0 => Err(FilterWireError::MissingOperator(wire.key)),
            1 => {
                let (operator, value) = populated.remove(0);
                Ok(Filter {
                    key: wire.key,
                    operator,
                    value,
                })
            }
            _ => Err(FilterWireError::SeveralOperators {
                key: wire.key,
                operators: populated.iter().map(|(op, _)| op.wire_name()).collect(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_eq_filter_round_trip() {
        let filter = Filter::eq("status", "ACTIVE");
        let wire = serde_json::to_value(&filter).unwrap();
        assert_eq!(wire, json!({"key": "status", "eq": "ACTIVE"}));

        let back: Filter = serde_json::from_value(wire).unwrap();
        assert_eq!(back, filter);
    }

    #[test]
    fn test_in_filter_serializes_list() {
        let filter = Filter::any_of("brandId", ["b1", "b2"]);
        let wire = serde_json::to_value(&filter).unwrap();
        assert_eq!(wire, json!({"key": "brandId", "in": ["b1", "b2"]}));
    }

    #[test]
    fn test_i_like_uses_camel_case_field() {
        let filter = Filter::i_like("name", "%chair%");
        let wire = serde_json::to_value(&filter).unwrap();
        assert_eq!(wire, json!({"key": "name", "iLike": "%chair%"}));

        let back: Filter = serde_json::from_value(wire).unwrap();
        assert_eq!(back.operator, FilterOperator::ILike);
    }

    #[test]
    fn test_rejects_missing_operator() {
        let result: Result<Filter, _> = serde_json::from_value(json!({"key": "status"}));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("no operator"), "unexpected error: {}", err);
    }

    #[test]
    fn test_rejects_several_operators() {
        let result: Result<Filter, _> =
            serde_json::from_value(json!({"key": "price", "gte": "10", "lte": "20"}));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("several operator"), "unexpected error: {}", err);
    }
}
