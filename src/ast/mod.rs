//! Typed request model for the statement renderer.
//!
//! A [`RenderRequest`] is a self-contained value object rebuilt per call; it
//! holds no references back to any UI or catalog state.

pub mod values;

pub use values::Value;

use crate::error::RenderError;
use serde::{Deserialize, Serialize};

/// The five statement kinds the renderer supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Statement {
    Create,
    #[default]
    Select,
    Insert,
    Update,
    Delete,
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Create => write!(f, "CREATE"),
            Statement::Select => write!(f, "SELECT"),
            Statement::Insert => write!(f, "INSERT"),
            Statement::Update => write!(f, "UPDATE"),
            Statement::Delete => write!(f, "DELETE"),
        }
    }
}

impl std::str::FromStr for Statement {
    type Err = RenderError;

    /// Map a statement-kind string from the UI layer, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CREATE" => Ok(Statement::Create),
            "SELECT" => Ok(Statement::Select),
            "INSERT" => Ok(Statement::Insert),
            "UPDATE" => Ok(Statement::Update),
            "DELETE" => Ok(Statement::Delete),
            other => Err(RenderError::config(format!(
                "unsupported SQL statement kind: '{}'",
                other
            ))),
        }
    }
}

/// Field parameter shape, fixed per statement kind at the type level.
///
/// `Columns` drives SELECT field lists and the INSERT column/values pairing;
/// `Assignments` drives INSERT field maps and UPDATE SET clauses. Assignment
/// order is caller order and is preserved on output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldSelection {
    Columns(Vec<String>),
    Assignments(Vec<(String, Value)>),
}

/// One WHERE-clause entry: a named predicate fragment or a bare connective
/// token (`AND`, `OR`, `(`, `)`). Entries render left to right exactly as
/// listed; no precedence or balancing is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionEntry {
    pub name: String,
    pub sql: String,
}

impl ConditionEntry {
    pub fn new(name: impl Into<String>, sql: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql: sql.into(),
        }
    }

    /// A bare connective token; name and text are the token itself.
    pub fn token(token: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            name: token.clone(),
            sql: token,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "ASC"),
            SortOrder::Desc => write!(f, "DESC"),
        }
    }
}

/// One ORDER BY entry; list order is output order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSpec {
    pub field: String,
    pub order: SortOrder,
}

impl OrderSpec {
    pub fn new(field: impl Into<String>, order: SortOrder) -> Self {
        Self {
            field: field.into(),
            order,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggregateFunc {
    Count,
    CountDistinct,
    Sum,
    Avg,
    Max,
    Min,
}

impl std::fmt::Display for AggregateFunc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AggregateFunc::Count => write!(f, "COUNT"),
            AggregateFunc::CountDistinct => write!(f, "COUNT(DISTINCT)"),
            AggregateFunc::Sum => write!(f, "SUM"),
            AggregateFunc::Avg => write!(f, "AVG"),
            AggregateFunc::Max => write!(f, "MAX"),
            AggregateFunc::Min => write!(f, "MIN"),
        }
    }
}

/// GROUP BY specification: grouping fields, aggregate expressions, and the
/// order entries collected alongside them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GroupBySpec {
    #[serde(default)]
    pub group_fields: Vec<String>,
    #[serde(default)]
    pub aggregate_fields: Vec<(String, AggregateFunc)>,
    /// Merged into the request's order list when attached via
    /// [`RenderRequest::group_by`]; the renderer itself reads only the
    /// request order list.
    #[serde(default)]
    pub order_fields: Vec<OrderSpec>,
}

impl GroupBySpec {
    pub fn new<I, S>(group_fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            group_fields: group_fields.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Add an aggregate expression. `("*", Count)` renders as `COUNT(*)`.
    pub fn aggregate(mut self, field: impl Into<String>, func: AggregateFunc) -> Self {
        self.aggregate_fields.push((field.into(), func));
        self
    }

    pub fn order(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.order_fields.push(OrderSpec::new(field, order));
        self
    }
}

/// One column definition for CREATE TABLE.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: String,
    pub data_type: String,
    #[serde(default)]
    pub primary_key: bool,
    #[serde(default)]
    pub not_null: bool,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            primary_key: false,
            not_null: false,
        }
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }
}

/// The full normalized input for one render call.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RenderRequest {
    pub statement: Statement,
    /// Table name, or the name of a tag group to resolve in the catalog.
    pub table: String,
    #[serde(default)]
    pub fields: Option<FieldSelection>,
    #[serde(default)]
    pub conditions: Vec<ConditionEntry>,
    #[serde(default)]
    pub order_by: Vec<OrderSpec>,
    #[serde(default)]
    pub group_by: Option<GroupBySpec>,
    /// Parallel value list for the INSERT column-list form.
    #[serde(default)]
    pub values: Vec<Value>,
    /// Column definitions for CREATE TABLE.
    #[serde(default)]
    pub column_types: Vec<ColumnDef>,
}

impl RenderRequest {
    pub fn select(table: impl Into<String>) -> Self {
        Self {
            statement: Statement::Select,
            table: table.into(),
            ..Default::default()
        }
    }

    pub fn insert(table: impl Into<String>) -> Self {
        Self {
            statement: Statement::Insert,
            table: table.into(),
            ..Default::default()
        }
    }

    pub fn update(table: impl Into<String>) -> Self {
        Self {
            statement: Statement::Update,
            table: table.into(),
            ..Default::default()
        }
    }

    pub fn delete(table: impl Into<String>) -> Self {
        Self {
            statement: Statement::Delete,
            table: table.into(),
            ..Default::default()
        }
    }

    pub fn create(table: impl Into<String>) -> Self {
        Self {
            statement: Statement::Create,
            table: table.into(),
            ..Default::default()
        }
    }

    /// Replace the field selection with a column list.
    pub fn columns<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(FieldSelection::Columns(
            names.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Append one column to the selection, switching to column form if needed.
    pub fn column(mut self, name: impl Into<String>) -> Self {
        match &mut self.fields {
            Some(FieldSelection::Columns(cols)) => cols.push(name.into()),
            _ => self.fields = Some(FieldSelection::Columns(vec![name.into()])),
        }
        self
    }

    /// Append one field assignment, switching to assignment form if needed.
    pub fn assign(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        match &mut self.fields {
            Some(FieldSelection::Assignments(pairs)) => pairs.push((field.into(), value.into())),
            _ => {
                self.fields = Some(FieldSelection::Assignments(vec![(
                    field.into(),
                    value.into(),
                )]))
            }
        }
        self
    }

    pub fn condition(mut self, name: impl Into<String>, sql: impl Into<String>) -> Self {
        self.conditions.push(ConditionEntry::new(name, sql));
        self
    }

    /// Push a bare `AND` connective token.
    pub fn and(mut self) -> Self {
        self.conditions.push(ConditionEntry::token("AND"));
        self
    }

    /// Push a bare `OR` connective token.
    pub fn or(mut self) -> Self {
        self.conditions.push(ConditionEntry::token("OR"));
        self
    }

    pub fn order_by(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.order_by.push(OrderSpec::new(field, order));
        self
    }

    /// Attach a GROUP BY spec. Its order entries are folded into the request
    /// order list, the same way the group-by dialog feeds the builder.
    pub fn group_by(mut self, mut spec: GroupBySpec) -> Self {
        self.order_by.append(&mut spec.order_fields);
        self.group_by = Some(spec);
        self
    }

    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.values.push(value.into());
        self
    }

    pub fn with_values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.values.extend(values.into_iter().map(Into::into));
        self
    }

    pub fn column_def(mut self, def: ColumnDef) -> Self {
        self.column_types.push(def);
        self
    }

    /// The currently selected field names: column names in column form,
    /// assignment keys in assignment form, empty when no selection was made.
    pub fn selected_fields(&self) -> Vec<&str> {
        match &self.fields {
            Some(FieldSelection::Columns(cols)) => cols.iter().map(String::as_str).collect(),
            Some(FieldSelection::Assignments(pairs)) => {
                pairs.iter().map(|(field, _)| field.as_str()).collect()
            }
            None => Vec::new(),
        }
    }
}
