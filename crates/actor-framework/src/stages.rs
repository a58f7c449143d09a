//! # Generic Stages
//!
//! Reusable [`Stage`] implementations parameterised by field name. Messages are phrased with
//! the entity's [`ActorEntity::KIND`], e.g. `"Dish must include a name"`.
//!
//! Resource-specific rules (line-item quantities, order status) live next to their entity and
//! are built with [`stage`](crate::pipeline::stage).

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::pipeline::{RequestContext, Stage};
use crate::repository::Repository;
use serde_json::Value;

/// Whether a JSON value counts as "supplied".
///
/// `null`, `false`, numeric zero and the empty string are absent; everything else,
/// including empty arrays and objects, is present.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// The value as an integer strictly greater than zero.
///
/// Floats are accepted when they carry no fractional part (`5.0`).
pub fn as_positive_integer(value: &Value) -> Option<u64> {
    let Value::Number(n) = value else {
        return None;
    };
    if let Some(u) = n.as_u64() {
        return (u > 0).then_some(u);
    }
    if n.is_i64() {
        return None;
    }
    let f = n.as_f64()?;
    if f.fract() == 0.0 && f > 0.0 && f < u64::MAX as f64 {
        Some(f as u64)
    } else {
        None
    }
}

/// Fails unless the request data carries a truthy value for the field; copies it into the
/// context on success.
pub struct FieldPresent {
    name: &'static str,
    message: Option<String>,
}

impl FieldPresent {
    pub fn new(name: &'static str) -> Self {
        Self { name, message: None }
    }

    /// Replaces the default `"{Kind} must include a {name}"` message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<T: ActorEntity> Stage<T> for FieldPresent {
    fn name(&self) -> &'static str {
        "field-present"
    }

    fn check(&self, ctx: &mut RequestContext<T>, _: &Repository<T>) -> Result<(), FrameworkError> {
        match ctx.data_value(self.name) {
            Some(value) if is_truthy(value) => {
                let value = value.clone();
                ctx.set_field(self.name, value);
                Ok(())
            }
            _ => Err(FrameworkError::validation(
                self.message
                    .clone()
                    .unwrap_or_else(|| format!("{} must include a {}", T::KIND, self.name)),
            )),
        }
    }
}

/// Fails unless the staged field is a string of length > 0.
pub struct NonEmptyString {
    name: &'static str,
}

impl NonEmptyString {
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl<T: ActorEntity> Stage<T> for NonEmptyString {
    fn name(&self) -> &'static str {
        "non-empty-string"
    }

    fn check(&self, ctx: &mut RequestContext<T>, _: &Repository<T>) -> Result<(), FrameworkError> {
        match ctx.field(self.name) {
            Some(Value::String(s)) if !s.is_empty() => Ok(()),
            _ => Err(FrameworkError::validation(format!(
                "{} must include a {}",
                T::KIND,
                self.name
            ))),
        }
    }
}

/// Fails unless the staged field is an integer strictly greater than zero.
pub struct PositiveInteger {
    name: &'static str,
}

impl PositiveInteger {
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl<T: ActorEntity> Stage<T> for PositiveInteger {
    fn name(&self) -> &'static str {
        "positive-integer"
    }

    fn check(&self, ctx: &mut RequestContext<T>, _: &Repository<T>) -> Result<(), FrameworkError> {
        ctx.positive_integer_field(self.name).map(|_| ())
    }
}

/// Fails when the body supplies an `id` that differs from the route id.
///
/// An absent (falsy) body id always passes.
pub struct RouteBodyIdMatch;

impl<T: ActorEntity> Stage<T> for RouteBodyIdMatch {
    fn name(&self) -> &'static str {
        "route-body-id-match"
    }

    fn check(&self, ctx: &mut RequestContext<T>, _: &Repository<T>) -> Result<(), FrameworkError> {
        let Some(route_id) = ctx.route_id() else {
            return Ok(());
        };
        let body_id = match ctx.data_value("id") {
            Some(value) if is_truthy(value) => value,
            _ => return Ok(()),
        };
        if body_id.as_str() == Some(route_id) {
            return Ok(());
        }
        let shown = match body_id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        Err(FrameworkError::validation(format!(
            "{kind} id does not match route id. {kind}: {shown}, Route: {route_id}",
            kind = T::KIND
        )))
    }
}

/// Looks up the route id in the repository and stages the entity, or fails `NotFound`.
pub struct EntityExists;

impl<T: ActorEntity> Stage<T> for EntityExists {
    fn name(&self) -> &'static str {
        "entity-exists"
    }

    fn check(
        &self,
        ctx: &mut RequestContext<T>,
        repository: &Repository<T>,
    ) -> Result<(), FrameworkError> {
        let route_id = ctx.route_id().unwrap_or_default().to_owned();
        match repository.find_by_id(&route_id) {
            Some(entity) => {
                ctx.resolve(entity.clone());
                Ok(())
            }
            None => Err(FrameworkError::not_found(format!(
                "{} does not exist: {}.",
                T::KIND,
                route_id
            ))),
        }
    }
}
