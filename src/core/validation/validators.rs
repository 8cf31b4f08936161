//! Reusable field validators
//!
//! Each factory returns a check usable as a [`ValidationChain`] step. The
//! value helpers underneath are shared with the code that turns a validated
//! payload into a typed entity, so both sides agree on what "valid" means.
//!
//! [`ValidationChain`]: super::ValidationChain

use super::chain::RequestContext;
use crate::core::error::{EntityKind, ServiceResult, ValidationError};
use serde_json::Value;

/// JavaScript-style truthiness: null, false, 0 and "" are falsy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// `value` itself, if it is truthy
pub fn present(value: &Value) -> Option<&Value> {
    is_truthy(value).then_some(value)
}

/// The integer inside `value`, if it is an integral number greater than 0
///
/// Integral floats (`2.0`) are accepted; strings, booleans and fractions are not.
/// Integral values above `u64::MAX` (such as `1e20`) are rejected.
pub fn positive_integer(value: &Value) -> Option<u64> {
    let Value::Number(n) = value else {
        return None;
    };
    if let Some(u) = n.as_u64() {
        return (u > 0).then_some(u);
    }
    let f = n.as_f64()?;
    (f.fract() == 0.0 && f >= 1.0 && f < u64::MAX as f64).then_some(f as u64)
}

/// Render an id value for messages: strings without quotes, anything else as JSON
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Validator: `field` must be present and truthy
///
/// Any truthy value passes, so `"mobileNumber": 5551234` is as good as a
/// string.
pub fn require_present<T>(
    kind: EntityKind,
    field: &'static str,
) -> impl Fn(&RequestContext<'_, T>) -> ServiceResult<()> + Send + Sync + Clone {
    move |ctx: &RequestContext<'_, T>| match ctx.field(field).and_then(present) {
        Some(_) => Ok(()),
        None => Err(ValidationError::MissingField {
            kind,
            field: field.to_string(),
        }
        .into()),
    }
}

/// Validator: `field` must be an integer greater than 0
///
/// `error` is what the check reports on failure, so the same rule can back
/// the price check and other positive-integer fields.
pub fn require_positive_integer<T>(
    field: &'static str,
    error: ValidationError,
) -> impl Fn(&RequestContext<'_, T>) -> ServiceResult<()> + Send + Sync + Clone {
    move |ctx: &RequestContext<'_, T>| match ctx.field(field).and_then(positive_integer) {
        Some(_) => Ok(()),
        None => Err(error.clone().into()),
    }
}

/// Validator: a present (truthy) payload `id` must equal the route id
///
/// Passes when the operation has no route id.
pub fn require_matching_id<T>(
    kind: EntityKind,
) -> impl Fn(&RequestContext<'_, T>) -> ServiceResult<()> + Send + Sync + Clone {
    move |ctx: &RequestContext<'_, T>| {
        let (Some(route_id), Some(id)) = (ctx.route_id, ctx.field("id")) else {
            return Ok(());
        };
        if !is_truthy(id) || id.as_str() == Some(route_id) {
            return Ok(());
        }
        Err(ValidationError::IdMismatch {
            kind,
            id: display_value(id),
            route_id: route_id.to_string(),
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ServiceError;
    use crate::core::payload::Payload;
    use serde_json::json;

    fn payload(data: Value) -> Payload {
        Payload::from_body(json!({ "data": data }))
    }

    // === value helpers ===

    #[test]
    fn test_is_truthy() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn test_positive_integer() {
        assert_eq!(positive_integer(&json!(3)), Some(3));
        assert_eq!(positive_integer(&json!(2.0)), Some(2));
        assert_eq!(positive_integer(&json!(0)), None);
        assert_eq!(positive_integer(&json!(-4)), None);
        assert_eq!(positive_integer(&json!(1.5)), None);
        assert_eq!(positive_integer(&json!("3")), None);
        assert_eq!(positive_integer(&json!(true)), None);
        assert_eq!(positive_integer(&json!(null)), None);
        assert_eq!(positive_integer(&json!(1e3)), Some(1000));
        assert_eq!(positive_integer(&json!(1e20)), None);
    }

    // === require_present() ===

    #[test]
    fn test_require_present_accepts_truthy_values() {
        let v = require_present::<()>(EntityKind::Order, "mobileNumber");
        for value in [json!("555-1234"), json!(5551234), json!(true), json!(["x"])] {
            let p = payload(json!({ "mobileNumber": value }));
            assert!(v(&RequestContext::new(&p)).is_ok());
        }
    }

    #[test]
    fn test_require_present_rejects_missing_and_falsy() {
        let v = require_present::<()>(EntityKind::Dish, "name");
        for data in [
            json!({}),
            json!({ "name": "" }),
            json!({ "name": null }),
            json!({ "name": 0 }),
            json!({ "name": false }),
        ] {
            let p = payload(data);
            let err = v(&RequestContext::new(&p)).unwrap_err();
            assert_eq!(err.to_string(), "Dish must include a name");
        }
    }

    #[test]
    fn test_require_present_without_data() {
        let v = require_present::<()>(EntityKind::Order, "deliverTo");
        let p = Payload::empty();
        let err = v(&RequestContext::new(&p)).unwrap_err();
        assert_eq!(err.to_string(), "Order must include a deliverTo");
    }

    // === require_positive_integer() ===

    #[test]
    fn test_require_positive_integer() {
        let v = require_positive_integer::<()>("price", ValidationError::InvalidPrice);

        let ok = payload(json!({ "price": 12 }));
        assert!(v(&RequestContext::new(&ok)).is_ok());

        for price in [json!(0), json!(-1), json!(1.25), json!("12"), json!(null)] {
            let p = payload(json!({ "price": price }));
            assert_eq!(
                v(&RequestContext::new(&p)).unwrap_err(),
                ServiceError::Validation(ValidationError::InvalidPrice)
            );
        }

        let missing = payload(json!({}));
        assert!(v(&RequestContext::new(&missing)).is_err());
    }

    // === require_matching_id() ===

    #[test]
    fn test_require_matching_id() {
        let v = require_matching_id::<()>(EntityKind::Order);

        let same = payload(json!({ "id": "abc" }));
        assert!(v(&RequestContext::new(&same).with_route_id("abc")).is_ok());

        let absent = payload(json!({}));
        assert!(v(&RequestContext::new(&absent).with_route_id("abc")).is_ok());

        let falsy = payload(json!({ "id": "" }));
        assert!(v(&RequestContext::new(&falsy).with_route_id("abc")).is_ok());

        let other = payload(json!({ "id": "xyz" }));
        let err = v(&RequestContext::new(&other).with_route_id("abc")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Order id does not match route id. Order: xyz, Route: abc."
        );
    }

    #[test]
    fn test_require_matching_id_without_route() {
        let v = require_matching_id::<()>(EntityKind::Dish);
        let p = payload(json!({ "id": "xyz" }));
        assert!(v(&RequestContext::new(&p)).is_ok());
    }
}
