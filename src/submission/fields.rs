use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Raw form data for one registration attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub dob: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal: Option<String>,
    pub country: Option<String>,
    pub institution: Option<String>,
    pub student_id: Option<String>,
    pub message: Option<String>,
}

/// Decode a parsed body into a `Submission`.
/// Returns `None` when the body is not an object or has no fields at all.
pub fn decode(raw: &Value) -> Option<Submission> {
    let obj = raw.as_object().filter(|o| !o.is_empty())?;

    Some(Submission {
        name: text(obj, "name"),
        email: text(obj, "email"),
        phone: text(obj, "phone"),
        dob: text(obj, "dob"),
        street: text(obj, "street"),
        city: text(obj, "city"),
        state: text(obj, "state"),
        postal: text(obj, "postal"),
        country: text(obj, "country"),
        institution: text(obj, "institution"),
        // The registration page posts `student-id`
        student_id: text(obj, "student-id").or_else(|| text(obj, "student_id")),
        message: text(obj, "message"),
    })
}

fn text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
