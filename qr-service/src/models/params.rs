//! Per-request parameter resolution.
//!
//! Every field is looked up in the query string first, then in the parsed
//! body, then falls back to a literal default.

use serde_json::Value;

use crate::dtos::QrRequest;
use crate::error::QrServiceError;

pub const DEFAULT_ECC: &str = "L";
pub const DEFAULT_MARGIN: f64 = 2.0;
pub const MIN_MARGIN: f64 = 0.0;
pub const MAX_MARGIN: f64 = 8.0;
pub const DEFAULT_INVERT: bool = false;

const TRUTHY_FLAGS: [&str; 3] = ["1", "true", "yes"];

/// A parameter value as it arrived, tagged with where it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawParam<'a> {
    Query(&'a str),
    Body(&'a Value),
}

impl<'a> RawParam<'a> {
    /// The value when it is a string.
    fn as_text(self) -> Option<&'a str> {
        match self {
            RawParam::Query(value) => Some(value),
            RawParam::Body(Value::String(value)) => Some(value.as_str()),
            RawParam::Body(_) => None,
        }
    }

    /// String form of scalar values; compound JSON values have none.
    fn to_scalar_string(self) -> Option<String> {
        match self {
            RawParam::Query(value) => Some(value.to_string()),
            RawParam::Body(Value::String(value)) => Some(value.clone()),
            RawParam::Body(Value::Bool(flag)) => Some(flag.to_string()),
            RawParam::Body(Value::Number(number)) => Some(number_to_string(number)),
            RawParam::Body(_) => None,
        }
    }

    /// Numeric coercion. Blank strings count as zero; unparsable strings,
    /// NaN and compound values yield `None`.
    fn to_number(self) -> Option<f64> {
        let number = match self {
            RawParam::Query(value) => parse_number(value),
            RawParam::Body(Value::String(value)) => parse_number(value),
            RawParam::Body(Value::Number(number)) => number.as_f64(),
            RawParam::Body(Value::Bool(flag)) => Some(if *flag { 1.0 } else { 0.0 }),
            RawParam::Body(_) => None,
        };
        number.filter(|n| !n.is_nan())
    }

    fn is_truthy(&self) -> bool {
        match self {
            RawParam::Query(value) => !value.is_empty(),
            RawParam::Body(Value::Null) => false,
            RawParam::Body(Value::Bool(flag)) => *flag,
            RawParam::Body(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
            RawParam::Body(Value::String(value)) => !value.is_empty(),
            RawParam::Body(_) => true,
        }
    }
}

fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok()
}

/// Floats print in shortest form, so `1.0` becomes `"1"`.
fn number_to_string(number: &serde_json::Number) -> String {
    match number.as_f64() {
        Some(float) if number.is_f64() => float.to_string(),
        _ => number.to_string(),
    }
}

/// Query wins over body; `None` means the caller's default applies.
pub fn resolve<'a>(
    query: Option<RawParam<'a>>,
    body: Option<RawParam<'a>>,
) -> Option<RawParam<'a>> {
    query.or(body)
}

fn lookup<'a>(request: &'a QrRequest, name: &str) -> Option<RawParam<'a>> {
    resolve(
        request.query(name).map(RawParam::Query),
        request.body(name).map(RawParam::Body),
    )
}

/// Validated parameters for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct QrParams {
    pub text: String,
    /// Uppercased error-correction level, validated by the encoder.
    pub ecc: String,
    /// Quiet-zone width in modules, within `[MIN_MARGIN, MAX_MARGIN]`.
    pub margin: f64,
    pub invert: bool,
}

impl QrParams {
    pub fn from_request(request: &QrRequest) -> Result<Self, QrServiceError> {
        let text = lookup(request, "text")
            .and_then(RawParam::as_text)
            .filter(|text| !text.is_empty())
            .ok_or(QrServiceError::MissingText)?
            .to_string();

        // An empty or falsy ecc does not shadow the next source.
        let ecc = resolve(
            request
                .query("ecc")
                .map(RawParam::Query)
                .filter(RawParam::is_truthy),
            request
                .body("ecc")
                .map(RawParam::Body)
                .filter(RawParam::is_truthy),
        )
        .and_then(RawParam::to_scalar_string)
        .unwrap_or_else(|| DEFAULT_ECC.to_string())
        .to_uppercase();

        let margin = lookup(request, "margin")
            .and_then(RawParam::to_number)
            .unwrap_or(DEFAULT_MARGIN)
            .clamp(MIN_MARGIN, MAX_MARGIN);

        let invert = lookup(request, "invert")
            .and_then(RawParam::to_scalar_string)
            .map(|flag| TRUTHY_FLAGS.contains(&flag.to_lowercase().as_str()))
            .unwrap_or(DEFAULT_INVERT);

        Ok(Self {
            text,
            ecc,
            margin,
            invert,
        })
    }

    /// Whole modules of quiet zone drawn around the symbol.
    pub fn quiet_zone(&self) -> usize {
        self.margin.floor() as usize
    }
}
