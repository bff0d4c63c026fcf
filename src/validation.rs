//! Request parameter validation
//!
//! Every check returns `AppError::BadRequest` carrying the message sent back
//! to the client. Validators that accept free text return the value with its
//! whitespace normalized.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use validator::ValidateLength;

use crate::error::{AppError, AppResult};

const NAME_MAX_LEN: u64 = 30;
const TITLE_MAX_LEN: u64 = 255;
const YEAR_LEN: u64 = 4;
const CONTENT_MAX_LEN: u64 = 500;

static EXTRA_SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").expect("valid regex"));

static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+7\([0-9]{3}\)-[0-9]{3}-[0-9]{2}-[0-9]{2}$").expect("valid regex"));

/// Trim and collapse runs of whitespace into a single space
pub fn normalize_spaces(value: &str) -> String {
    EXTRA_SPACES.replace_all(value.trim(), " ").into_owned()
}

/// Parse a positive numeric id
pub fn validate_id(value: Option<&str>) -> AppResult<i64> {
    let value = match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => return Err(bad_request("Missing id parameter")),
    };

    let id: i64 = value
        .parse()
        .map_err(|_| bad_request("id must be a number"))?;

    if id <= 0 {
        return Err(bad_request("id must be a positive number"));
    }

    Ok(id)
}

/// Parse a non-empty list of ids, dropping repeats
pub fn validate_id_values(values: &[String]) -> AppResult<BTreeSet<i64>> {
    if values.is_empty() {
        return Err(bad_request("Missing authors id parameter"));
    }

    values.iter().map(|v| validate_id(Some(v))).collect()
}

pub fn validate_name(param: &str, value: Option<&str>) -> AppResult<String> {
    let value = normalize_spaces(require(param, value)?);

    if !value.validate_length(None, Some(NAME_MAX_LEN), None) {
        return Err(too_long(param, NAME_MAX_LEN));
    }

    if !value.chars().all(char::is_alphabetic) {
        return Err(AppError::BadRequest(format!(
            "{} parameter must contain only letters",
            param
        )));
    }

    Ok(value)
}

pub fn validate_title(param: &str, value: Option<&str>) -> AppResult<String> {
    let value = normalize_spaces(require(param, value)?);

    if !value.validate_length(None, Some(TITLE_MAX_LEN), None) {
        return Err(too_long(param, TITLE_MAX_LEN));
    }

    if !value
        .chars()
        .all(|c| c.is_alphabetic() || c.is_ascii_digit() || c == ' ')
    {
        return Err(AppError::BadRequest(format!(
            "Only letters and numbers are allowed in the {} parameter",
            param
        )));
    }

    Ok(value)
}

pub fn validate_year(param: &str, value: Option<&str>) -> AppResult<i32> {
    let value = require(param, value)?;

    if !value.validate_length(None, None, Some(YEAR_LEN)) {
        return Err(AppError::BadRequest(format!(
            "{} parameter must contain only 4 numbers",
            param
        )));
    }

    let year: i32 = value
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Incorrect {} parameter", param)))?;

    if year <= 0 {
        return Err(AppError::BadRequest(format!(
            "{} must be a positive number",
            param
        )));
    }

    Ok(year)
}

pub fn validate_phone(param: &str, value: Option<&str>) -> AppResult<String> {
    let value = require(param, value)?;

    if !PHONE.is_match(value) {
        return Err(bad_request(
            "The phone number must be in this format: +7(xxx)-xxx-xx-xx",
        ));
    }

    Ok(value.to_string())
}

pub fn validate_content(param: &str, value: Option<&str>) -> AppResult<String> {
    let value = normalize_spaces(require(param, value)?);

    if !value.validate_length(None, Some(CONTENT_MAX_LEN), None) {
        return Err(too_long(param, CONTENT_MAX_LEN));
    }

    Ok(value)
}

fn require<'a>(param: &str, value: Option<&'a str>) -> AppResult<&'a str> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::BadRequest(format!("Missing {} parameter", param))),
    }
}

fn too_long(param: &str, max: u64) -> AppError {
    AppError::BadRequest(format!(
        "{} parameter must be no more than {} characters",
        param, max
    ))
}

fn bad_request(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}
