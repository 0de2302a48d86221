use crate::utils::error::{Result, RsvpError};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RsvpError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RsvpError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RsvpError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique_names(field_name: &str, names: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        validate_non_empty_string(field_name, name)?;
        if !seen.insert(name.as_str()) {
            return Err(RsvpError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: name.clone(),
                reason: "Duplicate entry".to_string(),
            });
        }
    }
    Ok(())
}

/// Every entry of `subset` must appear in `allowed`.
pub fn validate_subset(field_name: &str, subset: &[String], allowed: &[String]) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed.iter().map(String::as_str).collect();

    for item in subset {
        if !allowed_set.contains(item.as_str()) {
            return Err(RsvpError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: item.clone(),
                reason: format!("Not one of: {}", allowed.join(", ")),
            });
        }
    }

    Ok(())
}
