//! Casbin `model.conf` validation (`spec.md` §4.4): checked before a draft is
//! accepted and again, synchronously, before the enforcer reload coordinator
//! swaps it in — a model that fails to parse must never become active.

use casbin::DefaultModel;
use thiserror::Error;

const REQUIRED_SECTIONS: &[&str] = &["[request_definition]", "[policy_definition]", "[matchers]"];

#[derive(Debug, Error)]
pub enum ModelValidationError {
    #[error("model is missing required section {0}")]
    MissingSection(&'static str),
    #[error("model failed to parse: {0}")]
    ParseError(String),
}

/// Checks the required sections are present, then hands the text to
/// `casbin`'s own model loader so malformed matcher expressions or
/// request/policy definitions are rejected the same way the runtime
/// enforcer would reject them.
pub async fn validate_model_text(content: &str) -> Result<(), ModelValidationError> {
    for section in REQUIRED_SECTIONS {
        if !content.contains(section) {
            return Err(ModelValidationError::MissingSection(section));
        }
    }

    DefaultModel::from_str(content)
        .await
        .map_err(|e| ModelValidationError::ParseError(e.to_string()))?;
    Ok(())
}
