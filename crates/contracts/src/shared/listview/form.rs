use thiserror::Error;

/// A required field was missing on submit. The message is shown to the
/// user; the field name lets the UI highlight the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FormError {
    pub field: &'static str,
    pub message: String,
}

impl FormError {
    pub fn required(field: &'static str, label: &str) -> Self {
        Self {
            field,
            message: format!("{label} is required."),
        }
    }
}

/// Form state that can gate its own submission.
pub trait FormModel {
    fn validate(&self) -> Result<(), FormError>;
}

/// Hand the form to `deliver` only when validation passes. On failure
/// the form value is untouched so already-entered fields survive for
/// retry.
pub fn try_submit<T, F>(form: &T, deliver: F) -> Result<(), FormError>
where
    T: FormModel + Clone,
    F: FnOnce(T),
{
    form.validate()?;
    deliver(form.clone());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::player::aggregate::PlayerDto;

    #[test]
    fn missing_first_name_blocks_submit_and_preserves_fields() {
        let form = PlayerDto {
            last_name: "Ramirez".to_string(),
            ..Default::default()
        };

        let mut delivered = None;
        let err = try_submit(&form, |dto| delivered = Some(dto)).unwrap_err();

        assert!(delivered.is_none());
        assert_eq!(err.field, "firstName");
        // the form keeps what the user already typed
        assert_eq!(form.last_name, "Ramirez");
    }

    #[test]
    fn valid_form_is_delivered_once() {
        let form = PlayerDto {
            first_name: "Maya".to_string(),
            last_name: "Chen".to_string(),
            jersey_number: Some(7),
            ..Default::default()
        };

        let mut delivered = None;
        try_submit(&form, |dto| delivered = Some(dto)).unwrap();

        let dto = delivered.expect("submit callback not invoked");
        assert_eq!(dto.first_name, "Maya");
        assert_eq!(dto.jersey_number, Some(7));
    }
}
