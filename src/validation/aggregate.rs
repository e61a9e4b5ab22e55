//! Field error aggregation.

use crate::error::FatalError;
use crate::validation::error::{AggregatedBindError, BindError, FieldErrors, RequestError};

/// Turn a binder error into the error handed back to the handler.
///
/// Field failures become a [`RequestError::Bind`] carrying the field list and
/// a sentence. Every other variant is returned as-is in
/// [`RequestError::Other`]. An empty field set breaks the sentence builder's
/// precondition and yields [`RequestError::Fatal`].
pub fn aggregate(err: BindError) -> RequestError {
    match err {
        BindError::Fields(errors) => {
            let fields = field_list(&errors);
            match to_human(&fields) {
                Ok(message) => {
                    RequestError::Bind(AggregatedBindError::new(errors, message, fields))
                }
                Err(fatal) => RequestError::Fatal(fatal),
            }
        }
        other => RequestError::Other(other),
    }
}

/// Lower-cased field names in the order the binder reported them.
pub fn field_list(errors: &FieldErrors) -> Vec<String> {
    errors.keys().map(|key| key.to_lowercase()).collect()
}

/// `"a is required."` or `"a, b and c are required."`.
pub fn to_human(fields: &[String]) -> Result<String, FatalError> {
    let (last, rest) = fields
        .split_last()
        .ok_or(FatalError::InvalidArgument("at least one field name is required"))?;

    let mut sentence = String::new();
    if !rest.is_empty() {
        sentence.push_str(&rest.join(", "));
        sentence.push_str(" and ");
    }
    sentence.push_str(last);
    sentence.push_str(if rest.is_empty() { " is " } else { " are " });
    sentence.push_str("required.");
    Ok(sentence)
}
