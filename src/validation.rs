//! Input validation module
//!
//! Request bodies for the selection endpoints and their validation.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Body of `POST /api/dashboard/metric`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MetricSelection {
    #[validate(length(min = 1, message = "Metric must not be empty"))]
    pub metric: String,
}

/// Body of `POST /api/dashboard/time-range`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TimeRangeSelection {
    #[validate(length(min = 1, message = "Time range must not be empty"))]
    pub time_range: String,
}

/// Body of `POST /api/dashboard/tab`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TabSelection {
    #[validate(length(min = 1, max = 64, message = "Tab must be 1 to 64 characters"))]
    pub tab: String,
}

/// Run struct-level validation and flatten the messages into one error
pub fn validate_request<T: Validate>(input: &T) -> AppResult<()> {
    if let Err(validation_errors) = input.validate() {
        let error_messages: Vec<String> = validation_errors
            .field_errors()
            .iter()
            .map(|(field, errors)| {
                let msgs: Vec<&str> = errors
                    .iter()
                    .filter_map(|e| e.message.as_ref().map(|c| c.as_ref()))
                    .collect();
                format!("{}: {}", field, msgs.join(", "))
            })
            .collect();

        warn!(errors = ?error_messages, "Selection request validation failed");
        return Err(AppError::ValidationError(error_messages.join("; ")));
    }

    debug!("Selection request validation passed");
    Ok(())
}
