use thiserror::Error;

pub type PlatformResult<T> = Result<T, PlatformError>;

/// Failures coming from the Telegram WebApp integration.
///
/// None of these are fatal: the shell keeps working without the platform.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    #[error("failed to load Telegram WebApp SDK from {0}")]
    ScriptLoad(String),
    #[error("Telegram WebApp method `{0}` is not supported by this client")]
    Unsupported(&'static str),
    #[error("Telegram WebApp method `{method}` failed: {reason}")]
    CallFailed { method: &'static str, reason: String },
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl PlatformError {
    pub fn is_unsupported(&self) -> bool {
        matches!(self, PlatformError::Unsupported(_))
    }
}

/// Runs a platform call that is allowed to fail.
///
/// Unsupported methods are expected on older clients and only logged at debug level.
pub fn best_effort<T>(what: &str, result: PlatformResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) if err.is_unsupported() => {
            log::debug!("{}: {}", what, err);
            None
        }
        Err(err) => {
            log::warn!("Некоторые методы Telegram WebApp не поддерживаются ({}): {}", what, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_effort_swallows_errors() {
        assert_eq!(best_effort("ready", Ok(5)), Some(5));
        assert_eq!(
            best_effort::<()>("ready", Err(PlatformError::Unsupported("ready"))),
            None
        );
        assert_eq!(
            best_effort::<()>(
                "expand",
                Err(PlatformError::CallFailed {
                    method: "expand",
                    reason: "boom".into()
                })
            ),
            None
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PlatformError::Unsupported("showPopup").to_string(),
            "Telegram WebApp method `showPopup` is not supported by this client"
        );
        assert!(!PlatformError::ScriptLoad("x".into()).is_unsupported());
    }
}
