use std::{collections::BTreeMap, fmt, sync::Arc};

use crate::settings::SettingsError;

/// Application error: a stable key, named arguments and the underlying cause.
#[derive(Debug, Clone)]
pub struct FlycamError {
    pub key: &'static str,
    pub args: BTreeMap<&'static str, String>,
    pub cause: Option<Arc<dyn std::error::Error + Send + Sync>>,
}

impl FlycamError {
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            args: BTreeMap::new(),
            cause: None,
        }
    }

    pub fn with_arg(mut self, k: &'static str, v: impl ToString) -> Self {
        self.args.insert(k, v.to_string());
        self
    }

    fn caused_by(key: &'static str, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self {
            cause: Some(Arc::new(cause)),
            ..Self::new(key)
        }
    }
}

impl fmt::Display for FlycamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key)?;
        for (i, (k, v)) in self.args.iter().enumerate() {
            let sep = if i == 0 { " [" } else { ", " };
            write!(f, "{sep}{k}={v}")?;
        }
        if !self.args.is_empty() {
            f.write_str("]")?;
        }
        if let Some(cause) = &self.cause {
            write!(f, ": {cause}")?;
        }
        Ok(())
    }
}

impl std::error::Error for FlycamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        let cause = self.cause.as_deref()?;
        Some(cause)
    }
}

impl From<confy::ConfyError> for FlycamError {
    fn from(err: confy::ConfyError) -> Self {
        FlycamError::caused_by("settings-io", err)
    }
}

impl From<SettingsError> for FlycamError {
    fn from(err: SettingsError) -> Self {
        FlycamError::caused_by("settings-invalid", err)
    }
}

impl From<winit::error::EventLoopError> for FlycamError {
    fn from(err: winit::error::EventLoopError) -> Self {
        FlycamError::caused_by("event-loop", err)
    }
}

impl From<winit::error::OsError> for FlycamError {
    fn from(err: winit::error::OsError) -> Self {
        FlycamError::caused_by("window-create", err)
    }
}
