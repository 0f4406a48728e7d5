use std::fmt::{Display, Formatter};

/// Syslog severity of a cable modem log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Emergency,
    Alert,
    Critical,
    Error,
    Warning,
    Notice,
    Information,
    Debug,
}

impl Severity {
    /// Maps the `priority` code `"1"` to `"8"`, anything else is `None`.
    pub fn from_code(code: &str) -> Option<Severity> {
        match code {
            "1" => Some(Severity::Emergency),
            "2" => Some(Severity::Alert),
            "3" => Some(Severity::Critical),
            "4" => Some(Severity::Error),
            "5" => Some(Severity::Warning),
            "6" => Some(Severity::Notice),
            "7" => Some(Severity::Information),
            "8" => Some(Severity::Debug),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Severity::Emergency => "Emergency",
            Severity::Alert => "Alert",
            Severity::Critical => "Critical",
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Notice => "Notice",
            Severity::Information => "Information",
            Severity::Debug => "Debug",
        }
    }
}

/// Name of a `priority` code, empty for codes outside the table.
pub fn severity_name(code: &str) -> &'static str {
    Severity::from_code(code).map(|s| s.name()).unwrap_or_default()
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
