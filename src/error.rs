// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    /// A provider "hook" was used while its provider was not mounted.
    ProviderNotMounted(ProviderKind),
}

/// Overlay providers that can be mounted in a [`Providers`](crate::ui::providers::Providers)
/// registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Alert,
    Toast,
}

impl ProviderKind {
    /// Name of the provider as it appears in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ProviderKind::Alert => "AlertProvider",
            ProviderKind::Toast => "ToastProvider",
        }
    }

    /// Name of the consumption hook guarded by this provider.
    pub fn hook(self) -> &'static str {
        match self {
            ProviderKind::Alert => "alert()",
            ProviderKind::Toast => "toast()",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::ProviderNotMounted(kind) => write!(
                f,
                "{} must be used within a mounted {}",
                kind.hook(),
                kind.name()
            ),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn provider_not_mounted_names_hook_and_provider() {
        let err = Error::ProviderNotMounted(ProviderKind::Toast);
        assert_eq!(
            format!("{}", err),
            "toast() must be used within a mounted ToastProvider"
        );

        let err = Error::ProviderNotMounted(ProviderKind::Alert);
        assert!(format!("{}", err).contains("AlertProvider"));
    }

    #[test]
    fn toml_parse_error_becomes_config_error() {
        let parse: std::result::Result<toml::Table, _> = toml::from_str("a = = b");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }
}
