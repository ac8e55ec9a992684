use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::codec::CodecKind;
use crate::error::ConfigError;

/// Settings for the demo binary. Every field is optional in the file.
///
/// ```toml
/// codec = "bincode"
/// color = false
/// trace_addresses = true
/// log_level = "debug"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub codec: CodecKind,
    pub color: bool,
    pub trace_addresses: bool,
    pub log_level: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            codec: CodecKind::default(),
            color: true,
            trace_addresses: true,
            log_level: "warn".to_string(),
        }
    }
}

impl DemoConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }
}

/// Command line flags. They override the values read from `--config`.
#[derive(Parser, Debug, Default, PartialEq)]
#[command(name = "copy-semantics")]
#[command(about = "Shallow versus deep copies of a record with shared map and vector fields")]
pub struct CliArgs {
    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Codec used for the deep copy round-trip
    #[arg(long, value_parser = clap::value_parser!(CodecKind), ignore_case = true)]
    pub codec: Option<CodecKind>,

    /// Print traces without colors
    #[arg(long)]
    pub no_color: bool,

    /// Leave storage addresses out of the traces
    #[arg(long)]
    pub no_addresses: bool,
}

impl CliArgs {
    /// Loads the config file if one was given, then applies flag overrides.
    pub fn resolve(&self) -> Result<DemoConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => DemoConfig::load(path)?,
            None => DemoConfig::default(),
        };
        if let Some(codec) = self.codec {
            config.codec = codec;
        }
        if self.no_color {
            config.color = false;
        }
        if self.no_addresses {
            config.trace_addresses = false;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use std::ffi::OsString;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_toml_uses_defaults() {
        assert_eq!(DemoConfig::from_toml("").unwrap(), DemoConfig::default());
    }

    #[test]
    fn test_parse_full_toml() {
        let toml = "codec = \"json\"\ncolor = false\ntrace_addresses = false\nlog_level = \"debug\"\n";
        let config = DemoConfig::from_toml(toml).unwrap();
        assert_eq!(config.codec, CodecKind::Json);
        assert!(!config.color);
        assert!(!config.trace_addresses);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_unknown_codec_in_toml() {
        let result = DemoConfig::from_toml("codec = \"gob\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_unknown_key_in_toml() {
        let result = DemoConfig::from_toml("colour = true\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "codec = \"bincode\"").unwrap();
        let config = DemoConfig::load(file.path()).unwrap();
        assert_eq!(config.codec, CodecKind::Bincode);
        assert!(config.color);
    }

    #[test]
    fn test_load_missing_file() {
        let result = DemoConfig::load(Path::new("/nonexistent/copy-semantics.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_cli_parse_flags() {
        let args =
            CliArgs::try_parse_from(["copy-semantics", "--codec", "json", "--no-color"]).unwrap();
        assert_eq!(args.codec, Some(CodecKind::Json));
        assert!(args.no_color);
        assert!(!args.no_addresses);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_cli_codec_alias_and_case() {
        let args = CliArgs::try_parse_from(["copy-semantics", "--codec", "MessagePack"]).unwrap();
        assert_eq!(args.codec, Some(CodecKind::Msgpack));
    }

    #[test]
    fn test_cli_no_args_is_default() {
        let args = CliArgs::try_parse_from(["copy-semantics"]).unwrap();
        assert_eq!(args, CliArgs::default());
        assert_eq!(args.resolve().unwrap(), DemoConfig::default());
    }

    #[test]
    fn test_cli_errors() {
        assert!(CliArgs::try_parse_from(["copy-semantics", "--codec"]).is_err());

        let err = CliArgs::try_parse_from(["copy-semantics", "--codec", "gob"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);

        let err = CliArgs::try_parse_from(["copy-semantics", "--verbose"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "codec = \"bincode\"\ntrace_addresses = true").unwrap();

        let args = CliArgs::try_parse_from([
            OsString::from("copy-semantics"),
            OsString::from("--config"),
            file.path().as_os_str().to_owned(),
            OsString::from("--codec"),
            OsString::from("json"),
            OsString::from("--no-addresses"),
        ])
        .unwrap();
        let config = args.resolve().unwrap();
        assert_eq!(config.codec, CodecKind::Json);
        assert!(!config.trace_addresses);
    }
}
