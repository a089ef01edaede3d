//! electron-packager command line codec.
//!
//! The packaging script stored under `scripts["package:win"]` is the only
//! source of truth: configuration views are recovered from its text with
//! [`parse`] and written back with [`build`].

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Tool name that marks a packaging script as an electron-packager invocation.
pub const PACKAGER_TOOL: &str = "electron-packager";

/// App name used by [`build`] when the configured name is empty.
pub const FALLBACK_APP_NAME: &str = "MyApp";

/// Architectures offered when editing a packaging script.
pub const SUPPORTED_ARCHES: [&str; 5] = ["x64", "ia32", "armv7l", "arm64", "all"];

static APP_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"electron-packager\s+\.\s+(\S+)").expect("valid regex"));
static ARCH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"--arch=(\S+)").expect("valid regex"));
static OUT_DIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--out=(\S+)").expect("valid regex"));
static OVERWRITE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s--overwrite\b").expect("valid regex"));
static ASAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s--asar\b").expect("valid regex"));

/// Structured view of an electron-packager command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackagerConfig {
    pub app_name: String,
    /// Copied verbatim from `--arch=`; not restricted to [`SUPPORTED_ARCHES`].
    pub arch: String,
    pub out_dir: String,
    pub overwrite: bool,
    pub asar: bool,
}

impl PackagerConfig {
    /// Defaults for a packaging script that does not exist yet.
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            arch: "x64".to_string(),
            out_dir: "build".to_string(),
            overwrite: false,
            asar: true,
        }
    }
}

/// Recover a [`PackagerConfig`] from a packaging script.
///
/// Every fragment is optional and falls back on its own. An empty script yields
/// [`PackagerConfig::new`]; a non-empty script without `--asar` yields
/// `asar = false`.
pub fn parse(script: &str, default_app_name: &str) -> PackagerConfig {
    let mut config = PackagerConfig::new(default_app_name);
    if script.is_empty() {
        return config;
    }

    if let Some(caps) = APP_NAME.captures(script) {
        config.app_name = caps[1].to_string();
    }
    if let Some(caps) = ARCH.captures(script) {
        config.arch = caps[1].to_string();
    }
    if let Some(caps) = OUT_DIR.captures(script) {
        config.out_dir = caps[1].to_string();
    }

    config.overwrite = OVERWRITE.is_match(script);
    config.asar = ASAR.is_match(script);

    config
}

/// Render a packaging script for the given configuration.
pub fn build(config: &PackagerConfig) -> String {
    let app_name = if config.app_name.is_empty() { FALLBACK_APP_NAME } else { &config.app_name };

    let mut command = format!("{PACKAGER_TOOL} . {app_name}");
    command.push_str(&format!(" --platform=win32 --arch={}", config.arch));
    command.push_str(&format!(" --out={}", config.out_dir));
    if config.overwrite {
        command.push_str(" --overwrite");
    }
    if config.asar {
        command.push_str(" --asar");
    }
    command
}

/// True when the script invokes electron-packager.
pub fn is_packager_script(script: &str) -> bool {
    script.contains(PACKAGER_TOOL)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn empty_script_yields_new_config_defaults() {
        let config = parse("", "Foo");

        assert_eq!(
            config,
            PackagerConfig {
                app_name: "Foo".into(),
                arch: "x64".into(),
                out_dir: "build".into(),
                overwrite: false,
                asar: true,
            }
        );
    }

    #[test]
    fn parse_reads_flags_and_defaults_asar_to_false() {
        let config = parse(
            "electron-packager . App --platform=win32 --arch=arm64 --out=dist --overwrite",
            "X",
        );

        assert_eq!(config.app_name, "App");
        assert_eq!(config.arch, "arm64");
        assert_eq!(config.out_dir, "dist");
        assert!(config.overwrite);
        assert!(!config.asar);
    }

    #[test]
    fn generated_script_rebuilds_identically() {
        let script = "electron-packager . MyApp --platform=win32 --arch=x64 --out=build --asar";

        let config = parse(script, "Ignored");

        assert_eq!(
            config,
            PackagerConfig {
                app_name: "MyApp".into(),
                arch: "x64".into(),
                out_dir: "build".into(),
                overwrite: false,
                asar: true,
            }
        );
        assert_eq!(build(&config), script);
    }

    #[test]
    fn parse_falls_back_per_field() {
        let config = parse("npx electron-packager --arch=ia32", "Fallback");

        assert_eq!(config.app_name, "Fallback");
        assert_eq!(config.arch, "ia32");
        assert_eq!(config.out_dir, "build");
        assert!(!config.overwrite);
        assert!(!config.asar);
    }

    #[test]
    fn parse_accepts_unknown_arch_verbatim() {
        let config = parse("electron-packager . A --arch=riscv64", "A");
        assert_eq!(config.arch, "riscv64");
    }

    #[test]
    fn flags_require_word_boundary() {
        let config = parse("electron-packager . A --asarx --overwrites", "A");
        assert!(!config.asar);
        assert!(!config.overwrite);
    }

    #[test]
    fn build_uses_fallback_name_and_fixed_flag_order() {
        let config = PackagerConfig {
            app_name: String::new(),
            arch: "all".into(),
            out_dir: "out".into(),
            overwrite: true,
            asar: true,
        };

        assert_eq!(
            build(&config),
            "electron-packager . MyApp --platform=win32 --arch=all --out=out --overwrite --asar"
        );
    }

    #[test]
    fn detects_packager_scripts() {
        assert!(is_packager_script("npx electron-packager . A"));
        assert!(!is_packager_script("electron-builder --win portable --x64"));
    }

    fn config_strategy() -> impl Strategy<Value = PackagerConfig> {
        (
            "[A-Za-z][A-Za-z0-9_-]{0,12}",
            prop::sample::select(SUPPORTED_ARCHES.to_vec()),
            "[A-Za-z0-9_./]{1,12}",
            any::<bool>(),
            any::<bool>(),
        )
            .prop_map(|(app_name, arch, out_dir, overwrite, asar)| PackagerConfig {
                app_name,
                arch: arch.to_string(),
                out_dir,
                overwrite,
                asar,
            })
    }

    proptest! {
        #[test]
        fn build_then_parse_preserves_packaging_options(config in config_strategy()) {
            let parsed = parse(&build(&config), &config.app_name);

            prop_assert_eq!(&parsed.arch, &config.arch);
            prop_assert_eq!(&parsed.out_dir, &config.out_dir);
            prop_assert_eq!(parsed.overwrite, config.overwrite);
            prop_assert_eq!(parsed.asar, config.asar);
            prop_assert_eq!(&parsed.app_name, &config.app_name);
        }
    }
}
