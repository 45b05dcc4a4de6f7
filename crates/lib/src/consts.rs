// Environment variable overrides for `BuildSettings`.
pub const FEATURES_DIR_VAR: &str = "WEBCFG_FEATURES_DIR";
pub const COMPONENT_DIR_VAR: &str = "WEBCFG_COMPONENT_DIR";
pub const OUT_DIR_VAR: &str = "WEBCFG_OUT_DIR";
pub const WEB_TITLE_VAR: &str = "WEBCFG_WEB_TITLE";
pub const BASE_URL_VAR: &str = "WEBCFG_BASE_URL";

pub const DEFAULT_FEATURES_DIR: &str = "./Features";
pub const DEFAULT_COMPONENT_DIR: &str = "./Components";
pub const DEFAULT_OUT_DIR_NAME: &str = "wwwroot";
pub const DEFAULT_BASE_URL: &str = "/";

/// Alias under which the shared `styles` directory is importable.
pub const STYLES_ALIAS: &str = "SharedStyles";
pub const STYLES_DIR: &str = "./styles";

pub const MODULES_DIR: &str = "node_modules";

pub const ENTRY_CANDIDATE: &str = "main.ts";
pub const ENTRY_FALLBACK: &str = "main.js";
pub const TEMPLATE_CANDIDATE: &str = "index.ejs";
pub const TEMPLATE_FALLBACK: &str = "index.html";

/// Task key reserved for the consuming package's composed build.
pub const BUILD_TASK: &str = "build";
/// Task key the runner invokes when no task is named.
pub const DEFAULT_TASK: &str = "default";
pub const NO_DEFAULT_TASK_MESSAGE: &str = "There is no default task";

/// Number of hex characters shown for a configuration fingerprint.
pub const HASH_PREFIX_LEN: usize = 12;
