use webcfg_lib::consts::{BASE_URL_VAR, COMPONENT_DIR_VAR, FEATURES_DIR_VAR, OUT_DIR_VAR, WEB_TITLE_VAR};
use webcfg_lib::settings::BuildSettings;

use crate::output::{print_info, print_stat};

pub fn cmd_info() {
  let settings = BuildSettings::from_env();
  let out_dir = settings
    .out_dir
    .as_ref()
    .map(|p| p.display().to_string())
    .unwrap_or_else(|| "<root>/wwwroot".to_string());

  print_info("Settings:");
  print_stat(FEATURES_DIR_VAR, &settings.features_dir);
  print_stat(COMPONENT_DIR_VAR, &settings.component_dir);
  print_stat(OUT_DIR_VAR, &out_dir);
  print_stat(WEB_TITLE_VAR, &settings.title);
  print_stat(BASE_URL_VAR, &settings.base_url);
}
