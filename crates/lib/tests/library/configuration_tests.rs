//! End-to-end configuration generation against a real project directory.

use std::fs;
use std::path::PathBuf;

use serial_test::serial;
use tempfile::TempDir;

use webcfg_lib::bundler::{BuildConfiguration, ConfigurationBuilder, Plugin};
use webcfg_lib::consts::OUT_DIR_VAR;
use webcfg_lib::environment::Environment;
use webcfg_lib::settings::BuildSettings;
use webcfg_lib::util::hash::Hashable;

fn project(files: &[&str]) -> TempDir {
  let temp = TempDir::new().unwrap();
  for file in files {
    fs::write(temp.path().join(file), "").unwrap();
  }
  temp
}

fn generate(root: &TempDir, env: Environment) -> BuildConfiguration {
  ConfigurationBuilder::new(root.path())
    .environment(env)
    .settings(BuildSettings::from_env())
    .build()
}

#[test]
#[serial]
fn typescript_project_with_ejs_template() {
  let root = project(&["main.ts", "main.js", "index.ejs"]);
  let config = temp_env::with_var(OUT_DIR_VAR, None::<&str>, || generate(&root, Environment::default()));

  assert_eq!(config.entry, root.path().join("main.ts"));
  let Plugin::Html(html) = &config.plugins[1] else {
    panic!("second plugin should generate markup");
  };
  assert_eq!(html.template, root.path().join("index.ejs"));
}

#[test]
#[serial]
fn javascript_project_with_html_template() {
  let root = project(&["main.js", "index.html"]);
  let config = temp_env::with_var(OUT_DIR_VAR, None::<&str>, || generate(&root, Environment::default()));

  assert_eq!(config.entry, root.path().join("main.js"));
  let Plugin::Html(html) = &config.plugins[1] else {
    panic!("second plugin should generate markup");
  };
  assert_eq!(html.template, root.path().join("index.html"));
}

#[test]
#[serial]
fn output_dir_follows_override() {
  let root = project(&["main.ts"]);
  let custom = root.path().join("dist");

  let overridden = temp_env::with_var(OUT_DIR_VAR, Some(custom.as_os_str()), || {
    generate(&root, Environment::default())
  });
  assert_eq!(overridden.output.path, custom);

  let reverted = temp_env::with_var(OUT_DIR_VAR, None::<&str>, || generate(&root, Environment::default()));
  assert_eq!(reverted.output.path, root.path().join("wwwroot"));
}

#[test]
#[serial]
fn identical_inputs_give_identical_configurations() {
  let root = project(&["main.ts"]);
  let env = Environment::from_args(["production", "extractStyles"]);

  let (first, second) = temp_env::with_var(OUT_DIR_VAR, None::<&str>, || {
    (generate(&root, env.clone()), generate(&root, env.clone()))
  });

  assert_eq!(first, second);
  assert_eq!(first.compute_hash().unwrap(), second.compute_hash().unwrap());
}

#[test]
#[serial]
fn conditional_plugins_track_flags() {
  let root = project(&["main.ts"]);
  let plain = temp_env::with_var(OUT_DIR_VAR, None::<&str>, || generate(&root, Environment::default()));
  assert_eq!(plain.plugin_names(), vec![Plugin::CLEAN, Plugin::HTML]);

  let analyzed = temp_env::with_var(OUT_DIR_VAR, None::<&str>, || {
    generate(&root, Environment::from_args(["analyze"]))
  });
  assert_eq!(
    analyzed.plugin_names(),
    vec![Plugin::CLEAN, Plugin::HTML, Plugin::BUNDLE_ANALYZER]
  );
  assert_eq!(analyzed.context, PathBuf::from(root.path()));
}
