use fable_pack::core::interfaces::InputSource;
use fable_pack::core::models::{ConfigOverrides, PORT_VARIABLE};
use fable_pack::infrastructure::ProjectInputSource;
use fable_pack::utils::CONFIG_FILE_NAME;
use fable_pack::{BuildMode, ConfigAssembler, PackError};
use std::collections::HashMap;

fn project() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("src/Client")).unwrap();
    std::fs::create_dir_all(dir.path().join("src/ServiceWorker")).unwrap();
    dir
}

#[tokio::test]
async fn test_project_with_env_file() {
    let dir = project();
    std::fs::write(dir.path().join(".env"), "SUAVE_FABLE_PORT=8095\n").unwrap();

    let inputs = ProjectInputSource::new(dir.path())
        .with_args(["fable-pack", "config"])
        .load()
        .await
        .unwrap();
    let config = ConfigAssembler::new().assemble(&inputs);

    assert_eq!(config.mode, BuildMode::Development);
    assert_eq!(config.dev_server.proxy[0].target, "http://localhost:8095");

    let root = dir.path().canonicalize().unwrap();
    assert_eq!(config.entry["client"], root.join("src/Client/Client.fsproj"));
    assert_eq!(config.output.path, root.join("public"));
}

#[tokio::test]
async fn test_process_env_beats_env_file() {
    let dir = project();
    std::fs::write(dir.path().join(".env"), "SUAVE_FABLE_PORT=8095\n").unwrap();

    let env = HashMap::from([(PORT_VARIABLE.to_string(), "7000".to_string())]);
    let inputs = ProjectInputSource::new(dir.path())
        .with_args(["fable-pack", "config", "-p"])
        .with_process_env(env)
        .load()
        .await
        .unwrap();
    let config = ConfigAssembler::new().assemble(&inputs);

    assert_eq!(config.mode, BuildMode::Production);
    assert!(config.plugins.is_empty());
    assert_eq!(config.dev_server.proxy[0].target, "http://localhost:7000");
}

#[tokio::test]
async fn test_config_file_overrides() {
    let dir = project();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        r#"{
  "devServerHost": "localhost",
  "outputDir": "wwwroot",
  "portVariable": "API_PORT",
  "defaultApiPort": "5000"
}"#,
    )
    .unwrap();

    let inputs = ProjectInputSource::new(dir.path())
        .with_cli_overrides(ConfigOverrides {
            dev_server_port: Some(8443),
            ..Default::default()
        })
        .load()
        .await
        .unwrap();
    let config = ConfigAssembler::new().assemble(&inputs);

    assert_eq!(config.dev_server.host, "localhost");
    assert_eq!(config.dev_server.port, 8443);
    assert_eq!(config.dev_server.proxy[0].target, "http://localhost:5000");
    assert_eq!(config.output.path, dir.path().canonicalize().unwrap().join("wwwroot"));
    // Overrides never touch the rule table
    assert_eq!(config.module.rules.len(), 4);
}

#[tokio::test]
async fn test_invalid_config_file() {
    let dir = project();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), r#"{"devServerPort": "high"}"#).unwrap();

    let err = ProjectInputSource::new(dir.path()).load().await.unwrap_err();

    assert!(matches!(err, PackError::Config { .. }));
    assert!(err.format_detailed().contains(CONFIG_FILE_NAME));
}

#[tokio::test]
async fn test_config_file_output_dir_cannot_leave_root() {
    for escape in ["/tmp/elsewhere", "../outside", "public/../../outside"] {
        let dir = project();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            format!(r#"{{"outputDir": "{}"}}"#, escape),
        )
        .unwrap();

        let err = ProjectInputSource::new(dir.path()).load().await.unwrap_err();

        assert!(matches!(err, PackError::Config { .. }), "{}", escape);
        assert!(err.to_string().contains(escape), "{}", escape);
    }
}
