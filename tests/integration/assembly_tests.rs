use fable_pack::core::models::PORT_VARIABLE;
use fable_pack::core::plugin::PluginId;
use fable_pack::{BaseDir, BuildInputs, BuildMode, ConfigAssembler, PackError};
use std::path::PathBuf;

fn base() -> BaseDir {
    BaseDir::new("/home/dev/suave-fable").unwrap()
}

#[test]
fn test_development_build_example() {
    let inputs = BuildInputs::new(base()).with_args(["node", "build"]);
    assert_eq!(inputs.mode().status_line(), "Bundling for development...");

    let config = ConfigAssembler::new().assemble(&inputs);

    assert!(config.plugins.len() >= 1);
    assert_eq!(config.dev_server.proxy[0].target, "http://localhost:8085");
}

#[test]
fn test_production_build_example() {
    for port in [None, Some("9000"), Some("garbage")] {
        let mut inputs = BuildInputs::new(base()).with_args(["node", "build", "-p"]);
        if let Some(port) = port {
            inputs = inputs.with_var(PORT_VARIABLE, port);
        }

        assert_eq!(inputs.mode().status_line(), "Bundling for production...");
        let config = ConfigAssembler::new().assemble(&inputs);
        assert!(config.plugins.is_empty(), "port {:?}", port);
    }
}

#[test]
fn test_port_string_is_embedded_verbatim() {
    for port in ["8085", "65536", "abc", "", "unix:/run/api.sock"] {
        let inputs = BuildInputs::new(base()).with_var(PORT_VARIABLE, port);
        let config = ConfigAssembler::new().assemble(&inputs);

        assert_eq!(config.dev_server.proxy[0].target, format!("http://localhost:{}", port));
    }
}

#[test]
fn test_entry_points_need_absolute_base() {
    assert!(matches!(BaseDir::new("suave-fable"), Err(PackError::InvalidBaseDir(_))));
    assert!(matches!(BaseDir::new("./suave-fable"), Err(PackError::InvalidBaseDir(_))));

    let config = ConfigAssembler::new().assemble(&BuildInputs::new(base()));
    for path in config.entry.values() {
        assert!(path.is_absolute());
        assert!(path.starts_with("/home/dev/suave-fable"));
    }
}

#[test]
fn test_rules_route_first_match() {
    let config = ConfigAssembler::new().assemble(&BuildInputs::new(base()));
    let rules = &config.module.rules;

    assert_eq!(rules.route_index("/home/dev/suave-fable/src/Client/Client.fsproj"), Some(0));
    assert_eq!(rules.route_index("/home/dev/suave-fable/src/util.js"), Some(1));
    assert_eq!(rules.route_index("/home/dev/suave-fable/node_modules/x/index.js"), None);
    assert_eq!(rules.route_index("/home/dev/suave-fable/sass/main.sass"), Some(2));
    assert_eq!(rules.route_index("/home/dev/suave-fable/fonts/fa.woff?v=4.7.0"), Some(3));
}

#[test]
fn test_babel_presets_resolved_into_node_modules() {
    let config = ConfigAssembler::new().assemble(&BuildInputs::new(base()));
    let json = serde_json::to_value(&config).unwrap();

    let babel = &json["module"]["rules"][1]["use"][0]["options"];
    assert_eq!(
        babel["presets"][0][0],
        "/home/dev/suave-fable/node_modules/babel-preset-env"
    );
    assert_eq!(
        babel["plugins"][0],
        "/home/dev/suave-fable/node_modules/babel-plugin-transform-runtime"
    );
    // fable-loader shares the same babel options
    assert_eq!(json["module"]["rules"][0]["use"][0]["options"]["babel"], *babel);
}

#[test]
fn test_json_shape() {
    let config = ConfigAssembler::new().assemble(&BuildInputs::new(base()).with_args(["-p"]));
    let json = serde_json::to_value(&config).unwrap();

    assert_eq!(json["mode"], "production");
    assert_eq!(json["devtool"], "source-map");
    assert_eq!(json["output"]["publicPath"], "/public");
    assert_eq!(json["output"]["filename"], "[name].js");
    assert_eq!(json["devServer"]["proxy"][0]["changeOrigin"], true);
    assert_eq!(json["resolve"]["modules"][0], "/home/dev/suave-fable/node_modules");
    assert_eq!(json["plugins"], serde_json::json!([]));
}

#[test]
fn test_proxy_routing() {
    let config = ConfigAssembler::new().assemble(&BuildInputs::new(base()).with_var(PORT_VARIABLE, "8090"));
    let server = &config.dev_server;

    let rule = server.proxy_for("/api/users?id=1").unwrap();
    assert_eq!(rule.forward_url("/api/users?id=1"), "http://localhost:8090/api/users?id=1");
    assert!(server.proxy_for("/public/client.js").is_none());
}

#[test]
fn test_development_plugins() {
    let config = ConfigAssembler::new().assemble(&BuildInputs::new(base()));
    assert_eq!(config.mode, BuildMode::Development);
    assert_eq!(
        config.plugins,
        vec![PluginId::HotModuleReplacement, PluginId::NamedModules]
    );
    assert_eq!(config.output.path, PathBuf::from("/home/dev/suave-fable/public"));
}
