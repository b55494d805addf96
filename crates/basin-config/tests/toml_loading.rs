//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use basin_config::BasinConfig;

#[test]
fn loads_server_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[server]
host = "0.0.0.0"
port = 8080
"#,
        )?;

        let config: BasinConfig = Figment::from(Serialized::defaults(BasinConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.bind_addr(), "0.0.0.0:8080");
        Ok(())
    });
}

#[test]
fn loads_general_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_limit = 50
"#,
        )?;

        let config: BasinConfig = Figment::from(Serialized::defaults(BasinConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.default_limit, 50);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[server]
port = 9000
"#,
        )?;

        let config: BasinConfig = Figment::from(Serialized::defaults(BasinConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.general.default_limit, 20);
        Ok(())
    });
}

#[test]
fn env_beats_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[server]
port = 9000
"#,
        )?;
        jail.set_env("BASIN_SERVER__PORT", "7070");

        let config: BasinConfig = Figment::from(Serialized::defaults(BasinConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("BASIN_").split("__"))
            .extract()?;

        assert_eq!(config.server.port, 7070);
        Ok(())
    });
}
