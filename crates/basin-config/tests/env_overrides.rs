use figment::Jail;
use basin_config::BasinConfig;

#[test]
fn env_vars_fill_config_values() {
    Jail::expect_with(|jail| {
        jail.set_env("BASIN_SERVER__HOST", "10.0.0.5");
        jail.set_env("BASIN_SERVER__PORT", "8888");
        jail.set_env("BASIN_GENERAL__DEFAULT_LIMIT", "5");

        let config = BasinConfig::load().expect("config loads");
        assert_eq!(config.server.host, "10.0.0.5");
        assert_eq!(config.server.port, 8888);
        assert_eq!(config.general.default_limit, 5);
        Ok(())
    });
}

#[test]
fn unprefixed_env_vars_are_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("SERVER__PORT", "9999");

        let config = BasinConfig::load().expect("config loads");
        assert_eq!(config.server.port, 5000);
        Ok(())
    });
}
