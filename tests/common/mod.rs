//! Shared fixtures for integration tests.

use std::sync::Once;

use rest_router::{EntityRouteProvider, ModularRouter, Parameters, RestConfig};

static INIT: Once = Once::new();

/// Install a test subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "rest_router=debug".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Load one of the TOML fixtures under `tests/fixtures`.
pub fn load_fixture(name: &str) -> RestConfig {
    let content = match name {
        "config" => include_str!("../fixtures/config.toml"),
        "config_disabled" => include_str!("../fixtures/config_disabled.toml"),
        "config_only" => include_str!("../fixtures/config_only.toml"),
        "config_except" => include_str!("../fixtures/config_except.toml"),
        "config_except_only" => include_str!("../fixtures/config_except_only.toml"),
        "config_invalid_alias" => include_str!("../fixtures/config_invalid_alias.toml"),
        "config_multi" => include_str!("../fixtures/config_multi.toml"),
        other => panic!("unknown fixture {other}"),
    };
    toml::from_str(content).expect("fixture should deserialize")
}

/// A router with the given fixture registered as its only provider.
#[allow(dead_code)]
pub fn router_for(name: &str) -> ModularRouter {
    let mut router = ModularRouter::new();
    router
        .add_route_collection_provider(&EntityRouteProvider::new(load_fixture(name)))
        .expect("fixture should register");
    router
}

#[allow(dead_code)]
pub fn params(pairs: &[(&str, &str)]) -> Parameters {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
