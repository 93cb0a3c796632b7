//! # homegated — homegate daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env var overrides)
//! - Initialize the `tracing` subscriber
//! - Build the immutable endpoint registry and share it
//! - Construct the sensor and proxy adapters
//! - Construct application services, injecting adapters via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no dispatch logic belongs here.

mod config;

use std::sync::Arc;

use homegate_adapter_http_axum::state::AppState;
use homegate_adapter_proxy_reqwest::HttpDeviceProxy;
use homegate_adapter_virtual::devices;
use homegate_adapter_virtual::devices::light::{DimmableLight, NonDimmableLight};
use homegate_adapter_virtual::devices::switch::VirtualSwitch;
use homegate_adapter_virtual::devices::thermometer::VirtualThermometer;
use homegate_adapter_virtual::sensor::VirtualSensor;
use homegate_app::services::light_service::LightService;
use homegate_app::services::switch_service::SwitchService;
use homegate_app::services::thermometer_service::ThermometerService;
use homegate_domain::registry::{EndpointRegistry, Target};

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    let mut registry = config.registry();
    if config.integrations.virtual_enabled {
        registry = with_virtual_devices(registry).await?;
    }
    let registry = Arc::new(registry);

    // The on-board sensor driver plugs in behind the SensorReader port;
    // the virtual sensor stands in until one is wired.
    let sensor = Arc::new(VirtualSensor::default());
    let proxy = Arc::new(HttpDeviceProxy::with_timeouts(
        config.proxy_timeout(),
        config.proxy_connect_timeout(),
    )?);

    let state = AppState::new(
        ThermometerService::new(
            Arc::clone(&registry),
            Arc::clone(&sensor),
            Arc::clone(&proxy),
        ),
        LightService::new(Arc::clone(&registry), Arc::clone(&proxy)),
        SwitchService::new(Arc::clone(&registry), proxy),
    );
    let app = homegate_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(addr = %bind_addr, "homegated listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Spawn simulated upstream devices and register them under well-known
/// names, so the gateway runs end-to-end without any hardware.
async fn with_virtual_devices(
    registry: EndpointRegistry,
) -> Result<EndpointRegistry, std::io::Error> {
    let dimmable = DimmableLight::new(700);
    let (dimmable_addr, _) = devices::serve(dimmable.router()).await?;
    let relay = NonDimmableLight::new("off");
    let (relay_addr, _) = devices::serve(relay.router()).await?;
    let switch = VirtualSwitch::new("off");
    let (switch_addr, _) = devices::serve(switch.router()).await?;
    let thermometer = VirtualThermometer::new(21.5, 40.0);
    let (thermometer_addr, _) = devices::serve(thermometer.router()).await?;

    tracing::info!(
        light = %dimmable_addr,
        relay = %relay_addr,
        switch = %switch_addr,
        thermometer = %thermometer_addr,
        "virtual devices online"
    );

    Ok(registry
        .into_builder()
        .dimmable("window", format!("http://{dimmable_addr}/"))
        .nondimmable("floor", format!("http://{relay_addr}/"))
        .switch("wall", format!("http://{switch_addr}/"))
        .thermometer(
            "window",
            Target::Remote(format!("http://{thermometer_addr}/")),
        )
        .build())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
