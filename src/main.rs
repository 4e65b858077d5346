mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod state;
mod utils;

use anyhow::Result;
use axum::{middleware::from_fn_with_state, response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use middleware::auth::require_auth;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::default();

    // Configurar logging: detalle completo solo en desarrollo
    let log_level = if config.is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    info!("🚌 Transit Booking - Plataforma de administración de transporte");
    info!("===============================================================");

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    let app_state = AppState::new(pool, config.clone());

    // CORS: orígenes del frontend si están configurados
    let cors = if config.cors_origins.is_empty() {
        if config.is_production() {
            tracing::warn!("⚠️  CORS permisivo sin CORS_ORIGINS configurado");
        }
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    // Recursos de administración detrás del bearer token
    let companies_router = routes::company_routes::create_company_router()
        .merge(routes::station_routes::create_station_router())
        .merge(routes::vehicle_routes::create_vehicle_router())
        .merge(routes::personnel_routes::create_personnel_router())
        .merge(routes::route_routes::create_route_router())
        .merge(routes::trip_routes::create_trip_router())
        .merge(routes::trip_stop_routes::create_trip_stop_router())
        .route_layer(from_fn_with_state(app_state.clone(), require_auth));

    let customers_router = routes::customer_routes::create_public_customer_router().merge(
        routes::customer_routes::create_protected_customer_router()
            .route_layer(from_fn_with_state(app_state.clone(), require_auth)),
    );

    let bookings_router = routes::booking_routes::create_booking_router()
        .route_layer(from_fn_with_state(app_state.clone(), require_auth));

    let dashboard_router = routes::dashboard_routes::create_dashboard_router()
        .route_layer(from_fn_with_state(app_state.clone(), require_auth));

    let analytics_router = routes::analytics_routes::create_analytics_router()
        .route_layer(from_fn_with_state(app_state.clone(), require_auth));

    let app = Router::new()
        .route("/test", get(test_endpoint))
        .nest("/api/auth", routes::auth_routes::create_auth_router())
        .nest("/api/companies", companies_router)
        .nest("/api/customers", customers_router)
        .nest("/api/bookings", bookings_router)
        .nest("/api/dashboard", dashboard_router)
        .nest("/api/analytics", analytics_router)
        .layer(cors)
        .with_state(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /test - Endpoint de prueba");
    info!("🔑 Auth:");
    info!("   POST /api/auth/login - Login de administración");
    info!("🏢 Compañías:");
    info!("   POST /api/companies - Crear compañía");
    info!("   GET  /api/companies - Listar compañías");
    info!("   GET  /api/companies/:company_id - Detalle de compañía");
    info!("   PUT  /api/companies/:company_id - Actualizar compañía");
    info!("   DELETE /api/companies/:company_id - Eliminar compañía");
    info!("🚉 Estaciones: /api/companies/:company_id/stations");
    info!("🚗 Vehículos: /api/companies/:company_id/vehicles");
    info!("👥 Personal: /api/companies/:company_id/personnel");
    info!("🗺  Rutas: /api/companies/:company_id/routes");
    info!("🚌 Viajes: /api/companies/:company_id/trips");
    info!("📍 Arrêts: /api/companies/:company_id/trips/:trip_id/stops");
    info!("🧾 Clientes: /api/customers");
    info!("📑 Reservas: /api/bookings");
    info!("📊 Dashboard: /api/dashboard/*");
    info!("📈 Analytics: /api/analytics/*");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Endpoint de prueba simple
async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "¡Transit Booking API funcionando correctamente!",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
