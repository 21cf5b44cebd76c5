use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use jazdy_backend::{create_router, AppState, EnvironmentConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("jazdy_backend=debug,tower_http=info")),
        )
        .init();

    info!("🚗 Evidencia jázd - API");
    info!("================================================");

    let config = match EnvironmentConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ Configuración inválida: {}", e);
            return Err(e.into());
        }
    };

    if config.password_required() {
        info!("🔒 Contraseña compartida activada");
    } else {
        warn!("🔓 APP_PASSWORD no configurada: la API está abierta");
    }

    let addr: SocketAddr = config.server_url().parse()?;
    let app_state = match AppState::from_config(config).await {
        Ok(state) => state,
        Err(e) => {
            error!("❌ Error inicializando el almacenamiento: {}", e);
            return Err(e.into());
        }
    };
    info!("💾 Almacenamiento: {}", app_state.logbook.backend_name());

    let app = create_router(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("   GET  /reports-monthly - Eco legacy de la query");
    info!("   POST /api/login - Verificar contraseña");
    info!("🚗 Vehículos:");
    info!("   GET  /api/vehicles - Listar vehículos");
    info!("   POST /api/vehicles - Crear vehículo");
    info!("   PUT  /api/vehicles/:id - Renombrar vehículo");
    info!("   DELETE /api/vehicles/:id - Eliminar vehículo y sus meses");
    info!("📒 Evidencia mensual:");
    info!("   GET  /api/vehicles/:id/months/:month - Filas del mes");
    info!("   PUT  /api/vehicles/:id/months/:month - Guardar filas");
    info!("   PATCH /api/vehicles/:id/months/:month/rows/:index - Editar celda");
    info!("   GET  /api/vehicles/:id/months/:month/export - Exportar CSV");
    info!("   GET  /api/vehicles/:id/months/:month/print - Vista de impresión");
    info!("📊 Reportes:");
    info!("   POST /api/export - Exportar filas a CSV");
    info!("   GET  /api/reports-monthly?year=&month= - Reporte mensual de la flota");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo escuchar Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo escuchar SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal SIGTERM recibida, apagando servidor...");
        },
    }
}
