use crate::config::CorsConfig;
use actix_cors::Cors;

/// CORS armado desde la configuración cargada al arrancar; sin listas
/// de orígenes mutables a nivel de proceso.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allow_any_header()
        .max_age(3600);

    if config.allowed_origins.is_empty() {
        // lista vacía: modo desarrollo
        cors = cors.allow_any_origin();
    } else {
        for origen in &config.allowed_origins {
            cors = cors.allowed_origin(origen);
        }
        cors = cors.supports_credentials();
    }

    cors
}
