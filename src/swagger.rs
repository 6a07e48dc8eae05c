use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::sorteo::create_sorteo,
        handlers::sorteo::buscar_sorteo,
        handlers::sorteo::get_activos,
        handlers::sorteo::get_finalizados,
        handlers::sorteo::get_por_organizador,
        handlers::sorteo::get_sorteo,
        handlers::sorteo::update_sorteo,
        handlers::sorteo::delete_sorteo,
    ),
    components(
        schemas(
            CreateSorteoRequest,
            UpdateSorteoRequest,
            PremioInput,
            ConfiguracionInput,
            SorteoResponse,
            PremioResponse,
            OrganizadorResponse,
            ConfiguracionResponse,
        )
    ),
    tags(
        (name = "sorteo", description = "Gestión de sorteos")
    ),
    info(
        title = "Sorteos Backend API",
        version = "1.0.0",
        description = "API REST para la gestión de sorteos"
    ),
    servers(
        (url = "/api/sorteos", description = "Servicio de sorteos")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}
