use crate::models::*;
use crate::services::SorteoService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    post,
    path = "/",
    tag = "sorteo",
    request_body = CreateSorteoRequest,
    responses(
        (status = 200, description = "Sorteo creado", body = SorteoResponse),
        (status = 400, description = "Datos inválidos")
    )
)]
/// Crea un sorteo con sus premios, organizadores y configuración.
pub async fn create_sorteo(
    service: web::Data<SorteoService>,
    body: web::Json<CreateSorteoRequest>,
) -> Result<HttpResponse> {
    match service.create_sorteo(body.into_inner()).await {
        Ok(sorteo) => Ok(HttpResponse::Ok().json(sorteo)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/buscar",
    tag = "sorteo",
    params(BuscarSorteoQuery),
    responses(
        (status = 200, description = "Sorteo encontrado", body = SorteoResponse),
        (status = 404, description = "No existe un sorteo con ese título")
    )
)]
/// Búsqueda exacta por título.
pub async fn buscar_sorteo(
    service: web::Data<SorteoService>,
    query: web::Query<BuscarSorteoQuery>,
) -> Result<HttpResponse> {
    match service.buscar_por_titulo(&query.titulo).await {
        Ok(sorteo) => Ok(HttpResponse::Ok().json(sorteo)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/activos",
    tag = "sorteo",
    responses(
        (status = 200, description = "Sorteos aún no realizados", body = [SorteoResponse])
    )
)]
/// Sorteos cuya fecha de realización todavía no pasó.
pub async fn get_activos(service: web::Data<SorteoService>) -> Result<HttpResponse> {
    match service.list_activos().await {
        Ok(lista) => Ok(HttpResponse::Ok().json(lista)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/finalizados",
    tag = "sorteo",
    responses(
        (status = 200, description = "Sorteos ya realizados", body = [SorteoResponse])
    )
)]
/// Sorteos cuya fecha de realización ya pasó.
pub async fn get_finalizados(service: web::Data<SorteoService>) -> Result<HttpResponse> {
    match service.list_finalizados().await {
        Ok(lista) => Ok(HttpResponse::Ok().json(lista)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/organizador/{id}",
    tag = "sorteo",
    params(("id" = i64, Path, description = "Id del organizador")),
    responses(
        (status = 200, description = "Sorteos del organizador", body = [SorteoResponse]),
        (status = 404, description = "El organizador no existe")
    )
)]
/// Sorteos administrados por un organizador.
pub async fn get_por_organizador(
    service: web::Data<SorteoService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match service.list_por_organizador(path.into_inner()).await {
        Ok(lista) => Ok(HttpResponse::Ok().json(lista)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "sorteo",
    params(("id" = i64, Path, description = "Id del sorteo")),
    responses(
        (status = 200, description = "Detalle del sorteo", body = SorteoResponse),
        (status = 404, description = "El sorteo no existe")
    )
)]
/// Detalle con premios, organizadores y configuración.
pub async fn get_sorteo(
    service: web::Data<SorteoService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match service.get_sorteo(path.into_inner()).await {
        Ok(sorteo) => Ok(HttpResponse::Ok().json(sorteo)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "sorteo",
    params(("id" = i64, Path, description = "Id del sorteo")),
    request_body = UpdateSorteoRequest,
    responses(
        (status = 200, description = "Sorteo actualizado", body = SorteoResponse),
        (status = 400, description = "Datos inválidos"),
        (status = 404, description = "El sorteo no existe"),
        (status = 405, description = "El estado del sorteo no permite el cambio")
    )
)]
/// Aplica solo los campos provistos; los organizadores se reemplazan
/// por completo cuando vienen en el payload.
pub async fn update_sorteo(
    service: web::Data<SorteoService>,
    path: web::Path<i64>,
    body: web::Json<UpdateSorteoRequest>,
) -> Result<HttpResponse> {
    match service.update_sorteo(path.into_inner(), body.into_inner()).await {
        Ok(sorteo) => Ok(HttpResponse::Ok().json(sorteo)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "sorteo",
    params(("id" = i64, Path, description = "Id del sorteo")),
    responses(
        (status = 200, description = "Sorteo eliminado"),
        (status = 404, description = "El sorteo no existe"),
        (status = 405, description = "Hay números vendidos o el sorteo ya se realizó")
    )
)]
/// Elimina el sorteo con sus premios, números y asociaciones.
pub async fn delete_sorteo(
    service: web::Data<SorteoService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match service.delete_sorteo(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "message": "Sorteo eliminado correctamente."
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

/// Configuración de rutas. Las rutas literales van antes que `/{id}`.
pub fn sorteo_config(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create_sorteo))
        .route("/buscar", web::get().to(buscar_sorteo))
        .route("/activos", web::get().to(get_activos))
        .route("/finalizados", web::get().to(get_finalizados))
        .route("/organizador/{id}", web::get().to(get_por_organizador))
        .route("/{id}", web::get().to(get_sorteo))
        .route("/{id}", web::put().to(update_sorteo))
        .route("/{id}", web::delete().to(delete_sorteo));
}
