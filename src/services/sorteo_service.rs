use crate::entities::{
    EstadoNumero, configuracion_entity as configuraciones, numero_entity as numeros,
    organizador_entity as organizadores, premio_entity as premios, sorteo_entity as sorteos,
    sorteo_organizador_entity as sorteos_organizadores, usuario_entity as usuarios,
};
use crate::error::{AppError, AppResult};
use crate::models::{
    ConfiguracionInput, CreateSorteoRequest, OrganizadorResponse, SorteoResponse,
    UpdateSorteoRequest,
};
use crate::utils::validate_email;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

#[derive(Clone)]
pub struct SorteoService {
    pool: DatabaseConnection,
}

impl SorteoService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// Crea el grafo completo del sorteo (configuración, sorteo, premios,
    /// asociaciones de organizadores) en una sola transacción.
    pub async fn create_sorteo(&self, req: CreateSorteoRequest) -> AppResult<SorteoResponse> {
        let ahora = Utc::now();
        let data = validate_create(&req, ahora)?;

        if self.find_by_titulo(&data.titulo).await?.is_some() {
            return Err(AppError::ValidationError(
                "Ya existe un sorteo con ese título.".to_string(),
            ));
        }

        let overrides = validate_configuracion(data.configuracion.as_ref())?;

        let ids_organizadores = self.resolve_organizadores(&data.organizadores).await?;

        let txn = self.pool.begin().await?;

        let id_configuracion = match overrides {
            Some((limite, recordatorio)) => {
                let nueva = configuraciones::ActiveModel {
                    tiempo_limite_reserva: Set(limite),
                    tiempo_recordatorio_pago: Set(recordatorio),
                    es_global: Set(false),
                    ..Default::default()
                }
                .insert(&txn)
                .await?;
                nueva.id
            }
            None => self.configuracion_global(&txn).await?.id,
        };

        let sorteo = sorteos::ActiveModel {
            titulo: Set(data.titulo),
            descripcion: Set(data.descripcion),
            url_imagen: Set(data.url_imagen),
            rango_numeros: Set(data.rango_numeros),
            fecha_inicio_venta: Set(data.fecha_inicio_venta),
            fecha_fin_venta: Set(data.fecha_fin_venta),
            fecha_realizacion: Set(data.fecha_realizacion),
            precio_numero: Set(data.precio_numero),
            id_configuracion: Set(id_configuracion),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let filas_premios: Vec<premios::ActiveModel> = data
            .premios
            .into_iter()
            .map(|p| premios::ActiveModel {
                titulo: Set(p.titulo),
                url_imagen: Set(p.url_imagen),
                id_sorteo: Set(sorteo.id),
                ..Default::default()
            })
            .collect();
        premios::Entity::insert_many(filas_premios).exec(&txn).await?;

        let filas_asociaciones: Vec<sorteos_organizadores::ActiveModel> = ids_organizadores
            .iter()
            .map(|id| sorteos_organizadores::ActiveModel {
                id_sorteo: Set(sorteo.id),
                id_organizador: Set(*id),
                ..Default::default()
            })
            .collect();
        sorteos_organizadores::Entity::insert_many(filas_asociaciones)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        log::info!("Sorteo {} creado: {}", sorteo.id, sorteo.titulo);

        self.build_detalle(sorteo).await
    }

    /// Actualiza solo los campos provistos; las asociaciones de
    /// organizadores se reemplazan por completo cuando vienen en el
    /// payload.
    pub async fn update_sorteo(
        &self,
        id: i64,
        req: UpdateSorteoRequest,
    ) -> AppResult<SorteoResponse> {
        let ahora = Utc::now();

        let actual = sorteos::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("El sorteo no existe.".to_string()))?;

        if actual.fecha_realizacion < ahora {
            return Err(AppError::Conflict(
                "No se puede actualizar un sorteo pasado.".to_string(),
            ));
        }

        if req.is_empty() {
            return Err(AppError::ValidationError(
                "No se proporcionaron datos.".to_string(),
            ));
        }

        let vendidos = if req.rango_numeros.is_some() {
            self.count_numeros_vendidos(actual.id).await?
        } else {
            0
        };
        validate_update(&req, &actual, vendidos, ahora)?;

        if let Some(titulo) = &req.titulo {
            if *titulo != actual.titulo && self.find_by_titulo(titulo).await?.is_some() {
                return Err(AppError::ValidationError(
                    "Ya existe un sorteo con ese título.".to_string(),
                ));
            }
        }

        let overrides = validate_configuracion(req.configuracion.as_ref())?;

        let ids_organizadores = match &req.organizadores {
            Some(correos) => {
                if correos.is_empty() {
                    return Err(AppError::ValidationError(
                        "Debe ingresar al menos un organizador.".to_string(),
                    ));
                }
                Some(self.resolve_organizadores(correos).await?)
            }
            None => None,
        };

        let txn = self.pool.begin().await?;

        // resolver la configuración destino antes de tocar el sorteo
        let mut configuracion_huerfana: Option<i64> = None;
        let nueva_configuracion: Option<i64> = if let Some(cfg) = &req.configuracion {
            let cfg_actual = configuraciones::Entity::find_by_id(actual.id_configuracion)
                .one(&txn)
                .await?
                .ok_or_else(|| {
                    AppError::InternalError(format!(
                        "Configuración {} del sorteo {} no encontrada",
                        actual.id_configuracion, actual.id
                    ))
                })?;

            if cfg.usar_global {
                if cfg_actual.es_global {
                    None
                } else {
                    configuracion_huerfana = Some(cfg_actual.id);
                    Some(self.configuracion_global(&txn).await?.id)
                }
            } else {
                let (limite, recordatorio) = overrides.ok_or_else(|| {
                    AppError::InternalError(
                        "Configuración sin valores después de validar".to_string(),
                    )
                })?;
                if cfg_actual.es_global {
                    let nueva = configuraciones::ActiveModel {
                        tiempo_limite_reserva: Set(limite),
                        tiempo_recordatorio_pago: Set(recordatorio),
                        es_global: Set(false),
                        ..Default::default()
                    }
                    .insert(&txn)
                    .await?;
                    Some(nueva.id)
                } else {
                    let mut am = cfg_actual.into_active_model();
                    am.tiempo_limite_reserva = Set(limite);
                    am.tiempo_recordatorio_pago = Set(recordatorio);
                    am.update(&txn).await?;
                    None
                }
            }
        } else {
            None
        };

        let mut am = actual.clone().into_active_model();
        if let Some(v) = req.titulo {
            am.titulo = Set(v);
        }
        if let Some(v) = req.descripcion {
            am.descripcion = Set(v);
        }
        if let Some(v) = req.url_imagen {
            am.url_imagen = Set(v);
        }
        if let Some(v) = req.rango_numeros {
            am.rango_numeros = Set(v);
        }
        if let Some(v) = req.fecha_inicio_venta {
            am.fecha_inicio_venta = Set(v);
        }
        if let Some(v) = req.fecha_fin_venta {
            am.fecha_fin_venta = Set(v);
        }
        if let Some(v) = req.fecha_realizacion {
            am.fecha_realizacion = Set(v);
        }
        if let Some(v) = req.precio_numero {
            am.precio_numero = Set(v);
        }
        if let Some(idc) = nueva_configuracion {
            am.id_configuracion = Set(idc);
        }
        am.updated_at = Set(Some(ahora));
        let actualizado = am.update(&txn).await?;

        if let Some(id_cfg) = configuracion_huerfana {
            configuraciones::Entity::delete_by_id(id_cfg).exec(&txn).await?;
        }

        if let Some(ids) = ids_organizadores {
            // reemplazo total de las filas de unión, nunca mezcla
            sorteos_organizadores::Entity::delete_many()
                .filter(sorteos_organizadores::Column::IdSorteo.eq(actualizado.id))
                .exec(&txn)
                .await?;
            let filas: Vec<sorteos_organizadores::ActiveModel> = ids
                .iter()
                .map(|id_org| sorteos_organizadores::ActiveModel {
                    id_sorteo: Set(actualizado.id),
                    id_organizador: Set(*id_org),
                    ..Default::default()
                })
                .collect();
            sorteos_organizadores::Entity::insert_many(filas)
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;

        self.build_detalle(actualizado).await
    }

    /// Elimina el sorteo y su grafo (números, premios, asociaciones y la
    /// configuración propia). Bloqueado si ya hay números vendidos o el
    /// sorteo ya se realizó.
    pub async fn delete_sorteo(&self, id: i64) -> AppResult<()> {
        let ahora = Utc::now();

        let sorteo = sorteos::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("El sorteo no existe.".to_string()))?;

        let vendidos = self.count_numeros_vendidos(sorteo.id).await?;
        if vendidos > 0 {
            return Err(AppError::Conflict(
                "No se puede eliminar, ya hay números vendidos.".to_string(),
            ));
        }

        if sorteo.fecha_realizacion < ahora {
            return Err(AppError::Conflict(
                "No se puede eliminar un sorteo pasado.".to_string(),
            ));
        }

        let txn = self.pool.begin().await?;

        numeros::Entity::delete_many()
            .filter(numeros::Column::IdSorteo.eq(sorteo.id))
            .exec(&txn)
            .await?;
        premios::Entity::delete_many()
            .filter(premios::Column::IdSorteo.eq(sorteo.id))
            .exec(&txn)
            .await?;
        sorteos_organizadores::Entity::delete_many()
            .filter(sorteos_organizadores::Column::IdSorteo.eq(sorteo.id))
            .exec(&txn)
            .await?;

        let configuracion = configuraciones::Entity::find_by_id(sorteo.id_configuracion)
            .one(&txn)
            .await?;

        let id_sorteo = sorteo.id;
        sorteos::Entity::delete_by_id(id_sorteo).exec(&txn).await?;

        // la fila global nunca se elimina
        if let Some(cfg) = configuracion {
            if !cfg.es_global {
                configuraciones::Entity::delete_by_id(cfg.id).exec(&txn).await?;
            }
        }

        txn.commit().await?;

        log::info!("Sorteo {id_sorteo} eliminado");

        Ok(())
    }

    /// Búsqueda exacta por título; también respalda el chequeo de unicidad.
    pub async fn find_by_titulo(&self, titulo: &str) -> AppResult<Option<sorteos::Model>> {
        let encontrado = sorteos::Entity::find()
            .filter(sorteos::Column::Titulo.eq(titulo))
            .one(&self.pool)
            .await?;
        Ok(encontrado)
    }

    pub async fn buscar_por_titulo(&self, titulo: &str) -> AppResult<SorteoResponse> {
        let sorteo = self
            .find_by_titulo(titulo)
            .await?
            .ok_or_else(|| AppError::NotFound("El sorteo no existe.".to_string()))?;
        self.build_detalle(sorteo).await
    }

    /// Detalle con premios, organizadores (con su usuario) y configuración.
    pub async fn get_sorteo(&self, id: i64) -> AppResult<SorteoResponse> {
        let sorteo = sorteos::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("El sorteo no existe.".to_string()))?;
        self.build_detalle(sorteo).await
    }

    pub async fn list_activos(&self) -> AppResult<Vec<SorteoResponse>> {
        let ahora = Utc::now();
        let lista = sorteos::Entity::find()
            .filter(sorteos::Column::FechaRealizacion.gte(ahora))
            .order_by_asc(sorteos::Column::FechaRealizacion)
            .all(&self.pool)
            .await?;
        Ok(lista.into_iter().map(Into::into).collect())
    }

    pub async fn list_finalizados(&self) -> AppResult<Vec<SorteoResponse>> {
        let ahora = Utc::now();
        let lista = sorteos::Entity::find()
            .filter(sorteos::Column::FechaRealizacion.lt(ahora))
            .order_by_desc(sorteos::Column::FechaRealizacion)
            .all(&self.pool)
            .await?;
        Ok(lista.into_iter().map(Into::into).collect())
    }

    pub async fn list_por_organizador(&self, id_organizador: i64) -> AppResult<Vec<SorteoResponse>> {
        let organizador = organizadores::Entity::find_by_id(id_organizador)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("El organizador no existe.".to_string()))?;

        let lista = organizador
            .find_related(sorteos::Entity)
            .all(&self.pool)
            .await?;
        Ok(lista.into_iter().map(Into::into).collect())
    }

    // -----------------------------
    // Ayudantes internos
    // -----------------------------

    /// Resuelve cada correo a un organizador registrado (join con el
    /// usuario por email). Un correo sin organizador es un error de
    /// validación, no del sistema.
    async fn resolve_organizadores(&self, correos: &[String]) -> AppResult<Vec<i64>> {
        let mut ids = Vec::with_capacity(correos.len());
        for correo in correos {
            validate_email(correo)?;
            let registrado = organizadores::Entity::find()
                .find_also_related(usuarios::Entity)
                .filter(usuarios::Column::Email.eq(correo.as_str()))
                .one(&self.pool)
                .await?;
            match registrado {
                Some((organizador, _)) => {
                    // un correo repetido no duplica la asociación
                    if !ids.contains(&organizador.id) {
                        ids.push(organizador.id);
                    }
                }
                None => {
                    return Err(AppError::ValidationError(format!(
                        "El organizador {correo} no está registrado."
                    )));
                }
            }
        }
        Ok(ids)
    }

    async fn count_numeros_vendidos(&self, id_sorteo: i64) -> AppResult<u64> {
        let vendidos = numeros::Entity::find()
            .filter(numeros::Column::IdSorteo.eq(id_sorteo))
            .filter(numeros::Column::Estado.eq(EstadoNumero::Vendido))
            .count(&self.pool)
            .await?;
        Ok(vendidos)
    }

    async fn configuracion_global<C: ConnectionTrait>(
        &self,
        db: &C,
    ) -> AppResult<configuraciones::Model> {
        configuraciones::Entity::find()
            .filter(configuraciones::Column::EsGlobal.eq(true))
            .one(db)
            .await?
            .ok_or_else(|| {
                AppError::ConfigError("Falta la configuración global en la base".to_string())
            })
    }

    async fn build_detalle(&self, sorteo: sorteos::Model) -> AppResult<SorteoResponse> {
        let lista_premios = sorteo.find_related(premios::Entity).all(&self.pool).await?;
        let pares = sorteo
            .find_related(organizadores::Entity)
            .find_also_related(usuarios::Entity)
            .all(&self.pool)
            .await?;
        let configuracion = sorteo
            .find_related(configuraciones::Entity)
            .one(&self.pool)
            .await?;

        let mut lista_organizadores = Vec::with_capacity(pares.len());
        for (organizador, usuario) in pares {
            let usuario = usuario.ok_or_else(|| {
                AppError::InternalError(format!(
                    "Organizador {} sin usuario asociado",
                    organizador.id
                ))
            })?;
            lista_organizadores.push(OrganizadorResponse::new(organizador.id, usuario));
        }

        let mut respuesta = SorteoResponse::from(sorteo);
        respuesta.premios = Some(lista_premios.into_iter().map(Into::into).collect());
        respuesta.organizadores = Some(lista_organizadores);
        respuesta.configuracion = configuracion.map(Into::into);
        Ok(respuesta)
    }
}

#[derive(Debug)]
struct PremioData {
    titulo: String,
    url_imagen: String,
}

#[derive(Debug)]
struct CreateSorteoData {
    titulo: String,
    descripcion: String,
    url_imagen: String,
    rango_numeros: i32,
    fecha_inicio_venta: DateTime<Utc>,
    fecha_fin_venta: DateTime<Utc>,
    fecha_realizacion: DateTime<Utc>,
    precio_numero: i64,
    premios: Vec<PremioData>,
    organizadores: Vec<String>,
    configuracion: Option<ConfiguracionInput>,
}

/// Reglas de creación, en orden. Devuelve el payload ya desenvuelto
/// para que el resto del flujo no vuelva a mirar opcionales.
fn validate_create(req: &CreateSorteoRequest, ahora: DateTime<Utc>) -> AppResult<CreateSorteoData> {
    let (
        Some(titulo),
        Some(descripcion),
        Some(url_imagen),
        Some(rango_numeros),
        Some(fecha_inicio_venta),
        Some(fecha_fin_venta),
        Some(fecha_realizacion),
        Some(precio_numero),
        Some(premios_input),
        Some(organizadores),
    ) = (
        req.titulo.clone(),
        req.descripcion.clone(),
        req.url_imagen.clone(),
        req.rango_numeros,
        req.fecha_inicio_venta,
        req.fecha_fin_venta,
        req.fecha_realizacion,
        req.precio_numero,
        req.premios.clone(),
        req.organizadores.clone(),
    )
    else {
        return Err(AppError::ValidationError(
            "Todos los campos son requeridos.".to_string(),
        ));
    };

    if titulo.trim().is_empty() || descripcion.trim().is_empty() || url_imagen.trim().is_empty() {
        return Err(AppError::ValidationError(
            "Todos los campos son requeridos.".to_string(),
        ));
    }

    if rango_numeros < 1 {
        return Err(AppError::ValidationError(
            "La cantidad de números debe ser mayor a 0.".to_string(),
        ));
    }

    if fecha_fin_venta < fecha_inicio_venta || fecha_inicio_venta < ahora || fecha_fin_venta < ahora
    {
        return Err(AppError::ValidationError(
            "Ingrese un periodo válido.".to_string(),
        ));
    }

    if fecha_realizacion < ahora {
        return Err(AppError::ValidationError(
            "Ingrese una fecha de realización válida.".to_string(),
        ));
    }

    if precio_numero < 1 {
        return Err(AppError::ValidationError(
            "El precio del número debe ser mayor o igual a 1.".to_string(),
        ));
    }

    if premios_input.is_empty() {
        return Err(AppError::ValidationError(
            "Debe ingresar al menos un premio.".to_string(),
        ));
    }
    let mut lista_premios = Vec::with_capacity(premios_input.len());
    for premio in premios_input {
        match (premio.titulo, premio.url_imagen) {
            (Some(t), Some(u)) if !t.trim().is_empty() && !u.trim().is_empty() => {
                lista_premios.push(PremioData {
                    titulo: t,
                    url_imagen: u,
                });
            }
            _ => {
                return Err(AppError::ValidationError(
                    "Todos los premios deben tener título e imagen.".to_string(),
                ));
            }
        }
    }

    if organizadores.is_empty() {
        return Err(AppError::ValidationError(
            "Debe ingresar al menos un organizador.".to_string(),
        ));
    }

    Ok(CreateSorteoData {
        titulo,
        descripcion,
        url_imagen,
        rango_numeros,
        fecha_inicio_venta,
        fecha_fin_venta,
        fecha_realizacion,
        precio_numero,
        premios: lista_premios,
        organizadores,
        configuracion: req.configuracion.clone(),
    })
}

/// Cuando se pide configuración propia, ambos tiempos deben venir y ser
/// al menos 1. Devuelve los valores ya validados, o None si aplica la
/// configuración global.
fn validate_configuracion(cfg: Option<&ConfiguracionInput>) -> AppResult<Option<(i32, i32)>> {
    let Some(cfg) = cfg else { return Ok(None) };

    if cfg.usar_global {
        return Ok(None);
    }

    match (cfg.tiempo_limite_reserva, cfg.tiempo_recordatorio_pago) {
        (Some(limite), Some(recordatorio)) if limite >= 1 && recordatorio >= 1 => {
            Ok(Some((limite, recordatorio)))
        }
        _ => Err(AppError::ValidationError(
            "Ingrese una configuración válida.".to_string(),
        )),
    }
}

/// Reglas por campo de la actualización; cada una aplica solo si el
/// campo viene en el payload.
fn validate_update(
    req: &UpdateSorteoRequest,
    actual: &sorteos::Model,
    numeros_vendidos: u64,
    ahora: DateTime<Utc>,
) -> AppResult<()> {
    if let Some(rango) = req.rango_numeros {
        if rango < 1 {
            return Err(AppError::ValidationError(
                "La cantidad de números debe ser mayor a 0.".to_string(),
            ));
        }
        if numeros_vendidos > 0 && rango < actual.rango_numeros {
            return Err(AppError::Conflict(
                "Solo se puede aumentar el rango de números.".to_string(),
            ));
        }
    }

    if req.fecha_inicio_venta.is_some() || req.fecha_fin_venta.is_some() {
        let inicio = req.fecha_inicio_venta.unwrap_or(actual.fecha_inicio_venta);
        let fin = req.fecha_fin_venta.unwrap_or(actual.fecha_fin_venta);
        if fin < inicio {
            return Err(AppError::ValidationError(
                "Ingrese un periodo válido.".to_string(),
            ));
        }
        // con la venta ya iniciada el inicio no se mueve
        if let Some(nuevo_inicio) = req.fecha_inicio_venta {
            if ahora >= actual.fecha_inicio_venta && nuevo_inicio != actual.fecha_inicio_venta {
                return Err(AppError::ValidationError(
                    "Ingrese un periodo válido.".to_string(),
                ));
            }
        }
    }

    if let Some(realizacion) = req.fecha_realizacion {
        if realizacion < ahora {
            return Err(AppError::ValidationError(
                "Ingrese una fecha de realización válida.".to_string(),
            ));
        }
    }

    if let Some(precio) = req.precio_numero {
        if precio < 1 {
            return Err(AppError::ValidationError(
                "El precio del número debe ser mayor o igual a 1.".to_string(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PremioInput;
    use chrono::{Duration, TimeZone};

    fn ahora() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()
    }

    fn request_valido(ahora: DateTime<Utc>) -> CreateSorteoRequest {
        CreateSorteoRequest {
            titulo: Some("Rifa solidaria".to_string()),
            descripcion: Some("Una rifa a beneficio".to_string()),
            url_imagen: Some("https://img.example.com/rifa.png".to_string()),
            rango_numeros: Some(100),
            fecha_inicio_venta: Some(ahora + Duration::days(1)),
            fecha_fin_venta: Some(ahora + Duration::days(10)),
            fecha_realizacion: Some(ahora + Duration::days(15)),
            precio_numero: Some(10),
            premios: Some(vec![PremioInput {
                titulo: Some("Bicicleta".to_string()),
                url_imagen: Some("https://img.example.com/bici.png".to_string()),
            }]),
            organizadores: Some(vec!["ana@example.com".to_string()]),
            configuracion: None,
        }
    }

    fn sorteo_existente(ahora: DateTime<Utc>) -> sorteos::Model {
        sorteos::Model {
            id: 1,
            titulo: "Rifa solidaria".to_string(),
            descripcion: "Una rifa a beneficio".to_string(),
            url_imagen: "https://img.example.com/rifa.png".to_string(),
            rango_numeros: 100,
            fecha_inicio_venta: ahora + Duration::days(1),
            fecha_fin_venta: ahora + Duration::days(10),
            fecha_realizacion: ahora + Duration::days(15),
            precio_numero: 10,
            id_configuracion: 1,
            created_at: None,
            updated_at: None,
        }
    }

    fn mensaje(err: AppError) -> String {
        match err {
            AppError::ValidationError(m) | AppError::NotFound(m) | AppError::Conflict(m) => m,
            otro => panic!("error inesperado: {otro}"),
        }
    }

    #[test]
    fn test_create_valido() {
        assert!(validate_create(&request_valido(ahora()), ahora()).is_ok());
    }

    #[test]
    fn test_create_campos_faltantes() {
        let casos = [
            CreateSorteoRequest {
                titulo: None,
                ..request_valido(ahora())
            },
            CreateSorteoRequest {
                fecha_realizacion: None,
                ..request_valido(ahora())
            },
            CreateSorteoRequest {
                premios: None,
                ..request_valido(ahora())
            },
            CreateSorteoRequest {
                organizadores: None,
                ..request_valido(ahora())
            },
        ];
        for caso in casos {
            let err = validate_create(&caso, ahora()).unwrap_err();
            assert_eq!(mensaje(err), "Todos los campos son requeridos.");
        }
    }

    #[test]
    fn test_create_titulo_en_blanco() {
        let req = CreateSorteoRequest {
            titulo: Some("   ".to_string()),
            ..request_valido(ahora())
        };
        let err = validate_create(&req, ahora()).unwrap_err();
        assert_eq!(mensaje(err), "Todos los campos son requeridos.");
    }

    #[test]
    fn test_create_rango_invalido() {
        let req = CreateSorteoRequest {
            rango_numeros: Some(0),
            ..request_valido(ahora())
        };
        let err = validate_create(&req, ahora()).unwrap_err();
        assert_eq!(mensaje(err), "La cantidad de números debe ser mayor a 0.");
    }

    #[test]
    fn test_create_periodo_invertido() {
        let req = CreateSorteoRequest {
            fecha_inicio_venta: Some(ahora() + Duration::days(10)),
            fecha_fin_venta: Some(ahora() + Duration::days(1)),
            ..request_valido(ahora())
        };
        let err = validate_create(&req, ahora()).unwrap_err();
        assert_eq!(mensaje(err), "Ingrese un periodo válido.");
    }

    #[test]
    fn test_create_periodo_en_pasado() {
        let req = CreateSorteoRequest {
            fecha_inicio_venta: Some(ahora() - Duration::days(2)),
            fecha_fin_venta: Some(ahora() + Duration::days(10)),
            ..request_valido(ahora())
        };
        let err = validate_create(&req, ahora()).unwrap_err();
        assert_eq!(mensaje(err), "Ingrese un periodo válido.");
    }

    #[test]
    fn test_create_realizacion_en_pasado() {
        let req = CreateSorteoRequest {
            fecha_realizacion: Some(ahora() - Duration::days(1)),
            ..request_valido(ahora())
        };
        let err = validate_create(&req, ahora()).unwrap_err();
        assert_eq!(mensaje(err), "Ingrese una fecha de realización válida.");
    }

    #[test]
    fn test_create_precio_invalido() {
        let req = CreateSorteoRequest {
            precio_numero: Some(0),
            ..request_valido(ahora())
        };
        let err = validate_create(&req, ahora()).unwrap_err();
        assert_eq!(
            mensaje(err),
            "El precio del número debe ser mayor o igual a 1."
        );
    }

    #[test]
    fn test_create_sin_premios() {
        let req = CreateSorteoRequest {
            premios: Some(vec![]),
            ..request_valido(ahora())
        };
        let err = validate_create(&req, ahora()).unwrap_err();
        assert_eq!(mensaje(err), "Debe ingresar al menos un premio.");
    }

    #[test]
    fn test_create_premio_sin_imagen() {
        let req = CreateSorteoRequest {
            premios: Some(vec![PremioInput {
                titulo: Some("Bicicleta".to_string()),
                url_imagen: None,
            }]),
            ..request_valido(ahora())
        };
        let err = validate_create(&req, ahora()).unwrap_err();
        assert_eq!(mensaje(err), "Todos los premios deben tener título e imagen.");
    }

    #[test]
    fn test_create_sin_organizadores() {
        let req = CreateSorteoRequest {
            organizadores: Some(vec![]),
            ..request_valido(ahora())
        };
        let err = validate_create(&req, ahora()).unwrap_err();
        assert_eq!(mensaje(err), "Debe ingresar al menos un organizador.");
    }

    #[test]
    fn test_create_reglas_en_orden() {
        // rango y precio inválidos a la vez: gana la regla del rango
        let req = CreateSorteoRequest {
            rango_numeros: Some(0),
            precio_numero: Some(0),
            ..request_valido(ahora())
        };
        let err = validate_create(&req, ahora()).unwrap_err();
        assert_eq!(mensaje(err), "La cantidad de números debe ser mayor a 0.");
    }

    #[test]
    fn test_configuracion_global_u_omitida() {
        assert_eq!(validate_configuracion(None).unwrap(), None);
        let global = ConfiguracionInput {
            usar_global: true,
            tiempo_limite_reserva: None,
            tiempo_recordatorio_pago: None,
        };
        assert_eq!(validate_configuracion(Some(&global)).unwrap(), None);
    }

    #[test]
    fn test_configuracion_propia() {
        let propia = ConfiguracionInput {
            usar_global: false,
            tiempo_limite_reserva: Some(45),
            tiempo_recordatorio_pago: Some(15),
        };
        assert_eq!(validate_configuracion(Some(&propia)).unwrap(), Some((45, 15)));
    }

    #[test]
    fn test_configuracion_propia_incompleta() {
        let casos = [
            ConfiguracionInput {
                usar_global: false,
                tiempo_limite_reserva: Some(45),
                tiempo_recordatorio_pago: None,
            },
            ConfiguracionInput {
                usar_global: false,
                tiempo_limite_reserva: Some(0),
                tiempo_recordatorio_pago: Some(15),
            },
        ];
        for caso in casos {
            let err = validate_configuracion(Some(&caso)).unwrap_err();
            assert_eq!(mensaje(err), "Ingrese una configuración válida.");
        }
    }

    #[test]
    fn test_update_rango_no_puede_bajar_con_vendidos() {
        let req = UpdateSorteoRequest {
            rango_numeros: Some(50),
            ..Default::default()
        };
        let err = validate_update(&req, &sorteo_existente(ahora()), 3, ahora()).unwrap_err();
        assert!(matches!(&err, AppError::Conflict(_)));
        assert_eq!(mensaje(err), "Solo se puede aumentar el rango de números.");
    }

    #[test]
    fn test_update_rango_baja_sin_vendidos() {
        let req = UpdateSorteoRequest {
            rango_numeros: Some(50),
            ..Default::default()
        };
        assert!(validate_update(&req, &sorteo_existente(ahora()), 0, ahora()).is_ok());
    }

    #[test]
    fn test_update_rango_sube_con_vendidos() {
        let req = UpdateSorteoRequest {
            rango_numeros: Some(200),
            ..Default::default()
        };
        assert!(validate_update(&req, &sorteo_existente(ahora()), 3, ahora()).is_ok());
    }

    #[test]
    fn test_update_rango_cero() {
        let req = UpdateSorteoRequest {
            rango_numeros: Some(0),
            ..Default::default()
        };
        let err = validate_update(&req, &sorteo_existente(ahora()), 0, ahora()).unwrap_err();
        assert_eq!(mensaje(err), "La cantidad de números debe ser mayor a 0.");
    }

    #[test]
    fn test_update_fin_antes_del_inicio_guardado() {
        // solo viene el fin y queda antes del inicio almacenado
        let req = UpdateSorteoRequest {
            fecha_fin_venta: Some(ahora() + Duration::hours(1)),
            ..Default::default()
        };
        let mut actual = sorteo_existente(ahora());
        actual.fecha_inicio_venta = ahora() + Duration::days(5);
        let err = validate_update(&req, &actual, 0, ahora()).unwrap_err();
        assert_eq!(mensaje(err), "Ingrese un periodo válido.");
    }

    #[test]
    fn test_update_inicio_no_se_mueve_con_venta_iniciada() {
        let mut actual = sorteo_existente(ahora());
        actual.fecha_inicio_venta = ahora() - Duration::days(1);
        let req = UpdateSorteoRequest {
            fecha_inicio_venta: Some(ahora() + Duration::days(2)),
            fecha_fin_venta: Some(ahora() + Duration::days(20)),
            ..Default::default()
        };
        let err = validate_update(&req, &actual, 0, ahora()).unwrap_err();
        assert_eq!(mensaje(err), "Ingrese un periodo válido.");
    }

    #[test]
    fn test_update_reenviar_mismo_inicio_con_venta_iniciada() {
        let mut actual = sorteo_existente(ahora());
        actual.fecha_inicio_venta = ahora() - Duration::days(1);
        let req = UpdateSorteoRequest {
            fecha_inicio_venta: Some(actual.fecha_inicio_venta),
            fecha_fin_venta: Some(ahora() + Duration::days(20)),
            ..Default::default()
        };
        assert!(validate_update(&req, &actual, 0, ahora()).is_ok());
    }

    #[test]
    fn test_update_realizacion_en_pasado() {
        let req = UpdateSorteoRequest {
            fecha_realizacion: Some(ahora() - Duration::days(1)),
            ..Default::default()
        };
        let err = validate_update(&req, &sorteo_existente(ahora()), 0, ahora()).unwrap_err();
        assert_eq!(mensaje(err), "Ingrese una fecha de realización válida.");
    }

    #[test]
    fn test_update_precio_invalido() {
        let req = UpdateSorteoRequest {
            precio_numero: Some(0),
            ..Default::default()
        };
        let err = validate_update(&req, &sorteo_existente(ahora()), 0, ahora()).unwrap_err();
        assert_eq!(
            mensaje(err),
            "El precio del número debe ser mayor o igual a 1."
        );
    }

    #[test]
    fn test_update_payload_vacio_detectado() {
        assert!(UpdateSorteoRequest::default().is_empty());
        let con_precio = UpdateSorteoRequest {
            precio_numero: Some(5),
            ..Default::default()
        };
        assert!(!con_precio.is_empty());
    }
}
