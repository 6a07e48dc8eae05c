use crate::entities::{configuracion_entity, premio_entity, sorteo_entity, usuario_entity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Todos los campos son opcionales a nivel de serde: el validador es
/// quien decide qué falta y con qué mensaje responder.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateSorteoRequest {
    #[schema(example = "Rifa solidaria de fin de año")]
    pub titulo: Option<String>,
    pub descripcion: Option<String>,
    pub url_imagen: Option<String>,
    #[schema(example = 100)]
    pub rango_numeros: Option<i32>,
    pub fecha_inicio_venta: Option<DateTime<Utc>>,
    pub fecha_fin_venta: Option<DateTime<Utc>>,
    pub fecha_realizacion: Option<DateTime<Utc>>,
    #[schema(example = 10)]
    pub precio_numero: Option<i64>,
    pub premios: Option<Vec<PremioInput>>,
    /// Correos de organizadores ya registrados
    pub organizadores: Option<Vec<String>>,
    /// Si se omite se usa la configuración global
    pub configuracion: Option<ConfiguracionInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PremioInput {
    pub titulo: Option<String>,
    pub url_imagen: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConfiguracionInput {
    #[serde(default)]
    pub usar_global: bool,
    pub tiempo_limite_reserva: Option<i32>,
    pub tiempo_recordatorio_pago: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateSorteoRequest {
    pub titulo: Option<String>,
    pub descripcion: Option<String>,
    pub url_imagen: Option<String>,
    pub rango_numeros: Option<i32>,
    pub fecha_inicio_venta: Option<DateTime<Utc>>,
    pub fecha_fin_venta: Option<DateTime<Utc>>,
    pub fecha_realizacion: Option<DateTime<Utc>>,
    pub precio_numero: Option<i64>,
    pub organizadores: Option<Vec<String>>,
    pub configuracion: Option<ConfiguracionInput>,
}

impl UpdateSorteoRequest {
    pub fn is_empty(&self) -> bool {
        self.titulo.is_none()
            && self.descripcion.is_none()
            && self.url_imagen.is_none()
            && self.rango_numeros.is_none()
            && self.fecha_inicio_venta.is_none()
            && self.fecha_fin_venta.is_none()
            && self.fecha_realizacion.is_none()
            && self.precio_numero.is_none()
            && self.organizadores.is_none()
            && self.configuracion.is_none()
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct BuscarSorteoQuery {
    pub titulo: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SorteoResponse {
    pub id: i64,
    pub titulo: String,
    pub descripcion: String,
    pub url_imagen: String,
    pub rango_numeros: i32,
    pub fecha_inicio_venta: DateTime<Utc>,
    pub fecha_fin_venta: DateTime<Utc>,
    pub fecha_realizacion: DateTime<Utc>,
    pub precio_numero: i64,
    pub id_configuracion: i64,
    // presentes solo cuando la consulta carga las relaciones
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premios: Option<Vec<PremioResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizadores: Option<Vec<OrganizadorResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuracion: Option<ConfiguracionResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PremioResponse {
    pub id: i64,
    pub titulo: String,
    pub url_imagen: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrganizadorResponse {
    pub id: i64,
    pub nombre: String,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ConfiguracionResponse {
    pub id: i64,
    pub tiempo_limite_reserva: i32,
    pub tiempo_recordatorio_pago: i32,
    pub es_global: bool,
}

impl From<sorteo_entity::Model> for SorteoResponse {
    fn from(m: sorteo_entity::Model) -> Self {
        Self {
            id: m.id,
            titulo: m.titulo,
            descripcion: m.descripcion,
            url_imagen: m.url_imagen,
            rango_numeros: m.rango_numeros,
            fecha_inicio_venta: m.fecha_inicio_venta,
            fecha_fin_venta: m.fecha_fin_venta,
            fecha_realizacion: m.fecha_realizacion,
            precio_numero: m.precio_numero,
            id_configuracion: m.id_configuracion,
            premios: None,
            organizadores: None,
            configuracion: None,
        }
    }
}

impl From<premio_entity::Model> for PremioResponse {
    fn from(m: premio_entity::Model) -> Self {
        Self {
            id: m.id,
            titulo: m.titulo,
            url_imagen: m.url_imagen,
        }
    }
}

impl From<configuracion_entity::Model> for ConfiguracionResponse {
    fn from(m: configuracion_entity::Model) -> Self {
        Self {
            id: m.id,
            tiempo_limite_reserva: m.tiempo_limite_reserva,
            tiempo_recordatorio_pago: m.tiempo_recordatorio_pago,
            es_global: m.es_global,
        }
    }
}

impl OrganizadorResponse {
    pub fn new(id: i64, usuario: usuario_entity::Model) -> Self {
        Self {
            id,
            nombre: usuario.nombre,
            email: usuario.email,
        }
    }
}
