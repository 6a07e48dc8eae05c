use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// Sorteo: el evento vendible con premios y números.
/// Editable hasta la fecha de realización; el rango solo puede crecer
/// una vez que hay números vendidos.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "sorteos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Título único
    pub titulo: String,
    pub descripcion: String,
    pub url_imagen: String,
    /// Cantidad de números del sorteo, [1, rango_numeros]
    pub rango_numeros: i32,
    pub fecha_inicio_venta: DateTime<Utc>,
    pub fecha_fin_venta: DateTime<Utc>,
    pub fecha_realizacion: DateTime<Utc>,
    /// Precio por número en unidades enteras de moneda
    pub precio_numero: i64,
    pub id_configuracion: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::configuraciones::Entity",
        from = "Column::IdConfiguracion",
        to = "super::configuraciones::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Configuracion,
    #[sea_orm(has_many = "super::premios::Entity")]
    Premios,
    #[sea_orm(has_many = "super::numeros::Entity")]
    Numeros,
    #[sea_orm(has_many = "super::sorteos_organizadores::Entity")]
    SorteosOrganizadores,
}

impl Related<super::configuraciones::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Configuracion.def()
    }
}

impl Related<super::premios::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Premios.def()
    }
}

impl Related<super::numeros::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Numeros.def()
    }
}

impl Related<super::sorteos_organizadores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SorteosOrganizadores.def()
    }
}

impl Related<super::organizadores::Entity> for Entity {
    fn to() -> RelationDef {
        super::sorteos_organizadores::Relation::Organizador.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::sorteos_organizadores::Relation::Sorteo.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
