use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Usuarios {
    Table,
    Id,
    Nombre,
    Email,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Organizadores {
    Table,
    Id,
    IdUsuario,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Configuraciones {
    Table,
    Id,
    TiempoLimiteReserva,
    TiempoRecordatorioPago,
    EsGlobal,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Sorteos {
    Table,
    Id,
    Titulo,
    Descripcion,
    UrlImagen,
    RangoNumeros,
    FechaInicioVenta,
    FechaFinVenta,
    FechaRealizacion,
    PrecioNumero,
    IdConfiguracion,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Premios {
    Table,
    Id,
    Titulo,
    UrlImagen,
    IdSorteo,
}

#[derive(DeriveIden)]
enum Numeros {
    Table,
    Id,
    IdSorteo,
    Numero,
    Estado,
    IdCliente,
    IdPago,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SorteosOrganizadores {
    Table,
    Id,
    IdSorteo,
    IdOrganizador,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Usuarios::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Usuarios::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Usuarios::Nombre).string().not_null())
                    .col(ColumnDef::new(Usuarios::Email).string().not_null().unique_key())
                    .col(
                        ColumnDef::new(Usuarios::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Organizadores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Organizadores::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Organizadores::IdUsuario)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Organizadores::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_organizadores_usuario")
                            .from(Organizadores::Table, Organizadores::IdUsuario)
                            .to(Usuarios::Table, Usuarios::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Configuraciones::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Configuraciones::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Configuraciones::TiempoLimiteReserva)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Configuraciones::TiempoRecordatorioPago)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Configuraciones::EsGlobal)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Configuraciones::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Sorteos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sorteos::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sorteos::Titulo).string().not_null())
                    .col(ColumnDef::new(Sorteos::Descripcion).text().not_null())
                    .col(ColumnDef::new(Sorteos::UrlImagen).string().not_null())
                    .col(ColumnDef::new(Sorteos::RangoNumeros).integer().not_null())
                    .col(
                        ColumnDef::new(Sorteos::FechaInicioVenta)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Sorteos::FechaFinVenta)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Sorteos::FechaRealizacion)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Sorteos::PrecioNumero).big_integer().not_null())
                    .col(ColumnDef::new(Sorteos::IdConfiguracion).big_integer().not_null())
                    .col(
                        ColumnDef::new(Sorteos::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Sorteos::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sorteos_configuracion")
                            .from(Sorteos::Table, Sorteos::IdConfiguracion)
                            .to(Configuraciones::Table, Configuraciones::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // backstop for the read-then-write uniqueness check
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_sorteos_titulo")
                    .table(Sorteos::Table)
                    .col(Sorteos::Titulo)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Premios::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Premios::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Premios::Titulo).string().not_null())
                    .col(ColumnDef::new(Premios::UrlImagen).string().not_null())
                    .col(ColumnDef::new(Premios::IdSorteo).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_premios_sorteo")
                            .from(Premios::Table, Premios::IdSorteo)
                            .to(Sorteos::Table, Sorteos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Numeros::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Numeros::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Numeros::IdSorteo).big_integer().not_null())
                    .col(ColumnDef::new(Numeros::Numero).integer().not_null())
                    .col(ColumnDef::new(Numeros::Estado).string_len(20).not_null())
                    .col(ColumnDef::new(Numeros::IdCliente).big_integer().null())
                    .col(ColumnDef::new(Numeros::IdPago).big_integer().null())
                    .col(
                        ColumnDef::new(Numeros::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Numeros::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_numeros_sorteo")
                            .from(Numeros::Table, Numeros::IdSorteo)
                            .to(Sorteos::Table, Sorteos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // un número por sorteo
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_numeros_sorteo_numero")
                    .table(Numeros::Table)
                    .col(Numeros::IdSorteo)
                    .col(Numeros::Numero)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SorteosOrganizadores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SorteosOrganizadores::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SorteosOrganizadores::IdSorteo)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SorteosOrganizadores::IdOrganizador)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sorteos_organizadores_sorteo")
                            .from(SorteosOrganizadores::Table, SorteosOrganizadores::IdSorteo)
                            .to(Sorteos::Table, Sorteos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sorteos_organizadores_organizador")
                            .from(
                                SorteosOrganizadores::Table,
                                SorteosOrganizadores::IdOrganizador,
                            )
                            .to(Organizadores::Table, Organizadores::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_sorteos_organizadores")
                    .table(SorteosOrganizadores::Table)
                    .col(SorteosOrganizadores::IdSorteo)
                    .col(SorteosOrganizadores::IdOrganizador)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // configuración global compartida
        let seed = Query::insert()
            .into_table(Configuraciones::Table)
            .columns([
                Configuraciones::TiempoLimiteReserva,
                Configuraciones::TiempoRecordatorioPago,
                Configuraciones::EsGlobal,
            ])
            .values_panic([60.into(), 30.into(), true.into()])
            .to_owned();
        manager.exec_stmt(seed).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SorteosOrganizadores::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Numeros::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Premios::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Sorteos::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Configuraciones::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Organizadores::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Usuarios::Table).to_owned())
            .await?;
        Ok(())
    }
}
