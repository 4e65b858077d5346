//! Controller de rutas

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::route_dto::{CreateRouteRequest, RouteResponse, UpdateRouteRequest};
use crate::repositories::route_repository::{RouteRepository, RouteWithStations};
use crate::utils::errors::{conflict_error, validation_error, AppError};
use crate::utils::validation::validate_positive;

pub struct RouteController {
    repository: RouteRepository,
}

impl RouteController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: RouteRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        company_id: Uuid,
        request: CreateRouteRequest,
    ) -> Result<RouteResponse, AppError> {
        request.validate()?;

        validate_positive(request.distance)
            .map_err(|_| validation_error("distance", "la distancia debe ser positiva"))?;
        validate_positive(request.base_price)
            .map_err(|_| validation_error("base_price", "el precio base debe ser positivo"))?;

        if !self
            .repository
            .stations_belong_to_company(
                request.departure_station_id,
                request.arrival_station_id,
                company_id,
            )
            .await?
        {
            return Err(AppError::NotFound(
                "Una o varias estaciones no encontradas o no pertenecen a esta empresa"
                    .to_string(),
            ));
        }

        if self
            .repository
            .pair_exists(
                request.departure_station_id,
                request.arrival_station_id,
                company_id,
                None,
            )
            .await?
        {
            return Err(conflict_error(
                "Ya existe una ruta entre estas dos estaciones",
            ));
        }

        let route = self.repository.create(company_id, &request).await?;

        let with_stations = self
            .repository
            .find_with_stations(route.id, company_id)
            .await?
            .ok_or_else(|| AppError::Internal("Ruta creada pero no recuperable".to_string()))?;

        Ok(format_route(with_stations))
    }

    pub async fn list_by_company(&self, company_id: Uuid) -> Result<Vec<RouteResponse>, AppError> {
        let routes = self.repository.list_by_company(company_id).await?;

        Ok(routes.into_iter().map(format_route).collect())
    }

    pub async fn get_by_id(&self, id: Uuid, company_id: Uuid) -> Result<RouteResponse, AppError> {
        let route = self
            .repository
            .find_with_stations(id, company_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Ruta no encontrada".to_string()))?;

        Ok(format_route(route))
    }

    pub async fn update(
        &self,
        id: Uuid,
        company_id: Uuid,
        request: UpdateRouteRequest,
    ) -> Result<RouteResponse, AppError> {
        request.validate()?;

        let current = self
            .repository
            .find_by_id(id, company_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("Ruta no encontrada o no pertenece a esta empresa".to_string())
            })?;

        // Si cambia alguna estación, re-verificar pertenencia y unicidad
        // del par resultante
        if request.departure_station_id.is_some() || request.arrival_station_id.is_some() {
            let departure = request
                .departure_station_id
                .unwrap_or(current.departure_station_id);
            let arrival = request
                .arrival_station_id
                .unwrap_or(current.arrival_station_id);

            if !self
                .repository
                .stations_belong_to_company(departure, arrival, company_id)
                .await?
            {
                return Err(AppError::NotFound(
                    "Una o varias estaciones no encontradas o no pertenecen a esta empresa"
                        .to_string(),
                ));
            }

            if self
                .repository
                .pair_exists(departure, arrival, company_id, Some(id))
                .await?
            {
                return Err(conflict_error(
                    "Ya existe una ruta entre estas dos estaciones",
                ));
            }
        }

        self.repository
            .update(
                id,
                company_id,
                request.departure_station_id,
                request.arrival_station_id,
                request.distance,
                request.duration,
                request.base_price,
            )
            .await?;

        let updated = self
            .repository
            .find_with_stations(id, company_id)
            .await?
            .ok_or_else(|| AppError::Internal("Ruta actualizada pero no recuperable".to_string()))?;

        Ok(format_route(updated))
    }

    pub async fn delete(&self, id: Uuid, company_id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id, company_id).await
    }
}

fn format_route(row: RouteWithStations) -> RouteResponse {
    let route = row.route;

    RouteResponse {
        id: route.id,
        company_id: route.company_id,
        departure_station_id: route.departure_station_id,
        arrival_station_id: route.arrival_station_id,
        departure_station_name: row.departure_station_name,
        arrival_station_name: row.arrival_station_name,
        distance: route.distance,
        duration: route.duration,
        base_price: route.base_price,
        created_at: route.created_at,
        updated_at: route.updated_at,
    }
}
