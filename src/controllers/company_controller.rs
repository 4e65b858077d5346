//! Controller de compañías
//!
//! El detalle agrega contadores, flota, chauffeurs, estaciones con sus
//! movimientos y los viajes con sus arrêts, como lo consume el frontend.

use std::collections::HashMap;

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::company_dto::{
    CompanyDetailResponse, CompanyResponse, CompanyStationDetail, CompanyTripStats,
    CompanyTripStopSummary, CompanyTripSummary, CreateCompanyRequest, LocationResponse,
    UpdateCompanyRequest,
};
use crate::models::company::Company;
use crate::models::trip::TripStatus;
use crate::repositories::company_repository::CompanyRepository;
use crate::repositories::station_repository::StationRepository;
use crate::utils::errors::{validation_error, AppError};
use crate::utils::validation::{validate_coordinates, validate_not_empty};

pub struct CompanyController {
    repository: CompanyRepository,
    station_repository: StationRepository,
}

impl CompanyController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CompanyRepository::new(pool.clone()),
            station_repository: StationRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateCompanyRequest) -> Result<CompanyResponse, AppError> {
        request.validate()?;

        validate_not_empty(&request.name)
            .map_err(|_| validation_error("name", "el nombre es requerido"))?;
        validate_not_empty(&request.phone)
            .map_err(|_| validation_error("phone", "el teléfono es requerido"))?;

        if let (Some(lat), Some(lng)) = (request.latitude, request.longitude) {
            validate_coordinates(lat, lng)
                .map_err(|_| validation_error("location", "coordenadas inválidas"))?;
        }

        let company = self.repository.create(&request).await?;

        tracing::info!("Compañía creada con id {}", company.id);

        Ok(format_company(
            company,
            request.coverage_areas,
            request.transport_types,
            0,
            0,
            0,
        ))
    }

    pub async fn list(&self) -> Result<Vec<CompanyResponse>, AppError> {
        let companies = self.repository.list_with_counts().await?;

        let mut responses = Vec::with_capacity(companies.len());
        for row in companies {
            let coverage_areas = self.repository.coverage_areas(row.company.id).await?;
            let transport_types = self.repository.transport_types(row.company.id).await?;

            responses.push(format_company(
                row.company,
                coverage_areas,
                transport_types,
                row.stations_count,
                row.drivers_count,
                row.vehicles_count,
            ));
        }

        Ok(responses)
    }

    pub async fn get_detail(&self, id: Uuid) -> Result<CompanyDetailResponse, AppError> {
        let row = self
            .repository
            .find_with_counts(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Compañía no encontrada".to_string()))?;

        let company = row.company;

        let coverage_areas = self.repository.coverage_areas(company.id).await?;
        let transport_types = self.repository.transport_types(company.id).await?;
        let vehicles = self.repository.vehicles_summary(company.id).await?;
        let drivers = self.repository.drivers_summary(company.id).await?;

        // Estaciones con sus movimientos y próximos departures/arrivals
        let mut stations = Vec::new();
        for station_row in self.station_repository.list_by_company(company.id).await? {
            let station = station_row.station;
            let next_departures = self
                .repository
                .next_departures(station.id, company.id)
                .await?;
            let next_arrivals = self.repository.next_arrivals(station.id, company.id).await?;

            let total_movements = station_row.departures_count
                + station_row.arrivals_count
                + station_row.stops_count;

            stations.push(CompanyStationDetail {
                id: station.id,
                name: station.name,
                city: station.city,
                address: station.address,
                phone: station.phone,
                email: station.email,
                capacity: station.capacity,
                latitude: station.latitude,
                longitude: station.longitude,
                is_main_station: station.is_main_station,
                features: station.features.0,
                status: station.status,
                departures_count: station_row.departures_count,
                arrivals_count: station_row.arrivals_count,
                stops_count: station_row.stops_count,
                total_movements,
                next_departures,
                next_arrivals,
                created_at: station.created_at,
                updated_at: station.updated_at,
            });
        }

        // Viajes con sus arrêts agrupados
        let trip_rows = self.repository.trips_summary(company.id).await?;
        let trip_ids: Vec<Uuid> = trip_rows.iter().map(|t| t.id).collect();

        let mut stops_by_trip: HashMap<Uuid, Vec<CompanyTripStopSummary>> = HashMap::new();
        for stop in self.repository.stops_for_trips(&trip_ids).await? {
            stops_by_trip
                .entry(stop.trip_id)
                .or_default()
                .push(CompanyTripStopSummary {
                    station_name: stop.station_name,
                    station_city: stop.station_city,
                    arrival_time: stop.arrival_time,
                    departure_time: stop.departure_time,
                    stop_order: stop.stop_order,
                });
        }

        let mut trip_stats = CompanyTripStats {
            total: trip_rows.len(),
            scheduled: 0,
            in_progress: 0,
            completed: 0,
            cancelled: 0,
            total_revenue: Decimal::ZERO,
        };

        let mut trips = Vec::with_capacity(trip_rows.len());
        for trip in trip_rows {
            match trip.status {
                TripStatus::Scheduled => trip_stats.scheduled += 1,
                TripStatus::InProgress => trip_stats.in_progress += 1,
                TripStatus::Completed => {
                    trip_stats.completed += 1;
                    trip_stats.total_revenue += trip.total_price;
                }
                TripStatus::Cancelled => trip_stats.cancelled += 1,
            }

            let stops = stops_by_trip.remove(&trip.id).unwrap_or_default();

            trips.push(CompanyTripSummary {
                id: trip.id,
                departure_time: trip.departure_time,
                arrival_time: trip.arrival_time,
                distance: trip.distance,
                duration: trip.duration,
                base_price: trip.base_price,
                total_price: trip.total_price,
                available_seats: trip.available_seats,
                status: trip.status,
                vehicle_number: trip.vehicle_number,
                vehicle_brand: trip.vehicle_brand,
                vehicle_model: trip.vehicle_model,
                driver_name: trip.driver_name,
                departure_station: trip.departure_station,
                departure_city: trip.departure_city,
                arrival_station: trip.arrival_station,
                arrival_city: trip.arrival_city,
                stops,
            });
        }

        Ok(CompanyDetailResponse {
            id: company.id,
            name: company.name,
            email: company.email,
            phone: company.phone,
            address: company.address,
            city: company.city,
            logo_url: company.logo_url,
            status: company.status,
            coverage_areas,
            transport_types,
            fleet_size: row.vehicles_count,
            drivers_count: row.drivers_count,
            stations_count: row.stations_count,
            trips_count: row.trips_count,
            vehicles,
            drivers,
            stations,
            trips,
            trip_stats,
            created_at: company.created_at,
            updated_at: company.updated_at,
        })
    }

    pub async fn update(&self, id: Uuid, request: UpdateCompanyRequest) -> Result<(), AppError> {
        request.validate()?;

        self.repository.update(id, &request).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}

fn format_company(
    company: Company,
    coverage_areas: Vec<String>,
    transport_types: Vec<String>,
    stations_count: i64,
    drivers_count: i64,
    vehicles_count: i64,
) -> CompanyResponse {
    let location = match (company.latitude, company.longitude) {
        (Some(latitude), Some(longitude)) => Some(LocationResponse {
            latitude,
            longitude,
        }),
        _ => None,
    };

    CompanyResponse {
        id: company.id,
        name: company.name,
        email: company.email,
        alternate_email: company.alternate_email,
        phone: company.phone,
        alternate_phone: company.alternate_phone,
        whatsapp: company.whatsapp,
        address: company.address,
        city: company.city,
        district: company.district,
        postal_code: company.postal_code,
        website: company.website,
        description: company.description,
        logo_url: company.logo_url,
        registration_number: company.registration_number,
        tax_number: company.tax_number,
        manager_name: company.manager_name,
        manager_position: company.manager_position,
        status: company.status,
        location,
        coverage_areas,
        transport_types,
        stations_count,
        drivers_count,
        vehicles_count,
        created_at: company.created_at,
        updated_at: company.updated_at,
    }
}
