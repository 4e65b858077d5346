//! Modelo de TripStop
//!
//! Los arrêts intermedios de un viaje llevan un `stop_order` que debe
//! mantenerse denso y sin huecos (1..N, ordenado por hora de llegada)
//! después de cualquier borrado.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

/// TripStop principal - mapea exactamente a la tabla trip_stops
#[derive(Debug, Clone, FromRow)]
pub struct TripStop {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub station_id: Uuid,
    pub arrival_time: DateTime<Utc>,
    pub departure_time: DateTime<Utc>,
    pub stop_order: i32,
    pub price: Option<Decimal>,
    pub available_seats: Option<i32>,
    pub boarding_count: i32,
    pub alighting_count: i32,
    pub status: String,
    pub platform: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Recalcular el orden de los arrêts como secuencia densa 1..N
/// ordenada por hora de llegada.
pub fn renumber_by_arrival(mut stops: Vec<(Uuid, DateTime<Utc>)>) -> Vec<(Uuid, i32)> {
    stops.sort_by_key(|&(_, arrival)| arrival);
    stops
        .into_iter()
        .enumerate()
        .map(|(index, (id, _))| (id, (index + 1) as i32))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_renumber_is_dense_and_one_based() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();

        // Desordenados a propósito
        let result = renumber_by_arrival(vec![(c, at(15)), (a, at(9)), (b, at(12))]);

        assert_eq!(result, vec![(a, 1), (b, 2), (c, 3)]);
    }

    #[test]
    fn test_renumber_after_removal_has_no_gaps() {
        let ids: Vec<Uuid> = (0..5).map(|_| Uuid::new_v4()).collect();
        let mut stops: Vec<(Uuid, DateTime<Utc>)> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (*id, at(8 + i as u32)))
            .collect();

        // Quitar el arrêt del medio, como hace el borrado
        stops.remove(2);

        let result = renumber_by_arrival(stops);
        let orders: Vec<i32> = result.iter().map(|&(_, order)| order).collect();

        assert_eq!(orders, vec![1, 2, 3, 4]);
        assert_eq!(result[0].0, ids[0]);
        assert_eq!(result[2].0, ids[3]);
    }

    #[test]
    fn test_renumber_empty() {
        assert!(renumber_by_arrival(vec![]).is_empty());
    }
}
