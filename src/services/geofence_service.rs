//! Servicio de geofencing
//!
//! Chequea la posición del usuario contra las zonas circulares de
//! puntos de interés. El catálogo es de solo lectura.

use crate::models::geofence::{GeofenceStatus, GeofenceZone};
use crate::services::seed_data::GEOFENCE_ZONES;
use crate::utils::geo::{haversine_distance_meters, round_to_2dp};

/// Umbral de cercanía: zonas a menos de 500m sin estar adentro
const NEARBY_THRESHOLD_METERS: f64 = 500.0;

/// Partición de zonas: adentro vs cercanas. Ninguna zona aparece en ambas.
pub struct GeofenceCheck {
    pub inside_zones: Vec<GeofenceStatus>,
    pub nearby_zones: Vec<GeofenceStatus>,
}

pub struct GeofenceService {
    zones: Vec<GeofenceZone>,
}

impl GeofenceService {
    pub fn new() -> Self {
        Self { zones: GEOFENCE_ZONES.clone() }
    }

    pub fn with_zones(zones: Vec<GeofenceZone>) -> Self {
        Self { zones }
    }

    pub fn list(&self) -> &[GeofenceZone] {
        &self.zones
    }

    pub fn get(&self, zone_id: &str) -> Option<&GeofenceZone> {
        self.zones.iter().find(|z| z.id == zone_id)
    }

    pub fn by_category(&self, category: &str) -> Vec<&GeofenceZone> {
        self.zones
            .iter()
            .filter(|z| z.category.eq_ignore_ascii_case(category))
            .collect()
    }

    /// Chequea un punto contra todas las zonas del catálogo
    pub fn check_location(&self, lat: f64, lng: f64) -> GeofenceCheck {
        let mut inside_zones = Vec::new();
        let mut nearby_zones = Vec::new();

        for zone in &self.zones {
            let distance = haversine_distance_meters(lat, lng, zone.latitude, zone.longitude);
            let status = GeofenceStatus {
                zone_id: zone.id.clone(),
                zone_name: zone.name.clone(),
                is_inside: distance <= zone.radius_meters,
                distance_meters: round_to_2dp(distance),
                description: zone.description.clone(),
            };

            if status.is_inside {
                inside_zones.push(status);
            } else if status.distance_meters <= NEARBY_THRESHOLD_METERS {
                nearby_zones.push(status);
            }
        }

        GeofenceCheck { inside_zones, nearby_zones }
    }
}

impl Default for GeofenceService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_at_zone_center_is_inside() {
        let service = GeofenceService::new();

        // Centro de Tech Museum
        let check = service.check_location(37.4220, -122.0840);
        let tech = check.inside_zones.iter().find(|z| z.zone_id == "zone_1").unwrap();
        assert!(tech.is_inside);
        assert_eq!(tech.distance_meters, 0.0);
    }

    #[test]
    fn test_inside_and_nearby_never_share_a_zone() {
        let service = GeofenceService::new();
        let probes = [
            (37.4220, -122.0840),
            (37.4250, -122.0800),
            (37.4230, -122.0860),
            (37.4200, -122.0900),
        ];

        for (lat, lng) in probes {
            let check = service.check_location(lat, lng);
            for inside in &check.inside_zones {
                assert!(
                    !check.nearby_zones.iter().any(|n| n.zone_id == inside.zone_id),
                    "zone {} en ambas listas para ({}, {})",
                    inside.zone_id,
                    lat,
                    lng
                );
            }
        }
    }

    #[test]
    fn test_distances_are_rounded_to_2dp() {
        let service = GeofenceService::new();
        let check = service.check_location(37.4235, -122.0855);

        for status in check.inside_zones.iter().chain(check.nearby_zones.iter()) {
            let scaled = status.distance_meters * 100.0;
            assert!(
                (scaled - scaled.round()).abs() < 1e-9,
                "distancia sin redondear: {}",
                status.distance_meters
            );
        }
    }

    #[test]
    fn test_far_point_matches_nothing() {
        let service = GeofenceService::new();
        let check = service.check_location(0.0, 0.0);

        assert!(check.inside_zones.is_empty());
        assert!(check.nearby_zones.is_empty());
    }

    #[test]
    fn test_point_outside_radius_but_within_500m_is_nearby() {
        let service = GeofenceService::new();

        // ~111m al norte del Art Gallery (radio 100m): afuera pero cerca
        let check = service.check_location(37.4290, -122.0820);
        let gallery = check.nearby_zones.iter().find(|z| z.zone_id == "zone_4");
        assert!(gallery.is_some());
        assert!(!check.inside_zones.iter().any(|z| z.zone_id == "zone_4"));
    }

    #[test]
    fn test_category_filter_is_case_insensitive() {
        let service = GeofenceService::new();

        let museums = service.by_category("MUSEUM");
        assert_eq!(museums.len(), 2);
        assert!(museums.iter().any(|z| z.id == "zone_1"));
        assert!(museums.iter().any(|z| z.id == "zone_4"));

        assert!(service.by_category("aquarium").is_empty());
    }

    #[test]
    fn test_get_by_id() {
        let service = GeofenceService::new();
        assert_eq!(service.get("zone_3").unwrap().name, "Historic Monument");
        assert!(service.get("zone_99").is_none());
    }
}
