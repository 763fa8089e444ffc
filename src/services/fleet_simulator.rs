//! Simulador de flota
//!
//! Mantiene el estado mutable de todos los vehículos y lo avanza en
//! cada tick. El motor es pull-driven: los ticks ocurren dentro del
//! request handler, nunca en un timer propio. El estado compartido se
//! serializa con un RwLock alrededor del pase completo de la flota.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use rand::Rng;

use crate::models::route::{Coordinates, Route};
use crate::models::vehicle::{NextStop, Vehicle, VehicleStatus};
use crate::services::route_catalog::RouteCatalog;
use crate::services::sim_rng::SimRng;

/// Etiquetas fijas para vehículos en rutas sin paradas
const PLACEHOLDER_FIRST: &str = "Terminal";
const PLACEHOLDER_SECOND: &str = "End of Line";

pub struct FleetSimulator {
    vehicles: Vec<Vehicle>,
    rng: SimRng,
    catalog: Arc<RouteCatalog>,
}

impl FleetSimulator {
    /// Crea la flota inicial: 2-5 vehículos por ruta, colocados en un
    /// punto pseudo-aleatorio de la secuencia de paradas
    pub fn initialize(catalog: Arc<RouteCatalog>, mut rng: SimRng) -> Self {
        let mut vehicles = Vec::new();
        let mut vehicle_id = 1u32;

        for route in catalog.all() {
            let num_vehicles = rng.0.gen_range(2..=5);
            for _ in 0..num_vehicles {
                vehicles.push(seed_vehicle(route, vehicle_id, &mut rng));
                vehicle_id += 1;
            }
        }

        log::info!(
            "✅ Fleet initialized: {} vehicles across {} routes",
            vehicles.len(),
            catalog.len()
        );

        Self { vehicles, rng, catalog }
    }

    /// Avanza un paso de simulación sobre toda la flota.
    ///
    /// Un vehículo cuya ruta ya no existe en el catálogo se salta por
    /// completo; una ruta sin paradas solo recibe jitter de posición.
    /// El fallo de un vehículo nunca aborta el pase del resto.
    pub fn tick(&mut self) {
        let Self { vehicles, rng, catalog } = self;

        for vehicle in vehicles.iter_mut() {
            let Some(route) = catalog.get_by_id(&vehicle.route_id) else {
                continue;
            };

            // 1. Jitter de posición para simular movimiento
            vehicle.position.lat += rng.0.gen_range(-0.001..0.001);
            vehicle.position.lng += rng.0.gen_range(-0.001..0.001);

            // 2. Velocidad nueva y rumbo con delta acotado
            vehicle.speed = rng.0.gen_range(20..=60);
            let heading_delta = rng.0.gen_range(-10..=10);
            vehicle.heading = (vehicle.heading as i32 + heading_delta).rem_euclid(360) as u16;

            // 3. Ocupación con delta acotado, clamp [5, capacity]
            let occupancy_delta = rng.0.gen_range(-5..=5);
            vehicle.occupancy =
                (vehicle.occupancy as i32 + occupancy_delta).clamp(5, vehicle.capacity as i32) as u32;

            if !route.stops.is_empty() {
                // 4. Decaimiento de ETAs con pisos 1 y 2
                vehicle.next_stops[0].eta_minutes =
                    vehicle.next_stops[0].eta_minutes.saturating_sub(1).max(1);
                vehicle.next_stops[1].eta_minutes =
                    vehicle.next_stops[1].eta_minutes.saturating_sub(1).max(2);

                // 5. Al llegar al piso, avanzar a las dos paradas siguientes
                if vehicle.next_stops[0].eta_minutes <= 1 {
                    advance_to_next_stops(vehicle, route, rng);
                }

                // 6. Redibujar estado ocasionalmente, sesgado a On Time
                if rng.0.gen_bool(0.1) {
                    vehicle.status = if rng.0.gen_bool(0.8) {
                        VehicleStatus::OnTime
                    } else {
                        VehicleStatus::Delayed
                    };
                }
            }

            // 7. Sello de tiempo
            vehicle.last_updated = Utc::now();
        }
    }

    pub fn vehicles_for_route(&self, route_id: &str) -> Vec<Vehicle> {
        self.vehicles
            .iter()
            .filter(|v| v.route_id == route_id)
            .cloned()
            .collect()
    }

    /// Todos los vehículos, opcionalmente filtrados por región
    pub fn all_vehicles(&self, country_code: Option<&str>, city: Option<&str>) -> Vec<Vehicle> {
        if country_code.is_none() && city.is_none() {
            return self.vehicles.clone();
        }

        let route_ids: HashSet<&str> = self
            .catalog
            .filter(country_code, city)
            .iter()
            .map(|r| r.id.as_str())
            .collect();

        self.vehicles
            .iter()
            .filter(|v| route_ids.contains(v.route_id.as_str()))
            .cloned()
            .collect()
    }

    pub fn fleet_size(&self) -> usize {
        self.vehicles.len()
    }
}

fn seed_vehicle(route: &Route, vehicle_id: u32, rng: &mut SimRng) -> Vehicle {
    let progress: f64 = rng.0.gen();

    let (position, next_stops) = if route.stops.is_empty() {
        let fallback = route
            .path
            .first()
            .copied()
            .unwrap_or(Coordinates { lat: 0.0, lng: 0.0 });
        let placeholders = [
            NextStop { name: PLACEHOLDER_FIRST.to_string(), eta_minutes: 0 },
            NextStop { name: PLACEHOLDER_SECOND.to_string(), eta_minutes: 0 },
        ];
        (fallback, placeholders)
    } else {
        let last = route.stops.len() - 1;
        let stop_index = (progress * last as f64) as usize;
        let stop = &route.stops[stop_index];

        let position = Coordinates {
            lat: stop.lat + rng.0.gen_range(-0.002..0.002),
            lng: stop.lng + rng.0.gen_range(-0.002..0.002),
        };

        let first = &route.stops[(stop_index + 1).min(last)];
        let second = &route.stops[(stop_index + 2).min(last)];
        let upcoming = [
            NextStop { name: first.name.clone(), eta_minutes: rng.0.gen_range(2..=8) },
            NextStop { name: second.name.clone(), eta_minutes: rng.0.gen_range(10..=20) },
        ];
        (position, upcoming)
    };

    Vehicle {
        id: format!("vehicle_{}", vehicle_id),
        route_id: route.id.clone(),
        route_name: route.name.clone(),
        mode: route.mode,
        position,
        speed: rng.0.gen_range(20..=60),
        heading: rng.0.gen_range(0..360u16),
        next_stops,
        capacity: rng.0.gen_range(30..=100),
        occupancy: rng.0.gen_range(10..=80),
        status: if rng.0.gen_bool(0.85) {
            VehicleStatus::OnTime
        } else {
            VehicleStatus::Delayed
        },
        last_updated: Utc::now(),
    }
}

/// Avanza las dos próximas paradas del vehículo siguiendo el orden de la
/// ruta. Ambas entradas se clampan a la parada final: un vehículo que ya
/// llegó a la terminal se queda ahí, con las dos entradas duplicadas.
fn advance_to_next_stops(vehicle: &mut Vehicle, route: &Route, rng: &mut SimRng) {
    let Some(current_index) = route.stop_index_by_name(&vehicle.next_stops[0].name) else {
        // Nombre de parada desconocido: se salta este vehículo, el pase sigue
        return;
    };

    let last = route.stops.len() - 1;
    let first = &route.stops[(current_index + 1).min(last)];
    let second = &route.stops[(current_index + 2).min(last)];

    vehicle.next_stops[0] = NextStop {
        name: first.name.clone(),
        eta_minutes: rng.0.gen_range(3..=8),
    };
    vehicle.next_stops[1] = NextStop {
        name: second.name.clone(),
        eta_minutes: rng.0.gen_range(10..=18),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::route::{Stop, TransportMode};

    fn linear_route(id: &str, num_stops: usize) -> Route {
        let stops: Vec<Stop> = (0..num_stops)
            .map(|j| Stop {
                name: format!("Stop {}", j + 1),
                lat: j as f64 * 0.01,
                lng: j as f64 * 0.01,
                order: (j + 1) as u32,
            })
            .collect();

        Route {
            id: id.to_string(),
            route_number: "Route 1".to_string(),
            name: "Testville Bus Route 1".to_string(),
            mode: TransportMode::Bus,
            city: "Testville".to_string(),
            country: "Testland".to_string(),
            country_code: "test".to_string(),
            continent: "test".to_string(),
            stops,
            path: vec![
                Coordinates { lat: 0.0, lng: 0.0 },
                Coordinates { lat: 0.1, lng: 0.1 },
            ],
            active: true,
            frequency: "10 mins".to_string(),
        }
    }

    fn simulator_with(routes: Vec<Route>, seed: u64) -> FleetSimulator {
        let catalog = Arc::new(RouteCatalog::new(routes).unwrap());
        FleetSimulator::initialize(catalog, SimRng::from_seed_u64(seed))
    }

    #[test]
    fn test_initialize_places_2_to_5_vehicles_per_route() {
        let sim = simulator_with(vec![linear_route("route_1", 10), linear_route("route_2", 8)], 1);

        let on_first = sim.vehicles_for_route("route_1").len();
        let on_second = sim.vehicles_for_route("route_2").len();
        assert!((2..=5).contains(&on_first));
        assert!((2..=5).contains(&on_second));
        assert_eq!(sim.fleet_size(), on_first + on_second);
    }

    #[test]
    fn test_repeated_ticks_preserve_invariants() {
        let mut rng = SimRng::from_seed_u64(5);
        let catalog = Arc::new(RouteCatalog::generate(&mut rng).unwrap());
        let mut sim = FleetSimulator::initialize(catalog, SimRng::from_seed_u64(6));

        for _ in 0..30 {
            sim.tick();

            for v in sim.all_vehicles(None, None) {
                assert!(v.occupancy >= 5 && v.occupancy <= v.capacity, "vehicle {}", v.id);
                assert!(v.heading < 360, "vehicle {}", v.id);
                assert!((20..=60).contains(&v.speed), "vehicle {}", v.id);
                assert!(v.next_stops[0].eta_minutes >= 1, "vehicle {}", v.id);
                assert!(v.next_stops[1].eta_minutes >= 2, "vehicle {}", v.id);
            }
        }
    }

    #[test]
    fn test_eta_floor_triggers_advance_to_following_stops() {
        let mut sim = simulator_with(vec![linear_route("route_1", 10)], 2);

        // Vehículo apuntando a la parada en el índice 5, a punto de llegar
        sim.vehicles[0].next_stops[0] = NextStop { name: "Stop 6".to_string(), eta_minutes: 2 };
        sim.vehicles[0].next_stops[1] = NextStop { name: "Stop 7".to_string(), eta_minutes: 10 };
        sim.vehicles.truncate(1);

        sim.tick();

        let v = &sim.vehicles[0];
        assert_eq!(v.next_stops[0].name, "Stop 7");
        assert_eq!(v.next_stops[1].name, "Stop 8");
        assert!((3..=8).contains(&v.next_stops[0].eta_minutes));
        assert!((10..=18).contains(&v.next_stops[1].eta_minutes));
    }

    #[test]
    fn test_vehicle_idles_at_terminal() {
        let mut sim = simulator_with(vec![linear_route("route_1", 10)], 3);

        // Ya llegando a la última parada
        sim.vehicles[0].next_stops[0] = NextStop { name: "Stop 10".to_string(), eta_minutes: 2 };
        sim.vehicles[0].next_stops[1] = NextStop { name: "Stop 10".to_string(), eta_minutes: 12 };
        sim.vehicles.truncate(1);

        for _ in 0..5 {
            sim.tick();
        }

        // Ambas entradas quedan clampadas en la terminal
        let v = &sim.vehicles[0];
        assert_eq!(v.next_stops[0].name, "Stop 10");
        assert_eq!(v.next_stops[1].name, "Stop 10");
    }

    #[test]
    fn test_route_without_stops_keeps_placeholders() {
        let mut route = linear_route("route_1", 10);
        route.stops.clear();
        let mut sim = simulator_with(vec![route], 4);

        let status_before = sim.vehicles[0].status;
        sim.tick();
        sim.tick();

        let v = &sim.vehicles[0];
        assert_eq!(v.next_stops[0].name, PLACEHOLDER_FIRST);
        assert_eq!(v.next_stops[1].name, PLACEHOLDER_SECOND);
        assert_eq!(v.next_stops[0].eta_minutes, 0);
        assert_eq!(v.next_stops[1].eta_minutes, 0);
        // Sin paradas tampoco se redibuja el estado
        assert_eq!(v.status, status_before);
    }

    #[test]
    fn test_tick_skips_vehicle_with_unknown_route() {
        let mut sim = simulator_with(vec![linear_route("route_1", 10)], 7);

        sim.vehicles[0].route_id = "route_ghost".to_string();
        let before = sim.vehicles[0].clone();

        sim.tick();

        let after = &sim.vehicles[0];
        assert_eq!(after.position, before.position);
        assert_eq!(after.speed, before.speed);
        assert_eq!(after.heading, before.heading);
        assert_eq!(after.occupancy, before.occupancy);
        assert_eq!(after.last_updated, before.last_updated);
    }

    #[test]
    fn test_all_vehicles_filters_by_region() {
        let mut india = linear_route("route_1", 10);
        india.country_code = "india".to_string();
        india.city = "Delhi".to_string();
        let mut japan = linear_route("route_2", 10);
        japan.country_code = "japan".to_string();
        japan.city = "Tokyo".to_string();

        let sim = simulator_with(vec![india, japan], 8);

        let all = sim.all_vehicles(None, None);
        let india_only = sim.all_vehicles(Some("india"), None);
        let tokyo_only = sim.all_vehicles(None, Some("Tokyo"));

        assert_eq!(all.len(), sim.fleet_size());
        assert!(india_only.iter().all(|v| v.route_id == "route_1"));
        assert!(tokyo_only.iter().all(|v| v.route_id == "route_2"));
        assert!(!india_only.is_empty());
        assert!(!tokyo_only.is_empty());
        assert!(sim.all_vehicles(Some("france"), None).is_empty());
    }

    #[test]
    fn test_same_seed_produces_same_fleet() {
        let mut sim_a = simulator_with(vec![linear_route("route_1", 12)], 42);
        let mut sim_b = simulator_with(vec![linear_route("route_1", 12)], 42);

        sim_a.tick();
        sim_b.tick();

        let fleet_a = sim_a.all_vehicles(None, None);
        let fleet_b = sim_b.all_vehicles(None, None);
        assert_eq!(fleet_a.len(), fleet_b.len());
        for (a, b) in fleet_a.iter().zip(fleet_b.iter()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.position, b.position);
            assert_eq!(a.speed, b.speed);
            assert_eq!(a.heading, b.heading);
            assert_eq!(a.occupancy, b.occupancy);
        }
    }
}
