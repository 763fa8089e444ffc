//! Generador de la red de transporte
//!
//! Construye el catálogo completo de rutas para todas las ciudades del
//! catálogo semilla. La generación es determinista dada una semilla.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::route::{Coordinates, Route, Stop, TransportMode};
use crate::services::seed_data::REGIONS;
use crate::services::sim_rng::SimRng;

const METRO_COLORS: [&str; 6] = ["Red", "Blue", "Green", "Yellow", "Orange", "Purple"];

fn prefixes_for(mode: TransportMode) -> &'static [&'static str] {
    match mode {
        TransportMode::Bus => &["Route", "Line", "Express"],
        TransportMode::Metro => &["Line", ""],
        TransportMode::Tram => &["Line", "Route"],
        TransportMode::LightRail => &["Line", ""],
    }
}

/// Genera la designación visible de la ruta, p.ej. "Express 42" o "Line Red"
fn route_designation(mode: TransportMode, rng: &mut SimRng) -> String {
    let prefix = *prefixes_for(mode)
        .choose(&mut rng.0)
        .unwrap_or(&"Line");

    if mode == TransportMode::Metro {
        let color = *METRO_COLORS.choose(&mut rng.0).unwrap_or(&"Red");
        if prefix.is_empty() {
            color.to_string()
        } else {
            format!("{} {}", prefix, color)
        }
    } else {
        let number = rng.0.gen_range(1..=999);
        if prefix.is_empty() {
            number.to_string()
        } else {
            format!("{} {}", prefix, number)
        }
    }
}

/// Genera rutas de transporte para todas las ciudades del catálogo semilla
pub fn generate_routes(rng: &mut SimRng) -> Vec<Route> {
    let mut routes = Vec::new();
    let mut route_id = 1u32;

    for country in REGIONS {
        for city in country.cities {
            for _ in 0..city.routes {
                let mode = *TransportMode::ALL.choose(&mut rng.0).unwrap_or(&TransportMode::Bus);
                let designation = route_designation(mode, rng);

                // Trazado simplificado: una línea entre dos puntos cerca del centro
                let start = Coordinates {
                    lat: city.lat + rng.0.gen_range(-0.1..0.1),
                    lng: city.lng + rng.0.gen_range(-0.1..0.1),
                };
                let end = Coordinates {
                    lat: city.lat + rng.0.gen_range(-0.1..0.1),
                    lng: city.lng + rng.0.gen_range(-0.1..0.1),
                };

                // Paradas interpoladas linealmente a lo largo del trazado
                let num_stops = rng.0.gen_range(8..=20);
                let mut stops = Vec::with_capacity(num_stops);
                for j in 0..num_stops {
                    let t = j as f64 / (num_stops - 1) as f64;
                    stops.push(Stop {
                        name: format!("Stop {}", j + 1),
                        lat: start.lat + (end.lat - start.lat) * t,
                        lng: start.lng + (end.lng - start.lng) * t,
                        order: (j + 1) as u32,
                    });
                }

                routes.push(Route {
                    id: format!("route_{}", route_id),
                    route_number: designation.clone(),
                    name: format!("{} {} {}", city.name, mode.as_str(), designation),
                    mode,
                    city: city.name.to_string(),
                    country: country.name.to_string(),
                    country_code: country.code.to_string(),
                    continent: country.continent.to_string(),
                    stops,
                    path: vec![start, end],
                    active: true,
                    frequency: format!("{} mins", rng.0.gen_range(5..=30)),
                });

                route_id += 1;
            }
        }
    }

    routes
}
