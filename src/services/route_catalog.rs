//! Catálogo de rutas
//!
//! Colección inmutable de rutas después de la construcción. Soporta
//! lookup por id, filtro por región y búsqueda por substring.

use crate::models::route::{Region, Route};
use crate::services::network_generator::generate_routes;
use crate::services::seed_data::REGIONS;
use crate::services::sim_rng::SimRng;
use crate::utils::errors::{AppError, AppResult};

/// Límite de resultados de búsqueda
const SEARCH_RESULT_CAP: usize = 20;

pub struct RouteCatalog {
    routes: Vec<Route>,
}

impl RouteCatalog {
    /// Construye el catálogo validando los invariantes de cada ruta
    pub fn new(routes: Vec<Route>) -> AppResult<Self> {
        for route in &routes {
            if route.stops.is_empty() && route.path.len() < 2 {
                return Err(AppError::Internal(format!(
                    "Route {} has no stops and no usable path",
                    route.id
                )));
            }
            for (i, stop) in route.stops.iter().enumerate() {
                if stop.order != (i + 1) as u32 {
                    return Err(AppError::Internal(format!(
                        "Route {} has out-of-order stop '{}' (order {} at position {})",
                        route.id,
                        stop.name,
                        stop.order,
                        i + 1
                    )));
                }
            }
        }

        Ok(Self { routes })
    }

    /// Genera el catálogo completo a partir del RNG de simulación
    pub fn generate(rng: &mut SimRng) -> AppResult<Self> {
        Self::new(generate_routes(rng))
    }

    pub fn all(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn get_by_id(&self, route_id: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.id == route_id)
    }

    /// Filtra rutas por país y/o ciudad (match exacto).
    /// Sin filtros devuelve todas las rutas; un filtro sin matches
    /// devuelve una lista vacía, no un error.
    pub fn filter(&self, country_code: Option<&str>, city: Option<&str>) -> Vec<&Route> {
        self.routes
            .iter()
            .filter(|r| country_code.map_or(true, |c| r.country_code == c))
            .filter(|r| city.map_or(true, |c| r.city == c))
            .collect()
    }

    /// Busca rutas por substring (case-insensitive) en nombre, designación
    /// y ciudad. Limitado a 20 resultados en orden de catálogo.
    pub fn search(&self, query: &str, country_code: Option<&str>) -> Vec<&Route> {
        let query = query.to_lowercase();

        self.routes
            .iter()
            .filter(|r| country_code.map_or(true, |c| r.country_code == c))
            .filter(|r| {
                r.name.to_lowercase().contains(&query)
                    || r.route_number.to_lowercase().contains(&query)
                    || r.city.to_lowercase().contains(&query)
            })
            .take(SEARCH_RESULT_CAP)
            .collect()
    }
}

/// Lista de regiones disponibles (país + sus ciudades)
pub fn all_regions() -> Vec<Region> {
    REGIONS
        .iter()
        .map(|country| Region {
            code: country.code.to_string(),
            name: country.name.to_string(),
            continent: country.continent.to_string(),
            cities: country.cities.iter().map(|c| c.name.to_string()).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::route::{Coordinates, Stop, TransportMode};

    fn test_route(id: &str, city: &str, country_code: &str, designation: &str) -> Route {
        let stops = vec![
            Stop { name: "Stop 1".to_string(), lat: 0.0, lng: 0.0, order: 1 },
            Stop { name: "Stop 2".to_string(), lat: 0.1, lng: 0.1, order: 2 },
        ];
        Route {
            id: id.to_string(),
            route_number: designation.to_string(),
            name: format!("{} Bus {}", city, designation),
            mode: TransportMode::Bus,
            city: city.to_string(),
            country: "Testland".to_string(),
            country_code: country_code.to_string(),
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

    fn sample_catalog() -> RouteCatalog {
        RouteCatalog::new(vec![
            test_route("route_1", "Delhi", "india", "Route 42"),
            test_route("route_2", "Mumbai", "india", "Express 7"),
            test_route("route_3", "Tokyo", "japan", "Line 42"),
        ])
        .unwrap()
    }

    #[test]
    fn test_get_by_id() {
        let catalog = sample_catalog();
        assert_eq!(catalog.get_by_id("route_2").unwrap().city, "Mumbai");
        assert!(catalog.get_by_id("route_99").is_none());
    }

    #[test]
    fn test_filter_by_country_and_city() {
        let catalog = sample_catalog();

        assert_eq!(catalog.filter(None, None).len(), 3);
        assert_eq!(catalog.filter(Some("india"), None).len(), 2);
        assert_eq!(catalog.filter(Some("india"), Some("Delhi")).len(), 1);
        // Filtro sin matches devuelve vacío, no error
        assert!(catalog.filter(Some("france"), None).is_empty());
        assert!(catalog.filter(Some("india"), Some("Tokyo")).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = sample_catalog();

        // Match por designación
        let by_number = catalog.search("42", None);
        assert_eq!(by_number.len(), 2);
        // Match por ciudad, sin importar mayúsculas
        let by_city = catalog.search("tokyo", None);
        assert_eq!(by_city.len(), 1);
        assert_eq!(by_city[0].id, "route_3");
        // Filtro de país aplicado antes de buscar
        let scoped = catalog.search("42", Some("india"));
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].id, "route_1");
    }

    #[test]
    fn test_search_caps_results_at_20() {
        let routes: Vec<Route> = (1..=30)
            .map(|i| test_route(&format!("route_{}", i), "Delhi", "india", &format!("Route {}", i)))
            .collect();
        let catalog = RouteCatalog::new(routes).unwrap();

        let results = catalog.search("delhi", None);
        assert_eq!(results.len(), 20);
        // Los resultados respetan el orden del catálogo
        assert_eq!(results[0].id, "route_1");
        assert_eq!(results[19].id, "route_20");
    }

    #[test]
    fn test_rejects_route_without_stops_or_path() {
        let mut bad = test_route("route_1", "Delhi", "india", "Route 1");
        bad.stops.clear();
        bad.path.truncate(1);

        assert!(RouteCatalog::new(vec![bad]).is_err());
    }

    #[test]
    fn test_rejects_out_of_order_stops() {
        let mut bad = test_route("route_1", "Delhi", "india", "Route 1");
        bad.stops[1].order = 5;

        assert!(RouteCatalog::new(vec![bad]).is_err());
    }

    #[test]
    fn test_generated_catalog_passes_validation() {
        let mut rng = SimRng::from_seed_u64(21);
        let catalog = RouteCatalog::generate(&mut rng).unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_all_regions_lists_countries_with_cities() {
        let regions = all_regions();
        assert_eq!(regions.len(), 24);

        let india = regions.iter().find(|r| r.code == "india").unwrap();
        assert_eq!(india.name, "India");
        assert_eq!(india.continent, "asia");
        assert!(india.cities.contains(&"Delhi".to_string()));
    }
}
