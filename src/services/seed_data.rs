//! Datos semilla del sistema
//!
//! Catálogo de ciudades para el generador de rutas, zonas de votación
//! de Delhi y zonas de geofencing de demo (coordenadas cerca de San
//! Francisco para probar fácil con el emulador de Android).

use lazy_static::lazy_static;

use crate::models::geofence::GeofenceZone;
use crate::models::zone::{Zone, ZoneBounds};

/// Ciudad con su actividad de transporte
pub struct CityInfo {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub routes: u32,
}

/// País con sus ciudades principales
pub struct CountryInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub continent: &'static str,
    pub cities: &'static [CityInfo],
}

/// Ciudades principales en 24 países y 6 continentes
pub const REGIONS: &[CountryInfo] = &[
    CountryInfo {
        code: "usa",
        name: "United States",
        continent: "north_america",
        cities: &[
            CityInfo { name: "New York", lat: 40.7128, lng: -74.0060, routes: 15 },
            CityInfo { name: "Los Angeles", lat: 34.0522, lng: -118.2437, routes: 12 },
            CityInfo { name: "Chicago", lat: 41.8781, lng: -87.6298, routes: 10 },
            CityInfo { name: "San Francisco", lat: 37.7749, lng: -122.4194, routes: 8 },
        ],
    },
    CountryInfo {
        code: "canada",
        name: "Canada",
        continent: "north_america",
        cities: &[
            CityInfo { name: "Toronto", lat: 43.6532, lng: -79.3832, routes: 10 },
            CityInfo { name: "Vancouver", lat: 49.2827, lng: -123.1207, routes: 8 },
            CityInfo { name: "Montreal", lat: 45.5017, lng: -73.5673, routes: 9 },
        ],
    },
    CountryInfo {
        code: "mexico",
        name: "Mexico",
        continent: "north_america",
        cities: &[
            CityInfo { name: "Mexico City", lat: 19.4326, lng: -99.1332, routes: 14 },
            CityInfo { name: "Guadalajara", lat: 20.6597, lng: -103.3496, routes: 7 },
        ],
    },
    CountryInfo {
        code: "uk",
        name: "United Kingdom",
        continent: "europe",
        cities: &[
            CityInfo { name: "London", lat: 51.5074, lng: -0.1278, routes: 20 },
            CityInfo { name: "Manchester", lat: 53.4808, lng: -2.2426, routes: 8 },
            CityInfo { name: "Birmingham", lat: 52.4862, lng: -1.8904, routes: 7 },
        ],
    },
    CountryInfo {
        code: "france",
        name: "France",
        continent: "europe",
        cities: &[
            CityInfo { name: "Paris", lat: 48.8566, lng: 2.3522, routes: 18 },
            CityInfo { name: "Lyon", lat: 45.7640, lng: 4.8357, routes: 8 },
            CityInfo { name: "Marseille", lat: 43.2965, lng: 5.3698, routes: 7 },
        ],
    },
    CountryInfo {
        code: "germany",
        name: "Germany",
        continent: "europe",
        cities: &[
            CityInfo { name: "Berlin", lat: 52.5200, lng: 13.4050, routes: 16 },
            CityInfo { name: "Munich", lat: 48.1351, lng: 11.5820, routes: 10 },
            CityInfo { name: "Hamburg", lat: 53.5511, lng: 9.9937, routes: 9 },
        ],
    },
    CountryInfo {
        code: "spain",
        name: "Spain",
        continent: "europe",
        cities: &[
            CityInfo { name: "Madrid", lat: 40.4168, lng: -3.7038, routes: 14 },
            CityInfo { name: "Barcelona", lat: 41.3851, lng: 2.1734, routes: 12 },
        ],
    },
    CountryInfo {
        code: "italy",
        name: "Italy",
        continent: "europe",
        cities: &[
            CityInfo { name: "Rome", lat: 41.9028, lng: 12.4964, routes: 12 },
            CityInfo { name: "Milan", lat: 45.4642, lng: 9.1900, routes: 10 },
        ],
    },
    CountryInfo {
        code: "netherlands",
        name: "Netherlands",
        continent: "europe",
        cities: &[
            CityInfo { name: "Amsterdam", lat: 52.3676, lng: 4.9041, routes: 11 },
            CityInfo { name: "Rotterdam", lat: 51.9244, lng: 4.4777, routes: 7 },
        ],
    },
    CountryInfo {
        code: "india",
        name: "India",
        continent: "asia",
        cities: &[
            CityInfo { name: "Mumbai", lat: 19.0760, lng: 72.8777, routes: 18 },
            CityInfo { name: "Delhi", lat: 28.7041, lng: 77.1025, routes: 16 },
            CityInfo { name: "Bangalore", lat: 12.9716, lng: 77.5946, routes: 14 },
            CityInfo { name: "Pune", lat: 18.5204, lng: 73.8567, routes: 10 },
        ],
    },
    CountryInfo {
        code: "china",
        name: "China",
        continent: "asia",
        cities: &[
            CityInfo { name: "Beijing", lat: 39.9042, lng: 116.4074, routes: 22 },
            CityInfo { name: "Shanghai", lat: 31.2304, lng: 121.4737, routes: 20 },
            CityInfo { name: "Guangzhou", lat: 23.1291, lng: 113.2644, routes: 15 },
        ],
    },
    CountryInfo {
        code: "japan",
        name: "Japan",
        continent: "asia",
        cities: &[
            CityInfo { name: "Tokyo", lat: 35.6762, lng: 139.6503, routes: 25 },
            CityInfo { name: "Osaka", lat: 34.6937, lng: 135.5023, routes: 14 },
            CityInfo { name: "Kyoto", lat: 35.0116, lng: 135.7681, routes: 8 },
        ],
    },
    CountryInfo {
        code: "singapore",
        name: "Singapore",
        continent: "asia",
        cities: &[
            CityInfo { name: "Singapore", lat: 1.3521, lng: 103.8198, routes: 16 },
        ],
    },
    CountryInfo {
        code: "south_korea",
        name: "South Korea",
        continent: "asia",
        cities: &[
            CityInfo { name: "Seoul", lat: 37.5665, lng: 126.9780, routes: 18 },
            CityInfo { name: "Busan", lat: 35.1796, lng: 129.0756, routes: 10 },
        ],
    },
    CountryInfo {
        code: "thailand",
        name: "Thailand",
        continent: "asia",
        cities: &[
            CityInfo { name: "Bangkok", lat: 13.7563, lng: 100.5018, routes: 14 },
        ],
    },
    CountryInfo {
        code: "uae",
        name: "United Arab Emirates",
        continent: "asia",
        cities: &[
            CityInfo { name: "Dubai", lat: 25.2048, lng: 55.2708, routes: 12 },
            CityInfo { name: "Abu Dhabi", lat: 24.4539, lng: 54.3773, routes: 8 },
        ],
    },
    CountryInfo {
        code: "australia",
        name: "Australia",
        continent: "oceania",
        cities: &[
            CityInfo { name: "Sydney", lat: -33.8688, lng: 151.2093, routes: 14 },
            CityInfo { name: "Melbourne", lat: -37.8136, lng: 144.9631, routes: 12 },
            CityInfo { name: "Brisbane", lat: -27.4698, lng: 153.0251, routes: 9 },
        ],
    },
    CountryInfo {
        code: "new_zealand",
        name: "New Zealand",
        continent: "oceania",
        cities: &[
            CityInfo { name: "Auckland", lat: -36.8485, lng: 174.7633, routes: 8 },
            CityInfo { name: "Wellington", lat: -41.2865, lng: 174.7762, routes: 6 },
        ],
    },
    CountryInfo {
        code: "brazil",
        name: "Brazil",
        continent: "south_america",
        cities: &[
            CityInfo { name: "São Paulo", lat: -23.5505, lng: -46.6333, routes: 16 },
            CityInfo { name: "Rio de Janeiro", lat: -22.9068, lng: -43.1729, routes: 12 },
        ],
    },
    CountryInfo {
        code: "argentina",
        name: "Argentina",
        continent: "south_america",
        cities: &[
            CityInfo { name: "Buenos Aires", lat: -34.6037, lng: -58.3816, routes: 14 },
        ],
    },
    CountryInfo {
        code: "chile",
        name: "Chile",
        continent: "south_america",
        cities: &[
            CityInfo { name: "Santiago", lat: -33.4489, lng: -70.6693, routes: 10 },
        ],
    },
    CountryInfo {
        code: "south_africa",
        name: "South Africa",
        continent: "africa",
        cities: &[
            CityInfo { name: "Johannesburg", lat: -26.2041, lng: 28.0473, routes: 10 },
            CityInfo { name: "Cape Town", lat: -33.9249, lng: 18.4241, routes: 8 },
        ],
    },
    CountryInfo {
        code: "egypt",
        name: "Egypt",
        continent: "africa",
        cities: &[
            CityInfo { name: "Cairo", lat: 30.0444, lng: 31.2357, routes: 12 },
        ],
    },
    CountryInfo {
        code: "nigeria",
        name: "Nigeria",
        continent: "africa",
        cities: &[
            CityInfo { name: "Lagos", lat: 6.5244, lng: 3.3792, routes: 10 },
        ],
    },
];

fn zone(
    id: &str,
    name: &str,
    lat_min: f64,
    lat_max: f64,
    lng_min: f64,
    lng_max: f64,
    score: i32,
    vote_count: i64,
) -> Zone {
    Zone {
        id: id.to_string(),
        name: name.to_string(),
        bounds: ZoneBounds { lat_min, lat_max, lng_min, lng_max },
        score,
        vote_count,
    }
}

lazy_static! {
    /// Zonas de votación de Delhi - lugares turísticos reales.
    /// Cada celda es de ~0.01° x 0.01° (~1km x 1km).
    pub static ref DELHI_ZONES: Vec<Zone> = vec![
        // Muy segura - hub turístico
        zone("delhi_001", "Connaught Place", 28.6280, 28.6380, 77.2150, 77.2250, 8, 8),
        // Segura - monumento
        zone("delhi_002", "India Gate", 28.6100, 28.6200, 77.2250, 77.2350, 6, 6),
        // Concurrida - votos mixtos
        zone("delhi_003", "Chandni Chowk", 28.6500, 28.6600, 77.2250, 77.2350, 0, 6),
        zone("delhi_004", "Red Fort Area", 28.6550, 28.6650, 77.2350, 77.2450, 4, 4),
        // Caótica - mayoría de votos negativos
        zone("delhi_005", "Old Delhi Railway Station", 28.6600, 28.6700, 77.2150, 77.2250, -4, 6),
        zone("delhi_006", "Karol Bagh Market", 28.6500, 28.6600, 77.1850, 77.1950, 1, 4),
        zone("delhi_007", "Lodhi Garden", 28.5900, 28.6000, 77.2150, 77.2250, 7, 7),
        zone("delhi_008", "Hauz Khas Village", 28.5500, 28.5600, 77.1900, 77.2000, 5, 5),
        // Zona de mochileros, estafas frecuentes
        zone("delhi_009", "Paharganj", 28.6400, 28.6500, 77.2050, 77.2150, -4, 6),
    ];

    /// Zonas de geofencing de demo - ubicación por defecto del emulador
    /// de Android: 37.4220, -122.0840 (Googleplex)
    pub static ref GEOFENCE_ZONES: Vec<GeofenceZone> = vec![
        GeofenceZone {
            id: "zone_1".to_string(),
            name: "Tech Museum".to_string(),
            description: "Interactive technology exhibits and hands-on experiences. Perfect for tech enthusiasts!".to_string(),
            latitude: 37.4220,
            longitude: -122.0840,
            radius_meters: 200.0,
            category: "museum".to_string(),
        },
        GeofenceZone {
            id: "zone_2".to_string(),
            name: "Central Park".to_string(),
            description: "Beautiful urban park with walking trails, picnic areas, and stunning views.".to_string(),
            latitude: 37.4250,
            longitude: -122.0800,
            radius_meters: 300.0,
            category: "park".to_string(),
        },
        GeofenceZone {
            id: "zone_3".to_string(),
            name: "Historic Monument".to_string(),
            description: "A landmark commemorating the city's rich history. Great photo opportunity!".to_string(),
            latitude: 37.4190,
            longitude: -122.0870,
            radius_meters: 150.0,
            category: "monument".to_string(),
        },
        GeofenceZone {
            id: "zone_4".to_string(),
            name: "Art Gallery".to_string(),
            description: "Contemporary art gallery featuring local and international artists.".to_string(),
            latitude: 37.4280,
            longitude: -122.0820,
            radius_meters: 100.0,
            category: "museum".to_string(),
        },
        GeofenceZone {
            id: "zone_5".to_string(),
            name: "Waterfront Plaza".to_string(),
            description: "Scenic waterfront area with restaurants, shops, and live entertainment.".to_string(),
            latitude: 37.4200,
            longitude: -122.0900,
            radius_meters: 250.0,
            category: "landmark".to_string(),
        },
    ];
}
