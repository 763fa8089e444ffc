//! Utilidades de cálculo geoespacial
//!
//! Distancias de gran círculo y pruebas de contención de puntos
//! usadas por el simulador de flota y el motor de geofencing.

/// Radio de la Tierra en metros
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Calcula la distancia haversine entre dos coordenadas GPS (en metros)
pub fn haversine_distance_meters(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlng = (lng2 - lng1).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlng / 2.0).sin().powi(2);

    // El término intermedio puede salirse de [0, 1] por error de redondeo
    // en puntos casi antípodas, lo que haría sqrt(1 - a) NaN
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Verifica si un punto cae dentro de un rectángulo lat/lng (bordes inclusivos)
pub fn point_in_rectangle(
    lat: f64,
    lng: f64,
    lat_min: f64,
    lat_max: f64,
    lng_min: f64,
    lng_max: f64,
) -> bool {
    lat >= lat_min && lat <= lat_max && lng >= lng_min && lng <= lng_max
}

/// Verifica si un punto cae dentro de un círculo definido por centro y radio en metros
pub fn point_in_circle(
    lat: f64,
    lng: f64,
    center_lat: f64,
    center_lng: f64,
    radius_meters: f64,
) -> bool {
    haversine_distance_meters(lat, lng, center_lat, center_lng) <= radius_meters
}

/// Redondea a 2 decimales para las respuestas de la API
pub fn round_to_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
