//! Middleware de autenticación JWT
//!
//! Este módulo maneja la identidad de los votantes. Las rutas de votación
//! aceptan requests anónimas, pero si llega un token Bearer debe ser válido.

use axum::http::{header, HeaderMap};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::{config::EnvironmentConfig, utils::errors::AppError};

/// Vida útil de los tokens emitidos (24 horas)
const TOKEN_TTL_SECONDS: i64 = 86_400;

/// Identidad asignada a requests sin header Authorization
pub const ANONYMOUS_VOTER: &str = "anonymous";

/// Claims del JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // voter_id
    pub exp: usize,
    pub iat: usize,
}

/// Resolver la identidad del votante a partir de los headers.
///
/// Sin header Authorization la request se trata como anónima; con un
/// token Bearer presente, el token debe decodificar correctamente.
pub fn authenticate_voter(
    headers: &HeaderMap,
    config: &EnvironmentConfig,
) -> Result<String, AppError> {
    // Extraer token del header Authorization
    let Some(auth_header) = headers
        .get(header::AUTHORIZATION)
        .and_then(|auth_str| auth_str.to_str().ok())
    else {
        return Ok(ANONYMOUS_VOTER.to_string());
    };

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::Unauthorized("Formato de autorización inválido, se espera Bearer".to_string())
    })?;

    // Decodificar y validar JWT
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_ref()),
        &Validation::default(),
    )
    .map_err(|_| AppError::Unauthorized("Token inválido o expirado".to_string()))?;

    Ok(token_data.claims.sub)
}

/// Función para generar JWT token de votante
pub fn generate_voter_token(
    voter_id: &str,
    config: &EnvironmentConfig,
) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let expires_at = now + chrono::Duration::seconds(TOKEN_TTL_SECONDS);

    let claims = Claims {
        sub: voter_id.to_string(),
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    let encoding_key = jsonwebtoken::EncodingKey::from_secret(config.jwt_secret.as_ref());

    jsonwebtoken::encode(&jsonwebtoken::Header::default(), &claims, &encoding_key)
        .map_err(|e| AppError::Internal(format!("Error generando JWT: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> EnvironmentConfig {
        EnvironmentConfig {
            jwt_secret: "test-secret".to_string(),
            ..EnvironmentConfig::default()
        }
    }

    #[test]
    fn test_missing_header_is_anonymous() {
        let headers = HeaderMap::new();
        let voter = authenticate_voter(&headers, &test_config()).unwrap();
        assert_eq!(voter, ANONYMOUS_VOTER);
    }

    #[test]
    fn test_valid_token_resolves_subject() {
        let config = test_config();
        let token = generate_voter_token("rider-42", &config).unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            format!("Bearer {}", token).parse().unwrap(),
        );

        let voter = authenticate_voter(&headers, &config).unwrap();
        assert_eq!(voter, "rider-42");
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            "Bearer not-a-real-token".parse().unwrap(),
        );

        let result = authenticate_voter(&headers, &test_config());
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn test_non_bearer_scheme_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Basic abc123".parse().unwrap());

        let result = authenticate_voter(&headers, &test_config());
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }
}
