use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    pub role: Option<String>,
}

fn decode_bearer(req: &Request) -> Result<Claims, Response> {
    let unauthorized = |code: &str| {
        (StatusCode::UNAUTHORIZED, Json(json!({ "error": code }))).into_response()
    };

    let header = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .ok_or_else(|| unauthorized("missing_authorization"))?;
    let value = header
        .to_str()
        .map_err(|_| unauthorized("bad_authorization"))?;
    let token = value
        .strip_prefix("Bearer ")
        .ok_or_else(|| unauthorized("unsupported_scheme"))?;

    let config = crate::config::get_config();
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| unauthorized("invalid_token"))
}

fn role_allowed(claims: &Claims, allowed: &[&str]) -> bool {
    let role = claims.role.clone().unwrap_or_default();
    allowed.iter().any(|r| r.eq_ignore_ascii_case(&role))
}

pub async fn require_recruiter_or_admin(mut req: Request, next: Next) -> Response {
    match decode_bearer(&req) {
        Ok(claims) => {
            if !role_allowed(&claims, &["recruiter", "company", "admin"]) {
                return (StatusCode::FORBIDDEN, Json(json!({"error":"forbidden"})))
                    .into_response();
            }
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        Err(resp) => resp,
    }
}

pub async fn require_admin(mut req: Request, next: Next) -> Response {
    match decode_bearer(&req) {
        Ok(claims) => {
            if !role_allowed(&claims, &["admin"]) {
                return (StatusCode::FORBIDDEN, Json(json!({"error":"forbidden"})))
                    .into_response();
            }
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        Err(resp) => resp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_check_is_case_insensitive() {
        let claims = Claims {
            sub: "u1".into(),
            exp: 0,
            role: Some("Recruiter".into()),
        };
        assert!(role_allowed(&claims, &["recruiter", "admin"]));
        assert!(!role_allowed(&claims, &["admin"]));
    }

    #[test]
    fn missing_role_is_rejected() {
        let claims = Claims {
            sub: "u1".into(),
            exp: 0,
            role: None,
        };
        assert!(!role_allowed(&claims, &["recruiter"]));
    }
}
