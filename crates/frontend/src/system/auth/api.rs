use contracts::system::auth::{
    LoginRequest, LoginResponse, MessageResponse, PasswordResetConfirm, PasswordResetRequest,
    RefreshRequest, RefreshResponse, UserInfo,
};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, error_from_response, post_json};

/// Login por e-mail e senha
pub async fn login(email: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { email, password };

    let response = Request::post(&api_url("/auth/login/"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        // 401 chega com `detail`; sem corpo cai no texto genérico
        return Err(if response.status() == 401 {
            let message = error_from_response(response).await;
            if message.starts_with("HTTP ") {
                "E-mail ou senha inválidos".to_string()
            } else {
                message
            }
        } else {
            error_from_response(response).await
        });
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn refresh_token(refresh: String) -> Result<RefreshResponse, String> {
    let request = RefreshRequest { refresh };

    let response = Request::post(&api_url("/auth/token/refresh/"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Refresh failed: {}", response.status()));
    }

    response
        .json::<RefreshResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Revoga o refresh token no backend
pub async fn logout(refresh: String) -> Result<(), String> {
    let request = RefreshRequest { refresh };

    let response = Request::post(&api_url("/auth/logout/"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Logout failed: {}", response.status()));
    }

    Ok(())
}

pub async fn get_current_user(access_token: &str) -> Result<UserInfo, String> {
    let response = Request::get(&api_url("/auth/me/"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Get current user failed: {}", response.status()));
    }

    response
        .json::<UserInfo>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Envia o e-mail com o link de redefinição
pub async fn request_password_reset(email: String) -> Result<MessageResponse, String> {
    post_json(&api_url("/auth/password-reset/"), &PasswordResetRequest { email }).await
}

pub async fn confirm_password_reset(payload: PasswordResetConfirm) -> Result<MessageResponse, String> {
    payload.validate()?;
    post_json(&api_url("/auth/password-reset/confirm/"), &payload).await
}
