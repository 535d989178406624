use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "obreiro_access_token";
const REFRESH_TOKEN_KEY: &str = "obreiro_refresh_token";
const ACTIVE_CHURCH_KEY: &str = "obreiro_active_church";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn set(key: &str, value: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(key, value);
    }
}

fn get(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

pub fn save_access_token(token: &str) {
    set(ACCESS_TOKEN_KEY, token);
}

pub fn get_access_token() -> Option<String> {
    get(ACCESS_TOKEN_KEY)
}

pub fn save_refresh_token(token: &str) {
    set(REFRESH_TOKEN_KEY, token);
}

pub fn get_refresh_token() -> Option<String> {
    get(REFRESH_TOKEN_KEY)
}

/// Igreja selecionada pelo usuário multi-igreja
pub fn save_active_church(church_id: u64) {
    set(ACTIVE_CHURCH_KEY, &church_id.to_string());
}

pub fn get_active_church() -> Option<u64> {
    get(ACTIVE_CHURCH_KEY)?.parse().ok()
}

/// Limpa tudo que pertence à sessão
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(REFRESH_TOKEN_KEY);
        let _ = storage.remove_item(ACTIVE_CHURCH_KEY);
    }
}
