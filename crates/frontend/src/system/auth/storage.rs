use web_sys::window;

/// Key written by the login page of the host application
const ACCESS_TOKEN_KEY: &str = "auth_access_token";
/// Older builds of the host application stored the token under this key
const LEGACY_TOKEN_KEY: &str = "token";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    let storage = get_local_storage()?;
    [ACCESS_TOKEN_KEY, LEGACY_TOKEN_KEY]
        .iter()
        .filter_map(|key| storage.get_item(key).ok().flatten())
        .find(|token| !token.trim().is_empty())
}

/// Value of the `Authorization` header, if a token is stored
pub fn auth_header() -> Option<String> {
    get_access_token().map(|token| format!("Bearer {}", token))
}
