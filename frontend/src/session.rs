use web_sys::{window, Storage};

/// Local storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

fn local_storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok()).flatten()
}

pub fn stored_token() -> Option<String> {
    local_storage()
        .and_then(|storage| storage.get_item(TOKEN_KEY).ok())
        .flatten()
        .filter(|token| !token.is_empty())
}

pub fn is_logged_in() -> bool {
    stored_token().is_some()
}

pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}
