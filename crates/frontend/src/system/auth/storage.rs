//! Session values kept in localStorage: bearer token and the vendor scope
//! the back-office works in.

use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "admin_access_token";
const VENDOR_ID_KEY: &str = "admin_vendor_id";
const BRANCH_ID_KEY: &str = "admin_branch_id";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn read(key: &str) -> Option<String> {
    get_local_storage()?
        .get_item(key)
        .ok()?
        .filter(|value| !value.trim().is_empty())
}

fn write(key: &str, value: Option<&str>) {
    if let Some(storage) = get_local_storage() {
        let _ = match value {
            Some(value) => storage.set_item(key, value),
            None => storage.remove_item(key),
        };
    }
}

pub fn save_access_token(token: &str) {
    write(ACCESS_TOKEN_KEY, Some(token));
}

pub fn get_access_token() -> Option<String> {
    read(ACCESS_TOKEN_KEY)
}

pub fn clear_access_token() {
    write(ACCESS_TOKEN_KEY, None);
}

/// Vendor the lists are scoped to (`None` for platform administrators)
pub fn get_vendor_id() -> Option<String> {
    read(VENDOR_ID_KEY)
}

pub fn save_vendor_id(vendor_id: Option<&str>) {
    write(VENDOR_ID_KEY, vendor_id);
}

pub fn get_branch_id() -> Option<String> {
    read(BRANCH_ID_KEY)
}

pub fn save_branch_id(branch_id: Option<&str>) {
    write(BRANCH_ID_KEY, branch_id);
}
