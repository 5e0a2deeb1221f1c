//! Cookie Storage
//!
//! `document.cookie` backed session slots.

use chrono::{DateTime, Utc};
use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};
use todo_client::{Expiry, SessionStorage};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

const EXPIRED: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

/// Session slots stored as cookies on the current document
#[derive(Debug, Default, Clone, Copy)]
pub struct CookieStorage;

fn document() -> Option<HtmlDocument> {
    web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

fn write(cookie: &str) {
    let Some(doc) = document() else {
        log::error!("[COOKIE] no document available");
        return;
    };
    if let Err(e) = doc.set_cookie(cookie) {
        log::error!("[COOKIE] write failed: {:?}", e);
    }
}

/// Build a `name=value; expires=...` cookie string.
pub fn cookie_string(name: &str, content: &str, expires: &str) -> String {
    format!(
        "{}={}; expires={}; path=/; SameSite=Lax",
        name,
        utf8_percent_encode(content, NON_ALPHANUMERIC),
        expires
    )
}

pub fn http_date(at: DateTime<Utc>) -> String {
    at.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Find one cookie in a `document.cookie` string.
pub fn parse_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        if key != name {
            return None;
        }
        percent_decode_str(value).decode_utf8().ok().map(|v| v.into_owned())
    })
}

impl SessionStorage for CookieStorage {
    fn get(&self, name: &str) -> Option<String> {
        let cookies = document()?.cookie().ok()?;
        parse_cookie(&cookies, name)
    }

    fn set(&self, name: &str, content: &str, expiry: Expiry) {
        let expires = http_date(expiry.expires_at(Utc::now()));
        write(&cookie_string(name, content, &expires));
    }

    fn remove(&self, name: &str) {
        write(&cookie_string(name, "", EXPIRED));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cookie() {
        let cookies = "token=abc%20def; nickname=%E5%B0%8F%E6%98%8E; apiChecked=true";
        assert_eq!(parse_cookie(cookies, "token").as_deref(), Some("abc def"));
        assert_eq!(parse_cookie(cookies, "nickname").as_deref(), Some("小明"));
        assert_eq!(parse_cookie(cookies, "apiChecked").as_deref(), Some("true"));
        assert_eq!(parse_cookie(cookies, "missing"), None);
    }

    #[test]
    fn test_cookie_string_encodes_value() {
        let at = DateTime::<Utc>::from_timestamp(0, 0).unwrap();
        assert_eq!(
            cookie_string("nickname", "A B", &http_date(at)),
            "nickname=A%20B; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/; SameSite=Lax"
        );
    }
}
