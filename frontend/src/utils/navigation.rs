use crate::api::client::encode_segment;
use percent_encoding::percent_decode_str;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

/// Full-page navigation. The host build only records the intent in the log.
pub fn redirect_to(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let location = window.location();
            if let Ok(current) = location.pathname() {
                if current == path {
                    return;
                }
            }
            let _ = location.set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        log::debug!("navigation to {} skipped outside the browser", path);
    }
}

pub fn redirect_to_login() {
    redirect_to(LOGIN_PATH);
}

pub fn request_detail_path(id: &str) -> String {
    format!("/request/{}", encode_segment(id))
}

/// Inverse of the encoding done by `request_detail_path`, for the `:id` route param.
pub fn request_id_from_param(param: &str) -> String {
    percent_decode_str(param).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_detail_path_embeds_id() {
        assert_eq!(request_detail_path("abc-123"), "/request/abc-123");
    }

    #[test]
    fn request_detail_path_escapes_separators_in_id() {
        let path = request_detail_path("a b/c?d");
        assert_eq!(path, "/request/a%20b%2Fc%3Fd");
        let param = path.trim_start_matches("/request/");
        assert_eq!(request_id_from_param(param), "a b/c?d");
    }
}
