use crate::config::Config;
use crate::errors::ResultResp;
use crate::router::handle;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

pub fn test_config() -> Config {
    Config::default()
}

/// Dispatch a GET request straight into the router.
pub fn get(path: &str) -> ResultResp {
    let req: Request = http::Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap();
    handle(req, &test_config())
}

/// Dispatch a POST with a urlencoded form body.
pub fn post_form(path: &str, form: &str) -> ResultResp {
    let req: Request = http::Request::builder()
        .method(Method::POST)
        .uri(path)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    handle(req, &test_config())
}

pub fn body_string(resp: &mut Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    String::from_utf8(bytes).unwrap()
}
