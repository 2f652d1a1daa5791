use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};
use mime::Mime;
use std::path::{Component, Path, PathBuf};

/// Serves a file below `static_dir`. `rel_path` is the request path with
/// the `/static/` prefix already stripped.
pub fn static_response(static_dir: &str, rel_path: &str) -> ResultResp {
    let rel = Path::new(rel_path);
    // Only plain file names and directories; anything that climbs out of
    // the asset root is treated as missing.
    if rel
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return Err(ServerError::NotFound);
    }

    let full: PathBuf = Path::new(static_dir).join(rel);
    let bytes = std::fs::read(&full).map_err(|_| ServerError::NotFound)?;

    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type(rel).as_ref())
        .body(Body::from(bytes))
        .unwrap();

    Ok(resp)
}

fn content_type(path: &Path) -> Mime {
    match path.extension().and_then(|e| e.to_str()) {
        Some("css") => mime::TEXT_CSS,
        Some("js") => mime::TEXT_JAVASCRIPT,
        Some("json") => mime::APPLICATION_JSON,
        Some("png") => mime::IMAGE_PNG,
        Some("jpg") | Some("jpeg") => mime::IMAGE_JPEG,
        Some("svg") => mime::IMAGE_SVG,
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traversal_components_are_rejected() {
        assert!(matches!(
            static_response("static", "../Cargo.toml"),
            Err(ServerError::NotFound)
        ));
        assert!(matches!(
            static_response("static", "/etc/hostname"),
            Err(ServerError::NotFound)
        ));
    }

    #[test]
    fn missing_files_map_to_not_found() {
        assert!(matches!(
            static_response("static", "no-such-file.css"),
            Err(ServerError::NotFound)
        ));
    }

    #[test]
    fn extensions_map_to_expected_mime_types() {
        assert_eq!(content_type(Path::new("main.css")), mime::TEXT_CSS);
        assert_eq!(content_type(Path::new("viewer.js")), mime::TEXT_JAVASCRIPT);
        assert_eq!(
            content_type(Path::new("building.glb")),
            mime::APPLICATION_OCTET_STREAM
        );
    }
}
