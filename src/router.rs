use crate::catalog;
use crate::config::Config;
use crate::domain::criteria::{filter_listings, ListingCriteria};
use crate::domain::inquiry::{Inquiry, TourRequest};
use crate::domain::scene::{build_scene, SectionCriteria};
use crate::errors::{ResultResp, ServerError};
use crate::responses::{html_response, json_response, static_response};
use crate::templates::pages;
use astra::Request;
use chrono::Utc;
use log::info;
use std::io::Read;
use url::form_urlencoded;

pub fn handle(mut req: Request, config: &Config) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let query = parse_query(&req);

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(pages::home_page(catalog::listings())),

        ("GET", "/properties") => {
            let criteria = ListingCriteria::from_pairs(&query);
            let results = filter_listings(catalog::listings(), &criteria);
            html_response(pages::properties_page(
                &criteria,
                &results,
                catalog::listings().len(),
            ))
        }

        ("GET", "/3d-viewer") => {
            let criteria = SectionCriteria::from_pairs(&query);
            let scene = build_scene(
                catalog::sections(),
                &criteria,
                None,
                &config.building_model_path,
            );
            let scene_json =
                serde_json::to_string(&scene).map_err(|_| ServerError::InternalError)?;
            html_response(pages::viewer_page(&criteria, &scene, &scene_json))
        }

        ("GET", "/api/scene") => {
            let criteria = SectionCriteria::from_pairs(&query);
            let hovered = query
                .iter()
                .find(|(k, _)| k == "hover")
                .and_then(|(_, v)| v.parse::<u32>().ok());
            let scene = build_scene(
                catalog::sections(),
                &criteria,
                hovered,
                &config.building_model_path,
            );
            json_response(&scene)
        }

        ("GET", "/contact") => html_response(pages::contact_page()),

        ("POST", "/contact") => {
            let form = read_form(&mut req)?;
            let inquiry = Inquiry::from_form(&form)?;
            info!(
                "inquiry from {} <{}>: {}",
                inquiry.name,
                inquiry.email,
                inquiry.inquiry_type.label()
            );
            html_response(pages::inquiry_sent_page(&inquiry))
        }

        ("POST", "/tours") => {
            let form = read_form(&mut req)?;
            let tour = TourRequest::from_form(&form, Utc::now().date_naive())?;
            info!(
                "tour request from {} <{}> on {} at {}",
                tour.name, tour.email, tour.date, tour.time_slot
            );
            html_response(pages::tour_scheduled_page(&tour))
        }

        _ => dispatch_dynamic(&method, &path, config),
    }
}

/// Routes with a path segment to pick apart: property detail pages and
/// static assets.
fn dispatch_dynamic(method: &str, path: &str, config: &Config) -> ResultResp {
    if method != "GET" {
        return Err(ServerError::NotFound);
    }

    if let Some(rest) = path.strip_prefix("/properties/") {
        let id: u32 = rest
            .parse()
            .map_err(|_| ServerError::NotFound)?;
        let listing = catalog::listing(id).ok_or(ServerError::NotFound)?;
        let detail = catalog::listing_detail(id);
        return html_response(pages::property_detail_page(listing, detail));
    }

    if let Some(rest) = path.strip_prefix("/static/") {
        return static_response(&config.static_dir, rest);
    }

    Err(ServerError::NotFound)
}

fn parse_query(req: &Request) -> Vec<(String, String)> {
    match req.uri().query() {
        Some(q) => form_urlencoded::parse(q.as_bytes()).into_owned().collect(),
        None => Vec::new(),
    }
}

fn read_form(req: &mut Request) -> Result<Vec<(String, String)>, ServerError> {
    let mut bytes = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut bytes)
        .map_err(|e| ServerError::Io(format!("failed to read request body: {e}")))?;
    Ok(form_urlencoded::parse(&bytes).into_owned().collect())
}
