use crate::errors::ServerError;
use crate::tests::utils::{body_string, get, post_form};
use chrono::{Datelike, Days, Utc, Weekday};

/// Next bookable day: tomorrow, skipping Sunday.
fn bookable_date() -> String {
    let mut date = Utc::now().date_naive() + Days::new(1);
    if date.weekday() == Weekday::Sun {
        date = date + Days::new(1);
    }
    date.format("%Y-%m-%d").to_string()
}

#[test]
fn contact_page_renders_form_and_office_details() {
    let mut resp = get("/contact").unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Send Inquiry"));
    assert!(body.contains("info@flatshow.com"));
    assert!(body.contains("123 Premium Avenue"));
}

#[test]
fn valid_inquiry_gets_a_confirmation() {
    let mut resp = post_form(
        "/contact",
        "name=Ada+Lovelace&email=ada%40example.com&message=Viewing+please&inquiry_type=viewing",
    )
    .unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Message Sent!"));
    assert!(body.contains("Ada Lovelace"));
}

#[test]
fn inquiry_without_required_fields_is_a_bad_request() {
    let result = post_form("/contact", "name=Ada&message=hi");
    assert!(matches!(result, Err(ServerError::BadRequest(_))));

    let result = post_form("/contact", "name=Ada&email=nope&message=hi");
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn valid_tour_request_gets_a_confirmation() {
    let form = format!(
        "tour_type=virtual&date={}&time_slot=10%3A00+AM&name=Ada&email=ada%40example.com",
        bookable_date()
    );
    let mut resp = post_form("/tours", &form).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Tour Scheduled!"));
    assert!(body.contains("10:00 AM"));
}

#[test]
fn tour_with_bad_slot_or_past_date_is_rejected() {
    let form = format!(
        "date={}&time_slot=11%3A30+PM&name=Ada&email=ada%40example.com",
        bookable_date()
    );
    assert!(matches!(
        post_form("/tours", &form),
        Err(ServerError::BadRequest(_))
    ));

    let past = "date=2020-01-06&time_slot=10%3A00+AM&name=Ada&email=ada%40example.com";
    assert!(matches!(
        post_form("/tours", past),
        Err(ServerError::BadRequest(_))
    ));
}
