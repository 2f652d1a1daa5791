use crate::errors::ServerError;
use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InquiryType {
    #[default]
    General,
    Viewing,
    Pricing,
    Financing,
    VirtualTour,
}

impl InquiryType {
    pub const ALL: [InquiryType; 5] = [
        InquiryType::General,
        InquiryType::Viewing,
        InquiryType::Pricing,
        InquiryType::Financing,
        InquiryType::VirtualTour,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InquiryType::General => "General Inquiry",
            InquiryType::Viewing => "Schedule Viewing",
            InquiryType::Pricing => "Pricing Information",
            InquiryType::Financing => "Financing Options",
            InquiryType::VirtualTour => "Virtual Tour",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            InquiryType::General => "general",
            InquiryType::Viewing => "viewing",
            InquiryType::Pricing => "pricing",
            InquiryType::Financing => "financing",
            InquiryType::VirtualTour => "virtual-tour",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.slug() == slug)
    }
}

/// A validated contact-form submission. Submission is simulated: the
/// inquiry is logged and echoed back in a confirmation page, nothing is
/// stored or sent anywhere.
#[derive(Debug, Clone, PartialEq)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub inquiry_type: InquiryType,
    /// Name of the property the form was opened from, if any.
    pub property: Option<String>,
    pub received_at: DateTime<Utc>,
}

impl Inquiry {
    pub fn from_form(pairs: &[(String, String)]) -> Result<Self, ServerError> {
        let name = required(pairs, "name")?;
        let email = required(pairs, "email")?;
        if !email.contains('@') {
            return Err(ServerError::BadRequest(
                "email address looks invalid".to_string(),
            ));
        }
        let message = required(pairs, "message")?;

        Ok(Inquiry {
            name,
            email,
            phone: optional(pairs, "phone"),
            message,
            inquiry_type: field(pairs, "inquiry_type")
                .and_then(InquiryType::from_slug)
                .unwrap_or_default(),
            property: optional(pairs, "property"),
            received_at: Utc::now(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TourType {
    #[default]
    InPerson,
    Virtual,
    VideoCall,
}

impl TourType {
    pub const ALL: [TourType; 3] = [TourType::InPerson, TourType::Virtual, TourType::VideoCall];

    pub fn label(self) -> &'static str {
        match self {
            TourType::InPerson => "In-Person Tour",
            TourType::Virtual => "Virtual Tour",
            TourType::VideoCall => "Live Video Call",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            TourType::InPerson => "in-person",
            TourType::Virtual => "virtual",
            TourType::VideoCall => "video-call",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.slug() == slug)
    }
}

/// Bookable slots, office hours only.
pub const TIME_SLOTS: [&str; 9] = [
    "9:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "1:00 PM", "2:00 PM", "3:00 PM", "4:00 PM",
    "5:00 PM",
];

/// A validated tour-scheduling request. Same simulated-submission rules
/// as `Inquiry`.
#[derive(Debug, Clone, PartialEq)]
pub struct TourRequest {
    pub tour_type: TourType,
    pub date: NaiveDate,
    pub time_slot: &'static str,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub property: Option<String>,
}

impl TourRequest {
    /// `today` is passed in so the date rules stay testable.
    pub fn from_form(pairs: &[(String, String)], today: NaiveDate) -> Result<Self, ServerError> {
        let date_raw = required(pairs, "date")?;
        let date = NaiveDate::parse_from_str(&date_raw, "%Y-%m-%d")
            .map_err(|_| ServerError::BadRequest(format!("unrecognized date {date_raw:?}")))?;
        if date < today {
            return Err(ServerError::BadRequest(
                "tour date must not be in the past".to_string(),
            ));
        }
        if date.weekday() == Weekday::Sun {
            return Err(ServerError::BadRequest(
                "tours are not available on Sundays".to_string(),
            ));
        }

        let slot_raw = required(pairs, "time_slot")?;
        let time_slot = TIME_SLOTS
            .into_iter()
            .find(|s| *s == slot_raw)
            .ok_or_else(|| ServerError::BadRequest(format!("unknown time slot {slot_raw:?}")))?;

        let email = required(pairs, "email")?;
        if !email.contains('@') {
            return Err(ServerError::BadRequest(
                "email address looks invalid".to_string(),
            ));
        }

        Ok(TourRequest {
            tour_type: field(pairs, "tour_type")
                .and_then(TourType::from_slug)
                .unwrap_or_default(),
            date,
            time_slot,
            name: required(pairs, "name")?,
            email,
            phone: optional(pairs, "phone"),
            property: optional(pairs, "property"),
        })
    }
}

fn field<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.trim())
        .filter(|v| !v.is_empty())
}

fn required(pairs: &[(String, String)], key: &str) -> Result<String, ServerError> {
    field(pairs, key)
        .map(str::to_string)
        .ok_or_else(|| ServerError::BadRequest(format!("missing required field {key:?}")))
}

fn optional(pairs: &[(String, String)], key: &str) -> Option<String> {
    field(pairs, key).map(str::to_string)
}
