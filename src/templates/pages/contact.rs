use crate::domain::inquiry::{Inquiry, TourRequest};
use crate::templates::{components::inquiry_form, site_layout};
use maud::{html, Markup};

pub fn contact_page() -> Markup {
    site_layout(
        "Get In Touch",
        html! {
            section class="page-header" {
                h1 { "Get In Touch" }
                p {
                    "Ready to find your dream property? Our expert agents are here "
                    "to help you every step of the way."
                }
            }

            div class="detail-columns" {
                (inquiry_form(None))

                section class="contact-info" {
                    h2 { "Contact Information" }

                    div class="card" {
                        h3 { "Phone" }
                        p class="muted" { "Call us for immediate assistance" }
                        p { a href="tel:+15551234567" { "+1 (555) 123-4567" } }
                    }

                    div class="card" {
                        h3 { "Email" }
                        p class="muted" { "Send us a detailed inquiry" }
                        p { a href="mailto:info@flatshow.com" { "info@flatshow.com" } }
                    }

                    div class="card" {
                        h3 { "Office Location" }
                        p class="muted" { "Visit us at our downtown office" }
                        p {
                            "123 Premium Avenue" br;
                            "Downtown District" br;
                            "City, State 12345"
                        }
                    }
                }
            }
        },
    )
}

/// Confirmation rendered after a (simulated) inquiry submission.
pub fn inquiry_sent_page(inquiry: &Inquiry) -> Markup {
    site_layout(
        "Message Sent",
        html! {
            section class="confirmation card" {
                h1 { "Message Sent!" }
                p {
                    "Thank you for your inquiry, " (inquiry.name) ". "
                    "Our team will get back to you within 24 hours."
                }
                @if let Some(property) = &inquiry.property {
                    p class="muted" { "Regarding: " (property) }
                }
                p { a class="button" href="/properties" { "Keep Browsing" } }
            }
        },
    )
}

/// Confirmation rendered after a (simulated) tour booking.
pub fn tour_scheduled_page(tour: &TourRequest) -> Markup {
    site_layout(
        "Tour Scheduled",
        html! {
            section class="confirmation card" {
                h1 { "Tour Scheduled!" }
                p {
                    "Your " (tour.tour_type.label().to_lowercase()) " has been scheduled for "
                    (tour.date.format("%B %d, %Y")) " at " (tour.time_slot) "."
                }
                @if let Some(property) = &tour.property {
                    p class="muted" { "Property: " (property) }
                }
                p class="muted" {
                    "You'll receive a confirmation email shortly with all the details."
                }
                p { a class="button" href="/" { "Back to Home" } }
            }
        },
    )
}
