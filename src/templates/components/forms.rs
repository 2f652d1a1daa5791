use crate::domain::inquiry::{InquiryType, TourType, TIME_SLOTS};
use maud::{html, Markup};

/// The contact form, optionally scoped to a property. Posts to /contact;
/// submission is simulated server-side.
pub fn inquiry_form(property: Option<&str>) -> Markup {
    html! {
        section class="card inquiry-form" {
            h2 { "Send Inquiry" }
            @if let Some(name) = property {
                p class="muted" { "About: " (name) }
            }
            form method="post" action="/contact" {
                @if let Some(name) = property {
                    input type="hidden" name="property" value=(name);
                }
                div class="form-row" {
                    label { "Full Name"
                        input type="text" name="name" placeholder="Your full name" required;
                    }
                    label { "Email"
                        input type="email" name="email" placeholder="your.email@example.com" required;
                    }
                }
                div class="form-row" {
                    label { "Phone"
                        input type="tel" name="phone" placeholder="+1 (555) 123-4567";
                    }
                    label { "Inquiry Type"
                        select name="inquiry_type" {
                            @for t in InquiryType::ALL {
                                option value=(t.slug()) { (t.label()) }
                            }
                        }
                    }
                }
                label { "Message"
                    textarea
                        name="message"
                        rows="4"
                        placeholder="Tell us about your requirements, preferred viewing times, or any questions you have..."
                        required
                    {}
                }
                button type="submit" class="button" { "Send Inquiry" }
            }
        }
    }
}

/// Tour scheduling form. Dates and slots are validated server-side
/// (no Sundays, office hours only).
pub fn tour_form(property: Option<&str>) -> Markup {
    html! {
        section class="card tour-form" {
            h2 { "Schedule Property Tour" }
            form method="post" action="/tours" {
                @if let Some(name) = property {
                    input type="hidden" name="property" value=(name);
                }
                label { "Tour Type"
                    select name="tour_type" {
                        @for t in TourType::ALL {
                            option value=(t.slug()) { (t.label()) }
                        }
                    }
                }
                div class="form-row" {
                    label { "Select Date"
                        input type="date" name="date" required;
                    }
                    label { "Time Slot"
                        select name="time_slot" required {
                            option value="" disabled selected { "Select time" }
                            @for slot in TIME_SLOTS {
                                option value=(slot) { (slot) }
                            }
                        }
                    }
                }
                div class="form-row" {
                    label { "Name"
                        input type="text" name="name" placeholder="Your name" required;
                    }
                    label { "Email"
                        input type="email" name="email" placeholder="Email address" required;
                    }
                }
                label { "Phone"
                    input type="tel" name="phone" placeholder="Phone number";
                }
                button type="submit" class="button" { "Schedule Tour" }
            }
        }
    }
}
