use maud::{html, Markup, DOCTYPE};

pub fn site_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | FlatShow" }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="site-header" {
                    a href="/" class="brand" {
                        span class="brand-mark" { "F" }
                        span class="brand-name" { "FlatShow" }
                    }
                    nav {
                        ul {
                            li { a href="/properties" { "Properties" } }
                            li { a href="/3d-viewer" { "3D Viewer" } }
                            li { a href="/contact" { "Contact" } }
                        }
                    }
                    a class="button" href="tel:+15551234567" { "Contact Agent" }
                }
                (content)
                footer class="site-footer" {
                    p { "© 2024 FlatShow Property. All rights reserved." }
                }
            }
        }
    }
}
