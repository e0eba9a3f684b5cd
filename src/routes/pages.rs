use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse, Responder};

use crate::config::SessionCatalog;
use crate::routes::webinar::SIGNUP_PATH;
use crate::services::confirmation::{SESSION_NAME, SUPPORT_EMAIL, WEBSITE, WEBSITE_URL};
use crate::services::markup::escape_html;

fn page(title: &str, body: &str) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{}</title>
</head>
<body>
{}
<footer><p>Questions? <a href="mailto:{SUPPORT_EMAIL}">{SUPPORT_EMAIL}</a> &middot; <a href="{WEBSITE_URL}">{WEBSITE}</a></p></footer>
</body>
</html>"#,
        escape_html(title),
        body
    ))
}

pub async fn landing() -> impl Responder {
    page(
        "Polaris Consulting",
        &format!(
            r#"<header><h1>Navigate Your Path to College Success</h1></header>
<section id="webinar">
<h2>{SESSION_NAME}</h2>
<p>Join a free info session with our consultants.</p>
<a href="/webinar">Sign Up</a>
</section>"#
        ),
    )
}

// Mirrors the client flow in crate::client: one request in flight, error kept
// next to the form, notice then redirect home.
const SIGNUP_SCRIPT: &str = r#"<script>
const form = document.getElementById("signup");
const button = form.querySelector("button");
const error = document.getElementById("error");
const notice = document.getElementById("notice");
form.addEventListener("submit", async (event) => {
  event.preventDefault();
  if (button.disabled) return;
  button.disabled = true;
  error.textContent = "";
  const data = new FormData(form);
  const date = data.get("date");
  try {
    const response = await fetch(form.action, {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify({ name: data.get("name"), email: data.get("email"), date }),
    });
    if (!response.ok) {
      const body = await response.json().catch(() => ({}));
      throw new Error(body.error || body.message || "Something went wrong");
    }
    notice.textContent = `You have successfully signed up the Polaris Information Session on ${date}! We will send you an email shortly with more information.`;
    form.reset();
    setTimeout(() => { notice.textContent = ""; window.location.assign("/"); }, 3500);
  } catch (e) {
    error.textContent = `Error: ${e.message}`;
  } finally {
    button.disabled = false;
  }
});
</script>"#;

pub async fn webinar(catalog: web::Data<SessionCatalog>) -> impl Responder {
    let options: String = catalog
        .dates()
        .iter()
        .map(|date| {
            let date = escape_html(date);
            format!("<option value=\"{date}\">{date}</option>\n")
        })
        .collect();

    page(
        "Sign Up | Polaris Consulting Info Session",
        &format!(
            r#"<h1>{SESSION_NAME}</h1>
<form id="signup" action="{SIGNUP_PATH}" method="post">
<label for="name">Full Name</label>
<input type="text" id="name" name="name" required>
<label for="email">Email Address</label>
<input type="email" id="email" name="email" required>
<label for="date">Select Session Date</label>
<select id="date" name="date" required>
<option value="">Select a date</option>
{options}</select>
<button type="submit">Sign Up</button>
<p id="error" role="alert"></p>
</form>
<p id="notice" role="status"></p>
{SIGNUP_SCRIPT}"#
        ),
    )
}

pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound()
        .content_type(ContentType::plaintext())
        .body("Not Found")
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(landing));
    cfg.route("/webinar", web::get().to(webinar));
}
