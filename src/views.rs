//! HTML pages.
//!
//! Every page is a plain string built around [`layout`]. Values that came from
//! users or the database go through [`escape`] before they land in markup.

use crate::db::{Resident, Service};

const SITE_NAME: &str = "Los Altos de Ciudad Jardín";

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} · {SITE_NAME}</title>
</head>
<body>
<header><h1><a href="/">{SITE_NAME}</a></h1></header>
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    )
}

fn error_banner(error: Option<&str>) -> String {
    error
        .map(|e| format!(r#"<p class="error" role="alert">{}</p>"#, escape(e)))
        .unwrap_or_default()
}

fn nav() -> &'static str {
    r#"<nav>
<a href="/homepage">Home</a>
<a href="/residents">Residents</a>
<a href="/services">Services</a>
<a href="/logout">Log out</a>
</nav>"#
}

pub fn landing() -> String {
    layout(
        "Welcome",
        r#"<p>The community directory for residents.</p>
<p><a href="/signin">Sign in</a> or <a href="/signup">create an account</a>.</p>"#,
    )
}

pub fn signup_form(error: Option<&str>) -> String {
    let body = format!(
        r#"<h2>Sign up</h2>
{banner}
<form method="post" action="/signup">
<label>Name <input name="name" required></label>
<label>Email <input name="email" type="email" required></label>
<label>Password <input name="password" type="password" required></label>
<label>House number <input name="house_number" required></label>
<label>Phone number <input name="phone_number" type="tel"></label>
<button type="submit">Sign up</button>
</form>
<p>Already registered? <a href="/signin">Sign in</a></p>"#,
        banner = error_banner(error),
    );
    layout("Sign up", &body)
}

pub fn signin_form(error: Option<&str>) -> String {
    let body = format!(
        r#"<h2>Sign in</h2>
{banner}
<form method="post" action="/signin">
<label>Email <input name="email" type="email" required></label>
<label>Password <input name="password" type="password" required></label>
<button type="submit">Sign in</button>
</form>
<p>New here? <a href="/signup">Sign up</a></p>"#,
        banner = error_banner(error),
    );
    layout("Sign in", &body)
}

pub fn homepage(user_name: &str) -> String {
    let body = format!(
        "{nav}\n<h2>Welcome, {name}!</h2>\n<p>Browse the <a href=\"/residents\">residents</a> or the <a href=\"/services\">services</a> directory.</p>",
        nav = nav(),
        name = escape(user_name),
    );
    layout("Home", &body)
}

/// Listing page with a search box backed by the JSON search endpoint.
fn search_page(title: &str, endpoint: &str, detail_prefix: &str, extra: &str) -> String {
    let body = format!(
        r#"{nav}
<h2>{title}</h2>
{extra}
<input id="q" type="search" placeholder="Search" autocomplete="off">
<ul id="results"></ul>
<script>
const q = document.getElementById("q");
const list = document.getElementById("results");
async function run() {{
  const resp = await fetch("{endpoint}?q=" + encodeURIComponent(q.value));
  if (!resp.ok) return;
  const rows = await resp.json();
  list.replaceChildren(...rows.map((r) => {{
    const li = document.createElement("li");
    const a = document.createElement("a");
    a.href = "{detail_prefix}" + r.id;
    a.textContent = r.name + " · " + r.email;
    li.appendChild(a);
    return li;
  }}));
}}
q.addEventListener("input", run);
run();
</script>"#,
        nav = nav(),
    );
    layout(title, &body)
}

pub fn residents_page() -> String {
    search_page("Residents", "/api/search_residents", "/residents/", "")
}

pub fn services_page() -> String {
    search_page(
        "Services",
        "/api/search_services",
        "/services/",
        r#"<p><a href="/services/add">Add a service</a></p>"#,
    )
}

pub fn resident_detail(resident: &Resident) -> String {
    let body = format!(
        r#"{nav}
<h2>{name}</h2>
<dl>
<dt>Email</dt><dd>{email}</dd>
<dt>House number</dt><dd>{house}</dd>
<dt>Phone number</dt><dd>{phone}</dd>
</dl>
<p><a href="/residents">Back to residents</a></p>"#,
        nav = nav(),
        name = escape(&resident.name),
        email = escape(&resident.email),
        house = escape(&resident.house_number),
        phone = escape(resident.phone_number.as_deref().unwrap_or("-")),
    );
    layout(&resident.name, &body)
}

pub fn service_detail(service: &Service) -> String {
    let body = format!(
        r#"{nav}
<h2>{name}</h2>
<dl>
<dt>Email</dt><dd>{email}</dd>
<dt>Phone number</dt><dd>{phone}</dd>
<dt>Address</dt><dd>{address}</dd>
</dl>
<p><a href="/services">Back to services</a></p>"#,
        nav = nav(),
        name = escape(&service.name),
        email = escape(&service.email),
        phone = escape(&service.phone_number),
        address = escape(&service.address),
    );
    layout(&service.name, &body)
}

pub fn add_service_form() -> String {
    let body = format!(
        r#"{nav}
<h2>Add a service</h2>
<form method="post" action="/services/add">
<label>Name <input name="name" required></label>
<label>Email <input name="email" type="email" required></label>
<label>Phone number <input name="phone_number" type="tel" required></label>
<label>Address <input name="address" required></label>
<button type="submit">Save</button>
</form>"#,
        nav = nav(),
    );
    layout("Add service", &body)
}
