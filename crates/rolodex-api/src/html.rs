//! Inline HTML rendering.
//!
//! Every page is built with `format!`. Values that originate from a user or
//! from storage go through [`escape`] before they are interpolated.

use rolodex_core::{Contact, NewContact};

/// Escape `&`, `<`, `>`, `"` and `'` for use in element text or quoted
/// attribute values.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

const NAV: &[(&str, &str)] = &[
    ("/home", "Home"),
    ("/list", "List"),
    ("/login", "Login"),
    ("/logout", "Logout"),
    ("/admin", "Admin"),
];

/// Site layout: a title, the navigation bar, and `content` (already HTML).
pub fn page(title: &str, content: &str) -> String {
    let nav = NAV
        .iter()
        .map(|(href, label)| format!("<a href=\"{href}\">{label}</a>"))
        .collect::<Vec<_>>()
        .join(" | ");

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<nav>{nav}</nav>\n<h1>{title}</h1>\n<div class=\"content\">\n{content}\n</div>\n</body>\n</html>\n",
        title = escape(title),
    )
}

/// `/list` body: a heading followed by each contact's display form.
pub fn contact_list(contacts: &[Contact]) -> String {
    let rows = contacts
        .iter()
        .map(|c| escape(&c.to_string()))
        .collect::<Vec<_>>()
        .join("<br/>\n");
    format!("<h1>Contact list</h1>\n{rows}")
}

// ============================================================================
// Admin views
// ============================================================================

/// Admin index page.
pub fn admin_index() -> String {
    page(
        "Admin",
        "<ul>\n<li><a href=\"/admin/contact\">Contact</a></li>\n</ul>",
    )
}

/// Table of every contact with row actions.
pub fn admin_contact_table(contacts: &[Contact]) -> String {
    let mut body = String::from(
        "<p><a href=\"/admin/contact/new\">Create</a></p>\n<table>\n<thead>\n<tr><th>Uname</th><th>Fname</th><th>Lname</th><th>Email</th><th>Phone</th><th>Notes</th><th>Timestamp</th><th></th></tr>\n</thead>\n<tbody>\n",
    );

    for c in contacts {
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape(&c.uname),
            escape(&c.fname),
            escape(&c.lname),
            escape(&c.email),
            escape(&c.phone),
            escape(&c.notes),
            c.timestamp.format("%Y-%m-%d %H:%M:%S"),
            row_actions(c),
        ));
    }

    body.push_str("</tbody>\n</table>");
    if contacts.is_empty() {
        body.push_str("\n<p>There are no items in the table.</p>");
    }
    page("Contact", &body)
}

fn row_actions(c: &Contact) -> String {
    format!(
        "<a href=\"/admin/contact/{id}\">Details</a> <a href=\"/admin/contact/{id}/edit\">Edit</a> <form method=\"post\" action=\"/admin/contact/{id}/delete\" style=\"display:inline\"><button type=\"submit\">Delete</button></form>",
        id = c.id,
    )
}

/// Read-only view of one contact.
pub fn admin_contact_details(c: &Contact) -> String {
    let fields = [
        ("Uname", c.uname.as_str()),
        ("Fname", c.fname.as_str()),
        ("Lname", c.lname.as_str()),
        ("Email", c.email.as_str()),
        ("Phone", c.phone.as_str()),
        ("Notes", c.notes.as_str()),
    ];

    let mut body = String::from("<table>\n");
    for (label, value) in fields {
        body.push_str(&format!(
            "<tr><th>{label}</th><td>{}</td></tr>\n",
            escape(value)
        ));
    }
    body.push_str(&format!(
        "<tr><th>Timestamp</th><td>{}</td></tr>\n</table>\n<p>{}</p>\n<p><a href=\"/admin/contact\">Back to list</a></p>",
        c.timestamp.format("%Y-%m-%d %H:%M:%S"),
        row_actions(c),
    ));

    page(&c.to_string(), &body)
}

/// Create or edit form, posting to `action`.
///
/// `error` is shown above the form when a previous submission failed.
pub fn admin_contact_form(
    title: &str,
    action: &str,
    values: &NewContact,
    error: Option<&str>,
) -> String {
    let mut body = String::new();
    if let Some(message) = error {
        body.push_str(&format!("<p class=\"error\">{}</p>\n", escape(message)));
    }

    body.push_str(&format!(
        "<form method=\"post\" action=\"{}\">\n",
        escape(action)
    ));
    let inputs = [
        ("uname", "Uname", values.uname.as_str()),
        ("fname", "Fname", values.fname.as_str()),
        ("lname", "Lname", values.lname.as_str()),
        ("email", "Email", values.email.as_str()),
        ("phone", "Phone", values.phone.as_str()),
    ];
    for (name, label, value) in inputs {
        body.push_str(&format!(
            "<p><label for=\"{name}\">{label}</label> <input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{}\"></p>\n",
            escape(value)
        ));
    }
    body.push_str(&format!(
        "<p><label for=\"notes\">Notes</label> <textarea id=\"notes\" name=\"notes\">{}</textarea></p>\n",
        escape(&values.notes)
    ));
    body.push_str(
        "<p><button type=\"submit\">Save</button> <a href=\"/admin/contact\">Cancel</a></p>\n</form>",
    );

    page(title, &body)
}
