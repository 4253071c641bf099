// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Subject line of every relayed contact message.
pub const CONTACT_SUBJECT: &str = "New Contact Us Message";

/// A message submitted through the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    /// The sender's name.
    pub name: String,
    /// The sender's email address, used as the reply-to.
    pub email: String,
    /// The sender's phone number.
    pub phone: String,
    /// The message text.
    pub message: String,
}

impl ContactMessage {
    /// Returns the name of the first blank field, if any.
    #[must_use]
    pub fn first_blank_field(&self) -> Option<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("message", &self.message),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }

    /// Renders the HTML body listing every field.
    #[must_use]
    pub fn html_body(&self) -> String {
        format!(
            "<p><strong>Name:</strong> {}</p>\n\
             <p><strong>Email:</strong> {}</p>\n\
             <p><strong>Phone:</strong> {}</p>\n\
             <p><strong>Message:</strong> {}</p>\n",
            escape_html(&self.name),
            escape_html(&self.email),
            escape_html(&self.phone),
            escape_html(&self.message),
        )
    }
}

/// Escapes text for inclusion in an HTML body.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped: String = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
