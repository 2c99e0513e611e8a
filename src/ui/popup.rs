use crate::{aggregate::CountryAggregate, core::geo::LatLng};

/// A displayed overlay: where it hangs on the map and the markup inside it
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub anchor: LatLng,
    pub html: String,
}

impl Popup {
    pub fn new(anchor: LatLng, html: String) -> Self {
        Self { anchor, html }
    }
}

/// Renders selections and their aggregate statistics into self-contained
/// HTML fragments. Rendering is pure: the same aggregate always produces
/// identical markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct PopupRenderer;

impl PopupRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Renders the popup for a boundary click: the polygon's display name
    /// as title, statistics over the matched record subset, then the
    /// project/sector/partner lists in the order the aggregate carries.
    pub fn render_country_popup(&self, country: &str, aggregate: &CountryAggregate) -> String {
        self.render(country, aggregate)
    }

    /// Renders the popup for an aggregated point: same structure, titled
    /// with the aggregate's own country value.
    pub fn render_point_popup(&self, aggregate: &CountryAggregate) -> String {
        self.render(&aggregate.country, aggregate)
    }

    fn render(&self, title: &str, aggregate: &CountryAggregate) -> String {
        let mut html = String::with_capacity(512);
        html.push_str("<div class=\"aidmap-popup\">");
        html.push_str(&format!("<h3>{}</h3>", escape(title)));

        html.push_str("<div class=\"popup-stats\">");
        html.push_str(&format!(
            "<div><strong>Total Budget:</strong> {}</div>",
            format_currency(aggregate.total_budget)
        ));
        html.push_str(&format!(
            "<div><strong>Total Beneficiaries:</strong> {}</div>",
            format_count(aggregate.total_beneficiaries)
        ));
        html.push_str("</div>");

        push_section(&mut html, "Projects", aggregate.project_names());
        push_section(&mut html, "Sectors", aggregate.sectors.iter().map(String::as_str));
        push_section(&mut html, "Partners", aggregate.partners.iter().map(String::as_str));

        html.push_str("</div>");
        html
    }
}

fn push_section<'a>(html: &mut String, heading: &str, items: impl IntoIterator<Item = &'a str>) {
    html.push_str(&format!("<h4>{}</h4><ul>", heading));
    for item in items {
        html.push_str(&format!("<li>{}</li>", escape(item)));
    }
    html.push_str("</ul>");
}

/// Formats a budget as whole currency with thousands separators.
/// Fractional inputs are truncated toward zero, never rounded.
pub fn format_currency(value: f64) -> String {
    format!("${}", group_thousands(value))
}

/// Formats a beneficiary count as a whole number with thousands separators
pub fn format_count(value: f64) -> String {
    group_thousands(value)
}

fn group_thousands(value: f64) -> String {
    let whole = value.trunc() as i64;
    let digits = whole.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (offset, ch) in digits.chars().enumerate() {
        if offset > 0 && (digits.len() - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if whole < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
