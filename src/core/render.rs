//! Server-side HTML for the partners section.
//!
//! Class names are emitted as opaque style tags. Buttons are rendered without
//! handlers; filtering and the call-to-action are not wired to anything.

use crate::core::section::SectionView;
use crate::domain::model::{CategoryCount, Partner};

pub struct StatTile {
    pub value: &'static str,
    pub label: &'static str,
    pub caption: &'static str,
    pub color: &'static str,
}

pub const STAT_TILES: [StatTile; 4] = [
    StatTile {
        value: "500+",
        label: "Partner Locations",
        caption: "Across all seven emirates",
        color: "bg-uae-green",
    },
    StatTile {
        value: "25%",
        label: "Average Discount",
        caption: "On products and services",
        color: "bg-uae-red",
    },
    StatTile {
        value: "15",
        label: "Categories",
        caption: "Different service sectors",
        color: "bg-uae-black",
    },
    StatTile {
        value: "24/7",
        label: "Support",
        caption: "Partner assistance available",
        color: "bg-blue-600",
    },
];

const STAR_RATING: usize = 5;

pub fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub fn render_section(view: &SectionView) -> String {
    let mut out = String::new();

    if view.loading {
        out.push_str("<section class=\"py-20 bg-white\" aria-busy=\"true\">\n");
    } else {
        out.push_str("<section class=\"py-20 bg-white\">\n");
    }
    out.push_str("<div class=\"max-w-7xl mx-auto px-4 sm:px-6 lg:px-8\">\n");

    render_header(&mut out);
    render_filter_bar(&mut out, &view.categories);

    out.push_str("<div class=\"partners-grid grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6 mb-16\">\n");
    for partner in &view.partners {
        render_card(&mut out, partner);
    }
    out.push_str("</div>\n");

    render_stats(&mut out);
    render_cta(&mut out);

    out.push_str("</div>\n</section>\n");
    out
}

fn render_header(out: &mut String) {
    out.push_str(
        r#"<div class="text-center mb-16">
<h2 class="text-4xl md:text-5xl font-bold text-gray-900 mb-6">Our Trusted Partners</h2>
<p class="text-xl text-gray-600 max-w-3xl mx-auto">Enjoy exclusive discounts and benefits at hundreds of partner locations across the UAE with your National Disability Card.</p>
</div>
"#,
    );
}

fn render_filter_bar(out: &mut String, categories: &[CategoryCount]) {
    out.push_str("<div class=\"category-filter flex flex-wrap justify-center gap-4 mb-12\">\n");
    for category in categories {
        out.push_str(&format!(
            "<button type=\"button\" class=\"px-6 py-3 rounded-full text-white font-medium {}\">{} ({})</button>\n",
            category.color,
            escape_html(category.name),
            category.count
        ));
    }
    out.push_str("</div>\n");
}

fn render_card(out: &mut String, partner: &Partner) {
    out.push_str(&format!(
        "<div class=\"partner-card bg-white rounded-xl shadow-lg overflow-hidden group\" data-partner-id=\"{}\">\n",
        escape_html(&partner.id.to_string())
    ));

    out.push_str("<div class=\"h-32 bg-gray-100 overflow-hidden flex items-center justify-center\">\n");
    match partner.logo_url() {
        Some(logo) => out.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\" class=\"w-full h-full object-cover\" />\n",
            escape_html(logo),
            escape_html(&partner.name)
        )),
        None => out.push_str(&format!(
            "<div class=\"logo-fallback text-4xl font-bold text-green-600\">{}</div>\n",
            escape_html(&partner.fallback_glyph())
        )),
    }
    out.push_str("</div>\n");

    out.push_str("<div class=\"p-6\">\n<div class=\"flex items-start justify-between mb-3\">\n");
    out.push_str(&format!(
        "<h3 class=\"text-lg font-bold text-gray-900\">{}</h3>\n",
        escape_html(&partner.name)
    ));
    out.push_str(&format!(
        "<div class=\"rating flex items-center text-yellow-500\">{}</div>\n",
        "<span class=\"star\">★</span>".repeat(STAR_RATING)
    ));
    out.push_str("</div>\n");

    out.push_str(&format!(
        "<div class=\"space-y-2 mb-4\">\n<div class=\"location flex items-center text-sm text-gray-600\">{}</div>\n<div class=\"category-badge inline-block bg-gray-100 text-gray-700 px-3 py-1 rounded-full text-xs font-medium\">{}</div>\n</div>\n",
        escape_html(&partner.location),
        escape_html(&partner.category)
    ));
    out.push_str(&format!(
        "<p class=\"text-sm text-gray-600 mb-4 line-clamp-2\">{}</p>\n",
        escape_html(&partner.description)
    ));
    out.push_str(&format!(
        "<div class=\"flex items-center justify-between\">\n<div class=\"discount bg-uae-green text-white px-3 py-1 rounded-full text-sm font-bold\">{}</div>\n<button type=\"button\" class=\"text-uae-green font-medium text-sm\">View Details →</button>\n</div>\n",
        escape_html(&partner.discount)
    ));

    out.push_str("</div>\n</div>\n");
}

fn render_stats(out: &mut String) {
    out.push_str("<div class=\"partner-stats grid grid-cols-1 md:grid-cols-4 gap-8 mb-16\">\n");
    for tile in &STAT_TILES {
        out.push_str(&format!(
            "<div class=\"text-center\">\n<div class=\"{} text-white w-16 h-16 rounded-full flex items-center justify-center mx-auto mb-4 text-2xl font-bold\">{}</div>\n<h3 class=\"text-lg font-semibold text-gray-900 mb-2\">{}</h3>\n<p class=\"text-gray-600\">{}</p>\n</div>\n",
            tile.color, tile.value, tile.label, tile.caption
        ));
    }
    out.push_str("</div>\n");
}

fn render_cta(out: &mut String) {
    out.push_str(
        r#"<div class="cta bg-gradient-to-r from-uae-green to-green-700 rounded-2xl p-8 md:p-12 text-center text-white">
<h3 class="text-3xl font-bold mb-4">Want to Become a Partner?</h3>
<p class="text-xl mb-8 text-green-100">Join our network of partners and help us create a more inclusive UAE. Reach thousands of potential customers while supporting our community.</p>
<div class="flex flex-col sm:flex-row gap-4 justify-center">
<button type="button" class="px-8 py-4 bg-white text-uae-green font-semibold rounded-lg">Partner With Us</button>
<button type="button" class="px-8 py-4 bg-transparent border-2 border-white text-white font-semibold rounded-lg">Learn More</button>
</div>
</div>
"#,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::categories::count_categories;
    use crate::domain::model::PartnerId;

    fn partner(id: u64, name: &str, logo: Option<&str>) -> Partner {
        Partner {
            id: PartnerId::Number(id),
            name: name.to_string(),
            category: "Healthcare".to_string(),
            location: "Al Ain".to_string(),
            description: "Clinic & pharmacy".to_string(),
            discount: "30% OFF".to_string(),
            logo: logo.map(String::from),
        }
    }

    fn view_of(partners: Vec<Partner>) -> SectionView {
        SectionView {
            categories: count_categories(&partners),
            partners,
            loading: false,
        }
    }

    #[test]
    fn test_one_card_per_partner() {
        let html = render_section(&view_of(vec![
            partner(1, "Acme", None),
            partner(2, "Beta", None),
        ]));

        assert_eq!(html.matches("class=\"partner-card").count(), 2);
        let first = html.find("data-partner-id=\"1\"").unwrap();
        let second = html.find("data-partner-id=\"2\"").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_logo_fallback_glyph() {
        let html = render_section(&view_of(vec![partner(1, "Acme", None)]));
        assert!(html.contains("<div class=\"logo-fallback text-4xl font-bold text-green-600\">A</div>"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_logo_image() {
        let html = render_section(&view_of(vec![partner(1, "Acme", Some("https://cdn.test/a.png"))]));
        assert!(html.contains("<img src=\"https://cdn.test/a.png\" alt=\"Acme\""));
        assert!(!html.contains("logo-fallback"));
    }

    #[test]
    fn test_filter_bar_labels() {
        let html = render_section(&view_of(vec![partner(1, "Acme", None)]));
        assert!(html.contains(">All Partners (1)</button>"));
        assert!(html.contains(">Healthcare (1)</button>"));
        assert!(html.contains(">Shopping (0)</button>"));
        assert!(html.contains(">Transport (0)</button>"));
    }

    #[test]
    fn test_partner_text_is_escaped() {
        let html = render_section(&view_of(vec![partner(1, "<b>Bad</b>", None)]));
        assert!(html.contains("&lt;b&gt;Bad&lt;/b&gt;"));
        assert!(html.contains("Clinic &amp; pharmacy"));
        assert!(!html.contains("<b>Bad"));
    }

    #[test]
    fn test_static_blocks_present() {
        let html = render_section(&view_of(Vec::new()));
        for tile in &STAT_TILES {
            assert!(html.contains(tile.value));
            assert!(html.contains(tile.label));
        }
        assert!(html.contains("Our Trusted Partners"));
        assert!(html.contains("Partner With Us"));
        assert!(html.contains("Learn More"));
        assert_eq!(html.matches("class=\"partner-card").count(), 0);
    }

    #[test]
    fn test_loading_marks_section_busy() {
        let mut view = view_of(Vec::new());
        view.loading = true;
        assert!(render_section(&view).contains("aria-busy=\"true\""));
        view.loading = false;
        assert!(!render_section(&view).contains("aria-busy"));
    }

    #[test]
    fn test_buttons_carry_no_handlers() {
        let html = render_section(&view_of(vec![partner(1, "Acme", None)]));
        assert!(!html.contains("onclick"));
        assert!(!html.contains("href"));
    }
}
