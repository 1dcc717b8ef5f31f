//! HTML presentation adapter.
//!
//! Turns a `RenderOutput` into markup for the catalog page. The adapter only
//! reads the pure render data, so any other front end can replace it.

use super::renderer::RenderOutput;
use crate::cards::CubeCard;
use crate::core::CatalogConfig;
use crate::filter::FilterOption;

/// Escape text for use in element content and quoted attributes.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
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

/// Render one card as an `<article>` element.
#[must_use]
pub fn render_card(card: &CubeCard) -> String {
    let mut html = format!(
        r#"<article class="{}"><div class="cube-header"><div class="cube-title">{}</div></div>"#,
        escape(&card.css_class()),
        escape(&card.title),
    );

    if card.has_badges() {
        html.push_str(r#"<div class="cube-badges">"#);
        for badge in &card.badges {
            html.push_str(&format!(
                r#"<span class="{}">{}</span>"#,
                badge.style_class,
                escape(&badge.text)
            ));
        }
        html.push_str("</div>");
    }

    html.push_str(r#"<div class="cube-stats">"#);
    for line in &card.stat_lines {
        html.push_str(&format!(r#"<div class="cube-stat-value">{}</div>"#, escape(line)));
    }
    html.push_str("</div></article>");
    html
}

/// Render every card, in order.
#[must_use]
pub fn render_cards(cards: &[CubeCard]) -> String {
    cards.iter().map(render_card).collect()
}

/// Render the category selector, marking `selected` as chosen.
#[must_use]
pub fn render_category_select(options: &[FilterOption], selected: &str) -> String {
    let mut html = String::from(r#"<select id="elementFilter">"#);
    for option in options {
        let marker = if option.value == selected { " selected" } else { "" };
        html.push_str(&format!(
            r#"<option value="{}"{marker}>{}</option>"#,
            escape(&option.value),
            escape(&option.label)
        ));
    }
    html.push_str("</select>");
    html
}

/// Render the status line followed by the card container.
#[must_use]
pub fn render_page(output: &RenderOutput, config: &CatalogConfig) -> String {
    format!(
        r#"<p id="statsInfo">{}</p><div id="cards">{}</div>"#,
        escape(&output.status_text(config)),
        render_cards(&output.cards)
    )
}
