//! A single paper card.

use dioxus::prelude::*;
use pu_model::locale::Locale;
use pu_model::paper::Paper;

#[derive(Props, Clone, PartialEq)]
pub struct PaperCardProps {
    pub paper: Paper,
    /// Position in the rendered list, drives the entrance stagger
    pub index: usize,
    #[props(default = 0.1)]
    pub stagger_secs: f64,
    #[props(default)]
    pub locale: Locale,
}

/// `animation-delay` for the card at `index`, to the millisecond.
pub fn animation_delay(index: usize, stagger_secs: f64) -> String {
    let ms = (index as f64 * stagger_secs * 1000.0).round().max(0.0);
    format!("animation-delay: {}ms;", ms as u64)
}

/// Card with title, metadata, abstract and one or two links.
#[component]
pub fn PaperCard(props: PaperCardProps) -> Element {
    let paper = &props.paper;
    let text = props.locale.text();
    let language = paper.language.as_str();
    let delay = animation_delay(props.index, props.stagger_secs);
    let links = paper.links();

    rsx! {
        div {
            class: "paper-card {language} fade-in-up",
            style: "{delay}",
            "data-language": "{language}",
            h3 { class: "paper-title", "{paper.title}" }
            div {
                class: "paper-meta",
                span { strong { "{text.authors} " } "{paper.authors}" }
                span { strong { "{text.year} " } "{paper.year}" }
                span { strong { "{text.source} " } "{paper.source}" }
            }
            if !paper.abstract_text.is_empty() {
                p { class: "paper-abstract", "{paper.abstract_text}" }
            }
            div {
                class: "paper-links",
                for link in links {
                    a {
                        href: "{link.href}",
                        target: "_blank",
                        rel: "noopener",
                        class: link.class(),
                        {link.kind.label(text)}
                    }
                }
            }
        }
    }
}
