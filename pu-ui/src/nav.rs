//! Navigation bar glue: mobile menu, scroll styling, anchor scrolling.
//!
//! The navbar is static page markup outside any Dioxus root, so it is wired
//! with plain listeners. Which features get wired is decided up front by
//! [`NavCapabilities`].

use crate::dom;
use crate::timers::BrowserScheduler;
use pu_model::config::SiteConfig;
use pu_utils::debounce::debounce;
use web_sys::{Element, ScrollBehavior, ScrollToOptions};

const ACTIVE: &str = "active";

/// Which navigation features the current page can support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavCapabilities {
    /// `.hamburger` and `.nav-menu` both exist
    pub menu_toggle: bool,
    /// Menu exists and there are `.nav-link`s to close it from
    pub close_on_link: bool,
    /// `.navbar` exists
    pub scroll_style: bool,
    /// At least one in-page `.nav-link[href^="#"]`
    pub smooth_scroll: bool,
}

impl NavCapabilities {
    pub fn from_presence(
        navbar: bool,
        hamburger: bool,
        menu: bool,
        links: usize,
        anchor_links: usize,
    ) -> Self {
        let menu_toggle = hamburger && menu;
        Self {
            menu_toggle,
            close_on_link: menu_toggle && links > 0,
            scroll_style: navbar,
            smooth_scroll: anchor_links > 0,
        }
    }

    pub fn any(&self) -> bool {
        self.menu_toggle || self.close_on_link || self.scroll_style || self.smooth_scroll
    }
}

/// Navbar look for a given scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarStyle {
    /// Top of the page: opaque gradient
    Expanded,
    /// Scrolled past the threshold: translucent with blur
    Compact,
}

impl NavbarStyle {
    pub fn for_scroll(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            NavbarStyle::Compact
        } else {
            NavbarStyle::Expanded
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            NavbarStyle::Expanded => "linear-gradient(135deg, #1e88e5 0%, #1565c0 100%)",
            NavbarStyle::Compact => "rgba(30, 136, 229, 0.95)",
        }
    }

    pub fn backdrop_filter(&self) -> &'static str {
        match self {
            NavbarStyle::Expanded => "none",
            NavbarStyle::Compact => "blur(10px)",
        }
    }
}

/// Element id an in-page link points at (`"#papers"` -> `"papers"`).
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that puts a section's top just under the fixed header.
pub fn anchor_scroll_top(section_offset_top: f64, header_offset: f64) -> f64 {
    section_offset_top - header_offset
}

/// A resize to this width closes the mobile menu.
pub fn should_close_menu(viewport_width: f64, breakpoint: f64) -> bool {
    viewport_width > breakpoint
}

fn close_menu(hamburger: &Element, menu: &Element) {
    let _ = hamburger.class_list().remove_1(ACTIVE);
    let _ = menu.class_list().remove_1(ACTIVE);
}

/// Probe the page and wire every navigation feature it supports.
pub fn install(config: &SiteConfig) -> NavCapabilities {
    let navbar = dom::query(".navbar");
    let hamburger = dom::query(".hamburger");
    let menu = dom::query(".nav-menu");
    let links = dom::query_all(".nav-link");
    let anchors = dom::query_all(".nav-link[href^=\"#\"]");

    let caps = NavCapabilities::from_presence(
        navbar.is_some(),
        hamburger.is_some(),
        menu.is_some(),
        links.len(),
        anchors.len(),
    );
    log::info!("Navigation capabilities: {:?}", caps);

    if let (true, Some(hamburger), Some(menu)) = (caps.menu_toggle, &hamburger, &menu) {
        install_menu_toggle(hamburger, menu, config);
        if caps.close_on_link {
            for link in &links {
                let (h, m) = (hamburger.clone(), menu.clone());
                dom::on(link, "click", move |_| close_menu(&h, &m));
            }
        }
    }

    if let (true, Some(navbar)) = (caps.scroll_style, navbar) {
        install_scroll_style(navbar, config.navbar_scroll_threshold);
    }

    if caps.smooth_scroll {
        install_smooth_scroll(&anchors, config.header_offset);
    }

    caps
}

fn install_menu_toggle(hamburger: &Element, menu: &Element, config: &SiteConfig) {
    let (h, m) = (hamburger.clone(), menu.clone());
    dom::on(hamburger, "click", move |_| {
        let _ = h.class_list().toggle(ACTIVE);
        let _ = m.class_list().toggle(ACTIVE);
    });

    let Some(window) = dom::window() else {
        return;
    };
    let (h, m) = (hamburger.clone(), menu.clone());
    let breakpoint = config.mobile_breakpoint;
    let close_if_wide = debounce(BrowserScheduler, config.resize_debounce_ms, move || {
        let width = dom::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        if should_close_menu(width, breakpoint) {
            close_menu(&h, &m);
        }
    });
    dom::on(&window, "resize", move |_| close_if_wide.trigger());
}

fn install_scroll_style(navbar: Element, threshold: f64) {
    let (Some(window), Some(navbar)) = (dom::window(), dom::as_html(&navbar)) else {
        return;
    };
    dom::on(&window, "scroll", move |_| {
        let scroll_y = dom::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);
        let style = NavbarStyle::for_scroll(scroll_y, threshold);
        let css = navbar.style();
        let _ = css.set_property("background", style.background());
        let _ = css.set_property("backdrop-filter", style.backdrop_filter());
    });
}

fn install_smooth_scroll(anchors: &[Element], header_offset: f64) {
    for link in anchors {
        let href = link.get_attribute("href").unwrap_or_default();
        let Some(target_id) = anchor_target(&href).map(str::to_string) else {
            continue;
        };
        dom::on(link, "click", move |event| {
            event.prevent_default();
            let Some(section) = dom::element_by_id(&target_id).and_then(|e| dom::as_html(&e)) else {
                return;
            };
            let options = ScrollToOptions::new();
            options.set_top(anchor_scroll_top(f64::from(section.offset_top()), header_offset));
            options.set_behavior(ScrollBehavior::Smooth);
            if let Some(window) = dom::window() {
                window.scroll_to_with_scroll_to_options(&options);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capabilities_full_page() {
        let caps = NavCapabilities::from_presence(true, true, true, 4, 3);
        assert!(caps.menu_toggle);
        assert!(caps.close_on_link);
        assert!(caps.scroll_style);
        assert!(caps.smooth_scroll);
    }

    #[test]
    fn test_missing_menu_disables_only_menu_features() {
        let caps = NavCapabilities::from_presence(true, true, false, 4, 3);
        assert!(!caps.menu_toggle);
        assert!(!caps.close_on_link);
        assert!(caps.scroll_style);
        assert!(caps.smooth_scroll);
    }

    #[test]
    fn test_empty_page_has_no_capabilities() {
        let caps = NavCapabilities::from_presence(false, false, false, 0, 0);
        assert_eq!(caps, NavCapabilities::default());
        assert!(!caps.any());
    }

    #[test]
    fn test_navbar_style_threshold() {
        assert_eq!(NavbarStyle::for_scroll(0.0, 100.0), NavbarStyle::Expanded);
        assert_eq!(NavbarStyle::for_scroll(100.0, 100.0), NavbarStyle::Expanded);
        assert_eq!(NavbarStyle::for_scroll(100.5, 100.0), NavbarStyle::Compact);
        assert_eq!(NavbarStyle::Compact.backdrop_filter(), "blur(10px)");
        assert_eq!(NavbarStyle::Expanded.backdrop_filter(), "none");
    }

    #[test]
    fn test_anchor_helpers() {
        assert_eq!(anchor_target("#papers"), Some("papers"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("papers.html"), None);
        assert_eq!(anchor_scroll_top(500.0, 80.0), 420.0);
    }

    #[test]
    fn test_menu_closes_only_above_breakpoint() {
        assert!(!should_close_menu(768.0, 768.0));
        assert!(should_close_menu(1024.0, 768.0));
        assert!(!should_close_menu(375.0, 768.0));
    }
}
