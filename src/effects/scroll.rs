use crate::config::Timing;

/// Fragment id of an in-page href (`"#about"` -> `"about"`).
///
/// A bare `"#"` names nothing and yields `None`, as does any href that isn't a
/// fragment.
pub fn fragment(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that puts a section's top just under the fixed navbar.
pub fn scroll_target(offset_top: f64, navbar_height: f64) -> f64 {
    offset_top - navbar_height
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavbarStyle {
    pub background: &'static str,
    pub box_shadow: &'static str,
}

impl NavbarStyle {
    const RESTING: NavbarStyle = NavbarStyle {
        background: "rgba(255, 255, 255, 0.95)",
        box_shadow: "0 2px 20px rgba(0, 0, 0, 0.1)",
    };
    const SCROLLED: NavbarStyle = NavbarStyle {
        background: "rgba(255, 255, 255, 0.98)",
        box_shadow: "0 2px 30px rgba(0, 0, 0, 0.15)",
    };

    pub fn for_scroll(scroll_y: f64, timing: &Timing) -> Self {
        if scroll_y > timing.navbar_scrolled_at {
            Self::SCROLLED
        } else {
            Self::RESTING
        }
    }

    pub fn css(&self) -> String {
        format!(
            "background: {}; box-shadow: {};",
            self.background, self.box_shadow
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Section the viewport is currently in. When sections overlap the last one
/// in document order wins.
pub fn active_section<'a>(
    sections: &'a [SectionBounds],
    scroll_y: f64,
    timing: &Timing,
) -> Option<&'a str> {
    let position = scroll_y + timing.active_link_offset;
    sections
        .iter()
        .rev()
        .find(|s| s.contains(position))
        .map(|s| s.id.as_str())
}

/// Hero translation for the current scroll. `None` once the hero has scrolled
/// out of view, meaning the previous transform should stay.
pub fn parallax_offset(scroll_y: f64, hero_height: f64, timing: &Timing) -> Option<f64> {
    if scroll_y < hero_height {
        Some(scroll_y * timing.parallax_rate)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment() {
        assert_eq!(fragment("#about"), Some("about"));
        assert_eq!(fragment("#"), None);
        assert_eq!(fragment(""), None);
        assert_eq!(fragment("https://example.com/#about"), None);
        assert_eq!(fragment("mailto:me@example.com"), None);
    }

    #[test]
    fn test_scroll_target() {
        assert_eq!(scroll_target(500.0, 80.0), 420.0);
        // sections near the top can ask for negative scroll; the browser clamps
        assert_eq!(scroll_target(0.0, 80.0), -80.0);
    }

    #[test]
    fn test_navbar_style_threshold() {
        let timing = Timing::default();
        assert_eq!(NavbarStyle::for_scroll(0.0, &timing), NavbarStyle::RESTING);
        assert_eq!(NavbarStyle::for_scroll(50.0, &timing), NavbarStyle::RESTING);
        assert_eq!(NavbarStyle::for_scroll(50.5, &timing), NavbarStyle::SCROLLED);
        assert_eq!(
            NavbarStyle::for_scroll(900.0, &timing).css(),
            "background: rgba(255, 255, 255, 0.98); box-shadow: 0 2px 30px rgba(0, 0, 0, 0.15);"
        );
    }

    fn page() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("home", 0.0, 700.0),
            SectionBounds::new("about", 700.0, 500.0),
            SectionBounds::new("skills", 1200.0, 600.0),
            SectionBounds::new("contact", 1800.0, 800.0),
        ]
    }

    #[test]
    fn test_active_section() {
        let timing = Timing::default();
        let sections = page();
        assert_eq!(active_section(&sections, 0.0, &timing), Some("home"));
        // offset of 100 pulls the switch point up
        assert_eq!(active_section(&sections, 599.0, &timing), Some("home"));
        assert_eq!(active_section(&sections, 600.0, &timing), Some("about"));
        assert_eq!(active_section(&sections, 1750.0, &timing), Some("contact"));
        assert_eq!(active_section(&sections, 5000.0, &timing), None);
        assert_eq!(active_section(&[], 0.0, &timing), None);
    }

    #[test]
    fn test_active_section_overlap_prefers_last() {
        let timing = Timing::default();
        let sections = vec![
            SectionBounds::new("outer", 0.0, 1000.0),
            SectionBounds::new("inner", 200.0, 100.0),
        ];
        assert_eq!(active_section(&sections, 150.0, &timing), Some("inner"));
        assert_eq!(active_section(&sections, 300.0, &timing), Some("outer"));
    }

    #[test]
    fn test_parallax_offset() {
        let timing = Timing::default();
        assert_eq!(parallax_offset(0.0, 600.0, &timing), Some(0.0));
        let offset = parallax_offset(100.0, 600.0, &timing).unwrap();
        assert!((offset + 30.0).abs() < 1e-9);
        assert_eq!(parallax_offset(600.0, 600.0, &timing), None);
        assert_eq!(parallax_offset(1000.0, 600.0, &timing), None);
    }
}
