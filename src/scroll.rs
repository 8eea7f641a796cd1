/// Distance below the viewport top used to pick the active section.
pub const SECTION_OFFSET: f64 = 100.0;
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;

/// Vertical extent of a rendered section, in document pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub id: &'static str,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// The first section containing `scroll_y + SECTION_OFFSET`, or `prior` when none does.
pub fn active_section(bounds: &[SectionBounds], scroll_y: f64, prior: &'static str) -> &'static str {
    let probe = scroll_y + SECTION_OFFSET;
    bounds
        .iter()
        .find(|b| b.contains(probe))
        .map_or(prior, |b| b.id)
}

pub fn show_back_to_top(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD
}

/// Navigation label for a section id: the id with its first letter capitalized.
pub fn section_label(id: &str) -> String {
    crate::content::capitalize(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBounds> {
        vec![
            SectionBounds { id: "hero", top: 0.0, height: 800.0 },
            SectionBounds { id: "about", top: 800.0, height: 600.0 },
            SectionBounds { id: "projects", top: 1400.0, height: 900.0 },
        ]
    }

    #[test]
    fn test_active_section_uses_offset() {
        let bounds = page();
        assert_eq!(active_section(&bounds, 0.0, "hero"), "hero");
        // 699 + 100 is still inside hero
        assert_eq!(active_section(&bounds, 699.0, "hero"), "hero");
        assert_eq!(active_section(&bounds, 700.0, "hero"), "about");
        assert_eq!(active_section(&bounds, 1300.0, "about"), "projects");
    }

    #[test]
    fn test_active_section_keeps_prior_outside_sections() {
        let bounds = page();
        assert_eq!(active_section(&bounds, 5000.0, "projects"), "projects");
        assert_eq!(active_section(&[], 0.0, "about"), "about");
    }

    #[test]
    fn test_first_match_wins() {
        let overlapping = vec![
            SectionBounds { id: "a", top: 0.0, height: 500.0 },
            SectionBounds { id: "b", top: 0.0, height: 500.0 },
        ];
        assert_eq!(active_section(&overlapping, 0.0, "b"), "a");
    }

    #[test]
    fn test_back_to_top_threshold() {
        assert!(!show_back_to_top(0.0));
        assert!(!show_back_to_top(300.0));
        assert!(show_back_to_top(300.5));
    }

    #[test]
    fn test_section_label() {
        assert_eq!(section_label("testimonials"), "Testimonials");
        assert_eq!(section_label(""), "");
    }
}
