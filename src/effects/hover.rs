use std::time::Duration;

const STAGGER: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverEffect {
    /// Skill chips slide right and grow slightly.
    Skill,
    /// Project cards lift.
    Project,
}

impl HoverEffect {
    pub fn transform(&self, hovered: bool) -> &'static str {
        match (self, hovered) {
            (HoverEffect::Skill, true) => "translateX(10px) scale(1.05)",
            (HoverEffect::Skill, false) => "translateX(0) scale(1)",
            (HoverEffect::Project, true) => "translateY(-15px) scale(1.02)",
            (HoverEffect::Project, false) => "translateY(0) scale(1)",
        }
    }
}

/// Inline style for an element carrying `effect`.
///
/// `hover` is `None` until the pointer first enters; until then no transform
/// is set inline, so a `.fade-in` transition on the same element still runs.
pub fn hover_style(hover: Option<(HoverEffect, bool)>, delay: Option<&str>) -> String {
    let mut style = String::new();
    if let Some((effect, hovered)) = hover {
        style.push_str(&format!("transform: {};", effect.transform(hovered)));
    }
    if let Some(delay) = delay {
        if !style.is_empty() {
            style.push(' ');
        }
        style.push_str(&format!("animation-delay: {delay};"));
    }
    style
}

/// CSS animation delay for the `index`th card.
pub fn stagger_delay(index: usize) -> String {
    format!("{}ms", STAGGER.as_millis() * index as u128)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transforms() {
        assert_eq!(HoverEffect::Skill.transform(true), "translateX(10px) scale(1.05)");
        assert_eq!(HoverEffect::Skill.transform(false), "translateX(0) scale(1)");
        assert_eq!(HoverEffect::Project.transform(true), "translateY(-15px) scale(1.02)");
        assert_eq!(HoverEffect::Project.transform(false), "translateY(0) scale(1)");
    }

    #[test]
    fn test_hover_style() {
        assert_eq!(hover_style(None, None), "");
        assert_eq!(
            hover_style(Some((HoverEffect::Skill, true)), None),
            "transform: translateX(10px) scale(1.05);"
        );

        // a card that fades in keeps its delay but no inline transform until hovered
        let delay = stagger_delay(2);
        assert_eq!(
            hover_style(None, Some(&delay)),
            "animation-delay: 400ms;"
        );
        assert_eq!(
            hover_style(Some((HoverEffect::Project, false)), Some(&delay)),
            "transform: translateY(0) scale(1); animation-delay: 400ms;"
        );
    }

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0), "0ms");
        assert_eq!(stagger_delay(1), "200ms");
        assert_eq!(stagger_delay(3), "600ms");
    }
}
