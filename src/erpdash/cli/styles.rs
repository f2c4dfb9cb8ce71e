//! Named styles for terminal output.
//!
//! Templates never pick colors. They name what a piece of text *is* (`muted`,
//! `kpi`, `paid`, `overdue`) and the `style` filter looks that name up in
//! [`ERP_THEME`]. Badge variants from [`erpdash::status::BadgeVariant`] are
//! style names too, so a status cell carries its style straight from the
//! table snapshot to the template.
//!
//! A name missing from the theme renders with a `(!?)` prefix, with or
//! without color, so a typo in a template shows up in the output instead of
//! silently rendering plain.

use console::Style;
use erpdash::status::BadgeVariant;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const REGULAR: &str = "regular";
    pub const MUTED: &str = "muted";
    pub const FAINT: &str = "faint";
    pub const TITLE: &str = "title";
    pub const SECTION: &str = "section";
    pub const KPI: &str = "kpi";
    pub const TREND_UP: &str = "trend-up";
    pub const TREND_DOWN: &str = "trend-down";
    pub const HEADER: &str = "header";
    pub const SELECTED: &str = "selected";
    pub const LINK: &str = "link";
    pub const UNREAD: &str = "unread";
    pub const TIME: &str = "time";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
}

const MISSING_INDICATOR: &str = "(!?)";

#[derive(Default)]
pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_INDICATOR, text),
        }
    }
}

pub static ERP_THEME: Lazy<Theme> = Lazy::new(build_theme);

fn build_theme() -> Theme {
    let muted = Style::new().color256(245);
    let faint = Style::new().color256(240);
    let green = Style::new().green();
    let yellow = Style::new().yellow();
    let red = Style::new().red();
    let blue = Style::new().blue();

    let theme = Theme::default()
        .add(names::REGULAR, Style::new())
        .add(names::MUTED, muted.clone())
        .add(names::FAINT, faint.clone())
        .add(names::TITLE, Style::new().bold())
        .add(names::SECTION, Style::new().cyan().bold())
        .add(names::KPI, Style::new().bold())
        .add(names::TREND_UP, green.clone())
        .add(names::TREND_DOWN, red.clone())
        .add(names::HEADER, Style::new().bold().underlined())
        .add(names::SELECTED, Style::new().black().on_yellow())
        .add(names::LINK, Style::new().cyan())
        .add(names::UNREAD, yellow.clone().bold())
        .add(names::TIME, muted.clone().italic())
        .add(names::ERROR, red.clone().bold())
        .add(names::WARNING, yellow.clone().bold())
        .add(names::SUCCESS, green.clone())
        .add(names::INFO, muted.clone());

    // Badge variants not already covered above.
    theme
        .add(BadgeVariant::Default.as_str(), Style::new())
        .add(BadgeVariant::Draft.as_str(), faint)
        .add(BadgeVariant::Pending.as_str(), yellow)
        .add(BadgeVariant::Paid.as_str(), green.clone().bold())
        .add(BadgeVariant::Overdue.as_str(), red.clone().bold())
        .add(BadgeVariant::Cancelled.as_str(), muted.strikethrough())
        .add(BadgeVariant::Online.as_str(), green)
        .add(BadgeVariant::Offline.as_str(), red)
        .add(BadgeVariant::Maintenance.as_str(), blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_badge_variant_has_a_style() {
        for variant in BadgeVariant::ALL {
            assert!(ERP_THEME.has(variant.as_str()), "{:?}", variant);
        }
    }

    #[test]
    fn unknown_style_is_flagged() {
        assert_eq!(ERP_THEME.apply("nope", "hello", false), "(!?) hello");
        assert_eq!(ERP_THEME.apply("nope", "hello", true), "(!?) hello");
    }

    #[test]
    fn plain_mode_keeps_text() {
        assert_eq!(ERP_THEME.apply(names::SUCCESS, "x", false), "x");
    }

    #[test]
    fn color_mode_adds_escapes() {
        let styled = ERP_THEME.apply(names::ERROR, "boom", true);
        assert!(styled.contains("boom"));
        assert!(styled.starts_with("\u{1b}["));
    }
}
