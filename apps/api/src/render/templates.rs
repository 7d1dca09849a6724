//! The template catalogue. Each template is an immutable [`TemplateSpec`]
//! value; [`crate::render::engine::render_layout`] turns any of them into a
//! document.

use serde::Serialize;

use crate::layout::font_metrics::FontFamily;
use crate::layout::page::Margins;
use crate::models::{ContentField, LayoutMode};
use crate::render::color::{Color, Palette};
use crate::render::primitives::{Align, BulletGlyph, RuleStyle};

/// How a section's text is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionMode {
    Paragraph,
    Bullets,
    Timeline,
    Chips,
    Cards,
    /// Bullets with institution/employer lines promoted to headings.
    Entries,
    Code,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpec {
    pub title: &'static str,
    pub field: ContentField,
    pub mode: SectionMode,
}

const fn section(title: &'static str, field: ContentField, mode: SectionMode) -> SectionSpec {
    SectionSpec { title, field, mode }
}

/// When paired sections are placed side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PairPolicy {
    Never,
    WhenTwoColumn,
    Always,
}

impl PairPolicy {
    pub fn applies(self, layout: LayoutMode) -> bool {
        match self {
            PairPolicy::Never => false,
            PairPolicy::WhenTwoColumn => layout == LayoutMode::TwoColumn,
            PairPolicy::Always => true,
        }
    }
}

/// Identity block treatment on the first page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeaderStyle {
    /// Left-aligned name and contact line over a full-width rule.
    Rule,
    /// Centred name and contact line between two rules.
    Centered,
    /// Name and contact on a full-width primary band.
    Band { height: f32 },
    /// Angled two-tone banner behind the name.
    Banner { height: f32 },
    /// Terminal window chrome with a prompt line.
    Terminal { height: f32 },
    /// Large name with a muted contact line and no rule.
    Minimal,
    /// Identity lives at the top of the sidebar.
    Sidebar,
}

/// Page-wide paint applied to every page before content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decoration {
    /// Tints the paper with the palette background.
    PageFill,
    Border { inset: f32, color: Color, width: f32 },
    /// Student initials set diagonally across the page.
    Watermark { alpha: f32, size: f32 },
    /// Translucent disc; `cx`, `cy` are page coordinates.
    Circle { cx: f32, cy: f32, r: f32, color: Color, alpha: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarSpec {
    pub width: f32,
    pub fill: Color,
    pub text: Color,
    pub accent: Color,
    pub sections: &'static [SectionSpec],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Typography {
    pub name: FontFamily,
    pub heading: FontFamily,
    pub body: FontFamily,
    /// Face of the contact line under the name.
    pub contact: FontFamily,
    pub name_size: f32,
    pub title_size: f32,
    pub body_size: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FooterStyle {
    pub height: f32,
    /// Fill the band with the primary colour; otherwise a hairline.
    pub filled: bool,
}

/// Everything that distinguishes one template from another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub margins: Margins,
    pub palette: Palette,
    pub typography: Typography,
    pub header: HeaderStyle,
    pub title_rule: RuleStyle,
    pub uppercase_titles: bool,
    pub uppercase_name: bool,
    pub separator: &'static str,
    pub bullet: BulletGlyph,
    pub paragraph_align: Align,
    pub sections: &'static [SectionSpec],
    pub pairs: &'static [(ContentField, ContentField)],
    pub pair_policy: PairPolicy,
    pub sidebar: Option<SidebarSpec>,
    /// Left gutter for rotated section labels instead of inline titles.
    pub label_gutter: Option<f32>,
    pub decorations: &'static [Decoration],
    pub footer: FooterStyle,
    pub section_gap: f32,
}

impl TemplateSpec {
    pub fn honours_layout(&self) -> bool {
        self.pair_policy == PairPolicy::WhenTwoColumn
    }

    /// Partner of `field` when side-by-side pairing is active.
    pub fn pair_partner(&self, field: ContentField, layout: LayoutMode) -> Option<ContentField> {
        if !self.pair_policy.applies(layout) {
            return None;
        }
        self.pairs
            .iter()
            .find(|(left, _)| *left == field)
            .map(|(_, right)| *right)
    }
}

use ContentField as F;
use SectionMode as M;

const STANDARD_PAIRS: &[(ContentField, ContentField)] = &[
    (F::Skills, F::Languages),
    (F::Certifications, F::Achievements),
];
const SKILL_PAIR: &[(ContentField, ContentField)] = &[(F::Skills, F::Languages)];

// ────────────────────────────────────────────────────────────────────────────
// classic
// ────────────────────────────────────────────────────────────────────────────

const CLASSIC_PALETTE: Palette = Palette {
    primary: Color::hex(0x1F3A5F),
    accent: Color::hex(0x2E86AB),
    background: Color::WHITE,
    text: Color::hex(0x222222),
    muted: Color::hex(0x666666),
    on_primary: Color::WHITE,
    surface: Color::hex(0xF2F5F8),
};

pub static CLASSIC: TemplateSpec = TemplateSpec {
    name: "classic",
    label: "Classic",
    margins: Margins::new(50.0, 50.0, 64.0, 50.0),
    palette: CLASSIC_PALETTE,
    typography: Typography {
        name: FontFamily::HelveticaBold,
        heading: FontFamily::HelveticaBold,
        body: FontFamily::Helvetica,
        contact: FontFamily::Helvetica,
        name_size: 24.0,
        title_size: 12.0,
        body_size: 10.0,
    },
    header: HeaderStyle::Rule,
    title_rule: RuleStyle::Underline {
        color: CLASSIC_PALETTE.accent,
        width: 0.8,
    },
    uppercase_titles: true,
    uppercase_name: false,
    separator: "  |  ",
    bullet: BulletGlyph::Text("•"),
    paragraph_align: Align::Left,
    sections: &[
        section("Objective", F::Objective, M::Paragraph),
        section("Education", F::Education, M::Bullets),
        section("Experience", F::Experience, M::Bullets),
        section("Projects", F::Projects, M::Bullets),
        section("Skills", F::Skills, M::Bullets),
        section("Languages", F::Languages, M::Bullets),
        section("Certifications", F::Certifications, M::Bullets),
        section("Achievements", F::Achievements, M::Bullets),
        section("References", F::ReferencesInfo, M::Paragraph),
        section("Additional Information", F::AdditionalInfo, M::Paragraph),
    ],
    pairs: STANDARD_PAIRS,
    pair_policy: PairPolicy::WhenTwoColumn,
    sidebar: None,
    label_gutter: None,
    decorations: &[],
    footer: FooterStyle {
        height: 30.0,
        filled: false,
    },
    section_gap: 12.0,
};

// ────────────────────────────────────────────────────────────────────────────
// executive
// ────────────────────────────────────────────────────────────────────────────

const EXECUTIVE_PALETTE: Palette = Palette {
    primary: Color::hex(0x2C3E50),
    accent: Color::hex(0xC9A227),
    background: Color::WHITE,
    text: Color::hex(0x2B2B2B),
    muted: Color::hex(0x6B7280),
    on_primary: Color::WHITE,
    surface: Color::hex(0xF4F1E8),
};

pub static EXECUTIVE: TemplateSpec = TemplateSpec {
    name: "executive",
    label: "Executive",
    margins: Margins::new(45.0, 48.0, 64.0, 48.0),
    palette: EXECUTIVE_PALETTE,
    typography: Typography {
        name: FontFamily::TimesBold,
        heading: FontFamily::HelveticaBold,
        body: FontFamily::Helvetica,
        contact: FontFamily::Helvetica,
        name_size: 26.0,
        title_size: 12.0,
        body_size: 10.0,
    },
    header: HeaderStyle::Band { height: 104.0 },
    title_rule: RuleStyle::SideBar {
        color: EXECUTIVE_PALETTE.accent,
        width: 4.0,
    },
    uppercase_titles: true,
    uppercase_name: true,
    separator: "  •  ",
    bullet: BulletGlyph::Square,
    paragraph_align: Align::Justify,
    sections: &[
        section("Executive Summary", F::Objective, M::Paragraph),
        section("Professional Experience", F::Experience, M::Entries),
        section("Education", F::Education, M::Entries),
        section("Core Skills", F::Skills, M::Bullets),
        section("Languages", F::Languages, M::Bullets),
        section("Key Projects", F::Projects, M::Entries),
        section("Certifications", F::Certifications, M::Entries),
        section("Achievements", F::Achievements, M::Bullets),
        section("References", F::ReferencesInfo, M::Paragraph),
        section("Additional Information", F::AdditionalInfo, M::Paragraph),
    ],
    pairs: SKILL_PAIR,
    pair_policy: PairPolicy::Always,
    sidebar: None,
    label_gutter: None,
    decorations: &[],
    footer: FooterStyle {
        height: 28.0,
        filled: true,
    },
    section_gap: 14.0,
};

// ────────────────────────────────────────────────────────────────────────────
// minimalist
// ────────────────────────────────────────────────────────────────────────────

const MINIMALIST_PALETTE: Palette = Palette {
    primary: Color::hex(0x111111),
    accent: Color::hex(0x9CA3AF),
    background: Color::WHITE,
    text: Color::hex(0x333333),
    muted: Color::hex(0x8A8A8A),
    on_primary: Color::WHITE,
    surface: Color::hex(0xF5F5F5),
};

pub static MINIMALIST: TemplateSpec = TemplateSpec {
    name: "minimalist",
    label: "Minimalist",
    margins: Margins::new(60.0, 60.0, 70.0, 48.0),
    palette: MINIMALIST_PALETTE,
    typography: Typography {
        name: FontFamily::Helvetica,
        heading: FontFamily::HelveticaBold,
        body: FontFamily::Helvetica,
        contact: FontFamily::HelveticaOblique,
        name_size: 30.0,
        title_size: 8.0,
        body_size: 9.5,
    },
    header: HeaderStyle::Minimal,
    title_rule: RuleStyle::Plain,
    uppercase_titles: true,
    uppercase_name: false,
    separator: "   /   ",
    bullet: BulletGlyph::Text("–"),
    paragraph_align: Align::Left,
    sections: &[
        section("Profile", F::Objective, M::Paragraph),
        section("Experience", F::Experience, M::Bullets),
        section("Education", F::Education, M::Bullets),
        section("Projects", F::Projects, M::Bullets),
        section("Skills", F::Skills, M::Bullets),
        section("Languages", F::Languages, M::Bullets),
        section("Certifications", F::Certifications, M::Bullets),
        section("Achievements", F::Achievements, M::Bullets),
        section("References", F::ReferencesInfo, M::Paragraph),
        section("More", F::AdditionalInfo, M::Paragraph),
    ],
    pairs: &[],
    pair_policy: PairPolicy::Never,
    sidebar: None,
    label_gutter: Some(34.0),
    decorations: &[],
    footer: FooterStyle {
        height: 30.0,
        filled: false,
    },
    section_gap: 18.0,
};

// ────────────────────────────────────────────────────────────────────────────
// creative
// ────────────────────────────────────────────────────────────────────────────

const CREATIVE_PALETTE: Palette = Palette {
    primary: Color::hex(0x6C3FC5),
    accent: Color::hex(0xFF7A45),
    background: Color::WHITE,
    text: Color::hex(0x2D2A32),
    muted: Color::hex(0x7A7485),
    on_primary: Color::WHITE,
    surface: Color::hex(0xF4EFFF),
};

pub static CREATIVE: TemplateSpec = TemplateSpec {
    name: "creative",
    label: "Creative",
    margins: Margins::new(40.0, 45.0, 62.0, 45.0),
    palette: CREATIVE_PALETTE,
    typography: Typography {
        name: FontFamily::HelveticaBold,
        heading: FontFamily::HelveticaBold,
        body: FontFamily::Helvetica,
        contact: FontFamily::HelveticaOblique,
        name_size: 28.0,
        title_size: 13.0,
        body_size: 10.0,
    },
    header: HeaderStyle::Banner { height: 128.0 },
    title_rule: RuleStyle::ShortBar {
        color: CREATIVE_PALETTE.accent,
        length: 36.0,
        thickness: 3.0,
    },
    uppercase_titles: false,
    uppercase_name: false,
    separator: "  —  ",
    bullet: BulletGlyph::Dot,
    paragraph_align: Align::Left,
    sections: &[
        section("About Me", F::Objective, M::Paragraph),
        section("Skills", F::Skills, M::Chips),
        section("Experience", F::Experience, M::Timeline),
        section("Projects", F::Projects, M::Cards),
        section("Education", F::Education, M::Timeline),
        section("Languages", F::Languages, M::Chips),
        section("Certifications", F::Certifications, M::Bullets),
        section("Achievements", F::Achievements, M::Bullets),
        section("References", F::ReferencesInfo, M::Paragraph),
        section("Additional Information", F::AdditionalInfo, M::Paragraph),
    ],
    pairs: &[],
    pair_policy: PairPolicy::Never,
    sidebar: None,
    label_gutter: None,
    decorations: &[
        Decoration::Circle {
            cx: 560.0,
            cy: 30.0,
            r: 90.0,
            color: CREATIVE_PALETTE.accent,
            alpha: 0.25,
        },
        Decoration::Circle {
            cx: 20.0,
            cy: 830.0,
            r: 60.0,
            color: CREATIVE_PALETTE.primary,
            alpha: 0.12,
        },
    ],
    footer: FooterStyle {
        height: 28.0,
        filled: true,
    },
    section_gap: 14.0,
};

// ────────────────────────────────────────────────────────────────────────────
// technical
// ────────────────────────────────────────────────────────────────────────────

const TECHNICAL_PALETTE: Palette = Palette {
    primary: Color::hex(0x0D1117),
    accent: Color::hex(0x2EA043),
    background: Color::WHITE,
    text: Color::hex(0x24292F),
    muted: Color::hex(0x57606A),
    on_primary: Color::hex(0xE6EDF3),
    surface: Color::hex(0xF6F8FA),
};

pub static TECHNICAL: TemplateSpec = TemplateSpec {
    name: "technical",
    label: "Technical",
    margins: Margins::new(40.0, 45.0, 62.0, 45.0),
    palette: TECHNICAL_PALETTE,
    typography: Typography {
        name: FontFamily::CourierBold,
        heading: FontFamily::CourierBold,
        body: FontFamily::Helvetica,
        contact: FontFamily::Helvetica,
        name_size: 20.0,
        title_size: 12.0,
        body_size: 9.5,
    },
    header: HeaderStyle::Terminal { height: 96.0 },
    title_rule: RuleStyle::Underline {
        color: Color::hex(0xD0D7DE),
        width: 0.5,
    },
    uppercase_titles: false,
    uppercase_name: false,
    separator: " :: ",
    bullet: BulletGlyph::Text(">"),
    paragraph_align: Align::Left,
    sections: &[
        section("## Summary", F::Objective, M::Paragraph),
        section("## Skills", F::Skills, M::Code),
        section("## Experience", F::Experience, M::Bullets),
        section("## Projects", F::Projects, M::Bullets),
        section("## Education", F::Education, M::Bullets),
        section("## Languages", F::Languages, M::Code),
        section("## Certifications", F::Certifications, M::Bullets),
        section("## Achievements", F::Achievements, M::Bullets),
        section("## References", F::ReferencesInfo, M::Paragraph),
        section("## Additional", F::AdditionalInfo, M::Paragraph),
    ],
    pairs: &[],
    pair_policy: PairPolicy::Never,
    sidebar: None,
    label_gutter: None,
    decorations: &[],
    footer: FooterStyle {
        height: 26.0,
        filled: true,
    },
    section_gap: 12.0,
};

// ────────────────────────────────────────────────────────────────────────────
// professional
// ────────────────────────────────────────────────────────────────────────────

const PROFESSIONAL_PALETTE: Palette = Palette {
    primary: Color::hex(0x1B2A41),
    accent: Color::hex(0x3FA7D6),
    background: Color::WHITE,
    text: Color::hex(0x2B2B2B),
    muted: Color::hex(0x6B7280),
    on_primary: Color::WHITE,
    surface: Color::hex(0xEEF3F8),
};

const PROFESSIONAL_SIDEBAR: &[SectionSpec] = &[
    section("Skills", F::Skills, M::Bullets),
    section("Languages", F::Languages, M::Bullets),
    section("Certifications", F::Certifications, M::Bullets),
];

pub static PROFESSIONAL: TemplateSpec = TemplateSpec {
    name: "professional",
    label: "Professional",
    margins: Margins::new(42.0, 40.0, 62.0, 40.0),
    palette: PROFESSIONAL_PALETTE,
    typography: Typography {
        name: FontFamily::HelveticaBold,
        heading: FontFamily::HelveticaBold,
        body: FontFamily::Helvetica,
        contact: FontFamily::Helvetica,
        name_size: 20.0,
        title_size: 12.0,
        body_size: 9.5,
    },
    header: HeaderStyle::Sidebar,
    title_rule: RuleStyle::Band {
        fill: PROFESSIONAL_PALETTE.surface,
    },
    uppercase_titles: true,
    uppercase_name: false,
    separator: "  |  ",
    bullet: BulletGlyph::Dot,
    paragraph_align: Align::Left,
    sections: &[
        section("Profile", F::Objective, M::Paragraph),
        section("Experience", F::Experience, M::Bullets),
        section("Education", F::Education, M::Bullets),
        section("Projects", F::Projects, M::Bullets),
        section("Achievements", F::Achievements, M::Bullets),
        section("References", F::ReferencesInfo, M::Paragraph),
        section("Additional Information", F::AdditionalInfo, M::Paragraph),
    ],
    pairs: &[],
    pair_policy: PairPolicy::Never,
    sidebar: Some(SidebarSpec {
        width: 190.0,
        fill: PROFESSIONAL_PALETTE.primary,
        text: PROFESSIONAL_PALETTE.on_primary,
        accent: PROFESSIONAL_PALETTE.accent,
        sections: PROFESSIONAL_SIDEBAR,
    }),
    label_gutter: None,
    decorations: &[],
    footer: FooterStyle {
        height: 28.0,
        filled: false,
    },
    section_gap: 12.0,
};

// ────────────────────────────────────────────────────────────────────────────
// academic
// ────────────────────────────────────────────────────────────────────────────

const ACADEMIC_PALETTE: Palette = Palette {
    primary: Color::hex(0x6B1E1E),
    accent: Color::hex(0x6B1E1E),
    background: Color::WHITE,
    text: Color::hex(0x1F1F1F),
    muted: Color::hex(0x5F5F5F),
    on_primary: Color::WHITE,
    surface: Color::hex(0xF7F3F0),
};

pub static ACADEMIC: TemplateSpec = TemplateSpec {
    name: "academic",
    label: "Academic",
    margins: Margins::new(58.0, 58.0, 70.0, 58.0),
    palette: ACADEMIC_PALETTE,
    typography: Typography {
        name: FontFamily::TimesBold,
        heading: FontFamily::TimesBold,
        body: FontFamily::TimesRoman,
        contact: FontFamily::TimesRoman,
        name_size: 22.0,
        title_size: 12.5,
        body_size: 10.5,
    },
    header: HeaderStyle::Centered,
    title_rule: RuleStyle::Underline {
        color: ACADEMIC_PALETTE.accent,
        width: 0.6,
    },
    uppercase_titles: false,
    uppercase_name: false,
    separator: "  ·  ",
    bullet: BulletGlyph::Text("–"),
    paragraph_align: Align::Justify,
    sections: &[
        section("Research Objective", F::Objective, M::Paragraph),
        section("Education", F::Education, M::Timeline),
        section("Experience", F::Experience, M::Timeline),
        section("Projects and Publications", F::Projects, M::Bullets),
        section("Skills", F::Skills, M::Bullets),
        section("Languages", F::Languages, M::Bullets),
        section("Certifications", F::Certifications, M::Bullets),
        section("Honours and Awards", F::Achievements, M::Bullets),
        section("References", F::ReferencesInfo, M::Paragraph),
        section("Additional Information", F::AdditionalInfo, M::Paragraph),
    ],
    pairs: STANDARD_PAIRS,
    pair_policy: PairPolicy::WhenTwoColumn,
    sidebar: None,
    label_gutter: None,
    decorations: &[Decoration::Border {
        inset: 24.0,
        color: ACADEMIC_PALETTE.primary,
        width: 0.8,
    }],
    footer: FooterStyle {
        height: 30.0,
        filled: false,
    },
    section_gap: 12.0,
};

// ────────────────────────────────────────────────────────────────────────────
// elegant
// ────────────────────────────────────────────────────────────────────────────

const ELEGANT_PALETTE: Palette = Palette {
    primary: Color::hex(0x3E2C23),
    accent: Color::hex(0xB08D57),
    background: Color::hex(0xFBF8F1),
    text: Color::hex(0x3A3330),
    muted: Color::hex(0x8C7B6B),
    on_primary: Color::hex(0xFBF8F1),
    surface: Color::hex(0xF3ECDD),
};

pub static ELEGANT: TemplateSpec = TemplateSpec {
    name: "elegant",
    label: "Elegant",
    margins: Margins::new(56.0, 60.0, 70.0, 60.0),
    palette: ELEGANT_PALETTE,
    typography: Typography {
        name: FontFamily::TimesRoman,
        heading: FontFamily::TimesBold,
        body: FontFamily::Helvetica,
        contact: FontFamily::Helvetica,
        name_size: 28.0,
        title_size: 12.0,
        body_size: 9.5,
    },
    header: HeaderStyle::Centered,
    title_rule: RuleStyle::Flanked {
        color: ELEGANT_PALETTE.accent,
    },
    uppercase_titles: true,
    uppercase_name: true,
    separator: "  ·  ",
    bullet: BulletGlyph::Dot,
    paragraph_align: Align::Justify,
    sections: &[
        section("Profile", F::Objective, M::Paragraph),
        section("Experience", F::Experience, M::Bullets),
        section("Education", F::Education, M::Bullets),
        section("Skills", F::Skills, M::Bullets),
        section("Languages", F::Languages, M::Bullets),
        section("Projects", F::Projects, M::Bullets),
        section("Certifications", F::Certifications, M::Bullets),
        section("Achievements", F::Achievements, M::Bullets),
        section("References", F::ReferencesInfo, M::Paragraph),
        section("Additional Information", F::AdditionalInfo, M::Paragraph),
    ],
    pairs: SKILL_PAIR,
    pair_policy: PairPolicy::Always,
    sidebar: None,
    label_gutter: None,
    decorations: &[
        Decoration::PageFill,
        Decoration::Watermark {
            alpha: 0.05,
            size: 180.0,
        },
    ],
    footer: FooterStyle {
        height: 30.0,
        filled: false,
    },
    section_gap: 14.0,
};

/// Registry in dispatch order.
pub static TEMPLATES: [&TemplateSpec; 8] = [
    &CLASSIC,
    &EXECUTIVE,
    &MINIMALIST,
    &CREATIVE,
    &TECHNICAL,
    &PROFESSIONAL,
    &ACADEMIC,
    &ELEGANT,
];

/// Reserved names that render the classic design until they get their own.
pub const ALIASES: [(&str, &str); 2] = [("modern", "classic"), ("corporate", "classic")];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_template_names_are_unique_and_lowercase() {
        let names: HashSet<_> = TEMPLATES.iter().map(|t| t.name).collect();
        assert_eq!(names.len(), TEMPLATES.len());
        for t in TEMPLATES {
            assert_eq!(t.name, t.name.trim().to_lowercase());
        }
    }

    #[test]
    fn test_title_rules_and_contact_faces_vary_across_templates() {
        assert!(TEMPLATES.iter().any(|t| matches!(t.title_rule, RuleStyle::Band { .. })));
        assert!(TEMPLATES
            .iter()
            .any(|t| t.typography.contact == FontFamily::HelveticaOblique));
        assert!(TEMPLATES
            .iter()
            .any(|t| t.typography.contact == t.typography.body));
    }

    #[test]
    fn test_every_field_has_a_home() {
        for t in TEMPLATES {
            let mut fields: Vec<ContentField> = t.sections.iter().map(|s| s.field).collect();
            if let Some(sidebar) = &t.sidebar {
                fields.extend(sidebar.sections.iter().map(|s| s.field));
            }
            for field in ContentField::ALL {
                assert_eq!(
                    fields.iter().filter(|f| **f == field).count(),
                    1,
                    "{} places {:?} other than once",
                    t.name,
                    field
                );
            }
        }
    }

    #[test]
    fn test_pairs_refer_to_main_sections() {
        for t in TEMPLATES {
            for (left, right) in t.pairs {
                assert!(t.sections.iter().any(|s| s.field == *left), "{}", t.name);
                assert!(t.sections.iter().any(|s| s.field == *right), "{}", t.name);
            }
        }
    }

    #[test]
    fn test_layout_handling_per_template() {
        let honouring: Vec<_> = TEMPLATES
            .iter()
            .filter(|t| t.honours_layout())
            .map(|t| t.name)
            .collect();
        assert_eq!(honouring, vec!["classic", "academic"]);

        assert_eq!(
            EXECUTIVE.pair_partner(F::Skills, LayoutMode::SingleColumn),
            Some(F::Languages)
        );
        assert_eq!(CLASSIC.pair_partner(F::Skills, LayoutMode::SingleColumn), None);
        assert_eq!(
            CLASSIC.pair_partner(F::Certifications, LayoutMode::TwoColumn),
            Some(F::Achievements)
        );
        assert_eq!(TECHNICAL.pair_partner(F::Skills, LayoutMode::TwoColumn), None);
    }

    #[test]
    fn test_footer_fits_inside_bottom_margin() {
        for t in TEMPLATES {
            assert!(t.margins.bottom > t.footer.height, "{}", t.name);
        }
    }
}
