//! Paragraph blocks for the three responsive layouts of the blog template
//!
//! The template repeats the post body once per breakpoint. Each copy starts
//! with an intro div (the anchor) and the paragraph blocks are spliced in
//! right after it. Anchors are matched as literal text, not parsed as HTML.

use crate::content::Paragraph;

/// One responsive copy of the post body, in template order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    First,
    Second,
    Third,
}

impl Breakpoint {
    /// All breakpoints, in the order they are filled
    pub const ALL: [Breakpoint; 3] = [Breakpoint::First, Breakpoint::Second, Breakpoint::Third];

    /// CSS classes of this breakpoint's intro div
    pub fn intro_class(&self) -> &'static str {
        match self {
            Breakpoint::First => "intro epilogue-medium-black-rock-20px",
            Breakpoint::Second => "intro-1 epilogue-medium-black-rock-18px",
            Breakpoint::Third => "intro-2 epilogue-medium-black-rock-20px",
        }
    }

    /// Literal anchor text: the intro div with its unexpanded `$INTRO` token
    pub fn anchor(&self) -> String {
        anchor_for(self.intro_class())
    }

    /// Markup of one paragraph block in this breakpoint's style
    pub fn fragment(&self, paragraph: &Paragraph) -> String {
        let title = paragraph.title.as_str();
        let description = paragraph.description.as_deref().unwrap_or_default();

        match self {
            Breakpoint::First => format!(
                r#"
    <div class="auto-layout-vertical-5 auto-layout-vertical-7">
                  <div class="auto-layout-vertical-6 auto-layout-vertical-7">
                    <div class="paragraph_1_title epilogue-medium-black-rock-46px">{title}</div>
                    <div class="paragraph_1_description epilogue-medium-black-rock-20px">{description}</div>
                  </div>
                </div>
"#
            ),
            Breakpoint::Second => format!(
                r#"
    <div class="auto-layout-vertical-12 auto-layout-vertical">
                  <div class="auto-layout-vertical-13 auto-layout-vertical">
                    <div class="paragraph_1_title-1 epilogue-medium-black-rock-26px">{title}</div>
                    <div class="paragraph_1_description-1 epilogue-medium-black-rock-18px">
                      {description}
                    </div>
                  </div>
                </div>
"#
            ),
            Breakpoint::Third => format!(
                r#"
    <div class="auto-layout-vertical-19 auto-layout-vertical">
                  <div class="auto-layout-vertical-20 auto-layout-vertical">
                    <div class="paragraph_1_title-2 epilogue-medium-black-rock-46px">{title}</div>
                    <div class="paragraph_1_description-2 epilogue-medium-black-rock-20px">
                      {description}
                    </div>
                  </div>
                </div>
"#
            ),
        }
    }
}

/// Anchor text of an intro div with the given classes
pub fn anchor_for(intro_class: &str) -> String {
    format!(r#"<div class="{}">$INTRO</div>"#, intro_class)
}

/// Insert one block per paragraph right after the breakpoint's anchor
pub fn insert_paragraphs(
    template: &str,
    paragraphs: &[Paragraph],
    breakpoint: Breakpoint,
) -> String {
    insert_after_anchor(template, &breakpoint.anchor(), paragraphs, |p| {
        breakpoint.fragment(p)
    })
}

/// Insert rendered paragraphs right after `anchor`
///
/// The anchor must occur exactly once; otherwise the template is returned
/// unchanged.
pub fn insert_after_anchor<F>(
    template: &str,
    anchor: &str,
    paragraphs: &[Paragraph],
    fragment: F,
) -> String
where
    F: Fn(&Paragraph) -> String,
{
    let count = template.matches(anchor).count();
    if count != 1 {
        tracing::debug!(
            "Anchor {:?} found {} times, skipping paragraphs",
            anchor,
            count
        );
        return template.to_string();
    }

    // count == 1 guarantees a match
    let Some(start) = template.find(anchor) else {
        return template.to_string();
    };
    let (before, after) = template.split_at(start + anchor.len());

    let blocks: String = paragraphs.iter().map(fragment).collect();

    let mut html = String::with_capacity(template.len() + blocks.len());
    html.push_str(before);
    html.push_str(&blocks);
    html.push_str(after);
    html
}
