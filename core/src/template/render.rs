//! Template rendering.

use match_counter_types::formatting::format_win_rate;

use super::parser::{Directive, Segment, Template};

/// Values substituted into a template.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderContext<'a> {
    pub wins: i32,
    pub losses: i32,
    pub player_name: &'a str,
    /// In `[0.0, 1.0]`
    pub win_rate: f64,
}

impl RenderContext<'_> {
    fn write_directive(&self, directive: Directive, out: &mut String) {
        match directive {
            Directive::Wins => out.push_str(&self.wins.to_string()),
            Directive::Losses => out.push_str(&self.losses.to_string()),
            Directive::PlayerName => out.push_str(self.player_name),
            Directive::WinRate => out.push_str(&format_win_rate(self.win_rate)),
        }
    }
}

/// Render `format` against the given values.
///
/// `%w`, `%l`, `%n` and `%r` are substituted. Any other `%c` is copied through
/// with its `%`, and a lone `%` at the end is copied as-is.
///
/// ```
/// use match_counter_core::template::render;
/// assert_eq!(render("%w-%l(%r)", 3, 1, "", 0.75), "3-1(75.0%)");
/// assert_eq!(render("100%% done", 0, 0, "", 0.0), "100%% done");
/// ```
pub fn render(format: &str, wins: i32, losses: i32, player_name: &str, win_rate: f64) -> String {
    Template::parse(format).render(&RenderContext {
        wins,
        losses,
        player_name,
        win_rate,
    })
}

impl Template {
    /// Render a parsed template.
    pub fn render(&self, ctx: &RenderContext<'_>) -> String {
        let mut out = String::with_capacity(ctx.player_name.len() + 16);
        for segment in self.segments() {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Directive(directive) => ctx.write_directive(*directive, &mut out),
                Segment::Unknown(c) => {
                    out.push('%');
                    out.push(*c);
                }
                Segment::TrailingPercent => out.push('%'),
            }
        }
        out
    }
}
