//! Format template parsing.
//!
//! A template is literal text with `%`-escapes. The character after `%` is the
//! directive; unrecognized directives are kept as literal `%c` pairs and a `%`
//! at the very end of the template is kept as-is.

use std::fmt;

/// A recognized `%` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    /// `%w`
    Wins,
    /// `%l`
    Losses,
    /// `%n`
    PlayerName,
    /// `%r`, rendered as a percentage with one decimal place
    WinRate,
}

impl Directive {
    pub const ALL: [Directive; 4] = [
        Directive::Wins,
        Directive::Losses,
        Directive::PlayerName,
        Directive::WinRate,
    ];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'w' => Some(Self::Wins),
            'l' => Some(Self::Losses),
            'n' => Some(Self::PlayerName),
            'r' => Some(Self::WinRate),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Wins => 'w',
            Self::Losses => 'l',
            Self::PlayerName => 'n',
            Self::WinRate => 'r',
        }
    }

    /// Short description for help text and tooltips.
    pub fn description(self) -> &'static str {
        match self {
            Self::Wins => "number of wins",
            Self::Losses => "number of losses",
            Self::PlayerName => "player name",
            Self::WinRate => "win rate as a percentage (e.g. 75.0%)",
        }
    }
}

/// One piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Directive(Directive),
    /// `%` followed by a character that isn't a directive; rendered as `%c`
    Unknown(char),
    /// `%` with nothing after it
    TrailingPercent,
}

/// A parsed format template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse `format`, scanning by `char`.
    pub fn parse(format: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = format.chars();

        while let Some(c) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }

            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }

            let segment = match chars.next() {
                None => Segment::TrailingPercent,
                Some(d) => match Directive::from_char(d) {
                    Some(directive) => Segment::Directive(directive),
                    None => Segment::Unknown(d),
                },
            };
            segments.push(segment);
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether `directive` appears anywhere in the template.
    pub fn uses(&self, directive: Directive) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Directive(d) if *d == directive))
    }

    /// Unrecognized directive characters, first occurrence order, no repeats.
    pub fn unknown_directives(&self) -> Vec<char> {
        let mut unknown = Vec::new();
        for segment in &self.segments {
            if let Segment::Unknown(c) = segment
                && !unknown.contains(c)
            {
                unknown.push(*c);
            }
        }
        unknown
    }
}

impl fmt::Display for Template {
    /// Writes the template back in its source form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => f.write_str(text)?,
                Segment::Directive(d) => write!(f, "%{}", d.as_char())?,
                Segment::Unknown(c) => write!(f, "%{}", c)?,
                Segment::TrailingPercent => f.write_str("%")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_template() {
        let template = Template::parse("%n: %w - %l (%r)");
        assert_eq!(
            template.segments(),
            &[
                Segment::Directive(Directive::PlayerName),
                Segment::Literal(": ".to_string()),
                Segment::Directive(Directive::Wins),
                Segment::Literal(" - ".to_string()),
                Segment::Directive(Directive::Losses),
                Segment::Literal(" (".to_string()),
                Segment::Directive(Directive::WinRate),
                Segment::Literal(")".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_empty() {
        assert!(Template::parse("").segments().is_empty());
    }

    #[test]
    fn test_double_percent_is_unknown_directive() {
        let template = Template::parse("100%% done");
        assert_eq!(
            template.segments(),
            &[
                Segment::Literal("100".to_string()),
                Segment::Unknown('%'),
                Segment::Literal(" done".to_string()),
            ]
        );
    }

    #[test]
    fn test_trailing_percent() {
        let template = Template::parse("end%");
        assert_eq!(
            template.segments(),
            &[Segment::Literal("end".to_string()), Segment::TrailingPercent]
        );
    }

    #[test]
    fn test_multibyte_directive_is_one_char() {
        let template = Template::parse("%é%日");
        assert_eq!(
            template.segments(),
            &[Segment::Unknown('é'), Segment::Unknown('日')]
        );
    }

    #[test]
    fn test_unknown_directives_deduplicated() {
        let template = Template::parse("%x %w %y %x %%");
        assert_eq!(template.unknown_directives(), vec!['x', 'y', '%']);
        assert!(Template::parse("%w - %l").unknown_directives().is_empty());
    }

    #[test]
    fn test_uses() {
        let template = Template::parse("%w - %l");
        assert!(template.uses(Directive::Wins));
        assert!(template.uses(Directive::Losses));
        assert!(!template.uses(Directive::WinRate));
        assert!(!template.uses(Directive::PlayerName));
    }

    #[test]
    fn test_display_restores_source() {
        for source in ["%n: %w - %l", "100%% done", "end%", "score: %x", "%é", ""] {
            assert_eq!(Template::parse(source).to_string(), source);
        }
    }

    #[test]
    fn test_directive_char_mapping() {
        for directive in Directive::ALL {
            assert_eq!(Directive::from_char(directive.as_char()), Some(directive));
        }
        assert_eq!(Directive::from_char('x'), None);
    }
}
