//! Plain-text slide decks
//!
//! Slides are separated by lines containing only `---`. The first `# ` line of
//! a slide is its title. A `> ` line directly under the first slide's title is
//! the deck subtitle revealed by the intro.

use std::path::Path;

use slidenav_core::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Slide {
    pub title: Option<String>,
    pub body: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    pub subtitle: Option<String>,
    pub slides: Vec<Slide>,
}

const SEPARATOR: &str = "---";

const DEMO: &str = "\
# slidenav
> Scroll, swipe or press j/k to move between slides

A paginated presenter that turns into a scrolling page on small screens.
---
# Desktop mode
Every wheel gesture, swipe or key press moves exactly one slide.

Transitions never overlap and a short cooldown swallows trailing wheel events.
---
# Mobile mode
Press F2 to simulate a touch screen, then narrow the terminal.

The page then scrolls natively and the current slide follows the scroll position.
---
# Indicators
The dots on the right track the current slide. Click one to jump to it.

Press m for the slide menu.
---
# Thanks
Press q to quit.
";

impl Deck {
    /// Parse a deck from text; fails when no slide has any content
    pub fn parse(text: &str) -> Result<Self> {
        let mut chunks: Vec<Vec<&str>> = vec![Vec::new()];
        for line in text.lines() {
            if line.trim() == SEPARATOR {
                chunks.push(Vec::new());
            } else if let Some(chunk) = chunks.last_mut() {
                chunk.push(line.trim_end());
            }
        }

        let mut slides: Vec<Slide> = chunks
            .iter()
            .map(|chunk| trim_blank(chunk))
            .filter(|chunk| !chunk.is_empty())
            .map(parse_slide)
            .collect();
        if slides.is_empty() {
            return Err(Error::EmptyDeck);
        }

        let subtitle = take_subtitle(&mut slides[0]);
        Ok(Self { subtitle, slides })
    }

    /// Read and parse a deck file
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let text = String::from_utf8(bytes)
            .map_err(|_| Error::Deck(format!("{} is not valid UTF-8", path.display())))?;
        Self::parse(&text)
    }

    /// Built-in deck used when no file is given
    pub fn demo() -> Self {
        Self::parse(DEMO).unwrap_or_else(|_| Self {
            subtitle: None,
            slides: vec![Slide::default()],
        })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Title of the first slide, used for the terminal title
    pub fn title(&self) -> Option<&str> {
        self.slides.first().and_then(|s| s.title.as_deref())
    }
}

fn trim_blank<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    let start = lines.iter().position(|l| !l.trim().is_empty());
    let end = lines.iter().rposition(|l| !l.trim().is_empty());
    match (start, end) {
        (Some(start), Some(end)) => lines[start..=end].to_vec(),
        _ => Vec::new(),
    }
}

fn parse_slide(lines: Vec<&str>) -> Slide {
    let mut title = None;
    let mut body = Vec::with_capacity(lines.len());
    for line in lines {
        match line.strip_prefix("# ") {
            Some(heading) if title.is_none() => title = Some(heading.trim().to_string()),
            _ => body.push(line.to_string()),
        }
    }
    Slide {
        title,
        body: trim_blank(&body.iter().map(String::as_str).collect::<Vec<_>>())
            .into_iter()
            .map(str::to_string)
            .collect(),
    }
}

fn take_subtitle(slide: &mut Slide) -> Option<String> {
    let subtitle = slide.body.first()?.strip_prefix("> ")?.trim().to_string();
    slide.body.remove(0);
    while slide.body.first().is_some_and(|l| l.trim().is_empty()) {
        slide.body.remove(0);
    }
    Some(subtitle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slides_and_titles() {
        let source = "# One\nfirst\n---\n\nplain body\n---\n# Three\n";
        let deck = Deck::parse(source).unwrap();
        assert_eq!(deck.len(), 3);
        assert_eq!(deck.slides[0].title.as_deref(), Some("One"));
        assert_eq!(deck.slides[0].body, vec!["first"]);
        assert_eq!(deck.slides[1].title, None);
        assert_eq!(deck.slides[1].body, vec!["plain body"]);
        assert!(deck.slides[2].body.is_empty());
    }

    #[test]
    fn test_subtitle_comes_from_first_slide() {
        let source = "# Talk\n> A subtitle\n\nIntro text\n---\n> not a subtitle\n";
        let deck = Deck::parse(source).unwrap();
        assert_eq!(deck.subtitle.as_deref(), Some("A subtitle"));
        assert_eq!(deck.slides[0].body, vec!["Intro text"]);
        assert_eq!(deck.slides[1].body, vec!["> not a subtitle"]);
    }

    #[test]
    fn test_blank_chunks_are_dropped() {
        let deck = Deck::parse("---\n\n---\n# Only\n---\n   \n").unwrap();
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.title(), Some("Only"));
    }

    #[test]
    fn test_empty_deck_is_an_error() {
        assert!(matches!(Deck::parse(""), Err(Error::EmptyDeck)));
        assert!(matches!(Deck::parse("---\n---\n"), Err(Error::EmptyDeck)));
    }

    #[test]
    fn test_demo_deck() {
        let deck = Deck::demo();
        assert_eq!(deck.len(), 5);
        assert!(deck.subtitle.is_some());
        assert_eq!(deck.title(), Some("slidenav"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Deck::load(Path::new("/nonexistent/deck.md"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
