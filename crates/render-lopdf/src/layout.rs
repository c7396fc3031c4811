//! Line breaking for cell phrases.

use crate::metrics::text_width;
use tabloid_render_core::{Font, Phrase};

/// Line box height as a multiple of the largest font size on the line.
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// A piece of a line drawn in a single font, possibly carrying a link target.
#[derive(Debug, Clone, PartialEq)]
pub struct LineFragment {
    pub text: String,
    pub font: Font,
    pub anchor: Option<String>,
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextLine {
    pub fragments: Vec<LineFragment>,
    pub width: f32,
    pub height: f32,
}

impl TextLine {
    /// The font that determines this line's ascent.
    pub fn tallest_font(&self) -> Option<&Font> {
        self.fragments
            .iter()
            .map(|f| &f.font)
            .max_by(|a, b| a.size.total_cmp(&b.size))
    }

    fn push_word(&mut self, word: &str, font: Font, anchor: Option<&String>) {
        let width = text_width(word, &font);
        match self.fragments.last_mut() {
            Some(last) if last.font == font && last.anchor.as_ref() == anchor => {
                last.text.push_str(word);
                last.width += width;
            }
            _ => self.fragments.push(LineFragment {
                text: word.to_string(),
                font,
                anchor: anchor.cloned(),
                width,
            }),
        }
        self.width += width;
        self.height = self.height.max(font.size * LINE_HEIGHT_FACTOR);
    }

    /// Drops trailing whitespace so right-aligned text sits flush.
    fn trim_end(&mut self) {
        while let Some(last) = self.fragments.last_mut() {
            let trimmed = last.text.trim_end().len();
            if trimmed < last.text.len() {
                last.text.truncate(trimmed);
                last.width = text_width(&last.text, &last.font);
            }
            if last.text.is_empty() {
                self.fragments.pop();
            } else {
                break;
            }
        }
        self.width = self.fragments.iter().map(|f| f.width).sum();
    }
}

struct LineBreaker {
    max_width: f32,
    lines: Vec<TextLine>,
    current: TextLine,
}

impl LineBreaker {
    fn new(max_width: f32) -> Self {
        Self { max_width, lines: Vec::new(), current: TextLine::default() }
    }

    fn finish_line(&mut self, font: &Font) {
        let mut line = std::mem::take(&mut self.current);
        line.trim_end();
        if line.height == 0.0 {
            line.height = font.size * LINE_HEIGHT_FACTOR;
        }
        self.lines.push(line);
    }

    fn push_segment(&mut self, segment: &str, font: Font, anchor: Option<&String>) {
        for word in segment.split_inclusive(' ') {
            let word_width = text_width(word.trim_end(), &font);
            let overflows = self.current.width + word_width > self.max_width;
            if overflows && !self.current.fragments.is_empty() {
                self.finish_line(&font);
            }
            if self.current.fragments.is_empty() && word.trim().is_empty() {
                continue;
            }
            self.current.push_word(word, font, anchor);
        }
    }

    fn finish(mut self, font: Option<Font>) -> Vec<TextLine> {
        if !self.current.fragments.is_empty() {
            self.finish_line(&font.unwrap_or_default());
        }
        self.lines
    }
}

/// Breaks `phrase` into lines no wider than `max_width` where possible.
///
/// Lines break at spaces and at `\n`. A single word wider than `max_width`
/// is kept whole on its own line. An empty phrase yields no lines.
pub fn layout_phrase(phrase: &Phrase, max_width: f32) -> Vec<TextLine> {
    let mut breaker = LineBreaker::new(max_width);
    let mut last_font = None;
    for chunk in &phrase.chunks {
        let mut segments = chunk.text.split('\n').peekable();
        while let Some(segment) = segments.next() {
            breaker.push_segment(segment, chunk.font, chunk.anchor.as_ref());
            if segments.peek().is_some() {
                breaker.finish_line(&chunk.font);
            }
        }
        last_font = Some(chunk.font);
    }
    breaker.finish(last_font)
}

/// Total height of a block of lines.
pub fn lines_height(lines: &[TextLine]) -> f32 {
    lines.iter().map(|l| l.height).sum()
}
