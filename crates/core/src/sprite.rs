//! Sprite module - immutable rectangles of glyphs
//!
//! Texture format: a header line with two integers (`width height`) followed
//! by `height` rows of exactly `width` glyphs. Row terminators (`\n`, `\r\n`)
//! are stripped; anything after the declared rows is ignored.

use std::io::Read;
use std::ops::Index;

use thiserror::Error;

/// Glyph pairs swapped when a sprite is mirrored horizontally.
const MIRROR_PAIRS: [(char, char); 5] = [
    ('[', ']'),
    ('(', ')'),
    ('<', '>'),
    ('/', '\\'),
    ('{', '}'),
];

/// Errors raised while loading textures or assembling entities from them.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("texture source is unreadable")]
    Io(#[from] std::io::Error),
    #[error("texture is missing its `width height` header")]
    MissingHeader,
    #[error("malformed texture header {0:?}")]
    BadHeader(String),
    #[error("texture has zero size ({width}x{height})")]
    ZeroSize { width: usize, height: usize },
    #[error("texture row {row} has {found} glyphs, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("texture declares {expected} rows but only {found} are present")]
    MissingRows { expected: usize, found: usize },
    #[error("entity has no frames")]
    EmptyEntity,
    #[error("failed to load frame `{name}`")]
    Frame {
        name: String,
        #[source]
        source: Box<LoadError>,
    },
    #[error("frame `{frame}` has no basket marker {marker:?}")]
    MissingMarker { frame: String, marker: char },
    #[error("`{entity}` does not fit inside the {width}x{height} grid")]
    OutOfBounds {
        entity: String,
        width: usize,
        height: usize,
    },
}

/// Swap a bracket-style glyph with its horizontal mirror image.
pub fn mirror_glyph(ch: char) -> char {
    for (a, b) in MIRROR_PAIRS {
        if ch == a {
            return b;
        }
        if ch == b {
            return a;
        }
    }
    ch
}

/// A `width` x `height` glyph buffer stored row-major.
///
/// The buffer length is fixed at construction and never changes. Mirroring
/// yields a new sprite rather than editing this one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sprite {
    width: usize,
    height: usize,
    glyphs: Vec<char>,
}

impl Sprite {
    /// Parse a sprite from texture text.
    pub fn parse(source: &str) -> Result<Self, LoadError> {
        let mut lines = source.lines();
        let header = lines.next().ok_or(LoadError::MissingHeader)?;
        let (width, height) = parse_header(header)?;

        let mut rows = Vec::new();
        for row in 0..height {
            let Some(line) = lines.next() else {
                return Err(LoadError::MissingRows {
                    expected: height,
                    found: row,
                });
            };
            let line = line.strip_suffix('\r').unwrap_or(line);
            let found = line.chars().count();
            if found != width {
                return Err(LoadError::RowLength {
                    row,
                    expected: width,
                    found,
                });
            }
            rows.push(line);
        }

        Self::from_rows(&rows)
    }

    /// Read texture text from any reader and parse it.
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self, LoadError> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        Self::parse(&source)
    }

    /// Build a sprite from equally long rows.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, LoadError> {
        let height = rows.len();
        let width = rows
            .first()
            .map(|r| r.as_ref().chars().count())
            .unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(LoadError::ZeroSize { width, height });
        }

        let mut glyphs = Vec::with_capacity(width * height);
        for (row, text) in rows.iter().enumerate() {
            let before = glyphs.len();
            glyphs.extend(text.as_ref().chars());
            let found = glyphs.len() - before;
            if found != width {
                return Err(LoadError::RowLength {
                    row,
                    expected: width,
                    found,
                });
            }
        }

        Ok(Self {
            width,
            height,
            glyphs,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Glyph at (x, y), or `None` outside the sprite.
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.glyphs[y * self.width + x])
    }

    /// One row of glyphs.
    pub fn row(&self, y: usize) -> &[char] {
        let start = y * self.width;
        &self.glyphs[start..start + self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.glyphs.chunks(self.width)
    }

    /// Position of the first `marker` glyph, scanning rows top to bottom.
    pub fn find(&self, marker: char) -> Option<(usize, usize)> {
        self.glyphs
            .iter()
            .position(|&ch| ch == marker)
            .map(|i| (i % self.width, i / self.width))
    }

    /// Horizontally flipped copy with bracket glyphs swapped.
    pub fn mirror(&self) -> Self {
        let mut glyphs = Vec::with_capacity(self.glyphs.len());
        for row in self.rows() {
            glyphs.extend(row.iter().rev().map(|&ch| mirror_glyph(ch)));
        }
        Self {
            width: self.width,
            height: self.height,
            glyphs,
        }
    }
}

impl Index<(usize, usize)> for Sprite {
    type Output = char;

    fn index(&self, (x, y): (usize, usize)) -> &char {
        assert!(
            x < self.width && y < self.height,
            "glyph ({x}, {y}) outside {}x{} sprite",
            self.width,
            self.height
        );
        &self.glyphs[y * self.width + x]
    }
}

fn parse_header(header: &str) -> Result<(usize, usize), LoadError> {
    let mut parts = header.split_whitespace();
    let mut next = || -> Result<usize, LoadError> {
        parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(|| LoadError::BadHeader(header.to_string()))
    };
    let width = next()?;
    let height = next()?;
    if parts.next().is_some() {
        return Err(LoadError::BadHeader(header.to_string()));
    }
    if width == 0 || height == 0 {
        return Err(LoadError::ZeroSize { width, height });
    }
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_row_terminators() {
        let sprite = Sprite::parse("3 2\r\n/-\\\r\n|_|\r\n").unwrap();
        assert_eq!(sprite.width(), 3);
        assert_eq!(sprite.height(), 2);
        assert_eq!(sprite.row(0), &['/', '-', '\\']);
        assert_eq!(sprite[(2, 1)], '|');
    }

    #[test]
    fn test_parse_ignores_text_after_declared_rows() {
        let sprite = Sprite::parse("2 1\nab\nthis is not part of it\n").unwrap();
        assert_eq!(sprite.row(0), &['a', 'b']);
    }

    #[test]
    fn test_header_errors() {
        assert!(matches!(Sprite::parse(""), Err(LoadError::MissingHeader)));
        assert!(matches!(
            Sprite::parse("x 2\nab\n"),
            Err(LoadError::BadHeader(_))
        ));
        assert!(matches!(
            Sprite::parse("3\nabc\n"),
            Err(LoadError::BadHeader(_))
        ));
        assert!(matches!(
            Sprite::parse("2 1 junk\nab\n"),
            Err(LoadError::BadHeader(_))
        ));
        assert!(matches!(
            Sprite::parse("0 1\n\n"),
            Err(LoadError::ZeroSize {
                width: 0,
                height: 1
            })
        ));
    }

    #[test]
    fn test_short_read_is_an_error() {
        let err = Sprite::parse("2 3\nab\ncd\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingRows {
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_huge_height_is_a_short_read() {
        let err = Sprite::parse("2 1000000000000000000\nab\n").unwrap_err();
        assert!(matches!(err, LoadError::MissingRows { found: 1, .. }));
    }

    #[test]
    fn test_row_width_must_match_header() {
        let err = Sprite::parse("3 2\nabc\nab\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::RowLength {
                row: 1,
                expected: 3,
                found: 2
            }
        ));

        let err = Sprite::parse("4 1\nabc\n").unwrap_err();
        assert!(matches!(err, LoadError::RowLength { expected: 4, .. }));
    }

    #[test]
    fn test_mirror_swaps_brackets() {
        let sprite = Sprite::from_rows(&["[(</{ab"]).unwrap();
        let mirrored = sprite.mirror();
        assert_eq!(mirrored.row(0).iter().collect::<String>(), "ba}\\>)]");
    }

    #[test]
    fn test_find_marker_scans_rows_first() {
        let sprite = Sprite::from_rows(&["..@", "@.."]).unwrap();
        assert_eq!(sprite.find('@'), Some((2, 0)));
        assert_eq!(sprite.find('#'), None);
    }

    #[test]
    fn test_read_from_reader() {
        let sprite = Sprite::read_from("1 2\nx\ny\n".as_bytes()).unwrap();
        assert_eq!(sprite.height(), 2);
        assert_eq!(sprite.get(0, 1), Some('y'));
        assert_eq!(sprite.get(1, 0), None);
    }

    #[test]
    #[should_panic(expected = "outside 2x1 sprite")]
    fn test_index_out_of_range_panics() {
        let sprite = Sprite::from_rows(&["ab"]).unwrap();
        let _ = sprite[(2, 0)];
    }
}
