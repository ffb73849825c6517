//! Entity module - positioned objects owning named sprite frames

use crate::sprite::{LoadError, Sprite};

/// A named sprite frame (e.g. a posture variant).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub name: String,
    pub sprite: Sprite,
}

/// A positioned object with one or more frames.
///
/// Coordinates are grid cells, (0, 0) top-left. The active frame is chosen
/// by the caller on every read, driven by a closed state enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    x: usize,
    y: usize,
    frames: Vec<Frame>,
}

impl Entity {
    pub fn builder() -> EntityBuilder {
        EntityBuilder::default()
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn move_to(&mut self, x: usize, y: usize) {
        self.x = x;
        self.y = y;
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The glyph rectangle of frame `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range; frame selection is a programming
    /// decision, never external input.
    pub fn compose(&self, index: usize) -> &Sprite {
        assert!(
            index < self.frames.len(),
            "frame index {index} out of range ({} frames)",
            self.frames.len()
        );
        &self.frames[index].sprite
    }

    /// Mirror every frame so all postures keep facing the same way.
    pub fn mirror(&mut self) {
        for frame in &mut self.frames {
            frame.sprite = frame.sprite.mirror();
        }
    }

    /// Grid position of the first `marker` glyph in frame `index`.
    pub fn find_marker(&self, index: usize, marker: char) -> Option<(usize, usize)> {
        self.compose(index)
            .find(marker)
            .map(|(mx, my)| (self.x + mx, self.y + my))
    }

    /// Whether every frame lies fully inside a `width` x `height` grid.
    pub fn fits_within(&self, width: usize, height: usize) -> bool {
        self.frames.iter().all(|f| {
            self.x + f.sprite.width() <= width && self.y + f.sprite.height() <= height
        })
    }
}

/// Collects an ordered list of named frame textures and builds the entity in
/// one step. Any failing source fails the whole build.
#[derive(Default)]
pub struct EntityBuilder {
    x: usize,
    y: usize,
    sources: Vec<(String, String)>,
}

impl EntityBuilder {
    pub fn at(mut self, x: usize, y: usize) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Add a frame from texture text.
    pub fn frame(mut self, name: impl Into<String>, texture: impl Into<String>) -> Self {
        self.sources.push((name.into(), texture.into()));
        self
    }

    pub fn build(self) -> Result<Entity, LoadError> {
        if self.sources.is_empty() {
            return Err(LoadError::EmptyEntity);
        }

        let mut frames = Vec::with_capacity(self.sources.len());
        for (name, texture) in self.sources {
            let sprite = match Sprite::parse(&texture) {
                Ok(sprite) => sprite,
                Err(err) => {
                    return Err(LoadError::Frame {
                        name,
                        source: Box::new(err),
                    })
                }
            };
            frames.push(Frame { name, sprite });
        }

        Ok(Entity {
            x: self.x,
            y: self.y,
            frames,
        })
    }
}
