use thiserror::Error;

/// Characters introduced at each level, in teaching order.
pub const HEBREW_CHUNKS: &[&str] = &[
    "חכ", "לג", "ךד", "ףש", "יע", "ור", "ןק", "ם", "פ", "טא", "צה", "תב", "ץס", ".ז", "מנ", ",",
];

pub const LEVEL_PREFIX: &str = "Level ";
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LevelTableError {
    #[error("level table has no chunks")]
    Empty,
    #[error("chunk for level {0} is empty")]
    EmptyChunk(usize),
    #[error("chunk for level {0} contains whitespace")]
    Whitespace(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelTable {
    chunks: Vec<String>,
}

impl LevelTable {
    /// Build a table from ordered, non-empty chunks.
    pub fn new<I, S>(chunks: I) -> Result<Self, LevelTableError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let chunks: Vec<String> = chunks.into_iter().map(Into::into).collect();
        if chunks.is_empty() {
            return Err(LevelTableError::Empty);
        }
        for (idx, chunk) in chunks.iter().enumerate() {
            if chunk.is_empty() {
                return Err(LevelTableError::EmptyChunk(idx));
            }
            if chunk.chars().any(char::is_whitespace) {
                return Err(LevelTableError::Whitespace(idx));
            }
        }
        Ok(Self { chunks })
    }

    pub fn hebrew() -> Self {
        Self {
            chunks: HEBREW_CHUNKS.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn last_index(&self) -> usize {
        self.chunks.len() - 1
    }

    pub fn chunk(&self, level: usize) -> Option<&str> {
        self.chunks.get(level).map(String::as_str)
    }

    /// All characters from level 0 through `level`, concatenated in table order.
    /// Out-of-range levels (including negative ones) yield an empty string.
    pub fn cumulative_set(&self, level: i64) -> String {
        let Ok(level) = usize::try_from(level) else {
            return String::new();
        };
        if level >= self.chunks.len() {
            return String::new();
        }
        self.chunks[..=level].concat()
    }

    pub fn clamp_level(&self, level: usize) -> usize {
        level.min(self.last_index())
    }

    /// Previous, current and next level names and chunks relative to `level`.
    pub fn descriptors(&self, level: usize) -> LevelDescriptors {
        let level = self.clamp_level(level);

        let previous = if level > 0 {
            LevelDescriptor::at(level - 1, &self.chunks[level - 1])
        } else {
            LevelDescriptor::not_available()
        };
        let next = if level < self.last_index() {
            LevelDescriptor::at(level + 1, &self.chunks[level + 1])
        } else {
            LevelDescriptor::not_available()
        };

        LevelDescriptors {
            previous,
            current: LevelDescriptor::at(level, &self.chunks[level]),
            next,
        }
    }
}

impl Default for LevelTable {
    fn default() -> Self {
        Self::hebrew()
    }
}

/// "Level N" with N the 1-based position of `level`.
pub fn level_name(level: usize) -> String {
    format!("{LEVEL_PREFIX}{}", level + 1)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelDescriptor {
    pub name: String,
    pub character_set: String,
}

impl LevelDescriptor {
    fn at(level: usize, chunk: &str) -> Self {
        Self {
            name: level_name(level),
            character_set: chunk.to_string(),
        }
    }

    fn not_available() -> Self {
        Self {
            name: NOT_AVAILABLE.to_string(),
            character_set: NOT_AVAILABLE.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelDescriptors {
    pub previous: LevelDescriptor,
    pub current: LevelDescriptor,
    pub next: LevelDescriptor,
}
