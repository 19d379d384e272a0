//! Object-strip generation.
//!
//! A strip is a run of objects laid out left to right at a constant height.
//! Each step draws an offset, advances the x cursor by it, and tags the new
//! end coordinate with a fresh identifier. The result renders as a single
//! `<object ... />` element.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::context::ServiceContext;
use crate::ports::{IdGenerator, OffsetSource};

/// Smallest step a random draw can produce.
pub const OFFSET_MIN: i64 = 200;
/// Largest step a random draw can produce.
pub const OFFSET_MAX: i64 = 300;
/// Step used by [`Variant::Fixed`] in place of the random draw.
pub const FORCED_OFFSET: i64 = 640;

/// Which flavour of strip to produce.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Element id 60, every step forced to 640.
    #[default]
    Fixed,
    /// Element id 12, every step drawn from 200..=300.
    Scatter,
}

impl Variant {
    /// Value of the emitted `id` attribute.
    #[must_use]
    pub const fn element_id(self) -> u32 {
        match self {
            Self::Fixed => 60,
            Self::Scatter => 12,
        }
    }

    /// Starting cursor used when the caller gives none.
    #[must_use]
    pub const fn default_start(self) -> Position {
        match self {
            Self::Fixed => Position { x: -500, y: 324 },
            Self::Scatter => Position { x: 100, y: 300 },
        }
    }

    /// Number of objects generated when the caller gives no count.
    #[must_use]
    pub const fn default_count(self) -> i64 {
        match self {
            Self::Fixed | Self::Scatter => 10,
        }
    }

    /// Turn a drawn offset into the step actually taken.
    ///
    /// `Fixed` discards the draw. The draw still happens so that recorded
    /// cassettes line up across variants.
    const fn resolve_offset(self, drawn: i64) -> i64 {
        match self {
            Self::Fixed => FORCED_OFFSET,
            Self::Scatter => drawn,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed => write!(f, "fixed"),
            Self::Scatter => write!(f, "scatter"),
        }
    }
}

/// An integer point on the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: i64,
    /// Vertical coordinate.
    pub y: i64,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Parameters for one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Strip flavour.
    pub variant: Variant,
    /// Initial x cursor. The first emitted x is `start_x + offset`.
    pub start_x: i64,
    /// Height shared by every object.
    pub start_y: i64,
    /// Objects to generate; zero or negative yields an empty strip.
    pub count: i64,
}

impl GenerateRequest {
    /// Request using every default of `variant`.
    #[must_use]
    pub const fn defaults(variant: Variant) -> Self {
        let start = variant.default_start();
        Self { variant, start_x: start.x, start_y: start.y, count: variant.default_count() }
    }
}

impl Default for GenerateRequest {
    fn default() -> Self {
        Self::defaults(Variant::default())
    }
}

/// A generated strip, ready to render.
///
/// `coordinates[i]` and `uids[i]` were produced by the same step; nothing
/// else ties them together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectNode {
    /// Value of the `id` attribute.
    pub element_id: u32,
    /// End coordinate of every step, in generation order.
    pub coordinates: Vec<Position>,
    /// One identifier per step, in generation order.
    pub uids: Vec<String>,
}

impl ObjectNode {
    /// The `coordinates` attribute value: `(x,y)` entries joined by `", "`.
    #[must_use]
    pub fn coordinates_attr(&self) -> String {
        self.coordinates.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
    }

    /// The `uid` attribute value: identifiers joined by `", "`.
    #[must_use]
    pub fn uid_attr(&self) -> String {
        self.uids.join(", ")
    }
}

impl fmt::Display for ObjectNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<object id="{}" coordinates="{}" uid="{}" />"#,
            self.element_id,
            self.coordinates_attr(),
            self.uid_attr()
        )
    }
}

/// Generate a strip, drawing from the given ports.
///
/// # Errors
///
/// Returns an error if an x-coordinate overflows `i64`.
pub fn generate(
    request: &GenerateRequest,
    offsets: &dyn OffsetSource,
    ids: &dyn IdGenerator,
) -> Result<ObjectNode, String> {
    let mut coordinates = Vec::new();
    let mut uids = Vec::new();
    let mut current_x = request.start_x;

    for step in 0..request.count.max(0) {
        let offset = request.variant.resolve_offset(offsets.draw(OFFSET_MIN, OFFSET_MAX));
        let end_x = current_x.checked_add(offset).ok_or_else(|| {
            format!("x-coordinate overflow at step {step}: {current_x} + {offset}")
        })?;
        coordinates.push(Position { x: end_x, y: request.start_y });
        uids.push(ids.generate_id());
        current_x = end_x;
    }

    Ok(ObjectNode { element_id: request.variant.element_id(), coordinates, uids })
}

/// Generate a strip using the context's ports and render it.
///
/// # Errors
///
/// Returns an error if an x-coordinate overflows `i64`.
pub fn generate_object_node(
    request: &GenerateRequest,
    ctx: &ServiceContext,
) -> Result<String, String> {
    generate(request, ctx.offsets.as_ref(), ctx.id_gen.as_ref()).map(|node| node.to_string())
}
