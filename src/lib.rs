//! Scenery is the procedural geometry core behind animated vector backdrops.
//!
//! Everything here is pure, synchronous, and deterministic for fixed inputs:
//!
//! - Sample parametric curves with [`generate_points`], or the ready-made
//!   [`gen_circle_path`] and [`gen_rect_path`]
//! - Grow seeded lightning with [`generate_lightning_path`] and
//!   [`generate_lightning_with_branches`]
//! - Parse SVG markup into absolute commands with [`parse_svg`], then remap them with
//!   [`transform_svg_commands`] or a [`PerspectiveTransform`]
//! - Map brightness to glow colours with [`brightness_to_color`]
//!
//! [`GeometryCache`], [`ColorCache`] and [`Memoized`] add LRU/TTL memoization for per-frame
//! callers. They use interior mutability and are not `Sync`; keep one per thread.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod color;
pub(crate) mod effects;
pub(crate) mod geometry;
pub(crate) mod memo;
pub(crate) mod svg;
pub(crate) mod transform;

pub use crate::foundation::core::{Bounds, GeneratedPoint, Point, Rect, Size, Vec2};
pub use crate::foundation::error::{SceneryError, SceneryResult};

pub use crate::animation::ease::Ease;
pub use crate::color::cache::ColorCache;
pub use crate::color::glow::{GlowColor, Hsla, brightness_to_color, brightness_to_hsl};
pub use crate::color::hex::{Rgb8, interpolate_color};
pub use crate::effects::meteor::{MeteorTrailConfig, TrailSample, meteor_trail};
pub use crate::geometry::cache::GeometryCache;
pub use crate::geometry::lightning::{
    LightningBolt, LightningBranchConfig, LightningConfig, MAX_LIGHTNING_SEGMENTS,
    generate_lightning_path, generate_lightning_with_branches,
};
pub use crate::geometry::points::{EquationConfig, ParametricCurve, generate_points};
pub use crate::geometry::quad::Quad;
pub use crate::geometry::shapes::{
    CircleConfig, CircleEquation, RoundedRectConfig, RoundedRectEquation, gen_circle_path,
    gen_rect_path,
};
pub use crate::memo::cache::{CacheStats, MemoCache, MemoOpts};
pub use crate::memo::key::cache_key;
pub use crate::memo::memoized::Memoized;
pub use crate::svg::model::{
    ArcCenter, ParsedPath, ParsedSvgDocument, SvgCommand, compute_bounds,
};
pub use crate::svg::parse::{parse_path_data, parse_svg, read_svg_file};
pub use crate::svg::transform::transform_svg_commands;
pub use crate::transform::perspective::{
    HorizontalAnchor, PerspectiveConfig, PerspectiveFactors, PerspectiveTransform, ScaleAnchor,
    VerticalAnchor, apply_perspective_transform,
};
