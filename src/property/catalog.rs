//! Representative catalogue of animatable properties.
//!
//! Each entry is only a key path plus a value type and the node categories it
//! is legal on. Generic node properties are legal on every category because
//! specialised nodes inherit them.

use crate::foundation::core::{Affine, BezPath, Color, Point, Rect, Size, Vec2};
use crate::property::key::{NodeCategories, Property};

const ANY: NodeCategories = NodeCategories::all();
const SHAPE: NodeCategories = NodeCategories::SHAPE;
const EMITTER: NodeCategories = NodeCategories::EMITTER;
const GRADIENT: NodeCategories = NodeCategories::GRADIENT;
const REPLICATOR: NodeCategories = NodeCategories::REPLICATOR;
const TEXT: NodeCategories = NodeCategories::TEXT;

// Generic node.

/// Node opacity in `[0, 1]`.
pub const OPACITY: Property<f64> = Property::new("opacity", ANY);
/// Node position in parent coordinates.
pub const POSITION: Property<Point> = Property::new("position", ANY);
/// Node bounds.
pub const BOUNDS: Property<Rect> = Property::new("bounds", ANY);
/// Node bounds size.
pub const BOUNDS_SIZE: Property<Size> = Property::new("bounds.size", ANY);
/// Anchor point in unit coordinates.
pub const ANCHOR_POINT: Property<Point> = Property::new("anchorPoint", ANY);
/// Background fill.
pub const BACKGROUND_COLOR: Property<Color> = Property::new("backgroundColor", ANY);
/// Corner radius.
pub const CORNER_RADIUS: Property<f64> = Property::new("cornerRadius", ANY);
/// Border width.
pub const BORDER_WIDTH: Property<f64> = Property::new("borderWidth", ANY);
/// Border color.
pub const BORDER_COLOR: Property<Color> = Property::new("borderColor", ANY);
/// Node transform.
pub const TRANSFORM: Property<Affine> = Property::new("transform", ANY);
/// Uniform scale component of the transform.
pub const TRANSFORM_SCALE: Property<f64> = Property::new("transform.scale", ANY);
/// Rotation component of the transform, in radians.
pub const TRANSFORM_ROTATION: Property<f64> = Property::new("transform.rotation.z", ANY);
/// Translation component of the transform.
pub const TRANSFORM_TRANSLATION: Property<Vec2> = Property::new("transform.translation", ANY);
/// Depth ordering.
pub const Z_POSITION: Property<f64> = Property::new("zPosition", ANY);
/// Shadow opacity.
pub const SHADOW_OPACITY: Property<f64> = Property::new("shadowOpacity", ANY);
/// Shadow blur radius.
pub const SHADOW_RADIUS: Property<f64> = Property::new("shadowRadius", ANY);
/// Shadow offset.
pub const SHADOW_OFFSET: Property<Vec2> = Property::new("shadowOffset", ANY);
/// Shadow color.
pub const SHADOW_COLOR: Property<Color> = Property::new("shadowColor", ANY);
/// Visibility flag. Not interpolatable.
pub const HIDDEN: Property<bool> = Property::non_animatable("hidden", ANY);

// Shape node.

/// Outline path.
pub const PATH: Property<BezPath> = Property::new("path", SHAPE);
/// Fill color.
pub const FILL_COLOR: Property<Color> = Property::new("fillColor", SHAPE);
/// Stroke color.
pub const STROKE_COLOR: Property<Color> = Property::new("strokeColor", SHAPE);
/// Stroke width.
pub const LINE_WIDTH: Property<f64> = Property::new("lineWidth", SHAPE);
/// Relative start of the stroked portion.
pub const STROKE_START: Property<f64> = Property::new("strokeStart", SHAPE);
/// Relative end of the stroked portion.
pub const STROKE_END: Property<f64> = Property::new("strokeEnd", SHAPE);
/// Dash phase.
pub const LINE_DASH_PHASE: Property<f64> = Property::new("lineDashPhase", SHAPE);
/// Miter limit.
pub const MITER_LIMIT: Property<f64> = Property::new("miterLimit", SHAPE);

// Emitter node.

/// Particle birth rate multiplier.
pub const BIRTH_RATE: Property<f32> = Property::new("birthRate", EMITTER);
/// Emitter center.
pub const EMITTER_POSITION: Property<Point> = Property::new("emitterPosition", EMITTER);
/// Emitter shape size.
pub const EMITTER_SIZE: Property<Size> = Property::new("emitterSize", EMITTER);
/// Particle lifetime multiplier.
pub const LIFETIME: Property<f32> = Property::new("lifetime", EMITTER);
/// Particle velocity multiplier.
pub const VELOCITY: Property<f32> = Property::new("velocity", EMITTER);
/// Particle spin multiplier.
pub const SPIN: Property<f32> = Property::new("spin", EMITTER);

// Gradient node.

/// Gradient stop colors.
pub const GRADIENT_COLORS: Property<Vec<Color>> = Property::new("colors", GRADIENT);
/// Gradient stop locations.
pub const GRADIENT_LOCATIONS: Property<Vec<f64>> = Property::new("locations", GRADIENT);
/// Gradient start point in unit coordinates.
pub const GRADIENT_START_POINT: Property<Point> = Property::new("startPoint", GRADIENT);
/// Gradient end point in unit coordinates.
pub const GRADIENT_END_POINT: Property<Point> = Property::new("endPoint", GRADIENT);

// Replicator node.

/// Number of copies.
pub const INSTANCE_COUNT: Property<u32> = Property::new("instanceCount", REPLICATOR);
/// Delay between copies.
pub const INSTANCE_DELAY: Property<f64> = Property::new("instanceDelay", REPLICATOR);
/// Transform applied cumulatively per copy.
pub const INSTANCE_TRANSFORM: Property<Affine> = Property::new("instanceTransform", REPLICATOR);
/// Base color multiplied into each copy.
pub const INSTANCE_COLOR: Property<Color> = Property::new("instanceColor", REPLICATOR);

// Text node.

/// Font size.
pub const FONT_SIZE: Property<f64> = Property::new("fontSize", TEXT);
/// Text color.
pub const FOREGROUND_COLOR: Property<Color> = Property::new("foregroundColor", TEXT);
