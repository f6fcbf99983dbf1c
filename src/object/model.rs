use std::sync::Arc;

use crate::{
    animation::model::Progress,
    foundation::core::Point,
    foundation::ids::ObjectId,
    object::media::{Image, Text},
    object::shapes::{Circle, Rectangle},
    render::ops::DrawOp,
};

/// Caller-supplied draw routine for [`Render::Custom`].
pub type RenderFn = Arc<dyn Fn(&Object, &mut Vec<DrawOp>) + Send + Sync>;

/// Replaceable render capability of an object.
#[derive(Clone, Default)]
pub enum Render {
    /// Kind default: outline ring / traced perimeter, text run, texture.
    #[default]
    Outline,
    /// Like [`Render::Outline`], with shape interiors painted.
    Filled,
    /// Draws nothing.
    Hidden,
    /// Caller-provided routine.
    Custom(RenderFn),
}

impl Render {
    /// Wrap a closure as a render capability.
    pub fn custom(f: impl Fn(&Object, &mut Vec<DrawOp>) + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    /// Whether this capability draws nothing.
    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }
}

impl std::fmt::Debug for Render {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Outline => f.write_str("Outline"),
            Self::Filled => f.write_str("Filled"),
            Self::Hidden => f.write_str("Hidden"),
            Self::Custom(func) => f
                .debug_tuple("Custom")
                .field(&Arc::as_ptr(func).cast::<()>())
                .finish(),
        }
    }
}

/// Kind-specific state of an object.
#[derive(Clone, Debug, PartialEq)]
pub enum ObjectKind {
    /// Circle revealed by a clockwise sweep.
    Circle(Circle),
    /// Rectangle revealed by tracing its perimeter.
    Rectangle(Rectangle),
    /// Text revealed character by character.
    Text(Text),
    /// Texture revealed by fading in.
    Image(Image),
    /// Placeholder with nothing to draw (used by wait animations).
    Empty,
}

impl ObjectKind {
    /// Short kind name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Circle(_) => "circle",
            Self::Rectangle(_) => "rectangle",
            Self::Text(_) => "text",
            Self::Image(_) => "image",
            Self::Empty => "empty",
        }
    }
}

/// A visual object: identity, position, kind state, and render capability.
///
/// Objects live in a [`crate::Stage`]; the scene only holds handles to them.
#[derive(Clone, Debug)]
pub struct Object {
    id: ObjectId,
    /// Anchor position (circle center, rectangle/text/image top-left).
    pub position: Point,
    /// Kind-specific state.
    pub kind: ObjectKind,
    /// Current render capability.
    pub render: Render,
}

impl Object {
    pub(crate) fn new(id: ObjectId, position: Point, kind: ObjectKind) -> Self {
        Self {
            id,
            position,
            kind,
            render: Render::default(),
        }
    }

    /// Object identity.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Apply the kind's default reveal for the given progress.
    pub fn reveal(&mut self, p: &Progress) {
        match &mut self.kind {
            ObjectKind::Circle(c) => c.reveal(p.t),
            ObjectKind::Rectangle(r) => r.reveal(p.t),
            ObjectKind::Text(t) => t.reveal(p),
            ObjectKind::Image(i) => i.reveal(p.t),
            ObjectKind::Empty => {}
        }
    }

    /// Append this object's draw commands to `out` using its render capability.
    pub fn draw(&self, out: &mut Vec<DrawOp>) {
        let filled = match &self.render {
            Render::Hidden => return,
            Render::Custom(f) => return f(self, out),
            Render::Outline => false,
            Render::Filled => true,
        };
        match &self.kind {
            ObjectKind::Circle(c) => c.draw(self.position, filled, out),
            ObjectKind::Rectangle(r) => r.draw(self.position, filled, out),
            ObjectKind::Text(t) => t.draw(self.position, out),
            ObjectKind::Image(i) => i.draw(self.position, out),
            ObjectKind::Empty => {}
        }
    }

    /// Circle state, if this is a circle.
    pub fn as_circle(&self) -> Option<&Circle> {
        match &self.kind {
            ObjectKind::Circle(c) => Some(c),
            _ => None,
        }
    }

    /// Mutable circle state, if this is a circle.
    pub fn as_circle_mut(&mut self) -> Option<&mut Circle> {
        match &mut self.kind {
            ObjectKind::Circle(c) => Some(c),
            _ => None,
        }
    }

    /// Rectangle state, if this is a rectangle.
    pub fn as_rectangle(&self) -> Option<&Rectangle> {
        match &self.kind {
            ObjectKind::Rectangle(r) => Some(r),
            _ => None,
        }
    }

    /// Mutable rectangle state, if this is a rectangle.
    pub fn as_rectangle_mut(&mut self) -> Option<&mut Rectangle> {
        match &mut self.kind {
            ObjectKind::Rectangle(r) => Some(r),
            _ => None,
        }
    }

    /// Text state, if this is a text object.
    pub fn as_text(&self) -> Option<&Text> {
        match &self.kind {
            ObjectKind::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Mutable text state, if this is a text object.
    pub fn as_text_mut(&mut self) -> Option<&mut Text> {
        match &mut self.kind {
            ObjectKind::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Image state, if this is an image.
    pub fn as_image(&self) -> Option<&Image> {
        match &self.kind {
            ObjectKind::Image(i) => Some(i),
            _ => None,
        }
    }

    /// Mutable image state, if this is an image.
    pub fn as_image_mut(&mut self) -> Option<&mut Image> {
        match &mut self.kind {
            ObjectKind::Image(i) => Some(i),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/object/model.rs"]
mod tests;
