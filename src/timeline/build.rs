use std::collections::BTreeMap;

use crate::{
    foundation::core::Point,
    foundation::error::{ReelError, ReelResult},
    object::model::Render,
    resources::loader::ResourceLoader,
    scene::scheduler::Scene,
    stage::arena::{AnimRef, ObjectRef, Stage},
    timeline::doc::{ObjectDoc, RenderDoc, StepDoc, TimelineDoc},
};

/// A document turned into live entities, ready to play.
#[derive(Debug)]
pub struct BuiltTimeline {
    /// Owner of every object and animation.
    pub stage: Stage,
    /// Scene with every top-level step queued.
    pub scene: Scene,
    /// Object handles by declared name.
    pub objects: BTreeMap<String, ObjectRef>,
    /// Animation handles by declared step name.
    pub steps: BTreeMap<String, AnimRef>,
}

impl From<RenderDoc> for Render {
    fn from(doc: RenderDoc) -> Self {
        match doc {
            RenderDoc::Outline => Render::Outline,
            RenderDoc::Filled => Render::Filled,
            RenderDoc::Hidden => Render::Hidden,
        }
    }
}

fn point(xy: [f64; 2]) -> Point {
    Point::new(xy[0], xy[1])
}

impl TimelineDoc {
    /// Validate, load resources, create every object and animation, and queue the steps.
    #[tracing::instrument(skip_all, fields(title = %self.scene.title))]
    pub fn build(&self, loader: &mut dyn ResourceLoader) -> ReelResult<BuiltTimeline> {
        self.validate()?;

        let mut stage = Stage::new();
        let mut scene = Scene::new(self.scene.clone())?;
        let mut objects = BTreeMap::new();
        let mut steps = BTreeMap::new();

        for doc in &self.objects {
            let r = build_object(&mut stage, doc, loader)?;
            objects.insert(doc.name().to_owned(), r);
        }

        let mut builder = StepBuilder {
            stage: &mut stage,
            objects: &objects,
            steps: &mut steps,
        };
        let mut queued = Vec::with_capacity(self.steps.len());
        for step in &self.steps {
            queued.push(builder.build(step)?);
        }
        for anim in queued {
            scene.play(anim);
        }

        tracing::debug!(
            objects = stage.object_count(),
            animations = stage.animation_count(),
            "timeline built"
        );
        Ok(BuiltTimeline {
            stage,
            scene,
            objects,
            steps,
        })
    }
}

fn build_object(
    stage: &mut Stage,
    doc: &ObjectDoc,
    loader: &mut dyn ResourceLoader,
) -> ReelResult<ObjectRef> {
    let r = match doc {
        ObjectDoc::Circle {
            center,
            radius,
            outline_thickness,
            segments,
            inner_color,
            outline_color,
            render,
            ..
        } => {
            let r = stage.circle(point(*center), *radius)?;
            let obj = stage.try_object_mut(r)?;
            obj.render = (*render).into();
            if let Some(c) = obj.as_circle_mut() {
                c.outline_thickness = outline_thickness.unwrap_or(c.outline_thickness);
                c.segments = segments.unwrap_or(c.segments);
                c.inner_color = inner_color.unwrap_or(c.inner_color);
                c.outline_color = outline_color.unwrap_or(c.outline_color);
            }
            r
        }
        ObjectDoc::Rectangle {
            position,
            width,
            height,
            outline_thickness,
            inner_color,
            outline_color,
            render,
            ..
        } => {
            let r = stage.rectangle(point(*position), *width, *height)?;
            style_rectangle(stage, r, *outline_thickness, *inner_color, *outline_color, *render)?;
            r
        }
        ObjectDoc::Square {
            position,
            side,
            outline_thickness,
            inner_color,
            outline_color,
            render,
            ..
        } => {
            let r = stage.square(point(*position), *side)?;
            style_rectangle(stage, r, *outline_thickness, *inner_color, *outline_color, *render)?;
            r
        }
        ObjectDoc::Text {
            position,
            content,
            font_size,
            color,
            font,
            reveal_interval,
            ..
        } => {
            let font = font.as_deref().map(|p| loader.load_font(p)).transpose()?;
            let r = stage.text(point(*position), content.clone())?;
            if let Some(t) = stage.try_object_mut(r)?.as_text_mut() {
                t.font = font;
                t.font_size = font_size.unwrap_or(t.font_size);
                t.color = color.unwrap_or(t.color);
                t.reveal_interval = reveal_interval.unwrap_or(t.reveal_interval);
            }
            r
        }
        ObjectDoc::Image {
            position,
            source,
            scale,
            ..
        } => {
            let texture = loader.load_texture(source)?;
            let r = stage.image(point(*position), texture)?;
            if let Some(i) = stage.try_object_mut(r)?.as_image_mut() {
                i.scale = scale.unwrap_or(i.scale);
            }
            r
        }
    };
    Ok(r)
}

fn style_rectangle(
    stage: &mut Stage,
    r: ObjectRef,
    outline_thickness: Option<f64>,
    inner_color: Option<crate::foundation::core::Rgba8>,
    outline_color: Option<crate::foundation::core::Rgba8>,
    render: RenderDoc,
) -> ReelResult<()> {
    let obj = stage.try_object_mut(r)?;
    obj.render = render.into();
    if let Some(rect) = obj.as_rectangle_mut() {
        rect.outline_thickness = outline_thickness.unwrap_or(rect.outline_thickness);
        rect.inner_color = inner_color.unwrap_or(rect.inner_color);
        rect.outline_color = outline_color.unwrap_or(rect.outline_color);
    }
    Ok(())
}

struct StepBuilder<'a> {
    stage: &'a mut Stage,
    objects: &'a BTreeMap<String, ObjectRef>,
    steps: &'a mut BTreeMap<String, AnimRef>,
}

impl StepBuilder<'_> {
    fn object(&self, name: &str) -> ReelResult<ObjectRef> {
        self.objects
            .get(name)
            .copied()
            .ok_or_else(|| ReelError::validation(format!("unknown object '{name}'")))
    }

    fn build(&mut self, step: &StepDoc) -> ReelResult<AnimRef> {
        let anim = match step {
            StepDoc::Reveal {
                target,
                duration,
                ease,
                resettable,
                ..
            } => {
                let target = self.object(target)?;
                let anim = match duration {
                    Some(d) => self.stage.animate_for(target, *d)?,
                    None => self.stage.animate(target)?,
                };
                let a = self.stage.try_animation_mut(anim)?;
                a.set_ease(*ease)?;
                a.set_resettable(*resettable);
                anim
            }
            StepDoc::Wait { duration, .. } => self.stage.wait(*duration)?,
            StepDoc::Disappear {
                target, resettable, ..
            } => {
                let target = self.object(target)?;
                let anim = self.stage.disappear(target)?;
                self.stage
                    .try_animation_mut(anim)?
                    .set_resettable(*resettable);
                anim
            }
            StepDoc::Move {
                step: inner,
                to,
                duration,
                ease,
                ..
            } => {
                let inner = self.build(inner)?;
                let anim = self.stage.move_to(inner, point(*to), *duration)?;
                self.stage.try_animation_mut(anim)?.set_ease(*ease)?;
                anim
            }
            StepDoc::Sync { steps, .. } => {
                let children = steps
                    .iter()
                    .map(|s| self.build(s))
                    .collect::<ReelResult<Vec<_>>>()?;
                self.stage.sync(&children)?
            }
            StepDoc::Replay { step: name } => {
                return self.steps.get(name).copied().ok_or_else(|| {
                    ReelError::validation(format!("replay refers to unknown step '{name}'"))
                });
            }
        };

        if let Some(name) = step.name() {
            self.steps.insert(name.to_owned(), anim);
        }
        Ok(anim)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/build.rs"]
mod tests;
