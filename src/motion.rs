//! Entrance animation parameters and the reduced-motion policy that gates them.
//!
//! Sections describe an [`Entrance`] (where they start and how they move) and
//! ask the current [`MotionPolicy`] for the [`Frame`] to render. With reduced
//! motion every entrance collapses to the rest pose with no transition, so a
//! section looks the same before and after it is revealed.

use std::fmt::Write;

/// A visual state of an element: opacity plus a translate/scale transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

impl Pose {
    /// Fully opaque, natural position, natural size.
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    pub const HIDDEN: Pose = Pose {
        opacity: 0.0,
        ..Pose::REST
    };

    fn transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.x, self.y, self.scale
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    EaseOut,
    EaseInOut,
    Linear,
}

impl Easing {
    fn css(self) -> &'static str {
        match self {
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
            Easing::Linear => "linear",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Transition {
    pub const NONE: Transition = Transition {
        duration_ms: 0,
        delay_ms: 0,
        easing: Easing::Linear,
    };

    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms: duration_ms.max(1),
            delay_ms: 0,
            easing: Easing::default(),
        }
    }

    pub fn is_instant(&self) -> bool {
        self.duration_ms == 0 && self.delay_ms == 0
    }

    fn css(&self, property: &str) -> String {
        format!(
            "{property} {}ms {} {}ms",
            self.duration_ms,
            self.easing.css(),
            self.delay_ms
        )
    }
}

/// Where an element starts before it is revealed, and how it gets to rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub hidden: Pose,
    pub shown: Pose,
    pub transition: Transition,
}

impl Entrance {
    fn from_hidden(hidden: Pose, duration_ms: u32) -> Self {
        Self {
            hidden,
            shown: Pose::REST,
            transition: Transition::new(duration_ms),
        }
    }

    /// Fade in while rising from `offset` px below (negative drops from above).
    pub fn fade_up(offset: f32) -> Self {
        Self::from_hidden(
            Pose {
                y: offset,
                ..Pose::HIDDEN
            },
            600,
        )
    }

    /// Fade in while sliding horizontally from `offset` px.
    pub fn slide_x(offset: f32) -> Self {
        Self::from_hidden(
            Pose {
                x: offset,
                ..Pose::HIDDEN
            },
            600,
        )
    }

    pub fn fade() -> Self {
        Self::from_hidden(Pose::HIDDEN, 800)
    }

    /// Fade in while growing from `scale`.
    pub fn pop(scale: f32) -> Self {
        Self::from_hidden(
            Pose {
                scale,
                ..Pose::HIDDEN
            },
            400,
        )
    }

    pub fn duration_ms(mut self, duration_ms: u32) -> Self {
        self.transition.duration_ms = duration_ms.max(1);
        self
    }

    pub fn delay_ms(mut self, delay_ms: u32) -> Self {
        self.transition.delay_ms = delay_ms;
        self
    }

    /// Push the start back by `index * step_ms`, for lists that cascade in.
    pub fn stagger(mut self, index: usize, step_ms: u32) -> Self {
        let extra = u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms);
        self.transition.delay_ms = self.transition.delay_ms.saturating_add(extra);
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.transition.easing = easing;
        self
    }
}

/// What to render right now: a pose, how to get there, and an optional bar width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub pose: Pose,
    pub transition: Transition,
    pub width_pct: Option<f32>,
}

impl Frame {
    fn still(pose: Pose) -> Self {
        Self {
            pose,
            transition: Transition::NONE,
            width_pct: None,
        }
    }

    /// Inline CSS for the frame.
    pub fn style(&self) -> String {
        let mut style = format!(
            "opacity: {}; transform: {};",
            self.pose.opacity,
            self.pose.transform()
        );
        if let Some(width) = self.width_pct {
            let _ = write!(style, " width: {width}%;");
        }
        if self.transition.is_instant() {
            style.push_str(" transition: none;");
        } else {
            let mut props = vec![
                self.transition.css("opacity"),
                self.transition.css("transform"),
            ];
            if self.width_pct.is_some() {
                props.push(self.transition.css("width"));
            }
            let _ = write!(style, " transition: {};", props.join(", "));
        }
        style
    }
}

/// Parallax offsets for the hero as the page scrolls away from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    pub offset_y: f32,
    pub opacity: f32,
}

impl Parallax {
    pub const NONE: Parallax = Parallax {
        offset_y: 0.0,
        opacity: 1.0,
    };
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotionPolicy {
    reduce: bool,
}

impl MotionPolicy {
    pub fn new(reduce: bool) -> Self {
        Self { reduce }
    }

    pub fn should_reduce_motion(&self) -> bool {
        self.reduce
    }

    /// Frame for a reveal-once entrance. Under reduced motion `visible` is
    /// ignored and the element sits at rest.
    pub fn frame(&self, entrance: &Entrance, visible: bool) -> Frame {
        if self.reduce {
            return Frame::still(Pose::REST);
        }
        Frame {
            pose: if visible {
                entrance.shown
            } else {
                entrance.hidden
            },
            transition: entrance.transition,
            width_pct: None,
        }
    }

    /// Frame for something that comes and goes with state, like the theme
    /// icons. Reduced motion still follows `present`, just without moving.
    pub fn presence(&self, entrance: &Entrance, present: bool) -> Frame {
        if self.reduce {
            return Frame::still(if present { Pose::REST } else { Pose::HIDDEN });
        }
        self.frame(entrance, present)
    }

    /// Skill level bar that fills from zero to `level` percent once visible.
    pub fn bar(&self, level: u8, visible: bool, delay_ms: u32) -> Frame {
        let level = f32::from(level.min(100));
        if self.reduce {
            return Frame {
                width_pct: Some(level),
                ..Frame::still(Pose::REST)
            };
        }
        let mut transition = Transition::new(1200);
        transition.delay_ms = delay_ms;
        Frame {
            pose: Pose::REST,
            transition,
            width_pct: Some(if visible { level } else { 0.0 }),
        }
    }

    pub fn parallax(&self, scroll_y: f64) -> Parallax {
        if self.reduce {
            return Parallax::NONE;
        }
        let scroll_y = scroll_y.max(0.0) as f32;
        Parallax {
            offset_y: scroll_y.min(500.0) * 0.3,
            opacity: (1.0 - scroll_y / 300.0).clamp(0.0, 1.0),
        }
    }

    /// Hover micro-interaction classes, dropped under reduced motion.
    pub fn hover(&self, class: &'static str) -> &'static str {
        if self.reduce {
            ""
        } else {
            class
        }
    }

    /// Looping decorative animation classes, dropped under reduced motion.
    pub fn ambient(&self, class: &'static str) -> &'static str {
        self.hover(class)
    }
}
