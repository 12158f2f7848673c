//! Flame motif: glows, tapered flame shapes and the layered composite.
//!
//! Everything here is built from stacked filled ellipses. Later ellipses
//! are drawn over earlier ones, so draw order is back to front.

use crate::render::{BoundingBox, Canvas};
use crate::types::palette::{CORE, DEEP_ORANGE, ORANGE, RED, WARM_YELLOW};
use crate::types::Colour;

/// Number of body ellipses in a flame shape.
const BODY_STEPS: u32 = 40;

/// Fraction of the base width lost by the top of the body.
const BODY_TAPER: f64 = 0.85;

/// Body ellipse half-height relative to its width.
const BODY_ASPECT: f64 = 0.4;

const TIP_STEPS: u32 = 20;
const TIP_WIDTH_RATIO: f64 = 0.15;
const TIP_HEIGHT_RATIO: f64 = 0.3;
const TIP_ASPECT: f64 = 0.5;

/// How glow alpha falls off towards the centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Falloff {
    /// `peak * r / radius`
    Linear,
    /// `peak * sqrt(r / radius)`
    Sqrt,
}

/// A soft glow made of concentric translucent rings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub radius: u32,
    pub step: u32,
    pub peak_alpha: u8,
    pub falloff: Falloff,
    pub colour: Colour,
}

impl Glow {
    /// Standalone radial glow: 2px rings, square-root falloff from alpha 80.
    pub fn radial(radius: u32, colour: Colour) -> Self {
        Self {
            radius,
            step: 2,
            peak_alpha: 80,
            falloff: Falloff::Sqrt,
            colour,
        }
    }

    /// Ring radii from the outside in, stopping before zero.
    pub fn radii(&self) -> impl Iterator<Item = u32> {
        (1..=self.radius).rev().step_by(self.step.max(1) as usize)
    }

    /// Alpha of the ring at radius `r`.
    pub fn alpha_at(&self, r: u32) -> u8 {
        if self.radius == 0 {
            return 0;
        }
        let fraction = r as f64 / self.radius as f64;
        let weight = match self.falloff {
            Falloff::Linear => fraction,
            Falloff::Sqrt => fraction.sqrt(),
        };
        (self.peak_alpha as f64 * weight) as u8
    }
}

/// Draw `glow` as concentric circles centred on `(cx, cy)`.
pub fn draw_radial_glow(canvas: &mut Canvas, cx: f64, cy: f64, glow: &Glow) {
    for r in glow.radii() {
        let colour = glow.colour.with_alpha(glow.alpha_at(r));
        canvas.fill_circle(cx, cy, r as f64, colour);
    }
}

/// One tapered flame silhouette rising from `(cx, base_y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlameShape {
    pub cx: f64,
    pub base_y: f64,
    pub width: f64,
    pub height: f64,
    pub bottom: Colour,
    pub top: Colour,
    /// 255 draws opaque; anything lower blends.
    pub alpha: u8,
}

impl FlameShape {
    /// Half-width of the pointed tip at its widest.
    pub fn tip_width(&self) -> f64 {
        self.width * TIP_WIDTH_RATIO
    }

    pub fn tip_height(&self) -> f64 {
        self.height * TIP_HEIGHT_RATIO
    }

    fn tip_colour(&self) -> Colour {
        if self.alpha < 255 {
            WARM_YELLOW.with_alpha(self.alpha.min(200))
        } else {
            WARM_YELLOW
        }
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        for i in 0..BODY_STEPS {
            let t = i as f64 / BODY_STEPS as f64;
            let w = self.width * (1.0 - t * BODY_TAPER);
            let y = self.base_y - self.height * t;
            let colour = self.bottom.lerp(self.top, t).with_alpha(self.alpha);
            canvas.fill_ellipse(
                BoundingBox::around(self.cx, y, w / 2.0, w * BODY_ASPECT),
                colour,
            );
        }

        let tip_y = self.base_y - self.height;
        let tip_colour = self.tip_colour();
        for i in 0..TIP_STEPS {
            let t = i as f64 / TIP_STEPS as f64;
            let w = self.tip_width() * (1.0 - t);
            let y = tip_y - self.tip_height() * t;
            canvas.fill_ellipse(BoundingBox::around(self.cx, y, w, w * TIP_ASPECT), tip_colour);
        }
    }
}

/// The full layered flame: glow, three nested shapes and a bright core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flame {
    pub cx: f64,
    pub base_y: f64,
    pub scale: f64,
}

impl Flame {
    pub fn new(cx: f64, base_y: f64, scale: f64) -> Self {
        Self { cx, base_y, scale }
    }

    /// Glow behind the flame: 3px rings, linear falloff from alpha 40.
    pub fn glow(&self) -> Glow {
        Glow {
            radius: (200.0 * self.scale) as u32,
            step: 3,
            peak_alpha: 40,
            falloff: Falloff::Linear,
            colour: DEEP_ORANGE,
        }
    }

    /// Outer, middle and inner shapes, back to front.
    pub fn layers(&self) -> [FlameShape; 3] {
        let s = self.scale;
        let shape = |offset: f64, width: f64, height: f64, bottom, top| FlameShape {
            cx: self.cx,
            base_y: self.base_y + offset * s,
            width: width * s,
            height: height * s,
            bottom,
            top,
            alpha: 255,
        };
        [
            shape(0.0, 140.0, 280.0, RED, DEEP_ORANGE),
            shape(10.0, 90.0, 220.0, DEEP_ORANGE, ORANGE),
            shape(20.0, 50.0, 160.0, ORANGE, WARM_YELLOW),
        ]
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        self.draw_glow(canvas);
        for layer in self.layers() {
            layer.draw(canvas);
        }
        self.draw_core(canvas);
    }

    /// Rings share a fixed bottom edge below the base and grow upwards.
    fn draw_glow(&self, canvas: &mut Canvas) {
        let glow = self.glow();
        let lift = (50.0 * self.scale).trunc();
        let bottom = self.base_y + (100.0 * self.scale).trunc();
        for r in glow.radii() {
            let r_f = r as f64;
            let bbox = BoundingBox::new(
                self.cx - r_f,
                self.base_y - r_f - lift,
                self.cx + r_f,
                bottom,
            );
            canvas.fill_ellipse(bbox, glow.colour.with_alpha(glow.alpha_at(r)));
        }
    }

    /// A column of shrinking, fading ellipses just above the base.
    fn draw_core(&self, canvas: &mut Canvas) {
        let core_w = (25.0 * self.scale).trunc();
        let core_h = (80.0 * self.scale) as u32;
        let drop = (10.0 * self.scale).trunc();
        for i in 0..core_h {
            let t = i as f64 / core_h as f64;
            let w = core_w * (1.0 - t * 0.8);
            let y = self.base_y - i as f64 + drop;
            let alpha = (200.0 * (1.0 - t * 0.5)) as u8;
            let bbox = BoundingBox::around(self.cx, y, w, w * 0.3);
            canvas.fill_ellipse(bbox, CORE.with_alpha(alpha));
        }
    }
}
