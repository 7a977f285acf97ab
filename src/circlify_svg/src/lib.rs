//! Renders circlify layouts to SVG for debugging.
//!
//! [`SvgRender`] plugs into [`circlify::Circlify::render_with`] and keeps one
//! document per stage of the run.

use circlify::{Circle, Render};
use log::debug;
use std::fmt::Display;
use std::io::{self, Write};
use std::path::Path;
use svg::node::element::{Circle as SVGCircle, Text};
use svg::Document;

#[derive(Default)]
pub struct SvgRender {
    lim: Option<f64>,
    frames: Vec<Document>,
}

impl SvgRender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixes the view to `[-lim, lim]` on both axes instead of fitting it to
    /// each frame.
    pub fn with_limit(lim: f64) -> Self {
        Self {
            lim: Some(lim),
            frames: Vec::new(),
        }
    }

    pub fn frames(&self) -> &[Document] {
        &self.frames
    }

    pub fn write_last<W: Write>(&self, out: W) -> io::Result<()> {
        match self.frames.last() {
            Some(document) => svg::write(out, document),
            None => Ok(()),
        }
    }

    /// Writes every frame as `frame_000.svg`, `frame_001.svg`, ... into `dir`.
    pub fn save_frames<P: AsRef<Path>>(&self, dir: P) -> io::Result<()> {
        for (i, document) in self.frames.iter().enumerate() {
            let path = dir.as_ref().join(format!("frame_{:03}.svg", i));
            debug!("writing {}", path.display());
            svg::save(&path, document)?;
        }
        Ok(())
    }
}

impl<L: Display> Render<L> for SvgRender {
    fn render(&mut self, circles: &[(L, Circle)], enclosure: Option<&Circle>) {
        self.frames.push(make_document(circles, enclosure, self.lim));
    }
}

/// Half the side of a square view, centered on the origin, that shows every
/// circle.
pub fn view_limit<L>(circles: &[(L, Circle)], enclosure: Option<&Circle>) -> f64 {
    let lim = circles
        .iter()
        .map(|(_, circle)| circle)
        .chain(enclosure)
        .map(|c| (c.x().abs() + c.radius).max(c.y().abs() + c.radius))
        .fold(0.0, f64::max);

    if lim > 0.0 {
        lim
    } else {
        1.0
    }
}

/// Draws `circles` with their labels, and `enclosure` shaded in red.
///
/// SVG's y axis points down, so y coordinates are flipped.
pub fn make_document<L: Display>(
    circles: &[(L, Circle)],
    enclosure: Option<&Circle>,
    lim: Option<f64>,
) -> Document {
    let lim = lim.unwrap_or_else(|| view_limit(circles, enclosure));
    let stroke_width = lim / 200.0;

    let mut document = Document::new().set("viewBox", (-lim, -lim, 2.0 * lim, 2.0 * lim));

    if let Some(e) = enclosure {
        document = document.add(
            SVGCircle::new()
                .set("fill", "#ff0000")
                .set("fill-opacity", 0.2)
                .set("stroke", "#ff0000")
                .set("stroke-width", stroke_width)
                .set("cx", e.x())
                .set("cy", -e.y())
                .set("r", e.radius),
        );
    }

    for (label, circle) in circles {
        document = document
            .add(
                SVGCircle::new()
                    .set("fill", "none")
                    .set("stroke", "#000000")
                    .set("stroke-width", stroke_width)
                    .set("cx", circle.x())
                    .set("cy", -circle.y())
                    .set("r", circle.radius),
            )
            .add(
                Text::new()
                    .set("x", circle.x())
                    .set("y", -circle.y())
                    .set("text-anchor", "middle")
                    .set("font-size", lim / 20.0)
                    .add(svg::node::Text::new(label.to_string())),
            );
    }

    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use circlify::{Circlify, Config};

    #[test]
    fn limit_covers_every_circle() {
        let circles = [("a", Circle::new(1.0, 0.0, 1.0)), ("b", Circle::new(0.0, -3.0, 0.5))];
        assert_eq!(view_limit(&circles, None), 3.5);
        assert_eq!(view_limit(&circles, Some(&Circle::new(0.0, 0.0, 5.0))), 5.0);
        assert_eq!(view_limit::<&str>(&[], None), 1.0);
    }

    #[test]
    fn document_has_a_circle_per_entry() {
        let circles = [("a", Circle::new(1.0, 0.0, 1.0)), ("b", Circle::new(-1.0, 0.0, 1.0))];
        let svg = make_document(&circles, Some(&Circle::new(0.0, 0.0, 2.0)), None).to_string();

        assert_eq!(svg.matches("<circle").count(), 3);
        assert_eq!(svg.matches("#ff0000").count(), 2);
        assert_eq!(svg.matches("<text").count(), 2);
        assert!(svg.contains(">\na\n</text>"));
        assert!(svg.contains(">\nb\n</text>"));
    }

    #[test]
    fn records_each_stage_of_a_run() {
        let mut render = SvgRender::new();
        Circlify::<&str>::new(Config::default().seed(1))
            .render_with(&mut render)
            .run(vec![("big", 9.0), ("mid", 4.0), ("small", 1.0)])
            .unwrap();

        assert_eq!(render.frames().len(), 3);

        let mut out: Vec<u8> = Vec::new();
        render.write_last(&mut out).unwrap();
        let svg = String::from_utf8(out).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("small"));
    }

    #[test]
    fn empty_render_writes_nothing() {
        let render = SvgRender::with_limit(1.0);
        let mut out: Vec<u8> = Vec::new();
        render.write_last(&mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn saves_numbered_frames() {
        let dir = std::env::temp_dir().join(format!("circlify_svg_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let mut render = SvgRender::with_limit(1.0);
        Render::<&str>::render(&mut render, &[("a", Circle::UNIT)], None);
        Render::<&str>::render(&mut render, &[("a", Circle::UNIT)], Some(&Circle::UNIT));
        render.save_frames(&dir).unwrap();

        assert!(dir.join("frame_000.svg").exists());
        assert!(dir.join("frame_001.svg").exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
