use crate::error::{OffsetError, Result};
use crate::geometry::{ArcDir, Curve, Span, Vertex};
use crate::math::Point;

use super::clears_original;

/// Builds the direct offset of `curve`: every span offset on its own, then
/// neighbours joined at each corner.
///
/// Where the offset spans overlap they are trimmed back to their
/// intersection; where they leave a gap a roll arc about the original corner
/// bridges it. Null spans are skipped. A closed curve gets a seam junction
/// between its last and first spans and stays closed.
///
/// # Errors
///
/// Returns `OffsetError::ArcCollapsed` if an arc shrinks away,
/// `OffsetError::NoJunction` if overlapping spans do not meet, and
/// `OffsetError::JunctionInterferes` if they meet too close to `curve`.
pub fn build(curve: &Curve, distance: f64) -> Result<Vec<Vertex>> {
    let sources: Vec<Span> = curve.spans().filter(|s| !s.is_null()).collect();
    let Some(first) = sources.first() else {
        return Ok(curve.vertices().to_vec());
    };

    let offsets = sources
        .iter()
        .map(|s| s.offset(distance))
        .collect::<Result<Vec<Span>>>()?;

    let mut out = Vec::with_capacity(offsets.len() * 2 + 1);
    out.push(Vertex::line(offsets[0].start()));

    for (i, off) in offsets.iter().enumerate() {
        if i > 0 {
            let joint = Joint {
                prev: &offsets[i - 1],
                next: off,
                corner: sources[i].start(),
                index: i,
            };
            match joint.resolve(curve, distance)? {
                Junction::Join => {}
                Junction::Trim(hit) => {
                    if let Some(last) = out.last_mut() {
                        last.p = hit;
                    }
                }
                Junction::Roll(arc) => out.push(arc),
            }
        }
        out.push(off.end_vertex());
    }

    if curve.is_closed() {
        let joint = Joint {
            prev: &offsets[offsets.len() - 1],
            next: &offsets[0],
            corner: first.start(),
            index: 0,
        };
        match joint.resolve(curve, distance)? {
            Junction::Join => {}
            Junction::Trim(hit) => {
                out[0].p = hit;
                if let Some(last) = out.last_mut() {
                    last.p = hit;
                }
            }
            Junction::Roll(arc) => out.push(arc.with_point(out[0].p)),
        }
        let start = out[0].p;
        if let Some(last) = out.last_mut() {
            last.p = start;
        }
    }

    Ok(out)
}

/// The corner between two consecutive offset spans.
struct Joint<'a> {
    prev: &'a Span,
    next: &'a Span,
    /// The source curve's vertex both spans were offset from.
    corner: Point,
    index: usize,
}

enum Junction {
    Join,
    Trim(Point),
    Roll(Vertex),
}

impl Joint<'_> {
    fn resolve(&self, original: &Curve, distance: f64) -> Result<Junction> {
        let tol = original.tolerances();
        if self.prev.end().dist(self.next.start()) <= tol.linear {
            return Ok(Junction::Join);
        }

        let turn = self.prev.direction_at(1.0) ^ self.next.direction_at(0.0);
        let overlapping = (turn > 0.0 && distance > 0.0) || (turn < 0.0 && distance < 0.0);
        if !overlapping {
            let dir = if distance < 0.0 { ArcDir::Ccw } else { ArcDir::Cw };
            return Ok(Junction::Roll(Vertex::arc(
                dir,
                self.next.start(),
                self.corner,
            )));
        }

        let hit = self
            .prev
            .intersect(self.next)
            .into_iter()
            .min_by(|a, b| a.dist(self.corner).total_cmp(&b.dist(self.corner)))
            .ok_or(OffsetError::NoJunction { index: self.index })?;
        if !clears_original(hit, original, distance) {
            return Err(OffsetError::JunctionInterferes { index: self.index }.into());
        }
        Ok(Junction::Trim(hit))
    }
}
