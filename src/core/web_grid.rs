use crate::core::Vertex;
use crate::core::geometry::{AxisAngleTable, AxisBuffer};
use crate::error::{ChartError, ChartResult};

/// One concentric regular N-gon of the web.
#[derive(Debug, Clone, PartialEq)]
pub struct WebRing {
    /// 1-based subdivision index; `level == ring_count` is the outer edge.
    pub level: u32,
    pub radius: f64,
    pub vertices: AxisBuffer<Vertex>,
}

/// Radial axis line from the center to the outer ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WebSpoke {
    pub axis_index: usize,
    pub start: Vertex,
    pub end: Vertex,
}

/// Background mesh of a spider chart.
///
/// `rings` are ordered innermost first, so the last ring is the outer edge.
#[derive(Debug, Clone, PartialEq)]
pub struct WebGrid {
    pub rings: Vec<WebRing>,
    pub spokes: Vec<WebSpoke>,
}

impl WebGrid {
    #[must_use]
    pub fn outer_ring(&self) -> Option<&WebRing> {
        self.rings.last()
    }

    /// Rings strictly inside the outer edge.
    #[must_use]
    pub fn inner_rings(&self) -> &[WebRing] {
        match self.rings.split_last() {
            Some((_, inner)) => inner,
            None => &[],
        }
    }
}

pub fn build_web_grid(
    angles: &AxisAngleTable,
    center: Vertex,
    outer_radius: f64,
    ring_count: u32,
) -> ChartResult<WebGrid> {
    if ring_count == 0 {
        return Err(ChartError::InvalidConfiguration(
            "web ring count must be >= 1".to_owned(),
        ));
    }
    if !outer_radius.is_finite() || outer_radius < 0.0 {
        return Err(ChartError::InvalidConfiguration(
            "outer radius must be finite and >= 0".to_owned(),
        ));
    }

    let rings = (1..=ring_count)
        .map(|level| {
            let radius = outer_radius * f64::from(level) / f64::from(ring_count);
            WebRing {
                level,
                radius,
                vertices: angles.ring_points(radius, center),
            }
        })
        .collect();

    let spokes = angles
        .ring_points(outer_radius, center)
        .into_iter()
        .enumerate()
        .map(|(axis_index, end)| WebSpoke {
            axis_index,
            start: center,
            end,
        })
        .collect();

    Ok(WebGrid { rings, spokes })
}

#[cfg(test)]
mod tests {
    use super::build_web_grid;
    use crate::core::Vertex;
    use crate::core::geometry::{AngleReference, AxisAngleTable};

    #[test]
    fn single_ring_grid_has_no_inner_rings() {
        let angles = AxisAngleTable::new(5, 0.0, AngleReference::Up).expect("angles");
        let grid = build_web_grid(&angles, Vertex::new(0.0, 0.0), 10.0, 1).expect("grid");
        assert_eq!(grid.rings.len(), 1);
        assert!(grid.inner_rings().is_empty());
        assert_eq!(grid.outer_ring().map(|ring| ring.radius), Some(10.0));
    }

    #[test]
    fn zero_rings_is_rejected() {
        let angles = AxisAngleTable::new(3, 0.0, AngleReference::Up).expect("angles");
        assert!(build_web_grid(&angles, Vertex::new(0.0, 0.0), 10.0, 0).is_err());
    }
}
