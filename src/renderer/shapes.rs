//! Shape generation for 2D primitives

use super::vertex::Vertex;

/// Two triangles covering an axis-aligned rectangle
pub fn rect(x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) -> [Vertex; 6] {
    let (x0, y0, x1, y1) = (x, y, x + w, y + h);
    [
        Vertex::new(x0, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Map a point in court pixels (y down) to normalized device coordinates (y up)
#[inline]
pub fn court_to_ndc(x: f32, y: f32, court_width: f32, court_height: f32) -> (f32, f32) {
    (x / court_width * 2.0 - 1.0, 1.0 - y / court_height * 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_corners() {
        let verts = rect(10.0, 20.0, 30.0, 40.0, [1.0; 4]);
        let mut xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let mut ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        xs.dedup();
        ys.sort_by(|a, b| a.partial_cmp(b).unwrap());
        ys.dedup();
        assert!(xs.iter().all(|&x| x == 10.0 || x == 40.0));
        assert_eq!(ys, vec![20.0, 60.0]);
    }

    #[test]
    fn test_court_to_ndc() {
        assert_eq!(court_to_ndc(0.0, 0.0, 800.0, 400.0), (-1.0, 1.0));
        assert_eq!(court_to_ndc(800.0, 400.0, 800.0, 400.0), (1.0, -1.0));
        assert_eq!(court_to_ndc(400.0, 200.0, 800.0, 400.0), (0.0, 0.0));
    }
}
