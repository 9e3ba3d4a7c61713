//! JSON view of a derived scene.

use serde_json::{json, Value};
use untangle::prelude::*;

fn point(p: Vec2) -> Value {
    json!([p.x, p.y])
}

pub fn scene_json(scene: &Scene) -> Value {
    let crossings: Vec<Value> = scene
        .crossings
        .iter()
        .map(|c| json!({"first": c.first, "second": c.second, "point": point(c.point)}))
        .collect();
    json!({
        "vertices": scene.vertices.iter().copied().map(point).collect::<Vec<_>>(),
        "edges": scene.edges.iter().map(|e| json!([e.from, e.to])).collect::<Vec<_>>(),
        "crossings": crossings,
        "crossing_count": scene.crossing_count(),
        "solved": scene.is_solved(),
        "selection": scene.selection.iter().collect::<Vec<_>>(),
        "selection_rect": scene.selection_rect.map(|r| json!({
            "corner": point(r.corner),
            "extent": point(r.extent),
        })),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn scene_fields_are_listed() {
        let g = Graph::new(
            vec![
                vector![0.0, 0.0],
                vector![1.0, 1.0],
                vector![0.0, 1.0],
                vector![1.0, 0.0],
            ],
            vec![Edge::new(0, 1), Edge::new(2, 3)],
        )
        .unwrap();
        let s = Session::new(g, ViewCfg::default());
        let doc = scene_json(&s.scene());
        assert_eq!(doc["crossing_count"], 1);
        assert_eq!(doc["solved"], false);
        assert_eq!(doc["edges"][1], json!([2, 3]));
        assert_eq!(doc["vertices"][1], json!([1200.0, 700.0]));
        assert!(doc["selection_rect"].is_null());
        assert_eq!(doc["crossings"][0]["point"], json!([600.0, 350.0]));
    }
}
